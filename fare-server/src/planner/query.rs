//! Route requests at airport or city granularity.

use crate::domain::AirportCode;
use crate::network::FareNetwork;

/// Error from resolving a route request into candidate airports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The airport has no fares in the dataset
    #[error("airport {0} is not in the fare dataset")]
    UnknownAirport(AirportCode),

    /// The city has no airports in the dataset
    #[error("city {0:?} has no airports in the fare dataset")]
    UnknownCity(String),

    /// An explicitly chosen airport does not serve the requested city
    #[error("airport {airport} does not serve {city:?}")]
    AirportNotInCity { city: String, airport: AirportCode },

    /// Both sides resolved to the same single airport
    #[error("origin and destination are both {0}; select two different airports")]
    SameAirport(AirportCode),
}

/// One side of a route request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// A specific airport.
    Airport(AirportCode),
    /// A city, optionally narrowed to one of its airports.
    City {
        name: String,
        airport: Option<AirportCode>,
    },
}

impl Endpoint {
    /// A city endpoint with no airport chosen.
    pub fn city(name: impl Into<String>) -> Self {
        Endpoint::City {
            name: name.into(),
            airport: None,
        }
    }

    /// Display label: the airport code, or the city name with the airport
    /// actually used in parentheses.
    pub fn label(&self, chosen: Option<&AirportCode>) -> String {
        match (self, chosen) {
            (Endpoint::Airport(code), _) => code.to_string(),
            (Endpoint::City { name, .. }, Some(code)) => format!("{name} ({code})"),
            (Endpoint::City { name, .. }, None) => name.clone(),
        }
    }

    fn resolve(&self, network: &FareNetwork, auto_select: bool) -> Result<Vec<AirportCode>, QueryError> {
        match self {
            Endpoint::Airport(code) => {
                if !network.graph().contains(code) {
                    return Err(QueryError::UnknownAirport(*code));
                }
                Ok(vec![*code])
            }
            Endpoint::City { name, airport } => {
                let airports = network
                    .cities()
                    .airports_for(name)
                    .filter(|set| !set.is_empty())
                    .ok_or_else(|| QueryError::UnknownCity(name.clone()))?;

                if auto_select {
                    return Ok(airports.iter().copied().collect());
                }

                match airport {
                    Some(code) if airports.contains(code) => Ok(vec![*code]),
                    Some(code) => Err(QueryError::AirportNotInCity {
                        city: name.clone(),
                        airport: *code,
                    }),
                    None => Ok(airports.iter().take(1).copied().collect()),
                }
            }
        }
    }
}

/// A request for the cheapest route between two endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteQuery {
    pub origin: Endpoint,
    pub destination: Endpoint,

    /// For city endpoints: search every airport pairing instead of a single
    /// chosen airport per side. Ignored for airport endpoints.
    pub auto_select: bool,
}

/// Candidate airports a query resolved to, in search order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    pub origins: Vec<AirportCode>,
    pub destinations: Vec<AirportCode>,
}

impl Candidates {
    /// Number of (origin, destination) pairings to search.
    pub fn pairings(&self) -> usize {
        self.origins.len() * self.destinations.len()
    }
}

impl RouteQuery {
    /// Airport-to-airport request.
    pub fn airports(origin: AirportCode, destination: AirportCode) -> Self {
        Self {
            origin: Endpoint::Airport(origin),
            destination: Endpoint::Airport(destination),
            auto_select: false,
        }
    }

    /// City-to-city request searching every airport pairing.
    pub fn cities(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: Endpoint::city(origin),
            destination: Endpoint::city(destination),
            auto_select: true,
        }
    }

    /// Resolve both endpoints into candidate airport sets.
    ///
    /// Without auto-selection each side is a single airport, and a request
    /// from an airport to itself is rejected.
    pub fn resolve(&self, network: &FareNetwork) -> Result<Candidates, QueryError> {
        let origins = self.origin.resolve(network, self.auto_select)?;
        let destinations = self.destination.resolve(network, self.auto_select)?;

        let single_pair = origins.len() == 1 && destinations.len() == 1;
        let auto = self.auto_select && self.has_city();
        if single_pair && !auto && origins[0] == destinations[0] {
            return Err(QueryError::SameAirport(origins[0]));
        }

        Ok(Candidates {
            origins,
            destinations,
        })
    }

    fn has_city(&self) -> bool {
        matches!(self.origin, Endpoint::City { .. }) || matches!(self.destination, Endpoint::City { .. })
    }
}
