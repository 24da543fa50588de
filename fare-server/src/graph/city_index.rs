//! City → airport lookup for city-granularity queries.

use std::collections::{BTreeMap, BTreeSet};

use crate::domain::{AirportCode, RouteRecord};

/// Airports serving each city, sorted and deduplicated.
///
/// City names are trimmed but otherwise compared exactly, so "Tampa, FL" and
/// "tampa, fl" are different cities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityAirportIndex {
    cities: BTreeMap<String, BTreeSet<AirportCode>>,
}

impl CityAirportIndex {
    /// Build the index from both endpoints of every record.
    pub fn from_records(records: &[RouteRecord]) -> Self {
        let mut cities: BTreeMap<String, BTreeSet<AirportCode>> = BTreeMap::new();

        for record in records {
            let sides = [
                (&record.origin_city, &record.origin_airport),
                (&record.destination_city, &record.destination_airport),
            ];

            for (city, airport) in sides {
                let city = city.trim();
                if city.is_empty() {
                    continue;
                }
                let Ok(code) = AirportCode::parse_normalized(airport) else {
                    continue;
                };
                cities.entry(city.to_string()).or_default().insert(code);
            }
        }

        Self { cities }
    }

    /// Returns the airports serving a city.
    pub fn airports_for(&self, city: &str) -> Option<&BTreeSet<AirportCode>> {
        self.cities.get(city.trim())
    }

    /// Returns all cities in sorted order.
    pub fn cities(&self) -> impl Iterator<Item = &str> {
        self.cities.keys().map(String::as_str)
    }

    /// Returns every city with its airports, in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<AirportCode>)> {
        self.cities.iter().map(|(city, airports)| (city.as_str(), airports))
    }

    /// Returns the number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns true if no city is indexed.
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
