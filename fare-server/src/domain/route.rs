//! Fare records and the per-edge detail derived from them.

use super::AirportCode;

/// One fare observation between two airports, as ingested.
///
/// Airport codes are kept as raw strings: deciding which records are usable
/// is the graph builder's job, not the loader's.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteRecord {
    pub origin_city: String,
    pub destination_city: String,
    pub origin_airport: String,
    pub destination_airport: String,
    /// Average fare in dollars.
    pub fare: f64,
    pub passengers: Option<f64>,
    /// Non-stop distance in miles.
    pub miles: Option<f64>,
    /// Carrier with the largest market share on this pair.
    pub carrier: Option<String>,
}

impl RouteRecord {
    /// Create a record with only the required fields set.
    pub fn new(
        origin_city: impl Into<String>,
        destination_city: impl Into<String>,
        origin_airport: impl Into<String>,
        destination_airport: impl Into<String>,
        fare: f64,
    ) -> Self {
        Self {
            origin_city: origin_city.into(),
            destination_city: destination_city.into(),
            origin_airport: origin_airport.into(),
            destination_airport: destination_airport.into(),
            fare,
            passengers: None,
            miles: None,
            carrier: None,
        }
    }

    /// Set the passenger count.
    pub fn with_passengers(mut self, passengers: f64) -> Self {
        self.passengers = Some(passengers);
        self
    }

    /// Set the distance in miles.
    pub fn with_miles(mut self, miles: f64) -> Self {
        self.miles = Some(miles);
        self
    }

    /// Set the primary carrier.
    pub fn with_carrier(mut self, carrier: impl Into<String>) -> Self {
        self.carrier = Some(carrier.into());
        self
    }
}

/// Detail for one directed edge of the fare graph.
///
/// This is a `RouteRecord` with validated airport codes, oriented in the
/// direction of travel.
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeDetail {
    pub origin_city: String,
    pub destination_city: String,
    pub origin_airport: AirportCode,
    pub destination_airport: AirportCode,
    pub fare: f64,
    pub passengers: Option<f64>,
    pub miles: Option<f64>,
    pub carrier: Option<String>,
}

impl EdgeDetail {
    /// Build the forward edge for a record whose codes are already parsed.
    pub fn from_record(record: &RouteRecord, origin: AirportCode, destination: AirportCode) -> Self {
        Self {
            origin_city: record.origin_city.trim().to_string(),
            destination_city: record.destination_city.trim().to_string(),
            origin_airport: origin,
            destination_airport: destination,
            fare: record.fare,
            passengers: record.passengers,
            miles: record.miles,
            carrier: record.carrier.clone(),
        }
    }

    /// The same observation travelled in the opposite direction.
    pub fn mirrored(&self) -> Self {
        Self {
            origin_city: self.destination_city.clone(),
            destination_city: self.origin_city.clone(),
            origin_airport: self.destination_airport,
            destination_airport: self.origin_airport,
            fare: self.fare,
            passengers: self.passengers,
            miles: self.miles,
            carrier: self.carrier.clone(),
        }
    }
}

/// One leg of a resolved itinerary.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    detail: EdgeDetail,
}

impl Segment {
    pub fn new(detail: EdgeDetail) -> Self {
        Self { detail }
    }

    pub fn origin_airport(&self) -> &AirportCode {
        &self.detail.origin_airport
    }

    pub fn destination_airport(&self) -> &AirportCode {
        &self.detail.destination_airport
    }

    pub fn origin_city(&self) -> &str {
        &self.detail.origin_city
    }

    pub fn destination_city(&self) -> &str {
        &self.detail.destination_city
    }

    pub fn fare(&self) -> f64 {
        self.detail.fare
    }

    pub fn passengers(&self) -> Option<f64> {
        self.detail.passengers
    }

    pub fn miles(&self) -> Option<f64> {
        self.detail.miles
    }

    pub fn carrier(&self) -> Option<&str> {
        self.detail.carrier.as_deref()
    }

    /// Returns the underlying edge detail.
    pub fn detail(&self) -> &EdgeDetail {
        &self.detail
    }
}
