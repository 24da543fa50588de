//! Fare graph and city lookup built from fare records.

mod builder;
mod city_index;

pub use builder::{EdgeMetadata, RouteGraph, build_graph};
pub use city_index::CityAirportIndex;
