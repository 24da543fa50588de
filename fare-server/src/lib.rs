//! Cheapest fare planner server.
//!
//! A web application that answers: "what is the cheapest way to fly
//! between these two airports, or these two cities?"

pub mod config;
pub mod dataset;
pub mod domain;
pub mod graph;
pub mod network;
pub mod planner;
pub mod web;
