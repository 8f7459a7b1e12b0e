// src/lib.rs

//! Cruise itinerary search library

pub mod engine;
pub mod error;
pub mod models;
pub mod services;
pub mod store;
pub mod utils;
