// src/models/mod.rs

//! Domain models for the cruise search application.
//!
//! This module contains all data structures used throughout the application,
//! organized by their primary purpose.

mod config;
mod filter;
mod itinerary;
mod payload;
mod port;

// Re-export all public types
pub use config::{ApiConfig, Config, DisplayConfig, LoggingConfig};
pub use filter::{
    ALL_PORTS, ALL_TRIP_TYPES, DateRange, FilterSelection, FilterUpdate, NightBucket,
};
pub use itinerary::{Identifier, Itinerary, PortRef, STATUS_BOOKING, Ship};
pub use payload::CruisePayload;
pub use port::{KnownPort, PortWithCount, RawPort};
