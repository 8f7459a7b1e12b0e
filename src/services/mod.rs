//! Service layer for the cruise search application.
//!
//! This module contains the remote collaborators:
//! - Itinerary fetching (`CruiseClient`, behind the `CruiseSource` trait)

mod api;

pub use api::{CruiseClient, CruiseSource};
