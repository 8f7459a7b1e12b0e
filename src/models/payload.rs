// src/models/payload.rs

//! Response body of the itinerary endpoint.

use serde::{Deserialize, Serialize};

use crate::models::{Itinerary, RawPort};

/// Everything a successful fetch hands to the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CruisePayload {
    #[serde(default, deserialize_with = "null_as_default")]
    pub itineraries: Vec<Itinerary>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub ports: Vec<RawPort>,
}

/// Read an explicit `null` the same way as a missing field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
