// src/models/itinerary.rs

//! Itinerary data structure as delivered by the cruise API.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::payload::null_as_default;
use crate::utils::group_thousands;

/// Booking status of an itinerary that is open for booking.
pub const STATUS_BOOKING: &str = "BOOKING";

/// An identifier the API sends either as a number or as a string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum Identifier {
    Number(i64),
    Text(String),
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Identifier::Number(n) => write!(f, "{n}"),
            Identifier::Text(s) => f.write_str(s),
        }
    }
}

/// A port reference embedded in an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortRef {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Identifier>,
}

impl PortRef {
    /// Create a port reference carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            id: None,
        }
    }

    /// The port name, if present and non-empty.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// The ship operating an itinerary.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Ship {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

/// One sellable cruise voyage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Itinerary {
    /// Itinerary identifier
    #[serde(default)]
    pub itinerary_id: Option<Identifier>,

    /// Port the voyage departs from
    #[serde(default)]
    pub starting_port: Option<PortRef>,

    /// Port the voyage ends at
    #[serde(default)]
    pub destination_port: Option<PortRef>,

    /// Ordered stops of the route
    #[serde(default, deserialize_with = "null_as_default")]
    pub ports: Vec<PortRef>,

    /// Trip length in nights
    #[serde(default, deserialize_with = "null_as_default")]
    pub nights: u32,

    /// Departure date, `DD/MM/YYYY`
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_date: String,

    /// Return date, `DD/MM/YYYY`
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_date: String,

    /// Trip type as sent by the API (e.g. `one_way`, `round`)
    #[serde(default)]
    pub trip_type: Option<String>,

    /// Booking status (e.g. `BOOKING`)
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,

    /// Starting fare
    #[serde(default, deserialize_with = "null_as_default")]
    pub starting_fare: f64,

    /// Rate per guest per night
    #[serde(default, deserialize_with = "null_as_default")]
    pub per_guest_per_night: f64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inclusions: Option<Vec<String>>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub offers_present: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers_available: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship: Option<Ship>,
}

impl Itinerary {
    /// Name of the departure port, if known.
    pub fn starting_port_name(&self) -> Option<&str> {
        self.starting_port.as_ref().and_then(PortRef::name)
    }

    /// Name of the final port, if known.
    pub fn destination_port_name(&self) -> Option<&str> {
        self.destination_port.as_ref().and_then(PortRef::name)
    }

    /// Every distinct port name this itinerary touches: start, end and each
    /// route stop. Empty and missing names are dropped.
    pub fn port_names(&self) -> HashSet<&str> {
        self.starting_port_name()
            .into_iter()
            .chain(self.destination_port_name())
            .chain(self.ports.iter().filter_map(PortRef::name))
            .collect()
    }

    /// Trip length in days (nights + 1).
    pub fn days(&self) -> u32 {
        self.nights + 1
    }

    /// Card headline, e.g. `Mumbai - Goa (4N/5D)`.
    pub fn title(&self) -> String {
        format!(
            "{} - {} ({}N/{}D)",
            self.starting_port_name().unwrap_or("?"),
            self.destination_port_name().unwrap_or("?"),
            self.nights,
            self.days()
        )
    }

    /// Route stops joined with arrows.
    pub fn route(&self) -> String {
        self.ports
            .iter()
            .filter_map(PortRef::name)
            .collect::<Vec<_>>()
            .join(" → ")
    }

    /// Whether the itinerary can currently be booked.
    pub fn is_bookable(&self) -> bool {
        self.status == STATUS_BOOKING
    }

    /// Label for the booking action: "Book Now" or the raw status.
    pub fn booking_label(&self) -> &str {
        if self.is_bookable() {
            "Book Now"
        } else {
            &self.status
        }
    }

    /// Offers to show; empty unless the offers flag is set.
    pub fn visible_offers(&self) -> &[String] {
        match &self.offers_available {
            Some(offers) if self.offers_present => offers.as_slice(),
            _ => &[],
        }
    }

    /// Trip type for display, underscores replaced by spaces.
    pub fn trip_type_label(&self) -> String {
        self.trip_type
            .as_deref()
            .map(|t| t.replacen('_', " ", 1))
            .unwrap_or_default()
    }

    /// Format the itinerary for display using a template.
    ///
    /// Supported placeholders:
    /// - `{id}`, `{title}`, `{start}`, `{destination}`, `{route}`, `{ship}`
    /// - `{nights}`, `{days}`, `{start_date}`, `{end_date}`, `{trip_type}`
    /// - `{status}`, `{fare}`, `{per_night}`, `{currency}`
    pub fn format(&self, template: &str, currency: &str) -> String {
        template
            .replace(
                "{id}",
                &self
                    .itinerary_id
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            )
            .replace("{title}", &self.title())
            .replace("{start}", self.starting_port_name().unwrap_or(""))
            .replace("{destination}", self.destination_port_name().unwrap_or(""))
            .replace("{route}", &self.route())
            .replace(
                "{ship}",
                self.ship.as_ref().map(|s| s.name.as_str()).unwrap_or(""),
            )
            .replace("{nights}", &self.nights.to_string())
            .replace("{days}", &self.days().to_string())
            .replace("{start_date}", &self.start_date)
            .replace("{end_date}", &self.end_date)
            .replace("{trip_type}", &self.trip_type_label())
            .replace("{status}", self.booking_label())
            .replace("{fare}", &group_thousands(self.starting_fare))
            .replace("{per_night}", &group_thousands(self.per_guest_per_night))
            .replace("{currency}", currency)
    }
}
