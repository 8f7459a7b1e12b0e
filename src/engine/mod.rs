//! Derived state for the search page.
//!
//! - `filter`: itineraries matching a filter selection
//! - `ports`: known ports and per-port itinerary counts
//! - `dates`: itinerary/display date parsing and sailing dates
//!
//! Everything here is a pure function of its inputs.

pub mod dates;
pub mod filter;
pub mod ports;

pub use dates::{
    format_display_date, parse_display_date, parse_itinerary_date, sailing_dates, sailing_window,
};
pub use filter::{ItineraryFilter, filter_itineraries};
pub use ports::{
    available_ports_with_counts, known_ports, listed_ports, port_counts, sort_by_count_desc,
};
