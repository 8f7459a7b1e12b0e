// src/store/mod.rs

//! Application state for the search page.
//!
//! `CruiseStore` owns the fetched itineraries, the known ports, the filter
//! selection and the fetch status. All mutation goes through its commands;
//! everything the presentation layer reads is derived on demand by the
//! `engine` functions.
//!
//! ## Fetch lifecycle
//!
//! ```text
//! Empty ──begin_fetch──▶ Loading ──ok──▶ Populated
//!                          │
//!                          └──err──▶ Errored
//! ```
//!
//! Any state may re-enter `Loading`. When fetches overlap, every completion
//! is applied in the order it arrives, so the last one observed wins.

use chrono::NaiveDate;

use crate::engine::{available_ports_with_counts, filter_itineraries, known_ports};
use crate::error::Result;
use crate::models::{
    CruisePayload, FilterSelection, FilterUpdate, Itinerary, KnownPort, NightBucket,
    PortWithCount,
};
use crate::services::CruiseSource;

/// Where the store is in its fetch lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Empty,
    Loading,
    Populated,
    Errored,
}

/// What the results area should show.
#[derive(Debug, Clone, PartialEq)]
pub enum ResultsView<'a> {
    /// No data yet: a fetch is in flight or has not started
    Loading,
    /// The last fetch failed; offer a retry
    Failed(&'a str),
    /// Data is present but nothing matches; offer to clear filters
    NoMatches,
    /// Matching itineraries, in source order
    Matches(Vec<&'a Itinerary>),
}

/// Single owned application state.
#[derive(Debug, Clone, Default)]
pub struct CruiseStore {
    itineraries: Vec<Itinerary>,
    known_ports: Vec<KnownPort>,
    filters: FilterSelection,
    state: LoadState,
    error: Option<String>,
}

impl CruiseStore {
    /// An empty store with an empty filter selection.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Read contract ---

    pub fn itineraries(&self) -> &[Itinerary] {
        &self.itineraries
    }

    pub fn known_ports(&self) -> &[KnownPort] {
        &self.known_ports
    }

    pub fn filters(&self) -> &FilterSelection {
        &self.filters
    }

    pub fn state(&self) -> LoadState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == LoadState::Loading
    }

    /// Message of the last failed fetch, cleared when a new fetch starts.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Itineraries matching the current filters.
    pub fn filtered_itineraries(&self) -> Vec<&Itinerary> {
        filter_itineraries(&self.itineraries, &self.filters)
    }

    /// Known ports with live itinerary counts.
    pub fn available_ports_with_counts(&self) -> Vec<PortWithCount> {
        available_ports_with_counts(&self.itineraries, &self.known_ports)
    }

    /// The results area state: loading, failure, no matches or matches.
    pub fn results(&self) -> ResultsView<'_> {
        if matches!(self.state, LoadState::Empty | LoadState::Loading) {
            return ResultsView::Loading;
        }
        if let Some(message) = self.error() {
            return ResultsView::Failed(message);
        }
        match self.filtered_itineraries() {
            matches if matches.is_empty() => ResultsView::NoMatches,
            matches => ResultsView::Matches(matches),
        }
    }

    // --- Filter commands ---

    /// Merge a partial update into the filter selection.
    pub fn update_filters(&mut self, update: FilterUpdate) {
        log::debug!("Applying filter update: {:?}", update);
        self.filters.apply(update);
    }

    /// Restore the empty filter selection.
    pub fn reset_filters(&mut self) {
        log::debug!("Resetting filters");
        self.filters.reset();
    }

    pub fn toggle_destination(&mut self, name: &str) {
        self.filters.toggle_destination(name);
    }

    pub fn toggle_night_bucket(&mut self, bucket: NightBucket) {
        self.filters.toggle_night_bucket(bucket);
    }

    /// Pick a calendar date; see [`crate::models::DateRange::select`].
    pub fn select_date(&mut self, date: NaiveDate) {
        self.filters.date_range.select(date);
    }

    pub fn clear_dates(&mut self) {
        self.filters.date_range.clear();
    }

    // --- Fetch commands ---

    /// Mark a fetch as started.
    pub fn begin_fetch(&mut self) {
        self.state = LoadState::Loading;
        self.error = None;
    }

    /// Apply the outcome of a fetch.
    ///
    /// Success replaces the itineraries and known ports wholesale. Failure
    /// keeps the previous data and records the error message.
    pub fn fetch_completed(&mut self, outcome: Result<CruisePayload>) {
        match outcome {
            Ok(payload) => {
                self.known_ports = known_ports(&payload.ports);
                self.itineraries = payload.itineraries;
                self.state = LoadState::Populated;
                log::info!(
                    "Store populated: {} itineraries, {} known ports",
                    self.itineraries.len(),
                    self.known_ports.len()
                );
            }
            Err(error) => {
                log::warn!("Itinerary fetch failed: {}", error);
                self.error = Some(error.to_string());
                self.state = LoadState::Errored;
            }
        }
    }

    /// Run one complete fetch cycle against a source.
    pub async fn fetch_cruise_data(&mut self, source: &dyn CruiseSource) {
        self.begin_fetch();
        let outcome = source.fetch_itineraries().await;
        self.fetch_completed(outcome);
    }
}
