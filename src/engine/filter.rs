// src/engine/filter.rs

//! Itinerary filtering.
//!
//! An itinerary is kept only if it passes every active predicate; a predicate
//! whose filter field is empty always passes. The output is an
//! order-preserving subsequence of the input.

use std::collections::HashSet;

use crate::engine::dates::DateConstraint;
use crate::models::{ALL_TRIP_TYPES, FilterSelection, Itinerary, NightBucket};

/// A filter selection prepared for repeated matching.
#[derive(Debug, Clone)]
pub struct ItineraryFilter<'f> {
    destinations: HashSet<&'f str>,
    trip_type: Option<String>,
    dates: DateConstraint,
    nights: &'f [NightBucket],
    departure_port: Option<&'f str>,
}

impl<'f> ItineraryFilter<'f> {
    pub fn new(filters: &'f FilterSelection) -> Self {
        let trip_type = filters.trip_type.as_str();
        let trip_type = (!trip_type.is_empty() && !trip_type.eq_ignore_ascii_case(ALL_TRIP_TYPES))
            .then(|| trip_type.to_lowercase());

        Self {
            destinations: filters
                .selected_destinations
                .iter()
                .map(String::as_str)
                .collect(),
            trip_type,
            dates: DateConstraint::from_range(&filters.date_range),
            nights: &filters.nights,
            departure_port: Some(filters.departure_port.as_str()).filter(|p| !p.is_empty()),
        }
    }

    /// Whether an itinerary passes every active predicate.
    pub fn matches(&self, itinerary: &Itinerary) -> bool {
        self.matches_destination(itinerary)
            && self.matches_trip_type(itinerary)
            && self.dates.admits(&itinerary.start_date)
            && self.matches_nights(itinerary)
            && self.matches_departure_port(itinerary)
    }

    fn matches_destination(&self, itinerary: &Itinerary) -> bool {
        self.destinations.is_empty()
            || itinerary
                .port_names()
                .iter()
                .any(|name| self.destinations.contains(name))
    }

    fn matches_trip_type(&self, itinerary: &Itinerary) -> bool {
        match &self.trip_type {
            None => true,
            Some(wanted) => itinerary
                .trip_type
                .as_deref()
                .is_some_and(|t| t.to_lowercase() == *wanted),
        }
    }

    fn matches_nights(&self, itinerary: &Itinerary) -> bool {
        self.nights.is_empty()
            || self
                .nights
                .iter()
                .any(|bucket| bucket.contains(itinerary.nights))
    }

    fn matches_departure_port(&self, itinerary: &Itinerary) -> bool {
        match self.departure_port {
            None => true,
            Some(port) => itinerary.starting_port_name() == Some(port),
        }
    }
}

/// Itineraries matching the selection, in their original order.
pub fn filter_itineraries<'a>(
    itineraries: &'a [Itinerary],
    filters: &FilterSelection,
) -> Vec<&'a Itinerary> {
    let filter = ItineraryFilter::new(filters);
    itineraries.iter().filter(|it| filter.matches(it)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::models::{DateRange, FilterUpdate, PortRef};

    fn cruise(id: &str, start: &str, dest: &str, nights: u32, start_date: &str) -> Itinerary {
        Itinerary {
            itinerary_id: Some(crate::models::Identifier::Text(id.to_string())),
            starting_port: Some(PortRef::named(start)),
            destination_port: Some(PortRef::named(dest)),
            nights,
            start_date: start_date.to_string(),
            trip_type: Some("round".to_string()),
            ..Itinerary::default()
        }
    }

    fn fleet() -> Vec<Itinerary> {
        let mut via_lakshadweep = cruise("c", "Kochi", "Kochi", 5, "20/03/2025");
        via_lakshadweep.ports = vec![
            PortRef::named("Kochi"),
            PortRef::named("Lakshadweep"),
            PortRef::named("Kochi"),
        ];
        let mut one_way = cruise("d", "Chennai", "Vizag", 8, "02/04/2025");
        one_way.trip_type = Some("ONE_WAY".to_string());

        vec![
            cruise("a", "Mumbai", "Goa", 4, "01/03/2025"),
            cruise("b", "Goa", "Mumbai", 2, "05/03/2025"),
            via_lakshadweep,
            one_way,
            cruise("e", "Mumbai", "Mumbai", 7, "15/03/2025"),
        ]
    }

    fn ids(result: &[&Itinerary]) -> Vec<String> {
        result
            .iter()
            .map(|it| it.itinerary_id.as_ref().unwrap().to_string())
            .collect()
    }

    fn with(update: FilterUpdate) -> FilterSelection {
        let mut selection = FilterSelection::default();
        selection.apply(update);
        selection
    }

    #[test]
    fn empty_selection_is_identity() {
        let its = fleet();
        let result = filter_itineraries(&its, &FilterSelection::default());
        assert_eq!(ids(&result), ["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let filters = with(FilterUpdate::default().destinations(["Goa"]));
        assert!(filter_itineraries(&[], &filters).is_empty());
    }

    #[test]
    fn destination_matches_start_end_or_route() {
        let its = fleet();
        let result = filter_itineraries(&its, &with(FilterUpdate::default().destinations(["Goa"])));
        assert_eq!(ids(&result), ["a", "b"]);

        let result = filter_itineraries(
            &its,
            &with(FilterUpdate::default().destinations(["Lakshadweep", "Vizag"])),
        );
        assert_eq!(ids(&result), ["c", "d"]);
    }

    #[test]
    fn destination_match_is_case_sensitive() {
        let its = fleet();
        let result = filter_itineraries(&its, &with(FilterUpdate::default().destinations(["goa"])));
        assert!(result.is_empty());
    }

    #[test]
    fn trip_type_ignores_case() {
        let its = fleet();
        let result = filter_itineraries(&its, &with(FilterUpdate::default().trip_type("one_way")));
        assert_eq!(ids(&result), ["d"]);

        let result = filter_itineraries(&its, &with(FilterUpdate::default().trip_type("ROUND")));
        assert_eq!(ids(&result), ["a", "b", "c", "e"]);
    }

    #[test]
    fn trip_type_all_is_inactive() {
        let its = fleet();
        let result = filter_itineraries(&its, &with(FilterUpdate::default().trip_type("All")));
        assert_eq!(result.len(), its.len());
    }

    #[test]
    fn trip_type_is_not_trimmed() {
        let its = fleet();
        let result = filter_itineraries(&its, &with(FilterUpdate::default().trip_type(" round ")));
        assert!(result.is_empty());

        let result = filter_itineraries(&its, &with(FilterUpdate::default().trip_type("   ")));
        assert!(result.is_empty());
    }

    #[test]
    fn missing_trip_type_never_matches() {
        let mut it = cruise("x", "Mumbai", "Goa", 4, "01/03/2025");
        it.trip_type = None;
        let its = vec![it];
        let result = filter_itineraries(&its, &with(FilterUpdate::default().trip_type("round")));
        assert!(result.is_empty());
    }

    #[test]
    fn single_date_matches_exactly() {
        let its = fleet();
        let day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let result =
            filter_itineraries(&its, &with(FilterUpdate::default().date_range(DateRange::on(day))));
        assert_eq!(ids(&result), ["b"]);
    }

    #[test]
    fn date_range_is_inclusive() {
        let its = vec![
            cruise("in", "Mumbai", "Goa", 4, "05/03/2025"),
            cruise("edge", "Mumbai", "Goa", 4, "10/03/2025"),
            cruise("out", "Mumbai", "Goa", 4, "15/03/2025"),
        ];
        let range: DateRange =
            serde_json::from_str(r#"["1 March 2025", "10 March 2025"]"#).unwrap();
        let result = filter_itineraries(&its, &with(FilterUpdate::default().date_range(range)));
        assert_eq!(ids(&result), ["in", "edge"]);
    }

    #[test]
    fn unparseable_itinerary_date_is_excluded_only_when_dates_are_filtered() {
        let its = vec![cruise("bad", "Mumbai", "Goa", 4, "soon")];
        assert_eq!(filter_itineraries(&its, &FilterSelection::default()).len(), 1);

        let day = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        let filters = with(FilterUpdate::default().date_range(DateRange::on(day)));
        assert!(filter_itineraries(&its, &filters).is_empty());
    }

    #[test]
    fn seven_nights_sits_in_both_edge_buckets() {
        let its = vec![cruise("seven", "Mumbai", "Goa", 7, "01/03/2025")];
        for key in ["5-7", "7+"] {
            let bucket: NightBucket = key.parse().unwrap();
            let filters = with(FilterUpdate::default().nights([bucket]));
            assert_eq!(filter_itineraries(&its, &filters).len(), 1, "bucket {key}");
        }
        let filters = with(FilterUpdate::default().nights(["2-3".parse().unwrap()]));
        assert!(filter_itineraries(&its, &filters).is_empty());
    }

    #[test]
    fn any_selected_bucket_suffices() {
        let its = fleet();
        let filters = with(FilterUpdate::default().nights([
            NightBucket::Between { min: 2, max: 3 },
            NightBucket::AtLeast(8),
        ]));
        assert_eq!(ids(&filter_itineraries(&its, &filters)), ["b", "d"]);
    }

    #[test]
    fn combined_filters_scenario() {
        let its = vec![cruise("m", "Mumbai", "Goa", 4, "01/03/2025")];
        let filters = with(
            FilterUpdate::default()
                .nights(["3-5".parse().unwrap()])
                .trip_type("round")
                .departure_port("Mumbai"),
        );
        assert_eq!(filter_itineraries(&its, &filters).len(), 1);

        let filters = with(FilterUpdate::default().departure_port("Chennai"));
        assert!(filter_itineraries(&its, &filters).is_empty());
    }

    #[test]
    fn departure_port_ignores_destination_and_route() {
        let its = fleet();
        let result = filter_itineraries(&its, &with(FilterUpdate::default().departure_port("Goa")));
        assert_eq!(ids(&result), ["b"]);
    }

    #[test]
    fn refiltering_is_idempotent() {
        let its = fleet();
        let filters = with(
            FilterUpdate::default()
                .destinations(["Mumbai", "Kochi"])
                .nights([NightBucket::Between { min: 3, max: 5 }, NightBucket::AtLeast(7)]),
        );
        let first: Vec<Itinerary> = filter_itineraries(&its, &filters)
            .into_iter()
            .cloned()
            .collect();
        let second = filter_itineraries(&first, &filters);
        assert_eq!(ids(&second), ["a", "c", "e"]);
        assert_eq!(second.len(), first.len());
    }
}
