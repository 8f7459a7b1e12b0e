// src/engine/dates.rs

//! Calendar date parsing for itinerary and filter dates.
//!
//! Itineraries carry `DD/MM/YYYY`; the date picker produces display dates of
//! the form `D MonthName YYYY` (e.g. `5 March 2025`). Both are plain calendar
//! dates without a time component. Anything that does not parse yields `None`.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};

use crate::models::{DateRange, Itinerary};

/// English month names, January first.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Parse an itinerary date (`DD/MM/YYYY`, padding optional).
pub fn parse_itinerary_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.trim().split('/');
    let day = parts.next()?.trim().parse().ok()?;
    let month = parts.next()?.trim().parse().ok()?;
    let year = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Parse a display date (`D MonthName YYYY`).
pub fn parse_display_date(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split_whitespace();
    let day = parts.next()?.parse().ok()?;
    let month_name = parts.next()?;
    let year = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    let month = MONTHS.iter().position(|m| *m == month_name)? as u32 + 1;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Format a date for display (`D MonthName YYYY`).
pub fn format_display_date(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MONTHS[date.month0() as usize],
        date.year()
    )
}

/// Distinct departure dates across all itineraries, in calendar order.
pub fn sailing_dates(itineraries: &[Itinerary]) -> BTreeSet<NaiveDate> {
    itineraries
        .iter()
        .filter_map(|it| parse_itinerary_date(&it.start_date))
        .collect()
}

/// Earliest and latest departure date, if any itinerary has a valid one.
pub fn sailing_window(itineraries: &[Itinerary]) -> Option<(NaiveDate, NaiveDate)> {
    let dates = sailing_dates(itineraries);
    Some((*dates.first()?, *dates.last()?))
}

/// A date range resolved to calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DateConstraint {
    Any,
    On(NaiveDate),
    Between(NaiveDate, NaiveDate),
    /// A filter date failed to parse: nothing can match
    Unsatisfiable,
}

impl DateConstraint {
    pub(crate) fn from_range(range: &DateRange) -> Self {
        let parse = |s: &String| {
            let date = parse_display_date(s);
            if date.is_none() {
                log::debug!("Ignoring unparseable filter date '{s}'");
            }
            date
        };

        match range.dates() {
            [] => DateConstraint::Any,
            [only] => parse(only).map_or(DateConstraint::Unsatisfiable, DateConstraint::On),
            [start, end, ..] => match (parse(start), parse(end)) {
                (Some(start), Some(end)) => DateConstraint::Between(start, end),
                _ => DateConstraint::Unsatisfiable,
            },
        }
    }

    /// Whether an itinerary start date (`DD/MM/YYYY`) satisfies the constraint.
    pub(crate) fn admits(&self, start_date: &str) -> bool {
        if *self == DateConstraint::Any {
            return true;
        }
        let Some(date) = parse_itinerary_date(start_date) else {
            log::debug!("Itinerary start date '{start_date}' does not parse");
            return false;
        };
        match *self {
            DateConstraint::Any => true,
            DateConstraint::On(day) => date == day,
            DateConstraint::Between(start, end) => start <= date && date <= end,
            DateConstraint::Unsatisfiable => false,
        }
    }
}
