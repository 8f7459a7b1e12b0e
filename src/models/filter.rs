// src/models/filter.rs

//! Filter selection and the partial updates applied to it.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::engine::dates::{format_display_date, parse_display_date};
use crate::error::AppError;

/// Trip type choice meaning "no constraint".
pub const ALL_TRIP_TYPES: &str = "all";

/// Departure port choice meaning "no constraint".
pub const ALL_PORTS: &str = "All Ports";

// --- Night buckets ---

/// A named, inclusive range of night counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum NightBucket {
    /// `A-B`: `A <= nights <= B`
    Between { min: u32, max: u32 },
    /// `N+`: `nights >= N`
    AtLeast(u32),
}

impl NightBucket {
    /// Buckets offered by the filter panel.
    pub const STANDARD: [NightBucket; 4] = [
        NightBucket::Between { min: 2, max: 3 },
        NightBucket::Between { min: 3, max: 5 },
        NightBucket::Between { min: 5, max: 7 },
        NightBucket::AtLeast(7),
    ];

    /// Whether a night count falls inside this bucket (bounds inclusive).
    pub fn contains(&self, nights: u32) -> bool {
        match *self {
            NightBucket::Between { min, max } => min <= nights && nights <= max,
            NightBucket::AtLeast(min) => nights >= min,
        }
    }

    /// Display label, e.g. `3-5 Nights`.
    pub fn label(&self) -> String {
        format!("{self} Nights")
    }
}

impl fmt::Display for NightBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NightBucket::Between { min, max } => write!(f, "{min}-{max}"),
            NightBucket::AtLeast(min) => write!(f, "{min}+"),
        }
    }
}

impl FromStr for NightBucket {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        let invalid = || AppError::validation(format!("Invalid night range '{key}'"));

        if let Some(min) = key.strip_suffix('+') {
            return min.parse().map(NightBucket::AtLeast).map_err(|_| invalid());
        }

        let (min, max) = key.split_once('-').ok_or_else(invalid)?;
        Ok(NightBucket::Between {
            min: min.parse().map_err(|_| invalid())?,
            max: max.parse().map_err(|_| invalid())?,
        })
    }
}

impl TryFrom<String> for NightBucket {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<NightBucket> for String {
    fn from(bucket: NightBucket) -> Self {
        bucket.to_string()
    }
}

// --- Date range ---

/// Zero, one or two display dates (`D MonthName YYYY`).
///
/// A pair is always stored earlier-first when both dates parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DateRange(Vec<String>);

impl DateRange {
    /// A single-day constraint.
    pub fn on(date: NaiveDate) -> Self {
        Self(vec![format_display_date(date)])
    }

    /// An inclusive range; the arguments may come in either order.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = if b < a { (b, a) } else { (a, b) };
        Self(vec![format_display_date(start), format_display_date(end)])
    }

    /// Record a picked date the way the calendar does: the first pick is an
    /// exact date, the second completes a range, a third starts over.
    pub fn select(&mut self, date: NaiveDate) {
        *self = match self.0.as_slice() {
            [first] => match parse_display_date(first) {
                Some(first) => Self::between(first, date),
                None => Self::on(date),
            },
            _ => Self::on(date),
        };
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn dates(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for DateRange {
    type Error = AppError;

    fn try_from(mut dates: Vec<String>) -> Result<Self, Self::Error> {
        if dates.len() > 2 {
            return Err(AppError::validation(format!(
                "A date range holds at most two dates, got {}",
                dates.len()
            )));
        }
        if let [a, b] = dates.as_slice() {
            if let (Some(a), Some(b)) = (parse_display_date(a), parse_display_date(b)) {
                if b < a {
                    dates.swap(0, 1);
                }
            }
        }
        Ok(Self(dates))
    }
}

impl From<DateRange> for Vec<String> {
    fn from(range: DateRange) -> Self {
        range.0
    }
}

// --- Selection ---

/// The user's current filter criteria. Empty fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterSelection {
    /// Port names, in the order they were picked
    pub selected_destinations: Vec<String>,
    pub date_range: DateRange,
    pub trip_type: String,
    pub nights: Vec<NightBucket>,
    pub departure_port: String,
}

impl FilterSelection {
    /// Whether no constraint is active.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Shallow-merge a partial update; fields absent from it are kept.
    pub fn apply(&mut self, update: FilterUpdate) {
        let FilterUpdate {
            selected_destinations,
            date_range,
            trip_type,
            nights,
            departure_port,
        } = update;

        if let Some(v) = selected_destinations {
            self.selected_destinations = v;
        }
        if let Some(v) = date_range {
            self.date_range = v;
        }
        if let Some(v) = trip_type {
            self.trip_type = v;
        }
        if let Some(v) = nights {
            self.nights = v;
        }
        if let Some(v) = departure_port {
            self.departure_port = v;
        }
    }

    /// Replace everything with the empty selection.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Add a destination if absent, remove it if present.
    pub fn toggle_destination(&mut self, name: &str) {
        toggle(&mut self.selected_destinations, name.to_string());
    }

    /// Add a night bucket if absent, remove it if present.
    pub fn toggle_night_bucket(&mut self, bucket: NightBucket) {
        toggle(&mut self.nights, bucket);
    }
}

fn toggle<T: PartialEq>(items: &mut Vec<T>, item: T) {
    match items.iter().position(|existing| *existing == item) {
        Some(idx) => {
            items.remove(idx);
        }
        None => items.push(item),
    }
}

/// A partial filter selection; `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_destinations: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trip_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights: Option<Vec<NightBucket>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub departure_port: Option<String>,
}

impl FilterUpdate {
    pub fn destinations<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_destinations = Some(names.into_iter().map(Into::into).collect());
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn trip_type(mut self, trip_type: impl Into<String>) -> Self {
        self.trip_type = Some(trip_type.into());
        self
    }

    /// Trip type from the picker; `all` clears the constraint.
    pub fn trip_type_choice(self, choice: &str) -> Self {
        if choice.eq_ignore_ascii_case(ALL_TRIP_TYPES) {
            self.trip_type("")
        } else {
            self.trip_type(choice)
        }
    }

    pub fn nights(mut self, buckets: impl IntoIterator<Item = NightBucket>) -> Self {
        self.nights = Some(buckets.into_iter().collect());
        self
    }

    pub fn departure_port(mut self, port: impl Into<String>) -> Self {
        self.departure_port = Some(port.into());
        self
    }

    /// Departure port from the picker; `All Ports` clears the constraint.
    pub fn departure_port_choice(self, choice: &str) -> Self {
        if choice == ALL_PORTS {
            self.departure_port("")
        } else {
            self.departure_port(choice)
        }
    }
}
