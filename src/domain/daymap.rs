//! Day-to-date mapping
//!
//! Resolves the weekday-named headings of a single note to concrete
//! calendar dates. A note is anchored either by its banner (year plus
//! day-of-year) or by a fallback tag date; the weekday headings found in
//! the body are then placed relative to that base date.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

/// Map keys are day names; dates are formatted with this.
pub const DATE_FORMAT: &str = "%m-%d-%Y";

/// Weekday names in Sunday-first order, so that an index into this table
/// is the Sunday=0..Saturday=6 offset used by the mapping arithmetic.
const DAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Position of a weekday name in the Sunday-first week, if it is one.
fn day_index(name: &str) -> Option<i64> {
    DAY_NAMES.iter().position(|d| *d == name).map(|i| i as i64)
}

/// Title-cases a single word the way heading names are normalized:
/// first character uppercased, the rest lowercased.
fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(|c| c.to_lowercase())).collect(),
        None => String::new(),
    }
}

/// Extracts the normalized first word of a heading's text.
pub(crate) fn heading_first_word(text: &str) -> Option<String> {
    text.split_whitespace().next().map(title_case)
}

/// The date anchor a note resolves dates against
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateAnchor {
    /// Year and ordinal day from a structured banner.
    Banner { year: i32, day_of_year: u32 },
    /// Explicit `MM-DD-YYYY` date from a note tag.
    Fallback(String),
}

/// Mapping from heading day name to a `MM-DD-YYYY` date string.
///
/// Built once per note and read-only afterward. An empty map means no
/// dated task should be recorded for the note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DayMap(BTreeMap<String, String>);

impl DayMap {
    /// A map holding a single pseudo-day, used when a note has no weekday
    /// structure and one fallback date covers everything.
    pub fn single(day: impl Into<String>, date: impl Into<String>) -> Self {
        let mut map = BTreeMap::new();
        map.insert(day.into(), date.into());
        Self(map)
    }

    /// Looks up the date for a day name.
    pub fn get(&self, day: &str) -> Option<&str> {
        self.0.get(day).map(String::as_str)
    }

    /// Returns true if no day resolved to a date.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of resolved days.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over (day, date) pairs in day-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds the day-to-date map for one note.
    ///
    /// With a banner anchor the base date is January 1 of the year advanced
    /// by `day_of_year - 1` days (ordinals past year end roll forward), and
    /// the base weekday is the true Sunday=0 index of that date. With a
    /// fallback anchor the tag date itself is the base and its weekday
    /// offset is pinned to 0, whatever day it actually falls on.
    ///
    /// Returns an empty map when there is no anchor, the anchor does not
    /// yield a base date, or the note has no weekday headings. Total over
    /// all inputs; never errors.
    pub fn build(anchor: Option<&DateAnchor>, content: &str) -> Self {
        let (base_date, base_weekday) = match anchor {
            Some(DateAnchor::Banner { year, day_of_year }) => {
                let Some(base) = NaiveDate::from_ymd_opt(*year, 1, 1)
                    .and_then(|jan1| jan1.checked_add_signed(Duration::days(*day_of_year as i64 - 1)))
                else {
                    return Self::default();
                };
                let weekday = base.weekday().num_days_from_sunday() as i64;
                (base, weekday)
            }
            Some(DateAnchor::Fallback(date)) => {
                let Ok(base) = NaiveDate::parse_from_str(date, DATE_FORMAT) else {
                    return Self::default();
                };
                (base, 0)
            }
            None => return Self::default(),
        };

        // Heading scan is on raw lines here; the task parser trims before
        // matching. Indented headings are date boundaries for the parser
        // but do not contribute mapped days.
        let mut found_days = Vec::new();
        for line in content.lines() {
            let heading = if let Some(rest) = line.strip_prefix("#### ") {
                rest
            } else if let Some(rest) = line.strip_prefix("### ") {
                rest
            } else {
                continue;
            };

            if let Some(name) = heading_first_word(heading.trim()) {
                if let Some(index) = day_index(&name) {
                    found_days.push((name, index));
                }
            }
        }

        if found_days.is_empty() {
            return Self::default();
        }

        let mut map = BTreeMap::new();
        for (name, index) in found_days {
            let offset = index - base_weekday;
            if let Some(date) = base_date.checked_add_signed(Duration::days(offset)) {
                map.insert(name, date.format(DATE_FORMAT).to_string());
            }
        }

        Self(map)
    }
}
