//! Date anchor extraction from note text
//!
//! A note carries at most one date anchor: either a structured banner line
//! (`[[2024 Daily TODO]] - [Week] 10 / [Day] 67`) or an explicit date tag
//! below a `## Tags` heading. The banner takes priority; the tag is the
//! fallback for daily notes without the weekly banner.

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Date formats accepted for tag dates, tried in order.
const TAG_DATE_FORMATS: [&str; 2] = ["%m-%d-%Y", "%Y-%m-%d"];

static BANNER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[\[(\d{4}) Daily TODO\]\]\s*-\s*\[Week\]\s*(\d+)\s*/\s*\[Day\]\s*(\d+)").unwrap()
});

/// Year, week number, and day-of-year parsed from a note's banner line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub year: i32,
    pub week: u32,
    pub day_of_year: u32,
}

/// Extracts the banner from the first line that matches it, if any.
pub fn extract_banner(content: &str) -> Option<Banner> {
    for line in content.lines() {
        if let Some(caps) = BANNER_RE.captures(line) {
            // The pattern only admits digits, but the values may still
            // overflow their integer types; treat that as an absent banner.
            let year = caps[1].parse().ok()?;
            let week = caps[2].parse().ok()?;
            let day_of_year = caps[3].parse().ok()?;
            return Some(Banner {
                year,
                week,
                day_of_year,
            });
        }
    }
    None
}

/// Returns true if the string is a date in one of the supported formats.
pub fn is_valid_date(value: &str) -> bool {
    TAG_DATE_FORMATS
        .iter()
        .any(|fmt| NaiveDate::parse_from_str(value, fmt).is_ok())
}

/// Extracts a date tag from the line immediately following `## Tags`.
///
/// Only that single line is inspected, and the first `#`-prefixed token
/// that validates as a date wins. The date is returned in its original
/// format, not normalized.
pub fn extract_tag_date(content: &str) -> Option<String> {
    let mut lines = content.lines();

    while let Some(line) = lines.next() {
        if line.trim() != "## Tags" {
            continue;
        }

        let tag_line = lines.next()?;
        for token in tag_line.split_whitespace() {
            let Some(candidate) = token.strip_prefix('#') else {
                continue;
            };
            if !candidate.is_empty() && is_valid_date(candidate) {
                return Some(candidate.to_string());
            }
        }
        return None;
    }

    None
}
