//! Per-note processing pipeline
//!
//! Ties the extractors together for one note: pick a date anchor (banner
//! first, then a year-matching tag date), build the day-to-date map, and
//! run the task parser. Pure text-to-stats transform; reading the file is
//! the caller's job.

use super::date::{extract_banner, extract_tag_date, Banner};
use super::daymap::{DateAnchor, DayMap};
use super::parser::extract_tasks;
use super::stats::GlobalStats;

/// Pseudo-day used when a note has no weekday structure and one fallback
/// date covers the whole note. Tasks still only count under a heading
/// whose first word is this name.
pub const ALL_DAY: &str = "All";

/// How a note's dates resolved, before any tasks are extracted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteResolution {
    pub banner: Option<Banner>,
    pub tag_date: Option<String>,
    pub day_map: DayMap,
}

/// Resolves the date anchors and the effective day-to-date map for a note.
///
/// The banner wins over the tag date. Tag dates are only honored when they
/// end with `year` (tag dates from other years are skipped); banner years
/// are not filtered. When no weekday heading resolves but a year-matching
/// tag date exists, the map collapses to the single [`ALL_DAY`] pseudo-day.
pub fn resolve_note(content: &str, year: &str) -> NoteResolution {
    let banner = extract_banner(content);
    let tag_date = extract_tag_date(content);

    let year_tag = tag_date
        .clone()
        .filter(|date| date.ends_with(year));

    let anchor = match banner {
        Some(b) => Some(DateAnchor::Banner {
            year: b.year,
            day_of_year: b.day_of_year,
        }),
        None => year_tag.clone().map(DateAnchor::Fallback),
    };

    let mut day_map = DayMap::build(anchor.as_ref(), content);
    if day_map.is_empty() {
        if let Some(date) = year_tag {
            day_map = DayMap::single(ALL_DAY, date);
        }
    }

    NoteResolution {
        banner,
        tag_date,
        day_map,
    }
}

/// Processes one note into `stats`.
///
/// Returns true if the note produced a usable day-to-date map (its task
/// lines were walked), false if it was skipped for lack of any anchor.
pub fn process_note(content: &str, year: &str, stats: &mut GlobalStats) -> bool {
    let resolution = resolve_note(content, year);
    if resolution.day_map.is_empty() {
        return false;
    }

    extract_tasks(content, &resolution.day_map, stats);
    true
}
