//! tally - A local-first CLI for tallying tasks, habits, and workouts
//! from plaintext daily notes
//!
//! tally scans markdown-like journal files, works out which calendar date
//! each section of a note refers to (from a weekly banner line or a date
//! tag), reconstructs nested checkbox tasks from indentation, and folds
//! everything into per-date statistics for reporting.

pub mod cli;
pub mod domain;
pub mod storage;

pub use domain::{process_note, Banner, DateStats, DayMap, GlobalStats, TaskStatus};
