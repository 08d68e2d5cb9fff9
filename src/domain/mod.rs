//! Domain logic for tally
//!
//! The date-resolution and task-extraction engine, free of any I/O
//! concerns: callers hand in note text and read back statistics.

mod date;
mod daymap;
mod note;
mod parser;
mod stats;

pub use date::{extract_banner, extract_tag_date, is_valid_date, Banner};
pub use daymap::{DateAnchor, DayMap, DATE_FORMAT};
pub use note::{process_note, resolve_note, NoteResolution, ALL_DAY};
pub use parser::{extract_tasks, ParsedTask, TaskStatus};
pub use stats::{DateStats, GlobalStats, HabitRecord, WorkoutRecord, HABIT_PHRASES};
