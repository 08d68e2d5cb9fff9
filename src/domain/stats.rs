//! Statistics aggregation
//!
//! Folds each parsed task event into per-date and global counters and
//! classifies tasks into habit and workout buckets by keyword matching.
//! The habit phrase list and the workout keywords are fixed constants.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::parser::{ParsedTask, TaskStatus};

/// Habit phrases matched as substrings of a task's lower-cased text.
/// A task recorded under a phrase is keyed by the phrase itself, and one
/// task may land under several phrases.
pub const HABIT_PHRASES: [&str; 8] = [
    "study hebrew",
    "massage scalp",
    "red light mask",
    "take out trash",
    "check plants water",
    "weekly planning",
    "fantasy waivers",
    "set fantasy line ups",
];

const WORKOUT_KEYWORD: &str = "workout";
const WORKOUT_EMOJI: &str = "🏋️";

fn is_workout_text(lowered: &str) -> bool {
    lowered.contains(WORKOUT_KEYWORD) || lowered.contains(WORKOUT_EMOJI)
}

/// One workout entry for a date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// The workout variant, taken from the task text
    #[serde(rename = "type")]
    pub kind: String,
    pub status: TaskStatus,
}

/// One habit occurrence for a date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitRecord {
    pub status: TaskStatus,
}

/// Per-date aggregate, created lazily on the first task seen for a date
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateStats {
    pub tasks_total: usize,
    pub tasks_completed: usize,
    pub workouts: Vec<WorkoutRecord>,
    pub habits: BTreeMap<String, Vec<HabitRecord>>,
}

/// Statistics for one scan run
///
/// Mutated in place by [`GlobalStats::record`]. Hosts processing notes
/// concurrently should give each worker its own instance and combine them
/// with [`GlobalStats::merge`] afterward.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalStats {
    pub tasks_total: usize,
    pub tasks_completed: usize,
    pub tasks_by_date: BTreeMap<String, DateStats>,
}

impl GlobalStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one task event into the statistics.
    ///
    /// `chain` is the task's full ancestor chain, root first, with the
    /// task itself as the last entry. A task with no resolved date is
    /// dropped silently; that is accepted data loss, not an error.
    ///
    /// Workout classification: a chain whose root or leaf mentions a
    /// workout contributes its non-root entries, one per line as each
    /// becomes the leaf. A matching task with no sub-tasks contributes
    /// itself; if children then follow, that provisional entry is
    /// superseded by them (the root never appears alongside its
    /// children).
    pub fn record(&mut self, chain: &[ParsedTask], date: Option<&str>) {
        let Some(date) = date else { return };
        let Some(leaf) = chain.last() else { return };

        let leaf_text = leaf.text.to_lowercase();

        self.tasks_total += 1;
        if leaf.status.is_complete() {
            self.tasks_completed += 1;
        }

        let day = self.tasks_by_date.entry(date.to_string()).or_default();
        day.tasks_total += 1;
        if leaf.status.is_complete() {
            day.tasks_completed += 1;
        }

        let root = &chain[0];
        let leaf_is_workout = is_workout_text(&leaf_text);

        if chain.len() == 1 {
            if leaf_is_workout {
                day.workouts.push(WorkoutRecord {
                    kind: leaf_text.clone(),
                    status: leaf.status,
                });
            }
        } else {
            let root_is_workout = is_workout_text(&root.text.to_lowercase());

            // First child of a matching root: retract the provisional
            // entry the root pushed for itself when it was still a leaf.
            if root_is_workout && chain.len() == 2 {
                let provisional = WorkoutRecord {
                    kind: root.text.to_lowercase(),
                    status: root.status,
                };
                if day.workouts.last() == Some(&provisional) {
                    day.workouts.pop();
                }
            }

            if leaf_is_workout {
                for sub in &chain[1..] {
                    day.workouts.push(WorkoutRecord {
                        kind: sub.text.clone(),
                        status: sub.status,
                    });
                }
            } else if root_is_workout {
                day.workouts.push(WorkoutRecord {
                    kind: leaf.text.clone(),
                    status: leaf.status,
                });
            }
        }

        for phrase in HABIT_PHRASES {
            if leaf_text.contains(phrase) {
                day.habits
                    .entry(phrase.to_string())
                    .or_default()
                    .push(HabitRecord {
                        status: leaf.status,
                    });
            }
        }
    }

    /// Combines another instance into this one: union of dates, summed
    /// counters, concatenated lists. Overlapping dates across notes are
    /// expected and desired.
    pub fn merge(&mut self, other: GlobalStats) {
        self.tasks_total += other.tasks_total;
        self.tasks_completed += other.tasks_completed;

        for (date, day) in other.tasks_by_date {
            let entry = self.tasks_by_date.entry(date).or_default();
            entry.tasks_total += day.tasks_total;
            entry.tasks_completed += day.tasks_completed;
            entry.workouts.extend(day.workouts);
            for (habit, records) in day.habits {
                entry.habits.entry(habit).or_default().extend(records);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(status: TaskStatus, text: &str) -> ParsedTask {
        ParsedTask {
            status,
            text: text.to_string(),
        }
    }

    const DATE: Option<&str> = Some("03-04-2024");

    #[test]
    fn no_date_is_a_no_op() {
        let mut stats = GlobalStats::new();
        stats.record(&[task(TaskStatus::Completed, "anything")], None);

        assert_eq!(stats, GlobalStats::new());
    }

    #[test]
    fn counters_track_leaf_status() {
        let mut stats = GlobalStats::new();
        stats.record(&[task(TaskStatus::Completed, "done thing")], DATE);
        stats.record(&[task(TaskStatus::NotCompleted, "open thing")], DATE);

        assert_eq!(stats.tasks_total, 2);
        assert_eq!(stats.tasks_completed, 1);

        let day = &stats.tasks_by_date["03-04-2024"];
        assert_eq!(day.tasks_total, 2);
        assert_eq!(day.tasks_completed, 1);
    }

    #[test]
    fn workout_children_supersede_the_root_entry() {
        let root = task(TaskStatus::Completed, "Workout");
        let mut stats = GlobalStats::new();

        stats.record(&[root.clone()], DATE);
        stats.record(&[root.clone(), task(TaskStatus::NotCompleted, "Bench press")], DATE);
        stats.record(&[root, task(TaskStatus::Completed, "Squats")], DATE);

        let workouts = &stats.tasks_by_date["03-04-2024"].workouts;
        assert_eq!(workouts.len(), 2);
        assert_eq!(workouts[0].kind, "Bench press");
        assert_eq!(workouts[0].status, TaskStatus::NotCompleted);
        assert_eq!(workouts[1].kind, "Squats");
        assert_eq!(workouts[1].status, TaskStatus::Completed);
    }

    #[test]
    fn standalone_workout_records_itself_lowercased() {
        let mut stats = GlobalStats::new();
        stats.record(&[task(TaskStatus::Completed, "🏋️ Evening Session")], DATE);

        let workouts = &stats.tasks_by_date["03-04-2024"].workouts;
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].kind, "🏋️ evening session");
        assert_eq!(workouts[0].status, TaskStatus::Completed);
    }

    #[test]
    fn matching_leaf_under_plain_root_records_non_root_entries() {
        let gym = task(TaskStatus::Completed, "Gym");
        let mut stats = GlobalStats::new();

        stats.record(&[gym.clone()], DATE);
        stats.record(&[gym, task(TaskStatus::Completed, "leg workout")], DATE);

        let workouts = &stats.tasks_by_date["03-04-2024"].workouts;
        assert_eq!(workouts.len(), 1);
        assert_eq!(workouts[0].kind, "leg workout");
    }

    #[test]
    fn sibling_root_does_not_lose_its_entry() {
        // Two standalone workout roots; only the second grows children.
        let a = task(TaskStatus::Completed, "morning workout");
        let b = task(TaskStatus::Completed, "evening workout");
        let mut stats = GlobalStats::new();

        stats.record(&[a], DATE);
        stats.record(&[b.clone()], DATE);
        stats.record(&[b, task(TaskStatus::Completed, "stretching")], DATE);

        let workouts = &stats.tasks_by_date["03-04-2024"].workouts;
        let kinds: Vec<&str> = workouts.iter().map(|w| w.kind.as_str()).collect();
        assert_eq!(kinds, vec!["morning workout", "stretching"]);
    }

    #[test]
    fn habits_key_by_phrase_not_task_text() {
        let mut stats = GlobalStats::new();
        stats.record(
            &[task(TaskStatus::Completed, "Study Hebrew for 20 minutes")],
            DATE,
        );

        let day = &stats.tasks_by_date["03-04-2024"];
        let records = &day.habits["study hebrew"];
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].status, TaskStatus::Completed);
    }

    #[test]
    fn one_task_can_match_several_habits() {
        let mut stats = GlobalStats::new();
        stats.record(
            &[task(TaskStatus::NotCompleted, "massage scalp, red light mask")],
            DATE,
        );

        let day = &stats.tasks_by_date["03-04-2024"];
        assert_eq!(day.habits.len(), 2);
        assert!(day.habits.contains_key("massage scalp"));
        assert!(day.habits.contains_key("red light mask"));
    }

    #[test]
    fn habit_match_uses_the_leaf() {
        let mut stats = GlobalStats::new();
        stats.record(
            &[
                task(TaskStatus::Completed, "weekly planning"),
                task(TaskStatus::NotCompleted, "review calendar"),
            ],
            DATE,
        );

        // Leaf text has no habit phrase; the ancestor's match does not count.
        assert!(stats.tasks_by_date["03-04-2024"].habits.is_empty());
    }

    #[test]
    fn merge_sums_counters_and_concatenates_lists() {
        let mut a = GlobalStats::new();
        a.record(&[task(TaskStatus::Completed, "🏋️ run")], DATE);
        a.record(&[task(TaskStatus::Completed, "study hebrew")], DATE);

        let mut b = GlobalStats::new();
        b.record(&[task(TaskStatus::NotCompleted, "study hebrew")], DATE);
        b.record(&[task(TaskStatus::Completed, "other")], Some("03-05-2024"));

        a.merge(b);

        assert_eq!(a.tasks_total, 4);
        assert_eq!(a.tasks_completed, 3);
        assert_eq!(a.tasks_by_date.len(), 2);

        let day = &a.tasks_by_date["03-04-2024"];
        assert_eq!(day.tasks_total, 3);
        assert_eq!(day.workouts.len(), 1);
        assert_eq!(day.habits["study hebrew"].len(), 2);
    }

    #[test]
    fn merge_into_empty_is_identity() {
        let mut src = GlobalStats::new();
        src.record(&[task(TaskStatus::Completed, "workout")], DATE);

        let mut dst = GlobalStats::new();
        dst.merge(src.clone());

        assert_eq!(dst, src);
    }

    #[test]
    fn stats_serialize_with_type_field_for_workouts() {
        let mut stats = GlobalStats::new();
        stats.record(&[task(TaskStatus::Completed, "workout")], DATE);

        let json = serde_json::to_value(&stats).unwrap();
        let workout = &json["tasks_by_date"]["03-04-2024"]["workouts"][0];
        assert_eq!(workout["type"], "workout");
        assert_eq!(workout["status"], "completed");
    }
}
