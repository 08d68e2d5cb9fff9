//! Task hierarchy parser
//!
//! Single-pass state machine over a note's lines. Weekday headings switch
//! the active date and hard-reset the nesting state; checkbox lines
//! maintain an indentation-keyed stack of open ancestor tasks; any other
//! line breaks the chain. Each task line is folded into [`GlobalStats`]
//! with its full ancestor chain and the date active at that point.

use serde::{Deserialize, Serialize};

use super::daymap::{heading_first_word, DayMap};
use super::stats::GlobalStats;

/// Completion state of a checkbox task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Completed,
    NotCompleted,
}

impl TaskStatus {
    /// Returns true if this status represents completion
    pub fn is_complete(&self) -> bool {
        matches!(self, TaskStatus::Completed)
    }
}

/// A checkbox task as parsed from one line
///
/// Ephemeral: lives on the ancestor stack while its children are being
/// read, then is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedTask {
    pub status: TaskStatus,
    pub text: String,
}

/// Parses a trimmed checkbox line (`- [x] ...` / `- [ ] ...`).
///
/// The fourth character decides the status: `x` means completed, anything
/// else means not completed. The text is everything after the fifth
/// character. Both are counted in characters so multibyte markers cannot
/// split the line mid-glyph.
fn parse_task_line(stripped: &str) -> ParsedTask {
    let status = if stripped.chars().nth(3) == Some('x') {
        TaskStatus::Completed
    } else {
        TaskStatus::NotCompleted
    };
    let text: String = stripped.chars().skip(5).collect();

    ParsedTask {
        status,
        text: text.trim().to_string(),
    }
}

/// Indentation level of a raw line: the count of leading spaces and tabs,
/// neither expanded nor weighted.
fn indent_level(line: &str) -> usize {
    line.chars().take_while(|c| *c == ' ' || *c == '\t').count()
}

/// Pops the stack when indentation decreases.
///
/// The pop count is the indentation *difference* itself, not a number of
/// tree levels, so this is only faithful when indentation grows in
/// single-unit steps; larger jumps over-pop. That is the compatibility
/// contract, kept behind this function so an explicit indentation-unit
/// table could replace it without touching the state machine. A decrease
/// larger than the stack depth clamps to an empty stack.
fn pop_to_level(stack: &mut Vec<ParsedTask>, prev_indent: usize, indent: usize) {
    let levels_up = prev_indent.saturating_sub(indent);
    let keep = stack.len().saturating_sub(levels_up);
    stack.truncate(keep);
}

/// Walks the note's lines and records every checkbox task into `stats`.
///
/// Tasks under a heading that is not in `day_map` (or under no heading at
/// all) carry no date and are silently dropped by the aggregator. The walk
/// is total: malformed lines are hierarchy breaks, never errors.
pub fn extract_tasks(content: &str, day_map: &DayMap, stats: &mut GlobalStats) {
    let mut task_stack: Vec<ParsedTask> = Vec::new();
    let mut prev_indent: usize = 0;
    let mut current_date: Option<&str> = None;

    for line in content.lines() {
        let stripped = line.trim();

        if let Some(heading) = stripped
            .strip_prefix("#### ")
            .or_else(|| stripped.strip_prefix("### "))
        {
            current_date = heading_first_word(heading.trim()).and_then(|day| day_map.get(&day));
            task_stack.clear();
            prev_indent = 0;
            continue;
        }

        if stripped.starts_with("- [") {
            let task = parse_task_line(stripped);
            let indent = indent_level(line);

            if indent > prev_indent {
                task_stack.push(task);
            } else {
                if indent < prev_indent {
                    pop_to_level(&mut task_stack, prev_indent, indent);
                }
                // A sibling replaces the previous task at its depth.
                match task_stack.last_mut() {
                    Some(top) => *top = task,
                    None => task_stack.push(task),
                }
            }

            prev_indent = indent;
            stats.record(&task_stack, current_date);
        } else {
            prev_indent = 0;
            task_stack.clear();
        }
    }
}
