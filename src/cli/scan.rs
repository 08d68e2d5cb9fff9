//! Scan command
//!
//! Walks a notes directory, folds every note into one [`GlobalStats`],
//! and renders the per-date report.

use std::fs;
use std::path::Path;

use anyhow::Result;

use super::output::Output;
use crate::domain::{process_note, GlobalStats};
use crate::storage::{find_notes, Config};

/// Scans a directory of notes and reports aggregate statistics
pub fn run(
    output: &Output,
    dir: Option<&Path>,
    year: Option<&str>,
    extensions: &[String],
) -> Result<()> {
    let config = Config::load()?;
    let dir = config.effective_dir(dir)?;
    let year = config.effective_year(year);
    let extensions = config.effective_extensions(extensions);

    output.verbose_ctx(
        "scan",
        &format!(
            "Scanning {} for year {} (extensions: {})",
            dir.display(),
            year,
            extensions.join(", ")
        ),
    );

    let files = find_notes(&dir, &extensions)?;
    output.verbose_ctx("scan", &format!("Found {} note files", files.len()));

    let mut stats = GlobalStats::new();
    let mut notes_parsed = 0;

    for path in &files {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                output.verbose_ctx("scan", &format!("Skipping {}: {}", path.display(), e));
                continue;
            }
        };

        if process_note(&content, &year, &mut stats) {
            notes_parsed += 1;
        } else {
            output.verbose_ctx(
                "scan",
                &format!("No date anchor in {}", path.display()),
            );
        }
    }

    if output.is_json() {
        output.data(&serde_json::json!({
            "files_scanned": files.len(),
            "notes_parsed": notes_parsed,
            "stats": stats,
        }));
    } else {
        render_text(&stats, files.len(), notes_parsed);
    }

    Ok(())
}

fn render_text(stats: &GlobalStats, files_scanned: usize, notes_parsed: usize) {
    println!(
        "Scanned {} files, {} notes with resolvable dates",
        files_scanned, notes_parsed
    );

    if stats.tasks_by_date.is_empty() {
        println!("No dated tasks found.");
        return;
    }

    println!();
    println!(
        "{:<12} {:>5} {:>6} {:>9} {:>7}",
        "DATE", "DONE", "TOTAL", "WORKOUTS", "HABITS"
    );
    println!("{}", "-".repeat(45));

    for (date, day) in &stats.tasks_by_date {
        let habit_count: usize = day.habits.values().map(Vec::len).sum();
        println!(
            "{:<12} {:>5} {:>6} {:>9} {:>7}",
            date,
            day.tasks_completed,
            day.tasks_total,
            day.workouts.len(),
            habit_count
        );
    }

    println!("{}", "-".repeat(45));
    println!(
        "Total: {}/{} tasks completed",
        stats.tasks_completed, stats.tasks_total
    );
}
