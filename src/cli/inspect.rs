//! Inspect command
//!
//! Shows how a single note resolves: its banner, its tag date, the
//! day-to-date map, and the statistics it would contribute. Diagnostic
//! surface for the date-resolution engine.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use super::output::Output;
use crate::domain::{process_note, resolve_note, GlobalStats};
use crate::storage::Config;

/// Inspects date resolution for one note file
pub fn run(output: &Output, file: &Path, year: Option<&str>) -> Result<()> {
    let config = Config::load()?;
    let year = config.effective_year(year);

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read note: {}", file.display()))?;

    let resolution = resolve_note(&content, &year);
    let mut stats = GlobalStats::new();
    process_note(&content, &year, &mut stats);

    if output.is_json() {
        output.data(&serde_json::json!({
            "file": file.display().to_string(),
            "year": year,
            "banner": resolution.banner,
            "tag_date": resolution.tag_date,
            "day_map": resolution.day_map,
            "stats": stats,
        }));
        return Ok(());
    }

    println!("Note: {}", file.display());

    match resolution.banner {
        Some(banner) => println!(
            "Banner: year {}, week {}, day {}",
            banner.year, banner.week, banner.day_of_year
        ),
        None => println!("Banner: none"),
    }

    match &resolution.tag_date {
        Some(date) => println!("Tag date: {}", date),
        None => println!("Tag date: none"),
    }

    if resolution.day_map.is_empty() {
        println!("Day map: empty (note contributes no tasks)");
        return Ok(());
    }

    println!();
    println!("{:<12} DATE", "DAY");
    println!("{}", "-".repeat(24));
    for (day, date) in resolution.day_map.iter() {
        println!("{:<12} {}", day, date);
    }

    println!();
    for (date, day) in &stats.tasks_by_date {
        println!(
            "{}: {}/{} tasks completed",
            date, day.tasks_completed, day.tasks_total
        );
    }
    println!(
        "Total: {}/{} tasks completed",
        stats.tasks_completed, stats.tasks_total
    );

    Ok(())
}
