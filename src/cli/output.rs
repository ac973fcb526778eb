//! Output formatting utilities

use crate::application::Dashboard;
use crate::domain::aggregate::badge_title;
use crate::domain::{JournalEntry, Mood};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Format a list of entries for display, one per line
pub fn format_entry_list(entries: &[JournalEntry]) -> String {
    if entries.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for entry in entries {
        output.push_str(&format!(
            "{:>4}  {}  {:<9}  {}\n",
            entry.id,
            entry.local_date().format("%d-%m-%Y"),
            entry.mood,
            entry.title
        ));
    }
    output
}

/// Format a single entry with its reflection
pub fn format_entry(entry: &JournalEntry) -> String {
    format!(
        "#{} {}\n{}  mood: {}\n\n{}\n\nReflection:\n{}\n",
        entry.id,
        entry.title,
        entry.updated_at.format("%d-%m-%Y %H:%M"),
        entry.mood,
        entry.content.trim_end(),
        entry.reflection()
    )
}

/// Format the statistics view
pub fn format_dashboard(dashboard: &Dashboard, nickname: &str) -> String {
    let mut output = format!(
        "Hi there, {}!\nBadge: {}\n",
        nickname, dashboard.badge_title
    );

    let Some(message) = &dashboard.message else {
        output.push_str("\nNo entries yet. Write your first one with 'moodj write'.\n");
        return output;
    };

    output.push('\n');
    for slice in &dashboard.slices {
        output.push_str(&format!(
            "{:<10} {:>4}  {}\n",
            slice.label, slice.count, slice.color
        ));
    }

    let (mood, count) = dashboard.dominant;
    output.push_str(&format!(
        "\nYou felt {} {} {}!\n{}\n",
        mood,
        count,
        if count == 1 { "time" } else { "times" },
        message
    ));
    output
}

/// Format the per-day mood index
pub fn format_calendar(index: &BTreeMap<NaiveDate, BTreeSet<Mood>>) -> String {
    if index.is_empty() {
        return "No entries found".to_string();
    }

    let mut output = String::new();
    for (day, moods) in index {
        let labels: Vec<&str> = moods.iter().map(|m| m.label()).collect();
        output.push_str(&format!(
            "{}  {}\n",
            day.format("%d-%m-%Y"),
            labels.join(", ")
        ));
    }
    output
}

/// Congratulation shown when a save reaches a new badge level
pub fn format_milestone(level: u8) -> String {
    format!("Congratulations! You have reached {}!", badge_title(level))
}
