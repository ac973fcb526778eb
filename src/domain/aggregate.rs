//! Statistics and filtering over collections of journal entries
//!
//! Everything here is a pure function of its arguments. Nothing is cached
//! between calls, so callers that want to detect a milestone crossing keep
//! the previous count themselves.

use crate::domain::{JournalEntry, Mood};
use chrono::NaiveDate;
use std::collections::{BTreeMap, BTreeSet};

/// Entry-count thresholds for badge levels 1, 2 and 3
pub const MILESTONE_THRESHOLDS: [usize; 3] = [10, 30, 60];

/// Number of entries per mood
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoodCounts {
    counts: [usize; 6],
}

impl MoodCounts {
    pub fn get(&self, mood: Mood) -> usize {
        self.counts[mood.index()]
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Pairs in enumeration order, zero counts included
    pub fn iter(&self) -> impl Iterator<Item = (Mood, usize)> + '_ {
        Mood::ALL.iter().map(move |mood| (*mood, self.get(*mood)))
    }

    fn add(&mut self, mood: Mood) {
        self.counts[mood.index()] += 1;
    }
}

/// Count entries per mood
pub fn mood_counts<'a, I>(entries: I) -> MoodCounts
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let mut counts = MoodCounts::default();
    for entry in entries {
        counts.add(entry.mood);
    }
    counts
}

/// Count raw mood labels as they arrive from an untyped source.
///
/// Missing or unrecognized labels are attributed to `Neutral`.
pub fn mood_counts_from_labels<'a, I>(labels: I) -> MoodCounts
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut counts = MoodCounts::default();
    for label in labels {
        counts.add(Mood::normalize(label));
    }
    counts
}

/// Mood with the highest count
///
/// Ties resolve to the mood earliest in enumeration order. An empty
/// collection yields `(Neutral, 0)`; callers should render a "no entries"
/// state instead of a mood message in that case.
pub fn dominant_mood(counts: &MoodCounts) -> (Mood, usize) {
    let mut best = (Mood::Happy, counts.get(Mood::Happy));
    for (mood, count) in counts.iter() {
        if count > best.1 {
            best = (mood, count);
        }
    }
    if best.1 == 0 {
        (Mood::Neutral, 0)
    } else {
        best
    }
}

/// Supportive message for the dominant mood, `None` when there are no entries
pub fn mood_message(dominant: (Mood, usize)) -> Option<String> {
    match dominant {
        (_, 0) => None,
        (Mood::Happy, _) => Some(
            "That means you had more positive days than negative ones. \
             Keep it up and continue nurturing your positive energy!"
                .to_string(),
        ),
        (mood, _) => Some(format!(
            "You've been feeling {} quite often. \
             Consider activities that might help improve your mood.",
            mood.label()
        )),
    }
}

/// One pie-chart slice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartSlice {
    pub label: &'static str,
    pub count: usize,
    pub color: &'static str,
}

/// Chart-ready data: one slice per mood, in enumeration order
pub fn chart_slices(counts: &MoodCounts) -> Vec<ChartSlice> {
    counts
        .iter()
        .map(|(mood, count)| ChartSlice {
            label: mood.display_name(),
            count,
            color: mood.color(),
        })
        .collect()
}

/// Moods present on each calendar day.
///
/// Days are taken from each entry's own recorded offset; no conversion to a
/// common timezone happens.
pub fn date_index<'a, I>(entries: I) -> BTreeMap<NaiveDate, BTreeSet<Mood>>
where
    I: IntoIterator<Item = &'a JournalEntry>,
{
    let mut index: BTreeMap<NaiveDate, BTreeSet<Mood>> = BTreeMap::new();
    for entry in entries {
        index
            .entry(entry.local_date())
            .or_default()
            .insert(entry.mood);
    }
    index
}

/// Conjunctive filter criteria; unset criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryFilter {
    pub text: String,
    pub date: Option<NaiveDate>,
    pub mood: Option<Mood>,
}

impl EntryFilter {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.date.is_none() && self.mood.is_none()
    }

    /// Check a single entry against all criteria
    pub fn matches(&self, entry: &JournalEntry) -> bool {
        self.matches_text(entry)
            && self.date.map_or(true, |date| entry.local_date() == date)
            && self.mood.map_or(true, |mood| entry.mood == mood)
    }

    fn matches_text(&self, entry: &JournalEntry) -> bool {
        if self.text.is_empty() {
            return true;
        }
        let needle = self.text.to_lowercase();
        entry.title.to_lowercase().contains(&needle)
            || entry.content.to_lowercase().contains(&needle)
    }
}

/// Entries matching `criteria`, in their original relative order
pub fn filter<'a>(
    entries: &'a [JournalEntry],
    criteria: &'a EntryFilter,
) -> impl Iterator<Item = &'a JournalEntry> + Clone + 'a {
    entries.iter().filter(move |entry| criteria.matches(entry))
}

/// Badge level for a total entry count: 0 below 10, then 1, 2 and 3 at 10, 30 and 60
pub fn milestone(count: usize) -> u8 {
    MILESTONE_THRESHOLDS
        .iter()
        .filter(|threshold| count >= **threshold)
        .count() as u8
}

/// Level newly reached when the count moves from `previous` to `current`
pub fn milestone_crossed(previous: usize, current: usize) -> Option<u8> {
    let level = milestone(current);
    (level > milestone(previous)).then_some(level)
}

/// Human-readable badge title
pub fn badge_title(level: u8) -> String {
    match level {
        0 => "New User".to_string(),
        n => format!("Streak Seeker Level {}", n),
    }
}
