//! Dashboard use case: mood statistics and calendar

use crate::domain::aggregate::{
    badge_title, chart_slices, date_index, dominant_mood, milestone, mood_counts, mood_message,
    ChartSlice,
};
use crate::domain::{EntryFilter, Identity, Mood, MoodCounts};
use crate::error::{MoodjError, Result};
use crate::infrastructure::JournalStore;
use chrono::{Datelike, NaiveDate};
use std::collections::{BTreeMap, BTreeSet};

/// Parse a month given as YYYY-MM into its first day
pub fn parse_month(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .map_err(|_| MoodjError::InvalidDate(value.to_string()))
}

/// Everything the statistics view shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dashboard {
    pub total: usize,
    pub counts: MoodCounts,
    pub slices: Vec<ChartSlice>,
    pub dominant: (Mood, usize),
    /// `None` when there are no entries
    pub message: Option<String>,
    pub badge_level: u8,
    pub badge_title: String,
}

impl Dashboard {
    /// Derive every dashboard figure from mood counts
    pub fn from_counts(counts: MoodCounts) -> Self {
        let total = counts.total();
        let dominant = dominant_mood(&counts);
        let level = milestone(total);
        Dashboard {
            total,
            counts,
            slices: chart_slices(&counts),
            dominant,
            message: mood_message(dominant),
            badge_level: level,
            badge_title: badge_title(level),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

/// Service computing statistics over all entries
pub struct DashboardService<S, I> {
    store: S,
    identity: I,
}

impl<S: JournalStore, I: Identity> DashboardService<S, I> {
    pub fn new(store: S, identity: I) -> Self {
        DashboardService { store, identity }
    }

    pub fn summary(&self) -> Result<Dashboard> {
        self.identity.require_authenticated()?;
        let entries = self.store.list_all(&EntryFilter::default())?;
        Ok(Dashboard::from_counts(mood_counts(&entries)))
    }

    /// Moods per day, optionally limited to the month containing `month`
    pub fn calendar(&self, month: Option<NaiveDate>) -> Result<BTreeMap<NaiveDate, BTreeSet<Mood>>> {
        self.identity.require_authenticated()?;
        let entries = self.store.list_all(&EntryFilter::default())?;
        let mut index = date_index(&entries);
        if let Some(month) = month {
            index.retain(|day, _| day.year() == month.year() && day.month() == month.month());
        }
        Ok(index)
    }
}
