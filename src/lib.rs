//! moodj - Terminal mood journal
//!
//! Journal entries are classified into one of six moods by keyword matching,
//! paired with a canned reflection, and summarized into mood statistics,
//! per-day mood calendars and filtered listings.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MoodjError;
