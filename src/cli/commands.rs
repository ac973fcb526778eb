//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "moodj")]
#[command(about = "Mood journal: write entries, get a mood and a reflection", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// Log in as a named user
    Login {
        /// Name of the user
        name: String,
    },

    /// Log out of the journal
    Logout,

    /// Show the current user
    Whoami,

    /// Write a new entry
    Write {
        /// Entry title (default: "Untitled Journal")
        #[arg(short, long, default_value = "")]
        title: String,

        /// Entry content; opens the editor when omitted
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Edit an existing entry and classify it again
    Edit {
        /// Entry id
        id: u64,

        /// New title (keeps the current one when omitted)
        #[arg(short, long)]
        title: Option<String>,

        /// New content; opens the editor when omitted
        #[arg(short, long)]
        content: Option<String>,
    },

    /// Show one entry with its reflection
    Show {
        /// Entry id
        id: u64,
    },

    /// Delete an entry
    Delete {
        /// Entry id
        id: u64,
    },

    /// List entries, optionally filtered
    List {
        /// Text to look for in title or content (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only entries written on this day (DD-MM-YYYY)
        #[arg(short, long)]
        date: Option<String>,

        /// Only entries with this mood
        #[arg(short, long)]
        mood: Option<String>,
    },

    /// Mood statistics and badge level
    Stats,

    /// Moods per calendar day
    Calendar {
        /// Restrict to one month (YYYY-MM)
        #[arg(long)]
        month: Option<String>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
