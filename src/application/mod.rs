//! Application layer - Use cases and orchestration

pub mod compose;
pub mod dashboard;
pub mod delete_entry;
pub mod init;
pub mod list_entries;
pub mod manage_config;
pub mod save_entry;
pub mod session;

pub use compose::compose_in_editor;
pub use dashboard::{parse_month, Dashboard, DashboardService};
pub use delete_entry::DeleteEntryService;
pub use list_entries::{parse_day, parse_mood, ListEntriesService};
pub use manage_config::{ConfigService, CONFIG_KEYS};
pub use save_entry::{SaveEntryService, SaveOutcome};
pub use session::SessionService;
