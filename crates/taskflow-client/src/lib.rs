/*
[INPUT]:  Public API exports for taskflow-client crate
[OUTPUT]: Module declarations and public re-exports
[POS]:    Crate root - library entry point
[UPDATE]: When adding new modules or public exports
*/

pub mod config;
pub mod filter;
pub mod form;
pub mod notify;
pub mod preferences;
pub mod session;
pub mod store;

// Re-export main types for convenience
pub use config::ClientSettings;
pub use filter::{FilterCriteria, Selector};
pub use form::{FieldUpdate, FormController, TaskDraft, TaskField, ValidationErrors};
pub use notify::{Notification, NotificationKind, Notifier};
pub use preferences::Preferences;
pub use session::Session;
pub use store::{StatusCounts, StoreError, TaskStore};
