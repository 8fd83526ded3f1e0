pub mod export;
pub mod notify;
pub mod service;
pub mod store;
pub mod user_type;

#[cfg(test)]
mod fixtures;

pub use export::{data_url, render, ExportError};
pub use notify::{Notification, NotificationKind, Notifier, RecordingNotifier, TracingNotifier};
pub use service::{UpsertOutcome, WatchedService};
pub use store::WatchedStore;
pub use user_type::UserTypeSource;
