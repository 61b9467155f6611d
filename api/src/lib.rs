//! Framework-free state layer shared by every Bronx Safe front end.
//!
//! Nothing in here knows about Dioxus. The `ui` crate wraps these types in
//! signals; tests drive them directly.

pub mod accounts;
pub mod alert;
pub mod alert_list;
pub mod compat;
pub mod config;
pub mod ids;
pub mod profile;
pub mod rotation;
pub mod session;
pub mod storage;

pub use accounts::{AccountError, AccountService, MockAccountService};
pub use alert::{Alert, AlertFilter, AlertId, NewAlert, Severity};
pub use alert_list::AlertList;
pub use config::AppConfig;
pub use profile::{AlertPreferences, ProfileUpdate, Radius, SavedRoute, UserProfile};
pub use rotation::{BannerRotation, BannerState};
pub use session::{SessionError, SessionState, Ticket};
pub use storage::{ProfileSlot, ProfileStorage, StorageError};
