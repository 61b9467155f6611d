//! Reactive wrappers around the `api` state types.
//!
//! Each store is created once by the root component and handed to the
//! components that need it as a prop.

pub mod alert_store;
pub mod session_store;

pub use alert_store::{use_alert_store, AlertStore};
pub use session_store::{use_session_store, SessionStore};
