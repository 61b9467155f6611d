//! Shared building blocks used by the screens.
pub mod alert_banner;
pub mod alert_card;
pub mod empty_state;
pub mod pico;
