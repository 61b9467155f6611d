//! Local identifier generation.

/// Returns `<prefix>-<uuid v4>`.
///
/// Ids are random, so ids minted by separate runs (and persisted by them)
/// do not collide.
pub fn next_id(prefix: &str) -> String {
    format!("{prefix}-{}", random_uuid())
}

#[cfg(not(target_arch = "wasm32"))]
fn random_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(target_arch = "wasm32")]
fn random_uuid() -> String {
    web_sys::window()
        .and_then(|window| window.crypto().ok())
        .map(|crypto| crypto.random_uuid())
        .unwrap_or_else(fallback_id)
}

// Only reached where the page has no `crypto` object.
#[cfg(target_arch = "wasm32")]
fn fallback_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};

    static COUNTER: AtomicU64 = AtomicU64::new(0);
    let seq = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{:x}-{seq:x}", chrono::Utc::now().timestamp_millis())
}
