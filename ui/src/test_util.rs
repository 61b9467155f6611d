//! Drives a headless `VirtualDom` against tokio's paused clock.

use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use std::time::Duration;
use tokio::time::{timeout, timeout_at, Instant};

pub(crate) fn mount(app: fn() -> Element) -> VirtualDom {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dom
}

/// Runs every task, effect and render that comes due within `by`.
pub(crate) async fn advance(dom: &mut VirtualDom, by: Duration) {
    let deadline = Instant::now() + by;
    while timeout_at(deadline, dom.wait_for_work()).await.is_ok() {
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// True when nothing wakes the dom for `period`.
pub(crate) async fn stays_idle(dom: &mut VirtualDom, period: Duration) -> bool {
    timeout(period, dom.wait_for_work()).await.is_err()
}

pub(crate) fn html(dom: &VirtualDom) -> String {
    dioxus_ssr::render(dom)
}
