use crate::stores::AlertStore;
use api::compat::interval::Interval;
use api::BannerRotation;
use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use std::time::Duration;

/// Keeps a [`BannerRotation`] in step with `alerts` and advances it once per
/// `period` while an alert is visible.
///
/// The interval lives inside a resource future. Any write to the alert list,
/// or a change in whether a timer is needed, restarts the resource, and the
/// previous interval is dropped (and cancelled) with the old future. Unmounting
/// the owner drops it as well.
pub fn use_banner_rotation(alerts: AlertStore, period: Duration) -> Signal<BannerRotation> {
    let mut rotation = use_signal(BannerRotation::default);

    use_effect(move || {
        let len = alerts.len();
        rotation.write().sync(len);
    });

    let ticking = use_memo(move || rotation.read().needs_timer());

    use_resource(move || async move {
        let mut rotation = rotation;
        let len = alerts.len();
        if !ticking() {
            debug!("banner timer disarmed");
            return;
        }
        debug!("arming banner timer for {} alerts", len);
        let mut interval = Interval::new(period);
        loop {
            interval.tick().await;
            rotation.write().tick();
        }
    });

    rotation
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::use_alert_store;
    use crate::test_util::{advance, mount, stays_idle};
    use api::{BannerState, NewAlert, Severity};
    use std::cell::{Cell, RefCell};

    const PERIOD: Duration = Duration::from_secs(8);

    thread_local! {
        static HANDLES: Cell<Option<(AlertStore, Signal<BannerRotation>)>> = const { Cell::new(None) };
        static SEEN: RefCell<Vec<Option<usize>>> = const { RefCell::new(Vec::new()) };
        static MOUNTED: Cell<Option<Signal<bool>>> = const { Cell::new(None) };
    }

    #[component]
    fn Host() -> Element {
        let alerts = use_alert_store(true);
        let rotation = use_banner_rotation(alerts, PERIOD);
        HANDLES.with(|h| h.set(Some((alerts, rotation))));

        let visible = rotation.read().visible_index();
        SEEN.with(|seen| seen.borrow_mut().push(visible));
        rsx! { "{visible:?}" }
    }

    fn handles() -> (AlertStore, Signal<BannerRotation>) {
        HANDLES.with(|h| h.get()).expect("host not mounted")
    }

    fn state() -> BannerState {
        handles().1.peek().state()
    }

    fn flood() -> NewAlert {
        NewAlert::new("Flood", "Water on the street", Severity::High, "weather")
    }

    #[tokio::test(start_paused = true)]
    async fn ticks_once_per_period() {
        let mut dom = mount(Host);
        advance(&mut dom, Duration::from_millis(100)).await;
        assert_eq!(state(), BannerState::Showing(0));

        advance(&mut dom, Duration::from_secs(5)).await;
        assert_eq!(state(), BannerState::Showing(0));

        advance(&mut dom, Duration::from_secs(3)).await;
        assert_eq!(state(), BannerState::Showing(1));

        advance(&mut dom, PERIOD).await;
        assert_eq!(state(), BannerState::Showing(0));
    }

    #[tokio::test(start_paused = true)]
    async fn list_change_rearms_the_timer() {
        let mut dom = mount(Host);
        advance(&mut dom, Duration::from_secs(5)).await;

        let (mut alerts, _) = handles();
        dom.in_runtime(|| {
            alerts.add_alert(flood());
        });

        // a timer armed at mount would have fired at 8s
        advance(&mut dom, Duration::from_secs(5)).await;
        assert_eq!(state(), BannerState::Showing(0));

        advance(&mut dom, Duration::from_secs(4)).await;
        assert_eq!(state(), BannerState::Showing(1));
    }

    #[tokio::test(start_paused = true)]
    async fn clearing_the_list_stops_the_timer() {
        let mut dom = mount(Host);
        advance(&mut dom, Duration::from_millis(100)).await;

        let (mut alerts, _) = handles();
        dom.in_runtime(|| alerts.clear_alerts());
        advance(&mut dom, Duration::from_millis(100)).await;

        assert_eq!(state(), BannerState::Hidden);
        assert!(stays_idle(&mut dom, Duration::from_secs(60)).await);
    }

    #[tokio::test(start_paused = true)]
    async fn dismissal_stops_the_timer() {
        let mut dom = mount(Host);
        advance(&mut dom, Duration::from_millis(100)).await;

        let (_, mut rotation) = handles();
        dom.in_runtime(|| rotation.write().dismiss());
        advance(&mut dom, Duration::from_millis(100)).await;
        let renders = SEEN.with(|seen| seen.borrow().len());

        assert!(stays_idle(&mut dom, Duration::from_secs(60)).await);
        assert_eq!(SEEN.with(|seen| seen.borrow().len()), renders);
        assert_eq!(SEEN.with(|seen| seen.borrow().last().copied()), Some(None));
    }

    #[tokio::test(start_paused = true)]
    async fn refill_after_empty_starts_over_undismissed() {
        let mut dom = mount(Host);
        advance(&mut dom, Duration::from_millis(8100)).await;
        assert_eq!(state(), BannerState::Showing(1));

        let (mut alerts, mut rotation) = handles();
        dom.in_runtime(|| rotation.write().dismiss());
        dom.in_runtime(|| alerts.clear_alerts());
        advance(&mut dom, Duration::from_millis(100)).await;

        dom.in_runtime(|| {
            alerts.add_alert(flood());
        });
        advance(&mut dom, Duration::from_millis(100)).await;

        assert_eq!(state(), BannerState::Showing(0));
        assert!(!handles().1.peek().is_dismissed());

        advance(&mut dom, PERIOD).await;
        // a single alert keeps ticking onto itself
        assert_eq!(state(), BannerState::Showing(0));
    }

    #[component]
    fn Outer() -> Element {
        let mounted = use_signal(|| true);
        MOUNTED.with(|m| m.set(Some(mounted)));
        rsx! {
            if mounted() {
                Host {}
            }
        }
    }

    #[tokio::test(start_paused = true)]
    async fn unmounting_drops_the_timer() {
        let mut dom = mount(Outer);
        advance(&mut dom, Duration::from_millis(100)).await;
        assert_eq!(state(), BannerState::Showing(0));

        let mut mounted = MOUNTED.with(|m| m.get()).expect("outer not mounted");
        dom.in_runtime(|| mounted.set(false));
        advance(&mut dom, Duration::from_millis(100)).await;

        assert!(stays_idle(&mut dom, Duration::from_secs(60)).await);
    }
}
