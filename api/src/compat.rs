// Timer primitives that behave the same on native targets and in the browser.
#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::time::Duration;

    pub mod interval {
        use futures::channel::mpsc;
        use futures::StreamExt;
        use std::time::Duration;

        /// A repeating timer. Dropping it cancels the underlying browser interval.
        pub struct Interval {
            inner: Option<gloo_timers::callback::Interval>,
            rx: mpsc::UnboundedReceiver<()>,
        }

        impl Interval {
            pub fn new(period: Duration) -> Self {
                let (tx, rx) = mpsc::unbounded();
                let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
                let gloo_interval = gloo_timers::callback::Interval::new(millis, move || {
                    let _ = tx.unbounded_send(());
                });

                Self {
                    inner: Some(gloo_interval),
                    rx,
                }
            }

            /// Completes once per period, the first time one period after creation.
            pub async fn tick(&mut self) {
                let _ = self.rx.next().await;
            }
        }

        impl Drop for Interval {
            fn drop(&mut self) {
                if let Some(inner) = self.inner.take() {
                    inner.cancel();
                }
            }
        }
    }

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::time::Duration;

    pub mod interval {
        use tokio::time::{self, Duration, Instant, MissedTickBehavior};

        /// A repeating timer. Dropping it cancels it.
        pub struct Interval {
            inner: tokio::time::Interval,
        }

        impl Interval {
            pub fn new(period: Duration) -> Self {
                // tokio's first tick is immediate; the browser's is not.
                let mut interval = time::interval_at(Instant::now() + period, period);
                interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
                Self { inner: interval }
            }

            /// Completes once per period, the first time one period after creation.
            pub async fn tick(&mut self) {
                self.inner.tick().await;
            }
        }
    }

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
