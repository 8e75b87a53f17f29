//! Fixed-interval ticking for typing and counter effects.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancels a ticker when stopped. `Send`, for use in `on_cleanup`.
#[derive(Clone, Debug, Default)]
pub struct TickerHandle {
    alive: Arc<AtomicBool>,
}

impl TickerHandle {
    pub fn stop(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }
}

/// Call `tick` every `interval_ms` until it returns `false` or the handle
/// is stopped.
#[cfg(feature = "hydrate")]
pub fn spawn_ticker<F>(interval_ms: u32, mut tick: F) -> TickerHandle
where
    F: FnMut() -> bool + 'static,
{
    let alive = Arc::new(AtomicBool::new(true));
    let alive_task = Arc::clone(&alive);
    leptos::task::spawn_local(async move {
        loop {
            gloo_timers::future::TimeoutFuture::new(interval_ms).await;
            if !alive_task.load(Ordering::Relaxed) || !tick() {
                break;
            }
        }
    });
    TickerHandle { alive }
}
