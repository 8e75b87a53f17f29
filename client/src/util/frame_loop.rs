//! `requestAnimationFrame` driver for canvas effects.
//!
//! The loop reschedules itself from inside its own callback. Stopping flips
//! a shared flag; the next scheduled frame sees it, skips the callback and
//! drops the closure, which breaks the self-reference.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

/// Handle to a frame loop. Cheap to clone and `Send`, so a component can
/// create it up front, start it once the canvas mounts, and move a clone
/// into `on_cleanup`.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    started: Arc<AtomicBool>,
    stopped: Arc<AtomicBool>,
}

impl FrameLoop {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop the loop. A stopped loop cannot be restarted.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.started.load(Ordering::Relaxed) && !self.stopped.load(Ordering::Relaxed)
    }

    /// Claim the right to start. Only the first caller on a live handle wins.
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    fn claim(&self) -> bool {
        !self.stopped.load(Ordering::Relaxed) && !self.started.swap(true, Ordering::Relaxed)
    }
}

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::Ordering;

    use canvas::engine::{Effect, Engine};
    use canvas::geom::Viewport;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    use super::FrameLoop;

    type FrameHolder = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

    fn schedule(holder: &FrameHolder) -> Result<i32, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let slot = holder.borrow();
        let cb = slot.as_ref().ok_or_else(|| JsValue::from_str("frame callback released"))?;
        window.request_animation_frame(cb.as_ref().unchecked_ref())
    }

    impl FrameLoop {
        /// Call `on_frame` with the frame timestamp on every animation frame
        /// until [`FrameLoop::stop`]. A failing frame is logged and the loop
        /// keeps running. Starting an already started or stopped loop is a
        /// no-op.
        ///
        /// # Errors
        ///
        /// Fails when there is no window to schedule frames on.
        pub fn start<F>(&self, label: &'static str, mut on_frame: F) -> Result<(), JsValue>
        where
            F: FnMut(f64) -> Result<(), JsValue> + 'static,
        {
            if !self.claim() {
                return Ok(());
            }
            let holder: FrameHolder = Rc::new(RefCell::new(None));

            let stopped = Arc::clone(&self.stopped);
            let holder_for_cb = Rc::clone(&holder);
            let cb = Closure::wrap(Box::new(move |now_ms: f64| {
                if stopped.load(Ordering::Relaxed) {
                    holder_for_cb.borrow_mut().take();
                    log::debug!("{label}: frame loop stopped");
                    return;
                }
                if let Err(err) = on_frame(now_ms) {
                    log::warn!("{label}: frame failed: {err:?}");
                }
                if let Err(err) = schedule(&holder_for_cb) {
                    log::warn!("{label}: could not schedule frame: {err:?}");
                    holder_for_cb.borrow_mut().take();
                }
            }) as Box<dyn FnMut(f64)>);
            *holder.borrow_mut() = Some(cb);

            if let Err(err) = schedule(&holder) {
                holder.borrow_mut().take();
                return Err(err);
            }
            log::debug!("{label}: frame loop started");
            Ok(())
        }

        /// Drive `engine` every frame. `before_frame` runs first and feeds
        /// fresh input (pointer, viewport) into the engine.
        ///
        /// # Errors
        ///
        /// Fails when there is no window to schedule frames on.
        pub fn drive<E, F>(&self, label: &'static str, engine: Engine<E>, mut before_frame: F) -> Result<(), JsValue>
        where
            E: Effect + 'static,
            F: FnMut(&mut Engine<E>) + 'static,
        {
            let mut engine = engine;
            self.start(label, move |now_ms| {
                before_frame(&mut engine);
                engine.frame(now_ms)
            })
        }
    }

    /// Viewport of the browser window in CSS pixels.
    #[must_use]
    pub fn window_viewport() -> Option<Viewport> {
        let window = web_sys::window()?;
        let width = window.inner_width().ok()?.as_f64()?;
        let height = window.inner_height().ok()?.as_f64()?;
        Some(Viewport::new(width, height, window.device_pixel_ratio()))
    }
}

#[cfg(feature = "hydrate")]
pub use browser::window_viewport;
