//! Self-rescheduling `requestAnimationFrame` loop with a cancel handle.
//!
//! The loop calls its frame callback once per animation frame until the
//! handle is cancelled. Cancelling only flips a shared flag; the next frame
//! runs the stop hook instead of the callback and then drops the closure.
//! The handle is `Send + Sync` so it can be captured by `on_cleanup`, while
//! the frame callbacks themselves stay on the main thread.

#[cfg(test)]
#[path = "frame_loop_test.rs"]
mod frame_loop_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared run/cancel flags for one frame loop.
#[derive(Clone, Debug, Default)]
pub struct FrameLoopHandle {
    running: Arc<AtomicBool>,
    cancelled: Arc<AtomicBool>,
}

impl FrameLoopHandle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether frames are still being scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Relaxed) && !self.is_cancelled()
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Stop the loop. Idempotent; a cancelled handle never runs again.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
        self.running.store(false, Ordering::Relaxed);
    }

    /// Mark the loop as scheduled. Returns `false` if it was cancelled first.
    fn mark_running(&self) -> bool {
        if self.is_cancelled() {
            return false;
        }
        self.running.store(true, Ordering::Relaxed);
        true
    }
}

/// Start calling `on_frame` once per animation frame until `handle` is
/// cancelled. `on_stop` runs once, on the frame that observes the stop.
///
/// Returns `false` if the loop never started: the handle was already
/// cancelled or the first frame could not be requested.
#[cfg(feature = "csr")]
pub fn start(handle: &FrameLoopHandle, mut on_frame: impl FnMut() + 'static, on_stop: impl FnOnce() + 'static) -> bool {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let Some(window) = web_sys::window() else {
        log::warn!("frame loop not started: no window");
        return false;
    };
    if !handle.mark_running() {
        return false;
    }

    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let handle_for_cb = handle.clone();
    let window_for_cb = window.clone();
    let mut on_stop = Some(on_stop);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        if !handle_for_cb.is_cancelled() {
            on_frame();
            let rescheduled = holder_for_cb.borrow().as_ref().is_some_and(|next| {
                window_for_cb
                    .request_animation_frame(next.as_ref().unchecked_ref())
                    .is_ok()
            });
            if rescheduled {
                return;
            }
            log::warn!("frame loop stopped: requestAnimationFrame failed");
            handle_for_cb.cancel();
        }
        if let Some(on_stop) = on_stop.take() {
            on_stop();
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if let Err(err) = window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        log::warn!("frame loop not started: {err:?}");
        handle.cancel();
        return false;
    }
    *holder.borrow_mut() = Some(cb);
    true
}
