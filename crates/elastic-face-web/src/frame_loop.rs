//! `requestAnimationFrame` driver with an owned, cancellable handle.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

struct LoopState {
    running: Cell<bool>,
    request_id: Cell<Option<i32>>,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl LoopState {
    fn request_next(&self) {
        let Some(window) = web::window() else {
            return;
        };
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => self.request_id.set(Some(id)),
            Err(e) => {
                log::error!("requestAnimationFrame failed: {:?}", e);
                self.running.set(false);
            }
        }
    }
}

/// Keeps the loop alive. Dropping it cancels the pending frame.
pub struct FrameLoopHandle {
    state: Rc<LoopState>,
}

impl FrameLoopHandle {
    pub fn is_running(&self) -> bool {
        self.state.running.get()
    }

    /// Cancel the pending frame and release the callback. Idempotent.
    pub fn stop(&self) {
        if !self.state.running.replace(false) {
            return;
        }
        if let (Some(window), Some(id)) = (web::window(), self.state.request_id.take()) {
            let _ = window.cancel_animation_frame(id);
        }
        self.state.callback.borrow_mut().take();
        log::debug!("frame loop stopped");
    }
}

impl Drop for FrameLoopHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Start calling `on_frame(timestamp_ms)` once per animation frame until the
/// returned handle is stopped or dropped.
///
/// `on_frame` must not stop its own loop; stop it from outside the callback.
pub fn start(mut on_frame: impl FnMut(f64) + 'static) -> Result<FrameLoopHandle, JsValue> {
    if web::window().is_none() {
        return Err(JsValue::from_str("frame loop needs a window"));
    }

    let state = Rc::new(LoopState {
        running: Cell::new(true),
        request_id: Cell::new(None),
        callback: RefCell::new(None),
    });

    let weak: Weak<LoopState> = Rc::downgrade(&state);
    let callback = Closure::wrap(Box::new(move |timestamp: f64| {
        let Some(state) = weak.upgrade() else {
            return;
        };
        if !state.running.get() {
            return;
        }
        state.request_id.set(None);
        on_frame(timestamp);
        if state.running.get() {
            state.request_next();
        }
    }) as Box<dyn FnMut(f64)>);

    *state.callback.borrow_mut() = Some(callback);
    state.request_next();
    log::debug!("frame loop started");

    Ok(FrameLoopHandle { state })
}
