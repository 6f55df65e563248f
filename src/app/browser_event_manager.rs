// src/app/browser_event_manager.rs
//! Handles the browser-side plumbing: the window resize listener and the
//! requestAnimationFrame loop that drives the session while something is moving.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use log::{debug, error};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Event};

use crate::app::lock_or_recover;
use crate::components::Viewport;
use crate::logic::session::ReadingSession;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Reads the current window size, or `None` outside a browser page.
pub(crate) fn window_viewport() -> Option<Viewport> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport::new(width, height))
}

/// `performance.now()` in milliseconds (0 when unavailable).
pub(crate) fn now_ms() -> f64 {
    window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or(0.0)
}

/// A requestAnimationFrame loop that keeps asking for frames while `tick` returns true.
///
/// The loop stops itself once `tick` says nothing is moving; `kick` restarts it.
/// `stop` cancels the pending frame and drops the closure (breaking the Rc cycle).
#[derive(Clone)]
pub(crate) struct FrameLoop {
    callback: Rc<RefCell<Option<FrameClosure>>>,
    handle: Rc<Cell<Option<i32>>>,
}

impl FrameLoop {
    pub(crate) fn new<F>(mut tick: F) -> Self
    where
        F: FnMut(f64) -> bool + 'static,
    {
        let callback: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));
        let handle: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let callback_clone = Rc::clone(&callback);
        let handle_clone = Rc::clone(&handle);
        let closure = Closure::wrap(Box::new(move |timestamp: f64| {
            handle_clone.set(None);
            if !tick(timestamp) {
                debug!("Frame loop idle");
                return;
            }
            // tick の中で kick されていたら、もう次のフレームは予約済み
            if handle_clone.get().is_some() {
                return;
            }
            if let Err(e) = request_frame(&callback_clone, &handle_clone) {
                error!("Failed to request next animation frame: {:?}", e);
            }
        }) as Box<dyn FnMut(f64)>);
        *callback.borrow_mut() = Some(closure);

        Self { callback, handle }
    }

    pub(crate) fn is_running(&self) -> bool {
        self.handle.get().is_some()
    }

    /// Requests a frame unless one is already pending.
    pub(crate) fn kick(&self) -> Result<(), JsValue> {
        if self.is_running() {
            return Ok(());
        }
        request_frame(&self.callback, &self.handle)
    }

    pub(crate) fn stop(&self) -> Result<(), JsValue> {
        if let Some(id) = self.handle.take() {
            let window = window().ok_or("Failed to get window")?;
            window.cancel_animation_frame(id)?;
        }
        self.callback.borrow_mut().take();
        Ok(())
    }
}

fn request_frame(
    callback: &Rc<RefCell<Option<FrameClosure>>>,
    handle: &Rc<Cell<Option<i32>>>,
) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;
    if let Some(closure) = callback.borrow().as_ref() {
        let id = window.request_animation_frame(closure.as_ref().unchecked_ref())?;
        handle.set(Some(id));
    }
    Ok(())
}

/// Attaches a resize listener that keeps the session's viewport in sync with the window.
pub(crate) fn attach_resize_listener(
    session_arc: Arc<Mutex<ReadingSession>>,
    frame_loop: FrameLoop,
    resize_closure_arc: Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
) -> Result<(), JsValue> {
    let window = window().ok_or("Failed to get window")?;

    let closure = Closure::wrap(Box::new(move |_event: Event| {
        if let Some(viewport) = window_viewport() {
            lock_or_recover(&session_arc).set_viewport(viewport);
        }
        // 配置が変わるので1フレーム描き直してもらう
        if let Err(e) = frame_loop.kick() {
            error!("Failed to schedule redraw after resize: {:?}", e);
        }
    }) as Box<dyn FnMut(Event)>);

    window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
    *lock_or_recover(&resize_closure_arc) = Some(closure);
    debug!("Attached resize listener.");
    Ok(())
}

/// Detaches the resize listener, if attached.
pub(crate) fn detach_resize_listener(
    resize_closure_arc: &Arc<Mutex<Option<Closure<dyn FnMut(Event)>>>>,
) -> Result<(), JsValue> {
    if let Some(closure) = lock_or_recover(resize_closure_arc).take() {
        let window = window().ok_or("Failed to get window")?;
        window.remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        debug!("Detached resize listener.");
    }
    Ok(())
}
