//! Browser callbacks: DOM event listeners and the requestAnimationFrame loop.
//!
//! Both own their `Closure`s and unregister on drop, so tearing the runner
//! down stops every callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, Window};

/// One registered event listener.
pub struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn bind(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// Self-rescheduling requestAnimationFrame loop. Cancelled on drop.
pub struct AnimationLoop {
    window: Window,
    handle: Rc<Cell<i32>>,
    callback: FrameCallback,
}

impl AnimationLoop {
    /// Call `frame` with the rAF timestamp (ms) once per display frame.
    pub fn start(window: Window, mut frame: impl FnMut(f64) + 'static) -> Result<Self, JsValue> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let handle = Rc::new(Cell::new(0));

        let next = callback.clone();
        let next_handle = handle.clone();
        let w = window.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
            frame(ts);
            if let Some(cb) = next.borrow().as_ref() {
                match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
                    Ok(id) => next_handle.set(id),
                    Err(err) => log::error!("requestAnimationFrame failed: {:?}", err),
                }
            }
        }) as Box<dyn FnMut(f64)>));

        let first = callback
            .borrow()
            .as_ref()
            .map(|cb| window.request_animation_frame(cb.as_ref().unchecked_ref()));
        handle.set(first.transpose()?.unwrap_or(0));

        Ok(Self {
            window,
            handle,
            callback,
        })
    }

    pub fn stop(&mut self) {
        let _ = self.window.cancel_animation_frame(self.handle.get());
        // Breaks the closure's reference to itself.
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Seconds since the previous frame, from rAF timestamps in milliseconds.
/// Zero on the first frame or when the clock runs backwards.
pub fn frame_dt(previous: Option<f64>, now: f64) -> f32 {
    match previous {
        Some(prev) if now > prev => ((now - prev) / 1000.0) as f32,
        _ => 0.0,
    }
}
