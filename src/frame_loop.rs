use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Per-frame timing handed to the tick callback.
#[derive(Debug, Clone, Copy)]
pub struct FrameTime {
    /// Seconds since the loop started.
    pub elapsed: f64,
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

/// requestAnimationFrame loop that keeps running until stopped or dropped.
pub struct FrameLoop {
    running: Rc<Cell<bool>>,
    handle: Rc<Cell<Option<i32>>>,
    closure: TickClosure,
}

impl FrameLoop {
    pub fn start(mut tick: impl FnMut(FrameTime) + 'static) -> Option<FrameLoop> {
        let window = web_sys::window()?;

        let running = Rc::new(Cell::new(true));
        let handle = Rc::new(Cell::new(None));
        let f: TickClosure = Rc::new(RefCell::new(None));
        let g = f.clone();

        let start_time = Rc::new(Cell::new(None::<f64>));

        let running_tick = running.clone();
        let handle_tick = handle.clone();
        *g.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
            if !running_tick.get() {
                return;
            }
            let start = start_time.get().unwrap_or(timestamp);
            start_time.set(Some(start));

            tick(FrameTime {
                elapsed: (timestamp - start) / 1000.0,
            });

            // Request next frame
            if running_tick.get() {
                if let (Some(window), Some(cb)) = (web_sys::window(), f.borrow().as_ref()) {
                    handle_tick.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
                }
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(cb) = g.borrow().as_ref() {
            handle.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
        }

        Some(FrameLoop { running, handle, closure: g })
    }

    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(window), Some(id)) = (web_sys::window(), self.handle.take()) {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
        // Break the closure's self-reference so it can be freed.
        self.closure.borrow_mut().take();
    }
}
