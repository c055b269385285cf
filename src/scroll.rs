//! Scroll offset sharing and coalesced recomputation.
//!
//! A passive `scroll` listener publishes the latest offset into a
//! [`ScrollCell`] that consumers read from their own frame callbacks. Work
//! derived from the offset goes through a [`Coalescer`]: each new request
//! cancels the outstanding one, so at most one recompute runs per display
//! refresh and it sees the newest sample.

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

// ── Shared offset ────────────────────────────────────────────────────

/// Latest scroll offset, shared by every consumer on the page.
#[derive(Clone, Default)]
pub struct ScrollCell {
    value: Rc<Cell<f64>>,
}

impl ScrollCell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> f64 {
        self.value.get()
    }

    pub fn publish(&self, offset: f64) {
        self.value.set(offset);
    }
}

thread_local! {
    static PAGE_SCROLL: ScrollCell = ScrollCell::new();
}

/// The page-wide scroll cell.
pub fn page_scroll() -> ScrollCell {
    PAGE_SCROLL.with(|c| c.clone())
}

/// Drops samples that moved less than `threshold` since the last accepted one.
pub struct ScrollGate {
    last: Cell<f64>,
    threshold: f64,
}

impl ScrollGate {
    pub fn new(threshold: f64, initial: f64) -> Self {
        ScrollGate {
            last: Cell::new(initial),
            threshold,
        }
    }

    pub fn accept(&self, offset: f64) -> bool {
        if (offset - self.last.get()).abs() < self.threshold {
            return false;
        }
        self.last.set(offset);
        true
    }
}

// ── Frame scheduling ─────────────────────────────────────────────────

/// Source of "run once on the next display refresh" callbacks. The job run
/// on each refresh is fixed when the scheduler is built.
pub trait FrameScheduler {
    type Handle: Copy;

    fn request(&self) -> Option<Self::Handle>;
    fn cancel(&self, handle: Self::Handle);
}

pub struct Coalescer<S: FrameScheduler> {
    frames: S,
    pending: Cell<Option<S::Handle>>,
}

impl<S: FrameScheduler> Coalescer<S> {
    pub fn new(frames: S) -> Self {
        Coalescer {
            frames,
            pending: Cell::new(None),
        }
    }

    /// Cancel any outstanding recompute and schedule a fresh one.
    pub fn schedule(&self) {
        self.cancel();
        self.pending.set(self.frames.request());
    }

    pub fn cancel(&self) {
        if let Some(handle) = self.pending.take() {
            self.frames.cancel(handle);
        }
    }

    #[cfg(test)]
    fn frames(&self) -> &S {
        &self.frames
    }
}

/// Leading-edge variant: while a frame is pending further requests are
/// dropped. The job clears the shared `ticking` flag when it runs.
pub struct FrameThrottle<S: FrameScheduler> {
    frames: S,
    ticking: Rc<Cell<bool>>,
}

impl<S: FrameScheduler> FrameThrottle<S> {
    pub fn new(frames: S, ticking: Rc<Cell<bool>>) -> Self {
        FrameThrottle { frames, ticking }
    }

    pub fn request(&self) {
        if self.ticking.replace(true) {
            return;
        }
        if self.frames.request().is_none() {
            self.ticking.set(false);
        }
    }

    #[cfg(test)]
    fn frames(&self) -> &S {
        &self.frames
    }
}

/// `requestAnimationFrame` backed scheduler.
pub struct BrowserFrames {
    callback: Closure<dyn FnMut(f64)>,
}

impl BrowserFrames {
    pub fn new(mut job: impl FnMut() + 'static) -> Self {
        BrowserFrames {
            callback: Closure::wrap(Box::new(move |_: f64| job()) as Box<dyn FnMut(f64)>),
        }
    }
}

impl FrameScheduler for BrowserFrames {
    type Handle = i32;

    fn request(&self) -> Option<i32> {
        web_sys::window()?
            .request_animation_frame(self.callback.as_ref().unchecked_ref())
            .ok()
    }

    fn cancel(&self, handle: i32) {
        if let Some(window) = web_sys::window() {
            let _ = window.cancel_animation_frame(handle);
        }
    }
}

// ── Listener ─────────────────────────────────────────────────────────

pub fn window_scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Passive window listener, removed when dropped.
pub struct WindowListener {
    event: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl WindowListener {
    pub fn passive(event: &'static str, mut handler: impl FnMut() + 'static) -> Option<Self> {
        let window = web_sys::window()?;
        let closure = Closure::wrap(Box::new(move |_: web_sys::Event| handler()) as Box<dyn FnMut(web_sys::Event)>);
        let options = web_sys::AddEventListenerOptions::new();
        options.set_passive(true);
        window
            .add_event_listener_with_callback_and_add_event_listener_options(
                event,
                closure.as_ref().unchecked_ref(),
                &options,
            )
            .ok()?;
        Some(WindowListener { event, closure })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            let _ = window.remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
        }
    }
}

struct DriverCore<S: FrameScheduler> {
    cell: ScrollCell,
    gate: ScrollGate,
    coalescer: Coalescer<S>,
}

/// Gate + publish + coalesced recompute. `apply` (the scheduler's job)
/// reads the latest published offset once per refresh at most. Dropping the
/// driver removes its listener, if any, and cancels the pending frame.
pub struct ScrollDriver<S: FrameScheduler = BrowserFrames> {
    core: Rc<DriverCore<S>>,
    _listener: Option<WindowListener>,
}

impl<S: FrameScheduler> ScrollDriver<S> {
    /// Driver with no listener attached. `initial` is the offset the gate
    /// measures the first move against.
    pub fn new(cell: ScrollCell, threshold: f64, initial: f64, frames: S) -> Self {
        ScrollDriver {
            core: Rc::new(DriverCore {
                cell,
                gate: ScrollGate::new(threshold, initial),
                coalescer: Coalescer::new(frames),
            }),
            _listener: None,
        }
    }

    /// Recompute on the next refresh regardless of the gate.
    pub fn refresh(&self) {
        self.core.coalescer.schedule();
    }
}

impl<S: FrameScheduler> DriverCore<S> {
    fn sample(&self, offset: f64) {
        if self.gate.accept(offset) {
            self.cell.publish(offset);
            self.coalescer.schedule();
        }
    }
}

impl ScrollDriver<BrowserFrames> {
    /// Listen to window scroll and call `apply` with the newest offset.
    pub fn attach(cell: ScrollCell, threshold: f64, apply: impl Fn(f64) + 'static) -> Option<Self> {
        let reader = cell.clone();
        let initial = window_scroll_y();
        cell.publish(initial);
        let frames = BrowserFrames::new(move || apply(reader.get()));
        let mut driver = ScrollDriver::new(cell, threshold, initial, frames);

        let core = driver.core.clone();
        driver._listener = Some(WindowListener::passive("scroll", move || core.sample(window_scroll_y()))?);

        // Apply the initial position in case the page loaded scrolled.
        driver.refresh();
        Some(driver)
    }
}

impl<S: FrameScheduler> Drop for ScrollDriver<S> {
    fn drop(&mut self) {
        self.core.coalescer.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// Queue of requested frames, flushed by `tick`.
    struct ManualFrames {
        next: Cell<u32>,
        queued: Rc<RefCell<Vec<u32>>>,
        job: Rc<dyn Fn()>,
    }

    impl ManualFrames {
        fn new(job: impl Fn() + 'static) -> Self {
            ManualFrames {
                next: Cell::new(1),
                queued: Rc::new(RefCell::new(Vec::new())),
                job: Rc::new(job),
            }
        }

        /// Handle on the pending queue that outlives the scheduler.
        fn queue(&self) -> Rc<RefCell<Vec<u32>>> {
            self.queued.clone()
        }

        fn tick(&self) {
            let due = std::mem::take(&mut *self.queued.borrow_mut());
            for _ in due {
                (self.job)();
            }
        }
    }

    impl FrameScheduler for ManualFrames {
        type Handle = u32;

        fn request(&self) -> Option<u32> {
            let id = self.next.get();
            self.next.set(id + 1);
            self.queued.borrow_mut().push(id);
            Some(id)
        }

        fn cancel(&self, handle: u32) {
            self.queued.borrow_mut().retain(|h| *h != handle);
        }
    }

    #[test]
    fn burst_of_samples_recomputes_once_with_latest() {
        let cell = ScrollCell::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let reader = cell.clone();
        let log = seen.clone();
        let coalescer = Coalescer::new(ManualFrames::new(move || log.borrow_mut().push(reader.get())));

        for y in [10.0, 20.0, 35.0, 80.0, 120.0] {
            cell.publish(y);
            coalescer.schedule();
        }
        coalescer.frames().tick();

        assert_eq!(*seen.borrow(), vec![120.0]);
    }

    #[test]
    fn each_refresh_gets_its_own_recompute() {
        let cell = ScrollCell::new();
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let coalescer = Coalescer::new(ManualFrames::new(move || counter.set(counter.get() + 1)));

        cell.publish(5.0);
        coalescer.schedule();
        coalescer.frames().tick();
        cell.publish(9.0);
        coalescer.schedule();
        coalescer.schedule();
        coalescer.frames().tick();
        coalescer.frames().tick();

        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn cancel_drops_pending_work() {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let coalescer = Coalescer::new(ManualFrames::new(move || counter.set(counter.get() + 1)));
        coalescer.schedule();
        coalescer.cancel();
        coalescer.frames().tick();
        assert_eq!(runs.get(), 0);
    }

    #[test]
    fn cell_clones_share_the_offset() {
        let cell = ScrollCell::new();
        let reader = cell.clone();
        cell.publish(42.0);
        assert_eq!(reader.get(), 42.0);
    }

    fn recording_driver(threshold: f64) -> (ScrollDriver<ManualFrames>, Rc<RefCell<Vec<f64>>>) {
        let cell = ScrollCell::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let (reader, log) = (cell.clone(), seen.clone());
        let frames = ManualFrames::new(move || log.borrow_mut().push(reader.get()));
        (ScrollDriver::new(cell, threshold, 0.0, frames), seen)
    }

    #[test]
    fn driver_ignores_moves_below_threshold() {
        let (driver, seen) = recording_driver(1.0);
        driver.core.sample(0.4);
        driver.core.sample(0.9);
        driver.core.coalescer.frames().tick();
        assert!(seen.borrow().is_empty());
        assert_eq!(driver.core.cell.get(), 0.0);
    }

    #[test]
    fn driver_coalesces_a_burst_into_one_apply() {
        let (driver, seen) = recording_driver(0.5);
        for y in [3.0, 10.0, 10.2, 25.0, 60.0] {
            driver.core.sample(y);
        }
        driver.core.coalescer.frames().tick();
        assert_eq!(*seen.borrow(), vec![60.0]);

        driver.core.sample(61.0);
        driver.core.coalescer.frames().tick();
        assert_eq!(*seen.borrow(), vec![60.0, 61.0]);
    }

    #[test]
    fn dropping_driver_cancels_pending_frame() {
        let (driver, seen) = recording_driver(1.0);
        let queue = driver.core.coalescer.frames().queue();
        driver.core.sample(200.0);
        assert_eq!(queue.borrow().len(), 1);

        drop(driver);
        assert!(queue.borrow().is_empty());
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn refresh_bypasses_the_gate() {
        let (driver, seen) = recording_driver(1.0);
        driver.refresh();
        driver.core.coalescer.frames().tick();
        assert_eq!(*seen.borrow(), vec![0.0]);
    }

    #[test]
    fn throttle_runs_first_request_only_until_job_clears() {
        let ticking = Rc::new(Cell::new(false));
        let runs = Rc::new(Cell::new(0));
        let (counter, flag) = (runs.clone(), ticking.clone());
        let throttle = FrameThrottle::new(
            ManualFrames::new(move || {
                counter.set(counter.get() + 1);
                flag.set(false);
            }),
            ticking.clone(),
        );

        throttle.request();
        throttle.request();
        throttle.request();
        throttle.frames().tick();
        assert_eq!(runs.get(), 1);
        assert!(!ticking.get());

        throttle.request();
        throttle.frames().tick();
        assert_eq!(runs.get(), 2);
    }

    #[test]
    fn gate_ignores_small_moves() {
        let gate = ScrollGate::new(1.0, 0.0);
        assert!(!gate.accept(0.4));
        assert!(gate.accept(1.0));
        assert!(!gate.accept(1.9));
        assert!(gate.accept(0.0));
    }
}
