//! Timers and debounce
//!
//! The browser's `setTimeout`/`clearTimeout` sit behind `Timers` so the
//! debounce logic can be driven by a manual clock in tests.

/// A deferred task
pub type Task = Box<dyn FnOnce()>;

pub trait Timers {
    type Handle;

    /// Run `task` once after `delay_ms`
    fn schedule(&mut self, delay_ms: u32, task: Task) -> Self::Handle;

    /// Cancel a pending task. Cancelling one that already ran is a no-op.
    fn cancel(&mut self, handle: Self::Handle);
}

/// Trailing-edge debounce: only the last trigger in a burst runs, `wait_ms`
/// after it arrived.
pub struct Debouncer<T: Timers> {
    timers: T,
    wait_ms: u32,
    pending: Option<T::Handle>,
}

impl<T: Timers> Debouncer<T> {
    pub fn new(timers: T, wait_ms: u32) -> Self {
        Self {
            timers,
            wait_ms,
            pending: None,
        }
    }

    /// Replace any pending task with `task`
    pub fn trigger(&mut self, task: Task) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
        self.pending = Some(self.timers.schedule(self.wait_ms, task));
    }

    /// Drop the pending task, if any
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            self.timers.cancel(handle);
        }
    }
}
