//! `setTimeout` / `clearTimeout` behind the `Timers` seam

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::schedule::{Task, Timers};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTimers;

impl Timers for BrowserTimers {
    /// Browser timeout id (0 when scheduling failed; clearing 0 is harmless)
    type Handle = i32;

    fn schedule(&mut self, delay_ms: u32, task: Task) -> i32 {
        let Some(window) = web_sys::window() else {
            log::warn!("No window, dropping timer");
            return 0;
        };
        let callback = Closure::once_into_js(move || task());
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            delay_ms as i32,
        ) {
            Ok(id) => id,
            Err(e) => {
                log::warn!("setTimeout failed: {:?}", e);
                0
            }
        }
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(handle);
        }
    }
}

/// Fire-and-forget delay
pub fn after(delay_ms: u32, f: impl FnOnce() + 'static) {
    BrowserTimers.schedule(delay_ms, Box::new(f));
}
