use crate::Result;
use crate::error::{DEFAULT_ERROR_MESSAGE, Error};
use crate::utils::get_window;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

/// One-shot deferred callbacks. Scheduled tasks can't be cancelled.
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<()>;
}

/// [`Scheduler`] backed by `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Result<()> {
        let timeout = i32::try_from(delay.as_millis()).map_err(|error| {
            Error::new(
                DEFAULT_ERROR_MESSAGE,
                &format!("Delay is too long [delay: {delay:?}]: {error}"),
            )
        })?;
        let callback = Closure::once_into_js(move || task());
        get_window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.unchecked_ref(),
                timeout,
            )?;
        Ok(())
    }
}
