//! Browser timers for the app layer's [`Sleeper`] port.

use std::future::Future;
use std::time::Duration;

use gloo_timers::future::TimeoutFuture;
use pyropanel_app::ports::Sleeper;

/// Sleeps with `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

impl Sleeper for GlooSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        TimeoutFuture::new(timeout_millis(duration))
    }
}

/// `setTimeout` takes a 32-bit delay; longer waits saturate.
fn timeout_millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
