//! Timer port.

use std::future::Future;
use std::time::Duration;

/// Suspends the current task for a fixed delay.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

impl<T: Sleeper> Sleeper for std::rc::Rc<T> {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
        (**self).sleep(duration)
    }
}
