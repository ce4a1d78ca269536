//! Debounce and throttle wrappers for callbacks.
//!
//! Each wrapper owns its timer state; two wrappers built from the same
//! callback never share a window. Arguments travel as a single value, so a
//! multi-argument callback takes a tuple. Whatever the closure captures plays
//! the role of its receiver.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::middleware::NoOpMiddleware;
use governor::state::direct::NotKeyed;
use governor::state::InMemoryState;
use governor::{Quota, RateLimiter};
use tokio::task::JoinHandle;

/// Wraps `callback` so that only the last call of a burst fires, `wait`
/// after that call.
pub fn debounce<F>(callback: F, wait: Duration) -> Debounced<F> {
    Debounced {
        callback: Arc::new(callback),
        wait,
        pending: Mutex::new(None),
    }
}

/// Wraps `callback` so that it runs at most once per `limit` window,
/// dropping calls made while the window is open.
pub fn throttle<F>(callback: F, limit: Duration) -> Throttled<F> {
    throttle_with_clock(callback, limit, &DefaultClock::default())
}

/// [`throttle`] measured against an explicit clock.
pub fn throttle_with_clock<F, C>(callback: F, limit: Duration, clock: &C) -> Throttled<F, C>
where
    C: Clock,
{
    // A zero window cannot form a quota and means no throttling at all.
    let limiter =
        Quota::with_period(limit).map(|quota| RateLimiter::direct_with_clock(quota, clock));
    Throttled { callback, limiter }
}

/// Trailing-edge debounced callback. Timers run as Tokio tasks, so
/// [`Debounced::call`] must be made from within a runtime.
pub struct Debounced<F> {
    callback: Arc<F>,
    wait: Duration,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<F> Debounced<F> {
    /// Cancels any scheduled invocation and schedules `callback(args)` after
    /// the wait period.
    pub fn call<A>(&self, args: A)
    where
        F: Fn(A) + Send + Sync + 'static,
        A: Send + 'static,
    {
        let callback = Arc::clone(&self.callback);
        let wait = self.wait;

        let mut pending = self
            .pending
            .lock()
            .expect("debounce timer lock should not be poisoned");
        if let Some(previous) = pending.take() {
            previous.abort();
        }
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(wait).await;
            callback(args);
        }));
    }

    /// Drops the scheduled invocation, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let mut pending = self
            .pending
            .lock()
            .expect("debounce timer lock should not be poisoned");
        match pending.take() {
            Some(task) => {
                let was_pending = !task.is_finished();
                task.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .expect("debounce timer lock should not be poisoned")
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    pub const fn wait(&self) -> Duration {
        self.wait
    }
}

impl<F> Drop for Debounced<F> {
    fn drop(&mut self) {
        if let Ok(pending) = self.pending.get_mut() {
            if let Some(task) = pending.take() {
                task.abort();
            }
        }
    }
}

/// Leading-edge throttled callback.
pub struct Throttled<F, C = DefaultClock>
where
    C: Clock,
{
    callback: F,
    limiter: Option<RateLimiter<NotKeyed, InMemoryState, C, NoOpMiddleware<C::Instant>>>,
}

impl<F, C> Throttled<F, C>
where
    C: Clock,
{
    /// Invokes `callback(args)` unless the cooldown window is open.
    ///
    /// Returns the callback's result, or `None` when the call was dropped.
    pub fn call<A, R>(&self, args: A) -> Option<R>
    where
        F: Fn(A) -> R,
    {
        if let Some(limiter) = &self.limiter {
            limiter.check().ok()?;
        }
        Some((self.callback)(args))
    }
}
