//! Debounced value commits
//!
//! A `Debouncer` holds a committed value and at most one pending value. Every
//! `set` cancels the outstanding timer and arms a new one, so rapid changes
//! collapse into a single commit of the last value. A zero delay commits on
//! the next scheduling tick rather than synchronously.
//!
//! State machine per debouncer: Idle → Pending (timer armed) → Committed.
//!
//! Timers are Tokio tasks; `set` must be called from within a Tokio runtime.

use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::trace;

/// Generation bookkeeping shared with the timer task
#[derive(Debug, Default)]
struct Generations {
    /// Bumped by every `set`
    latest: u64,
    /// Generation of the last commit or cancel
    settled: u64,
}

/// Debounced holder of a committed value
///
/// Dropping the debouncer aborts the outstanding timer.
pub struct Debouncer<T> {
    delay: Duration,
    committed: Arc<watch::Sender<T>>,
    generations: Arc<Mutex<Generations>>,
    timer: Option<JoinHandle<()>>,
}

impl<T> Debouncer<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Create a debouncer with an initial committed value
    pub fn new(initial: T, delay: Duration) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Debouncer {
            delay,
            committed: Arc::new(tx),
            generations: Arc::new(Mutex::new(Generations::default())),
            timer: None,
        }
    }

    /// Configured delay
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// The last committed value
    pub fn value(&self) -> T {
        self.committed.borrow().clone()
    }

    /// True while a value is waiting for its timer
    pub fn is_pending(&self) -> bool {
        let gens = self.generations.lock();
        gens.latest != gens.settled
    }

    /// Replace the pending value and restart the timer
    pub fn set(&mut self, value: T) {
        let generation = {
            let mut gens = self.generations.lock();
            gens.latest += 1;
            gens.latest
        };
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        let delay = self.delay;
        // Deadline is fixed here, not when the task first gets polled
        let deadline = Instant::now() + delay;
        let committed = Arc::clone(&self.committed);
        let generations = Arc::clone(&self.generations);
        self.timer = Some(tokio::spawn(async move {
            if delay.is_zero() {
                tokio::task::yield_now().await;
            } else {
                tokio::time::sleep_until(deadline).await;
            }

            // A newer `set` may have raced past the abort.
            let mut gens = generations.lock();
            if gens.latest != generation {
                return;
            }
            gens.settled = generation;
            committed.send_replace(value);
            trace!(generation, "Debounced value committed");
        }));
    }

    /// Drop the pending value, keeping the committed one
    pub fn cancel(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
        {
            let mut gens = self.generations.lock();
            gens.settled = gens.latest;
        }
        // Wake waiters so they observe the settled state
        self.committed.send_modify(|_| {});
    }

    /// Subscribe to commits
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.committed.subscribe()
    }

    /// Wait until nothing is pending and return the committed value
    ///
    /// Returns immediately when idle.
    pub async fn settled(&self) -> T {
        let mut rx = self.committed.subscribe();
        while self.is_pending() {
            if rx.changed().await.is_err() {
                break;
            }
        }
        self.value()
    }
}

impl<T> Drop for Debouncer<T> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("committed", &*self.committed.borrow())
            .finish_non_exhaustive()
    }
}
