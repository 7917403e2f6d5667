//! Last-call-wins debouncing on the tokio timer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::trace;

use crate::UtilError;

/// Delays a callback until calls stop arriving for `delay`.
///
/// Each [`call`](Debouncer::call) cancels the pending invocation, if any,
/// and schedules a new one with the latest arguments. Dropping the
/// debouncer leaves an already scheduled invocation in place.
pub struct Debouncer<A> {
    delay: Duration,
    callback: Arc<dyn Fn(A) + Send + Sync>,
    runtime: Handle,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    /// Creates a debouncer bound to the tokio runtime of the caller.
    pub fn new<F>(delay: Duration, callback: F) -> Result<Self, UtilError>
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        let runtime = Handle::try_current().map_err(|_| UtilError::MissingRuntime)?;
        Ok(Self {
            delay,
            callback: Arc::new(callback),
            runtime,
            pending: Mutex::new(None),
        })
    }

    /// Schedules `callback(args)` after the delay, superseding any pending call.
    pub fn call(&self, args: A) {
        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        let task = self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            callback(args);
        });

        if let Some(previous) = self.pending().replace(task) {
            if !previous.is_finished() {
                trace!(delay_ms = delay.as_millis(), "superseding pending debounced call");
            }
            previous.abort();
        }
    }

    /// Cancels the pending invocation. Returns true if one was waiting.
    pub fn cancel(&self) -> bool {
        match self.pending().take() {
            Some(task) => {
                let waiting = !task.is_finished();
                task.abort();
                waiting
            }
            None => false,
        }
    }

    /// True while an invocation is scheduled and has not completed.
    pub fn is_pending(&self) -> bool {
        self.pending()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    fn pending(&self) -> MutexGuard<'_, Option<JoinHandle<()>>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Arc<Mutex<Vec<&'static str>>>, impl Fn(&'static str) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        (seen, move |text: &'static str| sink.lock().unwrap().push(text))
    }

    #[test]
    fn requires_a_runtime() {
        let result = Debouncer::<()>::new(Duration::from_millis(10), |_| {});
        assert!(matches!(result, Err(UtilError::MissingRuntime)));
    }

    #[tokio::test(start_paused = true)]
    async fn only_the_last_call_in_a_burst_runs() {
        let (seen, callback) = recorder();
        let debounced = Debouncer::new(Duration::from_millis(1000), callback).unwrap();

        debounced.call("first");
        debounced.call("second");
        debounced.call("third");
        assert!(debounced.is_pending());

        tokio::time::sleep(Duration::from_millis(999)).await;
        assert!(seen.lock().unwrap().is_empty());

        tokio::time::sleep(Duration::from_millis(2)).await;
        tokio::task::yield_now().await;
        assert_eq!(*seen.lock().unwrap(), ["third"]);
        assert!(!debounced.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn separated_calls_each_run() {
        let (seen, callback) = recorder();
        let debounced = Debouncer::new(Duration::from_millis(100), callback).unwrap();

        debounced.call("a");
        tokio::time::sleep(Duration::from_millis(150)).await;
        debounced.call("b");
        tokio::time::sleep(Duration::from_millis(150)).await;
        tokio::task::yield_now().await;

        assert_eq!(*seen.lock().unwrap(), ["a", "b"]);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_drops_the_pending_call() {
        let (seen, callback) = recorder();
        let debounced = Debouncer::new(Duration::from_millis(100), callback).unwrap();

        debounced.call("never");
        assert!(debounced.cancel());
        assert!(!debounced.cancel());

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert!(seen.lock().unwrap().is_empty());
    }
}
