//! Interval re-fetch for live feeds.

use std::time::Duration;

use tokio::sync::watch;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::{Fetcher, QueryKey, QuerySource, QueryState};

/// Polls a source on a fixed interval until torn down.
///
/// Teardown stops future ticks only. A request already in flight is allowed
/// to finish, but its result is dropped.
pub struct Poller<T> {
    state: watch::Receiver<QueryState<T>>,
    cancel: CancellationToken,
    key: QueryKey,
    every: Duration,
}

impl<T: Clone + Send + Sync + 'static> Poller<T> {
    /// Fetch now and then every `every`.
    pub fn start(source: QuerySource<T>, every: Duration) -> Self {
        let (tx, rx) = watch::channel(QueryState::default());
        let cancel = CancellationToken::new();

        info!(
            key = %source.key.as_str(),
            interval_ms = every.as_millis() as u64,
            "Starting poller"
        );
        tokio::spawn(run_poll_loop(source.fetcher, every, tx, cancel.clone()));

        Self {
            state: rx,
            cancel,
            key: source.key,
            every,
        }
    }

    /// Replace the source if its key changed, restarting the timer.
    pub fn restart(&mut self, source: QuerySource<T>) -> bool {
        if source.key == self.key {
            return false;
        }
        *self = Self::start(source, self.every);
        true
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> QueryState<T> {
        self.state.borrow().clone()
    }

    /// Receiver notified after every settled fetch.
    pub fn subscribe(&self) -> watch::Receiver<QueryState<T>> {
        self.state.clone()
    }
}

impl<T> Poller<T> {
    pub fn teardown(&self) {
        if !self.cancel.is_cancelled() {
            debug!(key = %self.key.as_str(), "Tearing down poller");
            self.cancel.cancel();
        }
    }

    #[cfg(test)]
    pub fn is_torn_down(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl<T> Drop for Poller<T> {
    fn drop(&mut self) {
        self.teardown();
    }
}

async fn run_poll_loop<T>(
    fetcher: Fetcher<T>,
    every: Duration,
    tx: watch::Sender<QueryState<T>>,
    cancel: CancellationToken,
) {
    let mut ticker = tokio::time::interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            _ = ticker.tick() => {}
        }

        let result = fetcher().await;

        if cancel.is_cancelled() {
            debug!("Dropping response that arrived after teardown");
            break;
        }
        tx.send_modify(|state| state.settle(result));
    }

    debug!("Poller stopped");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::fetcher;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::time::sleep;

    fn counting_source(key: &str, calls: Arc<AtomicUsize>) -> QuerySource<usize> {
        let f = fetcher(move || {
            let calls = calls.clone();
            async move { Ok(calls.fetch_add(1, Ordering::SeqCst) + 1) }
        });
        QuerySource::new(f, QueryKey::new(&key))
    }

    #[tokio::test]
    async fn test_polls_repeatedly() {
        let calls = Arc::new(AtomicUsize::new(0));
        let poller = Poller::start(counting_source("w", calls.clone()), Duration::from_millis(10));

        sleep(Duration::from_millis(75)).await;

        assert!(calls.load(Ordering::SeqCst) >= 3);
        let state = poller.snapshot();
        assert!(!state.is_loading);
        assert!(state.data.unwrap_or(0) >= 3);
    }

    #[tokio::test]
    async fn test_teardown_stops_ticks() {
        let calls = Arc::new(AtomicUsize::new(0));
        let poller = Poller::start(counting_source("w", calls.clone()), Duration::from_millis(10));
        sleep(Duration::from_millis(35)).await;

        poller.teardown();
        assert!(poller.is_torn_down());
        let seen = calls.load(Ordering::SeqCst);

        sleep(Duration::from_millis(60)).await;
        assert_eq!(calls.load(Ordering::SeqCst), seen);
    }

    #[tokio::test]
    async fn test_late_response_is_dropped() {
        let slow = fetcher(|| async {
            sleep(Duration::from_millis(50)).await;
            Ok(7u32)
        });
        let source = QuerySource::new(slow, QueryKey::default());
        let poller = Poller::start(source, Duration::from_secs(60));

        sleep(Duration::from_millis(10)).await;
        poller.teardown();
        sleep(Duration::from_millis(80)).await;

        let state = poller.snapshot();
        assert!(state.data.is_none());
        assert!(state.is_loading);
    }

    #[tokio::test]
    async fn test_errors_are_state() {
        let failing = fetcher(|| async { Err::<u8, _>(anyhow::anyhow!("timeout")) });
        let source = QuerySource::new(failing, QueryKey::default());
        let poller = Poller::start(source, Duration::from_secs(60));

        let mut rx = poller.subscribe();
        rx.changed().await.unwrap();

        let state = poller.snapshot();
        assert_eq!(state.error.map(|e| e.to_string()), Some("timeout".to_string()));
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_restart_only_on_new_key() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut poller =
            Poller::start(counting_source("a", calls.clone()), Duration::from_secs(60));
        sleep(Duration::from_millis(10)).await;

        assert!(!poller.restart(counting_source("a", calls.clone())));
        sleep(Duration::from_millis(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(poller.restart(counting_source("b", calls.clone())));
        sleep(Duration::from_millis(10)).await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
