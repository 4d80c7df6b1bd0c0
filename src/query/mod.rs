//! Request wrappers exposing `{data, is_loading, error}` over async fetches.
//!
//! A [`QuerySource`] pairs a fetch operation with a [`QueryKey`] built from
//! its parameters. [`Query`] re-issues the request when the key changes,
//! [`Poller`] also re-issues it on a timer, and [`HealthMonitor`] reduces a
//! probe to a connectivity flag.

pub mod endpoints;
mod health;
mod poller;

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use futures::future::{BoxFuture, FutureExt};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::QueryError;

pub use health::{HealthMonitor, DEFAULT_HEALTH_INTERVAL};
pub use poller::Poller;

/// No-argument async fetch operation.
pub type Fetcher<T> = Arc<dyn Fn() -> BoxFuture<'static, Result<T>> + Send + Sync>;

/// Box a closure returning a future into a [`Fetcher`].
pub fn fetcher<T, F, Fut>(f: F) -> Fetcher<T>
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<T>> + Send + 'static,
{
    Arc::new(move || f().boxed())
}

/// Fingerprint of the inputs a request depends on.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryKey(String);

impl QueryKey {
    pub fn new(deps: &impl Serialize) -> Self {
        Self(serde_json::to_string(deps).unwrap_or_default())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A fetch operation and the key it was built from.
pub struct QuerySource<T> {
    pub fetcher: Fetcher<T>,
    pub key: QueryKey,
}

impl<T> QuerySource<T> {
    pub fn new(fetcher: Fetcher<T>, key: QueryKey) -> Self {
        Self { fetcher, key }
    }
}

impl<T> Clone for QuerySource<T> {
    fn clone(&self) -> Self {
        Self {
            fetcher: self.fetcher.clone(),
            key: self.key.clone(),
        }
    }
}

/// What a consumer sees of a request.
#[derive(Debug, Clone)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub is_loading: bool,
    pub error: Option<QueryError>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            is_loading: true,
            error: None,
        }
    }
}

impl<T> QueryState<T> {
    /// Record a finished fetch. A failure keeps the previous data.
    fn settle(&mut self, result: Result<T>) {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => {
                warn!(error = %e, "Query failed");
                self.error = Some(QueryError::from(e));
            }
        }
        self.is_loading = false;
    }
}

/// One-shot request, re-issued on demand or when its key changes.
pub struct Query<T> {
    source: QuerySource<T>,
    state: Arc<RwLock<QueryState<T>>>,
}

impl<T: Clone + Send + Sync + 'static> Query<T> {
    /// Create the query and issue the first request.
    pub async fn mount(source: QuerySource<T>) -> Self {
        let query = Self {
            source,
            state: Arc::new(RwLock::new(QueryState::default())),
        };
        query.refetch().await;
        query
    }

    /// Issue the request again; errors end up in the state.
    pub async fn refetch(&self) {
        {
            let mut state = self.state.write().await;
            state.is_loading = true;
            state.error = None;
        }

        debug!(key = %self.source.key.as_str(), "Fetching");
        let result = (self.source.fetcher)().await;

        self.state.write().await.settle(result);
    }

    /// Swap in a new source. Refetches only if the key changed.
    pub async fn set_source(&mut self, source: QuerySource<T>) -> bool {
        let changed = source.key != self.source.key;
        self.source = source;
        if changed {
            self.refetch().await;
        }
        changed
    }

    pub async fn snapshot(&self) -> QueryState<T> {
        self.state.read().await.clone()
    }

    pub fn key(&self) -> &QueryKey {
        &self.source.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting_source(key: &str, calls: Arc<AtomicUsize>) -> QuerySource<usize> {
        let f = fetcher(move || {
            let calls = calls.clone();
            async move { Ok(calls.fetch_add(1, Ordering::SeqCst) + 1) }
        });
        QuerySource::new(f, QueryKey::new(&key))
    }

    #[tokio::test]
    async fn test_mount_fetches_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let query = Query::mount(counting_source("a", calls.clone())).await;

        let state = query.snapshot().await;
        assert_eq!(state.data, Some(1));
        assert!(!state.is_loading);
        assert!(state.error.is_none());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_refetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let query = Query::mount(counting_source("a", calls.clone())).await;

        query.refetch().await;
        assert_eq!(query.snapshot().await.data, Some(2));
    }

    #[tokio::test]
    async fn test_key_change_triggers_refetch() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut query = Query::mount(counting_source("a", calls.clone())).await;

        assert!(!query.set_source(counting_source("a", calls.clone())).await);
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        assert!(query.set_source(counting_source("b", calls.clone())).await);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(query.key(), &QueryKey::new(&"b"));
    }

    #[tokio::test]
    async fn test_error_is_captured() {
        let source = QuerySource::new(
            fetcher(|| async { Err::<u8, _>(anyhow::anyhow!("backend down")) }),
            QueryKey::default(),
        );
        let query = Query::mount(source).await;

        let state = query.snapshot().await;
        assert!(state.data.is_none());
        assert!(!state.is_loading);
        assert_eq!(state.error.map(|e| e.to_string()), Some("backend down".to_string()));
    }

    #[test]
    fn test_key_tracks_params() {
        #[derive(Serialize)]
        struct Params {
            limit: u32,
        }
        assert_eq!(QueryKey::new(&Params { limit: 1 }), QueryKey::new(&Params { limit: 1 }));
        assert_ne!(QueryKey::new(&Params { limit: 1 }), QueryKey::new(&Params { limit: 2 }));
    }
}
