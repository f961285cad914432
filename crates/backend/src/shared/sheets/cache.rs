//! Request cache: memoizes fetch results per key and lets concurrent
//! callers of the same key share one in-flight request.

use chrono::{DateTime, Duration, Utc};
use futures_util::future::{BoxFuture, FutureExt, Shared};
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::clock::ClockPort;
use super::error::TransportError;

pub const DEFAULT_TTL_MS: u64 = 30_000;

/// Per-call cache options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchOptions {
    /// Skip the lookup; the fresh result still replaces the entry
    pub force: bool,
    /// Entry lifetime, the cache default when `None`
    pub ttl_ms: Option<u64>,
}

impl FetchOptions {
    pub fn forced(force: bool) -> Self {
        Self {
            force,
            ..Self::default()
        }
    }
}

type SharedResult<T> = Shared<BoxFuture<'static, Result<T, TransportError>>>;

struct CacheEntry<T> {
    id: u64,
    expires_at: DateTime<Utc>,
    result: SharedResult<T>,
}

pub struct RequestCache<T> {
    entries: Mutex<HashMap<String, CacheEntry<T>>>,
    clock: Arc<dyn ClockPort>,
    default_ttl_ms: u64,
    next_id: AtomicU64,
}

impl<T> RequestCache<T>
where
    T: Clone + Send + Sync + 'static,
{
    pub fn new(clock: Arc<dyn ClockPort>, default_ttl_ms: u64) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            clock,
            default_ttl_ms,
            next_id: AtomicU64::new(1),
        }
    }

    /// Returns the cached or in-flight result for `key`, or starts `producer`.
    ///
    /// The lookup and the insertion of a new entry happen under one lock, so
    /// two callers can never both miss and both fetch. A failed result is
    /// evicted before it is returned; every caller that shared it sees the
    /// same error and the next call starts over.
    pub async fn get_or_fetch<F, Fut>(
        &self,
        key: &str,
        producer: F,
        options: FetchOptions,
    ) -> Result<T, TransportError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, TransportError>> + Send + 'static,
    {
        let (id, result) = {
            let mut entries = self.entries.lock().await;
            let now = self.clock.now();

            let hit = if options.force {
                None
            } else {
                // A settled failure whose caller was dropped before it could
                // evict the entry counts as a miss.
                entries
                    .get(key)
                    .filter(|entry| entry.expires_at > now)
                    .filter(|entry| !matches!(entry.result.peek(), Some(Err(_))))
                    .map(|entry| (entry.id, entry.result.clone()))
            };

            match hit {
                Some(hit) => {
                    tracing::debug!("cache hit: {}", key);
                    hit
                }
                None => {
                    tracing::debug!("cache miss: {} (force={})", key, options.force);
                    let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                    let result = producer().boxed().shared();
                    let ttl_ms = options.ttl_ms.unwrap_or(self.default_ttl_ms);
                    let expires_at = now
                        .checked_add_signed(Duration::milliseconds(ttl_ms.min(i64::MAX as u64) as i64))
                        .unwrap_or(DateTime::<Utc>::MAX_UTC);
                    entries.insert(
                        key.to_string(),
                        CacheEntry {
                            id,
                            expires_at,
                            result: result.clone(),
                        },
                    );
                    (id, result)
                }
            }
        };

        let outcome = result.await;
        if let Err(e) = &outcome {
            tracing::warn!("fetch failed, evicting {}: {}", key, e);
            self.evict(key, id).await;
        }
        outcome
    }

    /// Removes the entry only if it is still the one that failed;
    /// a forced refresh may have replaced it in the meantime.
    async fn evict(&self, key: &str, id: u64) {
        let mut entries = self.entries.lock().await;
        if entries.get(key).is_some_and(|entry| entry.id == id) {
            entries.remove(key);
        }
    }

    pub async fn clear(&self) {
        self.entries.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::sheets::testing::ManualClock;
    use std::sync::atomic::AtomicUsize;

    fn cache(clock: &Arc<ManualClock>) -> RequestCache<String> {
        RequestCache::new(clock.clone(), DEFAULT_TTL_MS)
    }

    /// Producer that counts its invocations and answers after a short delay
    fn counting_producer(
        calls: &Arc<AtomicUsize>,
        value: &str,
    ) -> impl FnOnce() -> BoxFuture<'static, Result<String, TransportError>> {
        let calls = calls.clone();
        let value = value.to_string();
        move || {
            async move {
                let n = calls.fetch_add(1, Ordering::SeqCst) + 1;
                tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                Ok(format!("{}#{}", value, n))
            }
            .boxed()
        }
    }

    fn failing_producer(
        calls: &Arc<AtomicUsize>,
    ) -> impl FnOnce() -> BoxFuture<'static, Result<String, TransportError>> {
        let calls = calls.clone();
        move || {
            async move {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(TransportError::Status {
                    status: 429,
                    body: "rate limited".to_string(),
                })
            }
            .boxed()
        }
    }

    #[tokio::test]
    async fn test_concurrent_calls_share_one_fetch() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            cache.get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::default()),
            cache.get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::default()),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.unwrap(), "v#1");
        assert_eq!(b.unwrap(), "v#1");
    }

    #[tokio::test]
    async fn test_distinct_keys_fetch_separately() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        let (a, b) = tokio::join!(
            cache.get_or_fetch("a", counting_producer(&calls, "a"), FetchOptions::default()),
            cache.get_or_fetch("b", counting_producer(&calls, "b"), FetchOptions::default()),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(a.unwrap().starts_with("a#"));
        assert!(b.unwrap().starts_with("b#"));
    }

    #[tokio::test]
    async fn test_entry_expires_after_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));
        let opts = FetchOptions::default();

        let first = cache.get_or_fetch("k", counting_producer(&calls, "v"), opts).await;
        assert_eq!(first.unwrap(), "v#1");

        clock.advance_ms(29_999);
        let cached = cache.get_or_fetch("k", counting_producer(&calls, "v"), opts).await;
        assert_eq!(cached.unwrap(), "v#1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        clock.advance_ms(1);
        let refreshed = cache.get_or_fetch("k", counting_producer(&calls, "v"), opts).await;
        assert_eq!(refreshed.unwrap(), "v#2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_custom_ttl() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));
        let opts = FetchOptions {
            force: false,
            ttl_ms: Some(1_000),
        };

        cache.get_or_fetch("k", counting_producer(&calls, "v"), opts).await.unwrap();
        clock.advance_ms(1_000);
        cache.get_or_fetch("k", counting_producer(&calls, "v"), opts).await.unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failure_is_not_cached() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        let err = cache
            .get_or_fetch("k", failing_producer(&calls), FetchOptions::default())
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(429));
        assert!(cache.is_empty().await);

        let ok = cache
            .get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::default())
            .await;
        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(ok.unwrap(), "v#2");
    }

    #[tokio::test]
    async fn test_concurrent_callers_share_the_failure() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        let slow_failure = {
            let calls = calls.clone();
            move || {
                async move {
                    calls.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
                    Err::<String, _>(TransportError::Network("reset".to_string()))
                }
                .boxed()
            }
        };

        let (a, b) = tokio::join!(
            cache.get_or_fetch("k", slow_failure, FetchOptions::default()),
            cache.get_or_fetch("k", failing_producer(&calls), FetchOptions::default()),
        );

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(a.unwrap_err(), TransportError::Network("reset".to_string()));
        assert_eq!(b.unwrap_err(), TransportError::Network("reset".to_string()));
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_force_bypasses_and_repopulates() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::default())
            .await
            .unwrap();
        let forced = cache
            .get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::forced(true))
            .await
            .unwrap();
        assert_eq!(forced, "v#2");

        let cached = cache
            .get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::default())
            .await
            .unwrap();
        assert_eq!(cached, "v#2");
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_failed_entry_does_not_evict_newer_forced_entry() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        let slow_failure = move || {
            async move {
                tokio::time::sleep(std::time::Duration::from_millis(40)).await;
                Err::<String, _>(TransportError::Network("timeout".to_string()))
            }
            .boxed()
        };

        let (failed, forced) = tokio::join!(
            cache.get_or_fetch("k", slow_failure, FetchOptions::default()),
            cache.get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::forced(true)),
        );
        assert!(failed.is_err());
        assert_eq!(forced.unwrap(), "v#1");

        let cached = cache
            .get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::default())
            .await
            .unwrap();
        assert_eq!(cached, "v#1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failure_left_behind_by_dropped_caller_is_refetched() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        let delayed_failure = move || {
            async move {
                tokio::time::sleep(std::time::Duration::from_millis(10)).await;
                Err::<String, _>(TransportError::Status {
                    status: 503,
                    body: "x".to_string(),
                })
            }
            .boxed()
        };

        let mut caller = Box::pin(cache.get_or_fetch("k", delayed_failure, FetchOptions::default()));
        assert!(futures_util::poll!(&mut caller).is_pending());

        // The failure settles while the map is locked, so the caller
        // blocks on eviction and is dropped there.
        let guard = cache.entries.lock().await;
        tokio::time::sleep(std::time::Duration::from_millis(30)).await;
        assert!(futures_util::poll!(&mut caller).is_pending());
        drop(caller);
        drop(guard);
        assert_eq!(cache.len().await, 1);

        let next = cache
            .get_or_fetch("k", counting_producer(&calls, "fresh"), FetchOptions::default())
            .await;
        assert_eq!(next.unwrap(), "fresh#1");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_clear_drops_entries() {
        let clock = Arc::new(ManualClock::new());
        let cache = cache(&clock);
        let calls = Arc::new(AtomicUsize::new(0));

        cache
            .get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::default())
            .await
            .unwrap();
        assert_eq!(cache.len().await, 1);

        cache.clear().await;
        assert!(cache.is_empty().await);

        cache
            .get_or_fetch("k", counting_producer(&calls, "v"), FetchOptions::default())
            .await
            .unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
