use contracts::domain::a005_loot::aggregate::LootEntry;
use contracts::domain::a006_current_loot::aggregate::CurrentLootEntry;
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::shared::sheets::TransportError;

/// Весь лут: текущий рейд и архив
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LootCorpus {
    pub current: Vec<CurrentLootEntry>,
    pub archive: Vec<LootEntry>,
}

/// Loot corpus kept for player lookups.
///
/// Loaded on first use and kept until `clear`; there is no expiry. The lock
/// is held while loading, so concurrent first lookups wait for one load.
#[derive(Default)]
pub struct PlayerLootCache {
    corpus: Mutex<Option<Arc<LootCorpus>>>,
}

impl PlayerLootCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get_or_load<F, Fut>(&self, load: F) -> Result<Arc<LootCorpus>, TransportError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<LootCorpus, TransportError>>,
    {
        let mut slot = self.corpus.lock().await;
        if let Some(corpus) = slot.as_ref() {
            return Ok(corpus.clone());
        }

        let corpus = Arc::new(load().await?);
        tracing::info!(
            "player loot corpus loaded: {} current, {} archived",
            corpus.current.len(),
            corpus.archive.len()
        );
        *slot = Some(corpus.clone());
        Ok(corpus)
    }

    pub async fn is_loaded(&self) -> bool {
        self.corpus.lock().await.is_some()
    }

    pub async fn clear(&self) {
        *self.corpus.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_loads_once() {
        let cache = PlayerLootCache::new();
        let counter = AtomicUsize::new(0);
        let loads = &counter;
        let load = move || async move {
            loads.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(std::time::Duration::from_millis(10)).await;
            Ok(LootCorpus::default())
        };

        let (a, b) = tokio::join!(cache.get_or_load(load), cache.get_or_load(load));
        assert!(a.is_ok() && b.is_ok());
        cache.get_or_load(load).await.unwrap();

        assert_eq!(loads.load(Ordering::SeqCst), 1);
        assert!(cache.is_loaded().await);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_kept() {
        let cache = PlayerLootCache::new();

        let err = cache
            .get_or_load(|| async { Err(TransportError::Network("down".into())) })
            .await
            .unwrap_err();
        assert_eq!(err, TransportError::Network("down".into()));
        assert!(!cache.is_loaded().await);

        cache
            .get_or_load(|| async { Ok(LootCorpus::default()) })
            .await
            .unwrap();
        assert!(cache.is_loaded().await);

        cache.clear().await;
        assert!(!cache.is_loaded().await);
    }
}
