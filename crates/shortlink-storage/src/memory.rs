use async_trait::async_trait;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use shortlink_core::repository::{Repository, Result};
use shortlink_core::{LinkRecord, ShortCode, StorageError};

/// In-memory implementation of the [`Repository`] trait using DashMap.
///
/// The entry API makes check-and-insert atomic per key, so two
/// concurrent inserts of the same code cannot both succeed; one of
/// them observes [`StorageError::Conflict`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    storage: DashMap<String, LinkRecord>,
}

impl InMemoryRepository {
    /// Creates a new in-memory repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
        }
    }

    /// Returns the number of stored links.
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` when no links are stored.
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }
}

#[async_trait]
impl Repository for InMemoryRepository {
    async fn insert(&self, code: &ShortCode, record: LinkRecord) -> Result<()> {
        match self.storage.entry(code.as_str().to_owned()) {
            Entry::Occupied(_) => Err(StorageError::Conflict(code.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(record);
                Ok(())
            }
        }
    }

    async fn lookup(&self, code: &ShortCode) -> Result<Option<LinkRecord>> {
        Ok(self
            .storage
            .get(code.as_str())
            .map(|entry| entry.value().clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::Timestamp;

    fn code(s: &str) -> ShortCode {
        ShortCode::new_unchecked(s)
    }

    fn record(url: &str) -> LinkRecord {
        LinkRecord {
            original_url: url.to_string(),
            created_at: Timestamp::now(),
        }
    }

    #[tokio::test]
    async fn insert_and_lookup() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        let result = repo.lookup(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn lookup_nonexistent() {
        let repo = InMemoryRepository::new();

        let result = repo.lookup(&code("nope")).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn insert_conflict_keeps_first_record() {
        let repo = InMemoryRepository::new();

        repo.insert(&code("abc123"), record("https://example.com"))
            .await
            .unwrap();

        let err = repo
            .insert(&code("abc123"), record("https://other.com"))
            .await
            .unwrap_err();
        assert!(matches!(err, StorageError::Conflict(_)));

        let result = repo.lookup(&code("abc123")).await.unwrap().unwrap();
        assert_eq!(result.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn len_tracks_inserted_rows() {
        let repo = InMemoryRepository::new();
        assert!(repo.is_empty());

        repo.insert(&code("one"), record("https://one.example"))
            .await
            .unwrap();
        repo.insert(&code("two"), record("https://two.example"))
            .await
            .unwrap();

        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn concurrent_inserts_of_same_code_conflict_once() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.insert(
                    &ShortCode::new_unchecked("same"),
                    LinkRecord {
                        original_url: format!("https://example{}.com", i),
                        created_at: Timestamp::now(),
                    },
                )
                .await
            }));
        }

        let mut successes = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                successes += 1;
            }
        }

        assert_eq!(successes, 1);
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn concurrent_access_distinct_codes() {
        use std::sync::Arc;

        let repo = Arc::new(InMemoryRepository::new());
        let mut handles = vec![];

        for i in 0..10u64 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let c = ShortCode::new_unchecked(format!("code-{:03}", i));
                repo.insert(
                    &c,
                    LinkRecord {
                        original_url: format!("https://example{}.com", i),
                        created_at: Timestamp::now(),
                    },
                )
                .await
                .unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(repo.len(), 10);
        for i in 0..10u64 {
            let c = ShortCode::new_unchecked(format!("code-{:03}", i));
            let result = repo.lookup(&c).await.unwrap().unwrap();
            assert_eq!(result.original_url, format!("https://example{}.com", i));
        }
    }
}
