use std::sync::Arc;

use jiff::Timestamp;
use shortlink_core::{Link, LinkRecord, Repository, ShortCode, StorageError};
use tracing::{debug, trace, warn};

use crate::error::{LinkError, Result};
use crate::generator::Generator;

/// Bound on insert attempts when a generated code collides with an
/// existing row. After this many conflicts the storage error surfaces
/// to the caller as an internal fault.
const MAX_INSERT_ATTEMPTS: usize = 3;

/// Orchestrates the code generator and the link store.
///
/// The service owns both collaborators and carries no other state
/// across calls, so any number of calls may execute concurrently; the
/// generator serializes its own counter advancement and the repository
/// provides per-operation atomicity.
#[derive(Debug)]
pub struct LinkService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
}

// Handles are Arc-backed, so clones share the repository and the
// generator state rather than duplicating them.
impl<R, G> Clone for LinkService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R: Repository, G: Generator> LinkService<R, G> {
    /// Creates a new `LinkService` over a repository and a generator.
    pub fn new(repository: R, generator: G) -> Self {
        Self {
            repository: Arc::new(repository),
            generator: Arc::new(generator),
        }
    }

    /// Issues a short code for `input` and persists the mapping.
    ///
    /// Exactly one row is written on success and none on any failure
    /// path. A duplicate generated code triggers regeneration, bounded
    /// by [`MAX_INSERT_ATTEMPTS`].
    pub async fn create(&self, input: &str) -> Result<Link> {
        if input.is_empty() {
            return Err(LinkError::InvalidInput("url must not be empty".to_string()));
        }

        let mut attempt = 1;
        loop {
            let short_code = self.generator.generate()?;
            let created_at = Timestamp::now();

            trace!(code = %short_code, url = %input, "inserting generated code");
            match self
                .repository
                .insert(
                    &short_code,
                    LinkRecord {
                        original_url: input.to_owned(),
                        created_at,
                    },
                )
                .await
            {
                Ok(()) => {
                    debug!(code = %short_code, url = %input, "link created");
                    return Ok(Link {
                        short_code,
                        original_url: input.to_owned(),
                        created_at,
                    });
                }
                Err(StorageError::Conflict(code)) if attempt < MAX_INSERT_ATTEMPTS => {
                    warn!(code = %code, attempt, "generated code already taken, regenerating");
                    attempt += 1;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Resolves a short code back to its stored link.
    ///
    /// Read-only; a missing code is the expected [`LinkError::NotFound`]
    /// outcome, never an internal fault.
    pub async fn resolve(&self, code: &str) -> Result<Link> {
        // A code that fails validation can never have been issued or
        // stored, so it resolves to not-found rather than a distinct
        // invalid-input outcome.
        let Ok(short_code) = ShortCode::new(code) else {
            trace!(code = %code, "syntactically invalid short code");
            return Err(LinkError::NotFound);
        };

        match self.repository.lookup(&short_code).await? {
            Some(record) => {
                debug!(code = %short_code, url = %record.original_url, "resolved short code");
                Ok(Link {
                    short_code,
                    original_url: record.original_url,
                    created_at: record.created_at,
                })
            }
            None => {
                trace!(code = %short_code, "short code not found");
                Err(LinkError::NotFound)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::Base62Generator;
    use async_trait::async_trait;
    use shortlink_core::base62;
    use shortlink_core::GenerationError;
    use shortlink_storage::InMemoryRepository;
    use std::collections::HashSet;
    use std::sync::Mutex;

    fn test_service() -> LinkService<InMemoryRepository, Base62Generator> {
        LinkService::new(InMemoryRepository::new(), Base62Generator::with_seed(42))
    }

    /// Generator that replays a fixed list of codes, then fails.
    struct ScriptedGenerator {
        codes: Mutex<Vec<&'static str>>,
    }

    impl ScriptedGenerator {
        fn new(mut codes: Vec<&'static str>) -> Self {
            codes.reverse();
            Self {
                codes: Mutex::new(codes),
            }
        }
    }

    impl Generator for ScriptedGenerator {
        fn generate(&self) -> std::result::Result<ShortCode, GenerationError> {
            match self.codes.lock().unwrap().pop() {
                Some(code) => Ok(ShortCode::new_unchecked(code)),
                None => Err(GenerationError::Exhausted(0)),
            }
        }
    }

    /// Repository whose operations always fail with a backend fault.
    struct UnavailableRepository;

    #[async_trait]
    impl Repository for UnavailableRepository {
        async fn insert(
            &self,
            _code: &ShortCode,
            _record: LinkRecord,
        ) -> std::result::Result<(), StorageError> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }

        async fn lookup(
            &self,
            _code: &ShortCode,
        ) -> std::result::Result<Option<LinkRecord>, StorageError> {
            Err(StorageError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn create_then_resolve_round_trip() {
        let service = test_service();

        let created = service.create("https://example.com/a").await.unwrap();
        assert_eq!(created.short_code.as_str().len(), base62::CODE_LENGTH);
        assert_eq!(created.original_url, "https://example.com/a");

        let resolved = service.resolve(created.short_code.as_str()).await.unwrap();
        assert_eq!(resolved.short_code, created.short_code);
        assert_eq!(resolved.original_url, "https://example.com/a");
    }

    #[tokio::test]
    async fn create_empty_input_writes_nothing() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = LinkService::new(Arc::clone(&repo), Base62Generator::with_seed(42));

        let err = service.create("").await.unwrap_err();
        assert!(matches!(err, LinkError::InvalidInput(_)));
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn resolve_unknown_code_is_not_found() {
        let service = test_service();

        let err = service.resolve("doesnotexist").await.unwrap_err();
        assert!(matches!(err, LinkError::NotFound));
    }

    #[tokio::test]
    async fn resolve_malformed_code_is_not_found() {
        let service = test_service();

        let err = service.resolve("no/such code").await.unwrap_err();
        assert!(matches!(err, LinkError::NotFound));
    }

    #[tokio::test]
    async fn concurrent_creates_yield_distinct_codes() {
        let repo = Arc::new(InMemoryRepository::new());
        let service = LinkService::new(Arc::clone(&repo), Base62Generator::with_seed(42));

        let mut handles = vec![];
        for i in 0..16u64 {
            let service = service.clone();
            handles.push(tokio::spawn(async move {
                service
                    .create(&format!("https://example.com/{}", i))
                    .await
                    .unwrap()
            }));
        }

        let mut codes = HashSet::new();
        for handle in handles {
            let link = handle.await.unwrap();
            assert!(codes.insert(link.short_code.as_str().to_owned()));
        }

        assert_eq!(codes.len(), 16);
        assert_eq!(repo.len(), 16);
    }

    #[tokio::test]
    async fn duplicate_code_triggers_regeneration() {
        let generator = ScriptedGenerator::new(vec!["dupdup1", "dupdup1", "fresh01"]);
        let service = LinkService::new(InMemoryRepository::new(), generator);

        let first = service.create("https://first.example").await.unwrap();
        assert_eq!(first.short_code.as_str(), "dupdup1");

        // The generator replays "dupdup1", which now conflicts; the
        // service regenerates and lands on "fresh01".
        let second = service.create("https://second.example").await.unwrap();
        assert_eq!(second.short_code.as_str(), "fresh01");
        assert_eq!(second.original_url, "https://second.example");
    }

    #[tokio::test]
    async fn regeneration_gives_up_after_bounded_attempts() {
        let generator = ScriptedGenerator::new(vec!["same111"; 4]);
        let service = LinkService::new(InMemoryRepository::new(), generator);

        service.create("https://first.example").await.unwrap();

        let err = service.create("https://second.example").await.unwrap_err();
        assert!(matches!(err, LinkError::Storage(StorageError::Conflict(_))));
    }

    #[tokio::test]
    async fn generation_failure_is_surfaced() {
        let generator = ScriptedGenerator::new(vec![]);
        let service = LinkService::new(InMemoryRepository::new(), generator);

        let err = service.create("https://example.com").await.unwrap_err();
        assert!(matches!(err, LinkError::Generation(_)));
    }

    #[tokio::test]
    async fn store_unavailable_surfaces_as_storage_error() {
        let service = LinkService::new(UnavailableRepository, Base62Generator::with_seed(42));

        let err = service.create("https://example.com").await.unwrap_err();
        assert!(matches!(
            err,
            LinkError::Storage(StorageError::Unavailable(_))
        ));

        let err = service.resolve("abc1234").await.unwrap_err();
        assert!(matches!(
            err,
            LinkError::Storage(StorageError::Unavailable(_))
        ));
    }
}
