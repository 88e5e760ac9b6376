//! Link creation and resolution service.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::error::AppError;
use crate::utils::key_generator::{CodeGenerator, RandomCodeGenerator};
use crate::utils::url_validator::{parse_absolute_url, redirect_target};

/// Number of codes drawn before a collision is reported.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Service for shortening URLs and resolving short codes.
pub struct LinkService<L: LinkRepository, G: CodeGenerator = RandomCodeGenerator> {
    link_repository: Arc<L>,
    generator: G,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a link service drawing random 8-character codes.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_generator(link_repository, RandomCodeGenerator::default())
    }
}

impl<L: LinkRepository, G: CodeGenerator> LinkService<L, G> {
    /// Creates a link service with a custom code source.
    pub fn with_generator(link_repository: Arc<L>, generator: G) -> Self {
        Self {
            link_repository,
            generator,
        }
    }

    /// Validates `raw_url` and stores it under a fresh short code.
    ///
    /// # Code Generation
    ///
    /// Codes are inserted with insert-if-absent; on collision a new code is
    /// drawn, up to [`MAX_CODE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] (`invalid URL`) if the input is not an
    /// absolute URL with scheme and host.
    ///
    /// Returns [`AppError::Internal`] if every attempt collided.
    pub async fn shorten(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        let url = parse_absolute_url(raw_url).map_err(|e| {
            debug!(reason = %e, "Rejected URL");
            AppError::validation("invalid URL")
        })?;
        let target_url = redirect_target(raw_url, &url);

        let mut last_collision = None;
        for _ in 0..MAX_CODE_ATTEMPTS {
            let link = ShortLink::new(self.generator.generate(), target_url.clone());

            match self.link_repository.insert(link.clone()).await {
                Ok(()) => {
                    info!(code = %link.code, "Created short link");
                    return Ok(link);
                }
                Err(err @ StoreError::KeyCollision { .. }) => {
                    warn!(code = %link.code, "Short code collision, drawing again");
                    last_collision = Some(err);
                }
            }
        }

        Err(last_collision
            .map(AppError::from)
            .unwrap_or_else(|| AppError::internal("Failed to generate unique code")))
    }

    /// Looks up the link stored under `code`.
    pub async fn resolve(&self, code: &str) -> Option<ShortLink> {
        let link = self.link_repository.find_by_code(code).await;
        if link.is_none() {
            debug!(code = %code, "Short code not found");
        }
        link
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;
    use crate::utils::key_generator::MockCodeGenerator;
    use mockall::Sequence;

    fn fixed_generator(code: &'static str) -> MockCodeGenerator {
        let mut generator = MockCodeGenerator::new();
        generator.expect_generate().returning(move || code.to_string());
        generator
    }

    #[tokio::test]
    async fn test_shorten_success() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_insert()
            .withf(|link| link.code == "abcD1234" && link.target_url == "https://example.com")
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::with_generator(Arc::new(mock_repo), fixed_generator("abcD1234"));

        let link = service.shorten("https://example.com").await.unwrap();

        assert_eq!(link.code, "abcD1234");
        assert_eq!(link.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_shorten_invalid_url_never_touches_store() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_insert().times(0);

        let service = LinkService::new(Arc::new(mock_repo));

        for input in ["", "not-a-url", "/relative", "mailto:a@b.c"] {
            let err = service.shorten(input).await.unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }));
            assert_eq!(err.to_string(), "invalid URL");
        }
    }

    #[tokio::test]
    async fn test_shorten_retries_on_collision() {
        let mut seq = Sequence::new();
        let mut generator = MockCodeGenerator::new();
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "taken123".to_string());
        generator
            .expect_generate()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| "fresh123".to_string());

        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_insert()
            .withf(|link| link.code == "taken123")
            .times(1)
            .returning(|link| {
                Err(StoreError::KeyCollision {
                    key: link.code.clone(),
                })
            });
        mock_repo
            .expect_insert()
            .withf(|link| link.code == "fresh123")
            .times(1)
            .returning(|_| Ok(()));

        let service = LinkService::with_generator(Arc::new(mock_repo), generator);

        let link = service.shorten("https://example.com").await.unwrap();

        assert_eq!(link.code, "fresh123");
    }

    #[tokio::test]
    async fn test_shorten_gives_up_after_max_attempts() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_insert()
            .times(MAX_CODE_ATTEMPTS)
            .returning(|link| {
                Err(StoreError::KeyCollision {
                    key: link.code.clone(),
                })
            });

        let service = LinkService::with_generator(Arc::new(mock_repo), fixed_generator("taken123"));

        let err = service.shorten("https://example.com").await.unwrap_err();

        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_found() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_code()
            .withf(|code| code == "abcD1234")
            .times(1)
            .returning(|code| Some(ShortLink::new(code, "https://example.com")));

        let service = LinkService::new(Arc::new(mock_repo));

        let link = service.resolve("abcD1234").await.unwrap();
        assert_eq!(link.target_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_missing() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_code().returning(|_| None);

        let service = LinkService::new(Arc::new(mock_repo));

        assert!(service.resolve("missing1").await.is_none());
    }
}
