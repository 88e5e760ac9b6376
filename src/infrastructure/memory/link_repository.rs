//! In-memory implementation of link repository.

use async_trait::async_trait;

use crate::domain::entities::ShortLink;
use crate::domain::repositories::{LinkRepository, StoreError};
use crate::infrastructure::memory::KeyedStore;

/// Short links held in process memory, keyed by code.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: KeyedStore<String, ShortLink>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, link: ShortLink) -> Result<(), StoreError> {
        self.links.insert(link.code.clone(), link)
    }

    async fn find_by_code(&self, code: &str) -> Option<ShortLink> {
        self.links.get(code)
    }
}
