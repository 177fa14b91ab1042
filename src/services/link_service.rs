//! Link management service
//!
//! Provides the business rules for link operations, shared between the
//! JSON API, the form pages and the CLI: default values, required fields,
//! partial updates, not-found handling and idempotent deletes.

use std::sync::Arc;

use tracing::{info, trace, warn};

use crate::errors::{LinkshelfError, Result};
use crate::storage::{Link, LinkDefaults, LinkFilter, LinkPatch, NewLink, SeaOrmStorage};

/// Service for link management operations
pub struct LinkService {
    storage: Arc<SeaOrmStorage>,
    defaults: LinkDefaults,
}

impl LinkService {
    /// Create a new LinkService with the given defaults
    pub fn new(storage: Arc<SeaOrmStorage>, defaults: LinkDefaults) -> Self {
        Self { storage, defaults }
    }

    /// Create a LinkService using the `[links]` section of the global config
    pub fn from_config(storage: Arc<SeaOrmStorage>) -> Self {
        let config = crate::config::get_config();
        Self::new(storage, LinkDefaults::from_config(&config.links))
    }

    /// Create a LinkService using `[links.api]`, the JSON API's rules
    pub fn from_api_config(storage: Arc<SeaOrmStorage>) -> Self {
        let config = crate::config::get_config();
        Self::new(storage, LinkDefaults::from_api_config(&config.links.api))
    }

    pub fn defaults(&self) -> &LinkDefaults {
        &self.defaults
    }

    pub fn storage(&self) -> &Arc<SeaOrmStorage> {
        &self.storage
    }

    /// List links, optionally restricted to one folder
    pub async fn list(&self, folder: Option<&str>) -> Result<Vec<Link>> {
        let filter = match folder.map(str::trim).filter(|f| !f.is_empty()) {
            Some(f) => LinkFilter::folder(f),
            None => LinkFilter::default(),
        };
        self.storage.load_filtered(filter).await
    }

    /// Case-insensitive substring search on title or url.
    ///
    /// An empty or absent query returns the unfiltered list.
    pub async fn search(&self, query: Option<&str>) -> Result<Vec<Link>> {
        // 只用 trim 判断是否为空，匹配时保留原始查询
        match query.filter(|q| !q.trim().is_empty()) {
            Some(q) => {
                trace!("Searching links for '{}'", q);
                self.storage.load_filtered(LinkFilter::search(q)).await
            }
            None => self.list(None).await,
        }
    }

    pub async fn get(&self, id: i32) -> Result<Link> {
        self.storage
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create(&self, new_link: NewLink) -> Result<Link> {
        let new_link = self.defaults.apply(new_link);
        self.defaults.validate_new(&new_link)?;

        self.storage.insert(&new_link).await.inspect_err(|e| {
            if matches!(e, LinkshelfError::Conflict(_)) {
                warn!(
                    "Duplicate link rejected: folder={:?}, title={:?}",
                    new_link.folder, new_link.title
                );
            }
        })
    }

    /// Apply only the provided fields of `patch`
    pub async fn update(&self, id: i32, patch: LinkPatch) -> Result<Link> {
        let defaults = &self.defaults;

        let updated = self
            .storage
            .update_with(id, |link| {
                defaults.apply_patch(link, patch);
                defaults.validate(link)
            })
            .await?;

        updated.ok_or_else(|| not_found(id))
    }

    /// Returns whether a record was removed; an unknown id is not an error
    pub async fn delete(&self, id: i32) -> Result<bool> {
        let removed = self.storage.remove(id).await?;
        if !removed {
            info!("Delete of unknown link {} ignored", id);
        }
        Ok(removed)
    }

    pub async fn count(&self) -> Result<u64> {
        self.storage.count().await
    }
}

fn not_found(id: i32) -> LinkshelfError {
    LinkshelfError::not_found(format!("Link {} not found", id))
}
