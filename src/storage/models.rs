use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{ApiLinksConfig, LinksConfig};
use crate::errors::{LinkshelfError, Result};

/// A persisted bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: i32,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub folder: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Fields submitted for a new link, before defaults and validation.
///
/// Every field is optional so that a missing `url` surfaces as a
/// validation error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewLink {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub folder: Option<String>,
}

/// Partial update. `None` keeps the stored value; an empty string clears an
/// optional column (folder falls back to the default folder instead).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkPatch {
    pub url: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub folder: Option<String>,
}

impl LinkPatch {
    pub fn is_empty(&self) -> bool {
        self.url.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.folder.is_none()
    }
}

/// Default-value and required-field rules for inbound links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDefaults {
    /// `None` leaves the folder unset when none is supplied.
    pub folder: Option<String>,
    pub require_title: bool,
}

impl Default for LinkDefaults {
    fn default() -> Self {
        Self::from_config(&LinksConfig::default())
    }
}

impl LinkDefaults {
    pub fn from_config(config: &LinksConfig) -> Self {
        Self {
            folder: non_blank(Some(config.default_folder.clone())),
            require_title: config.require_title,
        }
    }

    /// Rules for the JSON API: by default no folder is filled in and only
    /// `url` is required.
    pub fn from_api_config(config: &ApiLinksConfig) -> Self {
        Self {
            folder: non_blank(Some(config.default_folder.clone())),
            require_title: config.require_title,
        }
    }

    /// Trim every field, drop blank optionals and fill in the default folder.
    pub fn apply(&self, link: NewLink) -> NewLink {
        NewLink {
            url: non_blank(link.url),
            title: non_blank(link.title),
            description: non_blank(link.description),
            folder: non_blank(link.folder).or_else(|| self.folder.clone()),
        }
    }

    /// Merge a patch into a stored link. Only provided fields change.
    pub fn apply_patch(&self, link: &mut Link, patch: LinkPatch) {
        if let Some(url) = patch.url {
            link.url = url.trim().to_string();
        }
        if let Some(title) = patch.title {
            link.title = non_blank(Some(title));
        }
        if let Some(description) = patch.description {
            link.description = non_blank(Some(description));
        }
        if let Some(folder) = patch.folder {
            link.folder = non_blank(Some(folder)).or_else(|| self.folder.clone());
        }
    }

    pub fn validate_new(&self, link: &NewLink) -> Result<()> {
        self.check(link.url.as_deref(), link.title.as_deref())
    }

    pub fn validate(&self, link: &Link) -> Result<()> {
        self.check(Some(link.url.as_str()), link.title.as_deref())
    }

    fn check(&self, url: Option<&str>, title: Option<&str>) -> Result<()> {
        if url.is_none_or(|u| u.trim().is_empty()) {
            return Err(LinkshelfError::validation("url is required"));
        }
        if self.require_title && title.is_none_or(|t| t.trim().is_empty()) {
            return Err(LinkshelfError::validation("title is required"));
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
