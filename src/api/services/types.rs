//! API 类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error_code::ErrorCode;
use crate::storage::{Link, LinkPatch, NewLink};

/// Link as returned by the JSON API. The folder is exposed as `category`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct LinkResponse {
    pub id: i32,
    pub url: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            url: link.url,
            title: link.title,
            description: link.description,
            category: link.folder,
            created_at: link.created_at,
        }
    }
}

/// Body of `POST /api/links` and `PUT /api/links/{id}`
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct LinkPayload {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, alias = "folder")]
    pub category: Option<String>,
}

impl From<LinkPayload> for NewLink {
    fn from(payload: LinkPayload) -> Self {
        NewLink {
            url: payload.url,
            title: payload.title,
            description: payload.description,
            folder: payload.category,
        }
    }
}

impl From<LinkPayload> for LinkPatch {
    fn from(payload: LinkPayload) -> Self {
        LinkPatch {
            url: payload.url,
            title: payload.title,
            description: payload.description,
            folder: payload.category,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct ListLinksQuery {
    #[serde(default, alias = "folder")]
    pub category: Option<String>,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u64,
    pub links_count: Option<u64>,
    pub error: Option<String>,
}
