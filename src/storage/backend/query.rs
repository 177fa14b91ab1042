//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::{debug, trace};

use super::converters::model_to_link;
use super::{LinkFilter, SeaOrmStorage};
use crate::errors::Result;
use crate::storage::Link;

use migration::entities::link;

impl SeaOrmStorage {
    pub async fn get(&self, id: i32) -> Result<Option<Link>> {
        let model = link::Entity::find_by_id(id).one(&self.db).await?;
        trace!("get({}) -> found: {}", id, model.is_some());
        Ok(model.map(model_to_link))
    }

    /// 加载全部链接，按 (folder, title, id) 升序
    pub async fn load_all(&self) -> Result<Vec<Link>> {
        self.load_filtered(LinkFilter::default()).await
    }

    /// 带过滤条件加载链接
    ///
    /// `folder` 在数据库侧精确匹配；`search` 在取回后做 Unicode 小写的子串匹配，
    /// 使各后端行为一致（SQLite 的 LIKE 只对 ASCII 忽略大小写）。
    pub async fn load_filtered(&self, filter: LinkFilter) -> Result<Vec<Link>> {
        let mut condition = Condition::all();

        if let Some(ref folder) = filter.folder {
            condition = condition.add(link::Column::Folder.eq(folder.as_str()));
        }

        let models = link::Entity::find()
            .filter(condition)
            .order_by_asc(link::Column::Folder)
            .order_by_asc(link::Column::Title)
            .order_by_asc(link::Column::Id)
            .all(&self.db)
            .await?;

        let links = models.into_iter().map(model_to_link);

        let links: Vec<Link> = match filter.search.as_deref().map(str::to_lowercase) {
            Some(needle) => links.filter(|l| matches_search(l, &needle)).collect(),
            None => links.collect(),
        };

        debug!("load_filtered({:?}) -> {} links", filter, links.len());
        Ok(links)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(link::Entity::find().count(&self.db).await?)
    }
}

/// `needle` must already be lowercased
fn matches_search(link: &Link, needle: &str) -> bool {
    link.url.to_lowercase().contains(needle)
        || link
            .title
            .as_ref()
            .is_some_and(|t| t.to_lowercase().contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn link(url: &str, title: Option<&str>) -> Link {
        Link {
            id: 1,
            url: url.to_string(),
            title: title.map(str::to_string),
            description: None,
            folder: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_matches_search_title_or_url() {
        let l = link("https://docs.EXAMPLE.com", Some("Manual"));
        assert!(matches_search(&l, "example"));
        assert!(matches_search(&l, "manu"));
        assert!(!matches_search(&l, "blog"));
    }

    #[test]
    fn test_matches_search_without_title() {
        let l = link("https://rust-lang.org", None);
        assert!(matches_search(&l, "rust"));
        assert!(!matches_search(&l, "docs"));
    }

    #[test]
    fn test_matches_search_unicode() {
        let l = link("https://example.com", Some("ÜBER Links"));
        assert!(matches_search(&l, "über"));
    }
}
