//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations. Each call commits
//! before returning.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, EntityTrait, TransactionTrait};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{link_to_active_model, model_to_link, new_link_to_active_model};
use crate::errors::Result;
use crate::storage::{Link, NewLink};

use migration::entities::link;

impl SeaOrmStorage {
    /// 插入一条已校验的链接，返回带 id 的记录
    pub async fn insert(&self, new_link: &NewLink) -> Result<Link> {
        let model = new_link_to_active_model(new_link, Utc::now())
            .insert(&self.db)
            .await?;

        info!("Link created: id={}, url={}", model.id, model.url);
        Ok(model_to_link(model))
    }

    /// 在单个事务内读取、修改并写回链接
    ///
    /// Returns `Ok(None)` if the id does not exist. If `apply` fails the
    /// transaction is dropped without committing.
    pub async fn update_with<F>(&self, id: i32, apply: F) -> Result<Option<Link>>
    where
        F: FnOnce(&mut Link) -> Result<()>,
    {
        let txn = self.db.begin().await?;

        let Some(model) = link::Entity::find_by_id(id).one(&txn).await? else {
            return Ok(None);
        };

        let mut link = model_to_link(model);
        apply(&mut link)?;

        let updated = link_to_active_model(&link).update(&txn).await?;
        txn.commit().await?;

        info!("Link updated: id={}", id);
        Ok(Some(model_to_link(updated)))
    }

    /// 删除链接，返回是否真的删除了记录
    pub async fn remove(&self, id: i32) -> Result<bool> {
        let result = link::Entity::delete_by_id(id).exec(&self.db).await?;

        let removed = result.rows_affected > 0;
        if removed {
            info!("Link deleted: id={}", id);
        }
        Ok(removed)
    }
}
