use chrono::{DateTime, Utc};

use crate::storage::{Link, NewLink};
use migration::entities::link;

/// 将 Sea-ORM Model 转换为 Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        id: model.id,
        url: model.url,
        title: model.title,
        description: model.description,
        folder: model.folder,
        created_at: model.created_at,
    }
}

/// 将已校验的 NewLink 转换为插入用 ActiveModel（id 由数据库分配）
pub fn new_link_to_active_model(link: &NewLink, created_at: DateTime<Utc>) -> link::ActiveModel {
    use sea_orm::ActiveValue::*;

    link::ActiveModel {
        id: NotSet,
        url: Set(link.url.clone().unwrap_or_default()),
        title: Set(link.title.clone()),
        description: Set(link.description.clone()),
        folder: Set(link.folder.clone()),
        created_at: Set(created_at),
    }
}

/// 将 Link 转换为更新用 ActiveModel（id 与 created_at 不可变）
pub fn link_to_active_model(link: &Link) -> link::ActiveModel {
    use sea_orm::ActiveValue::*;

    link::ActiveModel {
        id: Unchanged(link.id),
        url: Set(link.url.clone()),
        title: Set(link.title.clone()),
        description: Set(link.description.clone()),
        folder: Set(link.folder.clone()),
        created_at: NotSet,
    }
}
