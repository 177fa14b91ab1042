use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::api::services::ApiLinkService;
use crate::services::LinkService;
use crate::storage::{SeaOrmStorage, StorageFactory};

pub struct StartupContext {
    pub storage: Arc<SeaOrmStorage>,
    pub link_service: Arc<LinkService>,
    pub api_link_service: ApiLinkService,
}

/// 准备服务器启动的上下文
/// 连接数据库、执行迁移并构建 LinkService
pub async fn prepare_server_startup() -> Result<StartupContext> {
    let start_time = std::time::Instant::now();
    debug!("Starting pre-startup processing...");

    let storage = StorageFactory::create()
        .await
        .context("Failed to create storage backend")?;
    info!("Using storage backend: {}", storage.backend_name());

    let link_service = Arc::new(LinkService::from_config(Arc::clone(&storage)));
    let api_link_service =
        ApiLinkService(Arc::new(LinkService::from_api_config(Arc::clone(&storage))));

    let count = link_service
        .count()
        .await
        .context("Failed to read links from storage")?;
    info!("Loaded storage with {} links", count);

    debug!(
        "Pre-startup processing completed in {} ms",
        start_time.elapsed().as_millis()
    );

    Ok(StartupContext {
        storage,
        link_service,
        api_link_service,
    })
}
