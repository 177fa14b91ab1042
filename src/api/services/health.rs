use actix_web::http::StatusCode;
use actix_web::{Responder, web};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, trace};

use crate::services::LinkService;

use super::helpers::json_response;
use super::types::HealthResponse;

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 存储检查的超时时间
const STORAGE_CHECK_TIMEOUT: Duration = Duration::from_secs(5);

/// `GET /health`
///
/// 只做 COUNT 查询，不加载全表
pub async fn health_check(
    service: web::Data<Arc<LinkService>>,
    app_start_time: web::Data<AppStartTime>,
) -> impl Responder {
    trace!("Received health check request");

    let (links_count, failure) =
        match tokio::time::timeout(STORAGE_CHECK_TIMEOUT, service.count()).await {
            Ok(Ok(count)) => (Some(count), None),
            Ok(Err(e)) => {
                error!("Storage health check failed: {}", e);
                (None, Some(format!("database error: {}", e)))
            }
            Err(_) => {
                error!("Storage health check timeout");
                (None, Some("timeout".to_string()))
            }
        };

    let now = chrono::Utc::now();
    let uptime = (now - app_start_time.start_datetime).num_seconds().max(0) as u64;
    let healthy = failure.is_none();

    let body = HealthResponse {
        status: if healthy { "healthy" } else { "unhealthy" }.to_string(),
        timestamp: now.to_rfc3339(),
        uptime,
        links_count,
        error: failure,
    };

    let status = if healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    json_response(status, &body)
}

