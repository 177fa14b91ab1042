//! 路由配置

use actix_web::web;

use super::health::health_check;
use super::helpers::json_error_handler;
use super::links::{create_link, delete_link, get_link, list_links, search_links, update_link};
use super::pages;

/// JSON API 路由 `/api/links`
///
/// - GET /api/links[?category=] - 列出链接
/// - POST /api/links - 创建链接
/// - GET /api/links/search?q= - 搜索（必须在 /{id} 之前）
/// - GET/PUT/DELETE /api/links/{id}
pub fn api_routes() -> actix_web::Scope {
    web::scope("/api/links")
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .route("", web::get().to(list_links))
        .route("", web::post().to(create_link))
        .route("/search", web::get().to(search_links))
        .route("/{id}", web::get().to(get_link))
        .route("/{id}", web::put().to(update_link))
        .route("/{id}", web::delete().to(delete_link))
}

/// 健康检查路由 `/health`
pub fn health_routes() -> actix_web::Scope {
    web::scope("/health")
        .route("", web::get().to(health_check))
        .route("", web::head().to(health_check))
}

/// 表单页面路由，挂在根路径下，必须最后注册
pub fn page_routes() -> actix_web::Scope {
    web::scope("")
        .route("/", web::get().to(pages::index))
        .route("/search", web::get().to(pages::search))
        .route("/add", web::get().to(pages::add_form))
        .route("/add", web::post().to(pages::add_submit))
        .route("/edit/{id}", web::get().to(pages::edit_form))
        .route("/edit/{id}", web::post().to(pages::edit_submit))
        .route("/delete/{id}", web::get().to(pages::delete))
}

/// 注册全部路由（服务器与测试共用）
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(api_routes())
        .service(health_routes())
        .service(page_routes());
}
