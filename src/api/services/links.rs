//! JSON API for links (`/api/links`)

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Result as ActixResult, web};
use std::ops::Deref;
use std::sync::Arc;
use tracing::{info, trace};

use crate::services::LinkService;

use super::helpers::{error_from_linkshelf, json_response};
use super::types::{LinkPayload, LinkResponse, ListLinksQuery, SearchQuery};

/// LinkService built with `[links.api]` rules, registered separately from
/// the one the form pages use
#[derive(Clone)]
pub struct ApiLinkService(pub Arc<LinkService>);

impl Deref for ApiLinkService {
    type Target = LinkService;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn collection(links: Vec<crate::storage::Link>) -> Vec<LinkResponse> {
    links.into_iter().map(LinkResponse::from).collect()
}

/// 获取所有链接（可按 category 过滤）
pub async fn list_links(
    query: web::Query<ListLinksQuery>,
    service: web::Data<ApiLinkService>,
) -> ActixResult<HttpResponse> {
    trace!("API: list links, category={:?}", query.category);

    match service.list(query.category.as_deref()).await {
        Ok(links) => Ok(json_response(StatusCode::OK, &collection(links))),
        Err(e) => Ok(error_from_linkshelf(&e)),
    }
}

/// 按 title/url 子串搜索；空查询等同于完整列表
pub async fn search_links(
    query: web::Query<SearchQuery>,
    service: web::Data<ApiLinkService>,
) -> ActixResult<HttpResponse> {
    trace!("API: search links, q={:?}", query.q);

    match service.search(query.q.as_deref()).await {
        Ok(links) => Ok(json_response(StatusCode::OK, &collection(links))),
        Err(e) => Ok(error_from_linkshelf(&e)),
    }
}

/// 创建新链接
pub async fn create_link(
    payload: web::Json<LinkPayload>,
    service: web::Data<ApiLinkService>,
) -> ActixResult<HttpResponse> {
    info!("API: create link request - url: {:?}", payload.url);

    match service.create(payload.into_inner().into()).await {
        Ok(link) => Ok(json_response(StatusCode::CREATED, &LinkResponse::from(link))),
        Err(e) => Ok(error_from_linkshelf(&e)),
    }
}

/// 获取单个链接
pub async fn get_link(
    id: web::Path<i32>,
    service: web::Data<ApiLinkService>,
) -> ActixResult<HttpResponse> {
    let id = id.into_inner();
    trace!("API: get link request - id: {}", id);

    match service.get(id).await {
        Ok(link) => Ok(json_response(StatusCode::OK, &LinkResponse::from(link))),
        Err(e) => Ok(error_from_linkshelf(&e)),
    }
}

/// 部分更新链接
pub async fn update_link(
    id: web::Path<i32>,
    payload: web::Json<LinkPayload>,
    service: web::Data<ApiLinkService>,
) -> ActixResult<HttpResponse> {
    let id = id.into_inner();
    info!("API: update link request - id: {}", id);

    match service.update(id, payload.into_inner().into()).await {
        Ok(link) => Ok(json_response(StatusCode::OK, &LinkResponse::from(link))),
        Err(e) => Ok(error_from_linkshelf(&e)),
    }
}

/// 删除链接；不存在的 id 同样返回 204
pub async fn delete_link(
    id: web::Path<i32>,
    service: web::Data<ApiLinkService>,
) -> ActixResult<HttpResponse> {
    let id = id.into_inner();
    info!("API: delete link request - id: {}", id);

    match service.delete(id).await {
        Ok(_) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(error_from_linkshelf(&e)),
    }
}
