//! Form pages
//!
//! A minimal server-rendered surface over the same link store: a listing
//! with edit/delete actions, add/edit forms and search. Markup is plain
//! escaped HTML with no styling.

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, Result as ActixResult, web};
use serde::Deserialize;
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{info, warn};

use crate::errors::LinkshelfError;
use crate::services::LinkService;
use crate::storage::{Link, LinkPatch, NewLink};

use super::types::SearchQuery;

/// Fields posted by the add/edit forms
#[derive(Deserialize, Clone, Debug, Default)]
pub struct LinkForm {
    #[serde(default)]
    pub folder: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<LinkForm> for NewLink {
    fn from(form: LinkForm) -> Self {
        NewLink {
            url: form.url,
            title: form.title,
            description: form.description,
            folder: form.folder,
        }
    }
}

impl From<LinkForm> for LinkPatch {
    fn from(form: LinkForm) -> Self {
        LinkPatch {
            url: form.url,
            title: form.title,
            description: form.description,
            folder: form.folder,
        }
    }
}

impl From<&Link> for LinkForm {
    fn from(link: &Link) -> Self {
        Self {
            folder: link.folder.clone(),
            title: link.title.clone(),
            url: Some(link.url.clone()),
            description: link.description.clone(),
        }
    }
}

/// `GET /`
pub async fn index(service: web::Data<Arc<LinkService>>) -> ActixResult<HttpResponse> {
    match service.list(None).await {
        Ok(links) => Ok(html(StatusCode::OK, render_list(&links, None))),
        Err(e) => Ok(plain_error(&e)),
    }
}

/// `GET /search?q=`
pub async fn search(
    query: web::Query<SearchQuery>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<HttpResponse> {
    let q = query.q.as_deref().unwrap_or_default();
    if q.trim().is_empty() {
        return Ok(redirect_home());
    }

    match service.search(Some(q)).await {
        Ok(links) => Ok(html(StatusCode::OK, render_list(&links, Some(q)))),
        Err(e) => Ok(plain_error(&e)),
    }
}

/// `GET /add`
pub async fn add_form() -> ActixResult<HttpResponse> {
    Ok(html(
        StatusCode::OK,
        render_form("Add link", "/add", &LinkForm::default(), None),
    ))
}

/// `POST /add`
pub async fn add_submit(
    form: web::Form<LinkForm>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<HttpResponse> {
    let form = form.into_inner();

    match service.create(form.clone().into()).await {
        Ok(link) => {
            info!("Pages: link {} added", link.id);
            Ok(redirect_home())
        }
        Err(e) => Ok(form_error("Add link", "/add", &form, &e)),
    }
}

/// `GET /edit/{id}`
pub async fn edit_form(
    id: web::Path<i32>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<HttpResponse> {
    let id = id.into_inner();

    match service.get(id).await {
        Ok(link) => Ok(html(
            StatusCode::OK,
            render_form(
                "Edit link",
                &format!("/edit/{}", id),
                &LinkForm::from(&link),
                None,
            ),
        )),
        Err(e) => Ok(plain_error(&e)),
    }
}

/// `POST /edit/{id}`
pub async fn edit_submit(
    id: web::Path<i32>,
    form: web::Form<LinkForm>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<HttpResponse> {
    let id = id.into_inner();
    let form = form.into_inner();

    match service.update(id, form.clone().into()).await {
        Ok(_) => {
            info!("Pages: link {} updated", id);
            Ok(redirect_home())
        }
        Err(e @ LinkshelfError::NotFound(_)) => Ok(plain_error(&e)),
        Err(e) => Ok(form_error("Edit link", &format!("/edit/{}", id), &form, &e)),
    }
}

/// `GET /delete/{id}`
pub async fn delete(
    id: web::Path<i32>,
    service: web::Data<Arc<LinkService>>,
) -> ActixResult<HttpResponse> {
    match service.delete(id.into_inner()).await {
        Ok(_) => Ok(redirect_home()),
        Err(e) => Ok(plain_error(&e)),
    }
}

fn redirect_home() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

fn html(status: StatusCode, body: String) -> HttpResponse {
    HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn plain_error(err: &LinkshelfError) -> HttpResponse {
    let body = match err {
        LinkshelfError::NotFound(_) => "Link not found".to_string(),
        other => other.message().to_string(),
    };
    HttpResponse::build(err.http_status())
        .content_type("text/plain; charset=utf-8")
        .body(body)
}

fn form_error(heading: &str, action: &str, form: &LinkForm, err: &LinkshelfError) -> HttpResponse {
    warn!("Pages: rejected submission to {}: {}", action, err);
    html(
        err.http_status(),
        render_form(heading, action, form, Some(err.message())),
    )
}

pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn page(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n<body>\n{}</body>\n</html>\n",
        escape_html(title),
        body
    )
}

pub fn render_list(links: &[Link], query: Option<&str>) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>Links</h1>");
    let _ = writeln!(
        body,
        "<form method=\"get\" action=\"/search\"><input name=\"q\" value=\"{}\"> <button>Search</button></form>",
        escape_html(query.unwrap_or_default())
    );
    let _ = writeln!(body, "<p><a href=\"/add\">Add link</a></p>");

    if links.is_empty() {
        let _ = writeln!(body, "<p>No links.</p>");
        return page("Links", &body);
    }

    let _ = writeln!(
        body,
        "<table>\n<tr><th>Folder</th><th>Title</th><th>URL</th><th>Actions</th></tr>"
    );
    for link in links {
        let url = escape_html(&link.url);
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td><a href=\"{url}\">{url}</a></td><td><a href=\"/edit/{id}\">Edit</a> <a href=\"/delete/{id}\">Delete</a></td></tr>",
            escape_html(link.folder.as_deref().unwrap_or_default()),
            escape_html(link.title.as_deref().unwrap_or_default()),
            url = url,
            id = link.id,
        );
    }
    let _ = writeln!(body, "</table>");

    page("Links", &body)
}

pub fn render_form(heading: &str, action: &str, form: &LinkForm, error: Option<&str>) -> String {
    let mut body = String::new();
    let _ = writeln!(body, "<h1>{}</h1>", escape_html(heading));
    if let Some(message) = error {
        let _ = writeln!(body, "<p class=\"error\">{}</p>", escape_html(message));
    }

    let field = |name: &str, value: &Option<String>| {
        format!(
            "<label>{name} <input name=\"{name}\" value=\"{}\"></label><br>\n",
            escape_html(value.as_deref().unwrap_or_default()),
            name = name
        )
    };

    let _ = writeln!(body, "<form method=\"post\" action=\"{}\">", escape_html(action));
    body.push_str(&field("folder", &form.folder));
    body.push_str(&field("title", &form.title));
    body.push_str(&field("url", &form.url));
    body.push_str(&field("description", &form.description));
    let _ = writeln!(body, "<button type=\"submit\">Save</button>\n</form>");
    let _ = writeln!(body, "<p><a href=\"/\">Back</a></p>");

    page(heading, &body)
}
