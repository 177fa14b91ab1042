//! Request handlers
//!
//! - `links`: JSON API under `/api/links`
//! - `pages`: server-rendered form pages (`/`, `/add`, `/edit/{id}`, ...)
//! - `health`: liveness/storage check

pub mod error_code;
pub mod health;
mod helpers;
pub mod links;
pub mod pages;
pub mod routes;
mod types;

pub use error_code::ErrorCode;
pub use health::{AppStartTime, health_check};
pub use links::ApiLinkService;
pub use helpers::{error_from_linkshelf, error_response, json_error_handler};
pub use routes::{api_routes, configure, health_routes, page_routes};
pub use types::*;
