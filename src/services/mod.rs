//! Service layer for business logic
//!
//! This module provides the link store contract shared between the
//! different interfaces (JSON API, form pages, CLI).

mod link_service;

pub use link_service::*;
