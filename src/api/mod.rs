//! HTTP layer: request handlers, routes and middleware

pub mod middleware;
pub mod services;
