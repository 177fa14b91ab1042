//! Linkshelf - a small personal bookmark manager
//!
//! This library provides the link store, its validation rules and the HTTP
//! surfaces (JSON API and form pages) over a single `links` table.
//!
//! # Architecture
//! - `storage`: Database backend and data access
//! - `services`: Link rules (defaults, validation, uniqueness)
//! - `api`: HTTP services and middleware
//! - `interfaces`: Command-line interface
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
