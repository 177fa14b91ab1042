//! Mode routing
//!
//! - Server mode (HTTP server, default when no subcommand is given)
//! - CLI mode (one-shot commands against the same database)

pub mod cli;
pub mod server;

pub use cli::run_cli;
pub use server::run_server;
