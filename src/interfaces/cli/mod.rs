//! CLI interface module
//!
//! This module provides command-line interface functionality for linkshelf.
//! Commands operate on the database directly through `LinkService`.

pub mod commands;

use std::fmt;
use std::sync::Arc;

use crate::cli::{Commands, ConfigCommands};
use crate::services::LinkService;
use crate::storage::StorageFactory;
use commands::{add_link, generate_config, list_links, remove_link, search_links, update_link};

#[derive(Debug)]
pub enum CliError {
    StorageError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::StorageError(msg) => format!("Storage error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::StorageError(msg) => {
                format!("{} {}", "Storage error:".red().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<crate::errors::LinkshelfError> for CliError {
    fn from(err: crate::errors::LinkshelfError) -> Self {
        use crate::errors::LinkshelfError;
        match err {
            LinkshelfError::Validation(_)
            | LinkshelfError::Conflict(_)
            | LinkshelfError::NotFound(_) => CliError::CommandError(err.format_simple()),
            other => CliError::StorageError(other.to_string()),
        }
    }
}

async fn open_service() -> Result<LinkService, CliError> {
    let storage = StorageFactory::create().await?;
    Ok(LinkService::from_config(Arc::clone(&storage)))
}

/// Run a CLI command from clap-parsed input
pub async fn run_cli_command(cmd: Commands) -> Result<(), CliError> {
    // config 命令不需要数据库
    if let Commands::Config {
        action: ConfigCommands::Generate { output_path, force },
    } = cmd
    {
        return generate_config(output_path, force);
    }

    let service = open_service().await?;

    match cmd {
        Commands::List { folder } => list_links(&service, folder).await,
        Commands::Search { query } => search_links(&service, query).await,
        Commands::Add {
            url,
            title,
            folder,
            description,
        } => add_link(&service, url, title, folder, description).await,
        Commands::Update {
            id,
            url,
            title,
            folder,
            description,
        } => update_link(&service, id, url, title, folder, description).await,
        Commands::Remove { id } => remove_link(&service, id).await,
        Commands::Serve | Commands::Config { .. } => Err(CliError::CommandError(
            "Command is not handled by the CLI runner".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::LinkshelfError;

    #[test]
    fn test_link_errors_become_command_errors() {
        let err: CliError = LinkshelfError::not_found("Link 3 not found").into();
        assert!(matches!(err, CliError::CommandError(_)));
        assert!(err.format_simple().contains("Link 3 not found"));

        let err: CliError = LinkshelfError::database_connection("refused").into();
        assert!(matches!(err, CliError::StorageError(_)));
    }
}
