//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for linkshelf using clap's derive macros.

use clap::{Parser, Subcommand};

/// Linkshelf - a small personal bookmark manager
#[derive(Parser, Debug)]
#[command(name = "linkshelf")]
#[command(version)]
#[command(about = "A small personal bookmark manager", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start the HTTP server (default when no command is given)
    Serve,

    /// List links, optionally restricted to one folder
    List {
        /// Folder (category) to filter on
        #[arg(long, visible_alias = "category")]
        folder: Option<String>,
    },

    /// Search links by title or url (case-insensitive)
    Search {
        /// Substring to look for; empty lists everything
        query: Option<String>,
    },

    /// Add a link
    Add {
        /// Target URL
        url: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, visible_alias = "category")]
        folder: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Update a link; omitted fields keep their current value
    Update {
        /// Link id
        id: i32,

        #[arg(long)]
        url: Option<String>,

        #[arg(long)]
        title: Option<String>,

        #[arg(long, visible_alias = "category")]
        folder: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a link (no error if it does not exist)
    Remove {
        /// Link id
        id: i32,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },
}

/// Configuration management commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Generate example configuration file
    Generate {
        /// Output path (default: config.example.toml)
        output_path: Option<String>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_command_means_serve() {
        let cli = Cli::try_parse_from(["linkshelf"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "linkshelf",
            "add",
            "https://docs.example.com",
            "--title",
            "Docs",
            "--category",
            "work",
        ])
        .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                url: "https://docs.example.com".to_string(),
                title: Some("Docs".to_string()),
                folder: Some("work".to_string()),
                description: None,
            })
        );
    }

    #[test]
    fn test_parse_update_requires_numeric_id() {
        assert!(Cli::try_parse_from(["linkshelf", "update", "abc"]).is_err());
        let cli = Cli::try_parse_from(["linkshelf", "update", "4", "--url", "https://x"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Update { id: 4, url: Some(_), title: None, .. })
        ));
    }

    #[test]
    fn test_parse_config_generate() {
        let cli = Cli::try_parse_from(["linkshelf", "config", "generate", "--force"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Config {
                action: ConfigCommands::Generate {
                    output_path: None,
                    force: true
                }
            })
        );
    }
}
