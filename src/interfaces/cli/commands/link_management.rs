//! Link management commands: list, search, add, update, remove

use colored::Colorize;

use crate::interfaces::cli::CliError;
use crate::services::LinkService;
use crate::storage::{Link, LinkPatch, NewLink};

fn print_links(links: &[Link], heading: &str) {
    if links.is_empty() {
        println!("{} No links found", "ℹ".bold().blue());
        return;
    }

    println!("{}", heading.bold().green());
    println!();
    for link in links {
        let mut parts = vec![
            format!("#{}", link.id).dimmed().to_string(),
            format!("[{}]", link.folder.as_deref().unwrap_or("-"))
                .yellow()
                .to_string(),
        ];
        if let Some(title) = &link.title {
            parts.push(title.cyan().to_string());
        }
        parts.push(link.url.blue().underline().to_string());
        println!("  {}", parts.join(" "));
    }
    println!();
    println!(
        "{} Total {} links",
        "ℹ".bold().blue(),
        links.len().to_string().green()
    );
}

pub async fn list_links(service: &LinkService, folder: Option<String>) -> Result<(), CliError> {
    let links = service.list(folder.as_deref()).await?;
    print_links(&links, "Link list:");
    Ok(())
}

pub async fn search_links(service: &LinkService, query: Option<String>) -> Result<(), CliError> {
    let links = service.search(query.as_deref()).await?;
    print_links(&links, "Search results:");
    Ok(())
}

pub async fn add_link(
    service: &LinkService,
    url: String,
    title: Option<String>,
    folder: Option<String>,
    description: Option<String>,
) -> Result<(), CliError> {
    let link = service
        .create(NewLink {
            url: Some(url),
            title,
            description,
            folder,
        })
        .await?;

    println!(
        "{} Added link #{}: {}",
        "✓".bold().green(),
        link.id.to_string().cyan(),
        link.url.blue().underline()
    );
    Ok(())
}

pub async fn update_link(
    service: &LinkService,
    id: i32,
    url: Option<String>,
    title: Option<String>,
    folder: Option<String>,
    description: Option<String>,
) -> Result<(), CliError> {
    let patch = LinkPatch {
        url,
        title,
        description,
        folder,
    };
    if patch.is_empty() {
        return Err(CliError::CommandError(
            "Nothing to update: pass at least one of --url, --title, --folder, --description"
                .to_string(),
        ));
    }

    let link = service.update(id, patch).await?;
    println!(
        "{} Updated link #{}: {}",
        "✓".bold().green(),
        link.id.to_string().cyan(),
        link.url.blue().underline()
    );
    Ok(())
}

pub async fn remove_link(service: &LinkService, id: i32) -> Result<(), CliError> {
    if service.delete(id).await? {
        println!("{} Removed link #{}", "✓".bold().green(), id.to_string().cyan());
    } else {
        println!("{} Link #{} did not exist", "ℹ".bold().blue(), id);
    }
    Ok(())
}
