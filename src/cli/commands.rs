use crate::cli::CliContext;
use crate::models::storage::{remove_saved_snippet, save_snippet, saved_snippet_at};
use crate::models::{Library, SavedSnippetsStore, SettingsStore, SnippetRecord};
use anyhow::Result;
use colored::Colorize;

/// Fetches a random snippet from an enabled library
pub async fn random_snippet(ctx: &CliContext, save: bool) -> Result<()> {
    let record = ctx.service.fetch_random().await?;
    display_snippet(ctx, &record);

    if save {
        let index = save_snippet(&*ctx.storage, record).await?;
        println!(
            "{}  Saved as #{}",
            "┃".bright_magenta(),
            index.to_string().yellow()
        );
    }

    Ok(())
}

/// Fetches one snippet by library and source locator
pub async fn show_snippet(ctx: &CliContext, library: &str, source: &str) -> Result<()> {
    let library: Library = library.parse()?;
    let record = ctx.service.fetch(Some(source), Some(library)).await?;
    display_snippet(ctx, &record);
    Ok(())
}

/// Lists every library with its catalog size and enabled flag
pub async fn list_libraries(ctx: &CliContext) -> Result<()> {
    let settings = SettingsStore::get(&*ctx.storage).await?;
    let catalog = ctx.service.catalog();

    println!("{}  {}", "┃".bright_magenta(), "LIBRARIES".bold());
    for library in Library::ALL {
        let status = if settings.is_enabled(library) {
            "enabled".green()
        } else {
            "disabled".red()
        };
        println!(
            "{}  {:<12} {:<22} {:>4} snippets  {}",
            "┃".bright_magenta(),
            library.id().bright_white(),
            catalog.label_of(library),
            catalog.count_of(library),
            status
        );
    }

    Ok(())
}

pub async fn list_saved(ctx: &CliContext) -> Result<()> {
    let saved = SavedSnippetsStore::get(&*ctx.storage).await?;

    if saved.is_empty() {
        println!("{}  No saved snippets yet", "┃".bright_magenta());
        return Ok(());
    }

    println!("{}  {}", "┃".bright_magenta(), "SAVED SNIPPETS".bold());
    for (idx, entry) in saved.iter().enumerate() {
        println!(
            "{}  {}. {} {}",
            "┃".bright_magenta(),
            idx.to_string().yellow(),
            entry.record.snippet_title.bright_white(),
            format!(
                "({}, saved {})",
                entry.record.language_label,
                entry.saved_at.format("%Y-%m-%d %H:%M")
            )
            .dimmed()
        );
    }

    Ok(())
}

pub async fn view_saved(ctx: &CliContext, index: usize) -> Result<()> {
    let entry = saved_snippet_at(&*ctx.storage, index).await?;
    display_snippet(ctx, &entry.record);
    Ok(())
}

pub async fn unsave(ctx: &CliContext, index: usize) -> Result<()> {
    let removed = remove_saved_snippet(&*ctx.storage, index).await?;
    println!(
        "{}  Removed {}",
        "┃".bright_magenta(),
        removed.record.snippet_title.bright_white()
    );
    Ok(())
}

/// Displays the content of a snippet with its metadata
fn display_snippet(ctx: &CliContext, record: &SnippetRecord) {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        record.snippet_title.bold().bright_white()
    );
    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        "Language:".bright_yellow(),
        record.language_label
    );
    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        "Source:".bright_yellow(),
        record.snippet_src
    );
    println!(
        "{}  {} {}",
        "┃".bright_magenta(),
        "Lines:".bright_yellow(),
        record.get_line_count()
    );
    println!("{}", "─".repeat(60).bright_magenta());
    println!("{}", record.snippet);

    let code = ctx.service.extract_code(record);
    if !code.is_empty() {
        println!("{}", "─".repeat(60).bright_magenta());
        println!("{}", code.bright_cyan());
    }
}
