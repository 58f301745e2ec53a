//! CLI Module for snipdeck
//! This module turns command-line arguments into snippet retrievals and
//! saved-list operations, printing results to the terminal.

pub mod commands;

use crate::config::AppConfig;
use crate::models::StorageManager;
use crate::service::SnippetService;
use anyhow::{Context, Result, bail};
use colored::Colorize;
use std::path::PathBuf;
use std::sync::Arc;

/// Everything a command needs, built once from the configuration
pub struct CliContext {
    pub service: SnippetService,
    pub storage: Arc<StorageManager>,
}

impl CliContext {
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let storage = match &config.data_dir {
            Some(dir) => StorageManager::with_data_dir(dir)?,
            None => StorageManager::new()?,
        };
        let storage = Arc::new(storage);

        let catalog = Arc::new(config.build_catalog()?);
        let fetcher = config.build_fetcher()?;
        let service = SnippetService::new(catalog, storage.clone(), fetcher);

        Ok(Self { service, storage })
    }
}

/// Splits leading `--flag value` pairs off the argument list and applies them to `config`
pub fn apply_flags(config: &mut AppConfig, args: &[String]) -> Result<usize> {
    let mut index = 0;
    while index < args.len() && args[index].starts_with("--") {
        let flag = args[index].as_str();
        // Every flag takes exactly one value
        let value = args
            .get(index + 1)
            .with_context(|| format!("Missing value for {flag}"))?;

        match flag {
            "--source" => config.source = value.clone(),
            "--manifest" => config.manifest = Some(PathBuf::from(value)),
            "--data-dir" => config.data_dir = Some(PathBuf::from(value)),
            _ => bail!("Unknown flag: {flag}"),
        }
        index += 2;
    }

    Ok(index)
}

/// Executes CLI commands based on the provided arguments
pub async fn execute_cli(args: &[String]) -> Result<()> {
    let mut config = AppConfig::load()?;
    let consumed = apply_flags(&mut config, args)?;
    let args = &args[consumed..];

    if args.is_empty() {
        // No command provided, show help
        print_help();
        return Ok(());
    }

    // Help needs no catalog or data directory
    if args[0] == "help" {
        print_help();
        return Ok(());
    }

    let ctx = CliContext::from_config(&config)?;

    match args[0].as_str() {
        "random" | "new" => {
            // `--save` may follow the command
            let save = args.iter().skip(1).any(|a| a == "--save");
            commands::random_snippet(&ctx, save).await?;
        }
        "show" => {
            if args.len() < 3 {
                println!("{}  Error: Missing library or snippet source", "┃".bright_magenta());
                println!("{}  Usage: snipdeck show <LIBRARY> <SOURCE>", "┃".bright_magenta());
                return Ok(());
            }

            commands::show_snippet(&ctx, &args[1], &args[2]).await?;
        }
        "libraries" | "libs" => {
            commands::list_libraries(&ctx).await?;
        }
        "saved" => {
            commands::list_saved(&ctx).await?;
        }
        "view" | "unsave" => {
            let Some(index) = args.get(1).and_then(|a| a.parse::<usize>().ok()) else {
                println!("{}  Error: Missing or invalid index", "┃".bright_magenta());
                println!("{}  Usage: snipdeck {} <INDEX>", "┃".bright_magenta(), args[0]);
                return Ok(());
            };

            // Both commands address the saved list by position
            if args[0] == "view" {
                commands::view_saved(&ctx, index).await?;
            } else {
                commands::unsave(&ctx, index).await?;
            }
        }
        _ => {
            println!("{}  Unknown command: {}", "┃".bright_magenta(), args[0]);

            print_help();
        }
    }

    Ok(())
}

/// Prints the help message with available commands
fn print_help() {
    println!(
        "{}  {}",
        "┃".bright_magenta(),
        "SNIPDECK - RANDOM CODE SNIPPETS".bold()
    );

    println!("{}  {}", "┃".bright_magenta(), "USAGE:".bright_yellow());
    println!("{}  snipdeck [FLAGS] [COMMAND] [ARGS]", "┃".bright_magenta());
    println!("{}  {}", "┃".bright_magenta(), "COMMANDS:".bright_yellow());

    let commands = [
        ("random [--save]", "Show a random snippet from an enabled library"),
        ("show <LIBRARY> <SOURCE>", "Show one specific snippet"),
        ("libraries, libs", "List libraries and how many snippets each ships"),
        ("saved", "List saved snippets"),
        ("view <INDEX>", "Show a saved snippet"),
        ("unsave <INDEX>", "Remove a saved snippet"),
        ("help", "Display this help message"),
    ];
    for (usage, description) in commands {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            usage.bright_white(),
            description
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "FLAGS:".bright_yellow());
    let flags = [
        ("--source <DIR|URL>", "Snippet asset directory or base URL"),
        ("--manifest <FILE>", "Catalog manifest (TOML)"),
        ("--data-dir <DIR>", "Where settings and saved snippets are kept"),
    ];
    for (usage, description) in flags {
        println!(
            "{}  {:<27} {}",
            "┃".bright_magenta(),
            usage.bright_white(),
            description
        );
    }

    println!("{}  {}", "┃".bright_magenta(), "TIP:".bright_green());
    println!(
        "{}  Set RUST_LOG=debug to trace how a snippet was picked",
        "┃".bright_magenta()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn flags_are_consumed_before_the_command() {
        let mut config = AppConfig::default();
        let argv = args(&["--source", "https://x.test/", "--data-dir", "/tmp/sd", "random"]);

        let consumed = apply_flags(&mut config, &argv).unwrap();
        assert_eq!(consumed, 4);
        assert_eq!(argv[consumed], "random");
        assert_eq!(config.source, "https://x.test/");
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/sd")));
    }

    #[test]
    fn unknown_or_dangling_flags_are_errors() {
        let mut config = AppConfig::default();
        assert!(apply_flags(&mut config, &args(&["--colour", "red"])).is_err());
        assert!(apply_flags(&mut config, &args(&["--manifest"])).is_err());
    }
}
