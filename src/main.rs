//! CLI front-end for the in-memory shortening registry.
//!
//! Drives a single in-process [`Registry`]: a scripted demonstration run and
//! an interactive shell. The registry lives for the duration of the process;
//! nothing is persisted.
//!
//! # Usage
//!
//! ```bash
//! # Scripted acceptance walk: shorten, resolve, dedup, failure path
//! cargo run -- demo
//!
//! # Interactive shell
//! cargo run -- shell
//!
//! # JSON output instead of colored text
//! cargo run -- demo --json
//! ```
//!
//! # Environment Variables
//!
//! - `CODE_LENGTH` (optional): generated code length, default 6
//! - `RUST_LOG` (optional): log level, default `info`
//! - `LOG_FORMAT` (optional): `text` or `json`, default `text`

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use tracing_subscriber::EnvFilter;

use shortcode::config::{self, Config};
use shortcode::prelude::*;

/// CLI tool for the shortcode registry.
#[derive(Parser)]
#[command(name = "shortcode")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Emit results as JSON instead of colored text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Run the scripted demonstration: shorten two URLs, resolve one,
    /// re-shorten the first to show dedup, then hit the failure path
    Demo,

    /// Interactive shell over a fresh registry
    Shell,
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    init_tracing(&config);
    config.print_summary();

    let registry = Registry::with_code_length(config.code_length);

    match cli.command {
        Commands::Demo => run_demo(&registry, cli.json),
        Commands::Shell => run_shell(&registry, cli.json),
    }
}

/// Initializes the tracing subscriber according to the configuration.
fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

/// Scripted acceptance walk over a fresh registry.
fn run_demo(registry: &Registry, json: bool) -> Result<()> {
    let url1 = "https://www.example.com/very/long/path/to/document1";
    let url2 = "https://www.another-example.net/another/long/path";

    let link1 = registry
        .shorten(url1)
        .context("Failed to shorten first URL")?;
    print_link(&link1, json)?;

    let link2 = registry
        .shorten(url2)
        .context("Failed to shorten second URL")?;
    print_link(&link2, json)?;

    let resolved = registry
        .resolve(&link1.code)
        .context("Failed to resolve first code")?;
    println!("{} {} -> {}", "resolved".cyan(), link1.code, resolved);

    let link1_again = registry
        .shorten(url1)
        .context("Failed to re-shorten first URL")?;
    println!(
        "{} '{}' again: {} (same as {})",
        "shortened".cyan(),
        url1,
        link1_again.code.green(),
        link1.code.green()
    );

    match registry.resolve("zzzzzz") {
        Ok(url) => println!("{} zzzzzz -> {}", "resolved".cyan(), url),
        Err(e) => println!("{} {}", "error:".red(), e),
    }

    Ok(())
}

/// Interactive command loop over the registry.
///
/// Commands: `shorten <url>`, `resolve <code>`, `list`, `help`, `quit`.
fn run_shell(registry: &Registry, json: bool) -> Result<()> {
    println!(
        "{}",
        "shortcode shell. Type 'help' for commands, 'quit' to exit.".bold()
    );

    loop {
        let line: String = match Input::new().with_prompt("shortcode").interact_text() {
            Ok(line) => line,
            Err(_) => break,
        };

        let mut parts = line.trim().splitn(2, char::is_whitespace);
        let command = parts.next().unwrap_or("");
        let argument = parts.next().map(str::trim).unwrap_or("");

        match command {
            "shorten" => match registry.shorten(argument) {
                Ok(link) => print_link(&link, json)?,
                Err(e) => println!("{} {}", "error:".red(), e),
            },
            "resolve" => match registry.resolve(argument) {
                Ok(url) => println!("{} {} -> {}", "resolved".cyan(), argument, url),
                Err(e) => println!("{} {}", "error:".red(), e),
            },
            "list" => print_links(&registry.links(), json)?,
            "help" => print_help(),
            "quit" | "exit" => break,
            "" => {}
            other => println!("{} unknown command '{}'", "error:".red(), other),
        }
    }

    Ok(())
}

fn print_help() {
    println!("  {}  register a URL and print its code", "shorten <url> ".bold());
    println!("  {}  look up the URL behind a code", "resolve <code>".bold());
    println!("  {}  show all registered links", "list          ".bold());
    println!("  {}  exit the shell", "quit          ".bold());
}

fn print_link(link: &Link, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(link)?);
    } else {
        println!(
            "{} '{}' -> {}",
            "shortened".cyan(),
            link.long_url,
            link.code.green()
        );
    }
    Ok(())
}

fn print_links(links: &[Link], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(links)?);
        return Ok(());
    }

    if links.is_empty() {
        println!("{}", "no links registered yet".yellow());
        return Ok(());
    }

    for link in links {
        println!(
            "  {}  {}  {}",
            link.code.green(),
            link.long_url,
            link.created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .dimmed()
        );
    }
    Ok(())
}
