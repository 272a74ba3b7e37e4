//! Memopad - Main Entry Point
//!
//! Runs the MCP server over stdio, or captures/previews a single line from
//! the command line. The actual implementation is in the `memopad` library.

use anyhow::{Context, Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use mcp_attr::server::serve_stdio;
use memopad::{MemopadServerHandler, Settings, formatting};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Memopad - quick capture of notes, ideas and dated tasks into a markdown inbox
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the settings file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Inbox file to use instead of the one in the settings
    #[arg(long, global = true)]
    inbox: Option<PathBuf>,

    /// Enable git synchronization on capture
    #[arg(long, global = true)]
    sync_git: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the MCP tools over stdio
    Serve,
    /// Capture one entry into the inbox
    Capture {
        /// Text to capture
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },
    /// Show the line a capture would write
    Preview {
        /// Text to classify
        #[arg(num_args = 0..)]
        text: Vec<String>,
    },
    /// Write the default settings file
    InitConfig {
        /// Overwrite an existing settings file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Check if no arguments were provided (except the program name)
    if std::env::args().len() == 1 {
        // No arguments provided, show help and exit with error code
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!(); // Add a newline after help
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logging(args.verbose);

    let config_path = args.config.clone().unwrap_or_else(Settings::default_path);
    tracing::debug!(config = %config_path.display(), "using settings file");

    match args.command {
        Command::InitConfig { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Settings file {} already exists (use --force to overwrite)",
                    config_path.display()
                );
            }
            Settings::default().save(&config_path)?;
            println!("Wrote default settings to {}", config_path.display());
        }
        Command::Preview { text } => {
            let settings = Settings::load(&config_path)?;
            println!(
                "{}",
                formatting::render_preview(&text.join(" "), &settings.capture)
            );
        }
        Command::Capture { text } => {
            let handler = MemopadServerHandler::from_settings_file(
                &config_path,
                args.inbox.as_deref(),
                args.sync_git,
            )?;
            let result = handler
                .capture_entry(&text.join(" "))
                .context("Capture failed")?;
            print!(
                "{}",
                formatting::render_entry_line(&result.formatted, result.is_task)
            );
        }
        Command::Serve => {
            let handler = MemopadServerHandler::from_settings_file(
                &config_path,
                args.inbox.as_deref(),
                args.sync_git,
            )?;
            tracing::info!("serving memopad over stdio");
            serve_stdio(handler).await?;
        }
    }
    Ok(())
}

/// Log to stderr; stdout carries the MCP stdio transport
///
/// Priority: RUST_LOG env var > --verbose flag > default (info)
fn init_logging(verbose: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}
