//! Birthday MCP Server - Main Entry Point
//!
//! This is the main entry point for the birthday MCP server application.
//! The actual implementation is in the `birthday_mcp` library.

use anyhow::Result;
use birthday_mcp::logging::init_logger;
use birthday_mcp::{BirthdayServerHandler, SettingsUpdate};
use clap::{CommandFactory, Parser};
use mcp_attr::server::serve_stdio;
use tracing::info;

/// Birthday MCP Server - birthday reminders and contact notes via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the birthday data file
    file: String,

    /// Set the default look-ahead for upcoming birthdays (days) and save it
    #[arg(long)]
    upcoming_days: Option<u32>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().len() == 1 {
        let mut cmd = Args::command();
        cmd.print_help().ok();
        println!();
        std::process::exit(2);
    }

    let args = Args::parse();
    init_logger(args.verbose);

    let handler = BirthdayServerHandler::new(&args.file)?;
    handler.update_settings(&SettingsUpdate {
        upcoming_days: args.upcoming_days,
        ..Default::default()
    })?;
    info!(
        "Serving {} birthday(s) from {}",
        handler.records().len(),
        handler.storage_path().display()
    );

    serve_stdio(handler).await?;
    Ok(())
}
