mod commands;
mod config;
mod manifest;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    blocks, export, generate, init, new_page, snippet, BlocksArgs, ExportArgs, GenerateArgs,
    InitArgs, NewArgs, SnippetArgs,
};
use tracing::info;

/// Zenith CLI - block-based page builder
#[derive(Parser, Debug)]
#[command(name = "zenith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a zenith.config.json
    Init(InitArgs),

    /// List the available block types
    Blocks(BlocksArgs),

    /// Start a page manifest from a list of block types
    New(NewArgs),

    /// Export a page manifest as a standalone HTML file
    Export(ExportArgs),

    /// Print the clipboard snippet of one block
    Snippet(SnippetArgs),

    /// Generate a block from a prompt
    Generate(GenerateArgs),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(dir) => dir.display().to_string(),
        Err(err) => {
            eprintln!("{} Cannot get current directory: {}", "Error:".red().bold(), err);
            std::process::exit(1);
        }
    };

    info!(command = ?cli.command, cwd = %cwd, "Running command");

    let result = match cli.command {
        Command::Init(args) => init(args, &cwd),
        Command::Blocks(args) => blocks(args),
        Command::New(args) => new_page(args, &cwd),
        Command::Export(args) => export(args, &cwd),
        Command::Snippet(args) => snippet(args),
        Command::Generate(args) => generate(args, &cwd).await,
    };

    if let Err(err) = result {
        eprintln!();
        eprintln!("{} {:#}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
