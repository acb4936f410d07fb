use crate::config::Config;
use crate::manifest::load_manifest;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use tracing::debug;
use zenith_compiler_html::{export_document, write_export};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Page manifest (JSON array of blocks, or `{ "blocks": [...] }`)
    pub manifest: PathBuf,

    /// Output file (overrides config)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,

    /// Document title (overrides config)
    #[arg(short, long)]
    pub title: Option<String>,
}

pub fn export(args: ExportArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let blocks = load_manifest(&args.manifest)?;
    debug!(manifest = %args.manifest.display(), blocks = blocks.len(), "Manifest loaded");

    let mut options = config.export_options();
    if let Some(title) = args.title {
        options.title = title;
    }

    if args.stdout {
        println!("{}", export_document(&blocks, &options));
        return Ok(());
    }

    let out_file = match args.output {
        Some(path) => PathBuf::from(cwd).join(path),
        None => config.get_out_file(cwd),
    };
    if let Some(parent) = out_file.parent() {
        fs::create_dir_all(parent)?;
    }

    write_export(&blocks, &options, &out_file)?;

    println!(
        "  {} {} blocks → {}",
        "✓".green(),
        blocks.len(),
        out_file.display()
    );
    Ok(())
}
