use crate::config::Config;
use crate::manifest::to_manifest_json;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use zenith_editor::Editor;
use zenith_schema::BlockType;

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Block types, in page order (see `zenith blocks`)
    #[arg(required = true)]
    pub types: Vec<String>,

    /// Write the manifest to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn new_page(args: NewArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let mut editor = Editor::new().with_history_limit(config.history_limit);

    for tag in &args.types {
        let block_type = BlockType::from_str(tag)
            .map_err(|_| anyhow!("Unknown block type: {} (run `zenith blocks`)", tag))?;
        editor.insert(block_type, None)?;
    }

    let json = to_manifest_json(editor.blocks())?;
    match args.output {
        Some(path) => {
            let path = PathBuf::from(cwd).join(path);
            fs::write(&path, json)?;
            println!(
                "  {} {} blocks → {}",
                "✓".green(),
                editor.blocks().len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
