use crate::config::Config;
use crate::manifest::{load_manifest, to_manifest_json};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;
use zenith_assistant::{ContentGenerator, HttpGenerator};
use zenith_compiler_html::copy_block;
use zenith_editor::{Editor, GenerationOutcome, PromptDialog};

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// What the section should contain
    pub prompt: String,

    /// Append the generated block to this manifest and write it back
    #[arg(short, long)]
    pub page: Option<PathBuf>,

    /// Model name (overrides config)
    #[arg(short, long)]
    pub model: Option<String>,
}

pub async fn generate(args: GenerateArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;

    let mut generator_config = config.generator.clone();
    if let Some(model) = args.model {
        generator_config.model = model;
    }
    let generator = HttpGenerator::from_env(generator_config)?;

    let page_path = args.page.map(|p| PathBuf::from(cwd).join(p));
    let blocks = match &page_path {
        Some(path) => load_manifest(path)?,
        None => Vec::new(),
    };
    let mut editor = Editor::from_blocks(blocks).with_history_limit(config.history_limit);

    let mut dialog = PromptDialog::new();
    dialog.open();
    dialog.set_prompt(args.prompt);
    let (ticket, request) = dialog
        .begin()
        .ok_or_else(|| anyhow!("Prompt is empty"))?;

    eprintln!("{}", "✨ Generating block...".bright_blue().bold());
    let response = generator.generate(&request).await;

    let id = match dialog.finish(ticket, response, &mut editor) {
        GenerationOutcome::Accepted(id) => id,
        GenerationOutcome::Failed(message) => return Err(anyhow!(message)),
        GenerationOutcome::Discarded => return Err(anyhow!("Generation was cancelled")),
    };

    let block = editor
        .block(&id)
        .ok_or_else(|| anyhow!("Generated block {} is missing", id))?;

    match page_path {
        Some(path) => {
            fs::write(&path, to_manifest_json(editor.blocks())?)?;
            eprintln!(
                "  {} {} ({}) → {}",
                "✓".green(),
                block.type_name(),
                id,
                path.display()
            );
        }
        None => println!("{}", copy_block(block)),
    }
    Ok(())
}
