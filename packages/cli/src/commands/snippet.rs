use crate::manifest::load_manifest;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use zenith_compiler_html::snippet_for;

#[derive(Debug, Args)]
pub struct SnippetArgs {
    /// Page manifest
    pub manifest: PathBuf,

    /// Id of the block to copy
    pub block_id: String,
}

pub fn snippet(args: SnippetArgs) -> Result<()> {
    let blocks = load_manifest(&args.manifest)?;
    println!("{}", snippet_for(&blocks, &args.block_id)?);
    Ok(())
}
