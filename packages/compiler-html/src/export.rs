//! Standalone page export and single-block clipboard snippets.

use crate::compiler::{escape_html, write_node, CompileError, CompileOptions, CompileResult, Context, Markup};
use std::fs;
use std::path::Path;
use tracing::{debug, info};
use zenith_compiler_css::resolve;
use zenith_evaluator::{evaluate_block, RenderOptions};
use zenith_schema::Block;

/// Suggested file name for a downloaded export
pub const EXPORT_FILE_NAME: &str = "zenith-page.html";

pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

const BASE_STYLE: [&str; 2] = [
    "body { margin: 0; font-family: system-ui, -apple-system, sans-serif; }",
    "html { scroll-behavior: smooth; }",
];

#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub title: String,
    pub cdn_url: String,
    pub lang: String,
    pub compile: CompileOptions,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: "Exported Page".to_string(),
            cdn_url: TAILWIND_CDN.to_string(),
            lang: "en".to_string(),
            compile: CompileOptions::default(),
        }
    }
}

/// Full HTML document for a page, blocks in order
pub fn export_document(blocks: &[Block], options: &ExportOptions) -> String {
    info!(blocks = blocks.len(), "Exporting page");
    let mut ctx = Context::new(options.compile.clone());

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line(&format!("<html lang=\"{}\">", escape_html(&options.lang)));
    ctx.indent();

    ctx.add_line("<head>");
    ctx.indent();
    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");
    ctx.add_line(&format!("<title>{}</title>", escape_html(&options.title)));
    ctx.add_line(&format!("<script src=\"{}\"></script>", escape_html(&options.cdn_url)));
    ctx.add_line("<style>");
    ctx.indent();
    for rule in BASE_STYLE {
        ctx.add_line(rule);
    }
    ctx.dedent();
    ctx.add_line("</style>");
    ctx.dedent();
    ctx.add_line("</head>");

    ctx.add_line("<body>");
    ctx.indent();
    for block in blocks {
        ctx.add_line(&format!("<!-- Block: {} -->", block.type_name().replace("--", "- -")));
        write_section(block, &mut ctx, true);
    }
    ctx.dedent();
    ctx.add_line("</body>");

    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

/// Clipboard snippet for one block: its section with inline style and markup
pub fn copy_block(block: &Block) -> String {
    copy_block_with(block, CompileOptions::default())
}

pub fn copy_block_with(block: &Block, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    write_section(block, &mut ctx, false);
    ctx.get_output()
}

/// Snippet for the block with `id`
pub fn snippet_for(blocks: &[Block], id: &str) -> CompileResult<String> {
    blocks
        .iter()
        .find(|block| block.id == id)
        .map(copy_block)
        .ok_or_else(|| CompileError::BlockNotFound(id.to_string()))
}

/// Render the page and write it to `path`
pub fn write_export(blocks: &[Block], options: &ExportOptions, path: &Path) -> CompileResult<()> {
    let html = export_document(blocks, options);
    fs::write(path, html).map_err(|source| CompileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "Export written");
    Ok(())
}

fn write_section(block: &Block, ctx: &mut Context, with_identity: bool) {
    let style = resolve(&block.styles).to_inline();

    let open = if with_identity {
        format!(
            "<section id=\"{}\" data-block-type=\"{}\" style=\"{}\">",
            escape_html(&block.id),
            escape_html(block.type_name()),
            escape_html(&style)
        )
    } else {
        format!("<section style=\"{}\">", escape_html(&style))
    };

    ctx.add_line(&open);
    ctx.indent();
    if let Some(node) = evaluate_block(block, &RenderOptions::static_markup()) {
        write_node(&node, ctx, Markup::Static);
    }
    ctx.dedent();
    ctx.add_line("</section>");
}
