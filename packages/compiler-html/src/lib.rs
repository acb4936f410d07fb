//! # Zenith HTML compiler
//!
//! Writes evaluated block trees as HTML: static markup for export and the
//! clipboard, and the editable canvas markup for the interactive host.

pub mod canvas;
pub mod compiler;
pub mod export;

#[cfg(test)]
mod tests;

pub use canvas::{render_canvas, EMPTY_CANVAS_HINT};
pub use compiler::{
    compile_block, compile_block_with, compile_node, escape_html, CompileError, CompileOptions,
    CompileResult,
};
pub use export::{
    copy_block, copy_block_with, export_document, snippet_for, write_export, ExportOptions,
    EXPORT_FILE_NAME, TAILWIND_CDN,
};
