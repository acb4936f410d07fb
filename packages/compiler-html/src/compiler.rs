use std::io;
use std::path::PathBuf;
use thiserror::Error;
use zenith_evaluator::{evaluate_block, RenderOptions, VNode};
use zenith_schema::Block;

/// Errors that can occur during HTML compilation
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("Block '{0}' not found")]
    BlockNotFound(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type CompileResult<T> = Result<T, CompileError>;

/// Options for HTML compilation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Pretty print HTML
    pub pretty: bool,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
        }
    }
}

/// How bound and chrome nodes are written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Markup {
    /// Plain HTML, no editing attributes
    Static,
    /// Bound nodes become `contenteditable`, chrome is tagged
    Canvas,
}

pub(crate) struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    pub(crate) fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    pub(crate) fn add(&mut self, text: &str) {
        self.buffer.push_str(text);
    }

    pub(crate) fn add_line(&mut self, text: &str) {
        if self.options.pretty {
            self.add_indent();
        }
        self.add(text);
        if self.options.pretty {
            self.add("\n");
        }
    }

    fn add_indent(&mut self) {
        let indent = self.options.indent.clone();
        for _ in 0..self.depth {
            self.add(&indent);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    pub(crate) fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a node tree to HTML
pub fn compile_node(node: &VNode, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);
    write_node(node, &mut ctx, Markup::Static);
    ctx.get_output()
}

/// Static markup for one block. Unknown block types produce an empty string.
pub fn compile_block(block: &Block) -> String {
    compile_block_with(block, CompileOptions::default())
}

pub fn compile_block_with(block: &Block, options: CompileOptions) -> String {
    match evaluate_block(block, &RenderOptions::static_markup()) {
        Some(node) => compile_node(&node, options),
        None => String::new(),
    }
}

pub(crate) fn write_node(node: &VNode, ctx: &mut Context, markup: Markup) {
    match node {
        VNode::Element {
            tag,
            attributes,
            children,
            binding,
            chrome,
        } => {
            if *chrome && markup == Markup::Static {
                return;
            }

            if ctx.options.pretty {
                ctx.add_indent();
            }
            ctx.add(&format!("<{}", tag));

            for (name, value) in attributes {
                write_attribute(name, value, ctx);
            }

            if markup == Markup::Canvas {
                if let Some(path) = binding {
                    write_attribute("contenteditable", "true", ctx);
                    write_attribute("data-field", &path.to_string(), ctx);
                }
                if *chrome {
                    write_attribute("data-chrome", "true", ctx);
                }
            }

            // Self-closing tags
            if children.is_empty() && is_self_closing(tag) {
                ctx.add(" />");
                if ctx.options.pretty {
                    ctx.add("\n");
                }
                return;
            }

            ctx.add(">");

            let block_children = has_element_children(children);
            if !children.is_empty() {
                if ctx.options.pretty && block_children {
                    ctx.add("\n");
                }
                ctx.indent();

                for child in children {
                    write_node(child, ctx, markup);
                }

                ctx.dedent();
                if ctx.options.pretty && block_children {
                    ctx.add_indent();
                }
            }

            // Closing tag
            ctx.add(&format!("</{}>", tag));
            if ctx.options.pretty {
                ctx.add("\n");
            }
        }

        VNode::Text { content } => {
            ctx.add(&escape_html(content));
        }

        VNode::Comment { content } => {
            ctx.add_line(&format!("<!-- {} -->", content.replace("--", "- -")));
        }
    }
}

fn write_attribute(name: &str, value: &str, ctx: &mut Context) {
    ctx.add(" ");
    ctx.add(name);
    if value.is_empty() {
        return;
    }
    ctx.add("=\"");
    ctx.add(&escape_html(value));
    ctx.add("\"");
}

pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn is_self_closing(tag: &str) -> bool {
    matches!(
        tag,
        "img"
            | "input"
            | "br"
            | "hr"
            | "meta"
            | "link"
            | "area"
            | "base"
            | "col"
            | "embed"
            | "param"
            | "source"
            | "track"
            | "wbr"
    )
}

fn has_element_children(children: &[VNode]) -> bool {
    children
        .iter()
        .any(|child| !matches!(child, VNode::Text { .. }))
}
