//! # Zenith Evaluator
//!
//! Evaluates a block to the node tree both renderers are derived from.
//!
//! ## Projections
//!
//! One template per variant builds a single [`VNode`] tree. The interactive
//! projection keeps every node: bound text nodes become editable on the
//! canvas and chrome (star rows, icons) is shown. The static projection is
//! the same tree with chrome removed, so the text and nesting of exported
//! markup can never drift from what the user edited.
//!
//! ## Determinism Contract
//!
//! **INVARIANT: Evaluation is fully deterministic.**
//!
//! The same block and options always produce an identical tree: attributes
//! are kept in a `BTreeMap`, templates iterate content lists in order, and
//! nothing reads time, randomness or the environment.
//!
//! **Tests**: See `tests/test_determinism.rs` for validation.
//!
//! ## Unknown variants
//!
//! A block whose type is not one of the known variants is never an error.
//! The interactive projection renders a small fallback notice and the static
//! projection renders nothing.
//!
//! ## Usage
//!
//! ```rust
//! use zenith_evaluator::{Evaluator, RenderOptions};
//! use zenith_schema::{Block, BlockType};
//!
//! let block = Block::new("b1", BlockType::Hero);
//! let vdom = Evaluator::new(RenderOptions::static_markup()).evaluate(&block);
//! assert!(vdom.is_some());
//! ```

use crate::options::{RenderMode, RenderOptions};
use crate::templates;
use crate::vdom::VNode;
use tracing::{debug, instrument, warn};
use zenith_schema::{Block, ExtraElement, FieldPath};

/// Label shown on the canvas for a block of an unknown type
pub const UNKNOWN_BLOCK_LABEL: &str = "Unknown Block Type";

const EXTRA_BUTTON_CLASS: &str =
    "inline-block bg-blue-600 text-white px-6 py-2 rounded-full font-medium hover:bg-blue-700 transition";

/// Evaluates blocks under one set of render options
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    options: RenderOptions,
}

impl Evaluator {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Build the block's container node, `None` when there is nothing to render
    #[instrument(skip(self, block), fields(id = %block.id, block_type = %block.type_name(), mode = ?self.options.mode))]
    pub fn evaluate(&self, block: &Block) -> Option<VNode> {
        let Some(container) = templates::render(&block.content, &self.options) else {
            warn!("Unknown block type");
            return match self.options.mode {
                RenderMode::Interactive => Some(unknown_fallback()),
                RenderMode::Static => None,
            };
        };

        let container = if block.elements.is_empty() {
            container
        } else {
            debug!(elements = block.elements.len(), "Appending extra elements");
            container.with_children(
                block
                    .elements
                    .iter()
                    .enumerate()
                    .map(|(index, element)| extra_element(index, element)),
            )
        };

        match self.options.mode {
            RenderMode::Interactive => Some(container),
            RenderMode::Static => container.without_chrome(),
        }
    }
}

/// Evaluate one block with the given options
pub fn evaluate_block(block: &Block, options: &RenderOptions) -> Option<VNode> {
    Evaluator::new(*options).evaluate(block)
}

fn unknown_fallback() -> VNode {
    VNode::element("div")
        .with_class("p-8 text-center text-gray-400")
        .with_child(VNode::text(UNKNOWN_BLOCK_LABEL))
}

fn extra_element(index: usize, element: &ExtraElement) -> VNode {
    let row = VNode::element("div").with_class(format!("w-full mt-4 {}", element.align().text_class()));

    let inner = match element {
        ExtraElement::Text { content, .. } => VNode::element("div")
            .with_class("text-lg inline-block")
            .with_binding(FieldPath::element(index, "content"))
            .with_child(VNode::text(content.as_str())),
        ExtraElement::Button { text, url, .. } => VNode::element("a")
            .with_class(EXTRA_BUTTON_CLASS)
            .with_attr("href", url.as_str())
            .with_binding(FieldPath::element(index, "text"))
            .with_child(VNode::text(text.as_str())),
    };

    row.with_child(inner)
}
