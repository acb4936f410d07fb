pub mod evaluator;
pub mod options;
pub mod vdom;

mod templates;

#[cfg(test)]
mod tests_templates;

#[cfg(test)]
mod tests_projection;

pub use evaluator::{evaluate_block, Evaluator, UNKNOWN_BLOCK_LABEL};
pub use options::{RenderMode, RenderOptions, Viewport};
pub use vdom::VNode;
