//! # Zenith Schema
//!
//! Typed model of a page block: identity, per-variant content, extra
//! elements and style payload, together with the default template for
//! each of the fifteen variants.
//!
//! Everything that reads or writes block data (renderers, the editor, the
//! generator protocol) goes through these types; no other crate holds an
//! untyped content map for longer than a patch application.

pub mod block;
pub mod block_type;
pub mod content;
pub mod defaults;
pub mod error;
pub mod id_generator;
pub mod patch;
pub mod styles;

pub use block::{Block, BlockContent};
pub use block_type::BlockType;
pub use content::*;
pub use defaults::default_content;
pub use error::{SchemaError, SchemaResult};
pub use id_generator::IDGenerator;
pub use patch::{element_align_patch, ContentPatch, FieldPath, StylePatch};
pub use styles::{
    gradient_for, BackgroundPosition, BackgroundRepeat, BackgroundSize, BlockStyles, Palette,
    PALETTES,
};
