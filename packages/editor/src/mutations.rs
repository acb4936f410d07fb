//! # Page Mutations
//!
//! Semantic operations on the ordered block list.
//!
//! ## Mutation Semantics
//!
//! ### Insert / Add
//! - New blocks are built from the variant defaults with a fresh id
//! - The target index is clamped to the list length; `None` appends
//!
//! ### Move
//! - Single-block move: remove at `from`, insert at `to`
//! - Moving a block onto its own index is a no-op
//!
//! ### Update
//! - Content and style patches are shallow, one-level merges
//! - List-valued fields are replaced wholesale
//! - Element, palette and gradient edits are expressed as one patch each
//!
//! Every mutation either fully applies or leaves the list untouched.

use crate::errors::MutationError;
use serde::{Deserialize, Serialize};
use zenith_schema::{
    element_align_patch, gradient_for, Align, Block, BlockType, ContentPatch, ElementKind,
    ExtraElement, IDGenerator, Palette, StylePatch,
};

/// Semantic mutations on a page
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Mutation {
    /// Insert a new block of `block_type` built from defaults
    InsertBlock {
        block_type: BlockType,
        index: Option<usize>,
    },

    /// Insert an already-built block (a generated candidate, a pasted block)
    AddBlock { block: Block, index: Option<usize> },

    /// Move one block to a new position
    MoveBlock { from: usize, to: usize },

    RemoveBlock { block_id: String },

    UpdateStyles { block_id: String, patch: StylePatch },

    UpdateContent { block_id: String, patch: ContentPatch },

    /// Append a free-form text or button element
    AddElement { block_id: String, kind: ElementKind },

    RemoveElement { block_id: String, index: usize },

    SetElementAlign {
        block_id: String,
        index: usize,
        align: Align,
    },

    /// Apply a named palette; clears any gradient
    ApplyPalette { block_id: String, palette: String },

    /// Switch the background gradient on (derived from the background color) or off
    SetGradient { block_id: String, enabled: bool },
}

/// What a successful mutation did to the list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// A block with this id was added
    Inserted(String),
    /// The block with this id was removed
    Removed(String),
    Changed,
    /// Nothing to record
    Unchanged,
}

pub type MutationResult = Result<MutationOutcome, MutationError>;

impl Mutation {
    /// Apply the mutation to `blocks`, drawing ids for new blocks from `ids`
    pub fn apply(&self, blocks: &mut Vec<Block>, ids: &mut IDGenerator) -> MutationResult {
        match self {
            Mutation::InsertBlock { block_type, index } => {
                let block = Block::new(ids.new_id(), *block_type);
                Ok(insert_at(blocks, block, *index))
            }

            Mutation::AddBlock { block, index } => {
                if blocks.iter().any(|b| b.id == block.id) {
                    return Err(MutationError::DuplicateBlockId(block.id.clone()));
                }
                Ok(insert_at(blocks, block.clone(), *index))
            }

            Mutation::MoveBlock { from, to } => Self::apply_move(blocks, *from, *to),

            Mutation::RemoveBlock { block_id } => {
                let position = position_of(blocks, block_id)?;
                let removed = blocks.remove(position);
                Ok(MutationOutcome::Removed(removed.id))
            }

            Mutation::UpdateStyles { block_id, patch } => edit_block(blocks, block_id, |block| {
                block.apply_style_patch(patch)?;
                Ok(())
            }),

            Mutation::UpdateContent { block_id, patch } => edit_block(blocks, block_id, |block| {
                block.apply_content_patch(patch)?;
                Ok(())
            }),

            Mutation::AddElement { block_id, kind } => edit_block(blocks, block_id, |block| {
                let mut elements = block.elements.clone();
                elements.push(ExtraElement::new(*kind));
                let patch = ContentPatch::new().set_serialized("elements", &elements)?;
                block.apply_content_patch(&patch)?;
                Ok(())
            }),

            Mutation::RemoveElement { block_id, index } => edit_block(blocks, block_id, |block| {
                check_element(block, *index)?;
                let mut elements = block.elements.clone();
                elements.remove(*index);
                let patch = ContentPatch::new().set_serialized("elements", &elements)?;
                block.apply_content_patch(&patch)?;
                Ok(())
            }),

            Mutation::SetElementAlign {
                block_id,
                index,
                align,
            } => edit_block(blocks, block_id, |block| {
                check_element(block, *index)?;
                let patch = element_align_patch(block, *index, *align)?;
                block.apply_content_patch(&patch)?;
                Ok(())
            }),

            Mutation::ApplyPalette { block_id, palette } => {
                let palette = Palette::find(palette)
                    .ok_or_else(|| MutationError::UnknownPalette(palette.clone()))?;
                edit_block(blocks, block_id, |block| {
                    let patch = StylePatch::new()
                        .background_color(palette.background)
                        .text_color(palette.text)
                        .gradient(None);
                    block.apply_style_patch(&patch)?;
                    Ok(())
                })
            }

            Mutation::SetGradient { block_id, enabled } => edit_block(blocks, block_id, |block| {
                let gradient = enabled.then(|| gradient_for(&block.styles.background_color));
                let patch = StylePatch::new().gradient(gradient.as_deref());
                block.apply_style_patch(&patch)?;
                Ok(())
            }),
        }
    }

    fn apply_move(blocks: &mut Vec<Block>, from: usize, to: usize) -> MutationResult {
        let len = blocks.len();
        if from >= len {
            return Err(MutationError::IndexOutOfBounds { index: from, len });
        }
        if to >= len {
            return Err(MutationError::IndexOutOfBounds { index: to, len });
        }
        if from == to {
            return Ok(MutationOutcome::Unchanged);
        }

        let block = blocks.remove(from);
        blocks.insert(to, block);
        Ok(MutationOutcome::Changed)
    }

    /// Short human-readable label, used as the history entry description
    pub fn describe(&self) -> String {
        match self {
            Mutation::InsertBlock { block_type, .. } => format!("Insert {}", block_type.label()),
            Mutation::AddBlock { block, .. } => format!("Add {}", block.type_name()),
            Mutation::MoveBlock { from, to } => format!("Move block {} to {}", from, to),
            Mutation::RemoveBlock { block_id } => format!("Remove {}", block_id),
            Mutation::UpdateStyles { block_id, .. } => format!("Edit styles of {}", block_id),
            Mutation::UpdateContent { block_id, .. } => format!("Edit content of {}", block_id),
            Mutation::AddElement { kind, .. } => match kind {
                ElementKind::Text => "Add text".to_string(),
                ElementKind::Button => "Add button".to_string(),
            },
            Mutation::RemoveElement { index, .. } => format!("Remove element {}", index),
            Mutation::SetElementAlign { index, .. } => format!("Align element {}", index),
            Mutation::ApplyPalette { palette, .. } => format!("Apply {} palette", palette),
            Mutation::SetGradient { enabled: true, .. } => "Enable gradient".to_string(),
            Mutation::SetGradient { enabled: false, .. } => "Disable gradient".to_string(),
        }
    }
}

fn insert_at(blocks: &mut Vec<Block>, block: Block, index: Option<usize>) -> MutationOutcome {
    let id = block.id.clone();
    let index = index.map_or(blocks.len(), |i| i.min(blocks.len()));
    blocks.insert(index, block);
    MutationOutcome::Inserted(id)
}

fn position_of(blocks: &[Block], block_id: &str) -> Result<usize, MutationError> {
    blocks
        .iter()
        .position(|b| b.id == block_id)
        .ok_or_else(|| MutationError::BlockNotFound(block_id.to_string()))
}

/// Run `edit` on the block with `block_id`; an edit that leaves it equal is `Unchanged`
fn edit_block<F>(blocks: &mut [Block], block_id: &str, edit: F) -> MutationResult
where
    F: FnOnce(&mut Block) -> Result<(), MutationError>,
{
    let block = find_mut(blocks, block_id)?;
    let before = block.clone();
    edit(block)?;
    if *block == before {
        Ok(MutationOutcome::Unchanged)
    } else {
        Ok(MutationOutcome::Changed)
    }
}

fn check_element(block: &Block, index: usize) -> Result<(), MutationError> {
    if index >= block.elements.len() {
        return Err(MutationError::ElementNotFound {
            block_id: block.id.clone(),
            index,
        });
    }
    Ok(())
}

fn find_mut<'a>(blocks: &'a mut [Block], block_id: &str) -> Result<&'a mut Block, MutationError> {
    blocks
        .iter_mut()
        .find(|b| b.id == block_id)
        .ok_or_else(|| MutationError::BlockNotFound(block_id.to_string()))
}
