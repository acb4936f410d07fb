//! Drag transfer protocol between the component palette, the canvas and the
//! structure list.
//!
//! A drag from the palette carries a block-type tag; a drag of an existing
//! block carries its source index. The drop target decides what happens:
//! dropping on a block inserts (or moves) before it, dropping on the bare
//! canvas appends a new block. Reorders only happen on a block target.

use crate::mutations::Mutation;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::warn;
use zenith_schema::BlockType;

/// Transfer key holding the dragged block-type tag
pub const BLOCK_TYPE_KEY: &str = "blockType";

/// Transfer key holding the dragged block's index
pub const DRAG_INDEX_KEY: &str = "dragIndex";

/// What a drag carries
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_type: Option<String>,

    #[serde(default, rename = "dragIndex", skip_serializing_if = "Option::is_none")]
    pub source_index: Option<usize>,
}

impl DragPayload {
    /// A new block dragged from the palette
    pub fn new_block(block_type: BlockType) -> Self {
        Self {
            block_type: Some(block_type.to_string()),
            source_index: None,
        }
    }

    /// An existing block being moved
    pub fn existing(index: usize) -> Self {
        Self {
            block_type: None,
            source_index: Some(index),
        }
    }

    /// Read the payload back from raw transfer values, as a host stores them
    /// under [`BLOCK_TYPE_KEY`] and [`DRAG_INDEX_KEY`]. Empty strings count
    /// as absent; an unparsable index is dropped.
    pub fn from_transfer(block_type: Option<&str>, drag_index: Option<&str>) -> Self {
        Self {
            block_type: block_type
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            source_index: drag_index.and_then(|s| s.trim().parse().ok()),
        }
    }
}

/// Where the drop landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget {
    /// On the block at this index
    Block(usize),
    /// On the empty canvas area
    Canvas,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    Insert {
        block_type: BlockType,
        index: Option<usize>,
    },
    Reorder {
        from: usize,
        to: usize,
    },
    Ignore,
}

impl DropAction {
    /// The mutation to apply, if any
    pub fn into_mutation(self) -> Option<Mutation> {
        match self {
            DropAction::Insert { block_type, index } => {
                Some(Mutation::InsertBlock { block_type, index })
            }
            DropAction::Reorder { from, to } => Some(Mutation::MoveBlock { from, to }),
            DropAction::Ignore => None,
        }
    }
}

/// Decide what a drop does. A block-type tag takes precedence over a source index.
pub fn resolve_drop(payload: &DragPayload, target: DropTarget) -> DropAction {
    if let Some(tag) = &payload.block_type {
        let Ok(block_type) = BlockType::from_str(tag) else {
            warn!(block_type = %tag, "Dropped unknown block type");
            return DropAction::Ignore;
        };
        let index = match target {
            DropTarget::Block(index) => Some(index),
            DropTarget::Canvas => None,
        };
        return DropAction::Insert { block_type, index };
    }

    match (payload.source_index, target) {
        (Some(from), DropTarget::Block(to)) if from != to => DropAction::Reorder { from, to },
        _ => DropAction::Ignore,
    }
}
