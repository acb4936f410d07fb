//! # Undo/Redo Stack
//!
//! Snapshot history of the block list.
//!
//! ## Design
//!
//! - Every committed mutation pushes the list as it was *before* the mutation
//! - Undo swaps the current list with the most recent snapshot and moves the
//!   current list onto the redo stack
//! - Redo is the mirror image
//! - A new commit clears the redo stack
//! - The oldest snapshot is dropped once `max_levels` is exceeded
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut stack = UndoStack::new();
//! let before = blocks.clone();
//! blocks.push(Block::new("b1", BlockType::Hero));
//! stack.record(before, "Insert hero");
//!
//! stack.undo(&mut blocks);
//! stack.redo(&mut blocks);
//! ```

use zenith_schema::Block;

/// One history entry: the block list to restore plus what produced the change
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub blocks: Vec<Block>,
    pub description: Option<String>,
}

/// Undo/redo stack for page editing
#[derive(Debug)]
pub struct UndoStack {
    /// Lists preceding each applied change (most recent last)
    undo_stack: Vec<Snapshot>,

    /// Lists replaced by undo (most recent last)
    redo_stack: Vec<Snapshot>,

    /// Maximum number of undo levels (0 = unlimited)
    max_levels: usize,
}

impl UndoStack {
    /// Create a new undo stack with default max levels (100)
    pub fn new() -> Self {
        Self::with_max_levels(100)
    }

    pub fn with_max_levels(max_levels: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            max_levels,
        }
    }

    /// Record the list as it was before a change
    pub fn record(&mut self, before: Vec<Block>, description: impl Into<String>) {
        self.undo_stack.push(Snapshot {
            blocks: before,
            description: Some(description.into()),
        });

        if self.max_levels > 0 && self.undo_stack.len() > self.max_levels {
            self.undo_stack.remove(0);
        }

        // New action invalidates future
        self.redo_stack.clear();
    }

    /// Step back, swapping `current` with the most recent snapshot.
    /// Returns false when there is nothing to undo.
    pub fn undo(&mut self, current: &mut Vec<Block>) -> bool {
        let Some(snapshot) = self.undo_stack.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, snapshot.blocks);
        self.redo_stack.push(Snapshot {
            blocks: replaced,
            description: snapshot.description,
        });
        true
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: &mut Vec<Block>) -> bool {
        let Some(snapshot) = self.redo_stack.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, snapshot.blocks);
        self.undo_stack.push(Snapshot {
            blocks: replaced,
            description: snapshot.description,
        });
        true
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_levels(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_levels(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn max_levels(&self) -> usize {
        self.max_levels
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    /// Description of the change the next undo reverts
    pub fn undo_description(&self) -> Option<&str> {
        self.undo_stack
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }

    /// Description of the change the next redo reapplies
    pub fn redo_description(&self) -> Option<&str> {
        self.redo_stack
            .last()
            .and_then(|snapshot| snapshot.description.as_deref())
    }
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}
