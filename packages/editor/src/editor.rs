//! # Page Editor
//!
//! The single mutable page: ordered blocks, the current selection and the
//! undo history.
//!
//! Every change goes through [`Editor::apply`]. The mutation runs against a
//! copy of the list; only when it succeeds is the copy swapped in and the
//! previous list committed as one history entry. A failing mutation leaves
//! both the list and the history untouched.
//!
//! ```text
//! Mutation → apply on copy → swap in → record previous list
//!                 ↓ (error)
//!            list unchanged, no entry
//! ```

use crate::errors::{EditorError, MutationError};
use crate::mutations::{Mutation, MutationOutcome, MutationResult};
use crate::undo_stack::UndoStack;
use tracing::{debug, info, instrument, warn};
use zenith_assistant::Candidate;
use zenith_schema::{Align, Block, BlockType, ContentPatch, ElementKind, IDGenerator, StylePatch};

/// Editable page
#[derive(Debug)]
pub struct Editor {
    blocks: Vec<Block>,
    selected_id: Option<String>,
    history: UndoStack,
    ids: IDGenerator,

    /// Increments on every change to the list, including undo and redo
    version: u64,
}

impl Editor {
    /// Empty page with a session-seeded id generator
    pub fn new() -> Self {
        Self::with_ids(IDGenerator::for_session())
    }

    pub fn with_ids(ids: IDGenerator) -> Self {
        Self {
            blocks: Vec::new(),
            selected_id: None,
            history: UndoStack::new(),
            ids,
            version: 0,
        }
    }

    /// Start from an existing list (a loaded manifest). History starts empty.
    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self {
            blocks,
            ..Self::new()
        }
    }

    /// Cap the number of undo levels (0 = unlimited)
    pub fn with_history_limit(mut self, max_levels: usize) -> Self {
        self.history = UndoStack::with_max_levels(max_levels);
        self
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }

    pub fn block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn history(&self) -> &UndoStack {
        &self.history
    }

    /// Apply a mutation as one undoable step
    #[instrument(skip(self, mutation), fields(mutation = %mutation.describe()))]
    pub fn apply(&mut self, mutation: Mutation) -> MutationResult {
        let mut next = self.blocks.clone();
        let outcome = match mutation.apply(&mut next, &mut self.ids) {
            Ok(outcome) => outcome,
            Err(e) => {
                warn!(error = %e, "Mutation rejected");
                return Err(e);
            }
        };

        if outcome == MutationOutcome::Unchanged {
            debug!("Mutation left the page unchanged");
            return Ok(outcome);
        }

        let previous = std::mem::replace(&mut self.blocks, next);
        self.history.record(previous, mutation.describe());
        self.version += 1;

        match &outcome {
            MutationOutcome::Inserted(id) => self.selected_id = Some(id.clone()),
            MutationOutcome::Removed(id) => {
                if self.selected_id.as_deref() == Some(id.as_str()) {
                    self.selected_id = None;
                }
            }
            MutationOutcome::Changed | MutationOutcome::Unchanged => {}
        }

        debug!(blocks = self.blocks.len(), version = self.version, "Mutation committed");
        Ok(outcome)
    }

    /// Insert a block of `block_type` from defaults at `index` (clamped), or
    /// append. The new block is selected. Returns its id.
    pub fn insert(&mut self, block_type: BlockType, index: Option<usize>) -> Result<String, MutationError> {
        match self.apply(Mutation::InsertBlock { block_type, index })? {
            MutationOutcome::Inserted(id) => Ok(id),
            other => unreachable!("insert produced {:?}", other),
        }
    }

    pub fn reorder(&mut self, from: usize, to: usize) -> MutationResult {
        self.apply(Mutation::MoveBlock { from, to })
    }

    pub fn delete(&mut self, block_id: &str) -> MutationResult {
        self.apply(Mutation::RemoveBlock {
            block_id: block_id.to_string(),
        })
    }

    pub fn update_styles(&mut self, block_id: &str, patch: StylePatch) -> MutationResult {
        self.apply(Mutation::UpdateStyles {
            block_id: block_id.to_string(),
            patch,
        })
    }

    pub fn update_content(&mut self, block_id: &str, patch: ContentPatch) -> MutationResult {
        self.apply(Mutation::UpdateContent {
            block_id: block_id.to_string(),
            patch,
        })
    }

    pub fn add_element(&mut self, block_id: &str, kind: ElementKind) -> MutationResult {
        self.apply(Mutation::AddElement {
            block_id: block_id.to_string(),
            kind,
        })
    }

    pub fn remove_element(&mut self, block_id: &str, index: usize) -> MutationResult {
        self.apply(Mutation::RemoveElement {
            block_id: block_id.to_string(),
            index,
        })
    }

    pub fn set_element_align(&mut self, block_id: &str, index: usize, align: Align) -> MutationResult {
        self.apply(Mutation::SetElementAlign {
            block_id: block_id.to_string(),
            index,
            align,
        })
    }

    pub fn apply_palette(&mut self, block_id: &str, palette: &str) -> MutationResult {
        self.apply(Mutation::ApplyPalette {
            block_id: block_id.to_string(),
            palette: palette.to_string(),
        })
    }

    pub fn set_gradient(&mut self, block_id: &str, enabled: bool) -> MutationResult {
        self.apply(Mutation::SetGradient {
            block_id: block_id.to_string(),
            enabled,
        })
    }

    /// Turn a generated candidate into a block, append it and select it
    #[instrument(skip(self, candidate), fields(block_type = %candidate.type_name))]
    pub fn accept_candidate(&mut self, candidate: Candidate) -> Result<String, EditorError> {
        let block = candidate.into_block(self.ids.new_id())?;
        let id = block.id.clone();
        self.apply(Mutation::AddBlock { block, index: None })?;
        info!(block_id = %id, "Generated block added");
        Ok(id)
    }

    /// Returns false when there is nothing to undo
    pub fn undo(&mut self) -> bool {
        let undone = self.history.undo(&mut self.blocks);
        if undone {
            self.version += 1;
            debug!(version = self.version, "Undo");
        }
        undone
    }

    pub fn redo(&mut self) -> bool {
        let redone = self.history.redo(&mut self.blocks);
        if redone {
            self.version += 1;
            debug!(version = self.version, "Redo");
        }
        redone
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Select a block by id. Any id is accepted; an id with no block simply
    /// selects nothing visible.
    pub fn select(&mut self, block_id: Option<&str>) {
        self.selected_id = block_id.map(str::to_string);
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn selected_block(&self) -> Option<&Block> {
        self.selected_id.as_deref().and_then(|id| self.block(id))
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}
