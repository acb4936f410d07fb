//! # Zenith Editor
//!
//! Page editing engine: the ordered block list, selection and undo history.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ schema: Block, patches, field paths         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: page state + mutations              │
//! │  - Apply mutations atomically               │
//! │  - One history entry per mutation           │
//! │  - Drag/drop, inline edit, prompt dialog    │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ evaluator / compiler-html: page → markup    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use zenith_editor::{Editor, Mutation};
//! use zenith_schema::{BlockType, ContentPatch};
//!
//! let mut editor = Editor::new();
//! let id = editor.insert(BlockType::Pricing, None)?;
//! editor.update_content(&id, ContentPatch::new().set("heading", "Plans"))?;
//! editor.undo();
//! ```

mod drag;
mod editor;
mod errors;
mod generation;
mod inline_edit;
mod mutations;
mod undo_stack;

pub use drag::{resolve_drop, DragPayload, DropAction, DropTarget, BLOCK_TYPE_KEY, DRAG_INDEX_KEY};
pub use editor::Editor;
pub use errors::{EditorError, MutationError};
pub use generation::{
    GenerationOutcome, PromptDialog, Ticket, GENERATION_FAILED_MESSAGE, INVALID_RESPONSE_MESSAGE,
};
pub use inline_edit::{EditCommit, EditKey, InlineEditor};
pub use mutations::{Mutation, MutationOutcome, MutationResult};
pub use undo_stack::{Snapshot, UndoStack};
