//! In-place text editing on the canvas.
//!
//! Focusing a bound node opens an edit session holding a draft. While the
//! session is open the draft is what the node shows, whatever the page
//! content says; refreshes from elsewhere wait until the edit ends. Blur (or
//! Enter without shift) closes the session and yields an [`EditCommit`],
//! which becomes a single content update.

use crate::editor::Editor;
use crate::errors::MutationError;
use crate::mutations::MutationResult;
use tracing::debug;
use zenith_schema::{Block, FieldPath};

/// Key presses the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Enter { shift: bool },
    Escape,
    Other,
}

/// A finished edit, ready to apply
#[derive(Debug, Clone, PartialEq)]
pub struct EditCommit {
    pub block_id: String,
    pub path: FieldPath,
    pub text: String,
}

impl EditCommit {
    /// Write the text back through one content update
    pub fn apply(&self, editor: &mut Editor) -> MutationResult {
        let block = editor
            .block(&self.block_id)
            .ok_or_else(|| MutationError::BlockNotFound(self.block_id.clone()))?;
        let patch = self.path.to_patch(block, &self.text)?;
        editor.update_content(&self.block_id, patch)
    }
}

#[derive(Debug, Clone)]
struct EditSession {
    block_id: String,
    path: FieldPath,
    original: String,
    draft: String,
}

#[derive(Debug, Default)]
pub struct InlineEditor {
    session: Option<EditSession>,
}

impl InlineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start editing `path` of `block`. An edit already in progress elsewhere
    /// is committed first and returned.
    pub fn focus(&mut self, block: &Block, path: FieldPath) -> Option<EditCommit> {
        if self.is_editing_field(&block.id, &path) {
            return None;
        }
        let pending = self.blur();
        let text = path.read(block).unwrap_or_default();
        debug!(block_id = %block.id, field = %path, "Edit started");
        self.session = Some(EditSession {
            block_id: block.id.clone(),
            path,
            original: text.clone(),
            draft: text,
        });
        pending
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_editing_field(&self, block_id: &str, path: &FieldPath) -> bool {
        self.session
            .as_ref()
            .is_some_and(|s| s.block_id == block_id && &s.path == path)
    }

    /// Replace the draft with the node's current text
    pub fn input(&mut self, text: impl Into<String>) {
        if let Some(session) = &mut self.session {
            session.draft = text.into();
        }
    }

    pub fn draft(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.draft.as_str())
    }

    /// Text to show for `path` of `block`: the draft while that field is
    /// being edited, the stored content otherwise.
    pub fn display_text(&self, block: &Block, path: &FieldPath) -> String {
        match &self.session {
            Some(session) if session.block_id == block.id && &session.path == path => {
                session.draft.clone()
            }
            _ => path.read(block).unwrap_or_default(),
        }
    }

    /// Handle a key press. Enter without shift ends the edit; shift+Enter
    /// inserts a line break; Escape drops the draft.
    pub fn key(&mut self, key: EditKey) -> Option<EditCommit> {
        match key {
            EditKey::Enter { shift: false } => self.blur(),
            EditKey::Enter { shift: true } => {
                if let Some(session) = &mut self.session {
                    session.draft.push('\n');
                }
                None
            }
            EditKey::Escape => {
                self.cancel();
                None
            }
            EditKey::Other => None,
        }
    }

    /// End the edit. Yields a commit when the draft differs from the text
    /// the edit started with.
    pub fn blur(&mut self) -> Option<EditCommit> {
        let session = self.session.take()?;
        if session.draft == session.original {
            debug!(block_id = %session.block_id, "Edit ended without changes");
            return None;
        }
        Some(EditCommit {
            block_id: session.block_id,
            path: session.path,
            text: session.draft,
        })
    }

    pub fn cancel(&mut self) {
        self.session = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenith_schema::{BlockType, ContentPatch};

    #[test]
    fn test_blur_yields_commit() {
        let block = Block::new("b1", BlockType::Cta);
        let mut inline = InlineEditor::new();

        inline.focus(&block, FieldPath::field("heading"));
        inline.input("Join the bakery club");

        let commit = inline.blur().unwrap();
        assert_eq!(commit.block_id, "b1");
        assert_eq!(commit.path, FieldPath::field("heading"));
        assert_eq!(commit.text, "Join the bakery club");
        assert!(!inline.is_editing());
    }

    #[test]
    fn test_unchanged_edit_commits_nothing() {
        let block = Block::new("b1", BlockType::Cta);
        let mut inline = InlineEditor::new();
        inline.focus(&block, FieldPath::field("heading"));
        assert_eq!(inline.blur(), None);
    }

    #[test]
    fn test_draft_survives_external_refresh() {
        let mut block = Block::new("b1", BlockType::Hero);
        let path = FieldPath::field("heading");
        let mut inline = InlineEditor::new();

        inline.focus(&block, path.clone());
        inline.input("Typing...");

        block
            .apply_content_patch(&ContentPatch::new().set("heading", "Changed elsewhere"))
            .unwrap();
        assert_eq!(inline.display_text(&block, &path), "Typing...");
        assert_eq!(
            inline.display_text(&block, &FieldPath::field("subheading")),
            "A powerful builder for modern websites. Drag, drop, and deploy in minutes."
        );

        inline.cancel();
        assert_eq!(inline.display_text(&block, &path), "Changed elsewhere");
    }

    #[test]
    fn test_enter_keys() {
        let block = Block::new("b1", BlockType::Faq);
        let mut inline = InlineEditor::new();
        inline.focus(&block, FieldPath::item("items", 0, "answer"));
        inline.input("Line one");

        assert_eq!(inline.key(EditKey::Enter { shift: true }), None);
        assert_eq!(inline.draft(), Some("Line one\n"));

        let commit = inline.key(EditKey::Enter { shift: false }).unwrap();
        assert_eq!(commit.text, "Line one\n");
    }

    #[test]
    fn test_escape_discards_draft() {
        let block = Block::new("b1", BlockType::Faq);
        let mut inline = InlineEditor::new();
        inline.focus(&block, FieldPath::field("heading"));
        inline.input("Nope");
        assert_eq!(inline.key(EditKey::Escape), None);
        assert!(!inline.is_editing());
    }

    #[test]
    fn test_focus_elsewhere_commits_pending_edit() {
        let block = Block::new("b1", BlockType::Newsletter);
        let mut inline = InlineEditor::new();
        inline.focus(&block, FieldPath::field("heading"));
        inline.input("Stay in the loop");

        let pending = inline.focus(&block, FieldPath::field("subheading")).unwrap();
        assert_eq!(pending.text, "Stay in the loop");
        assert!(inline.is_editing_field("b1", &FieldPath::field("subheading")));
    }
}
