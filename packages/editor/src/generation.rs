//! The "generate a block" prompt dialog.
//!
//! The dialog never holds the editor across the generator call. The host
//! asks [`PromptDialog::begin`] for a ticket and a request, awaits the
//! generator itself, then hands the result to [`PromptDialog::finish`]. The
//! page stays editable in between. A result whose ticket is no longer the
//! pending one (the dialog was closed, or a newer request was started) is
//! discarded.

use crate::editor::Editor;
use crate::errors::EditorError;
use tracing::{info, warn};
use zenith_assistant::{Candidate, GenerateError, GenerateResult, GenerationRequest};

pub const INVALID_RESPONSE_MESSAGE: &str = "AI response format was invalid. Please try again.";
pub const GENERATION_FAILED_MESSAGE: &str =
    "Failed to generate content. Please verify API key and try again.";

/// Identifies one in-flight request
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// The block was added with this id
    Accepted(String),
    /// Nothing was added; the message is meant for the user
    Failed(String),
    /// The result arrived for a request that is no longer pending
    Discarded,
}

#[derive(Debug, Default)]
pub struct PromptDialog {
    open: bool,
    prompt: String,
    last_ticket: Ticket,
    pending: Option<Ticket>,
}

impl PromptDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the dialog. A request still in flight will be discarded.
    pub fn close(&mut self) {
        self.open = false;
        self.pending = None;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn is_generating(&self) -> bool {
        self.pending.is_some()
    }

    /// Start a request for the current prompt. Returns `None` when the dialog
    /// is closed, the prompt is blank or a request is already running.
    pub fn begin(&mut self) -> Option<(Ticket, GenerationRequest)> {
        if !self.open || self.prompt.trim().is_empty() || self.is_generating() {
            return None;
        }
        self.last_ticket += 1;
        self.pending = Some(self.last_ticket);
        Some((self.last_ticket, GenerationRequest::new(self.prompt.clone())))
    }

    /// Apply the generator's response. On success the block is appended and
    /// selected, and the dialog closes with its prompt cleared. On failure the
    /// page is untouched and the dialog stays open with the prompt kept.
    pub fn finish(
        &mut self,
        ticket: Ticket,
        response: GenerateResult<String>,
        editor: &mut Editor,
    ) -> GenerationOutcome {
        if self.pending != Some(ticket) {
            info!(ticket, "Discarding stale generation result");
            return GenerationOutcome::Discarded;
        }
        self.pending = None;

        let accepted = response
            .and_then(|text| Candidate::parse(&text))
            .map_err(EditorError::from)
            .and_then(|candidate| editor.accept_candidate(candidate));

        match accepted {
            Ok(id) => {
                self.prompt.clear();
                self.open = false;
                GenerationOutcome::Accepted(id)
            }
            Err(e) => {
                warn!(error = %e, "Generation failed");
                GenerationOutcome::Failed(failure_message(&e).to_string())
            }
        }
    }
}

fn failure_message(error: &EditorError) -> &'static str {
    match error {
        EditorError::Generation(
            GenerateError::MalformedResponse(_) | GenerateError::UnknownBlockType(_),
        ) => INVALID_RESPONSE_MESSAGE,
        _ => GENERATION_FAILED_MESSAGE,
    }
}
