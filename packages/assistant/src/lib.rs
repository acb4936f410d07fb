//! # Zenith Assistant
//!
//! Turns a natural-language prompt into a proposed block.
//!
//! The generator is an external collaborator behind [`ContentGenerator`].
//! Its raw response is parsed into a [`Candidate`]; turning the candidate
//! into a block (and inserting it) is the editor's job, so a failed or
//! malformed response never touches the document.

pub mod candidate;
pub mod error;
pub mod http;
pub mod request;

use async_trait::async_trait;

pub use candidate::Candidate;
pub use error::{GenerateError, GenerateResult};
pub use http::{GeneratorConfig, HttpGenerator};
pub use request::{default_content_catalog, GenerationRequest};

/// Produces the raw response text for a generation request
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> GenerateResult<String>;
}

/// Run one request and parse the response
pub async fn generate_candidate<G>(generator: &G, request: &GenerationRequest) -> GenerateResult<Candidate>
where
    G: ContentGenerator + ?Sized,
{
    if request.is_blank() {
        return Err(GenerateError::EmptyPrompt);
    }
    let text = generator.generate(request).await?;
    Candidate::parse(&text)
}
