//! Generator seam tests with scripted in-process generators

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use zenith_assistant::{
    generate_candidate, ContentGenerator, GenerateError, GenerateResult, GenerationRequest,
};
use zenith_schema::{BlockContent, BlockType};

/// Returns a fixed response and counts calls
struct ScriptedGenerator {
    response: GenerateResult<String>,
    calls: AtomicUsize,
}

impl ScriptedGenerator {
    fn replying(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            calls: AtomicUsize::new(0),
        }
    }

    fn failing(error: GenerateError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ContentGenerator for ScriptedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> GenerateResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response.clone()
    }
}

#[tokio::test]
async fn test_generated_candidate_becomes_block() {
    let generator = ScriptedGenerator::replying(
        r##"{ "type": "pricing", "content": { "heading": "Bread plans" }, "styles": { "backgroundColor": "#111827", "textColor": "#f9fafb" } }"##,
    );

    let candidate = generate_candidate(&generator, &GenerationRequest::new("bakery pricing"))
        .await
        .unwrap();
    let block = candidate.into_block("gen-1").unwrap();

    assert_eq!(block.block_type(), Some(BlockType::Pricing));
    match &block.content {
        BlockContent::Pricing(pricing) => {
            assert_eq!(pricing.heading, "Bread plans");
            assert_eq!(pricing.plans.len(), 3);
        }
        other => panic!("Expected pricing content, got {:?}", other),
    }
    assert_eq!(block.styles.background_color, "#111827");
    assert_eq!(block.styles.padding_top, "0rem");
}

#[tokio::test]
async fn test_blank_prompt_is_not_sent() {
    let generator = ScriptedGenerator::replying(r#"{ "type": "cta" }"#);
    let result = generate_candidate(&generator, &GenerationRequest::new("  ")).await;

    assert_eq!(result, Err(GenerateError::EmptyPrompt));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_transport_failure_is_reported_once() {
    let generator = ScriptedGenerator::failing(GenerateError::Transport("offline".to_string()));
    let result = generate_candidate(&generator, &GenerationRequest::new("a hero")).await;

    assert_eq!(result, Err(GenerateError::Transport("offline".to_string())));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1, "no automatic retry");
}

#[tokio::test]
async fn test_malformed_response() {
    let generator = ScriptedGenerator::replying("Sure! Here is your block:");
    let result = generate_candidate(&generator, &GenerationRequest::new("a hero")).await;
    assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
}

#[tokio::test]
async fn test_generator_as_trait_object() {
    let generator: Box<dyn ContentGenerator> =
        Box::new(ScriptedGenerator::replying(r#"{ "type": "newsletter" }"#));
    let candidate = generate_candidate(generator.as_ref(), &GenerationRequest::new("newsletter"))
        .await
        .unwrap();
    assert_eq!(candidate.block_type(), Ok(BlockType::Newsletter));
}
