//! Parsing a generator response into a block candidate.

use crate::error::{GenerateError, GenerateResult};
use serde_json::{Map, Value};
use std::str::FromStr;
use tracing::debug;
use zenith_schema::{Block, BlockContent, BlockStyles, BlockType, StylePatch};

/// A proposed block: a type tag plus partial content and style overrides
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub type_name: String,
    pub content: Map<String, Value>,
    pub styles: Map<String, Value>,
}

impl Candidate {
    /// Parse the raw response text. A surrounding markdown fence is tolerated.
    pub fn parse(text: &str) -> GenerateResult<Self> {
        let body = strip_fence(text.trim());
        let value: Value = serde_json::from_str(body)
            .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

        let Value::Object(mut object) = value else {
            return Err(GenerateError::MalformedResponse(
                "expected a JSON object".to_string(),
            ));
        };

        let type_name = match object.remove("type") {
            Some(Value::String(name)) => name,
            Some(_) => {
                return Err(GenerateError::MalformedResponse(
                    "'type' must be a string".to_string(),
                ))
            }
            None => {
                return Err(GenerateError::MalformedResponse(
                    "missing 'type'".to_string(),
                ))
            }
        };

        Ok(Self {
            type_name,
            content: optional_object(&mut object, "content")?,
            styles: optional_object(&mut object, "styles")?,
        })
    }

    pub fn block_type(&self) -> GenerateResult<BlockType> {
        BlockType::from_str(&self.type_name)
            .map_err(|_| GenerateError::UnknownBlockType(self.type_name.clone()))
    }

    /// Build the block: content merged onto the variant default, styles onto
    /// the default styles. Extra elements in the content are kept.
    pub fn into_block(self, id: impl Into<String>) -> GenerateResult<Block> {
        let block_type = self.block_type()?;
        let mut content = self.content;

        let elements = match content.remove("elements") {
            None | Some(Value::Null) => Vec::new(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| GenerateError::MalformedResponse(format!("elements: {}", e)))?,
        };

        let content = BlockContent::from_partial(block_type, content)
            .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;
        let styles = StylePatch::from(self.styles)
            .apply_to(&BlockStyles::default())
            .map_err(|e| GenerateError::MalformedResponse(e.to_string()))?;

        debug!(block_type = %block_type, "Candidate accepted");
        Ok(Block {
            id: id.into(),
            content,
            elements,
            styles,
        })
    }
}

fn optional_object(object: &mut Map<String, Value>, key: &str) -> GenerateResult<Map<String, Value>> {
    match object.remove(key) {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(GenerateError::MalformedResponse(format!(
            "'{}' must be an object",
            key
        ))),
    }
}

fn strip_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_candidate() {
        let candidate = Candidate::parse(
            r##"{ "type": "cta", "content": { "heading": "Bake with us" }, "styles": { "backgroundColor": "#111827" } }"##,
        )
        .unwrap();

        assert_eq!(candidate.type_name, "cta");
        assert_eq!(candidate.content["heading"], "Bake with us");
        assert_eq!(candidate.styles["backgroundColor"], "#111827");
    }

    #[test]
    fn test_content_and_styles_are_optional() {
        let candidate = Candidate::parse(r#"{ "type": "faq" }"#).unwrap();
        assert!(candidate.content.is_empty());
        assert!(candidate.styles.is_empty());
    }

    #[test]
    fn test_fenced_response_is_tolerated() {
        let candidate = Candidate::parse("```json\n{ \"type\": \"hero\" }\n```").unwrap();
        assert_eq!(candidate.type_name, "hero");
    }

    #[test]
    fn test_malformed_responses() {
        for text in ["not json", "[1, 2]", r#"{ "content": {} }"#, r#"{ "type": 3 }"#, r#"{ "type": "cta", "content": "x" }"#] {
            assert!(
                matches!(Candidate::parse(text), Err(GenerateError::MalformedResponse(_))),
                "{} should be malformed",
                text
            );
        }
    }

    #[test]
    fn test_into_block_merges_onto_defaults() {
        let block = Candidate::parse(
            r##"{ "type": "cta", "content": { "heading": "Bake with us", "mood": "warm" }, "styles": { "textColor": "#f9fafb" } }"##,
        )
        .unwrap()
        .into_block("b1")
        .unwrap();

        match &block.content {
            BlockContent::Cta(cta) => {
                assert_eq!(cta.heading, "Bake with us");
                assert_eq!(cta.button_text, "Start Free Trial");
            }
            other => panic!("Expected cta content, got {:?}", other),
        }
        assert_eq!(block.styles.text_color, "#f9fafb");
        assert_eq!(block.styles.background_color, "#ffffff");
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let result = Candidate::parse(r#"{ "type": "carousel" }"#)
            .unwrap()
            .into_block("b1");
        assert_eq!(result, Err(GenerateError::UnknownBlockType("carousel".to_string())));
    }

    #[test]
    fn test_mistyped_content_is_malformed() {
        let result = Candidate::parse(r#"{ "type": "hero", "content": { "showButton": "yes" } }"#)
            .unwrap()
            .into_block("b1");
        assert!(matches!(result, Err(GenerateError::MalformedResponse(_))));
    }
}
