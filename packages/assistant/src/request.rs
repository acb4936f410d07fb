use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use zenith_schema::{default_content, BlockType};

/// Style keys the generator may override
pub const STYLE_OVERRIDES: [&str; 5] = [
    "backgroundColor",
    "textColor",
    "gradient",
    "paddingTop",
    "paddingBottom",
];

/// One prompt to the content generator, with its fixed instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub prompt: String,
    pub system_instruction: String,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: system_instruction(),
        }
    }

    /// Whitespace-only prompts are never sent
    pub fn is_blank(&self) -> bool {
        self.prompt.trim().is_empty()
    }
}

/// Default content of every variant keyed by its type tag
pub fn default_content_catalog() -> Map<String, Value> {
    BlockType::ALL
        .iter()
        .filter_map(|block_type| {
            default_content(*block_type)
                .to_map()
                .ok()
                .map(|map| (block_type.as_str().to_string(), Value::Object(map)))
        })
        .collect()
}

fn system_instruction() -> String {
    let types = BlockType::ALL
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let catalog = Value::Object(default_content_catalog()).to_string();

    format!(
        "You are an expert web designer assistant for a block-based website builder.\n\
         The user will ask you to create a website section.\n\
         \n\
         You must select the most appropriate 'type' from this list: [{types}].\n\
         \n\
         You must return a JSON object with the following structure:\n\
         {{\n  \"type\": \"block_type_name\",\n  \"content\": {{ ...content_matching_default_structure_for_that_type... }},\n  \"styles\": {{ ...optional_style_overrides... }}\n}}\n\
         \n\
         Reference the following default content structures to ensure you use the correct keys for 'content':\n\
         {catalog}\n\
         \n\
         For 'styles', you can override {styles}.\n\
         If the user asks for \"dark mode\" or specific colors, apply them in 'styles'.\n\
         \n\
         Do NOT wrap the response in markdown blocks (like ```json). Return raw JSON only.",
        types = types,
        catalog = catalog,
        styles = STYLE_OVERRIDES
            .iter()
            .map(|key| format!("'{}'", key))
            .collect::<Vec<_>>()
            .join(", "),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_lists_every_type() {
        let request = GenerationRequest::new("A pricing table for a bakery");
        for block_type in BlockType::ALL {
            assert!(
                request.system_instruction.contains(block_type.as_str()),
                "instruction is missing {}",
                block_type
            );
        }
        assert!(request.system_instruction.contains("Return raw JSON only"));
    }

    #[test]
    fn test_instruction_embeds_default_content() {
        let request = GenerationRequest::new("hero");
        assert!(request.system_instruction.contains("\"logoText\":\"Zenith\""));
        assert!(request.system_instruction.contains("Simple Pricing"));
    }

    #[test]
    fn test_catalog_covers_all_variants() {
        let catalog = default_content_catalog();
        assert_eq!(catalog.len(), BlockType::ALL.len());
        assert_eq!(catalog["image-text"]["buttonText"], "Learn More");
    }

    #[test]
    fn test_blank_prompt() {
        assert!(GenerationRequest::new("   \n").is_blank());
        assert!(!GenerationRequest::new("a footer").is_blank());
    }
}
