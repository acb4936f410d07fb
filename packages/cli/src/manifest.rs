//! Page manifests: the JSON form of a page handed to the CLI.
//!
//! Either a bare array of blocks or an object with a `blocks` key.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use zenith_schema::Block;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ManifestFile {
    Blocks(Vec<Block>),
    Page { blocks: Vec<Block> },
}

/// Written form, always the object shape
#[derive(Debug, Serialize)]
pub struct Manifest<'a> {
    pub blocks: &'a [Block],
}

pub fn parse_manifest(source: &str) -> Result<Vec<Block>> {
    let file: ManifestFile = serde_json::from_str(source)?;
    Ok(match file {
        ManifestFile::Blocks(blocks) | ManifestFile::Page { blocks } => blocks,
    })
}

pub fn load_manifest(path: &Path) -> Result<Vec<Block>> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Cannot read manifest {}", path.display()))?;
    parse_manifest(&source).with_context(|| format!("Invalid manifest {}", path.display()))
}

pub fn to_manifest_json(blocks: &[Block]) -> Result<String> {
    Ok(serde_json::to_string_pretty(&Manifest { blocks })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenith_schema::BlockType;

    #[test]
    fn test_parse_array_manifest() {
        let blocks = parse_manifest(
            r#"[{ "id": "a", "type": "hero", "content": { "heading": "Hi" } }, { "id": "b", "type": "footer" }]"#,
        )
        .unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].block_type(), Some(BlockType::Hero));
        assert_eq!(blocks[1].id, "b");
    }

    #[test]
    fn test_parse_object_manifest() {
        let blocks = parse_manifest(r#"{ "blocks": [{ "id": "a", "type": "faq" }] }"#).unwrap();
        assert_eq!(blocks[0].block_type(), Some(BlockType::Faq));
    }

    #[test]
    fn test_unknown_types_are_kept() {
        let blocks = parse_manifest(r#"[{ "id": "a", "type": "carousel", "content": { "x": 1 } }]"#).unwrap();
        assert_eq!(blocks[0].type_name(), "carousel");
        assert_eq!(blocks[0].block_type(), None);
    }

    #[test]
    fn test_manifest_round_trip() {
        let blocks = vec![Block::new("a", BlockType::Pricing), Block::new("b", BlockType::Team)];
        let json = to_manifest_json(&blocks).unwrap();
        assert_eq!(parse_manifest(&json).unwrap(), blocks);
    }

    #[test]
    fn test_invalid_manifest() {
        assert!(parse_manifest(r#"{ "pages": [] }"#).is_err());
        assert!(parse_manifest("not json").is_err());
    }
}
