//! # Blocks
//!
//! A [`Block`] is one page section: an opaque id, a typed content payload,
//! the user's extra elements and a style payload.
//!
//! ## Wire shape
//!
//! ```json
//! { "id": "…", "type": "hero", "styles": { … }, "content": { "heading": "…", "elements": [ … ] } }
//! ```
//!
//! Content arriving over the wire is always merged onto the variant's
//! default content before it is parsed, so every field a renderer reads is
//! present. A `type` outside the known set is preserved as
//! [`BlockContent::Unknown`] rather than rejected; renderers degrade on it.

use crate::block_type::BlockType;
use crate::content::*;
use crate::defaults::default_content;
use crate::error::{SchemaError, SchemaResult};
use crate::patch::{ContentPatch, StylePatch};
use crate::styles::BlockStyles;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};
use std::str::FromStr;

/// Content payload, one typed struct per variant
#[derive(Debug, Clone, PartialEq)]
pub enum BlockContent {
    Header(HeaderContent),
    Hero(HeroContent),
    Features(FeaturesContent),
    Testimonials(TestimonialsContent),
    Video(VideoContent),
    Cta(CtaContent),
    Contact(ContactContent),
    Pricing(PricingContent),
    Faq(FaqContent),
    Footer(FooterContent),
    Gallery(GalleryContent),
    Team(TeamContent),
    Blog(BlogContent),
    Newsletter(NewsletterContent),
    ImageText(ImageTextContent),
    /// A block whose type tag is not one of the known variants
    Unknown { type_name: String, raw: Map<String, Value> },
}

impl BlockContent {
    pub fn block_type(&self) -> Option<BlockType> {
        let block_type = match self {
            BlockContent::Header(_) => BlockType::Header,
            BlockContent::Hero(_) => BlockType::Hero,
            BlockContent::Features(_) => BlockType::Features,
            BlockContent::Testimonials(_) => BlockType::Testimonials,
            BlockContent::Video(_) => BlockType::Video,
            BlockContent::Cta(_) => BlockType::Cta,
            BlockContent::Contact(_) => BlockType::Contact,
            BlockContent::Pricing(_) => BlockType::Pricing,
            BlockContent::Faq(_) => BlockType::Faq,
            BlockContent::Footer(_) => BlockType::Footer,
            BlockContent::Gallery(_) => BlockType::Gallery,
            BlockContent::Team(_) => BlockType::Team,
            BlockContent::Blog(_) => BlockType::Blog,
            BlockContent::Newsletter(_) => BlockType::Newsletter,
            BlockContent::ImageText(_) => BlockType::ImageText,
            BlockContent::Unknown { .. } => return None,
        };
        Some(block_type)
    }

    /// Wire tag of this content, including unknown tags verbatim
    pub fn type_name(&self) -> &str {
        match self {
            BlockContent::Unknown { type_name, .. } => type_name,
            known => known.block_type().map(|t| t.as_str()).unwrap_or_default(),
        }
    }

    /// Serialize the typed payload into its field map
    pub fn to_map(&self) -> SchemaResult<Map<String, Value>> {
        let value = match self {
            BlockContent::Header(c) => serde_json::to_value(c),
            BlockContent::Hero(c) => serde_json::to_value(c),
            BlockContent::Features(c) => serde_json::to_value(c),
            BlockContent::Testimonials(c) => serde_json::to_value(c),
            BlockContent::Video(c) => serde_json::to_value(c),
            BlockContent::Cta(c) => serde_json::to_value(c),
            BlockContent::Contact(c) => serde_json::to_value(c),
            BlockContent::Pricing(c) => serde_json::to_value(c),
            BlockContent::Faq(c) => serde_json::to_value(c),
            BlockContent::Footer(c) => serde_json::to_value(c),
            BlockContent::Gallery(c) => serde_json::to_value(c),
            BlockContent::Team(c) => serde_json::to_value(c),
            BlockContent::Blog(c) => serde_json::to_value(c),
            BlockContent::Newsletter(c) => serde_json::to_value(c),
            BlockContent::ImageText(c) => serde_json::to_value(c),
            BlockContent::Unknown { raw, .. } => return Ok(raw.clone()),
        }
        .map_err(|e| SchemaError::content(self.type_name(), e))?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(SchemaError::content(
                self.type_name(),
                format!("expected an object, got {}", other),
            )),
        }
    }

    /// Parse a complete field map as the given variant
    pub fn from_map(block_type: BlockType, map: Map<String, Value>) -> SchemaResult<Self> {
        let value = Value::Object(map);
        let tag = block_type.as_str();
        let content = match block_type {
            BlockType::Header => serde_json::from_value(value).map(BlockContent::Header),
            BlockType::Hero => serde_json::from_value(value).map(BlockContent::Hero),
            BlockType::Features => serde_json::from_value(value).map(BlockContent::Features),
            BlockType::Testimonials => {
                serde_json::from_value(value).map(BlockContent::Testimonials)
            }
            BlockType::Video => serde_json::from_value(value).map(BlockContent::Video),
            BlockType::Cta => serde_json::from_value(value).map(BlockContent::Cta),
            BlockType::Contact => serde_json::from_value(value).map(BlockContent::Contact),
            BlockType::Pricing => serde_json::from_value(value).map(BlockContent::Pricing),
            BlockType::Faq => serde_json::from_value(value).map(BlockContent::Faq),
            BlockType::Footer => serde_json::from_value(value).map(BlockContent::Footer),
            BlockType::Gallery => serde_json::from_value(value).map(BlockContent::Gallery),
            BlockType::Team => serde_json::from_value(value).map(BlockContent::Team),
            BlockType::Blog => serde_json::from_value(value).map(BlockContent::Blog),
            BlockType::Newsletter => serde_json::from_value(value).map(BlockContent::Newsletter),
            BlockType::ImageText => serde_json::from_value(value).map(BlockContent::ImageText),
        };
        content.map_err(|e| SchemaError::content(tag, e))
    }

    /// Shallow-merge `overrides` onto the variant's default content, then parse.
    ///
    /// This is the only way untrusted content (generator output, manifests)
    /// becomes a typed payload.
    pub fn from_partial(block_type: BlockType, overrides: Map<String, Value>) -> SchemaResult<Self> {
        let mut map = default_content(block_type).to_map()?;
        for (key, value) in overrides {
            map.insert(key, value);
        }
        Self::from_map(block_type, map)
    }
}

/// One page section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "RawBlock")]
pub struct Block {
    pub id: String,
    pub content: BlockContent,
    pub elements: Vec<ExtraElement>,
    pub styles: BlockStyles,
}

impl Block {
    /// New block with a deep copy of the variant's default content and default styles
    pub fn new(id: impl Into<String>, block_type: BlockType) -> Self {
        Self {
            id: id.into(),
            content: default_content(block_type),
            elements: Vec::new(),
            styles: BlockStyles::default(),
        }
    }

    pub fn block_type(&self) -> Option<BlockType> {
        self.content.block_type()
    }

    pub fn type_name(&self) -> &str {
        self.content.type_name()
    }

    /// Full content map as it appears on the wire, `elements` included when present
    pub fn content_map(&self) -> SchemaResult<Map<String, Value>> {
        let mut map = self.content.to_map()?;
        if !self.elements.is_empty() {
            let elements = serde_json::to_value(&self.elements)
                .map_err(|e| SchemaError::content(self.type_name(), e))?;
            map.insert("elements".to_string(), elements);
        }
        Ok(map)
    }

    /// Shallow, one-level merge of `patch` onto the content.
    ///
    /// Keys in the patch replace the existing values wholesale (arrays are not
    /// merged element-wise). A known variant rejects keys outside its field
    /// set. On error the block is left untouched.
    pub fn apply_content_patch(&mut self, patch: &ContentPatch) -> SchemaResult<()> {
        let mut map = self.content.to_map()?;
        let mut elements = None;
        let known = self.block_type().is_some();

        for (key, value) in patch.iter() {
            if known && key != "elements" && !map.contains_key(key) {
                return Err(SchemaError::FieldNotFound(format!(
                    "{}.{}",
                    self.type_name(),
                    key
                )));
            }
            if key == "elements" {
                let parsed: Vec<ExtraElement> = match value {
                    Value::Null => Vec::new(),
                    other => serde_json::from_value(other.clone())
                        .map_err(|e| SchemaError::content(self.type_name(), e))?,
                };
                elements = Some(parsed);
            } else {
                map.insert(key.clone(), value.clone());
            }
        }

        let content = match &self.content {
            BlockContent::Unknown { type_name, .. } => BlockContent::Unknown {
                type_name: type_name.clone(),
                raw: map,
            },
            known => match known.block_type() {
                Some(block_type) => BlockContent::from_map(block_type, map)?,
                None => known.clone(),
            },
        };

        self.content = content;
        if let Some(elements) = elements {
            self.elements = elements;
        }
        Ok(())
    }

    /// Shallow merge of `patch` onto the styles. On error the block is left untouched.
    pub fn apply_style_patch(&mut self, patch: &StylePatch) -> SchemaResult<()> {
        self.styles = patch.apply_to(&self.styles)?;
        Ok(())
    }

    fn to_raw(&self) -> SchemaResult<RawBlock> {
        Ok(RawBlock {
            id: self.id.clone(),
            block_type: self.type_name().to_string(),
            styles: self.styles.clone(),
            content: self.content_map()?,
        })
    }
}

/// Wire representation of a block
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawBlock {
    id: String,
    #[serde(rename = "type")]
    block_type: String,
    #[serde(default)]
    styles: BlockStyles,
    #[serde(default)]
    content: Map<String, Value>,
}

impl TryFrom<RawBlock> for Block {
    type Error = SchemaError;

    fn try_from(raw: RawBlock) -> Result<Self, Self::Error> {
        let mut content = raw.content;

        let elements = match content.remove("elements") {
            Some(Value::Null) | None => Vec::new(),
            Some(value) => serde_json::from_value(value)
                .map_err(|e| SchemaError::content(&raw.block_type, e))?,
        };

        let content = match BlockType::from_str(&raw.block_type) {
            Ok(block_type) => BlockContent::from_partial(block_type, content)?,
            Err(_) => BlockContent::Unknown {
                type_name: raw.block_type,
                raw: content,
            },
        };

        Ok(Block {
            id: raw.id,
            content,
            elements,
            styles: raw.styles,
        })
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_raw()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}
