use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The closed set of block variants a page can be assembled from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockType {
    Header,
    Hero,
    Features,
    Testimonials,
    Video,
    Cta,
    Contact,
    Pricing,
    Faq,
    Footer,
    Gallery,
    Team,
    Blog,
    Newsletter,
    ImageText,
}

impl BlockType {
    /// All variants, in palette order
    pub const ALL: [BlockType; 15] = [
        BlockType::Header,
        BlockType::Hero,
        BlockType::Features,
        BlockType::Testimonials,
        BlockType::Video,
        BlockType::Cta,
        BlockType::Contact,
        BlockType::Pricing,
        BlockType::Faq,
        BlockType::Footer,
        BlockType::Gallery,
        BlockType::Team,
        BlockType::Blog,
        BlockType::Newsletter,
        BlockType::ImageText,
    ];

    /// Wire tag, also used as the drag-transfer payload
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Header => "header",
            BlockType::Hero => "hero",
            BlockType::Features => "features",
            BlockType::Testimonials => "testimonials",
            BlockType::Video => "video",
            BlockType::Cta => "cta",
            BlockType::Contact => "contact",
            BlockType::Pricing => "pricing",
            BlockType::Faq => "faq",
            BlockType::Footer => "footer",
            BlockType::Gallery => "gallery",
            BlockType::Team => "team",
            BlockType::Blog => "blog",
            BlockType::Newsletter => "newsletter",
            BlockType::ImageText => "image-text",
        }
    }

    /// Human-readable palette label
    pub fn label(&self) -> &'static str {
        match self {
            BlockType::Header => "Navigation Bar",
            BlockType::Hero => "Hero Section",
            BlockType::Features => "Features Grid",
            BlockType::Testimonials => "Testimonials",
            BlockType::Video => "Video Embed",
            BlockType::Cta => "Call to Action",
            BlockType::Contact => "Contact Form",
            BlockType::Pricing => "Pricing Table",
            BlockType::Faq => "FAQ Section",
            BlockType::Footer => "Footer",
            BlockType::Gallery => "Image Gallery",
            BlockType::Team => "Team Members",
            BlockType::Blog => "Blog Article",
            BlockType::Newsletter => "Newsletter",
            BlockType::ImageText => "Image & Text",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| SchemaError::UnknownBlockType(s.to_string()))
    }
}
