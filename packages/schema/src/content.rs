//! Typed content payloads, one struct per block variant.
//!
//! Field names serialize in camelCase to match the wire shape of blocks and
//! of generator responses. List items default every missing field so a
//! partially-specified item is still renderable.

use serde::{Deserialize, Serialize};

/// Horizontal alignment shared by hero content and extra elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    #[default]
    Left,
    Center,
    Right,
}

impl Align {
    /// Text alignment utility class used by both renderers
    pub fn text_class(&self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Center => "text-center",
            Align::Right => "text-right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImagePosition {
    Left,
    #[default]
    Right,
}

/// Named icons a feature card can show. Unknown names fall back to `layout`.
pub const FEATURE_ICONS: [&str; 15] = [
    "layout", "zap", "smartphone", "shield", "globe", "barChart", "smile", "star", "send",
    "mail", "play", "check", "penTool", "layers", "cpu",
];

pub fn resolve_icon(name: &str) -> &'static str {
    FEATURE_ICONS
        .iter()
        .copied()
        .find(|icon| *icon == name)
        .unwrap_or("layout")
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub text: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderContent {
    pub logo_text: String,
    pub nav_links: Vec<Link>,
    pub button_text: String,
    pub button_url: String,
    pub show_theme_toggle: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub heading: String,
    pub subheading: String,
    pub button_text: String,
    pub button_url: String,
    pub show_button: bool,
    pub alignment: Align,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureItem {
    pub title: String,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeaturesContent {
    pub heading: String,
    pub items: Vec<FeatureItem>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestimonialsContent {
    pub heading: String,
    pub items: Vec<Testimonial>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoContent {
    pub heading: String,
    pub video_url: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtaContent {
    pub heading: String,
    pub subheading: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactContent {
    pub heading: String,
    pub subheading: String,
    pub button_text: String,
    pub email_placeholder: String,
    pub message_placeholder: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Plan {
    pub name: String,
    pub price: String,
    pub features: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingContent {
    pub heading: String,
    pub plans: Vec<Plan>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqContent {
    pub heading: String,
    pub items: Vec<FaqItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FooterContent {
    pub copyright: String,
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GalleryContent {
    pub heading: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Member {
    pub name: String,
    pub role: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamContent {
    pub heading: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub title: String,
    pub excerpt: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlogContent {
    pub heading: String,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterContent {
    pub heading: String,
    pub subheading: String,
    pub placeholder: String,
    pub button_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageTextContent {
    pub heading: String,
    pub text: String,
    pub image_src: String,
    pub image_position: ImagePosition,
    pub button_text: String,
}

/// A free-form node a user appends to any block after its template fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ExtraElement {
    Text {
        #[serde(default)]
        content: String,
        #[serde(default)]
        align: Align,
    },
    Button {
        #[serde(default)]
        text: String,
        #[serde(default = "default_url")]
        url: String,
        #[serde(default)]
        align: Align,
    },
}

fn default_url() -> String {
    "#".to_string()
}

/// Kind of extra element to append
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Button,
}

impl ExtraElement {
    /// The element a user gets from the "add text" / "add button" actions
    pub fn new(kind: ElementKind) -> Self {
        match kind {
            ElementKind::Text => ExtraElement::Text {
                content: "New Text Block".to_string(),
                align: Align::Center,
            },
            ElementKind::Button => ExtraElement::Button {
                text: "New Button".to_string(),
                url: default_url(),
                align: Align::Center,
            },
        }
    }

    pub fn align(&self) -> Align {
        match self {
            ExtraElement::Text { align, .. } | ExtraElement::Button { align, .. } => *align,
        }
    }

    pub fn set_align(&mut self, new_align: Align) {
        match self {
            ExtraElement::Text { align, .. } | ExtraElement::Button { align, .. } => {
                *align = new_align
            }
        }
    }

    /// Name of the field holding the visible text
    pub fn text_field(&self) -> &'static str {
        match self {
            ExtraElement::Text { .. } => "content",
            ExtraElement::Button { .. } => "text",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_wire_shape() {
        let el: ExtraElement =
            serde_json::from_str(r#"{ "type": "button", "text": "Buy", "align": "right" }"#).unwrap();
        assert_eq!(
            el,
            ExtraElement::Button {
                text: "Buy".to_string(),
                url: "#".to_string(),
                align: Align::Right,
            }
        );
        assert_eq!(el.text_field(), "text");
    }

    #[test]
    fn test_missing_align_defaults_to_left() {
        let el: ExtraElement = serde_json::from_str(r#"{ "type": "text", "content": "Hi" }"#).unwrap();
        assert_eq!(el.align(), Align::Left);
    }

    #[test]
    fn test_new_elements_are_centered() {
        assert_eq!(ExtraElement::new(ElementKind::Text).align(), Align::Center);
        assert_eq!(ExtraElement::new(ElementKind::Button).align(), Align::Center);
    }

    #[test]
    fn test_unknown_icon_falls_back() {
        assert_eq!(resolve_icon("zap"), "zap");
        assert_eq!(resolve_icon("rocket"), "layout");
    }
}
