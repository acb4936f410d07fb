//! # Style resolution
//!
//! Turns a block's [`BlockStyles`] into one ordered list of CSS properties.
//! The list has two serializations: an inline `style` attribute for export
//! and clipboard markup, and a camelCase style object for the interactive
//! canvas. Both come from the same [`ResolvedStyle`], so the two renderers
//! can never disagree on presentation.
//!
//! Background precedence is `gradient` > `backgroundImage` > color; exactly
//! one background layer property is emitted.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use zenith_schema::BlockStyles;

/// Ordered CSS property map for one block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ResolvedStyle {
    properties: Vec<(String, String)>,
}

impl ResolvedStyle {
    fn push(&mut self, property: &str, value: impl Into<String>) {
        self.properties.push((property.to_string(), value.into()));
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// `prop: value; prop: value` for a `style` attribute
    pub fn to_inline(&self) -> String {
        self.properties
            .iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Style object with camelCase keys, for a live DOM style binding
    pub fn to_style_object(&self) -> Map<String, Value> {
        self.properties
            .iter()
            .map(|(name, value)| (camel_case(name), Value::String(value.clone())))
            .collect()
    }
}

/// Resolve a style payload into its presentation properties
pub fn resolve(styles: &BlockStyles) -> ResolvedStyle {
    let mut resolved = ResolvedStyle::default();

    resolved.push("padding-top", styles.padding_top.as_str());
    resolved.push("padding-bottom", styles.padding_bottom.as_str());
    resolved.push("margin-top", styles.margin_top.as_str());
    resolved.push("margin-bottom", styles.margin_bottom.as_str());

    if let Some(gradient) = &styles.gradient {
        resolved.push("background", gradient.as_str());
    } else if let Some(image) = &styles.background_image {
        resolved.push("background-image", format!("url({})", image));
    } else {
        resolved.push("background-color", color_layer(styles));
    }

    resolved.push("color", styles.text_color.as_str());

    if let Some(size) = styles.background_size {
        resolved.push("background-size", size.as_css());
    }
    if let Some(repeat) = styles.background_repeat {
        resolved.push("background-repeat", repeat.as_css());
    }
    if let Some(position) = styles.background_position {
        resolved.push("background-position", position.as_css());
    }

    resolved
}

/// Background color with opacity applied when the color is a hex literal;
/// any other color string passes through undimmed
pub fn color_layer(styles: &BlockStyles) -> String {
    match parse_hex(&styles.background_color) {
        Some((r, g, b)) => {
            let alpha = styles.background_opacity.clamp(0.0, 1.0);
            format!("rgba({},{},{},{})", r, g, b, alpha)
        }
        None => {
            debug!(color = %styles.background_color, "Background color is not hex, opacity ignored");
            styles.background_color.clone()
        }
    }
}

/// Parse a strict `#rrggbb` or `#rgb` literal
pub fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

fn camel_case(property: &str) -> String {
    let mut out = String::with_capacity(property.len());
    let mut upper = false;
    for c in property.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenith_schema::{BackgroundSize, StylePatch};

    #[test]
    fn test_hex_with_opacity() {
        let styles = BlockStyles {
            background_color: "#3366ff".to_string(),
            background_opacity: 0.5,
            ..Default::default()
        };
        let resolved = resolve(&styles);
        assert_eq!(resolved.get("background-color"), Some("rgba(51,102,255,0.5)"));
    }

    #[test]
    fn test_short_hex_expands() {
        assert_eq!(parse_hex("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex("#1a202c"), Some((26, 32, 44)));
        assert_eq!(parse_hex("1a202c"), None);
        assert_eq!(parse_hex("#12345"), None);
        assert_eq!(parse_hex("#gg0000"), None);
    }

    #[test]
    fn test_non_hex_passes_through_undimmed() {
        let styles = BlockStyles {
            background_color: "rebeccapurple".to_string(),
            background_opacity: 0.2,
            ..Default::default()
        };
        assert_eq!(resolve(&styles).get("background-color"), Some("rebeccapurple"));
    }

    #[test]
    fn test_gradient_overrides_color_and_image() {
        let styles = BlockStyles {
            background_color: "#3366ff".to_string(),
            background_opacity: 0.5,
            background_image: Some("https://example.com/bg.png".to_string()),
            gradient: Some("linear-gradient(135deg, #fff 0%, #000 100%)".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&styles);

        assert_eq!(
            resolved.get("background"),
            Some("linear-gradient(135deg, #fff 0%, #000 100%)")
        );
        assert_eq!(resolved.get("background-color"), None);
        assert_eq!(resolved.get("background-image"), None);
    }

    #[test]
    fn test_image_overrides_color() {
        let styles = BlockStyles {
            background_image: Some("https://example.com/bg.png".to_string()),
            ..Default::default()
        };
        let resolved = resolve(&styles);
        assert_eq!(
            resolved.get("background-image"),
            Some("url(https://example.com/bg.png)")
        );
        assert_eq!(resolved.get("background-color"), None);
    }

    #[test]
    fn test_default_inline_string() {
        let inline = resolve(&BlockStyles::default()).to_inline();
        assert_eq!(
            inline,
            "padding-top: 0rem; padding-bottom: 0rem; margin-top: 0rem; margin-bottom: 0rem; \
             background-color: rgba(255,255,255,1); color: #1a202c; background-size: cover; \
             background-repeat: no-repeat; background-position: center"
        );
    }

    #[test]
    fn test_style_object_matches_inline_properties() {
        let styles = StylePatch::new()
            .padding_top("4rem")
            .background_size(Some(BackgroundSize::Contain))
            .apply_to(&BlockStyles::default())
            .unwrap();
        let resolved = resolve(&styles);
        let object = resolved.to_style_object();

        assert_eq!(object.len(), resolved.len());
        assert_eq!(object["paddingTop"], "4rem");
        assert_eq!(object["backgroundSize"], "contain");
        assert_eq!(object["backgroundColor"], "rgba(255,255,255,1)");
    }

    #[test]
    fn test_opacity_is_clamped() {
        let styles = BlockStyles {
            background_color: "#000000".to_string(),
            background_opacity: 3.0,
            ..Default::default()
        };
        assert_eq!(resolve(&styles).get("background-color"), Some("rgba(0,0,0,1)"));
    }
}
