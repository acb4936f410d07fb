//! Style payload of a block and the presentation presets offered by the
//! properties panel.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BackgroundRepeat {
    NoRepeat,
    Repeat,
    RepeatX,
    RepeatY,
}

impl BackgroundRepeat {
    pub fn as_css(&self) -> &'static str {
        match self {
            BackgroundRepeat::NoRepeat => "no-repeat",
            BackgroundRepeat::Repeat => "repeat",
            BackgroundRepeat::RepeatX => "repeat-x",
            BackgroundRepeat::RepeatY => "repeat-y",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundSize {
    Cover,
    Contain,
    Auto,
}

impl BackgroundSize {
    pub fn as_css(&self) -> &'static str {
        match self {
            BackgroundSize::Cover => "cover",
            BackgroundSize::Contain => "contain",
            BackgroundSize::Auto => "auto",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundPosition {
    Center,
    Top,
    Bottom,
    Left,
    Right,
}

impl BackgroundPosition {
    pub fn as_css(&self) -> &'static str {
        match self {
            BackgroundPosition::Center => "center",
            BackgroundPosition::Top => "top",
            BackgroundPosition::Bottom => "bottom",
            BackgroundPosition::Left => "left",
            BackgroundPosition::Right => "right",
        }
    }
}

/// Presentational data of a block.
///
/// Missing keys fall back to [`BlockStyles::default`] on deserialization, so a
/// partial style object from a manifest or a generator is always complete.
/// Optional keys serialize as `null` rather than being skipped: a cleared
/// gradient must stay cleared when the payload is merged and re-read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockStyles {
    pub padding_top: String,
    pub padding_bottom: String,
    pub margin_top: String,
    pub margin_bottom: String,
    pub background_color: String,
    pub background_image: Option<String>,
    pub background_repeat: Option<BackgroundRepeat>,
    pub background_size: Option<BackgroundSize>,
    pub background_position: Option<BackgroundPosition>,
    pub background_opacity: f64,
    pub text_color: String,
    pub gradient: Option<String>,
}

impl Default for BlockStyles {
    fn default() -> Self {
        Self {
            padding_top: "0rem".to_string(),
            padding_bottom: "0rem".to_string(),
            margin_top: "0rem".to_string(),
            margin_bottom: "0rem".to_string(),
            background_color: "#ffffff".to_string(),
            background_image: None,
            background_repeat: Some(BackgroundRepeat::NoRepeat),
            background_size: Some(BackgroundSize::Cover),
            background_position: Some(BackgroundPosition::Center),
            background_opacity: 1.0,
            text_color: "#1a202c".to_string(),
            gradient: None,
        }
    }
}

/// A named background/text color pairing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

pub const PALETTES: [Palette; 6] = [
    Palette { name: "Clean", background: "#ffffff", text: "#1a202c" },
    Palette { name: "Dark", background: "#111827", text: "#f9fafb" },
    Palette { name: "Ocean", background: "#eff6ff", text: "#1e3a8a" },
    Palette { name: "Rose", background: "#fff1f2", text: "#881337" },
    Palette { name: "Slate", background: "#f8fafc", text: "#334155" },
    Palette { name: "Teal", background: "#f0fdfa", text: "#134e4a" },
];

impl Palette {
    /// Case-insensitive lookup by palette name
    pub fn find(name: &str) -> Option<Palette> {
        PALETTES
            .iter()
            .copied()
            .find(|p| p.name.eq_ignore_ascii_case(name))
    }
}

/// Gradient offered when the gradient toggle is switched on for a block
/// with the given background color.
pub fn gradient_for(background_color: &str) -> String {
    match background_color {
        "#ffffff" => "linear-gradient(135deg, #ffffff 0%, #f3f4f6 100%)".to_string(),
        "#111827" => "linear-gradient(135deg, #111827 0%, #1f2937 100%)".to_string(),
        other => format!(
            "linear-gradient(135deg, {} 0%, rgba(255,255,255,0) 100%)",
            other
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_styles_fill_from_defaults() {
        let styles: BlockStyles =
            serde_json::from_str(r##"{ "backgroundColor": "#111827", "textColor": "#f9fafb" }"##)
                .unwrap();

        assert_eq!(styles.background_color, "#111827");
        assert_eq!(styles.padding_top, "0rem");
        assert_eq!(styles.background_opacity, 1.0);
        assert_eq!(styles.background_size, Some(BackgroundSize::Cover));
    }

    #[test]
    fn test_cleared_optional_survives_round_trip() {
        let styles = BlockStyles {
            background_repeat: None,
            ..Default::default()
        };
        let json = serde_json::to_value(&styles).unwrap();
        let back: BlockStyles = serde_json::from_value(json).unwrap();
        assert_eq!(back.background_repeat, None);
    }

    #[test]
    fn test_palette_lookup() {
        let dark = Palette::find("dark").unwrap();
        assert_eq!(dark.background, "#111827");
        assert!(Palette::find("neon").is_none());
    }

    #[test]
    fn test_gradient_presets() {
        assert_eq!(
            gradient_for("#ffffff"),
            "linear-gradient(135deg, #ffffff 0%, #f3f4f6 100%)"
        );
        assert_eq!(
            gradient_for("#eff6ff"),
            "linear-gradient(135deg, #eff6ff 0%, rgba(255,255,255,0) 100%)"
        );
    }
}
