use serde::{Deserialize, Serialize};

/// Which projection of a block is being built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderMode {
    /// Directly editable canvas projection: bindings and chrome kept
    #[default]
    Interactive,
    /// Export/clipboard projection: chrome stripped
    Static,
}

/// Simulated device width on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Viewport {
    #[default]
    Desktop,
    Mobile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderOptions {
    pub mode: RenderMode,
    pub viewport: Viewport,
}

impl RenderOptions {
    pub fn interactive() -> Self {
        Self {
            mode: RenderMode::Interactive,
            viewport: Viewport::Desktop,
        }
    }

    /// Static markup always uses the desktop responsive classes
    pub fn static_markup() -> Self {
        Self {
            mode: RenderMode::Static,
            viewport: Viewport::Desktop,
        }
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        if self.mode == RenderMode::Interactive {
            self.viewport = viewport;
        }
        self
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport == Viewport::Mobile
    }
}
