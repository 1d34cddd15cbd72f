//! Palette generation options
//!
//! Every field defaults independently, both through [`Default`] and when
//! deserializing partial JSON such as `{"ui": true}`.

use serde::{Deserialize, Serialize};

use crate::swatch::Palette;
use crate::Result;

pub const DEFAULT_NAME: &str = "brand";
pub const DEFAULT_UI_MIX: f32 = 0.2;
pub const DEFAULT_GREYSCALE_MIX: f32 = 0.01;

/// Options for [`build_palette`](crate::build_palette).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaletteOptions {
    /// Key prefix of the primary scale (`"brand"` gives `brand-dark`, `brand`, ...)
    pub name: String,
    /// Emit the `cta`, `info`, `warn`, `pass` and `dang` scales
    pub ui: bool,
    /// How far the UI anchor colors are blended toward the base color (0..=1)
    pub ui_mix: f32,
    /// Emit the greyscale ramp plus `white` and `transparent`
    pub greyscale: bool,
    /// How far the greyscale anchors are blended toward the base color (0..=1)
    pub greyscale_mix: f32,
    /// Seed entries; these are kept as-is and the generated swatches are added around them
    pub palette: Palette,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            ui: false,
            ui_mix: DEFAULT_UI_MIX,
            greyscale: false,
            greyscale_mix: DEFAULT_GREYSCALE_MIX,
            palette: Palette::default(),
        }
    }
}

impl PaletteOptions {
    /// Parse options from a JSON object. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_ui(mut self, ui: bool) -> Self {
        self.ui = ui;
        self
    }

    pub fn with_ui_mix(mut self, ui_mix: f32) -> Self {
        self.ui_mix = ui_mix;
        self
    }

    pub fn with_greyscale(mut self, greyscale: bool) -> Self {
        self.greyscale = greyscale;
        self
    }

    pub fn with_greyscale_mix(mut self, greyscale_mix: f32) -> Self {
        self.greyscale_mix = greyscale_mix;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
