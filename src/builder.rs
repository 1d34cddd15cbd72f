//! Palette construction from a single base color
//!
//! A build is one linear pass:
//!
//! 1. the primary tonal scale, always (`{name}-darkest` .. `{name}-lightest`)
//! 2. UI scales when `ui` is set (`cta`, `info`, `warn`, `pass`, `dang`)
//! 3. the greyscale ramp when `greyscale` is set
//!
//! Scales run through `[black, anchor, white]`; anchors other than the base and
//! `cta` are first blended toward the base color in Lab space. Every write is
//! first-write-wins, so seeded keys survive untouched.

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::color::{Color, ColorSpace, Scale};
use crate::options::PaletteOptions;
use crate::swatch::Palette;
use crate::{Result, SwatchError};

// =============================================================================
// Swatch Tables
// =============================================================================

/// Suffixes of the primary scale, darkest first. The empty suffix is the base color.
pub const PRIMARY_SUFFIXES: &[&str] = &[
    "-darkest", "-darker", "-dark", "", "-light", "-lighter", "-lightest",
];

/// Inset of the primary scale from pure black/white.
pub const PRIMARY_PADDING: f32 = 0.4;

/// Suffixes of each UI scale.
pub const UI_SUFFIXES: &[&str] = &["-dark", "", "-light"];

/// Inset of the UI scales from pure black/white.
pub const UI_PADDING: f32 = 0.25;

/// Hue rotation (degrees) from the base color to the call-to-action color.
pub const CTA_HUE_SHIFT: f32 = 150.0;

/// UI roles whose anchor is blended toward the base color by `ui_mix`.
/// `cta` is not listed: it is the hue-rotated base color.
pub const UI_ROLES: &[(&str, &str)] = &[
    ("info", "#3df"),
    ("warn", "#fd0"),
    ("pass", "#3e4"),
    ("dang", "#f34"),
];

/// Greyscale anchors, blended toward the base color by `greyscale_mix`.
pub const GREYSCALE: &[(&str, &str)] = &[
    ("black", "#292929"),
    ("grey-darkest", "#484848"),
    ("grey-darker", "#6f6f6f"),
    ("grey-dark", "#959595"),
    ("grey", "#c2c2c2"),
    ("grey-light", "#e1e1e1"),
    ("grey-lighter", "#f5f5f5"),
    ("grey-lightest", "#fafafa"),
];

/// Greyscale entries written verbatim, never blended.
pub const GREYSCALE_LITERALS: &[(&str, &str)] = &[("white", "#ffffff"), ("transparent", "transparent")];

const INVALID_COLOR: &str = r#"Please provide a valid "color" string parameter"#;

// =============================================================================
// Builder
// =============================================================================

/// Accumulates swatches around a parsed base color.
#[derive(Debug, Clone)]
pub struct PaletteBuilder {
    base: Color,
    palette: Palette,
}

impl PaletteBuilder {
    /// Start from `seed`; its entries are never overwritten.
    pub fn new(base: Color, seed: Palette) -> Self {
        Self {
            base,
            palette: seed,
        }
    }

    /// Blend the `anchor` color toward the base color by `amount` in Lab
    /// space, rendered as hex.
    pub fn mix_toward_base(&self, anchor: &str, amount: f32) -> Result<String> {
        let anchor = Color::parse(anchor)?;
        Ok(anchor.mix(&self.base, amount, ColorSpace::Lab).to_hex())
    }

    /// Insert unless `key` is already present.
    pub fn add(&mut self, key: &str, value: impl Into<String>) {
        if !self.palette.insert_if_absent(key, value) {
            trace!("Keeping existing swatch '{}'", key);
        }
    }

    /// Add a scale through `[black, anchor, white]` with one stop per suffix,
    /// keyed `{prefix}{suffix}`.
    pub fn add_scale(&mut self, prefix: &str, anchor: Color, suffixes: &[&str], padding: f32) {
        let colors = Scale::new(vec![Color::black(), anchor, Color::white()])
            .padding(padding)
            .space(ColorSpace::Rgb)
            .colors(suffixes.len());

        for (suffix, color) in suffixes.iter().zip(colors) {
            self.add(&format!("{}{}", prefix, suffix), color.to_hex());
        }
    }

    /// The seven-stop tonal scale of the base color under `name`.
    pub fn add_primary(&mut self, name: &str) {
        self.add_scale(name, self.base, PRIMARY_SUFFIXES, PRIMARY_PADDING);
    }

    /// The `cta` scale plus one scale per entry of [`UI_ROLES`].
    pub fn add_ui(&mut self, ui_mix: f32) -> Result<()> {
        let cta = self.base.shift_hue(CTA_HUE_SHIFT);
        self.add_scale("cta", cta, UI_SUFFIXES, UI_PADDING);

        // Mixed anchors are scaled from their hex rendering
        for (role, anchor) in UI_ROLES {
            let anchor = Color::parse(&self.mix_toward_base(anchor, ui_mix)?)?;
            self.add_scale(role, anchor, UI_SUFFIXES, UI_PADDING);
        }
        Ok(())
    }

    /// The tinted greyscale ramp followed by `white` and `transparent`.
    pub fn add_greyscale(&mut self, greyscale_mix: f32) -> Result<()> {
        for (key, anchor) in GREYSCALE {
            let tinted = self.mix_toward_base(anchor, greyscale_mix)?;
            self.add(key, tinted);
        }
        for (key, value) in GREYSCALE_LITERALS {
            self.add(key, *value);
        }
        Ok(())
    }

    pub fn finish(self) -> Palette {
        self.palette
    }
}

// =============================================================================
// Entry Points
// =============================================================================

/// Build a palette from a base color.
///
/// The seed in `options.palette` is moved in, extended and returned; seeded
/// keys keep their values.
///
/// # Example
/// ```
/// use brandswatch::{build_palette, PaletteOptions};
///
/// let options = PaletteOptions::default().with_name("primary").with_ui(true);
/// let palette = build_palette("#3366ff", options).unwrap();
/// assert_eq!(palette.get("primary"), Some("#3366ff"));
/// assert_eq!(palette.get("cta"), Some("#ff6633"));
/// assert_eq!(palette.len(), 7 + 15);
/// ```
pub fn build_palette(color: &str, options: PaletteOptions) -> Result<Palette> {
    if color.trim().is_empty() {
        return Err(SwatchError::InvalidInput(INVALID_COLOR.to_string()));
    }

    let PaletteOptions {
        name,
        ui,
        ui_mix,
        greyscale,
        greyscale_mix,
        palette,
    } = options;

    debug!(
        "Building palette '{}' from {} (ui: {}, greyscale: {}, seeded: {})",
        name,
        color,
        ui,
        greyscale,
        palette.len()
    );

    let base = Color::parse(color)?;
    let mut builder = PaletteBuilder::new(base, palette);

    builder.add_primary(&name);

    if ui {
        builder.add_ui(ui_mix)?;
    }

    if greyscale {
        builder.add_greyscale(greyscale_mix)?;
    }

    let palette = builder.finish();
    debug!("Built palette with {} swatches", palette.len());
    Ok(palette)
}

/// Build a palette from loosely typed JSON input.
///
/// `color` must be a non-empty JSON string; this is checked before the options
/// are read. `options` may be absent or `null`.
pub fn build_palette_json(color: &Value, options: Option<&Value>) -> Result<Palette> {
    let color = match color {
        Value::String(s) if !s.trim().is_empty() => s.as_str(),
        _ => return Err(SwatchError::InvalidInput(INVALID_COLOR.to_string())),
    };

    let options = match options {
        None | Some(Value::Null) => PaletteOptions::default(),
        Some(value) => PaletteOptions::deserialize(value)?,
    };

    build_palette(color, options)
}
