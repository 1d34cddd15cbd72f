/*!
# brandswatch - named color palettes from a single base color

brandswatch turns one base color into a lookup table of named swatches:

- a seven-stop tonal scale (`brand-darkest` .. `brand-lightest`)
- optional UI colors (`cta`, `info`, `warn`, `pass`, `dang`, three shades each)
- an optional greyscale ramp gently tinted toward the base color

## Example

```rust
use brandswatch::{build_palette, PaletteOptions};

let palette = build_palette("#3366ff", PaletteOptions::default()).unwrap();
assert_eq!(palette.get("brand"), Some("#3366ff"));
assert_eq!(palette.len(), 7);
```

## Architecture

```text
color string + PaletteOptions
    │
    ▼
color.rs:    parse, Lab mixing, hue rotation, padded scales (csscolorparser + palette)
    │
    ▼
builder.rs:  primary scale, UI scales, greyscale ramp
    │
    ▼
swatch.rs:   Palette (first write wins)
```
*/

pub mod builder;
pub mod color;
pub mod options;
pub mod swatch;

#[cfg(test)]
mod test_utils;

pub use builder::{build_palette, build_palette_json, PaletteBuilder};
pub use color::{Color, ColorSpace, Scale};
pub use options::PaletteOptions;
pub use swatch::Palette;

/// Main library error type
#[derive(thiserror::Error, Debug)]
pub enum SwatchError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid color '{input}': {source}")]
    ColorParse {
        input: String,
        #[source]
        source: csscolorparser::ParseColorError,
    },

    #[error("Invalid options: {0}")]
    InvalidOptions(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SwatchError>;
