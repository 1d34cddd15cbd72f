//! Color parsing, mixing and scale interpolation
//!
//! Thin layer over `csscolorparser` (parsing) and `palette` (color math). The
//! palette builder only talks to the types in this module.

use std::fmt;
use std::str::FromStr;

use palette::{FromColor, Hsl, Lab, Mix, ShiftHue, Srgb};

use crate::{Result, SwatchError};

// =============================================================================
// Colors
// =============================================================================

/// Color space options for mixing and interpolation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSpace {
    /// Gamma-encoded sRGB channels, interpolated as-is.
    /// This is how tonal scales are spread between black, the anchor and white.
    #[default]
    Rgb,
    /// CIE L*a*b* (D65) - perceptually uniform, used for blending anchors
    /// toward the base color without muddy transitions across hue.
    Lab,
}

/// An opaque sRGB color.
///
/// Alpha is discarded on parse; every color renders as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color(Srgb<f32>);

impl Color {
    /// Parse any CSS color string.
    ///
    /// # Example
    /// ```
    /// use brandswatch::Color;
    ///
    /// let cyan = Color::parse("#3df").unwrap();
    /// assert_eq!(cyan.to_hex(), "#33ddff");
    /// assert!(Color::parse("notacolor").is_err());
    /// ```
    pub fn parse(value: &str) -> Result<Self> {
        let parsed = csscolorparser::parse(value).map_err(|source| SwatchError::ColorParse {
            input: value.to_string(),
            source,
        })?;

        Ok(Self(Srgb::new(
            parsed.r as f32,
            parsed.g as f32,
            parsed.b as f32,
        )))
    }

    pub fn black() -> Self {
        Self(Srgb::new(0.0, 0.0, 0.0))
    }

    pub fn white() -> Self {
        Self(Srgb::new(1.0, 1.0, 1.0))
    }

    /// Render as a lowercase `#rrggbb` string.
    pub fn to_hex(&self) -> String {
        let r = (self.0.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (self.0.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (self.0.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Blend toward `other`: `ratio` 0 keeps `self`, 1 gives `other`.
    pub fn mix(&self, other: &Color, ratio: f32, space: ColorSpace) -> Color {
        match space {
            ColorSpace::Rgb => Self(self.0.mix(other.0, ratio)),
            ColorSpace::Lab => {
                let from: Lab = Lab::from_color(self.0);
                let to: Lab = Lab::from_color(other.0);
                Self(Srgb::from_color(from.mix(to, ratio)))
            }
        }
    }

    /// Rotate the HSL hue by `degrees`, keeping saturation and lightness.
    pub fn shift_hue(&self, degrees: f32) -> Color {
        let hsl: Hsl = Hsl::from_color(self.0);
        Self(Srgb::from_color(hsl.shift_hue(degrees)))
    }
}

impl FromStr for Color {
    type Err = SwatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

// =============================================================================
// Color Scales
// =============================================================================

/// Evenly positioned color stops sampled into `n` colors.
///
/// Padding insets both ends of the scale: with padding `p`, sample position
/// `t` maps to `p + t * (1 - 2p)`, so the extreme samples never reach the
/// first and last stops.
///
/// # Example
/// ```
/// use brandswatch::{Color, Scale};
///
/// let scale = Scale::new(vec![Color::black(), Color::parse("#6496c8").unwrap(), Color::white()]);
/// let colors = scale.padding(0.2).colors(3);
/// let hex: Vec<String> = colors.iter().map(|c| c.to_hex()).collect();
/// assert_eq!(hex, vec!["#283c50", "#6496c8", "#c1d5e9"]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scale {
    stops: Vec<Color>,
    padding: f32,
    space: ColorSpace,
}

impl Scale {
    pub fn new(stops: Vec<Color>) -> Self {
        Self {
            stops,
            padding: 0.0,
            space: ColorSpace::default(),
        }
    }

    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn space(mut self, space: ColorSpace) -> Self {
        self.space = space;
        self
    }

    /// Sample `count` evenly spaced colors along the (padded) scale.
    ///
    /// A single sample is taken from the middle of the scale.
    pub fn colors(&self, count: usize) -> Vec<Color> {
        if self.stops.is_empty() || count == 0 {
            return vec![];
        }

        if count == 1 {
            return vec![self.sample(0.5)];
        }

        (0..count)
            .map(|i| self.sample(i as f32 / (count - 1) as f32))
            .collect()
    }

    /// Color at position `t` in [0, 1]. Stops must not be empty.
    fn sample(&self, t: f32) -> Color {
        if self.stops.len() == 1 {
            return self.stops[0];
        }

        let t = (self.padding + t * (1.0 - 2.0 * self.padding)).clamp(0.0, 1.0);

        let num_segments = self.stops.len() - 1;
        let segment_float = t * num_segments as f32;
        let segment = (segment_float.floor() as usize).min(num_segments - 1);
        let segment_t = segment_float - segment as f32;

        // Landing on a stop returns it untouched
        if segment_t <= 0.0 {
            return self.stops[segment];
        }
        if segment_t >= 1.0 {
            return self.stops[segment + 1];
        }

        self.stops[segment].mix(&self.stops[segment + 1], segment_t, self.space)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::channels;

    fn hex(colors: &[Color]) -> Vec<String> {
        colors.iter().map(Color::to_hex).collect()
    }

    fn to_hex(value: &str) -> String {
        Color::parse(value).unwrap().to_hex()
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(to_hex("red"), "#ff0000");
        assert_eq!(to_hex("blue"), "#0000ff");
        assert_eq!(to_hex("green"), "#008000");
        assert_eq!(to_hex("white"), "#ffffff");
        assert_eq!(to_hex("black"), "#000000");
    }

    #[test]
    fn test_parse_hex_values() {
        assert_eq!(to_hex("#ff0000"), "#ff0000");
        assert_eq!(to_hex("#FF0000"), "#ff0000");
        assert_eq!(to_hex("#f00"), "#ff0000");
        assert_eq!(to_hex("#3366ff"), "#3366ff");
    }

    #[test]
    fn test_parse_drops_alpha() {
        assert_eq!(to_hex("#3366ff80"), "#3366ff");
        assert_eq!(to_hex("rgba(255, 0, 0, 0.5)"), "#ff0000");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Color::parse("notacolor").is_err());
        assert!(Color::parse("").is_err());
        assert!(matches!(
            Color::parse("#12"),
            Err(SwatchError::ColorParse { ref input, .. }) if input == "#12"
        ));
    }

    #[test]
    fn test_from_str_and_display() {
        let color: Color = "rgb(51, 102, 255)".parse().unwrap();
        assert_eq!(color.to_string(), "#3366ff");
    }

    #[test]
    fn test_mix_endpoints() {
        let red = Color::parse("red").unwrap();
        let blue = Color::parse("blue").unwrap();
        for space in [ColorSpace::Rgb, ColorSpace::Lab] {
            assert_eq!(red.mix(&blue, 0.0, space).to_hex(), "#ff0000");
            assert_eq!(red.mix(&blue, 1.0, space).to_hex(), "#0000ff");
        }
    }

    #[test]
    fn test_mix_rgb_midpoint() {
        let black = Color::black();
        let grey = Color::parse("#c8c8c8").unwrap();
        assert_eq!(black.mix(&grey, 0.5, ColorSpace::Rgb).to_hex(), "#646464");
    }

    #[test]
    fn test_mix_lab_stays_neutral() {
        // Black and white have a = b = 0, so every Lab blend is a pure grey
        let mid = Color::black().mix(&Color::white(), 0.5, ColorSpace::Lab).to_hex();
        let (r, g, b) = channels(&mid);
        assert!(r.abs_diff(g) <= 1 && g.abs_diff(b) <= 1);
        assert!((100..140).contains(&r));
    }

    #[test]
    fn test_shift_hue() {
        let red = Color::parse("#ff0000").unwrap();
        assert_eq!(red.shift_hue(120.0).to_hex(), "#00ff00");
        assert_eq!(red.shift_hue(240.0).to_hex(), "#0000ff");
    }

    #[test]
    fn test_shift_hue_wraps_past_360() {
        // #3366ff sits at 225 degrees; +150 wraps to 15 degrees
        let blue = Color::parse("#3366ff").unwrap();
        assert_eq!(blue.shift_hue(150.0).to_hex(), "#ff6633");
    }

    #[test]
    fn test_shift_hue_achromatic() {
        let grey = Color::parse("#808080").unwrap();
        assert_eq!(grey.shift_hue(150.0).to_hex(), "#808080");
    }

    #[test]
    fn test_scale_basic() {
        let scale = Scale::new(vec![Color::black(), Color::parse("#c8c8c8").unwrap()]);
        assert_eq!(
            hex(&scale.colors(5)),
            vec!["#000000", "#323232", "#646464", "#969696", "#c8c8c8"]
        );
    }

    #[test]
    fn test_scale_three_stops_preserves_middle() {
        let base = Color::parse("#3366ff").unwrap();
        let scale = Scale::new(vec![Color::black(), base, Color::white()]);
        let colors = hex(&scale.colors(3));
        assert_eq!(colors, vec!["#000000", "#3366ff", "#ffffff"]);
    }

    #[test]
    fn test_scale_padding() {
        let base = Color::parse("#6496c8").unwrap();
        let scale = Scale::new(vec![Color::black(), base, Color::white()]).padding(0.2);
        assert_eq!(
            hex(&scale.colors(3)),
            vec!["#283c50", "#6496c8", "#c1d5e9"]
        );
    }

    #[test]
    fn test_scale_padding_seven_stops() {
        let base = Color::parse("#3366ff").unwrap();
        let scale = Scale::new(vec![Color::black(), base, Color::white()]).padding(0.4);
        assert_eq!(
            hex(&scale.colors(7)),
            vec!["#2952cc", "#2c58dd", "#305fee", "#3366ff", "#4170ff", "#4e7aff", "#5c85ff"]
        );
    }

    #[test]
    fn test_scale_count_zero_and_one() {
        let scale = Scale::new(vec![Color::black(), Color::parse("#c8c8c8").unwrap()]);
        assert!(scale.colors(0).is_empty());
        assert_eq!(hex(&scale.colors(1)), vec!["#646464"]);
    }

    #[test]
    fn test_scale_single_and_empty_stops() {
        let red = Color::parse("red").unwrap();
        let colors = Scale::new(vec![red]).colors(3);
        assert_eq!(hex(&colors), vec!["#ff0000", "#ff0000", "#ff0000"]);
        assert!(Scale::new(vec![]).colors(3).is_empty());
    }
}
