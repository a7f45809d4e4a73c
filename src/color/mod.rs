//! Color parsing and normalization.
//!
//! Input strings in any supported CSS notation are quantized to 8-bit sRGB
//! channels at the parse boundary. Every rendering and all luminance math
//! derive from those channels, so two strings denoting the same visual
//! color normalize to bit-identical output.

pub mod format;

use csscolorparser::Color as CssColor;

use crate::error::InvalidColorError;

/// CSS keywords that name no concrete color.
const NON_COLOR_KEYWORDS: [&str; 5] = ["transparent", "inherit", "currentcolor", "initial", "unset"];

/// A parsed color: 8-bit sRGB channels plus the source alpha, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Present only when the source string carried a non-opaque alpha.
    pub alpha: Option<u8>,
}

impl Color {
    /// Parse any supported CSS color notation.
    ///
    /// Accepts hex (`#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`), functional
    /// `rgb()`/`rgba()` with integer or percentage channels,
    /// `hsl()`/`hsla()`, `oklch()`, and the CSS named-color keywords, all
    /// case-insensitive with interior whitespace tolerated.
    pub fn parse(input: &str) -> Result<Self, InvalidColorError> {
        let trimmed = input.trim();

        if NON_COLOR_KEYWORDS.contains(&trimmed.to_lowercase().as_str()) {
            return Err(InvalidColorError::new(input));
        }

        let parsed: CssColor = trimmed
            .parse()
            .map_err(|_| InvalidColorError::new(input))?;
        let [r, g, b, a] = parsed.to_rgba8();

        Ok(Self {
            r,
            g,
            b,
            alpha: if a < 255 { Some(a) } else { None },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_digit_hex() {
        let c = Color::parse("#1e293b").unwrap();
        assert_eq!((c.r, c.g, c.b), (30, 41, 59));
        assert_eq!(c.alpha, None);
    }

    #[test]
    fn shorthand_hex_expands() {
        assert_eq!(Color::parse("#f00").unwrap(), Color::parse("#ff0000").unwrap());
    }

    #[test]
    fn hex_digits_case_insensitive() {
        assert_eq!(Color::parse("#FF0000").unwrap(), Color::parse("#ff0000").unwrap());
    }

    #[test]
    fn eight_digit_hex_keeps_alpha() {
        let c = Color::parse("#ff000080").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
        assert_eq!(c.alpha, Some(128));
    }

    #[test]
    fn fully_opaque_alpha_normalizes_away() {
        assert_eq!(Color::parse("#ff0000ff").unwrap().alpha, None);
        assert_eq!(Color::parse("rgba(255, 0, 0, 1)").unwrap().alpha, None);
    }

    #[test]
    fn functional_rgb() {
        let c = Color::parse("rgb(255, 0, 128)").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 128));
    }

    #[test]
    fn functional_rgb_percentages() {
        let c = Color::parse("rgb(100%, 0%, 0%)").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
    }

    #[test]
    fn whitespace_tolerated() {
        let c = Color::parse("  rgb( 255 , 0 , 0 )  ").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
    }

    #[test]
    fn functional_hsl() {
        let c = Color::parse("hsl(0, 100%, 50%)").unwrap();
        assert_eq!((c.r, c.g, c.b), (255, 0, 0));
    }

    #[test]
    fn named_colors() {
        assert_eq!(Color::parse("red").unwrap(), Color::parse("#ff0000").unwrap());
        assert_eq!(Color::parse("white").unwrap(), Color::parse("#ffffff").unwrap());
        assert_eq!(
            Color::parse("rebeccapurple").unwrap(),
            Color::parse("#663399").unwrap()
        );
    }

    #[test]
    fn named_colors_case_insensitive() {
        assert_eq!(Color::parse("RED").unwrap(), Color::parse("red").unwrap());
    }

    #[test]
    fn oklch_notation() {
        // oklch(0.6279 0.2577 29.23) is sRGB red to within quantization
        let c = Color::parse("oklch(0.6279 0.2577 29.23)").unwrap();
        assert!(c.r >= 252, "red channel {} too low", c.r);
        assert!(c.g <= 4 && c.b <= 4, "got ({}, {}, {})", c.r, c.g, c.b);
    }

    #[test]
    fn unparseable_input_rejected() {
        for input in ["not-a-color", "", "#12345g", "rgb()", "hsl(foo)"] {
            let err = Color::parse(input).unwrap_err();
            assert_eq!(err.input, input);
        }
    }

    #[test]
    fn non_color_keywords_rejected() {
        for input in ["transparent", "inherit", "currentColor", "initial", "unset"] {
            assert!(Color::parse(input).is_err(), "{input} should be rejected");
        }
    }
}
