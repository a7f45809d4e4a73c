//! Canonical string renderings of a parsed color.
//!
//! hex and rgb come straight from the 8-bit channels; hsl and oklch go
//! through `palette`. Output precision: hsl uses integer degrees and
//! percentages, oklch keeps 4 decimals for L/C and 2 for hue so it carries
//! more precision than the other encodings.

use palette::{Hsl, IntoColor, Oklch, Srgb};

use super::Color;
use crate::types::ColorFormats;

/// Render a color into the four canonical encodings.
pub fn render(color: &Color) -> ColorFormats {
    ColorFormats {
        hex: format_hex(color),
        rgb: format_rgb(color),
        hsl: format_hsl(color),
        oklch: format_oklch(color),
    }
}

fn format_hex(color: &Color) -> String {
    match color.alpha {
        Some(a) => format!("#{:02x}{:02x}{:02x}{:02x}", color.r, color.g, color.b, a),
        None => format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b),
    }
}

fn format_rgb(color: &Color) -> String {
    match color.alpha {
        Some(a) => format!(
            "rgba({}, {}, {}, {})",
            color.r,
            color.g,
            color.b,
            format_alpha(a)
        ),
        None => format!("rgb({}, {}, {})", color.r, color.g, color.b),
    }
}

fn format_hsl(color: &Color) -> String {
    let hsl: Hsl = srgb_f32(color).into_color();
    let h = round_hue_degrees(hsl.hue.into_positive_degrees());
    let s = (hsl.saturation * 100.0).round() as u16;
    let l = (hsl.lightness * 100.0).round() as u16;
    match color.alpha {
        Some(a) => format!("hsla({h}, {s}%, {l}%, {})", format_alpha(a)),
        None => format!("hsl({h}, {s}%, {l}%)"),
    }
}

fn format_oklch(color: &Color) -> String {
    let oklch: Oklch = srgb_f32(color).into_linear().into_color();
    let l = oklch.l.clamp(0.0, 1.0);
    let c = oklch.chroma.max(0.0);
    // Hue is meaningless at zero chroma; pin it for stable output.
    let h = if c < 5e-5 {
        0.0
    } else {
        let h = (f64::from(oklch.hue.into_positive_degrees()) * 100.0).round() / 100.0;
        if h >= 360.0 {
            h - 360.0
        } else {
            h
        }
    };
    match color.alpha {
        Some(a) => format!("oklch({l:.4} {c:.4} {h:.2} / {})", format_alpha(a)),
        None => format!("oklch({l:.4} {c:.4} {h:.2})"),
    }
}

fn srgb_f32(color: &Color) -> Srgb<f32> {
    Srgb::new(
        color.r as f32 / 255.0,
        color.g as f32 / 255.0,
        color.b as f32 / 255.0,
    )
}

/// Integer degrees in [0, 360); rounding 359.6 must wrap, not print 360.
fn round_hue_degrees(degrees: f32) -> u16 {
    (degrees.round() as u16) % 360
}

/// Alpha as a fraction with up to 3 decimals, trailing zeros trimmed.
fn format_alpha(alpha: u8) -> String {
    let mut s = format!("{:.3}", f64::from(alpha) / 255.0);
    while s.ends_with('0') {
        s.pop();
    }
    if s.ends_with('.') {
        s.pop();
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rendered(input: &str) -> ColorFormats {
        render(&Color::parse(input).unwrap())
    }

    #[test]
    fn red_in_all_formats() {
        let f = rendered("#ff0000");
        assert_eq!(f.hex, "#ff0000");
        assert_eq!(f.rgb, "rgb(255, 0, 0)");
        assert_eq!(f.hsl, "hsl(0, 100%, 50%)");
        assert!(f.oklch.starts_with("oklch(0.6"), "got {}", f.oklch);
    }

    #[test]
    fn white_and_black() {
        let white = rendered("white");
        assert_eq!(white.hex, "#ffffff");
        assert_eq!(white.rgb, "rgb(255, 255, 255)");
        assert_eq!(white.hsl, "hsl(0, 0%, 100%)");
        assert_eq!(white.oklch, "oklch(1.0000 0.0000 0.00)");

        let black = rendered("#000");
        assert_eq!(black.hex, "#000000");
        assert_eq!(black.hsl, "hsl(0, 0%, 0%)");
        assert_eq!(black.oklch, "oklch(0.0000 0.0000 0.00)");
    }

    #[test]
    fn hex_is_lowercased() {
        assert_eq!(rendered("#1E293B").hex, "#1e293b");
    }

    #[test]
    fn alpha_rendered_in_every_format() {
        let f = rendered("#ff000080");
        assert_eq!(f.hex, "#ff000080");
        assert_eq!(f.rgb, "rgba(255, 0, 0, 0.502)");
        assert_eq!(f.hsl, "hsla(0, 100%, 50%, 0.502)");
        assert!(f.oklch.ends_with("/ 0.502)"), "got {}", f.oklch);
    }

    #[test]
    fn opaque_input_omits_alpha() {
        let f = rendered("rgb(0, 128, 255)");
        assert_eq!(f.hex, "#0080ff");
        assert!(f.rgb.starts_with("rgb("));
        assert!(f.hsl.starts_with("hsl("));
        assert!(!f.oklch.contains('/'));
    }

    #[test]
    fn equivalent_notations_render_identically() {
        let from_hex = rendered("#ff0000");
        assert_eq!(from_hex, rendered("rgb(255, 0, 0)"));
        assert_eq!(from_hex, rendered("hsl(0, 100%, 50%)"));
        assert_eq!(from_hex, rendered("red"));
    }

    #[test]
    fn rendering_is_stable_under_reparse() {
        for input in ["#ff0000", "#1e293b", "teal", "hsl(210, 40%, 98%)", "#09090b"] {
            let first = rendered(input);
            let again = rendered(&first.hex);
            assert_eq!(first, again, "re-rendering {input} via hex drifted");
            assert_eq!(first, rendered(&first.rgb), "re-rendering {input} via rgb drifted");
        }
    }

    #[test]
    fn primary_hsl_round_trips_exactly() {
        for input in ["#ff0000", "#00ff00", "#0000ff", "#ffffff", "#000000"] {
            let first = rendered(input);
            assert_eq!(first, rendered(&first.hsl), "hsl round trip for {input}");
        }
    }

    #[test]
    fn alpha_fraction_trimming() {
        assert_eq!(format_alpha(128), "0.502");
        assert_eq!(format_alpha(64), "0.251");
        assert_eq!(format_alpha(0), "0");
        assert_eq!(format_alpha(51), "0.2");
    }

    #[test]
    fn hue_rounding_wraps_at_360() {
        assert_eq!(round_hue_degrees(359.7), 0);
        assert_eq!(round_hue_degrees(359.4), 359);
        assert_eq!(round_hue_degrees(0.2), 0);
    }
}
