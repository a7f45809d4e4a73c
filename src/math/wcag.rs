use crate::color::Color;
use crate::types::{LevelPasses, TextSize, WcagLevel, WcagPasses};

/// Convert an 8-bit sRGB channel to linear light.
/// sRGB -> linear: if V <= 0.04045: V/12.92, else ((V+0.055)/1.055)^2.4
fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance per WCAG 2.x, in [0, 1].
/// L = 0.2126 * R + 0.7152 * G + 0.0722 * B (linear channels)
pub fn relative_luminance(color: &Color) -> f64 {
    0.2126 * srgb_to_linear(color.r)
        + 0.7152 * srgb_to_linear(color.g)
        + 0.0722 * srgb_to_linear(color.b)
}

/// WCAG 2.x contrast ratio between two colors, in [1.0, 21.0].
/// ratio = (L1 + 0.05) / (L2 + 0.05) where L1 >= L2
///
/// The lighter color is determined here by comparing luminances, never
/// from argument order, so the ratio is symmetric in its inputs. No
/// rounding happens at this layer.
pub fn contrast_ratio(a: &Color, b: &Color) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Pass/fail for every WCAG threshold.
pub fn check_thresholds(ratio: f64) -> WcagPasses {
    WcagPasses {
        aa: LevelPasses {
            normal: ratio >= 4.5,
            large: ratio >= 3.0,
        },
        aaa: LevelPasses {
            normal: ratio >= 7.0,
            large: ratio >= 4.5,
        },
    }
}

/// Highest conformance level achieved for the given text size, if any.
/// AAA is checked first; its threshold subsumes AA at the same size.
pub fn highest_level(ratio: f64, text_size: TextSize) -> Option<WcagLevel> {
    match text_size {
        TextSize::Large => {
            if ratio >= 4.5 {
                Some(WcagLevel::Aaa)
            } else if ratio >= 3.0 {
                Some(WcagLevel::Aa)
            } else {
                None
            }
        }
        TextSize::Normal => {
            if ratio >= 7.0 {
                Some(WcagLevel::Aaa)
            } else if ratio >= 4.5 {
                Some(WcagLevel::Aa)
            } else {
                None
            }
        }
    }
}

/// Minimum ratio demanded by a (level, text size) combination. Total.
pub fn required_ratio(level: WcagLevel, text_size: TextSize) -> f64 {
    match (level, text_size) {
        (WcagLevel::Aaa, TextSize::Normal) => 7.0,
        (WcagLevel::Aaa, TextSize::Large) => 4.5,
        (WcagLevel::Aa, TextSize::Normal) => 4.5,
        (WcagLevel::Aa, TextSize::Large) => 3.0,
    }
}
