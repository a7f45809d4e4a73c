//! Host-facing analysis entry points.
//!
//! Four pure functions over validated string inputs. Classification always
//! runs on the unrounded ratio; rounding happens only on the output
//! fields. Batch items are independent computations — rayon fans them out
//! and the indexed collect keeps output order equal to input order.

use rayon::prelude::*;

use crate::color::{format, Color};
use crate::error::InvalidColorError;
use crate::math::wcag;
use crate::types::{
    AccessibilityAnalysis, BatchItem, BatchResult, BatchSummary, ColorPairInput, ComplianceCheck,
    ContrastResult, TextSize, WcagLevel, WcagPasses,
};

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Full contrast analysis of one foreground/background pair.
///
/// `level` reports the highest level passing for normal text, regardless
/// of any text size a caller may be interested in.
pub fn analyze_contrast(
    foreground: &str,
    background: &str,
) -> Result<ContrastResult, InvalidColorError> {
    let fg = Color::parse(foreground)?;
    let bg = Color::parse(background)?;

    let ratio = wcag::contrast_ratio(&fg, &bg);
    let passes = wcag::check_thresholds(ratio);
    let level = wcag::highest_level(ratio, TextSize::Normal);

    Ok(ContrastResult {
        ratio: round2(ratio),
        level,
        passes,
        foreground: format::render(&fg),
        background: format::render(&bg),
    })
}

/// Normalized encodings plus relative luminance for a single color.
pub fn analyze_color_accessibility(
    input: &str,
) -> Result<AccessibilityAnalysis, InvalidColorError> {
    let color = Color::parse(input)?;
    Ok(AccessibilityAnalysis {
        color: format::render(&color),
        luminance: round4(wcag::relative_luminance(&color)),
    })
}

/// Check one pair against a specific (level, text size) requirement.
///
/// Defaults (AA, normal) are applied by the caller; this function takes
/// the requested combination as typed values.
pub fn check_compliance(
    foreground: &str,
    background: &str,
    level: WcagLevel,
    text_size: TextSize,
) -> Result<ComplianceCheck, InvalidColorError> {
    let fg = Color::parse(foreground)?;
    let bg = Color::parse(background)?;

    let ratio = wcag::contrast_ratio(&fg, &bg);
    let passes = wcag::check_thresholds(ratio).cell(level, text_size);
    let required = wcag::required_ratio(level, text_size);

    let recommendation = if passes {
        format!("✓ Passes {level} compliance for {text_size} text")
    } else {
        format!(
            "✗ Fails {level} compliance for {text_size} text. Minimum ratio: {required}, actual: {ratio:.2}"
        )
    };

    Ok(ComplianceCheck {
        passes,
        ratio: round2(ratio),
        required_ratio: required,
        achieved_level: wcag::highest_level(ratio, text_size),
        requested_level: level,
        text_size,
        recommendation,
    })
}

/// Analyze up to 50 pairs, isolating per-item failures.
///
/// Never fails as a whole: a bad pair becomes a `success: false` item
/// carrying the error message, and the remaining pairs are unaffected.
pub fn batch_contrast(pairs: &[ColorPairInput]) -> BatchResult {
    let results: Vec<BatchItem> = pairs
        .par_iter()
        .enumerate()
        .map(|(index, pair)| {
            let label = pair
                .label
                .clone()
                .unwrap_or_else(|| format!("Pair {}", index + 1));
            match analyze_contrast(&pair.foreground, &pair.background) {
                Ok(analysis) => BatchItem {
                    index,
                    label,
                    success: true,
                    analysis: Some(analysis),
                    error: None,
                },
                Err(err) => BatchItem {
                    index,
                    label,
                    success: false,
                    analysis: None,
                    error: Some(err.to_string()),
                },
            }
        })
        .collect();

    let successful = results.iter().filter(|item| item.success).count();
    let passing = |pick: fn(&WcagPasses) -> bool| {
        results
            .iter()
            .filter(|item| item.analysis.as_ref().is_some_and(|a| pick(&a.passes)))
            .count()
    };

    let summary = BatchSummary {
        total: results.len(),
        successful,
        failed: results.len() - successful,
        passing_aa: passing(|p| p.aa.normal),
        passing_aaa: passing(|p| p.aaa.normal),
    };

    BatchResult { summary, results }
}
