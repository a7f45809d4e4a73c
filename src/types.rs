use serde::{Deserialize, Serialize};

/// WCAG conformance level. AAA is the stricter superset of AA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        })
    }
}

/// WCAG text-size category. Large text (≥18pt, or ≥14pt bold) gets the
/// relaxed thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextSize {
    Normal,
    Large,
}

impl std::fmt::Display for TextSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Normal => "normal",
            Self::Large => "large",
        })
    }
}

/// Canonical string encodings of one color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorFormats {
    pub hex: String,
    pub rgb: String,
    pub hsl: String,
    pub oklch: String,
}

/// Pass/fail for one conformance level across both text sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelPasses {
    pub normal: bool,
    pub large: bool,
}

/// The full AA/AAA × normal/large pass matrix for a contrast ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WcagPasses {
    #[serde(rename = "AA")]
    pub aa: LevelPasses,
    #[serde(rename = "AAA")]
    pub aaa: LevelPasses,
}

impl WcagPasses {
    /// The matrix cell for one (level, text size) combination.
    pub fn cell(&self, level: WcagLevel, text_size: TextSize) -> bool {
        let per_level = match level {
            WcagLevel::Aa => &self.aa,
            WcagLevel::Aaa => &self.aaa,
        };
        match text_size {
            TextSize::Normal => per_level.normal,
            TextSize::Large => per_level.large,
        }
    }
}

/// Result of comparing a foreground and background color.
///
/// `ratio` is rounded to 2 decimals for output; `level` is the highest
/// level achieved for normal text, independent of any requested text size.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContrastResult {
    pub ratio: f64,
    pub level: Option<WcagLevel>,
    pub passes: WcagPasses,
    pub foreground: ColorFormats,
    pub background: ColorFormats,
}

/// A single color's encodings plus its relative luminance (4 decimals).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccessibilityAnalysis {
    pub color: ColorFormats,
    pub luminance: f64,
}

/// Verdict for one requested (level, text size) combination.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceCheck {
    pub passes: bool,
    pub ratio: f64,
    pub required_ratio: f64,
    pub achieved_level: Option<WcagLevel>,
    pub requested_level: WcagLevel,
    pub text_size: TextSize,
    pub recommendation: String,
}

/// One foreground/background pair in a batch request, pre-validated by the
/// shell. `label` is optional and defaults downstream.
#[derive(Debug, Clone, Deserialize)]
pub struct ColorPairInput {
    pub foreground: String,
    pub background: String,
    #[serde(default)]
    pub label: Option<String>,
}

/// Outcome for one batch pair. A successful item flattens its analysis
/// into the object; a failed item carries only the error message.
#[derive(Debug, Clone, Serialize)]
pub struct BatchItem {
    pub index: usize,
    pub label: String,
    pub success: bool,
    #[serde(flatten)]
    pub analysis: Option<ContrastResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregate counts over one batch. The passing counts consider successful
/// items at normal text size only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    #[serde(rename = "passingAA")]
    pub passing_aa: usize,
    #[serde(rename = "passingAAA")]
    pub passing_aaa: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct BatchResult {
    pub summary: BatchSummary,
    pub results: Vec<BatchItem>,
}
