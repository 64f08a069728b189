//! Article style presets understood by the newsify service.

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Writing style requested for the generated article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    /// Objective newspaper reporting
    #[default]
    Formal,
    /// Dramatic headlines, emotional angles
    Tabloid,
    /// Personal, analytical blog post
    Blog,
    /// Social media thread and captions
    Social,
}

impl StylePreset {
    /// All presets in display order.
    pub const ALL: [StylePreset; 4] = [
        StylePreset::Formal,
        StylePreset::Tabloid,
        StylePreset::Blog,
        StylePreset::Social,
    ];

    /// Name sent in the `style` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            StylePreset::Formal => "formal",
            StylePreset::Tabloid => "tabloid",
            StylePreset::Blog => "blog",
            StylePreset::Social => "social",
        }
    }

    /// Human-readable label for selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            StylePreset::Formal => "Formal News",
            StylePreset::Tabloid => "Tabloid Style",
            StylePreset::Blog => "Blog Style",
            StylePreset::Social => "Social Media Style",
        }
    }
}

impl fmt::Display for StylePreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string names no known preset.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown style '{0}'. Available styles: formal, tabloid, blog, social")]
pub struct UnknownStyle(pub String);

impl FromStr for StylePreset {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_lowercase();
        StylePreset::ALL
            .into_iter()
            .find(|preset| preset.as_str() == lower)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}
