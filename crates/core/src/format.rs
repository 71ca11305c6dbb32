//! Pure display helpers shared by the assessment pages.

use crate::model::CefrLevel;

/// Formats an elapsed call duration as `M:SS`.
///
/// Minutes are not rolled over into hours.
#[must_use]
pub fn format_elapsed_time(seconds: u64) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes}:{remainder:02}")
}

/// Colour bucket used to tint badges and progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBucket {
    Green,
    Blue,
    Yellow,
    Orange,
    Red,
    Gray,
}

impl ColorBucket {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Green => "tone-green",
            Self::Blue => "tone-blue",
            Self::Yellow => "tone-yellow",
            Self::Orange => "tone-orange",
            Self::Red => "tone-red",
            Self::Gray => "tone-gray",
        }
    }
}

#[must_use]
pub fn difficulty_color(difficulty: &str) -> ColorBucket {
    match difficulty.trim().to_ascii_lowercase().as_str() {
        "beginner" => ColorBucket::Green,
        "intermediate" => ColorBucket::Yellow,
        "advanced" => ColorBucket::Red,
        _ => ColorBucket::Gray,
    }
}

#[must_use]
pub fn level_color(level: CefrLevel) -> ColorBucket {
    match level {
        CefrLevel::A1 | CefrLevel::A2 => ColorBucket::Green,
        CefrLevel::B1 | CefrLevel::B2 => ColorBucket::Blue,
        CefrLevel::C1 | CefrLevel::C2 => ColorBucket::Orange,
    }
}

/// Like [`level_color`] for a raw label; unknown labels fall back to gray.
#[must_use]
pub fn level_color_label(label: &str) -> ColorBucket {
    CefrLevel::from_label(label).map_or(ColorBucket::Gray, level_color)
}

#[must_use]
pub fn score_color(score: i32) -> ColorBucket {
    match score {
        80..=100 => ColorBucket::Green,
        60..=79 => ColorBucket::Blue,
        40..=59 => ColorBucket::Yellow,
        0..=39 => ColorBucket::Red,
        _ => ColorBucket::Gray,
    }
}
