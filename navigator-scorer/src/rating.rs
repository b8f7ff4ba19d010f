//! Presentation bands for composite scores.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Quality band of a composite score, ordered from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(rename_all = "kebab-case")
)]
pub enum ScoreBand {
    /// Below 50.
    Poor,
    /// 50 to 59.
    KeepTrying,
    /// 60 to 69.
    NotBad,
    /// 70 to 79.
    Good,
    /// 80 to 89.
    Great,
    /// 90 and above.
    Excellent,
}

impl ScoreBand {
    /// Band containing `score`.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        match score {
            90.. => Self::Excellent,
            80.. => Self::Great,
            70.. => Self::Good,
            60.. => Self::NotBad,
            50.. => Self::KeepTrying,
            _ => Self::Poor,
        }
    }

    /// Short encouragement shown next to the score.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent! You could guide anyone blindfolded.",
            Self::Great => "Great directions! Only small details are missing.",
            Self::Good => "Good job. A few more details would help.",
            Self::NotBad => "Not bad, but it needs work.",
            Self::KeepTrying => "Keep trying. Add more streets and landmarks.",
            Self::Poor => "Needs work. Try to retrace the route step by step.",
        }
    }

    /// CSS hex colour used when rendering the score.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Excellent => "#22c55e",
            Self::Great => "#84cc16",
            Self::Good => "#eab308",
            Self::NotBad => "#f97316",
            Self::KeepTrying => "#ef4444",
            Self::Poor => "#dc2626",
        }
    }
}

impl fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Encouragement text for a composite score.
#[must_use]
pub const fn score_description(score: u8) -> &'static str {
    ScoreBand::from_score(score).description()
}

/// Hex colour for a composite score.
#[must_use]
pub const fn score_color(score: u8) -> &'static str {
    ScoreBand::from_score(score).color()
}
