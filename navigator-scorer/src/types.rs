//! Public configuration and output types for route description scoring.
#![forbid(unsafe_code)]

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ScoreWeightsError;

/// Upper bound of every score and breakdown component.
pub const MAX_SCORE: u8 = 100;

/// Multipliers applied to each breakdown component to form the composite.
///
/// Weights are applied as given; the composite is clamped to
/// `0..=`[`MAX_SCORE`] afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoreWeights {
    /// Weight of the street-name overlap.
    pub route_match: f64,
    /// Weight of the direction overlap.
    pub direction_accuracy: f64,
    /// Weight of the landmark step function.
    pub landmark_mention: f64,
    /// Weight of the completeness rubric.
    pub completeness: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            route_match: 0.4,
            direction_accuracy: 0.3,
            landmark_mention: 0.2,
            completeness: 0.1,
        }
    }
}

impl ScoreWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when a weight is non-finite or negative,
    /// or when all weights are zero.
    pub fn validate(self) -> Result<Self, ScoreWeightsError> {
        for (component, weight) in self.named() {
            if !weight.is_finite() {
                return Err(ScoreWeightsError::NonFinite { component });
            }
            if weight < 0.0 {
                return Err(ScoreWeightsError::Negative { component });
            }
        }
        if self.named().iter().all(|(_, weight)| *weight == 0.0) {
            return Err(ScoreWeightsError::ZeroTotal);
        }
        Ok(self)
    }

    const fn named(self) -> [(&'static str, f64); 4] {
        [
            ("route match", self.route_match),
            ("direction accuracy", self.direction_accuracy),
            ("landmark mention", self.landmark_mention),
            ("completeness", self.completeness),
        ]
    }

    /// Weighted sum of a breakdown, unrounded.
    #[expect(
        clippy::float_arithmetic,
        reason = "the composite score is a weighted sum"
    )]
    #[must_use]
    pub const fn weighted_sum(self, breakdown: &ScoreBreakdown) -> f64 {
        breakdown.route_match * self.route_match
            + breakdown.direction_accuracy * self.direction_accuracy
            + breakdown.landmark_mention * self.landmark_mention
            + breakdown.completeness * self.completeness
    }
}

/// The four sub-scores behind a composite score, each in `0.0..=100.0`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoreBreakdown {
    /// Overlap between mentioned and reference street names.
    pub route_match: f64,
    /// Overlap between mentioned and reference directions.
    pub direction_accuracy: f64,
    /// Reward for mentioning landmarks.
    pub landmark_mention: f64,
    /// Rubric rewarding length and feature variety.
    pub completeness: f64,
}

/// Outcome of scoring one route description.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct ScoreResult {
    /// Rounded composite score.
    pub score: u8,
    /// Always [`MAX_SCORE`].
    pub max_score: u8,
    /// Sub-scores behind the composite.
    pub breakdown: ScoreBreakdown,
    /// Ordered suggestions for the player.
    pub feedback: Vec<String>,
}

impl ScoreResult {
    /// The result for a missing description or reference route: zero
    /// everywhere and no feedback.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            score: 0,
            max_score: MAX_SCORE,
            breakdown: ScoreBreakdown {
                route_match: 0.0,
                direction_accuracy: 0.0,
                landmark_mention: 0.0,
                completeness: 0.0,
            },
            feedback: Vec::new(),
        }
    }
}

impl Default for ScoreResult {
    fn default() -> Self {
        Self::empty()
    }
}
