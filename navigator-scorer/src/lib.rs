//! Scoring of free-text route descriptions against a reference route.
//!
//! A description is normalised with [`navigator_core::normalize`], the
//! reference route is reduced to per-step features, and four independent
//! sub-scores are combined into a weighted composite:
//!
//! - **route match**: overlap of street names;
//! - **direction accuracy**: overlap of canonical step directions;
//! - **landmark mention**: a step function over landmarks named;
//! - **completeness**: a rubric rewarding length and feature variety.
//!
//! Feedback strings are generated from the breakdown, and
//! [`score_description`] and [`score_color`] band the composite for display.
//!
//! # Examples
//!
//! ```
//! use navigator_core::{ReferenceRoute, RouteStep};
//! use navigator_scorer::calculate_score;
//!
//! let reference = ReferenceRoute::from_steps(vec![RouteStep::new(
//!     "Head <b>north</b> on <b>Main Street</b>",
//!     "0.3 km",
//!     "4 mins",
//! )]);
//! let result = calculate_score("Go north on Main Street", Some(&reference));
//! assert_eq!(result.breakdown.route_match, 100.0);
//! assert_eq!(result.score, 74);
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

use navigator_core::{
    NormalizedRoute, ReferenceRoute, RouteStepFeature, extract_steps, normalize,
    reference_directions, reference_streets,
};

mod error;
pub mod feedback;
pub mod rating;
pub mod subscores;
mod types;

pub use error::ScoreWeightsError;
pub use rating::{ScoreBand, score_color, score_description};
pub use types::{MAX_SCORE, ScoreBreakdown, ScoreResult, ScoreWeights};

/// Scores route descriptions with a fixed set of weights.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RouteScorer {
    weights: ScoreWeights,
}

impl RouteScorer {
    /// Build a scorer from validated weights.
    ///
    /// # Errors
    /// Returns [`ScoreWeightsError`] when the weights fail
    /// [`ScoreWeights::validate`].
    pub fn new(weights: ScoreWeights) -> Result<Self, ScoreWeightsError> {
        Ok(Self {
            weights: weights.validate()?,
        })
    }

    /// Weights applied by this scorer.
    #[must_use]
    pub const fn weights(&self) -> ScoreWeights {
        self.weights
    }

    /// Score `user_text` against `reference`.
    ///
    /// Empty text or a missing reference yields [`ScoreResult::empty`].
    /// Whitespace-only text is scored normally and earns every suggestion.
    #[must_use]
    pub fn score(&self, user_text: &str, reference: Option<&ReferenceRoute>) -> ScoreResult {
        let Some(reference) = reference else {
            log::debug!("no reference route supplied; scoring as zero");
            return ScoreResult::empty();
        };
        if user_text.is_empty() {
            log::debug!("empty route description; scoring as zero");
            return ScoreResult::empty();
        }

        let route = normalize(user_text);
        let steps = extract_steps(reference);
        let breakdown = breakdown(&route, &steps);
        let score = self.composite(&breakdown);
        log::debug!(
            "scored description at {score}/{MAX_SCORE} over {} reference steps: {breakdown:?}",
            steps.len()
        );

        ScoreResult {
            score,
            max_score: MAX_SCORE,
            breakdown,
            feedback: feedback::feedback(&breakdown, &route),
        }
    }

    /// Round the weighted sum of `breakdown` into `0..=`[`MAX_SCORE`].
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "the rounded value is clamped into the u8 score range first"
    )]
    #[must_use]
    pub fn composite(&self, breakdown: &ScoreBreakdown) -> u8 {
        let weighted = self.weights.weighted_sum(breakdown);
        if !weighted.is_finite() {
            log::warn!("weighted score was not finite; scoring as zero");
            return 0;
        }
        weighted.round().clamp(0.0, f64::from(MAX_SCORE)) as u8
    }
}

/// Compute the four sub-scores for a normalised description.
#[must_use]
pub fn breakdown(route: &NormalizedRoute, steps: &[RouteStepFeature]) -> ScoreBreakdown {
    ScoreBreakdown {
        route_match: subscores::route_match(&route.streets, &reference_streets(steps)),
        direction_accuracy: subscores::direction_accuracy(
            &route.directions,
            &reference_directions(steps),
        ),
        landmark_mention: subscores::landmark_mention(route.landmarks.len()),
        completeness: subscores::completeness(route),
    }
}

/// Score `user_text` against `reference` with the default weights.
#[must_use]
pub fn calculate_score(user_text: &str, reference: Option<&ReferenceRoute>) -> ScoreResult {
    RouteScorer::default().score(user_text, reference)
}

#[cfg(test)]
mod tests;
