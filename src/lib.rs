//! Facade crate for the blind-navigator route description scorer.
//!
//! This crate re-exports the description normaliser and reference route
//! types from `navigator-core` together with the scoring engine from
//! `navigator-scorer`.

#![forbid(unsafe_code)]

pub use navigator_core::{
    Direction, NormalizedRoute, ReferenceRoute, RouteAlternative, RouteLeg,
    RouteStep, RouteStepFeature, TextValue, extract_steps, normalize, normalize_opt,
    reference_directions, reference_streets, strip_markup,
};

#[cfg(feature = "serde")]
pub use navigator_core::ReferenceRouteError;

pub use navigator_scorer::{
    MAX_SCORE, RouteScorer, ScoreBand, ScoreBreakdown, ScoreResult, ScoreWeights,
    ScoreWeightsError, calculate_score, score_color, score_description,
};
