//! Error types raised while configuring the route scorer.
#![forbid(unsafe_code)]

use thiserror::Error;

/// Errors raised when score weights are unusable.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoreWeightsError {
    /// A weight was NaN or infinite.
    #[error("{component} weight must be finite")]
    NonFinite {
        /// Name of the offending breakdown component.
        component: &'static str,
    },
    /// A weight was below zero.
    #[error("{component} weight must not be negative")]
    Negative {
        /// Name of the offending breakdown component.
        component: &'static str,
    },
    /// Every weight was zero.
    #[error("weights must sum to a positive value")]
    ZeroTotal,
}
