//! Feature extraction for reference route steps.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Direction, ReferenceRoute, RouteStep, extract_streets, strip_markup};

/// A reference step reduced to the features the scorer compares.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RouteStepFeature {
    /// Markup-free, lowercased instruction.
    pub instruction: String,
    /// Human-readable distance for the step.
    pub distance: String,
    /// Human-readable duration for the step.
    pub duration: String,
    /// Canonical direction, decided by first-match precedence.
    pub direction: Direction,
}

impl RouteStepFeature {
    /// Strip markup from a step and classify its direction.
    ///
    /// # Examples
    /// ```
    /// use navigator_core::{Direction, RouteStep, RouteStepFeature};
    ///
    /// let step = RouteStep::new("Turn <b>left</b> onto <b>North St</b>", "0.2 km", "1 min");
    /// let feature = RouteStepFeature::from_step(&step);
    /// assert_eq!(feature.instruction, "turn left onto north st");
    /// assert_eq!(feature.direction, Direction::Left);
    /// ```
    #[must_use]
    pub fn from_step(step: &RouteStep) -> Self {
        let instruction = strip_markup(&step.instructions).trim().to_lowercase();
        let direction = Direction::from_instruction(&instruction);
        Self {
            instruction,
            distance: step.distance.text.clone(),
            duration: step.duration.text.clone(),
            direction,
        }
    }
}

/// Extract step features from the primary leg of `reference`.
///
/// Returns an empty list when the reference has no route alternatives or the
/// first alternative has no legs.
#[must_use]
pub fn extract_steps(reference: &ReferenceRoute) -> Vec<RouteStepFeature> {
    let Some(leg) = reference.primary_leg() else {
        log::debug!("reference route has no primary leg; no steps to extract");
        return Vec::new();
    };
    leg.steps.iter().map(RouteStepFeature::from_step).collect()
}

/// Union of street phrases mentioned across all step instructions.
#[must_use]
pub fn reference_streets(steps: &[RouteStepFeature]) -> BTreeSet<String> {
    steps
        .iter()
        .flat_map(|step| extract_streets(&step.instruction))
        .collect()
}

/// Distinct canonical directions across all steps, `Unknown` included.
#[must_use]
pub fn reference_directions(steps: &[RouteStepFeature]) -> BTreeSet<Direction> {
    steps.iter().map(|step| step.direction).collect()
}
