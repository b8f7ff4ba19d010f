//! The four independent sub-scores.
//!
//! Each function returns a value in `0.0..=100.0`. Ratios guard a zero
//! denominator by returning `0.0`.

use std::collections::BTreeSet;

use navigator_core::{Direction, NormalizedRoute};

/// Street-name overlap, relative to the larger of the two street sets.
///
/// # Examples
/// ```
/// use std::collections::BTreeSet;
/// use navigator_scorer::subscores::route_match;
///
/// let user: BTreeSet<String> = ["main st".to_owned()].into();
/// let reference: BTreeSet<String> = ["main st".to_owned(), "oak ave".to_owned()].into();
/// assert_eq!(route_match(&user, &reference), 50.0);
/// ```
#[must_use]
pub fn route_match(user: &BTreeSet<String>, reference: &BTreeSet<String>) -> f64 {
    let matched = user.intersection(reference).count();
    percentage(matched, user.len().max(reference.len()))
}

/// Share of the reference route's known directions that the user mentioned.
///
/// `Unknown` steps carry no direction and are left out of the denominator.
#[must_use]
pub fn direction_accuracy(user: &[String], reference: &BTreeSet<Direction>) -> f64 {
    let known: Vec<Direction> = reference
        .iter()
        .copied()
        .filter(|direction| direction.is_known())
        .collect();
    let matched = known
        .iter()
        .filter(|direction| user.iter().any(|word| word == direction.as_str()))
        .count();
    percentage(matched, known.len())
}

/// Step function over the number of distinct landmarks mentioned.
#[must_use]
pub const fn landmark_mention(count: usize) -> f64 {
    match count {
        0 => 0.0,
        1 => 40.0,
        2 => 70.0,
        _ => 100.0,
    }
}

/// Additive rubric for length and feature variety, capped at 100.
#[expect(
    clippy::float_arithmetic,
    reason = "the rubric sums fixed bonuses"
)]
#[must_use]
pub fn completeness(route: &NormalizedRoute) -> f64 {
    let length_bonus = match route.word_count {
        50.. => 30.0,
        30.. => 20.0,
        15.. => 10.0,
        _ => 0.0,
    };
    let bonuses = [
        (!route.directions.is_empty(), 20.0),
        (!route.streets.is_empty(), 20.0),
        (!route.landmarks.is_empty(), 20.0),
        (!route.distances.is_empty(), 10.0),
    ];
    let feature_bonus: f64 = bonuses
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, bonus)| bonus)
        .sum();
    (length_bonus + feature_bonus).min(100.0)
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "ratios of small set sizes are scaled to a percentage"
)]
const fn percentage(matched: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    matched as f64 / denominator as f64 * 100.0
}
