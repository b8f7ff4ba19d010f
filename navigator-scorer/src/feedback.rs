//! Human-readable suggestions derived from a score breakdown.

use navigator_core::NormalizedRoute;

use crate::ScoreBreakdown;

/// Sub-scores below this value earn a suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 50.0;

/// Descriptions with fewer words than this are called out as short.
pub const SHORT_DESCRIPTION_WORDS: usize = 20;

const MORE_STREETS: &str = "Try to mention more specific street names or landmarks along the route.";
const MORE_DIRECTIONS: &str = "Include more directional information (left, right, north, south, etc.).";
const MORE_LANDMARKS: &str = "Mention notable landmarks to make your directions easier to follow.";
const MORE_DETAIL: &str = "Provide more detail about the route.";
const TOO_SHORT: &str = "Your description is quite short. Try adding more detail.";
const NO_DIRECTIONS: &str = "Include directional instructions like 'turn left' or 'head north'.";

/// Message emitted when no other suggestion applies.
pub const PRAISE: &str = "Great job! Your directions are clear and detailed.";

/// Build the ordered feedback for a scored description.
///
/// Every rule is checked independently, so several suggestions may apply at
/// once. [`PRAISE`] is returned alone when none do.
///
/// # Examples
/// ```
/// use navigator_core::normalize;
/// use navigator_scorer::{ScoreBreakdown, feedback::{PRAISE, feedback}};
///
/// let breakdown = ScoreBreakdown {
///     route_match: 100.0,
///     direction_accuracy: 100.0,
///     landmark_mention: 100.0,
///     completeness: 100.0,
/// };
/// let words = "head north past the park ".repeat(5);
/// assert_eq!(feedback(&breakdown, &normalize(&words)), vec![PRAISE.to_owned()]);
/// ```
#[must_use]
pub fn feedback(breakdown: &ScoreBreakdown, route: &NormalizedRoute) -> Vec<String> {
    let rules = [
        (breakdown.route_match < SUGGESTION_THRESHOLD, MORE_STREETS),
        (
            breakdown.direction_accuracy < SUGGESTION_THRESHOLD,
            MORE_DIRECTIONS,
        ),
        (
            breakdown.landmark_mention < SUGGESTION_THRESHOLD,
            MORE_LANDMARKS,
        ),
        (breakdown.completeness < SUGGESTION_THRESHOLD, MORE_DETAIL),
        (route.word_count < SHORT_DESCRIPTION_WORDS, TOO_SHORT),
        (route.directions.is_empty(), NO_DIRECTIONS),
    ];
    let messages: Vec<String> = rules
        .iter()
        .filter(|(fired, _)| *fired)
        .map(|(_, message)| (*message).to_owned())
        .collect();
    if messages.is_empty() {
        vec![PRAISE.to_owned()]
    } else {
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use navigator_core::normalize;
    use rstest::rstest;

    const PERFECT: ScoreBreakdown = ScoreBreakdown {
        route_match: 100.0,
        direction_accuracy: 100.0,
        landmark_mention: 100.0,
        completeness: 100.0,
    };

    #[rstest]
    fn every_rule_fires_for_an_empty_description() {
        let messages = feedback(&ScoreBreakdown::default(), &normalize(""));
        assert_eq!(
            messages,
            vec![
                MORE_STREETS,
                MORE_DIRECTIONS,
                MORE_LANDMARKS,
                MORE_DETAIL,
                TOO_SHORT,
                NO_DIRECTIONS,
            ]
        );
    }

    #[rstest]
    fn praise_is_exclusive() {
        let route = normalize(&"turn left at the bank ".repeat(4));
        assert_eq!(feedback(&PERFECT, &route), vec![PRAISE.to_owned()]);
    }

    #[rstest]
    fn short_descriptions_are_flagged_even_with_perfect_scores() {
        let route = normalize("turn left at the bank");
        assert_eq!(feedback(&PERFECT, &route), vec![TOO_SHORT.to_owned()]);
    }

    #[rstest]
    fn threshold_is_exclusive() {
        let breakdown = ScoreBreakdown {
            route_match: SUGGESTION_THRESHOLD,
            ..PERFECT
        };
        let route = normalize(&"turn left at the bank ".repeat(4));
        assert_eq!(feedback(&breakdown, &route), vec![PRAISE.to_owned()]);
    }

    #[rstest]
    #[case(ScoreBreakdown { route_match: 49.9, ..PERFECT }, MORE_STREETS)]
    #[case(ScoreBreakdown { direction_accuracy: 0.0, ..PERFECT }, MORE_DIRECTIONS)]
    #[case(ScoreBreakdown { landmark_mention: 40.0, ..PERFECT }, MORE_LANDMARKS)]
    #[case(ScoreBreakdown { completeness: 30.0, ..PERFECT }, MORE_DETAIL)]
    fn each_low_component_gets_its_own_message(
        #[case] breakdown: ScoreBreakdown,
        #[case] expected: &str,
    ) {
        let route = normalize(&"turn left at the bank ".repeat(4));
        assert_eq!(feedback(&breakdown, &route), vec![expected.to_owned()]);
    }

    #[rstest]
    fn missing_directions_are_flagged() {
        let route = normalize(&"walk past the bank ".repeat(5));
        assert_eq!(feedback(&PERFECT, &route), vec![NO_DIRECTIONS.to_owned()]);
    }
}
