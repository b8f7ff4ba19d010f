//! Unit coverage for composite route scoring.
#![forbid(unsafe_code)]

use navigator_core::{ReferenceRoute, RouteStep};
use rstest::{fixture, rstest};

use crate::feedback::PRAISE;
use crate::{
    MAX_SCORE, RouteScorer, ScoreBreakdown, ScoreResult, ScoreWeights, ScoreWeightsError,
    calculate_score,
};

#[fixture]
fn main_street_north() -> ReferenceRoute {
    ReferenceRoute::from_steps(vec![RouteStep::new(
        "Head <b>north</b> on <b>Main Street</b>",
        "0.3 km",
        "4 mins",
    )])
}

#[fixture]
fn two_turns() -> ReferenceRoute {
    ReferenceRoute::from_steps(vec![
        RouteStep::new("Head <b>north</b> on <b>Main St</b>", "0.2 km", "3 mins"),
        RouteStep::new("Turn <b>left</b> onto <b>Oak Ave</b>", "0.4 km", "5 mins"),
        RouteStep::new("Destination will be on the right", "", ""),
    ])
}

fn only_route_match() -> ScoreWeights {
    ScoreWeights {
        route_match: 1.0,
        direction_accuracy: 0.0,
        landmark_mention: 0.0,
        completeness: 0.0,
    }
}

#[rstest]
fn matching_street_and_direction_score_seventy_four(main_street_north: ReferenceRoute) {
    let result = calculate_score("Go north on Main Street", Some(&main_street_north));

    assert_eq!(
        result.breakdown,
        ScoreBreakdown {
            route_match: 100.0,
            direction_accuracy: 100.0,
            landmark_mention: 0.0,
            completeness: 40.0,
        }
    );
    assert_eq!(result.score, 74);
    assert_eq!(result.max_score, MAX_SCORE);
    assert_eq!(result.feedback.len(), 3);
    assert!(!result.feedback.contains(&PRAISE.to_owned()));
}

#[rstest]
fn empty_description_short_circuits(main_street_north: ReferenceRoute) {
    assert_eq!(
        calculate_score("", Some(&main_street_north)),
        ScoreResult::empty()
    );
}

#[rstest]
#[case("   ")]
#[case("   \n\t")]
fn whitespace_description_earns_every_suggestion(
    main_street_north: ReferenceRoute,
    #[case] text: &str,
) {
    let result = calculate_score(text, Some(&main_street_north));
    assert_eq!(result.score, 0);
    assert_eq!(result.breakdown, ScoreBreakdown::default());
    assert_eq!(result.feedback.len(), 6);
    assert!(!result.feedback.contains(&PRAISE.to_owned()));
}

#[rstest]
fn missing_reference_short_circuits() {
    let result = calculate_score("Go north on Main Street", None);
    assert_eq!(result, ScoreResult::empty());
    assert!(result.feedback.is_empty());
}

#[rstest]
fn identical_streets_and_directions_score_full_marks(two_turns: ReferenceRoute) {
    let result = calculate_score("north left right Main St Oak Ave", Some(&two_turns));
    assert_eq!(result.breakdown.route_match, 100.0);
    assert_eq!(result.breakdown.direction_accuracy, 100.0);
}

#[rstest]
#[expect(
    clippy::float_arithmetic,
    reason = "test uses float maths for assertions"
)]
fn unmentioned_reference_directions_lower_accuracy(two_turns: ReferenceRoute) {
    let result = calculate_score("north left Main St Oak Ave", Some(&two_turns));
    let accuracy = result.breakdown.direction_accuracy;
    assert!(
        (accuracy - 200.0 / 3.0).abs() < 1e-9,
        "expected two thirds, got {accuracy}"
    );
}

#[rstest]
fn arrival_steps_do_not_lower_direction_accuracy() {
    let reference = ReferenceRoute::from_steps(vec![
        RouteStep::new("Head <b>north</b> on <b>Main Street</b>", "0.3 km", "4 mins"),
        RouteStep::new("Arrive at destination", "", ""),
    ]);
    let result = calculate_score("Go north on Main Street", Some(&reference));
    assert_eq!(result.breakdown.direction_accuracy, 100.0);
    assert_eq!(result.score, 74);
}

#[rstest]
fn thorough_description_earns_full_marks(main_street_north: ReferenceRoute) {
    let mut text =
        "Head north on Main Street for 2 blocks past the park, the museum and the library. "
            .to_owned();
    text.push_str(&"Keep walking steadily. ".repeat(20));

    let result = calculate_score(&text, Some(&main_street_north));

    assert_eq!(result.score, MAX_SCORE);
    assert_eq!(result.feedback, vec![PRAISE.to_owned()]);
}

#[rstest]
fn reference_without_steps_scores_only_the_description() {
    let result = calculate_score("turn left at the park", Some(&ReferenceRoute::default()));
    assert_eq!(result.breakdown.route_match, 0.0);
    assert_eq!(result.breakdown.direction_accuracy, 0.0);
    assert_eq!(result.breakdown.landmark_mention, 40.0);
    assert_eq!(result.breakdown.completeness, 40.0);
    assert_eq!(result.score, 12);
}

#[rstest]
#[case(ScoreWeights { route_match: f64::NAN, ..ScoreWeights::default() },
       ScoreWeightsError::NonFinite { component: "route match" })]
#[case(ScoreWeights { completeness: f64::INFINITY, ..ScoreWeights::default() },
       ScoreWeightsError::NonFinite { component: "completeness" })]
#[case(ScoreWeights { landmark_mention: -0.1, ..ScoreWeights::default() },
       ScoreWeightsError::Negative { component: "landmark mention" })]
#[case(ScoreWeights { route_match: 0.0, direction_accuracy: 0.0, landmark_mention: 0.0, completeness: 0.0 },
       ScoreWeightsError::ZeroTotal)]
fn invalid_weights_are_rejected(#[case] weights: ScoreWeights, #[case] expected: ScoreWeightsError) {
    assert_eq!(RouteScorer::new(weights), Err(expected));
}

#[rstest]
fn custom_weights_drive_the_composite(main_street_north: ReferenceRoute) {
    let scorer = RouteScorer::new(only_route_match()).expect("valid weights");
    let result = scorer.score("Go north on Main Street", Some(&main_street_north));
    assert_eq!(scorer.weights(), only_route_match());
    assert_eq!(result.score, 100);
}

#[rstest]
fn composite_rounds_half_away_from_zero() {
    let scorer = RouteScorer::new(only_route_match()).expect("valid weights");
    let breakdown = ScoreBreakdown {
        route_match: 72.5,
        ..ScoreBreakdown::default()
    };
    assert_eq!(scorer.composite(&breakdown), 73);
}

#[rstest]
fn composite_is_clamped_to_the_maximum() {
    let heavy = ScoreWeights {
        route_match: 2.0,
        direction_accuracy: 2.0,
        landmark_mention: 2.0,
        completeness: 2.0,
    };
    let scorer = RouteScorer::new(heavy).expect("valid weights");
    let breakdown = ScoreBreakdown {
        route_match: 100.0,
        direction_accuracy: 100.0,
        landmark_mention: 100.0,
        completeness: 100.0,
    };
    assert_eq!(scorer.composite(&breakdown), MAX_SCORE);
}

#[cfg(feature = "serde")]
#[rstest]
fn score_result_serialises_in_camel_case(main_street_north: ReferenceRoute) {
    let result = calculate_score("Go north on Main Street", Some(&main_street_north));
    let json = serde_json::to_value(&result).expect("serialise result");
    assert_eq!(json["maxScore"], 100);
    assert_eq!(json["breakdown"]["routeMatch"], 100.0);
    assert_eq!(json["breakdown"]["directionAccuracy"], 100.0);
}

#[rstest]
fn scorer_can_be_shared_across_threads() {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RouteScorer>();
}
