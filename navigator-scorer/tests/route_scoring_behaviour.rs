#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for scoring route descriptions.

use std::cell::RefCell;

use navigator_core::{ReferenceRoute, RouteStep};
use navigator_scorer::{
    MAX_SCORE, ScoreBand, ScoreBreakdown, ScoreResult, calculate_score, feedback::PRAISE,
    score_description,
};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

/// Scenario state shared between steps.
struct TestContext {
    reference: RefCell<Option<ReferenceRoute>>,
    description: RefCell<String>,
    result: RefCell<Option<ScoreResult>>,
}

#[fixture]
fn context() -> TestContext {
    TestContext {
        reference: RefCell::new(None),
        description: RefCell::new(String::new()),
        result: RefCell::new(None),
    }
}

impl TestContext {
    fn result(&self) -> ScoreResult {
        self.result
            .borrow()
            .clone()
            .expect("description should be scored")
    }
}

#[given("a reference route heading north on Main Street")]
fn main_street_reference(context: &TestContext) {
    let reference = ReferenceRoute::from_steps(vec![
        RouteStep::new("Head <b>north</b> on <b>Main Street</b>", "0.3 km", "4 mins"),
        RouteStep::new("Destination will be ahead", "", ""),
    ]);
    *context.reference.borrow_mut() = Some(reference);
}

#[given("no reference route")]
fn no_reference(context: &TestContext) {
    *context.reference.borrow_mut() = None;
}

#[given("the description Go north on Main Street")]
fn short_description(context: &TestContext) {
    "Go north on Main Street".clone_into(&mut context.description.borrow_mut());
}

#[given("an empty description")]
fn empty_description(context: &TestContext) {
    context.description.borrow_mut().clear();
}

#[given("a thorough description of the route")]
fn thorough_description(context: &TestContext) {
    let mut text =
        "Head north on Main Street for 2 blocks past the park, the museum and the library. "
            .to_owned();
    text.push_str(&"Keep walking steadily. ".repeat(20));
    *context.description.borrow_mut() = text;
}

#[when("I score the description")]
fn score(context: &TestContext) {
    let result = calculate_score(
        &context.description.borrow(),
        context.reference.borrow().as_ref(),
    );
    *context.result.borrow_mut() = Some(result);
}

#[then("the route match is full")]
fn route_match_full(context: &TestContext) {
    assert_eq!(context.result().breakdown.route_match, 100.0);
}

#[then("the direction accuracy is full")]
fn direction_accuracy_full(context: &TestContext) {
    assert_eq!(context.result().breakdown.direction_accuracy, 100.0);
}

#[then("the overall score is 74")]
fn score_is_74(context: &TestContext) {
    assert_eq!(context.result().score, 74);
}

#[then("the overall score is 0")]
fn score_is_zero(context: &TestContext) {
    let result = context.result();
    assert_eq!(result.score, 0);
    assert_eq!(result.max_score, MAX_SCORE);
}

#[then("the overall score is 100")]
fn score_is_full(context: &TestContext) {
    assert_eq!(context.result().score, MAX_SCORE);
}

#[then("the feedback asks for landmarks and more detail")]
fn asks_for_landmarks(context: &TestContext) {
    let feedback = context.result().feedback;
    assert_eq!(feedback.len(), 3, "feedback was {feedback:?}");
    assert!(feedback.iter().any(|message| message.contains("landmarks")));
    assert!(feedback.iter().any(|message| message.contains("more detail")));
    assert!(feedback.iter().any(|message| message.contains("quite short")));
}

#[then("every breakdown component is zero")]
fn breakdown_is_zero(context: &TestContext) {
    assert_eq!(context.result().breakdown, ScoreBreakdown::default());
}

#[then("no feedback is given")]
fn no_feedback(context: &TestContext) {
    assert!(context.result().feedback.is_empty());
}

#[then("only praise is given")]
fn only_praise(context: &TestContext) {
    assert_eq!(context.result().feedback, vec![PRAISE.to_owned()]);
}

#[then("the score is described as excellent")]
fn described_as_excellent(context: &TestContext) {
    let score = context.result().score;
    assert_eq!(ScoreBand::from_score(score), ScoreBand::Excellent);
    assert_eq!(score_description(score), ScoreBand::Excellent.description());
}

#[scenario(path = "tests/features/route_scoring.feature", index = 0)]
fn matching_description(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/route_scoring.feature", index = 1)]
fn empty_description_scores_zero(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/route_scoring.feature", index = 2)]
fn missing_reference_scores_zero(context: TestContext) {
    let _ = context;
}

#[scenario(path = "tests/features/route_scoring.feature", index = 3)]
fn thorough_description_scores_full(context: TestContext) {
    let _ = context;
}
