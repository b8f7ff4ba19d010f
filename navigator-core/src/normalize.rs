//! Route description normalisation.
//!
//! Turns a free-text route description into the structured features the
//! scorer compares against a reference route: direction keywords, street
//! phrases, landmark keywords, distance tokens, and a word count.

use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scan::{PhraseMatcher, QuantityMatcher, Token, tokenize};
use crate::vocabulary::{
    DIRECTION_WORDS, DISTANCE_UNITS, LANDMARK_WORDS, STREET_SUFFIXES, present_in,
};

/// Structured features extracted from a route description.
///
/// # Examples
/// ```
/// use navigator_core::normalize;
///
/// let route = normalize("Go north on Main Street past the park, about 2 km");
/// assert_eq!(route.directions, vec!["north", "go"]);
/// assert!(route.streets.contains("main street"));
/// assert_eq!(route.landmarks, vec!["park"]);
/// assert!(route.distances.contains("2 km"));
/// assert_eq!(route.word_count, 11);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct NormalizedRoute {
    /// Input exactly as supplied.
    pub original: String,
    /// Lowercased and trimmed input.
    pub cleaned: String,
    /// Direction keywords present, in vocabulary order.
    pub directions: Vec<String>,
    /// Street phrases such as `main street`.
    pub streets: BTreeSet<String>,
    /// Landmark keywords present, in vocabulary order.
    pub landmarks: Vec<String>,
    /// Distance and time tokens such as `2 km` or `5min`.
    pub distances: BTreeSet<String>,
    /// Number of whitespace-separated words.
    pub word_count: usize,
}

impl NormalizedRoute {
    /// Report whether the description contained no words.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word_count == 0
    }
}

/// Normalise a route description.
///
/// Total over all inputs: empty or whitespace-only text yields empty
/// features and a word count of zero.
#[must_use]
pub fn normalize(route: &str) -> NormalizedRoute {
    let cleaned = route.trim().to_lowercase();
    if cleaned.is_empty() {
        return NormalizedRoute {
            original: route.to_owned(),
            ..NormalizedRoute::default()
        };
    }

    let tokens = tokenize(&cleaned);
    let directions = present_in(&cleaned, &DIRECTION_WORDS);
    let streets = street_phrases(&cleaned, &tokens);
    let landmarks = present_in(&cleaned, &LANDMARK_WORDS);
    let distances = distance_phrases(&cleaned, &tokens);
    let word_count = cleaned.split_whitespace().count();

    NormalizedRoute {
        original: route.to_owned(),
        cleaned,
        directions,
        streets,
        landmarks,
        distances,
        word_count,
    }
}

/// Normalise optional text, treating `None` like an empty description.
#[must_use]
pub fn normalize_opt(route: Option<&str>) -> NormalizedRoute {
    normalize(route.unwrap_or_default())
}

/// Extract street phrases (`<word> <suffix>`) from arbitrary text.
///
/// Each suffix is matched by its own single-pass matcher over the token
/// list. Results are lowercased and deduplicated.
#[must_use]
pub fn extract_streets(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    street_phrases(&lowered, &tokenize(&lowered))
}

/// Extract distance and time tokens (`<digits> <unit>`) from arbitrary text.
#[must_use]
pub fn extract_distances(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    distance_phrases(&lowered, &tokenize(&lowered))
}

fn street_phrases(lowered: &str, tokens: &[Token<'_>]) -> BTreeSet<String> {
    STREET_SUFFIXES
        .iter()
        .copied()
        .map(PhraseMatcher::new)
        .flat_map(|matcher| matcher.find_all(lowered, tokens))
        .map(|phrase| phrase.trim().to_owned())
        .collect()
}

fn distance_phrases(lowered: &str, tokens: &[Token<'_>]) -> BTreeSet<String> {
    DISTANCE_UNITS
        .iter()
        .copied()
        .map(QuantityMatcher::new)
        .flat_map(|matcher| matcher.find_all(lowered, tokens))
        .map(|phrase| phrase.trim().to_owned())
        .collect()
}
