//! Fixed keyword vocabularies consulted when analysing route descriptions.
//!
//! The lists are compile-time constants. Direction and landmark words are
//! matched by substring presence, so every entry is tested exactly once and
//! results never contain duplicates.

/// Direction and movement keywords.
pub const DIRECTION_WORDS: [&str; 12] = [
    "north", "south", "east", "west", "left", "right", "straight", "forward", "turn", "continue",
    "head", "go",
];

/// Street-name suffixes. Each suffix gets its own matcher.
pub const STREET_SUFFIXES: [&str; 13] = [
    "street",
    "st",
    "avenue",
    "ave",
    "road",
    "rd",
    "drive",
    "dr",
    "lane",
    "ln",
    "way",
    "boulevard",
    "blvd",
];

/// Landmark keywords.
pub const LANDMARK_WORDS: [&str; 16] = [
    "park",
    "church",
    "school",
    "hospital",
    "mall",
    "store",
    "restaurant",
    "cafe",
    "bank",
    "library",
    "museum",
    "bridge",
    "station",
    "plaza",
    "square",
    "center",
];

/// Distance and time units, longer spellings first.
pub const DISTANCE_UNITS: [&str; 14] = [
    "kilometers",
    "kilometer",
    "minutes",
    "minute",
    "meters",
    "meter",
    "blocks",
    "block",
    "miles",
    "mile",
    "km",
    "min",
    "mi",
    "m",
];

/// Return the vocabulary entries that occur anywhere in `text`.
///
/// Results keep vocabulary order. `text` is expected to be lowercased.
pub(crate) fn present_in(text: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|word| text.contains(**word))
        .map(|word| (*word).to_owned())
        .collect()
}
