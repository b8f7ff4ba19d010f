//! Linear-time phrase matching over tokenised text.
//!
//! Text is split once into word tokens (maximal runs of ASCII alphanumerics
//! and `_`). Matchers then walk the token list in a single forward pass, so
//! the cost of a match stays proportional to the input length however the
//! input is shaped. No backtracking engine is involved.

/// A word token and its byte range within the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'a> {
    pub(crate) text: &'a str,
    pub(crate) start: usize,
    pub(crate) end: usize,
}

const fn is_word_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Split `text` into word tokens.
///
/// Token boundaries always fall on ASCII bytes, so every range is a valid
/// `str` boundary.
pub(crate) fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut open: Option<usize> = None;
    for (index, byte) in text.bytes().enumerate() {
        match (is_word_byte(byte), open) {
            (true, None) => open = Some(index),
            (false, Some(start)) => {
                tokens.extend(token(text, start, index));
                open = None;
            }
            _ => {}
        }
    }
    if let Some(start) = open {
        tokens.extend(token(text, start, text.len()));
    }
    tokens
}

fn token(text: &str, start: usize, end: usize) -> Option<Token<'_>> {
    text.get(start..end).map(|slice| Token {
        text: slice,
        start,
        end,
    })
}

/// Report whether the gap between two tokens is non-empty whitespace.
fn separated_by_whitespace(text: &str, left: &Token<'_>, right: &Token<'_>) -> bool {
    text.get(left.end..right.start)
        .is_some_and(|gap| !gap.is_empty() && gap.chars().all(char::is_whitespace))
}

/// Matches `<word> <keyword>`: any word token, whitespace, then `keyword` as
/// a whole word.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PhraseMatcher {
    keyword: &'static str,
}

impl PhraseMatcher {
    pub(crate) const fn new(keyword: &'static str) -> Self {
        Self { keyword }
    }

    /// Return every non-overlapping match, leftmost first.
    pub(crate) fn find_all<'a>(&self, text: &'a str, tokens: &[Token<'a>]) -> Vec<&'a str> {
        let mut found = Vec::new();
        let mut resume_at = 0;
        for (index, pair) in tokens.windows(2).enumerate() {
            if index < resume_at {
                continue;
            }
            let [word, keyword] = pair else {
                continue;
            };
            if keyword.text.eq_ignore_ascii_case(self.keyword)
                && separated_by_whitespace(text, word, keyword)
            {
                found.extend(text.get(word.start..keyword.end));
                resume_at = index + 2;
            }
        }
        found
    }
}

/// Matches a number followed by `unit` as a whole word, with optional
/// whitespace between them (`5 km`, `5km`).
#[derive(Debug, Clone, Copy)]
pub(crate) struct QuantityMatcher {
    unit: &'static str,
}

impl QuantityMatcher {
    pub(crate) const fn new(unit: &'static str) -> Self {
        Self { unit }
    }

    /// Return every non-overlapping match, leftmost first.
    pub(crate) fn find_all<'a>(&self, text: &'a str, tokens: &[Token<'a>]) -> Vec<&'a str> {
        let mut found = Vec::new();
        let mut skip_next = false;
        for (index, current) in tokens.iter().enumerate() {
            if skip_next {
                skip_next = false;
                continue;
            }
            let digits = current.text.bytes().take_while(u8::is_ascii_digit).count();
            if digits == 0 {
                continue;
            }
            let Some(rest) = current.text.get(digits..) else {
                continue;
            };
            if rest.eq_ignore_ascii_case(self.unit) {
                found.push(current.text);
                continue;
            }
            if !rest.is_empty() {
                continue;
            }
            let Some(next) = tokens.get(index + 1) else {
                continue;
            };
            if next.text.eq_ignore_ascii_case(self.unit)
                && separated_by_whitespace(text, current, next)
            {
                found.extend(text.get(current.start..next.end));
                skip_next = true;
            }
        }
        found
    }
}
