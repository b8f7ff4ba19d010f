//! Markup removal for reference route instructions.
//!
//! Directions services wrap street names in inline tags such as `<b>`. The
//! stripper is a single forward scan: every `<...>` span is dropped, and an
//! unterminated `<` is kept verbatim together with the rest of the text.
//! Common HTML entities are decoded afterwards, so decoded brackets survive as
//! text instead of being stripped a second time.

const ENTITIES: [(&str, char); 5] = [
    ("&lt;", '<'),
    ("&gt;", '>'),
    ("&amp;", '&'),
    ("&quot;", '"'),
    ("&#39;", '\''),
];

/// Remove inline tags and decode common HTML entities.
///
/// # Examples
/// ```
/// use navigator_core::strip_markup;
///
/// assert_eq!(strip_markup("Go <b>north</b> on Main St"), "Go north on Main St");
/// assert_eq!(strip_markup("Fish &amp; Chips"), "Fish & Chips");
/// ```
#[must_use]
pub fn strip_markup(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(open) = rest.find('<') {
        let (before, tail) = rest.split_at(open);
        text.push_str(before);
        if let Some(close) = tail.find('>') {
            rest = tail.get(close + 1..).unwrap_or_default();
        } else {
            text.push_str(tail);
            rest = "";
        }
    }
    text.push_str(rest);
    decode_entities(&text)
}

fn decode_entities(input: &str) -> String {
    let mut text = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        let (before, tail) = rest.split_at(amp);
        text.push_str(before);
        let entity = ENTITIES.iter().find(|(name, _)| tail.starts_with(name));
        let consumed = match entity {
            Some((name, decoded)) => {
                text.push(*decoded);
                name.len()
            }
            None => {
                text.push('&');
                1
            }
        };
        rest = tail.get(consumed..).unwrap_or_default();
    }
    text.push_str(rest);
    text
}
