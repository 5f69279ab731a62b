//! Hyphen disambiguation for single tokens.

use std::borrow::Cow;

/// Decides, for each hyphen in `token`, whether it separates words or glues
/// an alphanumeric compound.
///
/// A hyphen flanked by letters on both sides becomes a space
/// (`state-of-the-art` → `state of the art`); any other hyphen is dropped and
/// its fragments joined (`covid-19` → `covid19`). One leading and one
/// trailing hyphen are stripped first. Tokens of two characters or fewer are
/// returned untouched.
///
/// # Examples
///
/// ```
/// use abstracts_core::clean::normalize_hyphens;
///
/// assert_eq!(normalize_hyphens("covid-19"), "covid19");
/// assert_eq!(normalize_hyphens("state-of-the-art"), "state of the art");
/// assert_eq!(normalize_hyphens("-abc-"), "abc");
/// ```
#[must_use]
pub fn normalize_hyphens(token: &str) -> Cow<'_, str> {
    if token.chars().count() <= 2 {
        return Cow::Borrowed(token);
    }

    let trimmed = token.strip_prefix('-').unwrap_or(token);
    let trimmed = trimmed.strip_suffix('-').unwrap_or(trimmed);
    if !trimmed.contains('-') {
        return Cow::Borrowed(trimmed);
    }

    let mut fragments = trimmed.split('-');
    let mut joined = String::with_capacity(trimmed.len());
    let mut previous = fragments.next().unwrap_or_default();
    joined.push_str(previous);

    for fragment in fragments {
        if separates_words(previous, fragment) {
            joined.push(' ');
        }
        joined.push_str(fragment);
        previous = fragment;
    }

    Cow::Owned(joined)
}

/// Empty fragments have no boundary character and never separate words.
fn separates_words(left: &str, right: &str) -> bool {
    left.chars().next_back().is_some_and(char::is_alphabetic)
        && right.chars().next().is_some_and(char::is_alphabetic)
}
