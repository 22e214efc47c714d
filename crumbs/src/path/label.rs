//! Segment to label conversion.

/// Character that joins words inside a path segment.
pub const WORD_JOINER: char = '-';

/// Turn a path segment into a human-readable label.
///
/// Every hyphen becomes a single space, then the first character of each
/// whitespace-delimited word is upper-cased. All other characters are left
/// alone, including digits, punctuation, and letters that are already
/// upper-case. Non-ASCII letters follow [`char::to_uppercase`].
///
/// # Examples
///
/// ```
/// use crumbs::format_label;
///
/// assert_eq!(format_label("some-post-title"), "Some Post Title");
/// assert_eq!(format_label("already-Capitalized"), "Already Capitalized");
/// assert_eq!(format_label("v2-release"), "V2 Release");
/// assert_eq!(format_label(""), "");
/// ```
#[must_use]
pub fn format_label(segment: &str) -> String {
    let mut label = String::with_capacity(segment.len());
    let mut at_word_start = true;

    for c in segment.chars() {
        let c = if c == WORD_JOINER { ' ' } else { c };

        if c.is_whitespace() {
            at_word_start = true;
            label.push(c);
        } else if at_word_start {
            at_word_start = false;
            label.extend(c.to_uppercase());
        } else {
            label.push(c);
        }
    }

    label
}
