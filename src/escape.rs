//! Escaping for the remote store's query language.
//!
//! The store's wire format reserves ten characters; every field name
//! and value sent with a find, create, or field assignment must have
//! them rewritten. The substitutions are fixed by the remote parser,
//! including the asymmetric encodings it uses for angle brackets.

use std::borrow::Cow;

/// Substitutions understood by the remote query parser, applied in a
/// single pass. Replacement text never contains a character that is
/// itself rewritten, so one pass is exact.
const ESCAPES: [(char, &str); 10] = [
    ('\\', "\\\\"),
    ('/', "\\/"),
    ('\0', "\\0"),
    ('\n', "\\n"),
    ('\r', "\\r"),
    ('\'', "\\'"),
    ('"', "\\\""),
    ('\u{1a}', "\\Z"),
    ('<', "\\<\\/"),
    ('>', "\\/>"),
];

fn is_special(ch: char) -> bool {
    ESCAPES.iter().any(|(c, _)| *c == ch)
}

/// Escape one string for the remote query language.
///
/// Clean input is returned borrowed.
#[must_use]
pub fn escape_str(input: &str) -> Cow<'_, str> {
    if !input.chars().any(is_special) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 2);
    for ch in input.chars() {
        match ESCAPES.iter().find(|(c, _)| *c == ch) {
            Some((_, replacement)) => out.push_str(replacement),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Escape a list of strings element-wise.
#[must_use]
pub fn escape_all<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| escape_str(value.as_ref()).into_owned())
        .collect()
}

/// Invert [`escape_str`].
///
/// The angle-bracket encodings overlap with the slash encoding, so
/// sequences are matched longest first: `\<\/` (for `<`) and `\/>`
/// (for `>`) before the two-character forms. A backslash that starts
/// no known sequence is kept as-is.
#[must_use]
pub fn unescape_str(input: &str) -> Cow<'_, str> {
    if !input.contains('\\') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(pos) = rest.find('\\') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let (decoded, used) = if tail.starts_with("\\<\\/") {
            ('<', 4)
        } else if tail.starts_with("\\/>") {
            ('>', 3)
        } else if tail.starts_with("\\\\") {
            ('\\', 2)
        } else if tail.starts_with("\\/") {
            ('/', 2)
        } else if tail.starts_with("\\0") {
            ('\0', 2)
        } else if tail.starts_with("\\n") {
            ('\n', 2)
        } else if tail.starts_with("\\r") {
            ('\r', 2)
        } else if tail.starts_with("\\'") {
            ('\'', 2)
        } else if tail.starts_with("\\\"") {
            ('"', 2)
        } else if tail.starts_with("\\Z") {
            ('\u{1a}', 2)
        } else {
            ('\\', 1)
        };
        out.push(decoded);
        rest = &tail[used..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_every_special_character() {
        assert_eq!(escape_str("\\"), "\\\\");
        assert_eq!(escape_str("/"), "\\/");
        assert_eq!(escape_str("\0"), "\\0");
        assert_eq!(escape_str("\n"), "\\n");
        assert_eq!(escape_str("\r"), "\\r");
        assert_eq!(escape_str("'"), "\\'");
        assert_eq!(escape_str("\""), "\\\"");
        assert_eq!(escape_str("\u{1a}"), "\\Z");
        assert_eq!(escape_str("<"), "\\<\\/");
        assert_eq!(escape_str(">"), "\\/>");
    }

    #[test]
    fn clean_input_stays_borrowed() {
        assert!(matches!(escape_str("plain text"), Cow::Borrowed(_)));
        assert!(matches!(unescape_str("plain text"), Cow::Borrowed(_)));
    }

    #[test]
    fn mixed_input_escapes_in_place() {
        assert_eq!(escape_str("Jo\"e said 'hi'"), "Jo\\\"e said \\'hi\\'");
        assert_eq!(escape_str("a/b\\c"), "a\\/b\\\\c");
    }

    #[test]
    fn escape_all_is_element_wise() {
        let escaped = escape_all(["a/b", "plain", "q\"t"]);
        assert_eq!(escaped, vec!["a\\/b", "plain", "q\\\"t"]);
    }

    #[test]
    fn unescape_round_trips_every_special_character() {
        let nasty = "\\ / \0 \n \r ' \" \u{1a} < >";
        assert_eq!(unescape_str(&escape_str(nasty)), nasty);
    }

    #[test]
    fn angle_bracket_encodings_stay_unambiguous() {
        // "</" and "/>" mix the overlapping encodings.
        assert_eq!(unescape_str(&escape_str("</")), "</");
        assert_eq!(unescape_str(&escape_str("/>")), "/>");
        assert_eq!(unescape_str(&escape_str("<a>/b")), "<a>/b");
    }

    #[test]
    fn stray_backslash_is_preserved() {
        assert_eq!(unescape_str("\\q"), "\\q");
    }
}
