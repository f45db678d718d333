//! Translation of ECMA-262 regular expressions into the dialect understood
//! by `fancy-regex`. Draft-6 specifies ECMA-262 syntax for `pattern` and
//! `patternProperties`; the differences that matter in practice are the
//! shorthand character classes and `\cX` control escapes.
use std::ops::Index;

lazy_static::lazy_static! {
    // Use regex::Regex here to take advantage of the replace_all method
    // not available in fancy_regex::Regex
    static ref CONTROL_GROUPS_RE: regex::Regex =
        regex::Regex::new(r"\\c[A-Za-z]").expect("Is a valid regex");
}

/// Compile an ECMA-262 pattern. Matching is unanchored: the pattern may
/// match anywhere in the instance string.
pub(crate) fn convert_regex(pattern: &str) -> Result<fancy_regex::Regex, fancy_regex::Error> {
    // replace control chars
    let new_pattern = CONTROL_GROUPS_RE.replace_all(pattern, replace_control_group);
    let mut out = String::with_capacity(new_pattern.len());
    let mut chars = new_pattern.chars().peekable();
    // To convert character group we need to iterate over chars and in case of `\` take a look
    // at the next char to detect whether this group should be converted
    while let Some(current) = chars.next() {
        if current == '\\' {
            // Possible character group
            if let Some(next) = chars.next() {
                match next {
                    'd' => out.push_str("[0-9]"),
                    'D' => out.push_str("[^0-9]"),
                    'w' => out.push_str("[A-Za-z0-9_]"),
                    'W' => out.push_str("[^A-Za-z0-9_]"),
                    's' => {
                        out.push_str("[ \t\n\r\u{000b}\u{000c}\u{2003}\u{feff}\u{2029}\u{00a0}]")
                    }
                    'S' => {
                        out.push_str("[^ \t\n\r\u{000b}\u{000c}\u{2003}\u{feff}\u{2029}\u{00a0}]")
                    }
                    _ => {
                        // Nothing interesting, push as is
                        out.push(current);
                        out.push(next)
                    }
                }
            } else {
                // End of the string, push the last char.
                // Note that it is an incomplete escape sequence and will lead to an error on
                // the next step
                out.push(current);
            }
        } else {
            // Regular character
            out.push(current);
        }
    }
    fancy_regex::Regex::new(&out)
}

fn replace_control_group(captures: &regex::Captures) -> String {
    // There will be no overflow, because the minimum value is 65 (char 'A')
    ((captures
        .index(0)
        .trim_start_matches(r"\c")
        .chars()
        .next()
        .expect("This is always present because of the regex rule. It has [A-Za-z] next")
        .to_ascii_uppercase() as u8
        - 64) as char)
        .to_string()
}

/// A pattern that exceeds the backtracking limit counts as not matching.
#[inline]
pub(crate) fn is_match(pattern: &fancy_regex::Regex, instance: &str) -> bool {
    pattern.is_match(instance).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(r"^\d+$", "123", true)]
    #[test_case(r"^\d+$", "1a3", false)]
    #[test_case(r"\w", "_", true)]
    #[test_case(r"\W", "_", false)]
    #[test_case(r"\cC", "\u{3}", true; "control escape")]
    #[test_case("a+", "baaac", true; "unanchored")]
    fn translated_patterns(pattern: &str, instance: &str, expected: bool) {
        let re = convert_regex(pattern).unwrap();
        assert_eq!(is_match(&re, instance), expected);
    }

    #[test]
    fn lookahead_is_supported() {
        let re = convert_regex(r"^(?=a)a\d$").unwrap();
        assert!(is_match(&re, "a1"));
        assert!(!is_match(&re, "b1"));
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        assert!(convert_regex("(unclosed").is_err());
    }
}
