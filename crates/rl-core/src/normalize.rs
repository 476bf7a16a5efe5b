//! Field-level cleanup for raw extract values
//!
//! Operator-supplied extracts mix date formats, decorative place-name
//! suffixes, and punctuation-laden phone numbers. Every function here is
//! total: malformed input maps to `None`, never to an error.

/// Split a full name into a first name and the remaining tokens.
///
/// Leading/trailing/internal whitespace runs are collapsed during the split,
/// so pre-trimming the input does not change the result.
pub fn split_full_name(text: &str) -> (Option<String>, Option<String>) {
    let mut parts = text.split_whitespace();
    let first = parts.next().map(str::to_string);
    let rest: Vec<&str> = parts.collect();
    let last = if rest.is_empty() {
        None
    } else {
        Some(rest.join(" "))
    };
    (first, last)
}

/// Reduce a phone number to its digits.
///
/// Blank input and the `-` placeholder mean the number was never recorded.
/// Input with no digits at all (e.g. `"()"`) is also treated as absent.
pub fn clean_phone(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "-" {
        return None;
    }
    let digits: String = trimmed.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Take the date portion of a combined date-time string.
///
/// `"2024-08-21 00:00:00"` becomes `"2024-08-21"`; blank input is absent.
pub fn date_part(text: &str) -> Option<String> {
    text.split_whitespace().next().map(str::to_string)
}

/// Drop decorative parenthetical suffixes from a place name.
///
/// `"İstanbul (Avrupa)"` becomes `"İstanbul"`. Every balanced `(...)`
/// segment is removed together with the whitespace around it; an unmatched
/// opening parenthesis is kept as-is. Blank results are absent.
pub fn strip_parenthetical(text: &str) -> Option<String> {
    let mut rest = text.trim();
    if rest.is_empty() {
        return None;
    }

    let mut cleaned = String::with_capacity(rest.len());
    loop {
        match rest.find('(') {
            Some(open) => match rest[open..].find(')') {
                Some(close) => {
                    cleaned.push_str(&rest[..open]);
                    rest = &rest[open + close + 1..];
                }
                None => {
                    cleaned.push_str(rest);
                    break;
                }
            },
            None => {
                cleaned.push_str(rest);
                break;
            }
        }
    }

    let cleaned = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned)
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
