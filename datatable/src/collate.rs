//! Natural-language string collation.
//!
//! Strings are compared the way people expect a sorted list to read, not by
//! code point. Comparison runs in levels, each consulted only when all the
//! previous ones tie:
//!
//! 1. Primary: base letters, ignoring case and diacritics. Whitespace sorts
//!    before punctuation, punctuation before digits, digits before letters.
//! 2. Secondary: diacritics. An unaccented letter sorts before its accented
//!    forms (`resume` < `résumé`).
//! 3. Tertiary: case. Lowercase sorts before uppercase (`alice` < `Alice`).
//! 4. Identical: the canonical decomposition, so that the order is total and
//!    canonically equivalent strings (NFC vs NFD) compare equal.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Broad character class used as the leading component of primary weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
enum CharClass {
    Whitespace,
    Punctuation,
    Digit,
    Letter,
    Other,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Whitespace
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else if c.is_control() || is_combining_mark(c) {
            CharClass::Other
        } else {
            CharClass::Punctuation
        }
    }
}

/// One collation element: a folded base character plus its accents and case.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Element {
    class: CharClass,
    base: char,
    marks: Vec<char>,
    upper: bool,
}

/// Precomputed sort key for a string.
///
/// Building the key once per value and comparing keys is cheaper than calling
/// [`collate`] repeatedly inside a sort.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollationKey {
    elements: Vec<Element>,
    decomposed: String,
}

impl CollationKey {
    /// Build the collation key for `text`.
    pub fn new(text: &str) -> Self {
        let decomposed: String = text.nfd().collect();
        let mut elements: Vec<Element> = Vec::with_capacity(decomposed.len());

        for c in decomposed.chars() {
            if is_combining_mark(c) {
                match elements.last_mut() {
                    Some(last) => last.marks.push(c),
                    // A mark with nothing to attach to stands on its own
                    None => elements.push(Element {
                        class: CharClass::Other,
                        base: c,
                        marks: Vec::new(),
                        upper: false,
                    }),
                }
                continue;
            }

            let upper = c.is_uppercase();
            for folded in c.to_lowercase() {
                elements.push(Element {
                    class: CharClass::of(folded),
                    base: folded,
                    marks: Vec::new(),
                    upper,
                });
            }
        }

        Self {
            elements,
            decomposed,
        }
    }

    fn primary(&self, other: &Self) -> Ordering {
        self.elements
            .iter()
            .map(|e| (e.class, e.base))
            .cmp(other.elements.iter().map(|e| (e.class, e.base)))
    }

    fn secondary(&self, other: &Self) -> Ordering {
        self.elements
            .iter()
            .map(|e| &e.marks)
            .cmp(other.elements.iter().map(|e| &e.marks))
    }

    fn tertiary(&self, other: &Self) -> Ordering {
        self.elements
            .iter()
            .map(|e| e.upper)
            .cmp(other.elements.iter().map(|e| e.upper))
    }
}

impl Ord for CollationKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.primary(other)
            .then_with(|| self.secondary(other))
            .then_with(|| self.tertiary(other))
            .then_with(|| self.decomposed.cmp(&other.decomposed))
    }
}

impl PartialOrd for CollationKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Compare two strings using natural-language collation.
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_is_ignored_at_primary_level() {
        assert_eq!(collate("apple", "Banana"), Ordering::Less);
        assert_eq!(collate("Apple", "banana"), Ordering::Less);
        assert_eq!(collate("alice", "Alice"), Ordering::Less);
    }

    #[test]
    fn test_diacritics_fold_to_base_letter() {
        assert_eq!(collate("Émile", "Frank"), Ordering::Less);
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("résumé", "resumes"), Ordering::Less);
    }

    #[test]
    fn test_canonically_equivalent_strings_are_equal() {
        let composed = "caf\u{e9}";
        let decomposed = "cafe\u{301}";
        assert_eq!(collate(composed, decomposed), Ordering::Equal);
    }

    #[test]
    fn test_character_classes() {
        assert_eq!(collate(" a", "!a"), Ordering::Less);
        assert_eq!(collate("!a", "1a"), Ordering::Less);
        assert_eq!(collate("9", "a"), Ordering::Less);
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(collate("Al", "Alice"), Ordering::Less);
        assert_eq!(collate("", "a"), Ordering::Less);
    }
}
