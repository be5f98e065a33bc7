//! # Collation
//!
//! Human-friendly string ordering for song and facet lists.
//!
//! Strings are compared in three passes, like a locale collator:
//! 1. Letters with case and diacritics folded away
//! 2. Unaccented before accented
//! 3. Lowercase before uppercase
//!
//! So `alpha` < `Beta` < `Zeta` (raw byte order would put `Beta` and `Zeta`
//! before `alpha`), `resume` < `résumé` < `Résumé`, and `Šta` sorts with
//! the other `s` words rather than after `z`.
//!
//! Diacritics are folded by canonical decomposition (NFD) with combining
//! marks dropped. Letters that carry a stroke or are ligatures have no
//! decomposition and are spelled out by [`base_letters`].
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::cmp::Ordering;

use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Compares two strings for display ordering.
pub fn compare(a: &str, b: &str) -> Ordering {
    primary(a)
        .cmp(&primary(b))
        .then_with(|| secondary(a, b))
        .then_with(|| tertiary(a, b))
        .then_with(|| a.cmp(b))
}

/// Sorts and deduplicates values using [`compare`].
pub fn sorted_unique<I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut values: Vec<String> = values.into_iter().collect();
    values.sort_by(|a, b| compare(a, b));
    values.dedup();
    values
}

/// Lowercased, decomposed, mark-free sort key.
fn primary(s: &str) -> String {
    let mut key = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase).nfd() {
        if is_combining_mark(c) {
            continue;
        }
        match base_letters(c) {
            Some(letters) => key.push_str(letters),
            None => key.push(c),
        }
    }
    key
}

fn secondary(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        let x_accented = is_accented(x);
        let y_accented = is_accented(y);
        if x_accented != y_accented {
            return x_accented.cmp(&y_accented);
        }
    }
    Ordering::Equal
}

fn tertiary(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }
    }
    Ordering::Equal
}

fn is_accented(c: char) -> bool {
    c.to_lowercase()
        .nfd()
        .any(|d| is_combining_mark(d) || base_letters(d).is_some())
}

/// Latin letters without a canonical decomposition, as their base letters.
const fn base_letters(c: char) -> Option<&'static str> {
    Some(match c {
        'æ' => "ae",
        'œ' => "oe",
        'ø' => "o",
        'ł' => "l",
        'đ' | 'ð' => "d",
        'ħ' => "h",
        'ı' => "i",
        'ŀ' => "l",
        'ß' => "ss",
        'þ' => "th",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(values: &[&str]) -> Vec<String> {
        let mut values: Vec<String> = values.iter().map(ToString::to_string).collect();
        values.sort_by(|a, b| compare(a, b));
        values
    }

    #[test]
    fn test_case_insensitive_order() {
        assert_eq!(sorted(&["Zeta", "alpha", "Beta"]), ["alpha", "Beta", "Zeta"]);
    }

    #[test]
    fn test_lowercase_first_on_tie() {
        assert_eq!(sorted(&["Apple", "apple"]), ["apple", "Apple"]);
    }

    #[test]
    fn test_accents_sort_with_base_letter() {
        assert_eq!(
            sorted(&["Zed", "Élan", "eagle", "Ember"]),
            ["eagle", "Élan", "Ember", "Zed"]
        );
        assert_eq!(sorted(&["résumé", "resume"]), ["resume", "résumé"]);
    }

    #[test]
    fn test_letters_beyond_latin_1() {
        assert_eq!(
            sorted(&["Zeta", "Šta", "Sun", "Łódź", "Mazurka", "Ærin"]),
            ["Ærin", "Łódź", "Mazurka", "Šta", "Sun", "Zeta"]
        );
        assert_eq!(sorted(&["Őrség", "Czardas", "Čajka"]), ["Čajka", "Czardas", "Őrség"]);
    }

    #[test]
    fn test_decomposed_input_matches_precomposed() {
        // "e" followed by a combining acute accent
        assert_eq!(primary("Cafe\u{301}"), primary("Café"));
        assert_eq!(sorted(&["Cafe\u{301}", "Cabin"])[0], "Cabin");
    }

    #[test]
    fn test_prefix_sorts_first() {
        assert_eq!(sorted(&["Sunrise", "Sun"]), ["Sun", "Sunrise"]);
    }

    #[test]
    fn test_sorted_unique() {
        let values = vec!["b".to_string(), "A".to_string(), "b".to_string()];
        assert_eq!(sorted_unique(values), ["A", "b"]);
    }
}
