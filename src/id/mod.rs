//! # ID Generation
//!
//! Generates entry ids from the current time so that ids sort roughly by
//! creation. Uniqueness is checked against the caller's collection rather
//! than assumed, so two creations within the same millisecond never collide.
//!
//! - Manual entries: `1767225600000` (milliseconds since the Unix epoch)
//! - Legacy imports: `1767225600000-7` (batch time plus element index)
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use chrono::{DateTime, Utc};

/// Generates an id for a manually created entry.
///
/// Starts at `now` in milliseconds and moves forward one millisecond at a
/// time until `is_taken` reports a free value.
pub fn generate<F>(now: DateTime<Utc>, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut millis = now.timestamp_millis();
    loop {
        let candidate = millis.to_string();
        if !is_taken(&candidate) {
            return candidate;
        }
        millis += 1;
    }
}

/// Generates an id for the `index`-th record of a legacy import batch.
///
/// Records of one batch differ by index; a `-n` suffix is appended only if
/// the combination is already present (e.g. a batch started in the same
/// millisecond as an earlier one).
pub fn legacy<F>(batch: DateTime<Utc>, index: usize, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let base = format!("{}-{index}", batch.timestamp_millis());
    if !is_taken(&base) {
        return base;
    }

    let mut suffix = 1_u32;
    loop {
        let candidate = format!("{base}-{suffix}");
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;

    fn instant() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_767_225_600_000).unwrap()
    }

    #[test]
    fn test_generate_uses_millis() {
        assert_eq!(generate(instant(), |_| false), "1767225600000");
    }

    #[test]
    fn test_generate_skips_taken() {
        let taken: HashSet<&str> = ["1767225600000", "1767225600001"].into_iter().collect();
        assert_eq!(generate(instant(), |id| taken.contains(id)), "1767225600002");
    }

    #[test]
    fn test_generate_is_numeric() {
        let id = generate(Utc::now(), |_| false);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_legacy_format() {
        assert_eq!(legacy(instant(), 3, |_| false), "1767225600000-3");
    }

    #[test]
    fn test_legacy_suffix_on_collision() {
        let taken: HashSet<&str> = ["1767225600000-0", "1767225600000-0-1"].into_iter().collect();
        assert_eq!(legacy(instant(), 0, |id| taken.contains(id)), "1767225600000-0-2");
    }
}
