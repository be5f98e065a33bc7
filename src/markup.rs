//! # Tab Markup
//!
//! Render-time highlighting of tab annotations. `(...)` and `[...]` groups
//! are picked out of the body so that views can color them; the stored
//! content is never changed.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::sync::OnceLock;

use owo_colors::OwoColorize;
use regex::Regex;

/// Kind of a piece of tab text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Annotation {
    Plain,
    /// `( ... )` group
    Paren,
    /// `[ ... ]` group
    Bracket,
}

/// A run of text with one annotation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub kind: Annotation,
    pub text: &'a str,
}

fn paren_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Groups never span lines; `.` does not match '\n'
    PATTERN.get_or_init(|| Regex::new(r"\(.*?\)").expect("static pattern is valid"))
}

fn bracket_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\[.*?\]").expect("static pattern is valid"))
}

/// Splits `content` into plain and annotated segments.
///
/// Parentheses and brackets are matched in separate passes, so one kind
/// may sit inside the other. Where groups overlap the one opened later
/// wins, which colours `([x])` as a paren group around a bracket group.
///
/// Concatenating the segment texts yields `content` unchanged.
pub fn segments(content: &str) -> Vec<Segment<'_>> {
    let mut groups: Vec<(usize, usize, Annotation)> = paren_pattern()
        .find_iter(content)
        .map(|m| (m.start(), m.end(), Annotation::Paren))
        .chain(
            bracket_pattern()
                .find_iter(content)
                .map(|m| (m.start(), m.end(), Annotation::Bracket)),
        )
        .collect();
    groups.sort_by_key(|&(start, _, _)| start);

    // Owning group per byte
    let mut owner: Vec<Option<usize>> = vec![None; content.len()];
    for (index, &(start, end, _)) in groups.iter().enumerate() {
        owner[start..end].fill(Some(index));
    }

    let mut result = Vec::new();
    let mut begin = 0;
    for pos in 1..=content.len() {
        if pos < content.len() && owner[pos] == owner[begin] {
            continue;
        }
        let kind = owner[begin].map_or(Annotation::Plain, |index| groups[index].2);
        result.push(Segment {
            kind,
            text: &content[begin..pos],
        });
        begin = pos;
    }

    result
}

/// Renders `content` with ANSI colors for terminal output.
pub fn render_ansi(content: &str) -> String {
    segments(content)
        .into_iter()
        .map(|segment| match segment.kind {
            Annotation::Plain => segment.text.to_string(),
            Annotation::Paren => segment.text.red().bold().to_string(),
            Annotation::Bracket => segment.text.blue().bold().to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(content: &str) -> Vec<(Annotation, &str)> {
        segments(content)
            .into_iter()
            .map(|s| (s.kind, s.text))
            .collect()
    }

    #[test]
    fn test_plain_only() {
        assert_eq!(kinds("1 2 3"), [(Annotation::Plain, "1 2 3")]);
        assert!(segments("").is_empty());
    }

    #[test]
    fn test_paren_and_bracket() {
        assert_eq!(
            kinds("1 (2 3) 4 [5]"),
            [
                (Annotation::Plain, "1 "),
                (Annotation::Paren, "(2 3)"),
                (Annotation::Plain, " 4 "),
                (Annotation::Bracket, "[5]"),
            ]
        );
    }

    #[test]
    fn test_non_greedy() {
        assert_eq!(
            kinds("(1)(2)"),
            [(Annotation::Paren, "(1)"), (Annotation::Paren, "(2)")]
        );
    }

    #[test]
    fn test_groups_do_not_span_lines() {
        assert_eq!(kinds("(1\n2)"), [(Annotation::Plain, "(1\n2)")]);
    }

    #[test]
    fn test_nested_groups() {
        assert_eq!(
            kinds("([x])"),
            [
                (Annotation::Paren, "("),
                (Annotation::Bracket, "[x]"),
                (Annotation::Paren, ")"),
            ]
        );
        assert_eq!(
            kinds("[1 (2) 3]"),
            [
                (Annotation::Bracket, "[1 "),
                (Annotation::Paren, "(2)"),
                (Annotation::Bracket, " 3]"),
            ]
        );
    }

    #[test]
    fn test_segments_preserve_content() {
        let content = "intro [x] (y\nz) <b>&amp;</b> (end)";
        let rebuilt: String = segments(content).iter().map(|s| s.text).collect();
        assert_eq!(rebuilt, content);
    }
}
