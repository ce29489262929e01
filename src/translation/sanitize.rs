//! Reply cleanup for models that wrap a translation in notes.
//!
//! Lines are checked in order against [`SKIP_RULES`]; the first line no rule
//! matches is the translation. When every line is skipped, the first line of
//! the reply is returned instead.

/// Prefixes that mark a line as model commentary rather than translation.
pub const COMMENTARY_MARKERS: &[&str] = &[
    "GLOSSARY:",
    "(Emoji:",
    "(Markdown",
    "(Code blocks",
    "(If the input",
];

/// A named predicate over a trimmed line.
#[derive(Debug, Clone, Copy)]
pub struct SkipRule {
    pub name: &'static str,
    pub matches: fn(&str) -> bool,
}

/// Rules applied to every trimmed line, in order.
pub const SKIP_RULES: &[SkipRule] = &[
    SkipRule {
        name: "blank",
        matches: is_blank,
    },
    SkipRule {
        name: "parenthesized",
        matches: is_parenthesized,
    },
    SkipRule {
        name: "commentary-marker",
        matches: has_commentary_marker,
    },
];

fn is_blank(line: &str) -> bool {
    line.is_empty()
}

fn is_parenthesized(line: &str) -> bool {
    line.starts_with('(') && line.ends_with(')')
}

fn has_commentary_marker(line: &str) -> bool {
    COMMENTARY_MARKERS
        .iter()
        .any(|marker| line.starts_with(marker))
}

/// Returns the first rule that skips `line`, if any.
pub fn skip_reason(line: &str) -> Option<&'static SkipRule> {
    SKIP_RULES.iter().find(|rule| (rule.matches)(line))
}

/// Extracts the single line most likely to be the translation.
pub fn sanitize_reply(reply: &str) -> String {
    let mut lines = reply.trim().split('\n').map(str::trim);

    // split always yields at least one item
    let first = lines.clone().next().unwrap_or_default();

    lines
        .find(|line| skip_reason(line).is_none())
        .unwrap_or(first)
        .to_string()
}
