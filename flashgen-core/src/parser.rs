//! Delimited-text parser.
//!
//! One record per line, front and back separated by a comma or a tab:
//!
//! ```text
//! apple, jablko
//! car	auto
//! ```
//!
//! Blank lines are skipped. Lines without a delimiter or with an empty side are
//! dropped silently; parsing never fails.

use crate::{CardSequence, Flashcard};

/// What to do with fragments after the second field on lines like `a,b,c`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExtraFields {
    /// Keep only the fragment between the first and second delimiter (`b`).
    #[default]
    Ignore,
    /// Keep everything after the first delimiter as the back (`b,c`).
    JoinIntoBack,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseOptions {
    pub extra_fields: ExtraFields,
}

fn is_delimiter(c: char) -> bool {
    c == ',' || c == '\t'
}

/// Like `str::trim`, but also strips a byte-order mark, which spreadsheet exports
/// put in front of the first line.
fn trim_field(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

pub fn parse(text: &str) -> CardSequence {
    parse_with(text, &ParseOptions::default())
}

pub fn parse_with(text: &str, opts: &ParseOptions) -> CardSequence {
    let mut cards = Vec::new();
    for (idx, raw) in text.split('\n').enumerate() {
        let line = trim_field(raw);
        if line.is_empty() {
            continue;
        }
        match split_record(line, opts.extra_fields) {
            Some(card) => cards.push(card),
            None => tracing::debug!(line = idx + 1, "dropped line without a front and back"),
        }
    }
    tracing::debug!(cards = cards.len(), "parsed card text");
    cards
}

fn split_record(line: &str, extra: ExtraFields) -> Option<Flashcard> {
    let (front, back) = match extra {
        ExtraFields::Ignore => {
            let mut parts = line.split(is_delimiter);
            (parts.next().unwrap_or(""), parts.next().unwrap_or(""))
        }
        ExtraFields::JoinIntoBack => line.split_once(is_delimiter).unwrap_or((line, "")),
    };
    let (front, back) = (trim_field(front), trim_field(back));
    if front.is_empty() || back.is_empty() {
        return None;
    }
    Some(Flashcard::new(front, back))
}
