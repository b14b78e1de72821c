//! Diagnoses cell parsing.
//!
//! A cell is either a bracketed list literal (`['Hypertension', "Type 2 DM"]`)
//! or plain text split on the first delimiter it contains.

use std::iter::Peekable;
use std::str::Chars;

use icd_map::strip_clinical_prefix;

/// Split characters, tried in order. Only the first one present is used.
const DELIMITERS: [char; 4] = [';', ',', '\n', '|'];

/// Minimum cleaned length, in characters.
const MIN_DIAGNOSIS_CHARS: usize = 3;

/// Placeholder entries that are not diagnoses (compared case-insensitively).
pub const NON_DIAGNOSES: &[&str] = &[
    "none",
    "n/a",
    "na",
    "nil",
    "no diagnosis",
    "unknown",
    "unclear",
    "pending",
    "tbd",
    "to be determined",
    "see notes",
];

/// Splits a diagnoses cell into cleaned diagnosis strings.
///
/// Items that clean to nothing are dropped, so the result may be empty.
pub fn parse_diagnoses(cell: &str) -> Vec<String> {
    let text = cell.trim();
    if text.is_empty() {
        return Vec::new();
    }

    let items: Vec<String> = match parse_list_literal(text) {
        Some(items) => items,
        None => split_delimited(text),
    };
    items
        .iter()
        .filter_map(|item| clean_diagnosis(item))
        .collect()
}

/// Cleans one diagnosis.
///
/// Trims surrounding quotes, removes one clinical prefix, and collapses
/// whitespace. Returns `None` for short items and placeholders.
pub fn clean_diagnosis(item: &str) -> Option<String> {
    let unquoted = item
        .trim()
        .trim_matches(|c| c == '\'' || c == '"')
        .trim();
    let stripped = strip_clinical_prefix(unquoted);
    let cleaned = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    if cleaned.chars().count() < MIN_DIAGNOSIS_CHARS {
        return None;
    }
    let lowered = cleaned.to_lowercase();
    if NON_DIAGNOSES.contains(&lowered.as_str()) {
        return None;
    }
    Some(cleaned)
}

fn split_delimited(text: &str) -> Vec<String> {
    match DELIMITERS.iter().find(|d| text.contains(**d)) {
        Some(&delimiter) => text
            .split(delimiter)
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect(),
        None => vec![text.to_string()],
    }
}

/// Parses `[item, item, ...]` where each item is a quoted string or a number.
///
/// Returns `None` for anything else, including unterminated strings and bare
/// words, so the caller can fall back to delimiter splitting.
fn parse_list_literal(text: &str) -> Option<Vec<String>> {
    let inner = text.strip_prefix('[')?.strip_suffix(']')?;
    let mut chars = inner.chars().peekable();
    let mut items = Vec::new();

    loop {
        skip_whitespace(&mut chars);
        match chars.peek().copied() {
            None => break,
            Some(quote @ ('\'' | '"')) => {
                chars.next();
                items.push(read_quoted(&mut chars, quote)?);
            }
            Some(c) if c.is_ascii_digit() || matches!(c, '-' | '+' | '.') => {
                items.push(read_number(&mut chars)?);
            }
            Some(_) => return None,
        }
        skip_whitespace(&mut chars);
        match chars.next() {
            None => break,
            Some(',') => {}
            Some(_) => return None,
        }
    }
    Some(items)
}

fn skip_whitespace(chars: &mut Peekable<Chars<'_>>) {
    while chars.next_if(|c| c.is_whitespace()).is_some() {}
}

fn read_quoted(chars: &mut Peekable<Chars<'_>>, quote: char) -> Option<String> {
    let mut value = String::new();
    loop {
        match chars.next()? {
            '\\' => match chars.next()? {
                'n' => value.push('\n'),
                't' => value.push('\t'),
                other => value.push(other),
            },
            c if c == quote => return Some(value),
            c => value.push(c),
        }
    }
}

fn read_number(chars: &mut Peekable<Chars<'_>>) -> Option<String> {
    let mut literal = String::new();
    while let Some(c) =
        chars.next_if(|c| c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E'))
    {
        literal.push(c);
    }
    literal.parse::<f64>().ok().map(|_| literal)
}
