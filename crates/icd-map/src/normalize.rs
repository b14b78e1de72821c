//! Diagnosis text normalization.
//!
//! Case-folds, strips a leading clinical prefix, expands common medical
//! abbreviations on word boundaries, and removes punctuation.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Leading phrases that carry no diagnostic meaning.
pub const CLINICAL_PREFIXES: &[&str] = &[
    "diagnosis:",
    "dx:",
    "condition:",
    "history of",
    "h/o",
    "hx of",
];

/// Whole-word abbreviations and their expansions.
pub const ABBREVIATIONS: &[(&str, &str)] = &[
    ("unspec", "unspecified"),
    ("nos", "not otherwise specified"),
    ("nec", "not elsewhere classified"),
    ("dm", "diabetes mellitus"),
    ("htn", "hypertension"),
    ("copd", "chronic obstructive pulmonary disease"),
    ("ckd", "chronic kidney disease"),
    ("chf", "congestive heart failure"),
    ("mi", "myocardial infarction"),
    ("cad", "coronary artery disease"),
    ("afib", "atrial fibrillation"),
    ("dvt", "deep vein thrombosis"),
    ("pe", "pulmonary embolism"),
    ("uti", "urinary tract infection"),
];

static WHITESPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static PUNCTUATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s]").expect("Invalid punctuation regex"));

// `w/o` and `w/out` end in a word character, so they take a trailing
// boundary; `w/` cannot, and only needs a boundary in front.
static WITHOUT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bw/o(?:ut)?\b").expect("Invalid w/o regex"));

static WITH_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\bw/").expect("Invalid w/ regex"));

static ABBREVIATION_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    let alternation = ABBREVIATIONS
        .iter()
        .map(|(abbrev, _)| regex::escape(abbrev))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).expect("Invalid abbreviation regex")
});

/// Normalizes a raw diagnosis for matching.
///
/// Total over all input: an empty or punctuation-only string yields an
/// empty string.
pub fn normalize(raw: &str) -> String {
    let lowered = collapse_whitespace(&raw.to_lowercase());
    let text = strip_clinical_prefix(&lowered);

    let text = WITHOUT_REGEX.replace_all(text, "without");
    let text = WITH_REGEX.replace_all(&text, "with ");
    let text = ABBREVIATION_REGEX.replace_all(&text, |caps: &Captures<'_>| {
        expand_abbreviation(&caps[0]).to_string()
    });

    let text = PUNCTUATION_REGEX.replace_all(&text, " ");
    collapse_whitespace(&text)
}

/// Removes one leading clinical prefix (case-insensitive) and the
/// whitespace after it. Returns the input unchanged when none applies.
pub fn strip_clinical_prefix(text: &str) -> &str {
    for prefix in CLINICAL_PREFIXES {
        if let Some(head) = text.get(..prefix.len())
            && head.eq_ignore_ascii_case(prefix)
        {
            return text[prefix.len()..].trim_start();
        }
    }
    text
}

fn expand_abbreviation(token: &str) -> &str {
    ABBREVIATIONS
        .iter()
        .find(|(abbrev, _)| *abbrev == token)
        .map_or(token, |(_, full)| *full)
}

fn collapse_whitespace(text: &str) -> String {
    WHITESPACE_REGEX.replace_all(text.trim(), " ").into_owned()
}
