//! ICD-10 code format checks.

use std::sync::LazyLock;

use icd_model::UNKNOWN_CODE;
use regex::Regex;

/// Category letter, two more characters (digit then alphanumeric), then an
/// optional subcategory of up to four alphanumerics after a dot.
/// Covers forms such as `I10`, `E11.65`, `S72.001A` and `S22.43XA`.
static ICD10_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][0-9][0-9A-Z](\.[0-9A-Z]{1,4})?$").expect("Invalid ICD-10 code regex")
});

/// Returns true if `code` looks like an ICD-10 code.
pub fn is_valid_icd10_code(code: &str) -> bool {
    if code.is_empty() || code == UNKNOWN_CODE {
        return false;
    }
    ICD10_CODE_REGEX.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_code_shapes() {
        for code in ["I10", "E11.65", "Z66", "S72.001A", "S22.43XA", "F17.210"] {
            assert!(is_valid_icd10_code(code), "{code} should be valid");
        }
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["", "UNKNOWN", "e11.9", "E1", "E11.", "E11.12345", "11.9"] {
            assert!(!is_valid_icd10_code(code), "{code} should be invalid");
        }
    }
}
