//! Keyword pattern groups for rule-based matching.

use icd_model::PatternGroup;

use crate::catalog::CodeCatalog;

/// `(name, keywords, associated codes)` for every built-in group.
const BUILTIN_PATTERNS: &[(&str, &[&str], &[&str])] = &[
    (
        "diabetes",
        &["diabetes", "diabetic", "dm", "hyperglycemia", "glucose"],
        &["E11.9", "E11.8", "E10.9", "E11.65"],
    ),
    (
        "hypertension",
        &["hypertension", "high blood pressure", "htn", "elevated bp"],
        &["I10", "I11.9", "I12.9"],
    ),
    (
        "hyperlipidemia",
        &["hyperlipidemia", "hypercholesterolemia", "high cholesterol", "dyslipidemia"],
        &["E78.5", "E78.0", "E78.2"],
    ),
    (
        "copd",
        &["copd", "chronic obstructive", "emphysema", "chronic bronchitis"],
        &["J44.1", "J44.0"],
    ),
    (
        "asthma",
        &["asthma", "bronchial asthma", "allergic asthma"],
        &["J45.9"],
    ),
    (
        "kidney",
        &["kidney", "renal", "nephropathy", "ckd", "chronic kidney"],
        &["N18.3", "N18.4", "N18.5", "N18.6", "N18.9"],
    ),
    (
        "heart",
        &["heart", "cardiac", "coronary", "myocardial", "cardiovascular"],
        &["I25.10", "I50.9", "I48.91", "I21.9"],
    ),
    (
        "cancer",
        &["cancer", "malignant", "neoplasm", "tumor", "carcinoma"],
        &["C78.0", "C78.1", "C78.2", "C50.911"],
    ),
    (
        "infection",
        &["infection", "sepsis", "pneumonia", "abscess"],
        &["A41.9", "R65.20", "A49.9", "J18.9"],
    ),
    (
        "anemia",
        &["anemia", "low hemoglobin", "iron deficiency"],
        &["D64.9", "D50.9"],
    ),
    (
        "obesity",
        &["obesity", "obese", "overweight", "bmi"],
        &["E66.9", "E66.01"],
    ),
    (
        "depression",
        &["depression", "depressive", "mood disorder"],
        &["F32.9"],
    ),
    ("anxiety", &["anxiety", "anxious", "panic"], &["F41.9"]),
    (
        "substance",
        &["alcohol", "drug", "substance", "addiction", "dependence"],
        &["F10.10", "F10.20", "F17.210"],
    ),
    (
        "fracture",
        &["fracture", "broken", "break", "fx"],
        &["S72.001A", "S22.43XA"],
    ),
    ("ulcer", &["ulcer", "wound", "sore"], &["L97.909", "L89.90"]),
    ("hepatitis", &["hepatitis", "liver"], &["B19.20", "B18.2"]),
    (
        "hypothyroid",
        &["hypothyroid", "thyroid", "underactive thyroid"],
        &["E03.9", "E03.8"],
    ),
];

/// The built-in pattern groups in evaluation order.
pub fn builtin_pattern_groups() -> Vec<PatternGroup> {
    BUILTIN_PATTERNS
        .iter()
        .map(|(name, keywords, codes)| PatternGroup::new(name, keywords, codes))
        .collect()
}

/// Lists `(group, code)` pairs whose code is missing from `catalog`.
///
/// These references are skipped during matching; the list exists so
/// startup can report them.
pub fn unresolved_pattern_codes(
    groups: &[PatternGroup],
    catalog: &CodeCatalog,
) -> Vec<(String, String)> {
    groups
        .iter()
        .flat_map(|group| {
            group
                .associated_codes
                .iter()
                .filter(|code| !catalog.contains(code))
                .map(|code| (group.name.clone(), code.clone()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_groups_are_unique_and_non_empty() {
        let groups = builtin_pattern_groups();
        assert_eq!(groups.len(), 18);
        let mut names: Vec<_> = groups.iter().map(|g| g.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 18);
        assert!(groups.iter().all(|g| !g.keywords.is_empty()));
        assert!(groups.iter().all(|g| !g.associated_codes.is_empty()));
    }

    #[test]
    fn anxiety_code_is_the_only_unresolved_reference() {
        let catalog = CodeCatalog::builtin();
        let unresolved = unresolved_pattern_codes(&builtin_pattern_groups(), &catalog);
        assert_eq!(
            unresolved,
            vec![("anxiety".to_string(), "F41.9".to_string())]
        );
    }
}
