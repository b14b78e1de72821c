//! Built-in reference codes.
//!
//! A compact ICD-10-CM subset covering diagnoses that appear most often in
//! loosely structured clinical problem lists.

use icd_model::CodeEntry;

pub const BUILTIN_VERSION: &str = "ICD-10-CM 2024";

/// `(code, description, category)` rows in catalog order.
pub const BUILTIN_CODES: &[(&str, &str, &str)] = &[
    // Diabetes
    ("E11.9", "Type 2 diabetes mellitus without complications", "Endocrine"),
    ("E11.8", "Type 2 diabetes mellitus with unspecified complications", "Endocrine"),
    ("E10.9", "Type 1 diabetes mellitus without complications", "Endocrine"),
    ("E11.65", "Type 2 diabetes mellitus with hyperglycemia", "Endocrine"),
    // Hypertension
    ("I10", "Essential (primary) hypertension", "Cardiovascular"),
    ("I11.9", "Hypertensive heart disease without heart failure", "Cardiovascular"),
    (
        "I12.9",
        "Hypertensive chronic kidney disease with stage 1 through stage 4 chronic kidney disease, or unspecified chronic kidney disease",
        "Cardiovascular",
    ),
    // Hyperlipidemia
    ("E78.5", "Hyperlipidemia, unspecified", "Endocrine"),
    ("E78.0", "Pure hypercholesterolemia", "Endocrine"),
    ("E78.2", "Mixed hyperlipidemia", "Endocrine"),
    // Respiratory
    ("J44.1", "Chronic obstructive pulmonary disease with acute exacerbation", "Respiratory"),
    (
        "J44.0",
        "Chronic obstructive pulmonary disease with acute lower respiratory infection",
        "Respiratory",
    ),
    ("J45.9", "Asthma, unspecified", "Respiratory"),
    (
        "J96.90",
        "Respiratory failure, unspecified, unspecified whether with hypoxia or hypercapnia",
        "Respiratory",
    ),
    ("J18.9", "Pneumonia, unspecified organism", "Respiratory"),
    // Kidney disease
    ("N18.6", "End stage renal disease", "Genitourinary"),
    ("N18.3", "Chronic kidney disease, stage 3 (moderate)", "Genitourinary"),
    ("N18.4", "Chronic kidney disease, stage 4 (severe)", "Genitourinary"),
    ("N18.5", "Chronic kidney disease, stage 5", "Genitourinary"),
    ("N18.9", "Chronic kidney disease, unspecified", "Genitourinary"),
    // Heart
    (
        "I25.10",
        "Atherosclerotic heart disease of native coronary artery without angina pectoris",
        "Cardiovascular",
    ),
    ("I50.9", "Heart failure, unspecified", "Cardiovascular"),
    ("I48.91", "Unspecified atrial fibrillation", "Cardiovascular"),
    ("I21.9", "Acute myocardial infarction, unspecified", "Cardiovascular"),
    // Mental health
    ("F17.210", "Nicotine dependence, cigarettes, uncomplicated", "Mental"),
    ("F32.9", "Major depressive disorder, single episode, unspecified", "Mental"),
    ("F31.9", "Bipolar disorder, unspecified", "Mental"),
    ("F20.9", "Schizophrenia, unspecified", "Mental"),
    // Neoplasms
    ("C78.2", "Secondary malignant neoplasm of pleura", "Neoplasms"),
    ("C78.1", "Secondary malignant neoplasm of mediastinum", "Neoplasms"),
    ("C78.0", "Secondary malignant neoplasm of lung", "Neoplasms"),
    ("C50.911", "Malignant neoplasm of unspecified site of right female breast", "Neoplasms"),
    // Infections
    ("A41.9", "Sepsis, unspecified organism", "Infectious"),
    ("R65.20", "Severe sepsis without septic shock", "Infectious"),
    ("A49.9", "Bacterial infection, unspecified", "Infectious"),
    // Thyroid
    ("E03.9", "Hypothyroidism, unspecified", "Endocrine"),
    ("E03.8", "Other specified hypothyroidism", "Endocrine"),
    // Anemia
    ("D64.9", "Anemia, unspecified", "Blood"),
    ("D50.9", "Iron deficiency anemia, unspecified", "Blood"),
    // Obesity
    ("E66.9", "Obesity, unspecified", "Endocrine"),
    ("E66.01", "Morbid (severe) obesity due to excess calories", "Endocrine"),
    // Symptoms
    ("R50.9", "Fever, unspecified", "Symptoms"),
    ("R06.02", "Shortness of breath", "Symptoms"),
    ("R53.83", "Fatigue", "Symptoms"),
    ("R11.10", "Vomiting, unspecified", "Symptoms"),
    ("K59.00", "Constipation, unspecified", "Digestive"),
    ("K92.2", "Gastrointestinal bleeding, unspecified", "Digestive"),
    ("D69.6", "Thrombocytopenia, unspecified", "Blood"),
    // Substance use
    ("F10.10", "Alcohol use disorder, mild", "Mental"),
    ("F10.20", "Alcohol use disorder, moderate", "Mental"),
    ("Z87.891", "Personal history of nicotine dependence", "Factors"),
    // Procedures and status
    ("Z95.1", "Presence of aortocoronary bypass graft", "Factors"),
    ("Z51.11", "Encounter for antineoplastic chemotherapy", "Factors"),
    ("Z66", "Do not resuscitate", "Factors"),
    // Hepatitis
    ("B19.20", "Unspecified viral hepatitis C without hepatic coma", "Infectious"),
    ("B18.2", "Chronic viral hepatitis C", "Infectious"),
    // Ulcers
    (
        "L97.909",
        "Non-pressure chronic ulcer of unspecified part of unspecified lower leg with unspecified severity",
        "Skin",
    ),
    ("L89.90", "Pressure ulcer of unspecified site, unspecified stage", "Skin"),
    // Fractures
    (
        "S72.001A",
        "Fracture of unspecified part of neck of right femur, initial encounter for closed fracture",
        "Injury",
    ),
    (
        "S22.43XA",
        "Multiple fractures of ribs, bilateral, initial encounter for closed fracture",
        "Injury",
    ),
];

/// Built-in rows as owned entries, in catalog order.
pub fn builtin_entries() -> Vec<CodeEntry> {
    BUILTIN_CODES
        .iter()
        .map(|(code, description, category)| CodeEntry::new(*code, *description, *category))
        .collect()
}
