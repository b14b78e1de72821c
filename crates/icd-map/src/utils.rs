use icd_model::Candidate;

/// Sorts candidates by descending confidence. The sort is stable, so equal
/// scores keep their incoming order.
pub(crate) fn sort_by_confidence(candidates: &mut [Candidate]) {
    candidates.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
}
