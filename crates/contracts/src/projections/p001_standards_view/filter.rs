use super::progression::{progression_for, Progression};
use crate::domain::a001_standard::StandardRecord;
use crate::enums::compare_strand_names;
use crate::shared::view_state::ViewState;

/// Result of applying a [`ViewState`] to the dataset.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StandardsView {
    /// Records passing every filter, in dataset order.
    pub visible: Vec<StandardRecord>,
    /// Present when a progression focus is set and resolvable.
    pub progression: Option<Progression>,
}

/// Visible records plus the progression for the current focus.
///
/// The progression is computed over the whole dataset, not the filtered
/// list.
pub fn project(dataset: &[StandardRecord], state: &ViewState) -> StandardsView {
    StandardsView {
        visible: filter_records(dataset, state),
        progression: state
            .code
            .as_deref()
            .and_then(|code| progression_for(dataset, code)),
    }
}

/// Applies grade, strand and free-text filters, keeping dataset order.
pub fn filter_records(dataset: &[StandardRecord], state: &ViewState) -> Vec<StandardRecord> {
    let query = state.query.trim().to_lowercase();

    dataset
        .iter()
        .filter(|r| state.grade.as_deref().map_or(true, |g| r.grade == g))
        .filter(|r| state.strand.as_deref().map_or(true, |s| r.strand == s))
        .filter(|r| query.is_empty() || r.search_haystack().contains(&query))
        .cloned()
        .collect()
}

/// Distinct grade labels, ordered by grade number then label.
pub fn grade_options(dataset: &[StandardRecord]) -> Vec<String> {
    let mut grades: Vec<&StandardRecord> = dataset.iter().filter(|r| !r.grade.is_empty()).collect();
    grades.sort_by(|a, b| {
        a.grade_number()
            .cmp(&b.grade_number())
            .then_with(|| a.grade.cmp(&b.grade))
    });
    let mut labels: Vec<String> = grades.into_iter().map(|r| r.grade.clone()).collect();
    labels.dedup();
    labels
}

/// Distinct strand names in preferred order, unknown names last.
pub fn strand_options(dataset: &[StandardRecord]) -> Vec<String> {
    let mut strands: Vec<String> = dataset
        .iter()
        .filter(|r| !r.strand.is_empty())
        .map(|r| r.strand.clone())
        .collect();
    strands.sort_by(|a, b| compare_strand_names(a, b));
    strands.dedup();
    strands
}
