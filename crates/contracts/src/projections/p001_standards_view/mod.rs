//! Derived views over the catalog: filtering, progression lookup and
//! grouping. All functions are pure and never mutate the dataset.

pub mod filter;
pub mod grouping;
pub mod progression;

pub use filter::{filter_records, grade_options, project, strand_options, StandardsView};
pub use grouping::{group_by_strand, StrandGroup};
pub use progression::{progression_for, Progression, ProgressionBasis};
