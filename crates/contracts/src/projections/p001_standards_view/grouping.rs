use crate::domain::a001_standard::StandardRecord;
use crate::enums::{compare_strand_names, theme_for, StrandTheme};

/// Visible records of one strand, sorted by code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandGroup {
    pub strand: String,
    pub records: Vec<StandardRecord>,
}

impl StrandGroup {
    pub fn theme(&self) -> StrandTheme {
        theme_for(&self.strand)
    }
}

/// Partitions `visible` by strand. Groups follow the preferred strand order
/// with unknown strands alphabetically after; records inside a group are
/// ordered by code.
pub fn group_by_strand(visible: &[StandardRecord]) -> Vec<StrandGroup> {
    let mut groups: Vec<StrandGroup> = Vec::new();

    for record in visible {
        match groups.iter_mut().find(|g| g.strand == record.strand) {
            Some(group) => group.records.push(record.clone()),
            None => groups.push(StrandGroup {
                strand: record.strand.clone(),
                records: vec![record.clone()],
            }),
        }
    }

    groups.sort_by(|a, b| compare_strand_names(&a.strand, &b.strand));
    for group in &mut groups {
        group.records.sort_by(|a, b| a.code.cmp(&b.code));
    }
    groups
}
