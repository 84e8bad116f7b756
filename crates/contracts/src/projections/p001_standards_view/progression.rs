use crate::domain::a001_standard::{ProgressionKey, StandardRecord};

/// How the records of a progression were selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressionBasis {
    /// Every record whose code parses to the same key.
    Structural(ProgressionKey),
    /// The focus code did not parse; records share the focus record's
    /// description and strand instead.
    ///
    /// This is a loose compatibility match. It can pull in records that only
    /// happen to share wording, and it can hide a malformed code rather than
    /// reporting it. A focus record with a blank description matches every
    /// blank-description record of its strand.
    Heuristic { description: String, strand: String },
}

/// Cross-grade comparison for one focus code, ordered by grade number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    pub focus: String,
    pub basis: ProgressionBasis,
    pub records: Vec<StandardRecord>,
}

/// Builds the progression for `focus` over the full dataset.
///
/// Returns `None` for an empty focus, and for a malformed focus code that no
/// record carries (there is nothing to compare against).
pub fn progression_for(dataset: &[StandardRecord], focus: &str) -> Option<Progression> {
    let focus = focus.trim();
    if focus.is_empty() {
        return None;
    }

    let basis = match ProgressionKey::parse(focus) {
        Some(key) => ProgressionBasis::Structural(key),
        None => {
            let anchor = dataset
                .iter()
                .find(|r| r.code.trim().eq_ignore_ascii_case(focus))?;
            ProgressionBasis::Heuristic {
                description: normalize(anchor.description_text()),
                strand: anchor.strand.clone(),
            }
        }
    };

    let mut records: Vec<StandardRecord> = dataset
        .iter()
        .filter(|r| matches_basis(r, &basis))
        .cloned()
        .collect();
    records.sort_by_key(|r| r.grade_number());

    Some(Progression {
        focus: focus.to_string(),
        basis,
        records,
    })
}

fn matches_basis(record: &StandardRecord, basis: &ProgressionBasis) -> bool {
    match basis {
        ProgressionBasis::Structural(key) => {
            ProgressionKey::parse(&record.code).as_ref() == Some(key)
        }
        ProgressionBasis::Heuristic {
            description,
            strand,
        } => record.strand == *strand && normalize(record.description_text()) == *description,
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_standard::fallback_records;

    fn record(grade: &str, strand: &str, code: &str, description: &str) -> StandardRecord {
        StandardRecord {
            grade: grade.to_string(),
            strand: strand.to_string(),
            code: code.to_string(),
            description: Some(description.to_string()),
            details: None,
            ald: None,
            evidence: None,
            samples: None,
        }
    }

    fn codes(progression: &Progression) -> Vec<&str> {
        progression.records.iter().map(|r| r.code.as_str()).collect()
    }

    #[test]
    fn test_structural_progression_from_fallback() {
        let dataset = fallback_records();
        let progression = progression_for(&dataset, "ELAGSE5RL1").unwrap();
        assert_eq!(
            progression.basis,
            ProgressionBasis::Structural(ProgressionKey {
                letters: "RL".to_string(),
                number: 1
            })
        );
        assert_eq!(codes(&progression), vec!["ELAGSE3RL1", "ELAGSE5RL1"]);
        assert_eq!(progression.records[0].grade, "Grade 3");
        assert_eq!(progression.records[1].grade, "Grade 5");
    }

    #[test]
    fn test_structural_progression_includes_focus_and_is_sorted() {
        let dataset = vec![
            record("Grade 8", "Writing", "ELAGSE8W2", "a"),
            record("Grade 3", "Writing", "ELAGSE3W2", "b"),
            record("Grade 5", "Writing", "ELAGSE5W2", "c"),
            record("Grade 5", "Writing", "ELAGSE5W3", "d"),
            record("Grade 12", "Writing", "ELAGSE12W2", "e"),
        ];
        let progression = progression_for(&dataset, "ELAGSE5W2").unwrap();
        assert_eq!(
            codes(&progression),
            vec!["ELAGSE3W2", "ELAGSE5W2", "ELAGSE8W2", "ELAGSE12W2"]
        );
        let grades: Vec<u32> = progression.records.iter().map(|r| r.grade_number()).collect();
        assert!(grades.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_structural_match_is_case_insensitive() {
        let dataset = fallback_records();
        let progression = progression_for(&dataset, "elagse5rl1").unwrap();
        assert_eq!(codes(&progression), vec!["ELAGSE3RL1", "ELAGSE5RL1"]);
    }

    #[test]
    fn test_heuristic_fallback_matches_description_and_strand() {
        let dataset = vec![
            record("Grade 5", "Language", "ELAGSE5L4a", "Use context as a clue."),
            record("Grade 4", "Language", "ELAGSE4L4a", "  use context as a CLUE. "),
            record("Grade 6", "Reading Literary", "ELAGSE6RL4", "Use context as a clue."),
            record("Grade 3", "Language", "ELAGSE3L4b", "Use a dictionary."),
        ];
        let progression = progression_for(&dataset, "ELAGSE5L4a").unwrap();
        assert!(matches!(
            progression.basis,
            ProgressionBasis::Heuristic { .. }
        ));
        assert_eq!(codes(&progression), vec!["ELAGSE4L4a", "ELAGSE5L4a"]);
    }

    #[test]
    fn test_heuristic_blank_description_matches_blank_records() {
        let mut anchor = record("Grade 5", "Language", "ELAGSE5L4a", "");
        anchor.description = None;
        let dataset = vec![
            anchor,
            record("Grade 6", "Language", "ELAGSE6L4", "   "),
            record("Grade 4", "Language", "ELAGSE4L4", "Use context as a clue."),
            record("Grade 7", "Writing", "ELAGSE7W4", ""),
        ];
        let progression = progression_for(&dataset, "ELAGSE5L4a").unwrap();
        assert_eq!(
            progression.basis,
            ProgressionBasis::Heuristic {
                description: String::new(),
                strand: "Language".to_string()
            }
        );
        assert_eq!(codes(&progression), vec!["ELAGSE5L4a", "ELAGSE6L4"]);
    }

    #[test]
    fn test_malformed_unknown_code_has_no_progression() {
        let dataset = fallback_records();
        assert_eq!(progression_for(&dataset, "not-a-code"), None);
    }

    #[test]
    fn test_empty_focus_has_no_progression() {
        assert_eq!(progression_for(&fallback_records(), "  "), None);
    }

    #[test]
    fn test_well_formed_code_without_matches_is_empty() {
        let progression = progression_for(&fallback_records(), "ELAGSE9RI7").unwrap();
        assert!(progression.records.is_empty());
    }
}
