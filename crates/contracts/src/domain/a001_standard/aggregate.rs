use serde::{Deserialize, Deserializer, Serialize};

/// One catalog entry: a single standard for one grade and strand.
///
/// Text fields other than `grade`, `strand` and `code` are optional in the
/// source data; `null` and a missing key both read as `None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandardRecord {
    #[serde(default, deserialize_with = "string_or_null")]
    pub grade: String,
    #[serde(default, alias = "category", deserialize_with = "string_or_null")]
    pub strand: String,
    #[serde(default, deserialize_with = "string_or_null")]
    pub code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Achievement-level descriptor text.
    #[serde(rename = "ALD", default, skip_serializing_if = "Option::is_none")]
    pub ald: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub samples: Option<Vec<String>>,
}

impl StandardRecord {
    /// Grade number used for ordering: the first integer embedded in the
    /// label ("Grade 5" -> 5), or 0 when the label has none ("Grade K").
    pub fn grade_number(&self) -> u32 {
        grade_number(&self.grade)
    }

    pub fn card_key(&self) -> CardKey {
        CardKey {
            code: self.code.clone(),
            grade: self.grade.clone(),
        }
    }

    pub fn samples(&self) -> &[String] {
        self.samples.as_deref().unwrap_or_default()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Lower-cased text the free-text query is matched against.
    pub fn search_haystack(&self) -> String {
        [
            self.code.as_str(),
            self.description.as_deref().unwrap_or(""),
            self.details.as_deref().unwrap_or(""),
            self.strand.as_str(),
            self.grade.as_str(),
        ]
        .join(" ")
        .to_lowercase()
    }
}

/// Composite key for per-card UI state. `code` alone is not unique across
/// the catalog, `(code, grade)` is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey {
    pub code: String,
    pub grade: String,
}

/// First run of digits in a grade label, saturating at `u32::MAX`; 0 when
/// the label has no digits.
pub fn grade_number(label: &str) -> u32 {
    label
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .map_while(|c| c.to_digit(10))
        .fold(0u32, |n, d| n.saturating_mul(10).saturating_add(d))
}

fn string_or_null<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_number() {
        assert_eq!(grade_number("Grade 5"), 5);
        assert_eq!(grade_number("Grade 12"), 12);
        assert_eq!(grade_number("Grades 9-10"), 9);
        assert_eq!(grade_number("Grade K"), 0);
        assert_eq!(grade_number(""), 0);
    }

    #[test]
    fn test_grade_number_saturates_on_overflow() {
        assert_eq!(grade_number("Grade 99999999999"), u32::MAX);
        assert!(grade_number("Grade 99999999999") > grade_number("Grade 12"));
        assert_eq!(grade_number("Grade 007"), 7);
    }

    #[test]
    fn test_deserialize_full_record() {
        let json = r#"{
            "grade": "Grade 5",
            "strand": "Reading Literary",
            "code": "ELAGSE5RL1",
            "description": "Quote accurately from a text.",
            "details": "Emphasis on accurate quoting.",
            "ALD": "Developing: cites general parts.",
            "evidence": "Student responses include quotes.",
            "samples": ["EBSR: Choose two quotes.", "SR: Which quotation best..."]
        }"#;
        let record: StandardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.code, "ELAGSE5RL1");
        assert_eq!(record.ald.as_deref(), Some("Developing: cites general parts."));
        assert_eq!(record.samples().len(), 2);
        assert_eq!(record.grade_number(), 5);
    }

    #[test]
    fn test_deserialize_sparse_record() {
        let json = r#"{
            "grade": null,
            "category": "Writing",
            "code": "ELAGSE4W1",
            "details": null,
            "samples": null
        }"#;
        let record: StandardRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.grade, "");
        assert_eq!(record.strand, "Writing");
        assert_eq!(record.description, None);
        assert_eq!(record.details, None);
        assert!(record.samples().is_empty());
        assert_eq!(record.description_text(), "");
    }

    #[test]
    fn test_card_key_combines_code_and_grade() {
        let record: StandardRecord =
            serde_json::from_str(r#"{"grade": "Grade 3", "strand": "Language", "code": "L1"}"#)
                .unwrap();
        assert_eq!(
            record.card_key(),
            CardKey {
                code: "L1".to_string(),
                grade: "Grade 3".to_string()
            }
        );
    }

    #[test]
    fn test_search_haystack_is_lowercase() {
        let record: StandardRecord = serde_json::from_str(
            r#"{"grade": "Grade 3", "strand": "Language", "code": "ELAGSE3L1", "description": "Demonstrate Command"}"#,
        )
        .unwrap();
        let haystack = record.search_haystack();
        assert!(haystack.contains("elagse3l1"));
        assert!(haystack.contains("demonstrate command"));
        assert!(haystack.contains("language"));
        assert!(haystack.contains("grade 3"));
    }
}
