//! Selection state mirrored into the address bar.
//!
//! Parameters: `grade`, `strand`, `q`, `code`. A field at its default value
//! is left out of the query string entirely.

use serde::{Deserialize, Serialize};

/// Selector value meaning "no restriction".
pub const ALL: &str = "all";

/// Filter selection and progression focus. `None` means "all" for the two
/// selectors and "no focus" for `code`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewState {
    pub query: String,
    pub grade: Option<String>,
    pub strand: Option<String>,
    pub code: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct UrlParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grade: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    strand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    q: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl UrlParams {
    fn keep_first(&mut self, other: UrlParams) {
        self.grade = self.grade.take().or(other.grade);
        self.strand = self.strand.take().or(other.strand);
        self.q = self.q.take().or(other.q);
        self.code = self.code.take().or(other.code);
    }
}

impl ViewState {
    /// Reads the state from a query string, with or without the leading `?`.
    ///
    /// Each `key=value` pair is decoded on its own and the first value of a
    /// repeated key wins. Unknown parameters are ignored; a pair that cannot
    /// be decoded only leaves its own field at the default.
    pub fn from_query_string(search: &str) -> Self {
        let search = search.trim_start_matches('?');
        let mut params = UrlParams::default();
        for pair in search.split('&').filter(|p| !p.is_empty()) {
            match serde_qs::from_str::<UrlParams>(pair) {
                Ok(one) => params.keep_first(one),
                Err(e) => log::warn!("Ignoring malformed query parameter '{}': {}", pair, e),
            }
        }
        Self {
            query: params.q.unwrap_or_default(),
            grade: selector(params.grade),
            strand: selector(params.strand),
            code: params.code.filter(|c| !c.is_empty()),
        }
    }

    /// Query string without the leading `?`; empty when every field is at
    /// its default.
    pub fn to_query_string(&self) -> String {
        let params = UrlParams {
            grade: self.grade.clone().filter(|g| !g.is_empty() && g != ALL),
            strand: self.strand.clone().filter(|s| !s.is_empty() && s != ALL),
            q: Some(self.query.clone()).filter(|q| !q.is_empty()),
            code: self.code.clone().filter(|c| !c.is_empty()),
        };
        serde_qs::to_string(&params).unwrap_or_default()
    }

    /// Value for a `<select>`: the selected label or the `all` sentinel.
    pub fn grade_value(&self) -> String {
        self.grade.clone().unwrap_or_else(|| ALL.to_string())
    }

    pub fn strand_value(&self) -> String {
        self.strand.clone().unwrap_or_else(|| ALL.to_string())
    }

    /// Sets the grade from a `<select>` value.
    pub fn set_grade(&mut self, value: &str) {
        self.grade = selector(Some(value.to_string()));
    }

    pub fn set_strand(&mut self, value: &str) {
        self.strand = selector(Some(value.to_string()));
    }

    /// True when no filter narrows the list. The progression focus does not
    /// count as a filter.
    pub fn is_unfiltered(&self) -> bool {
        self.query.trim().is_empty() && self.grade.is_none() && self.strand.is_none()
    }

    /// Resets query, grade and strand. The progression focus is kept.
    pub fn clear_filters(&mut self) {
        self.query.clear();
        self.grade = None;
        self.strand = None;
    }

    pub fn active_filters_count(&self) -> usize {
        [
            !self.query.trim().is_empty(),
            self.grade.is_some(),
            self.strand.is_some(),
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }
}

fn selector(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty() && v != ALL)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_state() -> ViewState {
        ViewState {
            query: "main idea & details".to_string(),
            grade: Some("Grade 5".to_string()),
            strand: Some("Speaking and Listening".to_string()),
            code: Some("ELAGSE5RL1".to_string()),
        }
    }

    #[test]
    fn test_default_state_serializes_to_empty() {
        assert_eq!(ViewState::default().to_query_string(), "");
    }

    #[test]
    fn test_round_trip_full_state() {
        let state = full_state();
        let qs = state.to_query_string();
        assert_eq!(ViewState::from_query_string(&qs), state);
        assert_eq!(ViewState::from_query_string(&format!("?{}", qs)), state);
    }

    #[test]
    fn test_round_trip_partial_states() {
        let states = [
            ViewState {
                query: "quote".to_string(),
                ..Default::default()
            },
            ViewState {
                grade: Some("Grade 3".to_string()),
                ..Default::default()
            },
            ViewState {
                code: Some("ELAGSE5W2".to_string()),
                strand: Some("Writing".to_string()),
                ..Default::default()
            },
        ];
        for state in states {
            assert_eq!(ViewState::from_query_string(&state.to_query_string()), state);
        }
    }

    #[test]
    fn test_defaults_are_omitted() {
        let state = ViewState {
            grade: Some("Grade 5".to_string()),
            ..Default::default()
        };
        let qs = state.to_query_string();
        assert!(qs.contains("grade="));
        assert!(!qs.contains("strand="));
        assert!(!qs.contains("q="));
        assert!(!qs.contains("code="));
    }

    #[test]
    fn test_all_sentinel_reads_as_none() {
        let state = ViewState::from_query_string("?grade=all&strand=all&q=&code=");
        assert_eq!(state, ViewState::default());
    }

    #[test]
    fn test_unknown_params_ignored() {
        let state = ViewState::from_query_string("active=tab1&grade=Grade%205");
        assert_eq!(state.grade.as_deref(), Some("Grade 5"));
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_repeated_key_keeps_first_value() {
        let state = ViewState::from_query_string("?grade=Grade%205&grade=Grade%206&strand=Writing");
        assert_eq!(state.grade.as_deref(), Some("Grade 5"));
        assert_eq!(state.strand.as_deref(), Some("Writing"));
    }

    #[test]
    fn test_bare_keys_do_not_reset_other_fields() {
        let state = ViewState::from_query_string("?grade=Grade%205&q=a&q&utm_source&code=ELAGSE5RL1");
        assert_eq!(state.grade.as_deref(), Some("Grade 5"));
        assert_eq!(state.query, "a");
        assert_eq!(state.code.as_deref(), Some("ELAGSE5RL1"));

        let state = ViewState::from_query_string("?q&strand=Language");
        assert_eq!(state.query, "");
        assert_eq!(state.strand.as_deref(), Some("Language"));
    }

    #[test]
    fn test_empty_query_string_is_default() {
        assert_eq!(ViewState::from_query_string(""), ViewState::default());
        assert_eq!(ViewState::from_query_string("?"), ViewState::default());
        assert_eq!(ViewState::from_query_string("&&"), ViewState::default());
    }

    #[test]
    fn test_select_values() {
        let mut state = ViewState::default();
        assert_eq!(state.grade_value(), ALL);
        state.set_grade("Grade 4");
        assert_eq!(state.grade_value(), "Grade 4");
        state.set_grade(ALL);
        assert_eq!(state.grade, None);
        state.set_strand("Writing");
        assert_eq!(state.strand_value(), "Writing");
    }

    #[test]
    fn test_clear_filters_keeps_focus() {
        let mut state = full_state();
        assert_eq!(state.active_filters_count(), 3);
        state.clear_filters();
        assert!(state.is_unfiltered());
        assert_eq!(state.active_filters_count(), 0);
        assert_eq!(state.code.as_deref(), Some("ELAGSE5RL1"));
    }
}
