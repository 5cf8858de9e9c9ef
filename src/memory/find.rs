use regex::Regex;

use super::store::{ERR_CRITERIA_INVALID, LayoutData, field_missing};
use crate::driver::DriverResult;
use crate::error::DriverError;

/// One compiled criterion: field index plus value matcher.
#[derive(Debug)]
pub(super) struct CriterionMatcher {
    idx: usize,
    regex: Regex,
}

/// Compile unescaped criteria against a layout's schema.
///
/// `*` is the only wildcard; everything else matches literally and
/// case-insensitively, matching the remote's find semantics.
pub(super) fn build_matchers(
    data: &LayoutData,
    criteria: &[(String, String)],
) -> DriverResult<Vec<CriterionMatcher>> {
    criteria
        .iter()
        .map(|(field, value)| {
            let idx = data
                .field_names
                .iter()
                .position(|name| name == field)
                .ok_or_else(|| field_missing(field))?;
            Ok(CriterionMatcher {
                idx,
                regex: compile(value)?,
            })
        })
        .collect()
}

pub(super) fn record_matches(matchers: &[CriterionMatcher], values: &[String]) -> bool {
    matchers
        .iter()
        .all(|matcher| values.get(matcher.idx).is_some_and(|v| matcher.regex.is_match(v)))
}

fn compile(pattern: &str) -> DriverResult<Regex> {
    let body = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("(?i)^{body}$")).map_err(|err| {
        DriverError::new(ERR_CRITERIA_INVALID, format!("invalid find criteria: {err}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contacts() -> LayoutData {
        LayoutData {
            field_names: vec!["name".to_string(), "email".to_string()],
            ..LayoutData::default()
        }
    }

    fn matches(criteria: &[(&str, &str)], values: &[&str]) -> bool {
        let criteria: Vec<(String, String)> = criteria
            .iter()
            .map(|(f, v)| ((*f).to_string(), (*v).to_string()))
            .collect();
        let matchers = build_matchers(&contacts(), &criteria).expect("criteria compile");
        let values: Vec<String> = values.iter().map(|v| (*v).to_string()).collect();
        record_matches(&matchers, &values)
    }

    #[test]
    fn literal_match_is_case_insensitive() {
        assert!(matches(&[("name", "joe")], &["Joe", "joe@example.net"]));
        assert!(!matches(&[("name", "joe")], &["Joanna", "x"]));
    }

    #[test]
    fn star_is_the_only_wildcard() {
        assert!(matches(&[("name", "Jo*")], &["Joanna", "x"]));
        assert!(matches(&[("email", "*@example.net")], &["Joe", "joe@example.net"]));
        // Regex metacharacters in criteria are literal text.
        assert!(!matches(&[("name", "J.e")], &["Joe", "x"]));
    }

    #[test]
    fn all_criteria_must_match() {
        assert!(matches(
            &[("name", "Joe"), ("email", "*example*")],
            &["Joe", "joe@example.net"],
        ));
        assert!(!matches(
            &[("name", "Joe"), ("email", "*@other.net")],
            &["Joe", "joe@example.net"],
        ));
    }

    #[test]
    fn unknown_criterion_field_is_a_coded_error() {
        let criteria = vec![("missing".to_string(), "x".to_string())];
        let err = build_matchers(&contacts(), &criteria).unwrap_err();
        assert_eq!(err.code(), 102);
    }
}
