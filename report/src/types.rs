use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Outcome recorded for a single test entry in the aggregated report.
///
/// The report stores outcomes as free-form strings; only `PASS`, `SKIP`,
/// and `ERROR` carry meaning for reconciliation. Everything else is kept
/// verbatim in `Other` so the document round-trips unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Outcome {
    Pass,
    Skip,
    Error,
    Other(String),
}

impl From<String> for Outcome {
    fn from(value: String) -> Self {
        match value.as_str() {
            "PASS" => Outcome::Pass,
            "SKIP" => Outcome::Skip,
            "ERROR" => Outcome::Error,
            _ => Outcome::Other(value),
        }
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Pass => "PASS".to_string(),
            Outcome::Skip => "SKIP".to_string(),
            Outcome::Error => "ERROR".to_string(),
            Outcome::Other(value) => value,
        }
    }
}

/// Aggregated result report: suite name -> entry name -> outcome.
///
/// Entry names are the log filenames the report generator recorded
/// (e.g. `tail-2/wait.log`), not source-script paths. BTreeMap keeps
/// iteration order deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultReport {
    suites: BTreeMap<String, BTreeMap<String, Outcome>>,
}

impl ResultReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a report from its JSON wire form.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn insert(
        &mut self,
        suite: impl Into<String>,
        entry: impl Into<String>,
        outcome: Outcome,
    ) {
        self.suites
            .entry(suite.into())
            .or_default()
            .insert(entry.into(), outcome);
    }

    /// Iterate suites in name order.
    pub fn suites(&self) -> impl Iterator<Item = (&str, &BTreeMap<String, Outcome>)> {
        self.suites.iter().map(|(name, entries)| (name.as_str(), entries))
    }

    pub fn suite_count(&self) -> usize {
        self.suites.len()
    }

    pub fn entry_count(&self) -> usize {
        self.suites.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_maps_known_strings() {
        assert_eq!(Outcome::from("PASS".to_string()), Outcome::Pass);
        assert_eq!(Outcome::from("SKIP".to_string()), Outcome::Skip);
        assert_eq!(Outcome::from("ERROR".to_string()), Outcome::Error);
        assert_eq!(
            Outcome::from("FAIL".to_string()),
            Outcome::Other("FAIL".to_string())
        );
        // Case matters: the report writes outcomes in upper case.
        assert_eq!(
            Outcome::from("pass".to_string()),
            Outcome::Other("pass".to_string())
        );
    }

    #[test]
    fn outcome_round_trips_through_string() {
        for raw in ["PASS", "SKIP", "ERROR", "XPASS", ""] {
            let outcome = Outcome::from(raw.to_string());
            assert_eq!(String::from(outcome), raw);
        }
    }

    #[test]
    fn report_parses_wire_format() {
        let text = r#"{"tail-2": {"wait.log": "PASS", "follow.log": "ERROR"}, "df": {"total.log": "SKIP"}}"#;
        let report = ResultReport::from_json(text).unwrap();

        assert_eq!(report.suite_count(), 2);
        assert_eq!(report.entry_count(), 3);

        let (first_suite, entries) = report.suites().next().unwrap();
        assert_eq!(first_suite, "df");
        assert_eq!(entries["total.log"], Outcome::Skip);
    }

    #[test]
    fn report_preserves_unknown_outcomes() {
        let text = r#"{"misc": {"odd.log": "XPASS"}}"#;
        let report = ResultReport::from_json(text).unwrap();
        let (_, entries) = report.suites().next().unwrap();
        assert_eq!(entries["odd.log"], Outcome::Other("XPASS".to_string()));

        let back = serde_json::to_string(&report).unwrap();
        assert_eq!(back, text.replace(": ", ":").replace(", ", ","));
    }

    #[test]
    fn insert_builds_nested_suites() {
        let mut report = ResultReport::new();
        report.insert("cp", "link.log", Outcome::Pass);
        report.insert("cp", "sparse.log", Outcome::Error);
        assert_eq!(report.suite_count(), 1);
        assert_eq!(report.entry_count(), 2);
        assert!(!report.is_empty());
    }
}
