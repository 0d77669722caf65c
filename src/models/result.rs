use serde::Deserialize;

use super::status::SpecStatus;

/// Browser descriptor as delivered by the host on every hook.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Browser {
    pub id: String,
    pub full_name: String,
}

/// Spec result descriptor as delivered by the host on each spec callback.
///
/// `log` carries the raw error values reported for a failing spec, in the
/// order the host collected them. It stays untyped; rendering is the
/// injected error formatter's job.
#[derive(Debug, Clone, Deserialize)]
pub struct SpecInfo {
    pub description: String,
    #[serde(default)]
    pub suite: Vec<String>,
    #[serde(default)]
    pub log: Vec<serde_json::Value>,
}

/// One recorded spec outcome, in the shape the TAP lines are built from.
#[derive(Debug, Clone)]
pub struct SpecResult {
    pub description: String,
    pub suite: Vec<String>,
    pub status: SpecStatus,
    pub skipped: bool,
    pub failures: Vec<String>,
}

impl SpecResult {
    pub fn passed(spec: &SpecInfo) -> Self {
        Self {
            description: spec.description.clone(),
            suite: spec.suite.clone(),
            status: SpecStatus::Ok,
            skipped: false,
            failures: Vec::new(),
        }
    }

    pub fn failed(spec: &SpecInfo, failures: Vec<String>) -> Self {
        Self {
            description: spec.description.clone(),
            suite: spec.suite.clone(),
            status: SpecStatus::NotOk,
            skipped: false,
            failures,
        }
    }

    pub fn skipped(spec: &SpecInfo) -> Self {
        Self {
            description: spec.description.clone(),
            suite: spec.suite.clone(),
            status: SpecStatus::Ok,
            skipped: true,
            failures: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(description: &str) -> SpecInfo {
        SpecInfo {
            description: description.into(),
            suite: vec!["Math".into()],
            log: Vec::new(),
        }
    }

    #[test]
    fn passed_has_no_failures() {
        let r = SpecResult::passed(&spec("adds"));
        assert_eq!(r.status, SpecStatus::Ok);
        assert!(!r.skipped);
        assert!(r.failures.is_empty());
    }

    #[test]
    fn skipped_is_ok_with_flag() {
        let r = SpecResult::skipped(&spec("adds"));
        assert_eq!(r.status, SpecStatus::Ok);
        assert!(r.skipped);
        assert!(r.failures.is_empty());
    }

    #[test]
    fn failed_keeps_failure_order() {
        let r = SpecResult::failed(&spec("subtracts"), vec!["first".into(), "second".into()]);
        assert_eq!(r.status, SpecStatus::NotOk);
        assert_eq!(r.failures, vec!["first", "second"]);
    }

    #[test]
    fn browser_deserializes_camel_case() {
        let b: Browser =
            serde_json::from_str(r#"{"id":"b1","fullName":"Mozilla/5.0 Chrome/90.0"}"#).unwrap();
        assert_eq!(b.id, "b1");
        assert_eq!(b.full_name, "Mozilla/5.0 Chrome/90.0");
    }

    #[test]
    fn spec_info_defaults_suite_and_log() {
        let s: SpecInfo = serde_json::from_str(r#"{"description":"adds"}"#).unwrap();
        assert!(s.suite.is_empty());
        assert!(s.log.is_empty());
    }
}
