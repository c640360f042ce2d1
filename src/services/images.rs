use crate::domain::models::CaseResult;
use crate::services::compare::{Comparator, Comparison};
use std::path::Path;

/// Runs every configured case against `<dir>/<name>_expected.bmp` vs.
/// `<dir>/<name>_our.bmp`. A failing case never stops the run; it becomes a
/// `mismatch` or `error` result and the loop continues.
pub fn run_suite(dir: &Path, cases: &[String], comparator: &dyn Comparator) -> Vec<CaseResult> {
    let mut results = Vec::with_capacity(cases.len());
    for name in cases {
        let expected = dir.join(format!("{}_expected.bmp", name));
        let actual = dir.join(format!("{}_our.bmp", name));
        let result = match comparator.compare(&expected, &actual) {
            Ok(Comparison::Match) => CaseResult {
                name: name.clone(),
                status: "ok".to_string(),
                detail: None,
            },
            Ok(Comparison::Mismatch(detail)) => CaseResult {
                name: name.clone(),
                status: "mismatch".to_string(),
                detail: Some(detail),
            },
            Err(e) => CaseResult {
                name: name.clone(),
                status: "error".to_string(),
                detail: Some(format!("{:#}", e)),
            },
        };
        results.push(result);
    }
    results
}

#[cfg(test)]
mod tests {
    use super::run_suite;
    use crate::services::compare::{Comparator, Comparison};
    use std::path::Path;

    /// Fails every second case, errors every third; the runner must still
    /// visit all of them in order.
    struct Scripted(std::cell::Cell<usize>);

    impl Comparator for Scripted {
        fn compare(&self, _: &Path, _: &Path) -> anyhow::Result<Comparison> {
            let n = self.0.get();
            self.0.set(n + 1);
            match n % 3 {
                0 => Ok(Comparison::Match),
                1 => Ok(Comparison::Mismatch(format!("case {} differs", n))),
                _ => anyhow::bail!("case {} unreadable", n),
            }
        }
    }

    #[test]
    fn suite_visits_every_case_without_short_circuit() {
        let cases: Vec<String> = (0..6).map(|i| format!("case{}", i)).collect();
        let results = run_suite(Path::new("fixtures"), &cases, &Scripted(0.into()));
        assert_eq!(results.len(), 6);
        let statuses: Vec<&str> = results.iter().map(|r| r.status.as_str()).collect();
        assert_eq!(
            statuses,
            ["ok", "mismatch", "error", "ok", "mismatch", "error"]
        );
        assert_eq!(results[3].name, "case3");
    }

    #[test]
    fn matching_cases_carry_no_detail() {
        struct AlwaysMatch;
        impl Comparator for AlwaysMatch {
            fn compare(&self, _: &Path, _: &Path) -> anyhow::Result<Comparison> {
                Ok(Comparison::Match)
            }
        }
        let cases = vec!["solid_color".to_string()];
        let results = run_suite(Path::new("fixtures"), &cases, &AlwaysMatch);
        assert_eq!(results[0].status, "ok");
        assert!(results[0].detail.is_none());
    }
}
