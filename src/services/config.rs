use crate::domain::constants::{default_pairs, DEFAULT_TEST_CASES};
use crate::domain::models::{RewritePair, SuiteConfig};
use anyhow::Context;

pub fn load_suite(path: Option<&str>) -> anyhow::Result<SuiteConfig> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("read suite config {}", p))?;
            serde_json::from_str(&raw).with_context(|| format!("parse suite config {}", p))
        }
        None => Ok(SuiteConfig {
            dir: None,
            cases: DEFAULT_TEST_CASES.iter().map(|s| s.to_string()).collect(),
        }),
    }
}

pub fn load_pairs(path: Option<&str>) -> anyhow::Result<Vec<RewritePair>> {
    match path {
        Some(p) => {
            let raw = std::fs::read_to_string(p)
                .with_context(|| format!("read pair config {}", p))?;
            serde_json::from_str(&raw).with_context(|| format!("parse pair config {}", p))
        }
        None => Ok(default_pairs()),
    }
}
