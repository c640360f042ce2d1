use anyhow::Context;
use sha2::{Digest, Sha256};
use std::path::Path;

#[derive(Debug)]
pub enum Comparison {
    Match,
    Mismatch(String),
}

/// Byte-exact file comparison, injectable so the suite runner does not care
/// whether it is an in-process compare or an external tool.
pub trait Comparator {
    fn compare(&self, expected: &Path, actual: &Path) -> anyhow::Result<Comparison>;
}

/// In-process comparison. Silent on identical files; on mismatch reports the
/// first differing offset (or the length difference) plus short digests.
pub struct ByteCompare;

impl Comparator for ByteCompare {
    fn compare(&self, expected: &Path, actual: &Path) -> anyhow::Result<Comparison> {
        let want = std::fs::read(expected)
            .with_context(|| format!("read expected image {}", expected.display()))?;
        let got = std::fs::read(actual)
            .with_context(|| format!("read produced image {}", actual.display()))?;

        if want == got {
            return Ok(Comparison::Match);
        }

        let detail = if want.len() != got.len() {
            format!(
                "{} and {} differ: {} vs {} bytes (sha256 {} vs {})",
                expected.display(),
                actual.display(),
                want.len(),
                got.len(),
                short_digest(&want),
                short_digest(&got),
            )
        } else {
            let offset = want
                .iter()
                .zip(got.iter())
                .position(|(a, b)| a != b)
                .unwrap_or(0);
            format!(
                "{} and {} differ at byte {} (sha256 {} vs {})",
                expected.display(),
                actual.display(),
                offset,
                short_digest(&want),
                short_digest(&got),
            )
        };
        Ok(Comparison::Mismatch(detail))
    }
}

fn short_digest(bytes: &[u8]) -> String {
    let digest = hex::encode(Sha256::digest(bytes));
    digest[..12].to_string()
}

/// External comparison via the `diff` utility; its combined stdout/stderr is
/// surfaced verbatim as the mismatch detail.
pub struct DiffTool;

impl Comparator for DiffTool {
    fn compare(&self, expected: &Path, actual: &Path) -> anyhow::Result<Comparison> {
        let out = std::process::Command::new("diff")
            .arg(expected)
            .arg(actual)
            .output()
            .context("spawn diff")?;

        let mut text = String::from_utf8_lossy(&out.stdout).into_owned();
        text.push_str(&String::from_utf8_lossy(&out.stderr));
        let text = text.trim_end().to_string();

        if out.status.success() && text.is_empty() {
            Ok(Comparison::Match)
        } else {
            Ok(Comparison::Mismatch(text))
        }
    }
}
