use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Bitmap suite configuration: where the fixtures live and which cases to run.
#[derive(Debug, Deserialize, Clone)]
pub struct SuiteConfig {
    /// Fixture directory; falls back to the built-in default when absent.
    #[serde(default)]
    pub dir: Option<String>,
    pub cases: Vec<String>,
}

/// One trace rewrite: an input trace, an output path, and the size policy.
///
/// `alloc_size` pins the id-0 allocation; `realloc_slack` is the headroom
/// added before subtracting the originally requested reallocation size, so
/// the allocate+reallocate pair keeps its net footprint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RewritePair {
    pub name: String,
    pub input: String,
    pub output: String,
    pub alloc_size: i64,
    pub realloc_slack: i64,
}

#[derive(Debug, Serialize, Clone)]
pub struct CaseResult {
    pub name: String,
    /// One of `ok`, `mismatch`, `error`.
    pub status: String,
    pub detail: Option<String>,
}

#[derive(Serialize)]
pub struct SuiteReport {
    pub dir: String,
    pub results: Vec<CaseResult>,
    pub passed: bool,
}

#[derive(Debug, Serialize)]
pub struct RewriteStats {
    pub pair: String,
    pub input: String,
    pub output: String,
    pub lines: usize,
    pub rewritten_allocs: usize,
    pub rewritten_reallocs: usize,
}
