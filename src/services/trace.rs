use crate::domain::models::{RewritePair, RewriteStats};
use anyhow::Context;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum TraceError {
    #[error("malformed '{kind}' record: {raw:?}")]
    Malformed { kind: char, raw: String },
}

/// One trace line, parsed. Free records and anything else the allocator
/// harness understands pass through as `Other`.
#[derive(Debug, PartialEq, Eq)]
pub enum TraceRecord {
    Allocate { id: u64, size: i64 },
    Reallocate { id: u64, size: i64 },
    Other,
}

pub fn parse_record(line: &str) -> Result<TraceRecord, TraceError> {
    let mut tokens = line.split_whitespace();
    let kind = match tokens.next() {
        Some("a") => 'a',
        Some("r") => 'r',
        _ => return Ok(TraceRecord::Other),
    };
    let id = tokens.next().and_then(|t| t.parse::<u64>().ok());
    let size = tokens.next().and_then(|t| t.parse::<i64>().ok());
    match (id, size) {
        (Some(id), Some(size)) if kind == 'a' => Ok(TraceRecord::Allocate { id, size }),
        (Some(id), Some(size)) => Ok(TraceRecord::Reallocate { id, size }),
        _ => Err(TraceError::Malformed {
            kind,
            raw: line.to_string(),
        }),
    }
}

/// Rewrites one trace file. The id-0 allocation is pinned to
/// `pair.alloc_size`; the id-0 reallocation is compensated to
/// `alloc_size + realloc_slack - requested`, keeping the net footprint of
/// the allocate+reallocate pair equal to the original trace's. Records for
/// other ids, and free records, pass through verbatim.
pub fn rewrite_pair(root: &Path, pair: &RewritePair) -> anyhow::Result<RewriteStats> {
    let input = root.join(&pair.input);
    let output = root.join(&pair.output);

    let src = std::fs::File::open(&input)
        .with_context(|| format!("open trace {}", input.display()))?;
    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create {}", parent.display()))?;
    }
    // Truncates any previous run's output.
    let mut dst = std::fs::File::create(&output)
        .with_context(|| format!("create trace {}", output.display()))?;

    let mut stats = RewriteStats {
        pair: pair.name.clone(),
        input: pair.input.clone(),
        output: pair.output.clone(),
        lines: 0,
        rewritten_allocs: 0,
        rewritten_reallocs: 0,
    };

    for (idx, line) in BufReader::new(src).lines().enumerate() {
        let line = line.with_context(|| format!("read {}", input.display()))?;
        stats.lines += 1;
        let record = parse_record(&line)
            .with_context(|| format!("{} line {}", input.display(), idx + 1))?;
        match record {
            TraceRecord::Allocate { id: 0, .. } => {
                writeln!(dst, "a 0 {}", pair.alloc_size)?;
                stats.rewritten_allocs += 1;
            }
            TraceRecord::Reallocate { id: 0, size } => {
                writeln!(dst, "r 0 {}", pair.alloc_size + pair.realloc_slack - size)?;
                stats.rewritten_reallocs += 1;
            }
            _ => writeln!(dst, "{}", line)?,
        }
    }

    Ok(stats)
}
