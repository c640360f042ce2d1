use crate::cli::{Cli, Commands, CompareEngine};
use crate::domain::constants::{DEFAULT_TEST_DIR, SUMMARY_MESSAGE};
use crate::domain::models::{JsonOut, SuiteReport};
use crate::services::compare::{ByteCompare, Comparator, DiffTool};
use crate::services::config::{load_pairs, load_suite};
use crate::services::images::run_suite;
use crate::services::output::print_out;
use crate::services::trace::rewrite_pair;
use std::path::Path;

pub fn handle_commands(cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Images { dir, suite, engine } => {
            let suite_cfg = load_suite(suite.as_deref())?;
            let dir = dir
                .clone()
                .or_else(|| suite_cfg.dir.clone())
                .unwrap_or_else(|| DEFAULT_TEST_DIR.to_string());
            let comparator: Box<dyn Comparator> = match engine {
                CompareEngine::Builtin => Box::new(ByteCompare),
                CompareEngine::Diff => Box::new(DiffTool),
            };
            let results = run_suite(Path::new(&dir), &suite_cfg.cases, comparator.as_ref());
            if cli.json {
                let passed = results.iter().all(|r| r.status == "ok");
                let report = SuiteReport { dir, results, passed };
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                // Matching cases stay silent; only mismatch/error details
                // surface, then the fixed summary line.
                for r in &results {
                    if let Some(detail) = &r.detail {
                        println!("{}", detail);
                    }
                }
                println!("{}", SUMMARY_MESSAGE);
            }
        }
        Commands::Rewrite { pair, root, pairs } => {
            let table = load_pairs(pairs.as_deref())?;
            let selected = match pair {
                Some(name) => {
                    let p = table
                        .iter()
                        .find(|p| p.name == *name)
                        .ok_or_else(|| anyhow::anyhow!("pair not found: {}", name))?;
                    vec![p.clone()]
                }
                None => table,
            };
            let mut stats = Vec::with_capacity(selected.len());
            for p in &selected {
                stats.push(rewrite_pair(Path::new(root), p)?);
            }
            print_out(cli.json, &stats, |s| {
                format!(
                    "{}\t{} -> {}\t{} lines\t{} allocs\t{} reallocs",
                    s.pair, s.input, s.output, s.lines, s.rewritten_allocs, s.rewritten_reallocs
                )
            })?;
        }
        Commands::Cases { suite } => {
            let suite_cfg = load_suite(suite.as_deref())?;
            print_out(cli.json, &suite_cfg.cases, |c| c.clone())?;
        }
        Commands::Pairs { pairs } => {
            let table = load_pairs(pairs.as_deref())?;
            print_out(cli.json, &table, |p| {
                format!("{}\t{}\t{}", p.name, p.input, p.output)
            })?;
        }
    }

    Ok(())
}
