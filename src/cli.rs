use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "labcheck", version, about = "Course project checking utilities")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare expected vs. produced bitmaps for every configured test case.
    Images {
        #[arg(long, help = "Test fixture directory (default: mytests_2)")]
        dir: Option<String>,
        #[arg(long, help = "Suite config file overriding the built-in case list")]
        suite: Option<String>,
        #[arg(long, value_enum, default_value_t = CompareEngine::Builtin)]
        engine: CompareEngine,
    },
    /// Rewrite allocator trace files per the configured pairs.
    Rewrite {
        /// Run a single named pair instead of all configured pairs.
        pair: Option<String>,
        #[arg(long, default_value = ".", help = "Base directory for pair paths")]
        root: String,
        #[arg(long, help = "Pair config file overriding the built-in pair table")]
        pairs: Option<String>,
    },
    /// List the configured test-case names.
    Cases {
        #[arg(long)]
        suite: Option<String>,
    },
    /// List the configured rewrite pairs.
    Pairs {
        #[arg(long)]
        pairs: Option<String>,
    },
}

#[derive(Clone, Debug, ValueEnum)]
pub enum CompareEngine {
    /// In-process byte comparison.
    Builtin,
    /// Shell out to the external `diff` utility.
    Diff,
}
