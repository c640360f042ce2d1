use crate::domain::models::RewritePair;

pub const DEFAULT_TEST_DIR: &str = "mytests_2";

/// Printed exactly once after a full suite run, whatever the outcomes.
pub const SUMMARY_MESSAGE: &str = "All tests are passed if no output is generated";

/// The stock rotation test suite: solid fills, noise, gradients, geometric
/// shapes and periodic patterns. Order matters for operator-facing output.
pub const DEFAULT_TEST_CASES: [&str; 20] = [
    "big_chessboard",
    "big_quarter",
    "chessboard",
    "circle",
    "diagonal_stripe",
    "diffusion",
    "ellipse_and_stripe",
    "framed_white_noise",
    "gradient",
    "hash",
    "letter_z",
    "main_diagonal",
    "parabole",
    "quarter",
    "single_point",
    "solid_color",
    "stripes",
    "tiles",
    "two_squares",
    "white_noise",
];

/// Built-in rewrite table deriving the c10 traces from the c9 ones.
pub fn default_pairs() -> Vec<RewritePair> {
    vec![
        RewritePair {
            name: "c9-to-c10-v0".to_string(),
            input: "traces/trace_c9_v0".to_string(),
            output: "extra_traces/trace_c10_v0".to_string(),
            alloc_size: 614_784,
            realloc_slack: 512,
        },
        RewritePair {
            name: "c9-to-c10-v1".to_string(),
            input: "additional_traces/trace_c9_v1".to_string(),
            output: "extra_traces/trace_c10_v1".to_string(),
            alloc_size: 28_087,
            realloc_slack: 4_092,
        },
    ]
}
