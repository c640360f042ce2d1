//! Service layer containing the checking logic and side-effect helpers.
//!
//! ## Service map
//! - `compare.rs` — byte-exact bitmap comparison capability (builtin/diff).
//! - `images.rs` — suite runner over the configured test cases.
//! - `trace.rs` — trace record parsing and the rewrite pass.
//! - `config.rs` — suite/pair config loading with built-in defaults.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod compare;
pub mod config;
pub mod images;
pub mod output;
pub mod trace;
