//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep config/report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — suite/pair configs and report/output structs.
//! - `constants.rs` — built-in case list, pair table, fixed messages.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem or process side effects.
//!
//! ## Compatibility note
//! Changes in these structs affect `--json` outputs and the contracts under
//! `docs/contracts/*`. Keep schema-impacting changes synchronized.

pub mod constants;
pub mod models;
