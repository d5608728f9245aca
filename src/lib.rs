//! Tactical Patcher: one-shot Vec2 -> Vec3 migration for TacticalPlanner.cs
//!
//! Rewrites call sites in a single C# source file after an API change: the
//! formation direction became a 2D vector that must be lifted into `Vec3`,
//! and the arrangement-order enum comparison was replaced with a string
//! check.
//!
//! # Architecture
//!
//! The tool is a straight pipeline: read the target file, run an ordered
//! table of literal search/replace [`Rule`]s over the text, write the result
//! back, print one confirmation line. The rules and target path are
//! compiled-in constants in [`rules`]; [`rewrite`] is the pure text engine;
//! [`patcher`] owns file I/O.
//!
//! # Safety
//!
//! - Writes are atomic (tempfile + fsync + rename): a failure leaves the
//!   original file untouched.
//! - Matching is literal substring search; no regex interpretation.
//! - A rule whose pattern is absent is a silent no-op, and a second run over
//!   already-patched text changes nothing.

pub mod patcher;
pub mod rewrite;
pub mod rules;

// Re-exports
pub use patcher::{patch_file, run, PatchError, PatchReport};
pub use rewrite::{apply_rule, rewrite, Rewrite, RuleOutcome};
pub use rules::{Rule, RULES, SUCCESS_MESSAGE, TARGET_FILE};
