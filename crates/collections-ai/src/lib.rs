//! Scoring and assignment heuristics for debt-collection case and agency (DCA) management.
//!
//! The `scoring` module holds the deterministic, stateless pipelines that turn raw case and
//! agency attributes into recovery estimates, priority/risk scores, agency scorecards, and
//! greedy case-to-agency assignments. `config`, `telemetry`, and `error` carry the runtime
//! plumbing shared with the HTTP service.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
