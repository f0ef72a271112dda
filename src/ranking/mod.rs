//! Ranking Module
//!
//! Produces the top-schools leaderboard for one score column.
//!
//! ## Overview
//! The ranking pass loads a full (school name, score) projection from the
//! remote store, coerces each cell through a typed outcome (score, missing,
//! malformed), filters against a threshold, collapses duplicate school names
//! keep-last, and sorts descending with optional truncation.
//!
//! A single malformed cell never aborts a ranking pass; it is skipped and the
//! pass continues. A zero-row result triggers a 1-row existence probe to
//! distinguish a genuinely empty table from a permission or transport fault,
//! best-effort.
//!
//! ## Submodules
//! - **`engine`**: The fetch-coerce-filter-sort pipeline.
//! - **`handlers`**: The `/tests/top` endpoint.
//! - **`types`**: Cell coercion outcomes and the ranking entry DTO.

pub mod engine;
pub mod handlers;
pub mod types;
