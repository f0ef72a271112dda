//! Search Service Module
//!
//! Filtered reads over the score table.
//!
//! ## Overview
//! This module translates the filter criteria a request may supply (optional
//! substring matches, optional numeric score bounds) into a predicate
//! conjunction executed against the remote table store in one round trip.
//! It bridges the HTTP API layer with the store client.
//!
//! ## Responsibilities
//! - **Criteria**: The optional predicates a search/filter request may supply.
//! - **Query construction**: Each set criterion adds one predicate; substrings
//!   become case-insensitive contains, numeric bounds become inclusive ranges
//!   guarded by not-null.
//! - **API**: The `/tests/search` and `/tests/filter` endpoints, plus liveness
//!   and the store-connectivity health report.
//!
//! ## Submodules
//! - **`engine`**: Criteria-to-query translation and execution.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`types`**: The score record, filter criteria, and response DTOs.

pub mod engine;
pub mod handlers;
pub mod types;
