//! Update Service Module
//!
//! Partial field updates to score rows, single and bulk.
//!
//! ## Overview
//! Both paths send only the fields a caller supplied; omitted fields are left
//! untouched on the stored row, and an update never creates a record. The two
//! paths validate differently: the single path rejects an empty field set
//! outright, while the bulk path tolerates no-op entries rather than
//! aborting a batch over one inert item. A bulk
//! entry without an id, however, fails the whole batch before any remote call.
//!
//! ## Submodules
//! - **`service`**: The update operations and their validation rules.
//! - **`handlers`**: The `/tests/{id}/score` and `/tests/bulk-update` endpoints.
//! - **`types`**: The partial update DTOs.

pub mod handlers;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;
