//! University Lookup Module
//!
//! Retrieves university records by postal code from the remote store's
//! `universities` table. A zip with no universities is an empty list, not an
//! error.
//!
//! ## Submodules
//! - **`handlers`**: The `/api/universities` endpoint.
//! - **`types`**: The university record DTO.

pub mod handlers;
pub mod types;

#[cfg(test)]
mod tests;
