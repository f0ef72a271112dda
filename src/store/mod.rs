//! Remote Table Store Module
//!
//! A thin client for the hosted relational table store (a Supabase/PostgREST-style
//! HTTP API). All persistent state in the system lives behind this module; the
//! service itself keeps nothing in process.
//!
//! ## Core Concepts
//! - **Queries**: `SelectQuery` composes a column projection with equality, substring,
//!   range and not-null predicates, rendered as PostgREST query parameters.
//! - **Execution**: `StoreClient` runs a query (or an update-by-id) in a single HTTP
//!   round trip and deserializes the returned row set.
//! - **Lifecycle**: the client is constructed once from environment configuration and
//!   passed to call sites; `StoreState` captures whether construction succeeded so the
//!   health endpoint can report connected / disconnected / error.
//!
//! ## Submodules
//! - **`client`**: The HTTP client and its configuration lifecycle.
//! - **`query`**: The predicate/projection builder.
//! - **`error`**: The error taxonomy remote-facing operations report through.

pub mod client;
pub mod error;
pub mod query;
