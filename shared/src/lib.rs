//! Shared types for the gym console
//!
//! Entity models, request projections, lookup-category tables and the
//! response envelope used by the data layer and the console shell.

pub mod models;
pub mod response;

// Re-exports
pub use models::Keyed;
pub use response::ApiResponse;
pub use serde::{Deserialize, Serialize};
