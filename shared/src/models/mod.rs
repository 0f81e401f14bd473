//! Data models
//!
//! Shared between the data layer and the console shell. Wire names are
//! camelCase; irregular backend spellings (`AtNum`, `endEt`) are kept
//! verbatim through explicit renames.
//! All surrogate keys are `i64` (AUTO_INCREMENT PK, server-assigned).

pub mod category;
pub mod class;
pub mod event;
pub mod goods;
pub mod member;
pub mod purchase;
pub mod staff;

// Re-exports
pub use category::*;
pub use class::*;
pub use event::*;
pub use goods::*;
pub use member::*;
pub use purchase::*;
pub use staff::*;

/// Access to the server-assigned surrogate key.
///
/// Implemented by every read entity so the store mutation strategies
/// (replace-by-idx, retain-out-idx) can be written once.
pub trait Keyed {
    fn idx(&self) -> i64;
}
