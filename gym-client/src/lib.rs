//! Gym Client - data layer for the gym administration console
//!
//! Keeps an in-memory cache of members, staff, goods, classes,
//! purchases, calendar events and the shared lookup categories
//! synchronized with the remote REST backend, and exposes CRUD-shaped
//! store actions plus derived views to the presentation layer.

pub mod config;
pub mod error;
pub mod http;
pub mod services;
pub mod session;
pub mod stores;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::Session;
pub use stores::StoreContext;

// Re-export shared types for convenience
pub use shared::{ApiResponse, Keyed};
