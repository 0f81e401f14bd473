//! Entity stores
//!
//! Each store owns the canonical in-memory collection for one entity,
//! the currently selected item, loading/error flags and a text filter.
//! Stores are the sole error boundary: every action settles to a
//! uniform `ActionResult`, always clears `loading`, and never
//! partially mutates the collection on failure. Views treat all store
//! fields as read-only; only the store's own actions mutate them.

mod category;
mod class;
mod context;
mod event;
mod goods;
mod member;
mod purchase;
mod staff;
mod state;

pub use category::{CategoryServices, CategoryStore};
pub use class::ClassStore;
pub use context::StoreContext;
pub use event::EventStore;
pub use goods::GoodsStore;
pub use member::MemberStore;
pub use purchase::PurchaseStore;
pub use staff::StaffStore;
pub use state::{ActionResult, Reconcile, StoreState};
