//! Client state persistence adapters.

mod session_store;

pub use session_store::SessionStore;
