//! Domain layer with core business entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Screen routes.
pub mod route;

pub use entities::{Bill, DisplayBill, UserSession};
pub use errors::ApiError;
pub use ports::{BillsPort, NavigatorPort, SessionPort};
pub use route::Route;
