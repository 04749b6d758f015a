//! Entity definitions.

mod bill;
mod user;

pub use bill::{Bill, BillId, DisplayBill};
pub use user::{UserSession, UserType};
