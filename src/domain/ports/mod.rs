//! Port definitions.

mod bills_port;
mod navigator_port;
mod session_port;

pub use bills_port::BillsPort;
pub use navigator_port::NavigatorPort;
pub use session_port::SessionPort;

#[cfg(test)]
pub mod mocks {
    pub use super::bills_port::mock::MockBillsPort;
    pub use super::navigator_port::mock::MockNavigator;
    pub use super::session_port::mock::MockSessionPort;
}
