//! UI screens.

mod app;
mod bills_screen;
mod new_bill_screen;
mod utils;

pub use app::App;
pub use bills_screen::{BillsAction, BillsScreen, BillsViewState, markers};
pub use new_bill_screen::{NEW_BILL_TITLE, NewBillAction, NewBillScreen};
pub use utils::{centered_rect, format_amount};
