mod receipt_viewer;

pub use receipt_viewer::{DEFAULT_WIDTH_PERCENT, NO_RECEIPT_TEXT, RECEIPT_TITLE, ReceiptViewer};
