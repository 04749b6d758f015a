//! Event handling.

use tokio::sync::mpsc;
use tracing::warn;

use crate::domain::entities::DisplayBill;
use crate::domain::ports::NavigatorPort;
use crate::domain::route::Route;

/// Asynchronous results delivered back to the main loop.
#[derive(Debug)]
pub enum Action {
    /// A fetch resolved; `generation` identifies the mount it belongs to.
    BillsLoaded {
        /// Mount generation the fetch was started for.
        generation: u64,
        /// Bills in display order.
        bills: Vec<DisplayBill>,
    },
    /// A fetch rejected with the given message.
    LoadFailed {
        /// Mount generation the fetch was started for.
        generation: u64,
        /// Error message, surfaced verbatim.
        message: String,
    },
    /// A navigation was requested.
    Navigate(Route),
}

/// Navigator capability backed by the main loop's action channel.
///
/// Screens and background tasks hold this instead of mutating the app
/// state directly; the loop performs the actual screen switch.
#[derive(Clone)]
pub struct ChannelNavigator {
    tx: mpsc::UnboundedSender<Action>,
}

impl ChannelNavigator {
    /// Creates a navigator sending on the given channel.
    #[must_use]
    pub const fn new(tx: mpsc::UnboundedSender<Action>) -> Self {
        Self { tx }
    }
}

impl NavigatorPort for ChannelNavigator {
    fn navigate(&self, route: Route) {
        if self.tx.send(Action::Navigate(route)).is_err() {
            warn!(route = %route, "Navigation requested after the main loop stopped");
        }
    }
}
