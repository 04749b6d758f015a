//! Navigation port definition.

use crate::domain::route::Route;

/// Port for switching the displayed screen.
///
/// Synchronous and infallible: navigation is assumed always available.
pub trait NavigatorPort: Send + Sync {
    /// Navigates to the given route.
    fn navigate(&self, route: Route);
}
