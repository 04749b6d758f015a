//! Screen routes.

/// A navigable screen of the application.
///
/// Path identifiers are stable: automated checks and deep links locate
/// screens by them, so they are part of the interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Login screen.
    Login,
    /// Bills list screen.
    Bills,
    /// New bill submission screen.
    NewBill,
}

impl Route {
    /// Returns the stable path identifier for this route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Login => "/",
            Self::Bills => "#employee/bills",
            Self::NewBill => "#employee/bill/new",
        }
    }

    /// Resolves a path identifier back to a route.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Self::Login),
            "#employee/bills" => Some(Self::Bills),
            "#employee/bill/new" => Some(Self::NewBill),
            _ => None,
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}
