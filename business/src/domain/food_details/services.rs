use crate::domain::shared::value_objects::FoodId;

/// Root screen the stack is reset to once an order is placed.
pub const DASHBOARD_ROUTE: &str = "Dashboard";

/// Parameters the navigation host passes when opening the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteParams {
    pub id: FoodId,
}

/// Service port for the navigation host.
pub trait Navigator: Send + Sync {
    /// Replaces the whole stack with a single `root` entry.
    fn reset(&self, root: &str);
}

/// Service port turning a price into its display string.
pub trait ValueFormatter: Send + Sync {
    fn format_value(&self, value: f64) -> String;
}
