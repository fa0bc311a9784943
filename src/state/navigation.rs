// Navigation state management.
// Handles the route history stack and the breadcrumb trail.

use crate::router::Route;

/// A node in the navigation breadcrumb trail.
#[derive(Debug, Clone)]
pub struct BreadcrumbNode {
    /// Display label for the breadcrumb.
    pub label: String,
}

/// Route history. The bottom entry is the root and is never popped.
#[derive(Debug, Clone)]
pub struct NavigationStack {
    stack: Vec<Route>,
}

impl NavigationStack {
    /// Create a new navigation stack starting at the given route.
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    /// Get the current route.
    pub fn current(&self) -> Route {
        // The root is never popped, so the stack is never empty.
        self.stack.last().copied().unwrap_or(Route::Listing)
    }

    /// Push a route (navigate forward).
    pub fn push(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop the current route (go back). Returns false if at root.
    pub fn pop(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Check if we can go back (not at root).
    pub fn can_go_back(&self) -> bool {
        self.stack.len() > 1
    }

    /// Get the breadcrumb trail.
    pub fn breadcrumbs(&self) -> Vec<BreadcrumbNode> {
        self.stack
            .iter()
            .map(|route| BreadcrumbNode {
                label: route.label(),
            })
            .collect()
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new(Route::Listing)
    }
}
