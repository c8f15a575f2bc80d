// src/application/navigator.rs
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    Login,
    Notes,
}

/// Back stack of screens. The last entry is the visible one.
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Navigator {
    pub fn start(route: Route) -> Self {
        debug!(?route, "Starting navigation");
        Self { stack: vec![route] }
    }

    pub fn current(&self) -> Option<Route> {
        self.stack.last().copied()
    }

    /// Replace the current screen with `route`, so back-navigation can't
    /// return to it.
    pub fn navigate_clearing(&mut self, route: Route) {
        let popped = self.stack.pop();
        debug!(?popped, ?route, "Navigating and clearing previous screen");
        self.stack.push(route);
    }

    /// Pop the current screen. `None` means the history is empty and the
    /// app should exit.
    pub fn back(&mut self) -> Option<Route> {
        self.stack.pop();
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_login_start_when_navigating_clearing_then_back_exits() {
        let mut nav = Navigator::start(Route::Login);

        nav.navigate_clearing(Route::Notes);

        assert_eq!(nav.current(), Some(Route::Notes));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.current(), None);
    }

    #[test]
    fn given_notes_start_when_going_back_then_history_is_empty() {
        let mut nav = Navigator::start(Route::Notes);

        assert_eq!(nav.back(), None);
    }
}
