use ratatui::widgets::ListState;

/// Named navigation transitions. Dashboards and registration flows are
/// placeholder destinations; the transitions exist so the screens have
/// somewhere to land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    StudentLogin,
    AdminLogin,
    StudentDashboard,
    AdminDashboard,
    StudentRegister { college_id: Option<u64> },
    CollegeAdminRequest,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::StudentLogin => "Student Login",
            Route::AdminLogin => "Staff Login",
            Route::StudentDashboard => "Student Dashboard",
            Route::AdminDashboard => "Admin Dashboard",
            Route::StudentRegister { .. } => "Create Account",
            Route::CollegeAdminRequest => "Request Registration",
        }
    }
}

/// State management for UI-specific state: the navigation stack plus
/// screen-independent chrome.
pub struct UiState {
    stack: Vec<Route>,
    pub should_quit: bool,
    pub tick_count: u64,

    // Home screen role menu
    pub home_menu_state: ListState,

    // Quit confirmation
    pub show_quit_confirm: bool,
    pub quit_confirm_selected: usize,
}

impl Default for UiState {
    fn default() -> Self {
        let mut home_menu_state = ListState::default();
        home_menu_state.select(Some(0));
        Self {
            stack: vec![Route::Home],
            should_quit: false,
            tick_count: 0,
            home_menu_state,
            show_quit_confirm: false,
            quit_confirm_selected: 0,
        }
    }
}

impl UiState {
    pub fn route(&self) -> Route {
        *self.stack.last().unwrap_or(&Route::Home)
    }

    pub fn navigate(&mut self, route: Route) {
        self.stack.push(route);
    }

    /// Pop back to the previous screen. No-op at the root.
    pub fn go_back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn tick(&mut self) {
        self.tick_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_pushes_and_pops_in_order() {
        let mut ui = UiState::default();
        assert_eq!(ui.route(), Route::Home);
        ui.navigate(Route::StudentLogin);
        ui.navigate(Route::StudentDashboard);
        assert_eq!(ui.route(), Route::StudentDashboard);
        assert!(ui.go_back());
        assert_eq!(ui.route(), Route::StudentLogin);
        assert!(ui.go_back());
        assert_eq!(ui.route(), Route::Home);
    }

    #[test]
    fn back_at_root_is_a_noop() {
        let mut ui = UiState::default();
        assert!(!ui.go_back());
        assert_eq!(ui.route(), Route::Home);
    }

    #[test]
    fn register_route_carries_the_college_id() {
        let mut ui = UiState::default();
        ui.navigate(Route::StudentRegister { college_id: Some(7) });
        assert_eq!(ui.route(), Route::StudentRegister { college_id: Some(7) });
    }
}
