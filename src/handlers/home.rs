use crate::app::App;
use crate::state::Route;
use crossterm::event::{KeyCode, KeyEvent};

const HOME_MENU_LEN: usize = 2;

/// Handle role selection on the home screen
pub fn handle_home_input(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Down => {
            let current = app.ui.home_menu_state.selected().unwrap_or(0);
            app.ui.home_menu_state.select(Some((current + 1) % HOME_MENU_LEN));
        }
        KeyCode::Up => {
            let current = app.ui.home_menu_state.selected().unwrap_or(0);
            app.ui
                .home_menu_state
                .select(Some((current + HOME_MENU_LEN - 1) % HOME_MENU_LEN));
        }
        KeyCode::Enter => match app.ui.home_menu_state.selected() {
            Some(0) => app.navigate(Route::StudentLogin),
            Some(1) => app.navigate(Route::AdminLogin),
            _ => {}
        },
        KeyCode::Esc => {
            app.ui.show_quit_confirm = true;
            app.ui.quit_confirm_selected = 1;
        }
        _ => {}
    }
}
