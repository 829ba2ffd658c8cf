pub mod home;
pub mod login;
pub mod navigation;

use crate::app::App;
use crate::state::Route;
use crossterm::event::KeyEvent;

/// Main input handler dispatcher
pub fn handle_key_event(key: KeyEvent, app: &mut App) {
    // Quit confirmation dialog takes priority over everything else
    if app.ui.show_quit_confirm {
        navigation::handle_quit_confirm_input(key, app);
        return;
    }

    if navigation::handle_global_shortcuts(key, app) {
        return;
    }

    match app.ui.route() {
        Route::Home => home::handle_home_input(key, app),
        Route::StudentLogin | Route::AdminLogin => login::handle_login_input(key, app),
        _ => navigation::handle_placeholder_input(key, app),
    }
}
