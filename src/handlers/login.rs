use crate::app::App;
use crate::state::{FormFocus, FormPhase};
use crossterm::event::{KeyCode, KeyEvent};

/// Handle input on the unified student/admin login screen
pub fn handle_login_input(key: KeyEvent, app: &mut App) {
    if app.form.is_none() {
        return;
    }

    if key.code == KeyCode::Esc {
        app.go_back();
        return;
    }

    // While the directory is loading only back/quit work.
    if app.form.as_ref().is_some_and(|f| f.is_loading()) {
        return;
    }

    if key.code == KeyCode::Enter {
        handle_enter(app);
        return;
    }

    let Some(form) = app.form.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Tab => form.focus_next(),
        KeyCode::BackTab => form.focus_prev(),
        KeyCode::Up if form.focus == FormFocus::Picker => form.picker_up(),
        KeyCode::Down if form.focus == FormFocus::Picker => form.picker_down(),
        KeyCode::Char(c) => match form.focus {
            FormFocus::Email => form.email.push(c),
            FormFocus::Password => form.password.push(c),
            _ => {}
        },
        KeyCode::Backspace => match form.focus {
            FormFocus::Email => {
                form.email.pop();
            }
            FormFocus::Password => {
                form.password.pop();
            }
            _ => {}
        },
        _ => {}
    }
}

fn handle_enter(app: &mut App) {
    let focus = match app.form.as_ref() {
        Some(form) => form.focus,
        None => return,
    };
    match focus {
        FormFocus::Picker => {
            if let Some(form) = app.form.as_mut() {
                form.confirm_picker();
                form.focus = if form.shows_credentials() {
                    FormFocus::Email
                } else if form.phase == FormPhase::NotListedChosen {
                    FormFocus::Register
                } else {
                    FormFocus::Picker
                };
            }
        }
        FormFocus::Email => {
            if let Some(form) = app.form.as_mut() {
                form.focus = FormFocus::Password;
            }
        }
        FormFocus::Password => {
            if let Some(form) = app.form.as_mut() {
                form.focus = FormFocus::Submit;
            }
        }
        FormFocus::Submit => app.submit_login(),
        FormFocus::Register => app.request_registration(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::College;
    use crate::services::DirectoryClient;
    use crate::state::{FormEvent, Route};
    use crossterm::event::KeyModifiers;
    use tokio::sync::mpsc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mounted_app() -> App {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut app = App::new(tx, DirectoryClient::new("http://127.0.0.1:1"));
        app.navigate(Route::StudentLogin);
        if let Some(form) = app.form.as_mut() {
            form.apply(FormEvent::DirectoryLoaded(vec![College {
                college_id: 1,
                college_name: "Acme University".to_string(),
            }]));
        }
        app
    }

    #[tokio::test]
    async fn picker_enter_selects_and_moves_focus_to_email() {
        let mut app = mounted_app();
        handle_login_input(key(KeyCode::Enter), &mut app);
        let form = app.form.as_ref().unwrap();
        assert!(form.shows_credentials());
        assert_eq!(form.focus, FormFocus::Email);
    }

    #[tokio::test]
    async fn typing_lands_in_the_focused_field() {
        let mut app = mounted_app();
        handle_login_input(key(KeyCode::Enter), &mut app); // select Acme
        for c in "a@b.edu".chars() {
            handle_login_input(key(KeyCode::Char(c)), &mut app);
        }
        handle_login_input(key(KeyCode::Enter), &mut app); // focus password
        for c in "secret".chars() {
            handle_login_input(key(KeyCode::Char(c)), &mut app);
        }
        handle_login_input(key(KeyCode::Backspace), &mut app);
        let form = app.form.as_ref().unwrap();
        assert_eq!(form.email, "a@b.edu");
        assert_eq!(form.password, "secre");
    }

    #[tokio::test]
    async fn full_keyboard_flow_reaches_the_dashboard() {
        let mut app = mounted_app();
        handle_login_input(key(KeyCode::Enter), &mut app);
        handle_login_input(key(KeyCode::Char('a')), &mut app);
        handle_login_input(key(KeyCode::Enter), &mut app);
        handle_login_input(key(KeyCode::Char('p')), &mut app);
        handle_login_input(key(KeyCode::Enter), &mut app); // focus submit
        handle_login_input(key(KeyCode::Enter), &mut app); // submit
        assert_eq!(app.ui.route(), Route::StudentDashboard);
        assert!(app.form.is_none());
    }

    #[tokio::test]
    async fn sentinel_enter_routes_to_registration() {
        let mut app = mounted_app();
        handle_login_input(key(KeyCode::Down), &mut app); // move to sentinel row
        handle_login_input(key(KeyCode::Enter), &mut app); // choose it
        let form = app.form.as_ref().unwrap();
        assert!(!form.shows_credentials());
        assert_eq!(form.focus, FormFocus::Register);
        handle_login_input(key(KeyCode::Enter), &mut app);
        assert_eq!(app.ui.route(), Route::StudentRegister { college_id: None });
    }

    #[tokio::test]
    async fn escape_goes_back_to_home() {
        let mut app = mounted_app();
        handle_login_input(key(KeyCode::Esc), &mut app);
        assert_eq!(app.ui.route(), Route::Home);
    }
}
