//! Main UI module. Re-exports submodules and provides the main entry point.

pub mod banner;
pub mod home;
pub mod login;
pub mod placeholder;
pub mod popups;

use crate::app::App;
use crate::model::Role;
use crate::state::Route;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::ui::banner::draw_banner;
use crate::ui::home::draw_home;
use crate::ui::login::draw_login;
use crate::ui::placeholder::draw_placeholder;
use crate::ui::popups::draw_quit_confirm_popup;

pub fn ui(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let chunks = Layout::default()
        .constraints([
            Constraint::Length(8), // Banner
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Footer
        ])
        .split(size);

    draw_banner(f, app, chunks[0]);

    let route = app.ui.route();
    let help_text = match route {
        Route::Home => "[↑↓] Choose Portal | [Enter] Select | [Esc] Quit",
        Route::StudentLogin | Route::AdminLogin => {
            "[Tab]/[Shift+Tab] Change Focus | [↑↓] Pick Institution\n[Enter] Select/Submit | [Esc] Back"
        }
        _ => "[Esc] Back",
    };
    let status_text = match route {
        Route::StudentLogin | Route::StudentDashboard | Route::StudentRegister { .. } => {
            Role::Student.portal_tag()
        }
        Route::AdminLogin | Route::AdminDashboard | Route::CollegeAdminRequest => {
            Role::Admin.portal_tag()
        }
        Route::Home => "FUTURE-READY EDUCATION",
    };

    let footer_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
        .split(chunks[2]);
    f.render_widget(
        Paragraph::new(help_text)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP)),
        footer_chunks[0],
    );
    f.render_widget(
        Paragraph::new(Span::styled(
            status_text,
            Style::default().fg(Color::LightBlue),
        ))
        .alignment(Alignment::Right)
        .block(Block::default().borders(Borders::TOP)),
        footer_chunks[1],
    );

    let main_area = chunks[1];
    match route {
        Route::Home => draw_home(f, app, main_area),
        Route::StudentLogin | Route::AdminLogin => draw_login(f, app, main_area),
        other => draw_placeholder(f, other, main_area),
    }

    if app.ui.show_quit_confirm {
        draw_quit_confirm_popup(f, app);
    }
}
