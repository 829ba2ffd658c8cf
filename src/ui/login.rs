//! The unified student/admin login screen.

use crate::app::App;
use crate::model::Role;
use crate::state::{FormFocus, FormPhase, LoginFormState};
use crate::ui::home::centered_card;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw_login(f: &mut Frame, app: &mut App, area: Rect) {
    let tick_count = app.ui.tick_count;
    let Some(form) = app.form.as_ref() else {
        return;
    };

    let welcome = match form.role {
        Role::Student => " Welcome, Student ",
        Role::Admin => " Staff Login ",
    };
    let card = centered_card(area, 64, 22);
    let block = Block::default()
        .title(welcome)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(card);
    f.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(7), // institution picker
            Constraint::Length(3), // email
            Constraint::Length(3), // password
            Constraint::Length(1), // error line
            Constraint::Length(3), // submit / request button
            Constraint::Min(1),    // register link
        ])
        .split(inner);

    draw_picker(f, form, tick_count, chunks[0]);

    if form.shows_credentials() {
        draw_credentials(f, form, chunks[1], chunks[2]);
        draw_error_line(f, form, chunks[3]);
        draw_submit_button(f, form, chunks[4]);
        if let (Role::Student, Some(_)) = (form.role, form.register_route()) {
            let style = if form.focus == FormFocus::Register {
                Style::default().fg(Color::Black).bg(Color::LightBlue)
            } else {
                Style::default().fg(Color::LightBlue)
            };
            f.render_widget(
                Paragraph::new(Span::styled("New here? [ Create Account ]", style))
                    .alignment(Alignment::Center),
                chunks[5],
            );
        }
    } else if form.phase == FormPhase::NotListedChosen {
        draw_error_line(f, form, chunks[3]);
        let style = if form.focus == FormFocus::Register {
            Style::default().fg(Color::Black).bg(Color::LightBlue)
        } else {
            Style::default().fg(Color::LightBlue)
        };
        f.render_widget(
            Paragraph::new(Span::styled("[ Request Registration ]", style))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL)),
            chunks[4],
        );
    } else {
        // No selection yet: surface fetch/validation errors under the picker.
        draw_error_line(f, form, chunks[3]);
    }
}

fn draw_picker(f: &mut Frame, form: &LoginFormState, tick_count: u64, area: Rect) {
    let picker_block = Block::default().title("Institution").borders(Borders::ALL);

    if form.is_loading() {
        let dots = ".".repeat(((tick_count / 4) % 4) as usize);
        f.render_widget(
            Paragraph::new(format!("Loading colleges{}", dots))
                .style(Style::default().fg(Color::Gray))
                .block(picker_block),
            area,
        );
        return;
    }

    let items: Vec<ListItem> = form
        .selector_rows()
        .iter()
        .map(|row| {
            let style = match row {
                crate::state::SelectorRow::NotListed => Style::default().fg(Color::LightRed),
                crate::state::SelectorRow::College(_) => Style::default(),
            };
            ListItem::new(Span::styled(row.label().to_string(), style))
        })
        .collect();

    let border_style = if form.focus == FormFocus::Picker {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    let list = List::new(items)
        .block(picker_block.border_style(border_style))
        .highlight_style(Style::default().bg(Color::Blue).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ");

    let mut picker_state = ListState::default();
    picker_state.select(Some(form.picker_index));
    f.render_stateful_widget(list, area, &mut picker_state);
}

fn draw_credentials(f: &mut Frame, form: &LoginFormState, email_area: Rect, password_area: Rect) {
    let email_title = match form.role {
        Role::Student => "Student Email",
        Role::Admin => "Admin Email",
    };
    let email_style = if form.focus == FormFocus::Email {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(form.email.as_str())
            .block(Block::default().borders(Borders::ALL).title(email_title))
            .style(email_style),
        email_area,
    );

    let password_style = if form.focus == FormFocus::Password {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new("*".repeat(form.password.len()))
            .block(Block::default().borders(Borders::ALL).title("Password"))
            .style(password_style),
        password_area,
    );

    if form.focus == FormFocus::Email {
        f.set_cursor_position((
            email_area.x + form.email.len() as u16 + 1,
            email_area.y + 1,
        ));
    } else if form.focus == FormFocus::Password {
        f.set_cursor_position((
            password_area.x + form.password.len() as u16 + 1,
            password_area.y + 1,
        ));
    }
}

fn draw_error_line(f: &mut Frame, form: &LoginFormState, area: Rect) {
    if let Some(error) = form.error_text() {
        f.render_widget(
            Paragraph::new(Span::styled(error, Style::default().fg(Color::LightRed)))
                .alignment(Alignment::Center),
            area,
        );
    }
}

fn draw_submit_button(f: &mut Frame, form: &LoginFormState, area: Rect) {
    let label = match (form.role, form.is_submitting()) {
        (Role::Student, false) => "[ LOGIN TO DASHBOARD ]",
        (Role::Student, true) => "SIGNING IN...",
        (Role::Admin, false) => "[ SIGN IN ]",
        (Role::Admin, true) => "AUTHENTICATING...",
    };
    let style = if form.focus == FormFocus::Submit {
        Style::default().bg(Color::Cyan).fg(Color::Black)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(Span::styled(label, style))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL)),
        area,
    );
}
