//! Stub destination screens for transitions whose real implementation lives
//! server-side or in a later milestone.

use crate::state::Route;
use crate::ui::home::centered_card;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};
use ratatui::Frame;

pub fn draw_placeholder(f: &mut Frame, route: Route, area: Rect) {
    let card = centered_card(area, 50, 7);
    let block = Block::default()
        .title(format!(" {} ", route.title()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "This screen is not available yet.",
            Style::default().fg(Color::Gray),
        )),
    ];
    if let Route::StudentRegister {
        college_id: Some(id),
    } = route
    {
        lines.push(Line::from(Span::styled(
            format!("Registering for college #{}", id),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(Span::styled(
        "[Esc] Back",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        card,
    );
}
