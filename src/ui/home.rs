//! Home screen: role selection.

use crate::app::App;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

pub fn draw_home(f: &mut Frame, app: &mut App, area: Rect) {
    let card = centered_card(area, 60, 14);
    let block = Block::default()
        .title(" Get Started ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(card);
    f.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(2), // instruction
            Constraint::Length(4), // role menu
            Constraint::Min(1),    // footer
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new("Select your identity to access the personalized dashboard.")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let items = vec![
        ListItem::new(Line::from(Span::raw("  I am a Student"))),
        ListItem::new(Line::from(Span::raw("  Staff Administration"))),
    ];
    let menu = List::new(items)
        .highlight_style(
            Style::default()
                .bg(Color::Blue)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");
    f.render_stateful_widget(menu, chunks[1], &mut app.ui.home_menu_state);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("• ", Style::default().fg(Color::Blue)),
            Span::styled(
                "SECURED BY END-TO-END ENCRYPTION",
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(" •", Style::default().fg(Color::Blue)),
        ]))
        .alignment(Alignment::Center),
        chunks[2],
    );
}

/// Center a fixed-size card inside the content area.
pub fn centered_card(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
