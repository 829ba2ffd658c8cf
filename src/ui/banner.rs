//! The EDULINK brand banner.

use crate::app::App;
use figlet_rs::FIGfont;
use rand::prelude::*;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

#[derive(Clone)]
struct BufferChar {
    char: char,
    style: Style,
}

pub fn draw_banner(f: &mut Frame, app: &App, area: Rect) {
    let lines = styled_banner_lines(area.width, app.ui.tick_count);
    f.render_widget(Paragraph::new(lines), area);
}

fn styled_banner_lines(width: u16, tick_count: u64) -> Vec<Line<'static>> {
    let figlet_string = FIGfont::standard()
        .and_then(|font| {
            font.convert("EDULINK")
                .map(|t| t.to_string())
                .ok_or_else(|| "no banner".into())
        })
        .unwrap_or_else(|_| "E D U L I N K".to_string());
    let figlet_lines: Vec<&str> = figlet_string.lines().collect();

    let figlet_height = figlet_lines.len();
    let figlet_width = figlet_lines.first().map_or(0, |l| l.chars().count());

    let banner_height = figlet_height + 1;
    let mut buffer: Vec<Vec<BufferChar>> = vec![
        vec![
            BufferChar {
                char: ' ',
                style: Style::default(),
            };
            width as usize
        ];
        banner_height
    ];

    let start_y = 1;
    let start_x = (width as usize).saturating_sub(figlet_width) / 2;

    for (y, line) in figlet_lines.iter().enumerate() {
        for (x, char) in line.chars().enumerate() {
            if let Some(cell) = buffer
                .get_mut(start_y + y)
                .and_then(|row| row.get_mut(start_x + x))
            {
                if char != ' ' {
                    cell.char = char;
                    cell.style = Style::default().fg(Color::LightBlue);
                }
            }
        }
    }

    // Occasional shimmer, keyed off the tick counter.
    let mut rng = thread_rng();
    for (y, row) in buffer.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            let glitch_chance = 0.0005
                + (tick_count as f64 * 0.01 + (y as f64 * 0.5) + (x as f64 * 0.01))
                    .cos()
                    .powi(2)
                    * 0.001;
            if rng.gen_bool(glitch_chance) {
                cell.style = Style::default().fg(Color::Rgb(96, 165, 250));
            }
        }
    }

    buffer
        .into_iter()
        .map(|row| {
            let mut spans = Vec::new();
            let mut current_style = Style::default();
            let mut current_text = String::new();

            for cell in row {
                if cell.style == current_style {
                    current_text.push(cell.char);
                } else {
                    if !current_text.is_empty() {
                        spans.push(Span::styled(current_text, current_style));
                    }
                    current_style = cell.style;
                    current_text = String::from(cell.char);
                }
            }
            if !current_text.is_empty() {
                spans.push(Span::styled(current_text, current_style));
            }
            Line::from(spans)
        })
        .collect()
}
