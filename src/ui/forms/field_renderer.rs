//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CURSOR: &str = "▌";

fn field_styles(is_active: bool) -> (Style, Style) {
    if is_active {
        (
            Style::default().fg(Color::Cyan),
            Style::default().fg(Color::Cyan),
        )
    } else {
        (
            Style::default().fg(Color::Gray),
            Style::default().fg(Color::DarkGray),
        )
    }
}

/// Draw a text field with its current value
pub fn draw_text_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    value: &str,
    is_active: bool,
) {
    let (style, border_style) = field_styles(is_active);

    let display_value = if value.is_empty() && !is_active {
        "(empty)"
    } else {
        value
    };

    let cursor = if is_active { CURSOR } else { "" };

    let content = if field.is_multiline() {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), style)))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.title()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Draw a file input.
///
/// While focused it shows the path being typed; otherwise the selected
/// file, or the accepted media types when nothing is selected yet.
pub fn draw_file_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    path_input: &str,
    selected: Option<&str>,
    is_active: bool,
) {
    let (style, border_style) = field_styles(is_active);
    let accept = field.accepts().map(|k| k.accept_hint()).unwrap_or("*/*");

    let line = if is_active {
        Line::from(vec![
            Span::styled("path: ", Style::default().fg(Color::DarkGray)),
            Span::styled(path_input.to_string(), style),
            Span::styled(CURSOR, Style::default().fg(Color::Cyan)),
        ])
    } else if let Some(name) = selected {
        Line::from(Span::styled(name.to_string(), Style::default().fg(Color::Green)))
    } else {
        Line::from(Span::styled(
            format!("(no file, accepts {accept})"),
            Style::default().fg(Color::DarkGray),
        ))
    };

    let block = Block::default()
        .title(format!(" {} ", field.title()))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Draw the key hints under the form
pub fn draw_help_text(frame: &mut Frame, area: Rect, spans: Vec<Span>) {
    let help = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, area);
}
