//! Course and syllabus preview panel

use crate::state::CoursePreview;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the preview of the current draft
pub fn draw(frame: &mut Frame, area: Rect, preview: &CoursePreview) {
    let block = Block::default()
        .title(" Preview ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let paragraph = Paragraph::new(preview_lines(preview))
        .wrap(Wrap { trim: false })
        .block(block);
    frame.render_widget(paragraph, area);
}

fn preview_lines(preview: &CoursePreview) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    let placeholder = dim.add_modifier(Modifier::ITALIC);
    let mut lines = Vec::new();

    if let Some(image) = &preview.image {
        lines.push(Line::from(vec![
            Span::styled("[image] ", Style::default().fg(Color::Magenta)),
            Span::raw(image.clone()),
        ]));
    }
    lines.push(Line::from(Span::styled(
        preview.heading.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Syllabus",
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )));

    for module in &preview.modules {
        lines.push(Line::from(""));
        let title_style = if module.title_is_placeholder {
            placeholder
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(Span::styled(module.title.clone(), title_style)));

        if let Some(video) = &module.video {
            lines.push(Line::from(vec![
                Span::styled("[video] ", Style::default().fg(Color::Green)),
                Span::raw(video.clone()),
            ]));
        }

        let description_style = if module.description_is_placeholder {
            placeholder
        } else {
            Style::default()
        };
        for line in module.description.split('\n') {
            lines.push(Line::from(Span::styled(line.to_string(), description_style)));
        }
    }

    lines
}
