//! Course form rendering

use super::field_renderer::{draw_file_field, draw_help_text, draw_text_field};
use crate::app::App;
use crate::state::FocusTarget;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// One vertical slot of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormRow {
    Field(FocusTarget),
    ModuleHeader(usize),
    /// Add-module and submit side by side
    Buttons,
}

impl FormRow {
    fn height(self) -> u16 {
        match self {
            FormRow::Field(FocusTarget::ModuleDescription(_)) => 5,
            FormRow::Field(_) => 3,
            FormRow::ModuleHeader(_) => 1,
            FormRow::Buttons => BUTTON_HEIGHT,
        }
    }

    fn contains(self, target: FocusTarget) -> bool {
        match self {
            FormRow::Field(t) => t == target,
            FormRow::Buttons => matches!(target, FocusTarget::AddModule | FocusTarget::Submit),
            FormRow::ModuleHeader(_) => false,
        }
    }
}

fn form_rows(module_count: usize) -> Vec<FormRow> {
    let mut rows = vec![
        FormRow::Field(FocusTarget::CourseName),
        FormRow::Field(FocusTarget::CourseImage),
    ];
    for i in 0..module_count {
        rows.push(FormRow::ModuleHeader(i));
        rows.push(FormRow::Field(FocusTarget::ModuleTitle(i)));
        rows.push(FormRow::Field(FocusTarget::ModuleVideo(i)));
        rows.push(FormRow::Field(FocusTarget::ModuleDescription(i)));
    }
    rows.push(FormRow::Buttons);
    rows
}

/// Rows to skip from the top so the focused row stays visible
fn scroll_offset(rows: &[FormRow], active: FocusTarget, visible_height: u16) -> u16 {
    let mut top = 0u16;
    for row in rows {
        if row.contains(active) {
            return (top + row.height()).saturating_sub(visible_height);
        }
        top += row.height();
    }
    0
}

/// Draw the course form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Create a Course ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Fields
            Constraint::Length(1), // Help text
        ])
        .split(inner);
    let fields_area = chunks[0];

    let rows = form_rows(app.state.draft.module_count());
    let offset = scroll_offset(&rows, app.state.active_target(), fields_area.height);

    let mut y = 0u16;
    for row in rows {
        let height = row.height();
        if y < offset {
            y += height;
            continue;
        }
        let relative = y - offset;
        if relative + height > fields_area.height {
            break;
        }
        let row_area = Rect {
            x: fields_area.x,
            y: fields_area.y + relative,
            width: fields_area.width,
            height,
        };
        draw_row(frame, row_area, row, app);
        y += height;
    }

    draw_help_text(frame, chunks[1], help_spans(app.state.active_target()));
}

fn draw_row(frame: &mut Frame, area: Rect, row: FormRow, app: &App) {
    let state = &app.state;
    match row {
        FormRow::ModuleHeader(i) => {
            let header = Paragraph::new(Span::styled(
                format!("Module {}", i + 1),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            frame.render_widget(header, area);
        }
        FormRow::Buttons => {
            let halves = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            render_action_button(
                frame,
                halves[0],
                "+ Add Module",
                state.form.is_active(FocusTarget::AddModule),
                true,
                None,
            );
            let in_flight = state.phase.is_in_flight();
            let submit_label = if in_flight {
                state.phase.label()
            } else {
                "Create Course"
            };
            render_action_button(
                frame,
                halves[1],
                submit_label,
                state.form.is_active(FocusTarget::Submit),
                !in_flight,
                Some(Color::Green),
            );
        }
        FormRow::Field(target) => {
            let field = target.field();
            let is_active = state.form.is_active(target);
            match target {
                FocusTarget::CourseName => {
                    draw_text_field(frame, area, &field, state.draft.name(), is_active)
                }
                FocusTarget::ModuleTitle(i) => draw_text_field(
                    frame,
                    area,
                    &field,
                    &state.draft.modules()[i].title,
                    is_active,
                ),
                FocusTarget::ModuleDescription(i) => draw_text_field(
                    frame,
                    area,
                    &field,
                    &state.draft.modules()[i].description,
                    is_active,
                ),
                FocusTarget::CourseImage => draw_file_field(
                    frame,
                    area,
                    &field,
                    &state.form.path_input,
                    state.draft.image().map(|f| f.file_name()),
                    is_active,
                ),
                FocusTarget::ModuleVideo(i) => draw_file_field(
                    frame,
                    area,
                    &field,
                    &state.form.path_input,
                    state.draft.modules()[i].video.as_ref().map(|f| f.file_name()),
                    is_active,
                ),
                FocusTarget::AddModule | FocusTarget::Submit => {}
            }
        }
    }
}

fn help_spans(active: FocusTarget) -> Vec<Span<'static>> {
    let key = Style::default().fg(Color::Cyan);
    let enter_action = match active {
        FocusTarget::CourseImage | FocusTarget::ModuleVideo(_) => ": select file  ",
        FocusTarget::ModuleDescription(_) => ": newline  ",
        FocusTarget::AddModule => ": add module  ",
        FocusTarget::Submit => ": submit  ",
        FocusTarget::CourseName | FocusTarget::ModuleTitle(_) => ": next  ",
    };
    vec![
        Span::styled("Tab", key),
        Span::raw(": next field  "),
        Span::styled("Enter", key),
        Span::raw(enter_action),
        Span::styled(crate::platform::ADD_MODULE_SHORTCUT, key),
        Span::raw(": add module  "),
        Span::styled(crate::platform::SUBMIT_SHORTCUT, key),
        Span::raw(": submit  "),
        Span::styled("Esc", key),
        Span::raw(": quit"),
    ]
}
