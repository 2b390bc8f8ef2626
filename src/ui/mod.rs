//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod preview;

use crate::app::App;
use crate::state::CoursePreview;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, preview_area, status_area) = layout::create_layout(frame.area());

    forms::draw_course_form(frame, form_area, app);
    preview::draw(frame, preview_area, &CoursePreview::of(&app.state.draft));
    layout::draw_status_bar(frame, status_area, app);

    if let Some(notice) = app.state.current_notice() {
        components::render_notice_dialog(frame, notice);
    }
}
