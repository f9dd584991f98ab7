pub mod chart;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::Style;
use ratatui::widgets::Paragraph;

use super::app::App;

/// Render the whole chart: month header, day rule, task rows, status line.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Paint the background first
    let backdrop = Paragraph::new("").style(Style::default().bg(app.theme.background));
    frame.render_widget(backdrop, area);

    let [header, rule, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);

    chart::render_month_header(frame, app, header);
    chart::render_day_rule(frame, app, rule);
    chart::render_rows(frame, app, body);
    chart::render_status(frame, app, status);
}
