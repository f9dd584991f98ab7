use chrono::{Datelike, Weekday};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::layout::{Bar, Day, fmt_month};
use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

/// Name column width, clamped so at least a sliver of timeline remains.
fn name_width(app: &App, area: Rect) -> u16 {
    app.name_width.min(area.width.saturating_sub(10))
}

/// Map a day-column index to a terminal cell within the timeline.
fn cell_of(index: usize, total: usize, width: usize) -> usize {
    index * width / total.max(1)
}

/// Map a terminal cell back to the day column it represents.
fn day_at(cell: usize, total: usize, width: usize) -> usize {
    (cell * total / width.max(1)).min(total.saturating_sub(1))
}

fn is_weekend(day: &Day) -> bool {
    matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Terminal cells holding a month boundary (skipping the very first month).
fn boundary_cells(app: &App, width: usize) -> Vec<usize> {
    let total = app.model.grid.total_days();
    app.model
        .month_spans
        .iter()
        .skip(1)
        .map(|s| cell_of(s.start_index, total, width))
        .filter(|&c| c < width)
        .collect()
}

/// Month labels merged across their day columns.
pub(super) fn render_month_header(frame: &mut Frame, app: &App, area: Rect) {
    let name_w = name_width(app, area) as usize;
    let width = (area.width as usize).saturating_sub(name_w);
    if width == 0 {
        return;
    }
    let total = app.model.grid.total_days();

    let mut cells = vec![' '; width];
    for span in &app.model.month_spans {
        let start = cell_of(span.start_index, total, width);
        let end = cell_of(span.start_index + span.days, total, width).min(width);
        if start >= width || end <= start {
            continue;
        }
        let label = fmt_month(span.month);
        let avail = end - start;
        let chars: Vec<char> = label.chars().take(avail).collect();
        let offset = start + (avail - chars.len()) / 2;
        for (i, c) in chars.into_iter().enumerate() {
            cells[offset + i] = c;
        }
    }

    let line = Line::from(vec![
        Span::styled(
            fit_to_width(" Task", name_w),
            Style::default()
                .fg(app.theme.dim)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            cells.into_iter().collect::<String>(),
            Style::default()
                .fg(app.theme.text_bright)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.background)),
        area,
    );
}

/// Horizontal rule under the header with month boundary ticks.
pub(super) fn render_day_rule(frame: &mut Frame, app: &App, area: Rect) {
    let name_w = name_width(app, area) as usize;
    let width = (area.width as usize).saturating_sub(name_w);
    if width == 0 {
        return;
    }
    let boundaries = boundary_cells(app, width);

    let mut spans = vec![Span::styled(
        " ".repeat(name_w),
        Style::default().bg(app.theme.background),
    )];
    for x in 0..width {
        let (c, fg) = if boundaries.contains(&x) {
            ('┬', app.theme.month_line)
        } else {
            ('─', app.theme.dim)
        };
        spans.push(Span::styled(
            c.to_string(),
            Style::default().fg(fg).bg(app.theme.background),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.background)),
        area,
    );
}

/// One row per task: name column plus the positioned bar over the day grid.
pub(super) fn render_rows(frame: &mut Frame, app: &mut App, area: Rect) {
    if app.model.is_empty() {
        let empty = Paragraph::new("No tasks to display.")
            .centered()
            .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
        frame.render_widget(empty, area);
        return;
    }

    // Keep the selection visible
    let visible = area.height as usize;
    if visible == 0 {
        return;
    }
    if app.selected < app.scroll_offset {
        app.scroll_offset = app.selected;
    } else if app.selected >= app.scroll_offset + visible {
        app.scroll_offset = app.selected + 1 - visible;
    }

    let name_w = name_width(app, area) as usize;
    let width = (area.width as usize).saturating_sub(name_w);
    if width == 0 {
        return;
    }
    let total = app.model.grid.total_days();
    let days = &app.model.grid.days;
    let boundaries = boundary_cells(app, width);

    let end = app.model.tasks.len().min(app.scroll_offset + visible);
    for (row, idx) in (app.scroll_offset..end).enumerate() {
        let task = &app.model.tasks[idx];
        let bar = &app.model.bars[idx];
        let is_selected = idx == app.selected;

        let row_area = Rect {
            x: area.x,
            y: area.y + row as u16,
            width: area.width,
            height: 1,
        };

        let name_style = if is_selected {
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text).bg(app.theme.background)
        };
        let marker = if is_selected { "▎" } else { " " };
        let mut spans = vec![
            Span::styled(marker, Style::default().fg(app.theme.highlight).bg(app.theme.background)),
            Span::styled(
                fit_to_width(task.name(), name_w.saturating_sub(1)),
                name_style,
            ),
        ];

        let (bar_x, bar_w) = bar_cells(bar, width);
        let bar_fg = if is_selected {
            app.theme.bar_selected
        } else {
            app.theme.bar
        };

        for x in 0..width {
            let day = &days[day_at(x, total, width)];
            let bg = if is_weekend(day) {
                app.theme.weekend
            } else {
                app.theme.background
            };
            let (c, fg) = if x >= bar_x && x < bar_x + bar_w {
                ('█', bar_fg)
            } else if boundaries.contains(&x) {
                ('│', app.theme.month_line)
            } else {
                (' ', app.theme.dim)
            };
            spans.push(Span::styled(c.to_string(), Style::default().fg(fg).bg(bg)));
        }

        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(Style::default().bg(app.theme.background)),
            row_area,
        );
    }
}

/// Convert a bar's percentage geometry into timeline cells.
fn bar_cells(bar: &Bar, width: usize) -> (usize, usize) {
    let x = ((bar.left_percent / 100.0) * width as f64).round() as usize;
    let w = (((bar.width_percent / 100.0) * width as f64).round() as usize).max(1);
    let x = x.min(width.saturating_sub(1));
    let w = w.min(width - x);
    (x, w.max(1))
}

/// Status line: selected task details, transient messages, key hints.
pub(super) fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let style = Style::default().fg(app.theme.dim).bg(app.theme.background);

    let left = if let Some(msg) = &app.status {
        msg.clone()
    } else if let (Some(task), Some(bar)) = (
        app.model.tasks.get(app.selected),
        app.model.bars.get(app.selected),
    ) {
        format!(
            "{}  {} → {}  ({} day{})",
            task.name(),
            bar.start_label,
            bar.end_label,
            bar.day_span,
            if bar.day_span == 1 { "" } else { "s" },
        )
    } else {
        String::new()
    };

    let hints = "q quit · j/k select · r reload ";
    let pad = (area.width as usize)
        .saturating_sub(crate::util::unicode::display_width(&left) + hints.len() + 1);
    let line = Line::from(vec![
        Span::styled(format!(" {}", left), Style::default().fg(app.theme.text).bg(app.theme.background)),
        Span::styled(" ".repeat(pad), style),
        Span::styled(hints, style),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), area);
}
