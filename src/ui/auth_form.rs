use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::input::render_input;
use super::layout::centered;
use crate::logic::route::Route;
use crate::model::auth::{fields_for, AuthField};
use crate::model::AuthForm;

/// Render the Login or Register screen
pub fn render_auth_form(f: &mut Frame, area: Rect, route: Route, form: &AuthForm) {
    let fields = fields_for(route);
    // Fields are 3 rows each, plus the error/status line and the outer border
    let height = fields.len() as u16 * 3 + 4;
    let panel = centered(area, 60, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(route.title())
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(panel);
    f.render_widget(block, panel);

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(1));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    let focused = form.focused_field(route);
    for (row, field) in rows.iter().zip(fields) {
        render_input(
            f,
            *row,
            field.label(),
            form.value(*field),
            *field == focused,
            *field == AuthField::Password,
        );
    }

    let footer = if form.submitting {
        Line::styled("Submitting...", Style::default().fg(Color::Yellow))
    } else if let Some(error) = &form.error {
        Line::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Line::raw("")
    };
    if let Some(footer_area) = rows.last() {
        f.render_widget(Paragraph::new(footer).wrap(Wrap { trim: true }), *footer_area);
    }
}
