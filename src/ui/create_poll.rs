use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::input::render_input;
use crate::model::create_poll::CreateField;
use crate::model::CreatePollForm;

/// Render the create-poll form. Option fields scroll to keep focus visible.
pub fn render_create_poll(f: &mut Frame, area: Rect, form: &CreatePollForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Create Poll")
        .border_style(Style::default().fg(Color::Blue));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(3), // Description
            Constraint::Min(3),    // Options
            Constraint::Length(1), // Error / submitting
        ])
        .split(inner);

    let focused = form.focused_field();
    render_input(f, rows[0], "Title", &form.title, focused == CreateField::Title, false);
    render_input(
        f,
        rows[1],
        "Description",
        &form.description,
        focused == CreateField::Description,
        false,
    );

    let options = form.options();
    let visible = usize::from(rows[2].height / 3).max(1);
    let focused_option = match focused {
        CreateField::Option(i) => Some(i),
        _ => None,
    };
    let first = focused_option.map_or(0, |i| (i + 1).saturating_sub(visible));

    for (slot, (index, text)) in options.iter().enumerate().skip(first).take(visible).enumerate() {
        let row = Rect {
            y: rows[2].y + slot as u16 * 3,
            height: 3,
            ..rows[2]
        }
        .intersection(rows[2]);
        render_input(
            f,
            row,
            &format!("Option {}", index + 1),
            text,
            focused_option == Some(index),
            false,
        );
    }

    let footer = if form.submitting {
        Line::styled("Creating poll...", Style::default().fg(Color::Yellow))
    } else if let Some(error) = &form.error {
        Line::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled(
            format!("{} option field(s); blank ones are skipped", options.len()),
            Style::default().fg(Color::DarkGray),
        )
    };
    f.render_widget(Paragraph::new(footer), rows[3]);
}
