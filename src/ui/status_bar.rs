use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::route::Route;
use crate::model::Model;

/// Build the status line: `Label: value` parts joined with " │ "
fn build_status_line(model: &Model) -> String {
    let mut parts = vec![format!("Screen: {}", model.route.title())];

    parts.push(
        if model.authenticated {
            "Session: signed in"
        } else {
            "Session: signed out"
        }
        .to_string(),
    );

    if model.route == Route::PollList {
        let list = &model.poll_list;
        if list.loading {
            parts.push("Polls: loading...".to_string());
        } else {
            parts.push(format!("Polls: {}", list.polls.len()));
        }
        if list.votes_in_flight > 0 {
            parts.push(format!("Voting: {}", list.votes_in_flight));
        }
        if let Some(error_type) = &list.last_error {
            parts.push(format!("Error: {}", error_type.label()));
        }
    }

    parts.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(f: &mut Frame, area: Rect, model: &Model) {
    let status_line = build_status_line(model);

    // Color the labels (before colons); errors in red
    let mut spans = vec![];
    for (idx, part) in status_line.split(" │ ").enumerate() {
        if idx > 0 {
            spans.push(Span::raw(" │ "));
        }
        if part.starts_with("Error:") {
            spans.push(Span::styled(part.to_string(), Style::default().fg(Color::Red)));
        } else if let Some(colon_pos) = part.find(':') {
            let label = &part[..=colon_pos];
            let value = &part[colon_pos + 1..];
            spans.push(Span::styled(label.to_string(), Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(value.to_string()));
        } else {
            spans.push(Span::raw(part.to_string()));
        }
    }

    let status_bar = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));

    f.render_widget(status_bar, area);
}
