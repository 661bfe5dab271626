use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::api::Poll;
use crate::logic::poll::{
    format_created_at, poll_body, total_votes, vote_share, PollBody, LEGACY_PLACEHOLDER,
};
use crate::model::PollListModel;

/// Lines of one poll card. `selected_option` is only set for the selected poll.
fn poll_lines(poll: &Poll, selected_option: Option<usize>) -> Vec<Line<'static>> {
    let mut header = vec![Span::styled(
        poll.title.clone(),
        Style::default().add_modifier(Modifier::BOLD),
    )];
    if let Some(created) = poll.created_at.as_deref().and_then(format_created_at) {
        header.push(Span::styled(
            format!("  {}", created),
            Style::default().fg(Color::DarkGray),
        ));
    }
    let mut lines = vec![Line::from(header)];

    if !poll.description.trim().is_empty() {
        lines.push(Line::styled(
            format!("  {}", poll.description),
            Style::default().fg(Color::Gray),
        ));
    }

    match poll_body(poll) {
        PollBody::Legacy => {
            lines.push(Line::styled(
                format!("  {}", LEGACY_PLACEHOLDER),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }
        PollBody::Options(controls) => {
            let total = total_votes(poll);
            for (index, control) in controls.iter().enumerate() {
                let is_selected = selected_option == Some(index);
                let marker = if is_selected { "► " } else { "  " };
                let label_style = if is_selected {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                lines.push(Line::from(vec![
                    Span::raw(marker),
                    Span::styled(format!("[{}] ", index + 1), Style::default().fg(Color::Yellow)),
                    Span::styled(control.label.clone(), label_style),
                    Span::styled(
                        format!(
                            "  {} vote{} ({}%)",
                            control.count,
                            if control.count == 1 { "" } else { "s" },
                            vote_share(control.count, total)
                        ),
                        Style::default().fg(Color::Green),
                    ),
                ]));
            }
        }
    }

    // Spacer between cards
    lines.push(Line::raw(""));
    lines
}

/// Render the poll list panel
pub fn render_poll_list(f: &mut Frame, area: Rect, list: &PollListModel) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Polls ({})", list.polls.len()))
        .border_style(Style::default().fg(Color::Blue));

    if list.loading {
        let loading = Paragraph::new("Loading polls...")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        f.render_widget(loading, area);
        return;
    }

    if list.polls.is_empty() {
        let empty = Paragraph::new("No polls yet. Press c to create one.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = list
        .polls
        .iter()
        .enumerate()
        .map(|(idx, poll)| {
            let selected_option = if list.selected_poll == Some(idx) {
                list.selected_option
            } else {
                None
            };
            ListItem::new(poll_lines(poll, selected_option))
        })
        .collect();

    let poll_list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::Black))
        .highlight_symbol("▌");

    // Create temporary ListState for rendering
    let mut state = ListState::default();
    state.select(list.selected_poll);
    f.render_stateful_widget(poll_list, area, &mut state);
}
