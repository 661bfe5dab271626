use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::input::render_input;
use super::layout::centered;
use crate::model::poll_list::{ConfirmDelete, EditPollState};

/// Render the delete confirmation dialog
pub fn render_delete_confirmation(f: &mut Frame, confirm: &ConfirmDelete) {
    let prompt_text = format!(
        "Delete this poll?\n\n\
        Poll: {}\n\n\
        WARNING: Its options and votes are deleted too.\n\n\
        Continue? (y/n)",
        confirm.title
    );

    // Center the prompt
    let prompt_area = centered(f.area(), 50, 11);

    let prompt = Paragraph::new(prompt_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Confirm Delete")
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

/// Render the edit dialog (title and description only; options are fixed)
pub fn render_edit_poll(f: &mut Frame, edit: &EditPollState) {
    let dialog_area = centered(f.area(), 60, 10);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Edit Poll")
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(dialog_area);

    f.render_widget(Clear, dialog_area);
    f.render_widget(block, dialog_area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .split(inner);

    render_input(f, rows[0], "Title", &edit.title, edit.focus == 0, false);
    render_input(f, rows[1], "Description", &edit.description, edit.focus == 1, false);

    let footer = if edit.saving {
        Line::styled("Saving...", Style::default().fg(Color::Yellow))
    } else if edit.loading {
        Line::styled("Loading latest version...", Style::default().fg(Color::DarkGray))
    } else if let Some(error) = &edit.error {
        Line::styled(
            error.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    } else {
        Line::styled("Enter: save  Esc: cancel", Style::default().fg(Color::DarkGray))
    };
    f.render_widget(Paragraph::new(footer), rows[2]);
}

/// Render the hotkey help overlay
pub fn render_help(f: &mut Frame, vim_mode: bool) {
    let nav = if vim_mode {
        "  j/k, ↑/↓     Select poll\n  h/l, ←/→     Select option\n"
    } else {
        "  ↑/↓          Select poll\n  ←/→          Select option\n"
    };
    let help_text = format!(
        "Poll list\n\
        {}  \
        Enter/Space  Vote for the selected option\n  \
        1-9          Vote for option n\n  \
        c            Create a poll\n  \
        e            Edit title and description\n  \
        d            Delete the selected poll\n  \
        r            Refresh\n  \
        L            Log out\n  \
        q            Quit\n\n\
        Counts always come from the backend; they update after each vote.\n\n\
        Press any key to close",
        nav
    );

    let help_area = centered(f.area(), 64, 20);
    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Help")
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, help_area);
    f.render_widget(help, help_area);
}
