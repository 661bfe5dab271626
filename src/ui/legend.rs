use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::route::Route;

fn key(k: &'static str, action: &'static str) -> [Span<'static>; 2] {
    [
        Span::styled(k, Style::default().fg(Color::Yellow)),
        Span::raw(action),
    ]
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(route: Route, vim_mode: bool, has_modal: bool) -> Vec<Span<'static>> {
    let mut hotkey_spans = vec![];

    match route {
        Route::Login | Route::Register => {
            hotkey_spans.extend(key("Tab", ":Next field  "));
            hotkey_spans.extend(key("Enter", ":Submit  "));
            if route == Route::Login {
                hotkey_spans.extend(key("^n", ":Register instead  "));
            } else {
                hotkey_spans.extend(key("^n", ":Log in instead  "));
            }
            hotkey_spans.extend(key("Esc", ":Quit"));
        }

        Route::PollList if has_modal => {
            hotkey_spans.extend(key("Tab", ":Switch field  "));
            hotkey_spans.extend(key("Enter/y", ":Confirm  "));
            hotkey_spans.extend(key("Esc/n", ":Cancel"));
        }

        Route::PollList => {
            // Navigation keys (different for vim mode)
            if vim_mode {
                hotkey_spans.extend(key("j/k", ":Poll  "));
                hotkey_spans.extend(key("h/l", ":Option  "));
            } else {
                hotkey_spans.extend(key("↑/↓", ":Poll  "));
                hotkey_spans.extend(key("←/→", ":Option  "));
            }
            hotkey_spans.extend(key("Enter", ":Vote  "));
            hotkey_spans.extend(key("1-9", ":Vote option  "));
            hotkey_spans.extend(key("c", ":Create  "));
            hotkey_spans.extend(key("e", ":Edit  "));
            hotkey_spans.extend(key("d", ":Delete  "));
            hotkey_spans.extend(key("r", ":Refresh  "));
            hotkey_spans.extend(key("L", ":Log out  "));
            hotkey_spans.extend(key("?", ":Help  "));
            hotkey_spans.extend(key("q", ":Quit"));
        }

        Route::CreatePoll => {
            hotkey_spans.extend(key("Tab", ":Next field  "));
            hotkey_spans.extend(key("^a", ":Add option  "));
            hotkey_spans.extend(key("^d", ":Remove option  "));
            hotkey_spans.extend(key("Enter", ":Create  "));
            hotkey_spans.extend(key("Esc", ":Back"));
        }
    }

    hotkey_spans
}

fn build_legend_paragraph(route: Route, vim_mode: bool, has_modal: bool) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(route, vim_mode, has_modal));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(ratatui::widgets::Wrap { trim: false })
}

/// Render the hotkey legend for the current screen
pub fn render_legend(f: &mut Frame, area: Rect, route: Route, vim_mode: bool, has_modal: bool) {
    f.render_widget(build_legend_paragraph(route, vim_mode, has_modal), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(
    terminal_width: u16,
    route: Route,
    vim_mode: bool,
    has_modal: bool,
) -> u16 {
    // Build paragraph WITHOUT block borders for accurate line counting
    // (line_count() doesn't account for borders correctly when block is attached)
    let hotkey_line = Line::from(build_hotkey_spans(route, vim_mode, has_modal));
    let paragraph_for_counting =
        Paragraph::new(vec![hotkey_line]).wrap(ratatui::widgets::Wrap { trim: false });

    // Subtract left + right borders
    let available_width = terminal_width.saturating_sub(2);
    let line_count = paragraph_for_counting.line_count(available_width);

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
