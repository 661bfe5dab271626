use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::ui::{cursor_column, mask};

/// Single-line bordered text input. The focused input gets a cyan border and
/// the terminal cursor.
pub fn render_input(
    f: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    masked: bool,
) {
    let shown = if masked { mask(value) } else { value.to_string() };
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };

    let input = Paragraph::new(shown.clone()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(label.to_string())
            .border_style(Style::default().fg(border_color)),
    );
    f.render_widget(input, area);

    if focused && area.width > 2 && area.height > 2 {
        let max_x = area.x + area.width - 2;
        let x = (area.x + 1).saturating_add(cursor_column(&shown)).min(max_x);
        f.set_cursor_position((x, area.y + 1));
    }
}
