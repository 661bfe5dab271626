use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{auth_form, create_poll, dialogs, layout, legend, poll_list, status_bar, toast};
use crate::logic::route::Route;
use crate::model::Model;

/// Main render function - draws the screen for the current route, then any
/// dialogs and the toast on top
pub fn render(f: &mut Frame, model: &Model) {
    let size = f.area();
    let has_modal = model.has_modal();

    let legend_height =
        legend::calculate_legend_height(size.width, model.route, model.ui.vim_mode, has_modal);
    let layout_info = layout::calculate_layout(size, legend_height);

    // Title bar
    let title = Paragraph::new(Line::from(vec![
        Span::styled("polltui", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        Span::raw(" │ "),
        Span::raw(model.route.title()),
    ]))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout_info.title_area);

    match model.route {
        Route::Login | Route::Register => {
            auth_form::render_auth_form(f, layout_info.content_area, model.route, &model.auth);
        }
        Route::PollList => {
            poll_list::render_poll_list(f, layout_info.content_area, &model.poll_list);
        }
        Route::CreatePoll => {
            create_poll::render_create_poll(f, layout_info.content_area, &model.create_poll);
        }
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.route,
        model.ui.vim_mode,
        has_modal,
    );
    status_bar::render_status_bar(f, layout_info.status_area, model);

    // Render dialogs if active
    if model.route == Route::PollList {
        if let Some(confirm) = &model.poll_list.confirm_delete {
            dialogs::render_delete_confirmation(f, confirm);
        } else if let Some(edit) = &model.poll_list.edit {
            dialogs::render_edit_poll(f, edit);
        } else if model.ui.show_help {
            dialogs::render_help(f, model.ui.vim_mode);
        }
    }

    // Render toast notification if active
    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }
}
