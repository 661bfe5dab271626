//! Keyboard Input Handler
//!
//! Dispatches key presses to the current screen. Modal dialogs on the poll
//! list take every key while they are showing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::logic::navigation::cycle_focus;
use crate::logic::route::Route;
use crate::logic::ui::backspace;
use crate::model::auth::fields_for;
use crate::model::ListReason;
use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    // Any key dismisses the help overlay
    if app.model.ui.show_help {
        app.model.ui.show_help = false;
        return;
    }

    match app.model.route {
        Route::Login | Route::Register => handle_auth_key(app, key),
        Route::PollList => handle_list_key(app, key),
        Route::CreatePoll => handle_create_key(app, key),
    }
}

fn handle_auth_key(app: &mut App, key: KeyEvent) {
    let route = app.model.route;
    let field_count = fields_for(route).len();
    let form = &mut app.model.auth;

    match key.code {
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            let other = if route == Route::Login {
                Route::Register
            } else {
                Route::Login
            };
            app.navigate(other);
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus = cycle_focus(form.focus.min(field_count - 1), field_count, true);
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = cycle_focus(form.focus.min(field_count - 1), field_count, false);
        }
        KeyCode::Enter => app.submit_auth(),
        KeyCode::Esc => app.model.ui.should_quit = true,
        KeyCode::Backspace => {
            let field = form.focused_field(route);
            backspace(form.value_mut(field));
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            let field = form.focused_field(route);
            form.value_mut(field).push(c);
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if app.model.poll_list.confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            // Ignore other keys while prompt is showing
            _ => {}
        }
        return;
    }

    if app.model.poll_list.edit.is_some() {
        handle_edit_key(app, key);
        return;
    }

    let vim_mode = app.model.ui.vim_mode;
    let list = &mut app.model.poll_list;

    match key.code {
        KeyCode::Down => list.select_next_poll(),
        KeyCode::Up => list.select_prev_poll(),
        KeyCode::Right => list.select_next_option(),
        KeyCode::Left => list.select_prev_option(),
        KeyCode::Char('j') if vim_mode => list.select_next_poll(),
        KeyCode::Char('k') if vim_mode => list.select_prev_poll(),
        KeyCode::Char('l') if vim_mode => list.select_next_option(),
        KeyCode::Char('h') if vim_mode => list.select_prev_option(),
        KeyCode::Enter | KeyCode::Char(' ') => app.vote_selected(),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            app.vote_option_at(index);
        }
        KeyCode::Char('c') => app.navigate(Route::CreatePoll),
        KeyCode::Char('r') => app.load_polls(ListReason::Refresh),
        KeyCode::Char('e') => app.open_edit_selected(),
        KeyCode::Char('d') => app.request_delete_selected(),
        KeyCode::Char('L') => app.logout(),
        KeyCode::Char('?') => app.model.ui.show_help = true,
        KeyCode::Char('q') | KeyCode::Esc => app.model.ui.should_quit = true,
        _ => {}
    }
}

fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let Some(edit) = app.model.poll_list.edit.as_mut() else {
        return;
    };

    match key.code {
        KeyCode::Esc => app.cancel_edit(),
        KeyCode::Enter => app.save_edit(),
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            edit.focus = 1 - edit.focus.min(1);
        }
        // Typing is locked while a save is pending
        _ if edit.saving => {}
        KeyCode::Backspace => backspace(edit.focused_text_mut()),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            edit.focused_text_mut().push(c);
        }
        _ => {}
    }
}

fn handle_create_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.model.create_poll;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.navigate(Route::PollList),
        KeyCode::Enter => app.submit_create_poll(),
        KeyCode::Char('a') if ctrl => {
            let index = form.add_option();
            form.focus = 2 + index;
        }
        KeyCode::Char('d') if ctrl => {
            if let crate::model::create_poll::CreateField::Option(i) = form.focused_field() {
                if !form.remove_option(i) {
                    form.error = Some("A poll keeps at least 2 option fields".to_string());
                }
            }
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus = cycle_focus(form.focus, form.field_count(), true);
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = cycle_focus(form.focus, form.field_count(), false);
        }
        KeyCode::Backspace => backspace(form.focused_text_mut()),
        KeyCode::Char(c) if !ctrl => form.focused_text_mut().push(c),
        _ => {}
    }
}
