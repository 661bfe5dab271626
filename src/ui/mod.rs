// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (title, content, legend, status bar)
// - render: Main orchestration function that picks the screen for the current route
// - auth_form: Login and Register screens
// - poll_list: Poll cards with vote controls
// - create_poll: Create-poll form
// - legend: Renders hotkey legend for the current screen
// - status_bar: Renders bottom status bar (session, poll count, last error)
// - input: Bordered single-line text input shared by the forms
// - dialogs: Delete confirmation, edit dialog, help overlay
// - toast: Renders toast notifications (brief pop-up messages)

pub mod auth_form;
pub mod create_poll;
pub mod dialogs;
pub mod input;
pub mod layout;
pub mod legend;
pub mod poll_list;
pub mod render;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
