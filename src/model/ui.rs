//! UI Model
//!
//! Preferences and transient visual state shared by every screen.

use std::time::Instant;

#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    /// Hotkey help overlay
    pub show_help: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            toast_message: None,
            show_help: false,
            should_quit: false,
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    /// Error toasts are styled by their prefix
    pub fn show_error_toast(&mut self, message: &str) {
        self.show_toast(format!("Error: {}", message));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ui_model_creation() {
        let model = UiModel::new(true);
        assert!(model.vim_mode);
        assert!(!model.should_quit);
        assert!(model.toast_message.is_none());
    }

    #[test]
    fn test_toast() {
        let mut model = UiModel::new(false);
        model.show_error_toast("boom");
        assert_eq!(
            model.toast_message.as_ref().map(|(m, _)| m.as_str()),
            Some("Error: boom")
        );
        assert!(!model.should_dismiss_toast());

        model.dismiss_toast();
        assert!(model.toast_message.is_none());
    }
}
