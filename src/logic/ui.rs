//! UI timing and text-input helpers
//!
//! Pure functions for toast lifetime and single-line text editing.

use unicode_width::UnicodeWidthStr;

/// Toasts stay up for this long
pub const TOAST_DURATION_MS: u128 = 2500;

/// Check if a toast has been visible long enough to dismiss
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_DURATION_MS
}

/// Terminal column of the cursor after `text`
pub fn cursor_column(text: &str) -> u16 {
    u16::try_from(UnicodeWidthStr::width(text)).unwrap_or(u16::MAX)
}

/// Mask a password for display
pub fn mask(text: &str) -> String {
    "•".repeat(text.chars().count())
}

/// Remove the last character, if any
pub fn backspace(text: &mut String) {
    text.pop();
}
