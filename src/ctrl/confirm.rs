#[cfg(test)]
use mockall::automock;

/// Guard for destructive actions. Pluggable so the browser-native dialog can
/// be replaced by a custom one, and mocked in tests.
#[cfg_attr(test, automock)]
pub trait ConfirmService {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm()` backed confirmation.
pub struct WindowConfirm;

impl ConfirmService for WindowConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
