/// Blocking yes/no question asked before destructive actions
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

/// `window.confirm()`. Answers "no" when there is no window.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
