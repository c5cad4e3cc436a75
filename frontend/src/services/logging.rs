use gloo::console;

pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        console::debug!(Self::prefixed(component, message));
    }

    pub fn info_with_component(component: &str, message: &str) {
        console::info!(Self::prefixed(component, message));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        console::warn!(Self::prefixed(component, message));
    }

    pub fn error_with_component(component: &str, message: &str) {
        console::error!(Self::prefixed(component, message));
    }

    fn prefixed(component: &str, message: &str) -> String {
        format!("[{}] {}", component, message)
    }
}
