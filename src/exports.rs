//! Functions exported to page markup (`onclick` handlers and inline scripts).

use wasm_bindgen::prelude::wasm_bindgen;

use crate::app;
use crate::components::{actions, notifier, photo, search};
use crate::components::notifier::NotificationKind;
use crate::dom;
use crate::state::preference;
use crate::util::scheduler::TimerScheduler;
use crate::util::validate;

#[wasm_bindgen(start)]
pub fn start() {
    app::start();
}

#[wasm_bindgen(js_name = showNotification)]
pub fn show_notification(message: &str, kind: Option<String>) {
    let kind = kind.as_deref().map_or(NotificationKind::Info, NotificationKind::parse);
    let dismiss_ms = app::config().notification_dismiss_ms;
    dom::report("notification", notifier::show_notification(&TimerScheduler, message, kind, dismiss_ms));
}

/// Flip the theme; returns the theme now in effect.
#[wasm_bindgen(js_name = toggleTheme)]
pub fn toggle_theme() -> String {
    match preference::toggle_theme() {
        Ok(theme) => theme.as_str().to_owned(),
        Err(err) => {
            log::warn!("theme toggle failed: {err}");
            String::new()
        }
    }
}

#[wasm_bindgen(js_name = exportData)]
pub fn export_data(format: &str) {
    dom::report("export", actions::export_data(format));
}

#[wasm_bindgen(js_name = printPage)]
pub fn print_page() {
    dom::report("print", actions::print_page());
}

#[wasm_bindgen(js_name = previewPhoto)]
pub fn preview_photo(input_id: &str, preview_id: &str) {
    match photo::preview_photo(input_id, preview_id) {
        Ok(Some(listener)) => app::adopt(listener),
        Ok(None) => {}
        Err(err) => log::debug!("photo preview: {err}"),
    }
}

/// Filter the availability table; returns the number of rows left visible.
#[wasm_bindgen(js_name = performSearch)]
pub fn perform_search(query: &str) -> usize {
    match search::perform_search(query) {
        Ok(summary) => summary.shown,
        Err(err) => {
            log::debug!("search: {err}");
            0
        }
    }
}

#[wasm_bindgen(js_name = isValidStudentId)]
pub fn is_valid_student_id(text: &str) -> bool {
    validate::is_valid_student_id(text)
}

#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email(text: &str) -> bool {
    validate::is_valid_email(text)
}

#[wasm_bindgen]
pub fn teardown() {
    app::teardown();
}
