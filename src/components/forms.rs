//! Form field bindings: validate on blur, keep phone fields numeric.

use crate::consts::{INVALID_COLOR, NEUTRAL_BORDER_COLOR};
use crate::util::validate::FieldRule;

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

/// What a field should look like after losing focus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldFeedback {
    pub border_color: &'static str,
    pub message: Option<&'static str>,
}

pub fn evaluate(rule: FieldRule, raw: &str) -> FieldFeedback {
    match rule.check(raw) {
        Ok(()) => FieldFeedback { border_color: NEUTRAL_BORDER_COLOR, message: None },
        Err(message) => FieldFeedback { border_color: INVALID_COLOR, message: Some(message) },
    }
}

#[cfg(feature = "hydrate")]
mod bind {
    use web_sys::{Document, HtmlInputElement};

    use super::evaluate;
    use crate::components::feedback::{hide_field_error, show_field_error};
    use crate::consts::{EMAIL_INPUT_SELECTOR, PHONE_INPUT_SELECTOR, STUDENT_ID_INPUT_SELECTOR};
    use crate::dom::{self, Listener};
    use crate::error::UiError;
    use crate::util::validate::{FieldRule, digits_only};

    /// Bind validation to every student-id, email and phone field on the page.
    pub fn init_forms(document: &Document) -> Vec<Listener> {
        let mut listeners = Vec::new();
        for (selector, rule) in [(STUDENT_ID_INPUT_SELECTOR, FieldRule::StudentId), (EMAIL_INPUT_SELECTOR, FieldRule::Email)] {
            for input in dom::query_all_as::<HtmlInputElement>(document, selector) {
                match bind_rule(&input, rule) {
                    Ok(listener) => listeners.push(listener),
                    Err(err) => log::debug!("binding {selector} failed: {err}"),
                }
            }
        }
        for input in dom::query_all_as::<HtmlInputElement>(document, PHONE_INPUT_SELECTOR) {
            match bind_phone(&input) {
                Ok(listener) => listeners.push(listener),
                Err(err) => log::debug!("binding phone field failed: {err}"),
            }
        }
        log::debug!("form bindings: {}", listeners.len());
        listeners
    }

    fn bind_rule(input: &HtmlInputElement, rule: FieldRule) -> Result<Listener, UiError> {
        let field = input.clone();
        Listener::new(input, "blur", move |_| {
            let feedback = evaluate(rule, &field.value());
            dom::report("field border", dom::set_style(&field, "border-color", feedback.border_color));
            match feedback.message {
                Some(message) => dom::report("field error", show_field_error(&field, message)),
                None => hide_field_error(&field),
            }
        })
    }

    fn bind_phone(input: &HtmlInputElement) -> Result<Listener, UiError> {
        let field = input.clone();
        Listener::new(input, "input", move |_| {
            let raw = field.value();
            let digits = digits_only(&raw);
            if digits != raw {
                field.set_value(&digits);
            }
        })
    }
}

#[cfg(feature = "hydrate")]
pub use bind::init_forms;
