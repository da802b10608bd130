//! Inline error messages beside form fields.
//!
//! The message node is appended to the field's immediate container, and a
//! container never holds more than one message: showing a new one removes the
//! previous one first.

use crate::error::UiError;

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

/// The element wrapping a field and its feedback.
pub trait FieldContainer {
    type Node;

    /// The container's current error node, if any.
    fn find_error(&self) -> Option<Self::Node>;

    fn remove_node(&self, node: Self::Node);

    /// # Errors
    ///
    /// Returns an error when the node cannot be created or attached.
    fn append_error(&self, message: &str) -> Result<(), UiError>;
}

/// Replace the container's error message with `message`.
///
/// # Errors
///
/// Returns an error when the new node cannot be attached. The old node is
/// already gone at that point.
pub fn show_error<C: FieldContainer>(container: &C, message: &str) -> Result<(), UiError> {
    hide_error(container);
    container.append_error(message)
}

/// Remove the container's error message. Returns whether one was present.
pub fn hide_error<C: FieldContainer>(container: &C) -> bool {
    match container.find_error() {
        Some(node) => {
            container.remove_node(node);
            true
        }
        None => false,
    }
}

#[cfg(feature = "hydrate")]
impl FieldContainer for web_sys::Element {
    type Node = web_sys::Element;

    fn find_error(&self) -> Option<web_sys::Element> {
        match self.query_selector(crate::consts::ERROR_MESSAGE_SELECTOR) {
            Ok(found) => found,
            Err(err) => {
                log::debug!("error lookup failed: {}", UiError::from(err));
                None
            }
        }
    }

    fn remove_node(&self, node: web_sys::Element) {
        node.remove();
    }

    fn append_error(&self, message: &str) -> Result<(), UiError> {
        use crate::consts::{ERROR_MESSAGE_CLASS, INVALID_COLOR};
        use crate::dom;

        let document = self.owner_document().ok_or(UiError::NoDocument)?;
        let error: web_sys::HtmlElement = dom::create(&document, "div")?;
        error.set_class_name(ERROR_MESSAGE_CLASS);
        dom::set_style(&error, "color", INVALID_COLOR)?;
        dom::set_style(&error, "font-size", "12px")?;
        dom::set_style(&error, "margin-top", "5px")?;
        error.set_text_content(Some(message));
        self.append_child(&error)?;
        Ok(())
    }
}

/// Show `message` beside `field`. Fields without a parent are skipped.
#[cfg(feature = "hydrate")]
pub fn show_field_error(field: &web_sys::Element, message: &str) -> Result<(), UiError> {
    let container = field.parent_element().ok_or_else(|| UiError::Missing("field container".to_owned()))?;
    show_error(&container, message)
}

/// Remove the message beside `field`, if any.
#[cfg(feature = "hydrate")]
pub fn hide_field_error(field: &web_sys::Element) {
    if let Some(container) = field.parent_element() {
        hide_error(&container);
    }
}
