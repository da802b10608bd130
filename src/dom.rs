//! Thin typed layer over `web-sys` used by every browser-facing module.
//!
//! Lookups return `Result`/`Option` instead of panicking so that a page
//! missing an element simply skips the feature. Event handlers are wrapped in
//! [`Listener`], which unregisters itself on drop; whoever holds the listener
//! decides how long the binding lives.

use js_sys::Function;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::UiError;

pub fn window() -> Result<Window, UiError> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> Result<Document, UiError> {
    window()?.document().ok_or(UiError::NoDocument)
}

pub fn body() -> Result<HtmlElement, UiError> {
    document()?.body().ok_or(UiError::NoBody)
}

/// Current `innerWidth` of the window in CSS pixels.
pub fn viewport_width() -> Result<f64, UiError> {
    let width = window()?.inner_width()?;
    width.as_f64().ok_or(UiError::Cast("number"))
}

/// First element matching `selector`, if any.
pub fn query(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(found) => found,
        Err(err) => {
            log::debug!("query {selector} failed: {}", UiError::from(err));
            None
        }
    }
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &Document, selector: &str) -> Vec<Element> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(err) => {
            log::debug!("query_all {selector} failed: {}", UiError::from(err));
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|index| list.item(index))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements matching `selector`, cast to `T`; elements of another type are skipped.
pub fn query_all_as<T: JsCast>(document: &Document, selector: &str) -> Vec<T> {
    query_all(document, selector)
        .into_iter()
        .filter_map(|element| element.dyn_into::<T>().ok())
        .collect()
}

/// Element with the given id, cast to `T`.
pub fn by_id<T: JsCast>(document: &Document, id: &str) -> Result<T, UiError> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| UiError::Missing(format!("#{id}")))?
        .dyn_into::<T>()
        .map_err(|_| UiError::Cast(std::any::type_name::<T>()))
}

/// Create an element and cast it to `T`.
pub fn create<T: JsCast>(document: &Document, tag: &str) -> Result<T, UiError> {
    document
        .create_element(tag)?
        .dyn_into::<T>()
        .map_err(|_| UiError::Cast(std::any::type_name::<T>()))
}

/// Set one inline style property.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) -> Result<(), UiError> {
    element.style().set_property(property, value)?;
    Ok(())
}

/// Read one inline style property (empty when unset).
pub fn style_value(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap_or_default()
}

/// Log a failed glue operation. Used at the edge of event handlers.
pub fn report(context: &str, result: Result<(), UiError>) {
    if let Err(err) = result {
        log::debug!("{context}: {err}");
    }
}

/// A registered DOM event handler. Dropping it removes the handler.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Register `handler` for `event` on `target`.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, UiError>
    where
        F: FnMut(Event) + 'static,
    {
        let closure = Closure::<dyn FnMut(Event)>::new(handler);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref::<Function>())?;
        Ok(Self { target: target.clone(), event, closure })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let callback: &JsValue = self.closure.as_ref();
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, callback.unchecked_ref::<Function>())
        {
            log::debug!("removing {} listener failed: {}", self.event, UiError::from(err));
        }
    }
}
