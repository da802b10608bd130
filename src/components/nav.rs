//! Collapsible main navigation for narrow viewports.
//!
//! The menu button only exists when the page is first loaded at or below the
//! breakpoint. Widening the window past the breakpoint clears the inline
//! display override so the stylesheet's desktop layout takes over again.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Whether a viewport this wide gets the menu button.
pub fn menu_applies(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

/// Nav `display` after a click on the menu button.
pub fn toggled_display(current: &str) -> &'static str {
    if current == "flex" { "none" } else { "flex" }
}

/// Nav `display` to force after a resize, if any.
pub fn display_after_resize(viewport_width: f64, breakpoint: f64) -> Option<&'static str> {
    if viewport_width > breakpoint { Some("") } else { None }
}

#[cfg(feature = "hydrate")]
mod bind {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement, Node};

    use super::{display_after_resize, menu_applies, toggled_display};
    use crate::consts::{HEADER_SELECTOR, MAIN_NAV_SELECTOR, MENU_TOGGLE_CLASS, MENU_TOGGLE_ICON};
    use crate::dom::{self, Listener};
    use crate::error::UiError;

    /// Insert the menu button before the nav when the page starts narrow.
    ///
    /// Returns no listeners when the header or nav is missing or the viewport
    /// is wider than `breakpoint`.
    pub fn setup_mobile_menu(document: &Document, breakpoint: f64) -> Result<Vec<Listener>, UiError> {
        let (Some(header), Some(nav)) = (dom::query(document, HEADER_SELECTOR), dom::query(document, MAIN_NAV_SELECTOR))
        else {
            return Ok(Vec::new());
        };
        if !menu_applies(dom::viewport_width()?, breakpoint) {
            return Ok(Vec::new());
        }
        let nav: HtmlElement = nav.dyn_into().map_err(|_| UiError::Cast("HtmlElement"))?;

        let button: Element = dom::create(document, "button")?;
        button.set_class_name(MENU_TOGGLE_CLASS);
        let icon: Element = dom::create(document, "i")?;
        icon.set_class_name(MENU_TOGGLE_ICON);
        button.append_child(&icon)?;
        let anchor: &Node = &nav;
        header.insert_before(&button, Some(anchor))?;

        let nav_for_click = nav.clone();
        let on_click = Listener::new(&button, "click", move |_| {
            let next = toggled_display(&dom::style_value(&nav_for_click, "display"));
            dom::report("menu toggle", dom::set_style(&nav_for_click, "display", next));
        })?;

        let window = dom::window()?;
        let on_resize = Listener::new(&window, "resize", move |_| {
            let width = match dom::viewport_width() {
                Ok(width) => width,
                Err(err) => {
                    log::debug!("resize: {err}");
                    return;
                }
            };
            if let Some(display) = display_after_resize(width, breakpoint) {
                dom::report("nav reset", dom::set_style(&nav, "display", display));
            }
        })?;

        log::debug!("mobile menu installed");
        Ok(vec![on_click, on_resize])
    }
}

#[cfg(feature = "hydrate")]
pub use bind::setup_mobile_menu;
