//! Hover tooltips: `.tooltip` containers reveal their `.tooltip-text` child.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TooltipState {
    Shown,
    Hidden,
}

impl TooltipState {
    /// Pointer event that moves a tooltip into this state.
    pub fn trigger(self) -> &'static str {
        match self {
            Self::Shown => "mouseenter",
            Self::Hidden => "mouseleave",
        }
    }

    /// Inline `(visibility, opacity)` for the tooltip text.
    pub fn style(self) -> (&'static str, &'static str) {
        match self {
            Self::Shown => ("visible", "1"),
            Self::Hidden => ("hidden", "0"),
        }
    }
}

#[cfg(feature = "hydrate")]
mod bind {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, Element, HtmlElement};

    use super::TooltipState;
    use crate::consts::{TOOLTIP_SELECTOR, TOOLTIP_TEXT_SELECTOR};
    use crate::dom::{self, Listener};
    use crate::error::UiError;

    pub fn init_tooltips(document: &Document) -> Vec<Listener> {
        let mut listeners = Vec::new();
        for tooltip in dom::query_all(document, TOOLTIP_SELECTOR) {
            for state in [TooltipState::Shown, TooltipState::Hidden] {
                match bind(&tooltip, state) {
                    Ok(listener) => listeners.push(listener),
                    Err(err) => log::debug!("tooltip binding failed: {err}"),
                }
            }
        }
        listeners
    }

    fn bind(tooltip: &Element, state: TooltipState) -> Result<Listener, UiError> {
        let container = tooltip.clone();
        Listener::new(tooltip, state.trigger(), move |_| {
            dom::report("tooltip", apply(&container, state));
        })
    }

    fn apply(container: &Element, state: TooltipState) -> Result<(), UiError> {
        let Some(text) = container.query_selector(TOOLTIP_TEXT_SELECTOR)? else {
            return Ok(());
        };
        let text: HtmlElement = text.dyn_into().map_err(|_| UiError::Cast("HtmlElement"))?;
        let (visibility, opacity) = state.style();
        dom::set_style(&text, "visibility", visibility)?;
        dom::set_style(&text, "opacity", opacity)
    }

}

#[cfg(feature = "hydrate")]
pub use bind::init_tooltips;
