//! Client-side filtering of the availability table.
//!
//! Rows stay in the DOM; non-matching rows are hidden with `display: none`.
//! Matching is a case-insensitive substring test over the row's text with no
//! ranking or highlighting.

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

/// A table row as seen by the filter.
pub trait SearchRow {
    fn text(&self) -> String;
    fn set_visible(&self, visible: bool);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchSummary {
    pub shown: usize,
    pub hidden: usize,
}

pub fn row_matches(text: &str, query: &str) -> bool {
    text.to_lowercase().contains(&query.to_lowercase())
}

/// Show rows containing `query`, hide the rest.
pub fn filter_rows<R: SearchRow>(rows: &[R], query: &str) -> SearchSummary {
    let mut summary = SearchSummary::default();
    for row in rows {
        let visible = row_matches(&row.text(), query);
        row.set_visible(visible);
        if visible {
            summary.shown += 1;
        } else {
            summary.hidden += 1;
        }
    }
    summary
}

#[cfg(feature = "hydrate")]
mod bind {
    use std::rc::Rc;

    use web_sys::{Document, HtmlElement, HtmlInputElement};

    use super::{SearchRow, SearchSummary, filter_rows};
    use crate::consts::{AVAILABILITY_ROW_SELECTOR, SEARCH_INPUT_SELECTOR};
    use crate::dom::{self, Listener};
    use crate::error::UiError;
    use crate::util::debounce::Debouncer;
    use crate::util::scheduler::TimerScheduler;

    impl SearchRow for HtmlElement {
        fn text(&self) -> String {
            self.text_content().unwrap_or_default()
        }

        fn set_visible(&self, visible: bool) {
            let display = if visible { "" } else { "none" };
            dom::report("row display", dom::set_style(self, "display", display));
        }
    }

    /// Filter the availability table rows against `query`.
    pub fn perform_search(query: &str) -> Result<SearchSummary, UiError> {
        log::info!("Searching for: {query}");
        let rows = dom::query_all_as::<HtmlElement>(&dom::document()?, AVAILABILITY_ROW_SELECTOR);
        let summary = filter_rows(&rows, query);
        log::debug!("search matched {} of {} rows", summary.shown, summary.shown + summary.hidden);
        Ok(summary)
    }

    /// Debounce `input` events on every search box into [`perform_search`].
    pub fn setup_search(document: &Document, delay_ms: u32) -> Vec<Listener> {
        let mut listeners = Vec::new();
        for input in dom::query_all_as::<HtmlInputElement>(document, SEARCH_INPUT_SELECTOR) {
            let debouncer = Rc::new(Debouncer::new(TimerScheduler, delay_ms, |query: String| {
                if let Err(err) = perform_search(&query) {
                    log::debug!("search failed: {err}");
                }
            }));
            let field = input.clone();
            match Listener::new(&input, "input", move |_| debouncer.call(field.value())) {
                Ok(listener) => listeners.push(listener),
                Err(err) => log::debug!("binding search input failed: {err}"),
            }
        }
        listeners
    }
}

#[cfg(feature = "hydrate")]
pub use bind::{perform_search, setup_search};
