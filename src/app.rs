//! Page bootstrap.
//!
//! ARCHITECTURE
//! ============
//! `start` runs when the WASM module is instantiated. Theme and mobile menu are
//! applied immediately; everything that needs the parsed document waits for
//! `DOMContentLoaded` (or runs at once when parsing already finished). Every
//! listener and timer created here lands in a thread-local registry, so
//! [`teardown`] can release all of them.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

/// Which display updaters a page needs, from the containers it has.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PagePlan {
    pub load_statistics: bool,
    pub poll_availability: bool,
}

impl PagePlan {
    pub fn new(has_floors_container: bool, has_availability_table: bool) -> Self {
        Self { load_statistics: has_floors_container, poll_availability: has_availability_table }
    }
}

#[cfg(feature = "hydrate")]
mod page {
    use std::cell::RefCell;

    use web_sys::Document;

    use super::PagePlan;
    use crate::components::availability::AvailabilityPoller;
    use crate::components::forms::init_forms;
    use crate::components::nav::setup_mobile_menu;
    use crate::components::search::setup_search;
    use crate::components::statistics::update_dorm_statistics;
    use crate::components::tooltip::init_tooltips;
    use crate::config::UiConfig;
    use crate::consts::{AVAILABILITY_TABLE_ID, FLOORS_CONTAINER_SELECTOR};
    use crate::dom::{self, Listener};
    use crate::error::UiError;
    use crate::state::preference;
    use crate::util::scheduler::TimerScheduler;

    #[derive(Default)]
    struct PageHandles {
        config: UiConfig,
        listeners: Vec<Listener>,
        poller: Option<AvailabilityPoller<TimerScheduler>>,
    }

    thread_local! {
        static PAGE: RefCell<PageHandles> = RefCell::new(PageHandles::default());
    }

    /// Config the page started with.
    pub fn config() -> UiConfig {
        PAGE.with(|page| page.borrow().config.clone())
    }

    fn keep(listeners: impl IntoIterator<Item = Listener>) {
        PAGE.with(|page| page.borrow_mut().listeners.extend(listeners));
    }

    pub fn start() {
        console_error_panic_hook::set_once();
        let config = UiConfig::load();
        if console_log::init_with_level(config.level()).is_err() {
            log::debug!("logger already installed");
        }
        PAGE.with(|page| page.borrow_mut().config = config.clone());

        match preference::load_theme() {
            Ok(theme) => log::debug!("theme: {}", theme.as_str()),
            Err(err) => log::debug!("theme not loaded: {err}"),
        }

        if let Err(err) = boot(&config) {
            log::warn!("page bootstrap failed: {err}");
        }
    }

    fn boot(config: &UiConfig) -> Result<(), UiError> {
        let document = dom::document()?;
        match setup_mobile_menu(&document, config.mobile_breakpoint_px) {
            Ok(listeners) => keep(listeners),
            Err(err) => log::debug!("mobile menu skipped: {err}"),
        }

        if document.ready_state() == "loading" {
            let ready = Listener::new(&document, "DOMContentLoaded", |_| init_page())?;
            keep([ready]);
        } else {
            init_page();
        }
        Ok(())
    }

    fn init_page() {
        let config = config();
        let document = match dom::document() {
            Ok(document) => document,
            Err(err) => {
                log::warn!("page init skipped: {err}");
                return;
            }
        };
        keep(init_tooltips(&document));
        keep(init_forms(&document));
        keep(setup_search(&document, config.search_debounce_ms));
        load_initial_data(&document, &config);
        log::info!("page ready");
    }

    fn load_initial_data(document: &Document, config: &UiConfig) {
        let plan = PagePlan::new(
            dom::query(document, FLOORS_CONTAINER_SELECTOR).is_some(),
            document.get_element_by_id(AVAILABILITY_TABLE_ID).is_some(),
        );
        log::debug!("page plan: {plan:?}");
        if plan.load_statistics {
            update_dorm_statistics(document, &config.statistics);
        }
        if plan.poll_availability {
            let poller = AvailabilityPoller::start(&TimerScheduler, config.availability_period_ms);
            PAGE.with(|page| page.borrow_mut().poller = Some(poller));
        }
    }

    /// Keep a listener created after start-up (photo previews) alive with the page.
    pub fn adopt(listener: Listener) {
        keep([listener]);
    }

    /// Drop every listener and timer the page registered.
    pub fn teardown() {
        let (listeners, poller) = PAGE.with(|page| {
            let mut page = page.borrow_mut();
            (std::mem::take(&mut page.listeners), page.poller.take())
        });
        log::debug!("teardown: releasing {} listeners", listeners.len());
        drop(listeners);
        drop(poller);
    }
}

#[cfg(feature = "hydrate")]
pub use page::{adopt, config, start, teardown};
