//! Transient notifications appended to `<body>`.
//!
//! A notification carries an icon, the message text and a dismiss button. It
//! removes itself after the configured delay unless the user dismissed it
//! first; the timer checks that the box is still attached before removing it.

use crate::util::scheduler::{Scheduler, TaskHandle};

#[cfg(test)]
#[path = "notifier_test.rs"]
mod notifier_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotificationKind {
    /// Parse a kind name coming from page markup. Unknown names mean `Info`.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "success" => Self::Success,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    pub fn class_name(self) -> String {
        format!("notification notification-{}", self.as_str())
    }

    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Info => "fas fa-info-circle",
            Self::Success => "fas fa-check-circle",
            Self::Error => "fas fa-exclamation-circle",
        }
    }
}

/// A notification box already on the page.
pub trait Dismissable {
    /// Whether the box is still in the document.
    fn is_attached(&self) -> bool;

    fn dismiss(&self);
}

/// Dismiss `target` after `dismiss_ms` unless the user already closed it.
///
/// `keep_alive` (the close button's listener in the page) is released when
/// the timer fires.
pub fn schedule_dismiss<S, D, K>(scheduler: &S, dismiss_ms: u32, target: D, keep_alive: K)
where
    S: Scheduler,
    D: Dismissable + 'static,
    K: 'static,
{
    scheduler
        .once(
            dismiss_ms,
            Box::new(move || {
                if target.is_attached() {
                    target.dismiss();
                }
                drop(keep_alive);
            }),
        )
        .forget();
}

#[cfg(feature = "hydrate")]
mod render {
    use web_sys::{Element, HtmlElement};

    use super::{Dismissable, NotificationKind, schedule_dismiss};
    use crate::dom::{self, Listener};
    use crate::error::UiError;
    use crate::util::scheduler::Scheduler;

    impl Dismissable for HtmlElement {
        fn is_attached(&self) -> bool {
            self.parent_node().is_some()
        }

        fn dismiss(&self) {
            Element::remove(self);
        }
    }

    /// Append a notification to `<body>` and schedule its removal.
    pub fn show_notification<S: Scheduler>(
        scheduler: &S,
        message: &str,
        kind: NotificationKind,
        dismiss_ms: u32,
    ) -> Result<(), UiError> {
        let document = dom::document()?;
        let body = dom::body()?;

        let notification: HtmlElement = dom::create(&document, "div")?;
        notification.set_class_name(&kind.class_name());

        let icon: Element = dom::create(&document, "i")?;
        icon.set_class_name(kind.icon_class());
        notification.append_child(&icon)?;

        let text: Element = dom::create(&document, "span")?;
        text.set_text_content(Some(message));
        notification.append_child(&text)?;

        let close: Element = dom::create(&document, "button")?;
        close.set_text_content(Some("\u{00d7}"));
        notification.append_child(&close)?;

        let target = notification.clone();
        let on_close = Listener::new(&close, "click", move |_| target.dismiss())?;

        body.append_child(&notification)?;
        log::debug!("notification ({}) shown", kind.as_str());

        schedule_dismiss(scheduler, dismiss_ms, notification, on_close);
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use render::show_notification;
