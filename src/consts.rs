//! Shared constants: DOM selectors, produced class names, colors and timings.

// ── Selectors (consumed DOM contract) ───────────────────────────

pub const TOOLTIP_SELECTOR: &str = ".tooltip";
pub const TOOLTIP_TEXT_SELECTOR: &str = ".tooltip-text";
pub const STUDENT_ID_INPUT_SELECTOR: &str = r#"input[placeholder*="UGR/"]"#;
pub const EMAIL_INPUT_SELECTOR: &str = r#"input[type="email"]"#;
pub const PHONE_INPUT_SELECTOR: &str = r#"input[type="tel"]"#;
pub const SEARCH_INPUT_SELECTOR: &str = ".search-input";
pub const FLOORS_CONTAINER_SELECTOR: &str = ".floors-container";
pub const STAT_CARD_VALUE_SELECTOR: &str = ".stat-card h3";
pub const AVAILABILITY_TABLE_ID: &str = "availabilityTable";
pub const AVAILABILITY_ROW_SELECTOR: &str = "#availabilityTable tr";
pub const HEADER_SELECTOR: &str = ".header";
pub const MAIN_NAV_SELECTOR: &str = ".main-nav";
pub const CONFIG_SCRIPT_ID: &str = "dormdesk-config";

// ── Produced markup ─────────────────────────────────────────────

pub const ERROR_MESSAGE_CLASS: &str = "error-message";
pub const ERROR_MESSAGE_SELECTOR: &str = ".error-message";
pub const MENU_TOGGLE_CLASS: &str = "menu-toggle";
pub const MENU_TOGGLE_ICON: &str = "fas fa-bars";
pub const DARK_THEME_CLASS: &str = "dark-theme";

// ── Colors ──────────────────────────────────────────────────────

/// Border and message color for a field that failed validation.
pub const INVALID_COLOR: &str = "#dc3545";

/// Border color restored once a field validates (or is left empty).
pub const NEUTRAL_BORDER_COLOR: &str = "#ddd";

// ── Storage ─────────────────────────────────────────────────────

pub const THEME_STORAGE_KEY: &str = "theme";

// ── Timings and thresholds ──────────────────────────────────────

pub const SEARCH_DEBOUNCE_MS: u32 = 300;
pub const NOTIFICATION_DISMISS_MS: u32 = 5_000;
pub const AVAILABILITY_PERIOD_MS: u32 = 30_000;

/// Viewports at or below this width get the collapsible navigation menu.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;
