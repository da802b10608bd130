//! Toolbar actions: export and print.
//!
//! Export is an acknowledgement only. No file is generated until the pages
//! have an export backend.

use std::str::FromStr;

#[cfg(test)]
#[path = "actions_test.rs"]
mod actions_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Excel,
    Pdf,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown export format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for ExportFormat {
    type Err = UnknownFormat;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" => Ok(Self::Excel),
            "pdf" => Ok(Self::Pdf),
            other => Err(UnknownFormat(other.to_owned())),
        }
    }
}

/// Acknowledgement shown for an export request.
pub fn export_message(format: &str) -> String {
    format!("Exporting data as {}...", format.to_uppercase())
}

#[cfg(feature = "hydrate")]
mod browser {
    use super::{ExportFormat, export_message};
    use crate::dom;
    use crate::error::UiError;

    pub fn export_data(format: &str) -> Result<(), UiError> {
        match format.parse::<ExportFormat>() {
            Ok(parsed) => log::info!("export requested: {parsed:?}"),
            Err(err) => log::warn!("{err}"),
        }
        dom::window()?.alert_with_message(&export_message(format))?;
        Ok(())
    }

    pub fn print_page() -> Result<(), UiError> {
        dom::window()?.print()?;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
pub use browser::{export_data, print_page};
