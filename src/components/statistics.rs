//! Dormitory statistics cards.
//!
//! The figures are fixed placeholders until the pages get a data source; a
//! page config may override them.

use serde::Deserialize;

#[cfg(test)]
#[path = "statistics_test.rs"]
mod statistics_test;

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DormStatistics {
    pub total_dorms: u32,
    pub total_students: u32,
    pub available_beds: u32,
    pub waiting_list: u32,
}

impl Default for DormStatistics {
    fn default() -> Self {
        Self { total_dorms: 200, total_students: 1200, available_beds: 179, waiting_list: 45 }
    }
}

impl DormStatistics {
    /// Values in card order.
    pub fn values(&self) -> [u32; 4] {
        [self.total_dorms, self.total_students, self.available_beds, self.waiting_list]
    }
}

/// Something that displays one statistic.
pub trait TextSlot {
    fn set_text(&self, text: &str);
}

/// Write the statistics into the first four slots.
///
/// Pages with fewer than four cards are left untouched; returns whether the
/// cards were written.
pub fn write_statistics<T: TextSlot>(slots: &[T], stats: &DormStatistics) -> bool {
    let Some(cards) = slots.get(..4) else {
        return false;
    };
    for (card, value) in cards.iter().zip(stats.values()) {
        card.set_text(&value.to_string());
    }
    true
}

#[cfg(feature = "hydrate")]
impl TextSlot for web_sys::Element {
    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }
}

/// Fill the `.stat-card h3` elements on the current page.
#[cfg(feature = "hydrate")]
pub fn update_dorm_statistics(document: &web_sys::Document, stats: &DormStatistics) -> bool {
    let cards = crate::dom::query_all(document, crate::consts::STAT_CARD_VALUE_SELECTOR);
    let written = write_statistics(&cards, stats);
    if !written {
        log::debug!("statistics skipped: {} cards on page", cards.len());
    }
    written
}
