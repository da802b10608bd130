use std::cell::Cell;

use super::*;

struct Row {
    text: &'static str,
    visible: Cell<bool>,
}

impl Row {
    fn new(text: &'static str) -> Self {
        Self { text, visible: Cell::new(true) }
    }
}

impl SearchRow for Row {
    fn text(&self) -> String {
        self.text.to_owned()
    }

    fn set_visible(&self, visible: bool) {
        self.visible.set(visible);
    }
}

fn table() -> Vec<Row> {
    vec![
        Row::new("Block A  Floor 2  Computer Lab  open"),
        Row::new("Block B  Floor 1  Laboratory wing  full"),
        Row::new("Block C  Floor 3  Library annex  open"),
        Row::new("Block D  Floor 1  Cafeteria side  2 beds"),
    ]
}

#[test]
fn row_matches_is_case_insensitive_substring() {
    assert!(row_matches("Laboratory", "lab"));
    assert!(row_matches("computer LAB", "Lab"));
    assert!(!row_matches("Library", "lab"));
}

#[test]
fn search_hides_non_matching_rows_and_shows_matching() {
    let rows = table();
    let summary = filter_rows(&rows, "lab");

    let visible: Vec<bool> = rows.iter().map(|row| row.visible.get()).collect();
    assert_eq!(visible, vec![true, true, false, false]);
    assert_eq!(summary, SearchSummary { shown: 2, hidden: 2 });
}

#[test]
fn later_search_restores_previously_hidden_rows() {
    let rows = table();
    filter_rows(&rows, "lab");
    filter_rows(&rows, "floor 1");

    let visible: Vec<bool> = rows.iter().map(|row| row.visible.get()).collect();
    assert_eq!(visible, vec![false, true, false, true]);
}

#[test]
fn empty_query_shows_every_row() {
    let rows = table();
    filter_rows(&rows, "nothing matches this");
    let summary = filter_rows(&rows, "");
    assert_eq!(summary, SearchSummary { shown: 4, hidden: 0 });
    assert!(rows.iter().all(|row| row.visible.get()));
}
