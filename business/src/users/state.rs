//! States of the users dashboard stored in `StateCtx`.
//!
//! UI code reads these via `ctx.state::<T>()` and writes only the input
//! states ([`SearchInput`] text and [`UsersInput`]) before dispatching a
//! command. Everything else is changed by commands.

use std::time::Duration;

use agit_states::{Debounce, State};
use chrono::{DateTime, Utc};

use crate::{Column, Dialog, DialogContent, PageDirection, Record, SortDirective};

/// The source record collection. Replaced wholesale on every mutation.
#[derive(Debug, Clone, Default)]
pub struct UsersState {
    records: Vec<Record>,
}

impl State for UsersState {}

impl UsersState {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn replace(&mut self, records: Vec<Record>) {
        self.records = records;
    }
}

/// The search term the table is filtered by, applied once the debounce fires.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchState {
    pub term: String,
}

impl State for SearchState {}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortState {
    pub directive: SortDirective,
}

impl State for SortState {}

/// What the search box shows, plus the pending debounced term.
#[derive(Debug)]
pub struct SearchInput {
    pub text: String,
    debounce: Debounce<String>,
}

impl State for SearchInput {}

impl Default for SearchInput {
    fn default() -> Self {
        Self::new(Duration::from_millis(500))
    }
}

impl SearchInput {
    pub fn new(quiet: Duration) -> Self {
        Self {
            text: String::new(),
            debounce: Debounce::new(quiet),
        }
    }

    /// Records a keystroke and restarts the quiet period.
    pub fn edit(&mut self, text: String, now: DateTime<Utc>) {
        self.debounce.schedule(text.clone(), now);
        self.text = text;
    }

    /// The term to apply, once the quiet period after the last edit is over.
    pub fn take_due(&mut self, now: DateTime<Utc>) -> Option<String> {
        self.debounce.poll(now)
    }

    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn remaining(&self, now: DateTime<Utc>) -> Option<Duration> {
        self.debounce.remaining(now)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DialogState {
    pub dialog: Option<Dialog>,
}

impl State for DialogState {}

impl DialogState {
    pub fn is_open(&self) -> bool {
        self.dialog.is_some()
    }
}

/// Inputs the UI fills in before dispatching a users command.
///
/// Commands take the value they need, so each input is consumed once.
#[derive(Debug, Clone, Default)]
pub struct UsersInput {
    /// For `EditSearchCommand`.
    pub search_text: Option<String>,
    /// For `ToggleSortCommand`.
    pub sort_click: Option<Column>,
    /// For `ChangePageCommand`.
    pub page_step: Option<PageDirection>,
    /// For `OpenDialogCommand`.
    pub open_dialog: Option<DialogContent>,
}

impl State for UsersInput {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeDelta, TimeZone};

    #[test]
    fn search_input_keeps_text_and_defers_term() {
        let start = Utc.with_ymd_and_hms(2026, 10, 19, 10, 0, 0).unwrap();
        let mut input = SearchInput::new(Duration::from_millis(500));

        input.edit("te".to_owned(), start);
        input.edit("test".to_owned(), start + TimeDelta::milliseconds(100));

        assert_eq!(input.text, "test");
        assert!(input.is_pending());
        assert_eq!(input.take_due(start + TimeDelta::milliseconds(500)), None);
        assert_eq!(
            input.take_due(start + TimeDelta::milliseconds(600)),
            Some("test".to_owned())
        );
        assert!(!input.is_pending());
    }
}
