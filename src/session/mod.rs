// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search modal's state, owned in one place.
//!
//! The modal tracks: is it open, what's typed, which category button is
//! active, which result is selected, and what the results panel shows. Input
//! goes through a [`Debouncer`]; a search only runs when the newest ticket
//! comes due, so a burst of keystrokes costs one search.
//!
//! ```text
//!            input ≥ min           ticket due
//!   Idle ─────────────────▶ Loading ───────────▶ Results | Empty | NoResults
//!    ▲                         │                        │
//!    └──── input < min, close ─┴────────────────────────┘
//! ```

pub mod debounce;

use std::sync::Arc;
use std::time::Instant;

use crate::search::{SearchOptions, SearchState, Searcher};
use crate::types::{Category, SearchHit};

pub use debounce::{Debouncer, Ticket};

/// Keys the modal reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The open shortcut (Ctrl+K / Cmd+K). Toggles the modal.
    Shortcut,
    Escape,
    ArrowDown,
    ArrowUp,
    Enter,
}

/// What the host should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionAction {
    None,
    Opened,
    Closed,
    /// Go to this url. The modal has already closed itself.
    Navigate(String),
}

pub struct SearchSession {
    searcher: Arc<Searcher>,
    debouncer: Debouncer,
    open: bool,
    query: String,
    category: Option<Category>,
    selected: usize,
    state: SearchState,
}

impl SearchSession {
    pub fn new(searcher: Arc<Searcher>) -> Self {
        let debouncer = Debouncer::new(searcher.config().debounce());
        Self {
            searcher,
            debouncer,
            open: false,
            query: String::new(),
            category: None,
            selected: 0,
            state: SearchState::Idle,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn category(&self) -> Option<Category> {
        self.category
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// The highlighted result, if there are any results.
    pub fn selected(&self) -> Option<&SearchHit> {
        self.state.results()?.hits().nth(self.selected)
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close the modal and forget the query. Anything pending is dropped.
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.reset();
    }

    /// Record typed input. Returns the ticket if a search was scheduled.
    ///
    /// Ignored while the modal is closed.
    pub fn input(&mut self, text: &str, now: Instant) -> Option<Ticket> {
        if !self.open {
            return None;
        }
        self.query = text.to_string();
        if !self.searcher.accepts(&self.query) {
            self.reset();
            return None;
        }
        self.state = SearchState::Loading;
        Some(self.debouncer.schedule(now))
    }

    /// Switch the category filter and re-run the current query through the debouncer.
    pub fn set_category(&mut self, category: Option<Category>, now: Instant) -> Option<Ticket> {
        self.category = category;
        let query = std::mem::take(&mut self.query);
        self.input(&query, now)
    }

    /// Run the pending search if its window has passed. Returns whether it ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.take_due(now) {
            Some(ticket) => {
                self.run(ticket);
                true
            }
            None => false,
        }
    }

    /// Run the search for `ticket` now, if it's still the newest one.
    ///
    /// For hosts that drive their own timers. A stale ticket changes nothing.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        if !self.debouncer.is_current(&ticket) {
            tracing::trace!(generation = ticket.generation, "dropping stale search");
            return false;
        }
        self.debouncer.cancel();
        self.run(ticket);
        true
    }

    pub fn handle_key(&mut self, key: Key) -> SessionAction {
        match key {
            Key::Shortcut if self.open => {
                self.close();
                SessionAction::Closed
            }
            Key::Shortcut => {
                self.open();
                SessionAction::Opened
            }
            _ if !self.open => SessionAction::None,
            Key::Escape => {
                self.close();
                SessionAction::Closed
            }
            Key::ArrowDown => {
                self.step(1);
                SessionAction::None
            }
            Key::ArrowUp => {
                self.step(-1);
                SessionAction::None
            }
            Key::Enter => match self.selected().map(|hit| hit.document.url.clone()) {
                Some(url) => {
                    self.close();
                    SessionAction::Navigate(url)
                }
                None => SessionAction::None,
            },
        }
    }

    fn run(&mut self, ticket: Ticket) {
        let options = SearchOptions {
            category: self.category,
        };
        self.state = self.searcher.query(&self.query, &options);
        self.selected = 0;
        tracing::trace!(
            generation = ticket.generation,
            state = self.state.name(),
            "search completed"
        );
    }

    fn reset(&mut self) {
        self.debouncer.cancel();
        self.state = SearchState::Idle;
        self.selected = 0;
    }

    /// Move the selection, wrapping at both ends.
    fn step(&mut self, delta: isize) {
        let count = self.state.results().map_or(0, |r| r.total);
        if count == 0 {
            return;
        }
        self.selected = (self.selected as isize + delta).rem_euclid(count as isize) as usize;
    }
}
