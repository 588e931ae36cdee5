// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keystroke coalescing with a generation counter.
//!
//! Every `schedule` bumps the generation and replaces the pending ticket, so
//! only the newest request can ever fire. Hosts with real timers hold on to the
//! [`Ticket`] and ask [`Debouncer::is_current`] when the timer goes off; hosts
//! with a frame loop call [`Debouncer::take_due`] instead. Time is always passed
//! in, never read, which keeps this deterministic under test.

use std::time::{Duration, Instant};

/// A scheduled search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub due: Instant,
}

#[derive(Debug, Clone)]
pub struct Debouncer {
    window: Duration,
    generation: u64,
    pending: Option<Ticket>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            generation: 0,
            pending: None,
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Generation of the most recently scheduled ticket (0 before the first).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn pending(&self) -> Option<Ticket> {
        self.pending
    }

    /// Supersede whatever is pending with a ticket due one window from `now`.
    pub fn schedule(&mut self, now: Instant) -> Ticket {
        self.generation += 1;
        let ticket = Ticket {
            generation: self.generation,
            due: now + self.window,
        };
        self.pending = Some(ticket);
        ticket
    }

    /// Is this the ticket that is still waiting to fire?
    pub fn is_current(&self, ticket: &Ticket) -> bool {
        self.pending
            .is_some_and(|pending| pending.generation == ticket.generation)
    }

    /// Hand out the pending ticket once its window has passed.
    pub fn take_due(&mut self, now: Instant) -> Option<Ticket> {
        match self.pending {
            Some(ticket) if now >= ticket.due => self.pending.take(),
            _ => None,
        }
    }

    /// Drop the pending ticket, if any. The generation is not rewound.
    pub fn cancel(&mut self) {
        self.pending = None;
    }
}
