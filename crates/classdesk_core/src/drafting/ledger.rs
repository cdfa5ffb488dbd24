//! Per-slot drafting sequence guard.
//!
//! Each draft request for a slot takes a ticket with a strictly increasing
//! sequence number. Only the newest ticket for a slot may write its result,
//! so an older request that resolves late cannot overwrite a newer one.

use crate::model::schedule::{Period, SchoolDay};
use std::collections::HashMap;

/// Handle for one in-flight draft request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DraftTicket {
    pub day: SchoolDay,
    pub period: Period,
    pub sequence: u64,
}

#[derive(Debug, Clone, Default)]
pub struct DraftLedger {
    latest: HashMap<(SchoolDay, Period), u64>,
}

impl DraftLedger {
    /// Issues a ticket that supersedes every earlier ticket for the slot.
    pub fn issue(&mut self, day: SchoolDay, period: Period) -> DraftTicket {
        let sequence = self.latest.entry((day, period)).or_insert(0);
        *sequence += 1;
        DraftTicket {
            day,
            period,
            sequence: *sequence,
        }
    }

    pub fn is_current(&self, ticket: &DraftTicket) -> bool {
        self.latest.get(&(ticket.day, ticket.period)) == Some(&ticket.sequence)
    }
}
