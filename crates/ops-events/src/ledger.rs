//! Ledger Rows
//!
//! The derived output schema: an event paired with the running supply
//! after that event was applied. Rows are computed once per run by a
//! forward pass over the sorted stream and never mutated afterward.

use serde::{Deserialize, Serialize};

use crate::event::Event;

/// One row of the output table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerRow {
    #[serde(flatten)]
    pub event: Event,
    /// Cumulative supply after this event's contribution was applied
    pub running_supply: f64,
}

impl LedgerRow {
    pub fn new(event: Event, running_supply: f64) -> Self {
        Self {
            event,
            running_supply,
        }
    }
}
