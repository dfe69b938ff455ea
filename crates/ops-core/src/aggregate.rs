//! Sorting and Running-Supply Aggregation
//!
//! The ordered half of the pipeline. Sorting is stable so that equal
//! timestamps keep generation order, which makes the fold deterministic for
//! a fixed seed. The aggregate is a pure fold over the sorted stream: it
//! returns new rows instead of mutating any shared accumulator.

use ops_events::{Event, LedgerRow};

/// Stable ascending sort by timestamp; ties keep their original order.
///
/// Idempotent. Callers must sort before aggregating: the running supply is
/// order-dependent.
pub fn sort_by_time(mut events: Vec<Event>) -> Vec<Event> {
    events.sort_by_key(|event| event.timestamp);
    events
}

/// Folds signed contributions over a timestamp-ordered stream.
///
/// The supply after event `i` is the supply after event `i-1` plus that
/// event's contribution (seeded by `initial_supply` for the first event).
/// Output length always equals input length; an empty stream yields no rows
/// and no error.
pub fn compute_running_supply(events: &[Event], initial_supply: f64) -> Vec<LedgerRow> {
    let mut running = initial_supply;
    events
        .iter()
        .map(|event| {
            running += event.contribution();
            LedgerRow::new(event.clone(), running)
        })
        .collect()
}
