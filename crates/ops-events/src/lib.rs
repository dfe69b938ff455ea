//! Shared event types and serialization for the operations stream generator.
//!
//! This crate contains pure data structures with no generation logic.
//! It is a dependency for all other crates in the workspace.

pub mod category;
pub mod event;
pub mod ledger;
pub mod timerange;
pub mod user;

// Re-export category types
pub use category::{Contribution, EventCategory, BLOCKCHAINS};

// Re-export event types
pub use event::{generate_event_id, Event, EventStatus};

// Re-export ledger types
pub use ledger::LedgerRow;

// Re-export time range types
pub use timerange::{TimeRange, TimeRangeError};

// Re-export user types
pub use user::{AcquisitionChannel, BusinessType, Region, UserProfile};
