//! User Pool Fabrication
//!
//! Builds the pool of synthetic business accounts a run attributes its
//! events to. Join dates land in the first half of the generation window so
//! most accounts have a history by the time the stream ends.

use chrono::Duration;
use rand::rngs::SmallRng;
use rand::Rng;

use ops_events::user::generate_user_id;
use ops_events::{AcquisitionChannel, BusinessType, Region, TimeRange, UserProfile};

use crate::generate::choose;

/// Fabricates `event_count / events_per_user` profiles, at least one.
pub fn create_user_pool(
    rng: &mut SmallRng,
    event_count: u64,
    range: TimeRange,
    events_per_user: u64,
) -> Vec<UserProfile> {
    let pool_size = (event_count / events_per_user.max(1)).max(1);
    let join_span = range.span_seconds() / 2;

    (0..pool_size)
        .map(|sequence| {
            let offset = if join_span > 0 {
                rng.gen_range(0..=join_span)
            } else {
                0
            };
            UserProfile::new(
                generate_user_id(sequence),
                range.start() + Duration::seconds(offset),
                *choose(rng, BusinessType::all()),
                *choose(rng, Region::all()),
                *choose(rng, AcquisitionChannel::all()),
            )
        })
        .collect()
}
