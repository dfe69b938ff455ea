//! Event Stream Generation
//!
//! Fabricates the unordered event stream: weighted category draws, uniform
//! timestamps within the generation window, and per-category field
//! population driven by the config's rule tables.

use chrono::{DateTime, Duration, Utc};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use ops_events::category::{FEATURE_PRODUCTS, SIGNUP_PRODUCTS};
use ops_events::{
    generate_event_id, Event, EventCategory, EventStatus, TimeRange, UserProfile, BLOCKCHAINS,
};

use crate::config::Config;
use crate::setup;

/// Errors rejected before any event is produced.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("event count must be positive")]
    NonPositiveCount,
    #[error("negative weight for category '{name}': {weight}")]
    NegativeWeight { name: String, weight: f32 },
    #[error("all category weights are zero")]
    ZeroWeightTable,
}

/// One-shot event stream generator.
///
/// Holds the config, the generation window, and a seeded RNG; the same
/// seed and config produce the same stream.
pub struct Generator {
    config: Config,
    range: TimeRange,
    rng: SmallRng,
}

impl Generator {
    pub fn new(config: Config, range: TimeRange, seed: u64) -> Self {
        Self {
            config,
            range,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Produces exactly `count` events, unordered by construction.
    ///
    /// Duplicate timestamps are permitted and expected. Fails only on a
    /// non-positive count or an unusable weight table; the time range was
    /// already validated at construction.
    pub fn generate(&mut self, count: u64) -> Result<Vec<Event>, GenerateError> {
        if count == 0 {
            return Err(GenerateError::NonPositiveCount);
        }
        let table = self.config.weights.table();
        for (category, weight) in &table {
            if *weight < 0.0 {
                return Err(GenerateError::NegativeWeight {
                    name: category.as_str().to_string(),
                    weight: *weight,
                });
            }
        }
        if table.iter().map(|(_, w)| *w).sum::<f32>() <= 0.0 {
            return Err(GenerateError::ZeroWeightTable);
        }

        let users = setup::create_user_pool(
            &mut self.rng,
            count,
            self.range,
            self.config.run.events_per_user,
        );
        tracing::info!(count, users = users.len(), "generating event stream");

        let mut events = Vec::with_capacity(count as usize);
        for sequence in 0..count {
            events.push(self.generate_one(sequence, &table, &users));
        }
        Ok(events)
    }

    fn generate_one(
        &mut self,
        sequence: u64,
        table: &[(EventCategory, f32)],
        users: &[UserProfile],
    ) -> Event {
        let timestamp = sample_instant(&mut self.rng, self.range);
        let user = choose(&mut self.rng, users).clone();
        let timestamp = nudge_after_join(&mut self.rng, timestamp, &user, self.range);
        let category = *weighted_random_choice(&mut self.rng, table);

        let status = if category.moves_value() {
            *weighted_random_choice(&mut self.rng, &self.config.status.table())
        } else {
            EventStatus::Completed
        };

        let mut event = Event::new(generate_event_id(sequence + 1), timestamp, user, category, status);

        if category.moves_value() {
            let transaction_id =
                format!("txn_{}", self.rng.gen_range(100_000_000u64..1_000_000_000));
            let blockchain = choose(&mut self.rng, BLOCKCHAINS).to_string();
            // Non-value categories were filtered out above, so the rule
            // table always yields a range here.
            let amount = self
                .config
                .amounts
                .range_for(category, event.user.business_type)
                .map(|range| round_cents(self.rng.gen_range(range.min..=range.max)))
                .unwrap_or(0.0);
            event = event.with_transaction(transaction_id, blockchain, amount);
        }

        event = match category.fixed_product() {
            Some(product) => event.with_product(product),
            None if category == EventCategory::SignupBusiness => {
                event.with_product(*choose(&mut self.rng, SIGNUP_PRODUCTS))
            }
            None if category == EventCategory::FeatureUsed => {
                event.with_product(*choose(&mut self.rng, FEATURE_PRODUCTS))
            }
            None => event,
        };

        event
    }
}

/// Uniform draw over the whole seconds of the generation window.
fn sample_instant<R: Rng>(rng: &mut R, range: TimeRange) -> DateTime<Utc> {
    let span = range.span_seconds();
    if span == 0 {
        return range.start();
    }
    range.start() + Duration::seconds(rng.gen_range(0..=span))
}

/// Moves a timestamp that predates the user's join date to shortly after it.
///
/// Accounts cannot act before they exist. The re-draw lands 1-90 days after
/// the join date, is pulled back near the window end if it overshoots, and
/// is finally clamped into the window so degenerate ranges stay in bounds.
fn nudge_after_join<R: Rng>(
    rng: &mut R,
    timestamp: DateTime<Utc>,
    user: &UserProfile,
    range: TimeRange,
) -> DateTime<Utc> {
    if timestamp >= user.join_date {
        return timestamp;
    }
    let mut nudged = user.join_date + Duration::days(rng.gen_range(1..=90));
    if nudged > range.end() {
        nudged = range.end() - Duration::days(rng.gen_range(1..=5));
    }
    nudged.clamp(range.start(), range.end())
}

/// Perform weighted random selection from a table of candidates.
pub(crate) fn weighted_random_choice<'a, R: Rng, T>(
    rng: &mut R,
    candidates: &'a [(T, f32)],
) -> &'a T {
    // Calculate total weight
    let total_weight: f32 = candidates.iter().map(|(_, w)| *w).sum();

    if total_weight <= 0.0 {
        // Fallback to first candidate if weights are invalid
        return &candidates[0].0;
    }

    // Generate random value in [0, total_weight)
    let mut roll: f32 = rng.gen::<f32>() * total_weight;

    // Find the selected candidate
    for (candidate, weight) in candidates {
        roll -= *weight;
        if roll <= 0.0 {
            return candidate;
        }
    }

    // Fallback to last candidate (shouldn't happen with valid weights)
    &candidates.last().unwrap().0
}

/// Uniform pick from a non-empty slice.
pub(crate) fn choose<'a, R: Rng, T>(rng: &mut R, options: &'a [T]) -> &'a T {
    &options[rng.gen_range(0..options.len())]
}

fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
