//! Configuration System
//!
//! Loads generation parameters from generator.toml for easy adjustment
//! without recompiling. Defaults reproduce the stock operations dataset:
//! ~2 years of activity weighted toward payments and transfers, with a
//! 40B starting supply.

use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

use ops_events::{BusinessType, EventCategory, EventStatus, TimeRange, TimeRangeError};

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "generator.toml";

/// Top-level configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub run: RunConfig,
    pub time_range: TimeRangeConfig,
    pub weights: CategoryWeights,
    pub amounts: AmountConfig,
    pub status: StatusWeights,
}

/// Run-level parameters
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Number of events to generate
    pub count: u64,
    /// Supply before the first event is applied
    pub initial_supply: f64,
    /// Average events per fabricated user; sizes the user pool
    pub events_per_user: u64,
}

/// Generation window, as `YYYY-MM-DD` bounds
#[derive(Debug, Clone, Deserialize)]
pub struct TimeRangeConfig {
    pub start_date: String,
    pub end_date: String,
}

/// Relative likelihood of each event category.
///
/// Weights need not sum to 1; they are normalized by the draw itself.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryWeights {
    pub payment_processed: f32,
    pub transfer_out: f32,
    pub transfer_in: f32,
    pub mint: f32,
    pub burn: f32,
    pub api_call_payments: f32,
    pub api_call_accounts: f32,
    pub signup_business: f32,
    pub feature_used: f32,
    pub account_deposit: f32,
    pub account_withdrawal: f32,
    pub cross_chain_initiated: f32,
    pub cross_chain_completed: f32,
}

impl CategoryWeights {
    /// The weight configured for a single category.
    pub fn weight_for(&self, category: EventCategory) -> f32 {
        match category {
            EventCategory::PaymentProcessed => self.payment_processed,
            EventCategory::TransferOut => self.transfer_out,
            EventCategory::TransferIn => self.transfer_in,
            EventCategory::Mint => self.mint,
            EventCategory::Burn => self.burn,
            EventCategory::ApiCallPayments => self.api_call_payments,
            EventCategory::ApiCallAccounts => self.api_call_accounts,
            EventCategory::SignupBusiness => self.signup_business,
            EventCategory::FeatureUsed => self.feature_used,
            EventCategory::AccountDeposit => self.account_deposit,
            EventCategory::AccountWithdrawal => self.account_withdrawal,
            EventCategory::CrossChainInitiated => self.cross_chain_initiated,
            EventCategory::CrossChainCompleted => self.cross_chain_completed,
        }
    }

    /// The full weight table in canonical category order.
    pub fn table(&self) -> Vec<(EventCategory, f32)> {
        EventCategory::all()
            .iter()
            .map(|&category| (category, self.weight_for(category)))
            .collect()
    }
}

/// A half-open amount range in whole currency units.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct AmountRange {
    pub min: f64,
    pub max: f64,
}

/// Amount ranges per generation rule.
///
/// Issuance categories have their own ranges; other value movements pick a
/// range by the account's business type.
#[derive(Debug, Clone, Deserialize)]
pub struct AmountConfig {
    pub mint: AmountRange,
    pub burn: AmountRange,
    pub institutional: AmountRange,
    pub ecommerce: AmountRange,
    pub standard: AmountRange,
}

impl AmountConfig {
    /// The range to draw an amount from, or None for non-value categories.
    pub fn range_for(&self, category: EventCategory, business: BusinessType) -> Option<AmountRange> {
        if !category.moves_value() {
            return None;
        }
        let range = match category {
            EventCategory::Mint => self.mint,
            EventCategory::Burn => self.burn,
            _ if business.is_institutional() => self.institutional,
            _ if business == BusinessType::Ecommerce => self.ecommerce,
            _ => self.standard,
        };
        Some(range)
    }

    fn ranges(&self) -> [(&'static str, AmountRange); 5] {
        [
            ("mint", self.mint),
            ("burn", self.burn),
            ("institutional", self.institutional),
            ("ecommerce", self.ecommerce),
            ("standard", self.standard),
        ]
    }
}

/// Status distribution for transactional events, weighted toward Completed.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusWeights {
    pub completed: f32,
    pub pending: f32,
    pub failed: f32,
    pub reversed: f32,
}

impl StatusWeights {
    pub fn table(&self) -> [(EventStatus, f32); 4] {
        [
            (EventStatus::Completed, self.completed),
            (EventStatus::Pending, self.pending),
            (EventStatus::Failed, self.failed),
            (EventStatus::Reversed, self.reversed),
        ]
    }
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from default path, or use defaults if not found
    pub fn load_or_default() -> Self {
        Self::load(DEFAULT_CONFIG_PATH).unwrap_or_else(|e| {
            eprintln!("Warning: Could not load {}: {}. Using defaults.", DEFAULT_CONFIG_PATH, e);
            Self::default()
        })
    }

    /// Checks invariants the deserializer cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (category, weight) in self.weights.table() {
            if weight < 0.0 {
                return Err(ConfigError::NegativeWeight {
                    name: category.as_str().to_string(),
                    weight,
                });
            }
        }
        for (status, weight) in self.status.table() {
            if weight < 0.0 {
                return Err(ConfigError::NegativeWeight {
                    name: status.as_str().to_string(),
                    weight,
                });
            }
        }
        for (name, range) in self.amounts.ranges() {
            if range.min < 0.0 || range.min > range.max {
                return Err(ConfigError::InvalidAmountRange {
                    name: name.to_string(),
                    min: range.min,
                    max: range.max,
                });
            }
        }
        if self.run.events_per_user == 0 {
            return Err(ConfigError::ZeroEventsPerUser);
        }
        Ok(())
    }

    /// The validated generation window.
    pub fn time_range(&self) -> Result<TimeRange, ConfigError> {
        Ok(TimeRange::parse(
            &self.time_range.start_date,
            &self.time_range.end_date,
        )?)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            run: RunConfig {
                count: 75_000,
                initial_supply: 40_000_000_000.0,
                events_per_user: 50,
            },
            time_range: TimeRangeConfig {
                start_date: "2023-01-01".to_string(),
                end_date: "2024-12-31".to_string(),
            },
            weights: CategoryWeights {
                payment_processed: 0.20,
                transfer_out: 0.15,
                transfer_in: 0.15,
                mint: 0.05,
                burn: 0.03,
                api_call_payments: 0.10,
                api_call_accounts: 0.10,
                signup_business: 0.05,
                feature_used: 0.07,
                account_deposit: 0.03,
                account_withdrawal: 0.03,
                cross_chain_initiated: 0.02,
                cross_chain_completed: 0.02,
            },
            amounts: AmountConfig {
                mint: AmountRange {
                    min: 50_000.0,
                    max: 5_000_000.0,
                },
                burn: AmountRange {
                    min: 10_000.0,
                    max: 2_000_000.0,
                },
                institutional: AmountRange {
                    min: 10_000.0,
                    max: 10_000_000.0,
                },
                ecommerce: AmountRange {
                    min: 50.0,
                    max: 5_000.0,
                },
                standard: AmountRange {
                    min: 100.0,
                    max: 100_000.0,
                },
            },
            status: StatusWeights {
                completed: 0.90,
                pending: 0.05,
                failed: 0.04,
                reversed: 0.01,
            },
        }
    }
}

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("negative weight for '{name}': {weight}")]
    NegativeWeight { name: String, weight: f32 },
    #[error("invalid amount range '{name}': min {min}, max {max}")]
    InvalidAmountRange { name: String, min: f64, max: f64 },
    #[error("events_per_user must be positive")]
    ZeroEventsPerUser,
    #[error(transparent)]
    TimeRange(#[from] TimeRangeError),
}
