//! Operations Stream Synthesizer Library
//!
//! A one-shot batch pipeline that fabricates a weighted, timestamped stream
//! of synthetic business-operations events, derives a running token-supply
//! aggregate over the timestamp-ordered stream, and renders the result as a
//! delimited-text table.
//!
//! Pipeline: generate -> sort -> aggregate -> emit.

pub mod aggregate;
pub mod config;
pub mod generate;
pub mod output;
pub mod setup;

pub use aggregate::{compute_running_supply, sort_by_time};
pub use config::{Config, ConfigError, DEFAULT_CONFIG_PATH};
pub use generate::{Generator, GenerateError};
pub use output::{render_table, write_table};
