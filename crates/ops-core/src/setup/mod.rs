//! Run Setup
//!
//! Fabrication of the per-run context the generator draws from.

pub mod users;

pub use users::create_user_pool;
