//! Store implementations used by the function.
//!
//! The capability itself, [`videos_core::storage::VideoStore`], lives in the
//! core crate together with the in-memory test double.

pub mod dynamodb;
mod misconfigured;

pub use dynamodb::DynamoDbVideoStore;
pub use misconfigured::MisconfiguredStore;
