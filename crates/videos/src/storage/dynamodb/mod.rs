//! DynamoDB storage backend implementation.
//!
//! Reads the videos table with `aws-sdk-dynamodb` and decodes the typed
//! attribute values into plain JSON items.

mod conversions;
mod error;
mod store;

pub use store::DynamoDbVideoStore;
