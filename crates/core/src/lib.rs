//! Core of the videos function.
//!
//! Pure data types and the narrow store capability. Nothing in this crate
//! talks to AWS or installs a logger; the `videos` binary wires those in.

pub mod response;
pub mod storage;
pub mod video;

pub use response::ApiResponse;
pub use video::{Item, ResultSet, VIDEOS_TABLE};
