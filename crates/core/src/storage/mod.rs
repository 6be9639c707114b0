mod error;
mod inmemory;
mod traits;

pub use error::{Result, StoreError};
pub use inmemory::InMemoryVideoStore;
pub use traits::VideoStore;
