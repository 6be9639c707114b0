use serde_json::{Map, Value};

/// Name of the table the function reads from.
pub const VIDEOS_TABLE: &str = "videos";

/// One record from the videos table.
///
/// The schema belongs to whoever writes the table. It is carried through
/// untouched: no validation, no renaming, no filtering.
pub type Item = Map<String, Value>;

/// Items returned by a single scan, in the order the store yielded them.
pub type ResultSet = Vec<Item>;
