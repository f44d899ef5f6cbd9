pub mod ordered_map;
pub mod range;

pub use ordered_map::{OrderedMap, TableError};
pub use range::RangeCollector;
