pub mod loader;
pub mod record;
pub mod search;

pub use record::{EntityKind, SearchRecord};
pub use search::{QueryResult, SearchIndex, SearchOptions};
