pub mod lenient;
pub mod lookup;
pub mod models;
pub mod snapshot;

pub use lookup::{Lookup, UNKNOWN};
pub use models::*;
pub use snapshot::Snapshot;
