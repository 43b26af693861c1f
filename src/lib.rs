pub mod error;
pub mod stats;
pub mod types;

pub use error::StatsError;
pub use stats::{average, stdev, variance};
pub use types::{Summary, Value};
