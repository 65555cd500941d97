pub mod client;
pub mod discover;
pub mod error;
pub mod gateway;
pub mod normalize;
pub(crate) mod retry;
pub mod types;

pub use client::{ClientSettings, TmdbClient};
pub use error::TmdbError;
pub use gateway::ComparisonInput;
pub use normalize::{normalize_person, parse_release_date};
