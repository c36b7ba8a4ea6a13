pub mod checksum;
pub mod chunked;
pub mod errors;
pub mod math;

// Re-export error types for public API
pub use errors::{ConfigError, CrockfordError};
