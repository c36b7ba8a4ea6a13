pub mod algorithms;
pub mod normalize;

// Re-export commonly used items
pub use algorithms::{checksum, chunked, math};
