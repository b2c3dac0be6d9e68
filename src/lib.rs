pub use error::UtilError;

/// Memory layer (aligned allocation for SIMD-friendly buffers)
pub mod alloc;

/// Support modules (used across the pipeline)
pub mod error; // Error handling
pub mod fmt; // Runtime printf-style formatting
pub mod fs; // Filesystem queries and path handling
pub mod parse; // String-to-value parsing
pub mod settings; // TOML-backed key/value settings
pub mod text; // Case-insensitive comparison and splitting
pub mod time; // Wall-clock and CPU-clock timing
pub mod trace; // Stack backtrace capture

pub type Result<T> = std::result::Result<T, UtilError>;
