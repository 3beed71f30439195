//! Foundation crate for sarcdoc: error handling, tracing setup, and the
//! platform abstraction layer shared by all other crates.

pub mod error;
pub mod pal;
pub mod tracing;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, ResultExt, SarcdocError, SarcdocResult};
pub use pal::{FilePath, MockPal, Pal, PalHandle, RealPal};
