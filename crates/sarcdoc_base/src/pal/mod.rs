//! Platform abstraction layer.
//!
//! All interactions with the outside world (reading the configuration file,
//! serving HTTP) go through the `Pal` trait, so that everything above it can
//! be tested against the in-memory `MockPal`.

mod file_path;
pub mod http;
pub mod mock;
pub mod real_pal;
mod traits;

pub use file_path::FilePath;
pub use mock::MockPal;
pub use real_pal::RealPal;
pub use traits::{Pal, PalHandle};
