//! Domain ports for the hexagonal boundary.
//!
//! Inbound adapters depend on these traits; outbound adapters implement them.

mod macros;
pub(crate) use macros::define_port_error;

mod user_directory;

pub use user_directory::{UserDirectory, UserDirectoryError};
