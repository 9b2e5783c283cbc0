//! Process-local adapters that keep state in memory for the process lifetime.

mod user_directory;

pub use user_directory::{InMemoryUserDirectory, SEED_USERS};
