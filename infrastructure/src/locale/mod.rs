//! Locale table loading

mod loader;

pub use loader::{LocaleError, LocaleLoader};
