pub mod flatten;
pub mod loader;

pub use flatten::{flatten_keys, unflatten_keys, DEFAULT_SEPARATOR};
pub use loader::LocaleLoader;
