pub mod loader;

pub use loader::{ZoneLoadError, ZoneLoader};
