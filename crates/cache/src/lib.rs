//! CSS cache implementations for native hosts.
//!
//! ## Available Caches
//!
//! - [`FilesystemCssCache`]: one `.css` file per page in a cache directory
//!
//! The in-memory cache from trellis-traits is re-exported for convenience:
//! - [`InMemoryCssCache`]

mod filesystem;

pub use filesystem::FilesystemCssCache;

pub use trellis_traits::InMemoryCssCache;
