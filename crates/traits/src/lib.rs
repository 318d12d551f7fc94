pub mod cache;

pub use cache::{CacheError, CssCache, InMemoryCssCache};
