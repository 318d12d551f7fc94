use thiserror::Error;
use trellis_traits::CacheError;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("CSS cache error: {0}")]
    Cache(#[from] CacheError),
    #[error("Document error: {0}")]
    Document(#[from] serde_json::Error),
}
