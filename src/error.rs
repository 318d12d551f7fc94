use thiserror::Error;
use trellis_render::RenderError;
use trellis_traits::CacheError;

/// Errors surfaced by the engine builder, batch rendering and the CLI.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Configuration is invalid: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("CSS cache error: {0}")]
    Cache(#[from] CacheError),
}
