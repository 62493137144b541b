use thiserror::Error;

/// Errors raised while building a scene from a body catalogue.
///
/// These are configuration mistakes and abort construction. Runtime lookup
/// misses (unknown focus name, unmapped proxy) are not errors — the engine
/// treats them as no-ops.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("duplicate body name: {0}")]
    DuplicateName(String),

    #[error("negative physical constant on body: {0}")]
    NegativeConstant(String),

    #[error("catalogue manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}
