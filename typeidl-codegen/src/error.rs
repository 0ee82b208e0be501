//! Error types for schema emission.

use thiserror::Error;

/// Error type for emitter operations.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The output sink rejected a write.
    #[error("sink write failure: {0}")]
    Sink(#[from] std::io::Error),
}

/// Error type for the end-to-end generation helpers.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Source text could not be read or parsed.
    #[error("source parse error: {0}")]
    Parse(#[from] typeidl_schema::ParseError),

    /// The type graph could not be built.
    #[error("build error: {0}")]
    Build(#[from] typeidl_schema::BuildError),

    /// The schema could not be written.
    #[error("emit error: {0}")]
    Emit(#[from] EmitError),
}
