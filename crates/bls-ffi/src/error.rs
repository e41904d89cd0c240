use crate::encoding::EncodingError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
/// Error type
pub enum Error {
    /// The operation needs at least one element
    #[error("{operation}: empty input")]
    EmptyInput { operation: &'static str },
    /// The engine returned a null response
    #[error("{operation}: rejected by the engine")]
    EngineRejected { operation: &'static str },
    /// A flattened buffer could not be split into records
    #[error(transparent)]
    Encoding(#[from] EncodingError),
}
