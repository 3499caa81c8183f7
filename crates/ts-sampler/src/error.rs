use thiserror::Error;
use ts_tensor::TensorError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SamplerError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl SamplerError {
    pub(crate) fn invalid_argument(msg: impl Into<String>) -> Self {
        SamplerError::InvalidArgument(msg.into())
    }

    pub(crate) fn internal(msg: impl Into<String>) -> Self {
        SamplerError::Internal(msg.into())
    }
}

impl From<TensorError> for SamplerError {
    fn from(e: TensorError) -> Self {
        SamplerError::InvalidArgument(format!("logits tensor: {e}"))
    }
}

pub type Result<T> = std::result::Result<T, SamplerError>;
