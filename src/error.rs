pub type FfgraphResult<T> = Result<T, FfgraphError>;

#[derive(thiserror::Error, Debug)]
pub enum FfgraphError {
    /// A filter or argument key name failed identifier validation.
    #[error("invalid name: {0}")]
    InvalidName(String),

    /// An operation received inputs matching none of its accepted shapes.
    #[error("validation error: {0}")]
    Validation(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FfgraphError {
    pub fn invalid_name(msg: impl Into<String>) -> Self {
        Self::InvalidName(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
