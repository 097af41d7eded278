use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown user type: {0}")]
    UnknownUserType(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
