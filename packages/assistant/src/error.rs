use thiserror::Error;

/// Why a generation attempt produced no block
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Prompt is empty")]
    EmptyPrompt,

    #[error("Malformed generator response: {0}")]
    MalformedResponse(String),

    #[error("Generator chose unknown block type '{0}'")]
    UnknownBlockType(String),

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Generator returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
}

pub type GenerateResult<T> = Result<T, GenerateError>;
