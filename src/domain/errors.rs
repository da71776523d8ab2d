use std::fmt;

#[derive(Debug, Clone)]
pub enum ServiceError {
    MissingArgument(&'static str),
    InvalidCredentials(String),
    InvalidUrl(String),
    Serialization(String),
    Transport(String),
    Http { status: u16, message: String },
    Decode(String),
    Config(String),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::MissingArgument(name) => write!(f, "Missing required argument: {}", name),
            ServiceError::InvalidCredentials(msg) => write!(f, "Invalid credentials: {}", msg),
            ServiceError::InvalidUrl(msg) => write!(f, "Invalid URL: {}", msg),
            ServiceError::Serialization(msg) => write!(f, "Request serialization failed: {}", msg),
            ServiceError::Transport(msg) => write!(f, "Transport failed: {}", msg),
            ServiceError::Http { status, message } => write!(f, "HTTP {}: {}", status, message),
            ServiceError::Decode(msg) => write!(f, "Response decode failed: {}", msg),
            ServiceError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for ServiceError {}

pub type Result<T> = std::result::Result<T, ServiceError>;
