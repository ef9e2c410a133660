use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid id parameter")]
    InvalidIdParameter,

    #[error("the requested resource could not be found")]
    NotFound,

    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] envy::Error),
}

impl Error {
    pub fn status_code(&self) -> u16 {
        match self {
            // An identifier that fails validation can never name a resource
            Error::InvalidIdParameter | Error::NotFound => 404,
            Error::Serialization(_) | Error::Config(_) => 500,
        }
    }

    /// Whether the message is safe to show to the client as-is
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}
