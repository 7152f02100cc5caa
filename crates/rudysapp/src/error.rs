use thiserror::Error;

#[derive(Error, Debug)]
pub enum RudysError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("The verification code you entered is incorrect")]
    InvalidVerificationCode,

    #[error("No verification in progress; start a sign-in first")]
    NoPendingVerification,

    #[error("You must be logged in as a store owner")]
    NotLoggedIn,

    #[error("Location unavailable: {0}")]
    LocationUnavailable(String),
}

pub type Result<T> = std::result::Result<T, RudysError>;
