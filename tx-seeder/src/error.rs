use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Server responded with status {status}")]
    ErrorStatus { status: StatusCode },
}
