use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("envy error: {0}")]
    EnvyError(#[from] envy::Error),

    #[error("Error during HTTP request: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("Discord returned {0}: {1}")]
    ResponseError(StatusCode, String),

    #[error("Failed to download sticker content ({0}): {1}")]
    DownloadError(StatusCode, String),
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}
