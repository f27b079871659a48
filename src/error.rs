use std::path::PathBuf;

/// Failures surfaced by the resolver and collector.
///
/// A non-success HTTP status is not an error: the client logs it and hands
/// back an empty result list instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("location file not found at {}", .0.display())]
    MissingLocation(PathBuf),

    #[error("request to the search API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid API url: {0}")]
    Url(#[from] url::ParseError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid location JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to render CSV row: {0}")]
    Csv(#[from] csv::Error),

    #[error("no input received")]
    Prompt,
}

pub type Result<T> = std::result::Result<T, Error>;
