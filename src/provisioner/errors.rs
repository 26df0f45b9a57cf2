use thiserror::Error;

/// Failure modes of a provisioning run.
///
/// The `Display` text of each variant is the operator-facing message; the
/// workflow prints it behind a `❌` marker and the binary exits non-zero.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Error: git is required but not installed")]
    ToolMissing,

    #[error("{0} is required!")]
    MissingInput(&'static str),

    #[error("Invalid token! Please check your Personal Access Token.")]
    InvalidCredentials,

    #[error("Repository {0} already exists!")]
    RepositoryExists(String),

    #[error("Error: {0}")]
    ApiError(String),

    #[error("Push failed: {stderr}")]
    PushFailure { branch: String, stderr: String },

    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("URL parsing error: {0}")]
    UrlError(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
