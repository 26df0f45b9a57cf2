pub mod types;

pub use types::{ApiResponse, Credentials, RepositoryRequest, TopicsRequest};

use url::Url;

use crate::provisioner::ProvisionError;

/// User agent sent with every API request. GitHub rejects requests that
/// carry none.
const USER_AGENT: &str = concat!("repo-provisioner/", env!("CARGO_PKG_VERSION"));

/// Client for the GitHub REST API, authenticated with the operator's
/// personal access token.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http_client: reqwest::Client,
    api_base: String,
    credentials: Credentials,
}

impl GithubClient {
    /// Create a client that talks to `api_base` with `credentials`.
    pub fn new(api_base: impl Into<String>, credentials: Credentials) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            api_base: api_base.into(),
            credentials,
        }
    }

    /// Create the repository described by `request` under the authenticated
    /// user's account.
    ///
    /// A non-success status or a response body carrying a `message` field
    /// both count as failure; the message content decides the error class.
    pub async fn create_repository(
        &self,
        request: &RepositoryRequest,
    ) -> Result<(), ProvisionError> {
        let endpoint = self.endpoint("user/repos")?;
        log::info!("Creating repository '{}' via {}", request.name, endpoint);

        let response = self
            .http_client
            .post(endpoint)
            .header("Authorization", format!("token {}", self.credentials.token))
            .header("Accept", "application/vnd.github.v3+json")
            .header("User-Agent", USER_AGENT)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        log::debug!("Repository creation response ({}): {}", status, body);

        let parsed: ApiResponse = serde_json::from_str(&body).unwrap_or_default();

        if status.is_success() && parsed.message.is_none() {
            return Ok(());
        }

        let full_name = format!("{}/{}", self.credentials.username, request.name);
        Err(classify_creation_failure(parsed.message, &full_name))
    }

    /// Replace the repository's topics with the given list.
    ///
    /// Uses the `mercy-preview` media type the topics endpoint requires.
    pub async fn replace_topics(
        &self,
        repo_name: &str,
        topics: &TopicsRequest,
    ) -> Result<(), ProvisionError> {
        let path = format!("repos/{}/{}/topics", self.credentials.username, repo_name);
        let endpoint = self.endpoint(&path)?;
        log::info!("Replacing topics via {}", endpoint);

        let response = self
            .http_client
            .put(endpoint)
            .header("Authorization", format!("token {}", self.credentials.token))
            .header("Accept", "application/vnd.github.mercy-preview+json")
            .header("User-Agent", USER_AGENT)
            .json(topics)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            log::debug!("Topic replacement response ({}): {}", status, body);
            let parsed: ApiResponse = serde_json::from_str(&body).unwrap_or_default();
            return Err(ProvisionError::ApiError(
                parsed
                    .message
                    .unwrap_or_else(|| "Unknown error".to_string()),
            ));
        }

        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, ProvisionError> {
        let base = Url::parse(&self.api_base)?;
        Ok(base.join(path)?)
    }
}

/// Map an error `message` from the creation endpoint onto the error
/// taxonomy. An absent or unreadable message becomes a generic API error.
fn classify_creation_failure(message: Option<String>, full_name: &str) -> ProvisionError {
    match message {
        Some(message) if message == "Bad credentials" => ProvisionError::InvalidCredentials,
        Some(message) if message.contains("already exists") => {
            ProvisionError::RepositoryExists(full_name.to_string())
        }
        Some(message) => ProvisionError::ApiError(message),
        None => ProvisionError::ApiError("Unknown error".to_string()),
    }
}
