use serde::{Deserialize, Serialize};

use crate::provisioner::ProvisionerConfig;

/// Operator credentials collected at the start of the run.
///
/// Held in memory for the lifetime of the process and never persisted.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub token: String,
}

/// Payload for the repository creation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RepositoryRequest {
    pub name: String,
    pub description: String,
    pub homepage: String,
    pub private: bool,
    pub has_issues: bool,
    pub has_projects: bool,
    pub has_wiki: bool,
    pub auto_init: bool,
}

impl RepositoryRequest {
    /// Build the creation payload for `username` from the run configuration.
    ///
    /// The homepage points at the GitHub Pages site served from the
    /// secondary branch once the operator enables it.
    pub fn for_user(username: &str, config: &ProvisionerConfig) -> Self {
        Self {
            name: config.repo_name.clone(),
            description: config.repo_description.clone(),
            homepage: format!("https://{}.github.io/{}/", username, config.repo_name),
            private: false,
            has_issues: true,
            has_projects: true,
            has_wiki: false,
            auto_init: false,
        }
    }
}

/// Payload for the topic replacement endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TopicsRequest {
    pub names: Vec<String>,
}

/// Reply from the API, inspected only for the error-indicating `message`
/// field. Success bodies carry no `message` and deserialize to the default.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiResponse {
    pub message: Option<String>,
}
