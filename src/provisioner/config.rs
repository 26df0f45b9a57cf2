use std::path::PathBuf;

/// Fixed parameters of a provisioning run.
///
/// The defaults carry the Review Insights launch values. Tests swap in
/// temporary directories and a mock API endpoint.
#[derive(Debug, Clone)]
pub struct ProvisionerConfig {
    /// Local checkout the branches are pushed from.
    pub project_dir: PathBuf,
    /// Name of the repository to create.
    pub repo_name: String,
    /// Description sent with the creation request.
    pub repo_description: String,
    /// Branch pushed with upstream tracking.
    pub default_branch: String,
    /// Branch serving the static site.
    pub pages_branch: String,
    /// Name of the git remote added to the checkout.
    pub remote_name: String,
    /// Topic tags applied after a successful push.
    pub topics: Vec<String>,
    /// Base URL of the hosting provider's REST API.
    pub api_base: String,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            project_dir: PathBuf::from("/home/david/review-analysis-saas"),
            repo_name: "review-insights-platform".to_string(),
            repo_description: "AI-powered review management platform with zero-config setup"
                .to_string(),
            default_branch: "main".to_string(),
            pages_branch: "gh-pages".to_string(),
            remote_name: "origin".to_string(),
            topics: vec![
                "ai".to_string(),
                "review-management".to_string(),
                "saas".to_string(),
                "typescript".to_string(),
                "nextjs".to_string(),
                "sentiment-analysis".to_string(),
                "zero-config".to_string(),
            ],
            api_base: "https://api.github.com".to_string(),
        }
    }
}
