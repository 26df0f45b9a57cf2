pub mod git;
pub mod github_client;
pub mod provisioner;

pub use git::{GitCli, GitOutput};
pub use github_client::{Credentials, GithubClient, RepositoryRequest, TopicsRequest};
pub use provisioner::{ProvisionError, Provisioner, ProvisionerConfig};
