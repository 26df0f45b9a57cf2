//! Shared git fixtures for integration tests.
//!
//! Builds throwaway repositories inside a temp directory: a project
//! checkout with `main` and `gh-pages` branches, plus a bare repository
//! standing in for the hosted remote.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use tempfile::TempDir;
use tokio::process::Command;

/// Run a git command in `dir` and panic on failure, returning stdout.
pub async fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .env("GIT_TERMINAL_PROMPT", "0")
        .output()
        .await
        .unwrap_or_else(|e| panic!("failed to run git {:?}: {}", args, e));

    assert!(
        output.status.success(),
        "git {:?} failed: {}",
        args,
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub struct GitFixture {
    // Dropping the TempDir deletes both repositories.
    _workspace: TempDir,
    pub project_dir: PathBuf,
    pub remote_dir: PathBuf,
}

impl GitFixture {
    /// Create a project checkout with `main` and `gh-pages` branches and a
    /// bare repository to push into. No remote is configured yet.
    pub async fn new() -> Self {
        let workspace = TempDir::new().unwrap();
        let project_dir = workspace.path().join("project");
        let remote_dir = workspace.path().join("remote.git");
        std::fs::create_dir(&project_dir).unwrap();

        git(&project_dir, &["init"]).await;
        git(&project_dir, &["config", "user.email", "tester@example.com"]).await;
        git(&project_dir, &["config", "user.name", "Tester"]).await;

        std::fs::write(project_dir.join("README.md"), "# Review Insights\n").unwrap();
        git(&project_dir, &["add", "."]).await;
        git(&project_dir, &["commit", "-m", "initial commit"]).await;
        // Normalize the branch name regardless of the init default.
        git(&project_dir, &["branch", "-M", "main"]).await;
        git(&project_dir, &["branch", "gh-pages"]).await;

        git(workspace.path(), &["init", "--bare", "remote.git"]).await;

        Self {
            _workspace: workspace,
            project_dir,
            remote_dir,
        }
    }

    /// Like [`GitFixture::new`] but with `origin` already pointing at the
    /// local bare repository.
    pub async fn with_origin_remote() -> Self {
        let fixture = Self::new().await;
        let url = fixture.remote_url();
        git(&fixture.project_dir, &["remote", "add", "origin", &url]).await;
        fixture
    }

    /// Path-style URL of the bare repository.
    pub fn remote_url(&self) -> String {
        self.remote_dir.display().to_string()
    }

    /// Branch names currently present in the bare repository.
    pub async fn remote_branches(&self) -> Vec<String> {
        let output = git(
            &self.remote_dir,
            &["for-each-ref", "--format=%(refname:short)", "refs/heads"],
        )
        .await;
        output.lines().map(|line| line.trim().to_string()).collect()
    }
}
