//! Thin async wrappers around the system `git` binary.
//!
//! Every call shells out through [`tokio::process::Command`] and captures
//! both output streams. Callers decide whether a non-zero exit is fatal.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::process::Command;

/// Captured result of a single git invocation.
#[derive(Debug, Clone)]
pub struct GitOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

/// Runner for git commands, optionally pinned to a working directory.
#[derive(Debug, Clone, Default)]
pub struct GitCli {
    working_dir: Option<PathBuf>,
}

impl GitCli {
    /// Create a runner that executes git in the process working directory.
    pub fn new() -> Self {
        Self { working_dir: None }
    }

    /// Create a runner that executes every command inside `dir`.
    pub fn with_working_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            working_dir: Some(dir.into()),
        }
    }

    /// Probe for a usable git binary by running `git --version`.
    pub async fn version(&self) -> Result<String> {
        let output = self.run(&["--version"]).await?;
        if !output.success {
            anyhow::bail!("git --version failed: {}", output.stderr.trim());
        }
        Ok(output.stdout.trim().to_string())
    }

    /// Run `git remote add <name> <url>`.
    pub async fn remote_add(&self, name: &str, url: &str) -> Result<GitOutput> {
        self.run(&["remote", "add", name, url]).await
    }

    /// Run `git push -u <remote> <branch>`, setting up upstream tracking.
    pub async fn push_upstream(&self, remote: &str, branch: &str) -> Result<GitOutput> {
        self.run(&["push", "-u", remote, branch]).await
    }

    /// Run `git push <remote> <branch>`.
    pub async fn push(&self, remote: &str, branch: &str) -> Result<GitOutput> {
        self.run(&["push", remote, branch]).await
    }

    async fn run(&self, args: &[&str]) -> Result<GitOutput> {
        let mut cmd = Command::new("git");
        cmd.args(args);

        if let Some(dir) = &self.working_dir {
            cmd.current_dir(dir);
        }

        // Never let git stop and ask for credentials interactively.
        cmd.env("GIT_TERMINAL_PROMPT", "0");
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        log::debug!("Running git {:?}", args);

        let output = cmd
            .output()
            .await
            .with_context(|| format!("Failed to execute git {:?}", args))?;

        let result = GitOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        if !result.success {
            log::debug!("git {:?} exited non-zero: {}", args, result.stderr.trim());
        }

        Ok(result)
    }
}
