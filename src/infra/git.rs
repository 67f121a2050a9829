use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::VersionControlService;

pub struct GitCli {
    workspace_root: PathBuf,
}

impl GitCli {
    pub fn new(workspace_root: PathBuf) -> Self {
        Self { workspace_root }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut command = Command::new("git");
        command
            .args(args)
            .current_dir(&self.workspace_root)
            .stdin(Stdio::null());
        command
    }

    async fn output(&self, args: &[&str]) -> AppResult<String> {
        debug!(?args, "running git");
        let output = self.command(args).output().await.map_err(|err| {
            AppError::VersionControl(format!("failed to run git {}: {err}", args.join(" ")))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::VersionControl(format!(
                "git {} exited with {}: {}",
                args.join(" "),
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl VersionControlService for GitCli {
    async fn is_repository(&self) -> bool {
        match self
            .command(&["rev-parse", "--git-dir"])
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
        {
            Ok(status) => status.success(),
            Err(err) => {
                debug!("failed to run git rev-parse: {err}");
                false
            }
        }
    }

    async fn staged_diff(&self) -> AppResult<String> {
        self.output(&["diff", "--cached"]).await
    }

    async fn unstaged_diff(&self) -> AppResult<String> {
        self.output(&["diff"]).await
    }

    async fn untracked_files(&self) -> AppResult<Vec<String>> {
        let listing = self
            .output(&["ls-files", "--others", "--exclude-standard"])
            .await?;
        Ok(listing
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}
