use async_trait::async_trait;
use tracing::debug;

use crate::domain::change::{ChangeSet, ChangeSource};
use crate::error::AppResult;

#[async_trait]
pub trait VersionControlService: Send + Sync {
    async fn is_repository(&self) -> bool;
    async fn staged_diff(&self) -> AppResult<String>;
    async fn unstaged_diff(&self) -> AppResult<String>;
    async fn untracked_files(&self) -> AppResult<Vec<String>>;
}

/// Extraction tiers, tried in order until one yields content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionStrategy {
    Staged,
    Unstaged,
    Untracked,
}

impl ExtractionStrategy {
    pub const ORDERED: [ExtractionStrategy; 3] = [
        ExtractionStrategy::Staged,
        ExtractionStrategy::Unstaged,
        ExtractionStrategy::Untracked,
    ];

    pub async fn extract(
        self,
        version_control: &dyn VersionControlService,
    ) -> AppResult<Option<ChangeSet>> {
        let changes = match self {
            ExtractionStrategy::Staged => {
                let diff = version_control.staged_diff().await?;
                ChangeSet::from_diff(ChangeSource::Staged, &diff)
            }
            ExtractionStrategy::Unstaged => {
                let diff = version_control.unstaged_diff().await?;
                ChangeSet::from_diff(ChangeSource::Unstaged, &diff)
            }
            ExtractionStrategy::Untracked => {
                let files = version_control.untracked_files().await?;
                ChangeSet::from_untracked(files)
            }
        };
        Ok(changes)
    }
}

/// Returns the first non-empty change set, or `None` when the tree is clean.
pub async fn extract_changes(
    version_control: &dyn VersionControlService,
) -> AppResult<Option<ChangeSet>> {
    for strategy in ExtractionStrategy::ORDERED {
        if let Some(changes) = strategy.extract(version_control).await? {
            debug!(?strategy, bytes = changes.text.len(), "extracted changes");
            return Ok(Some(changes));
        }
    }
    Ok(None)
}

#[cfg(test)]
pub(crate) mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::error::AppError;

    #[derive(Default)]
    pub(crate) struct FakeVersionControl {
        pub repository: bool,
        pub staged: String,
        pub unstaged: String,
        pub untracked: Vec<String>,
        pub fail_unstaged: bool,
        pub calls: AtomicUsize,
    }

    impl FakeVersionControl {
        pub(crate) fn repository() -> Self {
            Self {
                repository: true,
                ..Self::default()
            }
        }
    }

    #[async_trait]
    impl VersionControlService for FakeVersionControl {
        async fn is_repository(&self) -> bool {
            self.repository
        }

        async fn staged_diff(&self) -> AppResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.staged.clone())
        }

        async fn unstaged_diff(&self) -> AppResult<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_unstaged {
                return Err(AppError::VersionControl("git diff failed".to_string()));
            }
            Ok(self.unstaged.clone())
        }

        async fn untracked_files(&self) -> AppResult<Vec<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.untracked.clone())
        }
    }

    #[tokio::test]
    async fn clean_tree_yields_nothing() {
        let vcs = FakeVersionControl::repository();
        assert_eq!(extract_changes(&vcs).await.unwrap(), None);
        assert_eq!(vcs.calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn staged_wins_over_everything() {
        let vcs = FakeVersionControl {
            staged: "staged diff\n".to_string(),
            unstaged: "unstaged diff".to_string(),
            untracked: vec!["new.rs".to_string()],
            ..FakeVersionControl::repository()
        };

        let changes = extract_changes(&vcs).await.unwrap().unwrap();
        assert_eq!(changes.source, ChangeSource::Staged);
        assert_eq!(changes.text, "staged diff");
        assert_eq!(vcs.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn unstaged_wins_over_untracked() {
        let vcs = FakeVersionControl {
            staged: "   ".to_string(),
            unstaged: "unstaged diff".to_string(),
            untracked: vec!["new.rs".to_string()],
            ..FakeVersionControl::repository()
        };

        let changes = extract_changes(&vcs).await.unwrap().unwrap();
        assert_eq!(changes.source, ChangeSource::Unstaged);
        assert_eq!(changes.text, "unstaged diff");
    }

    #[tokio::test]
    async fn untracked_files_are_listed() {
        let vcs = FakeVersionControl {
            untracked: vec!["a.txt".to_string(), "b.txt".to_string()],
            ..FakeVersionControl::repository()
        };

        let changes = extract_changes(&vcs).await.unwrap().unwrap();
        assert_eq!(changes.source, ChangeSource::Untracked);
        assert_eq!(changes.text, "New untracked files:\n+ a.txt\n+ b.txt\n");
    }

    #[tokio::test]
    async fn command_failure_aborts_extraction() {
        let vcs = FakeVersionControl {
            fail_unstaged: true,
            untracked: vec!["a.txt".to_string()],
            ..FakeVersionControl::repository()
        };

        let error = extract_changes(&vcs).await.unwrap_err();
        assert!(matches!(error, AppError::VersionControl(_)));
        assert_eq!(vcs.calls.load(Ordering::SeqCst), 2);
    }
}
