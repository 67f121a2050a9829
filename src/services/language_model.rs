use async_trait::async_trait;

use crate::domain::change::ChangeSet;
use crate::domain::commit::CommitMessage;
use crate::error::AppResult;

#[async_trait]
pub trait LanguageModelService: Send + Sync {
    async fn generate_commit_message(&self, changes: &ChangeSet) -> AppResult<CommitMessage>;
}
