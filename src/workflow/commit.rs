use tracing::{debug, warn};

use crate::context::AppContext;
use crate::domain::change::ChangeSet;
use crate::domain::commit::CommitMessage;
use crate::error::{AppError, AppResult};
use crate::services::extract_changes;

#[derive(Debug)]
pub enum ClipboardStatus {
    Copied,
    Failed(AppError),
}

pub async fn ensure_repository(ctx: &AppContext) -> AppResult<()> {
    debug!(workspace = %ctx.config.workspace_root.display(), "checking for git repository");
    if ctx.version_control.is_repository().await {
        Ok(())
    } else {
        Err(AppError::NotARepository)
    }
}

pub async fn collect_changes(ctx: &AppContext) -> AppResult<Option<ChangeSet>> {
    let changes = extract_changes(ctx.version_control.as_ref()).await?;
    if changes.is_none() {
        debug!("working tree is clean");
    }
    Ok(changes)
}

pub async fn generate_message(ctx: &AppContext, changes: ChangeSet) -> AppResult<CommitMessage> {
    ctx.language_model.generate_commit_message(&changes).await
}

pub async fn deliver_message(ctx: &AppContext, message: &CommitMessage) -> ClipboardStatus {
    match ctx.clipboard.copy(message.as_str()).await {
        Ok(()) => ClipboardStatus::Copied,
        Err(err) => {
            warn!("clipboard copy failed: {err}");
            ClipboardStatus::Failed(err)
        }
    }
}
