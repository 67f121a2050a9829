use std::io::Write;

use crate::context::AppContext;
use crate::error::AppResult;
use crate::workflow::commit::{
    ClipboardStatus, collect_changes, deliver_message, ensure_repository, generate_message,
};

#[derive(Debug, PartialEq, Eq)]
pub enum CommitCommandOutcome {
    NothingToCommit,
    Generated,
}

pub async fn run(ctx: &AppContext, out: &mut impl Write) -> AppResult<CommitCommandOutcome> {
    ensure_repository(ctx).await?;

    let Some(changes) = collect_changes(ctx).await? else {
        writeln!(out, "✨ No changes detected. Nothing to commit!")?;
        return Ok(CommitCommandOutcome::NothingToCommit);
    };

    writeln!(out, "🎲 Generating creative commit message from {}...", changes.source)?;
    out.flush()?;

    let message = generate_message(ctx, changes).await?;
    writeln!(out, "\n{message}\n")?;

    match deliver_message(ctx, &message).await {
        ClipboardStatus::Copied => writeln!(out, "📋 Copied to clipboard!")?,
        ClipboardStatus::Failed(err) => writeln!(out, "📋 Could not copy to clipboard: {err}")?,
    }

    Ok(CommitCommandOutcome::Generated)
}
