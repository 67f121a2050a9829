use std::env::consts::OS;
use std::io::ErrorKind;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

use crate::error::{AppError, AppResult};
use crate::services::ClipboardService;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClipboardTool {
    pub program: &'static str,
    pub args: &'static [&'static str],
}

const PBCOPY: ClipboardTool = ClipboardTool {
    program: "pbcopy",
    args: &[],
};

const XCLIP: ClipboardTool = ClipboardTool {
    program: "xclip",
    args: &["-selection", "clipboard"],
};

const XSEL: ClipboardTool = ClipboardTool {
    program: "xsel",
    args: &["--clipboard", "--input"],
};

const WL_COPY: ClipboardTool = ClipboardTool {
    program: "wl-copy",
    args: &[],
};

const WINDOWS_CLIP: ClipboardTool = ClipboardTool {
    program: "cmd",
    args: &["/c", "clip"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardCandidates {
    /// Always use this tool.
    Fixed(ClipboardTool),
    /// Use the first tool found on `PATH`.
    Search(&'static [ClipboardTool]),
}

impl ClipboardCandidates {
    pub fn for_os(os: &str) -> Option<Self> {
        match os {
            "macos" => Some(Self::Fixed(PBCOPY)),
            "linux" => Some(Self::Search(&[XCLIP, XSEL, WL_COPY])),
            "windows" => Some(Self::Fixed(WINDOWS_CLIP)),
            _ => None,
        }
    }

    pub fn select(self, is_available: impl Fn(&str) -> bool) -> Option<ClipboardTool> {
        match self {
            Self::Fixed(tool) => Some(tool),
            Self::Search(tools) => tools
                .iter()
                .copied()
                .find(|tool| is_available(tool.program)),
        }
    }
}

pub struct SystemClipboard {
    os: &'static str,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self { os: OS }
    }

    fn select_tool(&self) -> AppResult<ClipboardTool> {
        let candidates = ClipboardCandidates::for_os(self.os)
            .ok_or_else(|| AppError::Clipboard(format!("unsupported OS: {}", self.os)))?;
        candidates
            .select(|program| which::which(program).is_ok())
            .ok_or_else(|| AppError::Clipboard("no clipboard utility found".to_string()))
    }
}

#[async_trait]
impl ClipboardService for SystemClipboard {
    async fn copy(&self, text: &str) -> AppResult<()> {
        let tool = self.select_tool()?;
        debug!(program = tool.program, "copying to clipboard");
        pipe_to(tool, text).await
    }
}

async fn pipe_to(tool: ClipboardTool, text: &str) -> AppResult<()> {
    let mut child = Command::new(tool.program)
        .args(tool.args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|err| AppError::Clipboard(format!("failed to run {}: {err}", tool.program)))?;

    // A tool that exits without draining stdin is judged by its exit status.
    if let Some(mut stdin) = child.stdin.take() {
        match stdin.write_all(text.as_bytes()).await {
            Ok(()) => {}
            Err(err) if err.kind() == ErrorKind::BrokenPipe => {}
            Err(err) => {
                return Err(AppError::Clipboard(format!(
                    "failed to write to {}: {err}",
                    tool.program
                )));
            }
        }
    }

    let status = child
        .wait()
        .await
        .map_err(|err| AppError::Clipboard(format!("failed to wait for {}: {err}", tool.program)))?;
    if !status.success() {
        return Err(AppError::Clipboard(format!(
            "{} exited with {status}",
            tool.program
        )));
    }
    Ok(())
}
