use std::{
    borrow::Cow,
    path::{Path, PathBuf},
};

use crate::{Result, TagMeldError};

/// Output of one external tool run, captured by the caller before the engine
/// sees it. The engine never runs tools itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCapture {
    /// Name of the tool, used in error messages.
    pub tool: String,
    /// File the tool was pointed at.
    pub path: PathBuf,
    /// Exit status; `None` when the process died from a signal.
    pub status: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ToolCapture {
    /// A run that exited with status zero.
    pub fn success(
        tool: impl Into<String>,
        path: impl AsRef<Path>,
        stdout: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            tool: tool.into(),
            path: path.as_ref().to_path_buf(),
            status: Some(0),
            stdout: stdout.into(),
            stderr: Vec::new(),
        }
    }

    /// A run that failed with the given status and diagnostic output.
    pub fn failure(
        tool: impl Into<String>,
        path: impl AsRef<Path>,
        status: Option<i32>,
        stderr: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            tool: tool.into(),
            path: path.as_ref().to_path_buf(),
            status,
            stdout: Vec::new(),
            stderr: stderr.into(),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.status == Some(0)
    }

    /// Returns stdout as text, or [`TagMeldError::ToolFailed`] carrying the
    /// captured stderr when the run did not succeed. Invalid UTF-8 is
    /// replaced rather than rejected.
    pub fn stdout_checked(&self) -> Result<Cow<'_, str>> {
        if !self.succeeded() {
            return Err(TagMeldError::ToolFailed {
                tool: self.tool.clone(),
                path: self.path.clone(),
                status: self.status,
                stderr: String::from_utf8_lossy(&self.stderr).into_owned(),
            });
        }

        Ok(String::from_utf8_lossy(&self.stdout))
    }
}
