use std::{fmt, path::PathBuf};

/// Result alias that carries the custom [`TagMeldError`] type.
pub type Result<T> = std::result::Result<T, TagMeldError>;

/// Native tag containers the engine declares as unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NativeFormat {
    Id3v2,
    OggVorbis,
    Opus,
}

impl fmt::Display for NativeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NativeFormat::Id3v2 => "MP3/ID3v2 parsing not yet supported",
            NativeFormat::OggVorbis => "OGG Vorbis parsing not yet supported",
            NativeFormat::Opus => "opus parsing not yet supported",
        };
        f.write_str(label)
    }
}

/// Common error type for the core crate.
#[derive(Debug, thiserror::Error)]
pub enum TagMeldError {
    /// The external tool that produced the dump exited unsuccessfully. The
    /// captured diagnostic stream is kept verbatim.
    #[error("{tool} failed on {} (status {}):\nstderr: {stderr}", .path.display(), display_status(.status))]
    ToolFailed {
        tool: String,
        path: PathBuf,
        status: Option<i32>,
        stderr: String,
    },
    /// The probe report contains no stream whose codec type is `audio`.
    #[error("no audio stream found")]
    NoAudioStream,
    /// A declared capability gap; never a best-effort attempt.
    #[error("{format}: {}", .path.display())]
    Unsupported { format: NativeFormat, path: PathBuf },
    /// The probe document could not be decoded.
    #[error("probe JSON parse: {0}")]
    ProbeJson(#[from] serde_json::Error),
    /// Configuration rejected by validation.
    #[error("invalid configuration: {0}")]
    Config(String),
    /// Free-form message for the application layer.
    #[error("{0}")]
    Message(String),
    /// Wrapper around standard IO errors.
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl TagMeldError {
    /// Creates a new error that simply wraps the provided message.
    pub fn msg<T: Into<String>>(msg: T) -> Self {
        Self::Message(msg.into())
    }
}

impl From<&str> for TagMeldError {
    fn from(value: &str) -> Self {
        Self::msg(value)
    }
}

fn display_status(status: &Option<i32>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "terminated by signal".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_failure_carries_stderr() {
        let err = TagMeldError::ToolFailed {
            tool: "AtomicParsley".to_string(),
            path: PathBuf::from("/music/a.m4a"),
            status: Some(1),
            stderr: "AP error: bad atom".to_string(),
        };

        let text = err.to_string();
        assert!(text.contains("AtomicParsley"));
        assert!(text.contains("/music/a.m4a"));
        assert!(text.contains("status 1"));
        assert!(text.contains("AP error: bad atom"));
    }

    #[test]
    fn unsupported_names_format_and_path() {
        let err = TagMeldError::Unsupported {
            format: NativeFormat::Opus,
            path: PathBuf::from("song.opus"),
        };

        assert_eq!(err.to_string(), "opus parsing not yet supported: song.opus");
    }

    #[test]
    fn strings_convert_into_messages() {
        let err: TagMeldError = "boom".into();
        assert!(matches!(err, TagMeldError::Message(ref m) if m == "boom"));
    }
}
