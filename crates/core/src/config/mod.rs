use serde::{Deserialize, Serialize};

use crate::{Result, TagMeldError};

/// Marker printed once per picture block by `metaflac --list`.
pub const DEFAULT_PICTURE_MARKER: &str = "type: 6 (PICTURE)";

/// Top-level configuration structure for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub vorbis: VorbisConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Decodes a configuration document. Missing fields take their defaults.
    pub fn from_json_str(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)
            .map_err(|err| TagMeldError::Config(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.vorbis.picture_marker.trim().is_empty() {
            return Err(TagMeldError::Config(
                "vorbis.picture_marker must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration specific to the Vorbis comment path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VorbisConfig {
    pub picture_marker: String,
}

impl Default for VorbisConfig {
    fn default() -> Self {
        Self {
            picture_marker: DEFAULT_PICTURE_MARKER.to_string(),
        }
    }
}

/// How the command line front end renders results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_json_str("{}").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.vorbis.picture_marker, DEFAULT_PICTURE_MARKER);
        assert!(config.output.pretty);
    }

    #[test]
    fn partial_document_overrides_fields() {
        let config = AppConfig::from_json_str(r#"{"output": {"pretty": false}}"#).unwrap();
        assert!(!config.output.pretty);
        assert_eq!(config.vorbis, VorbisConfig::default());
    }

    #[test]
    fn rejects_empty_marker() {
        let err = AppConfig::from_json_str(r#"{"vorbis": {"picture_marker": " "}}"#).unwrap_err();
        assert!(matches!(err, TagMeldError::Config(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(AppConfig::from_json_str("not json").is_err());
    }
}
