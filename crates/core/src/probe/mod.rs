//! Typed view over an `ffprobe -print_format json -show_format -show_streams`
//! report.
//!
//! Numeric values the prober emits as decimal strings stay strings here; the
//! accessor methods parse them and return zero for "unknown".

use serde::{Deserialize, Serialize};

use crate::{Result, TagMeldError};

/// Bit depth assumed when a stream reports none (typical for lossy codecs).
pub const DEFAULT_BIT_DEPTH: u32 = 16;

const AUDIO_CODEC_TYPE: &str = "audio";

/// Decodes a probe report from its JSON text.
pub fn decode_probe_json(bytes: &[u8]) -> Result<StreamProbeReport> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Streams and container information for one probed file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreamProbeReport {
    #[serde(default)]
    pub streams: Vec<StreamProbe>,
    #[serde(default)]
    pub format: ProbeFormat,
}

/// A single stream descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamProbe {
    pub index: u32,
    pub codec_name: String,
    pub codec_type: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sample_rate: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub channels: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub channel_layout: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bits_per_raw_sample: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub bits_per_sample: u32,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub duration: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bit_rate: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub sample_fmt: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub nb_frames: String,
    #[serde(skip_serializing_if = "is_zero_i64")]
    pub duration_ts: i64,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub time_base: String,
}

/// Container-level descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProbeFormat {
    pub filename: String,
    pub nb_streams: u32,
    pub format_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub duration: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub size: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub bit_rate: String,
    pub probe_score: u32,
}

/// Condensed description of the stream of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioSummary {
    pub codec: String,
    pub sample_rate_hz: u32,
    pub channels: u32,
    pub bit_depth: u32,
    pub duration_seconds: f64,
}

impl StreamProbeReport {
    /// Returns the first stream whose codec type is exactly `audio`. There is
    /// no fallback to other stream kinds.
    pub fn audio_stream(&self) -> Result<&StreamProbe> {
        self.streams
            .iter()
            .find(|stream| stream.is_audio())
            .ok_or(TagMeldError::NoAudioStream)
    }

    pub fn audio_summary(&self) -> Result<AudioSummary> {
        let stream = self.audio_stream()?;
        Ok(AudioSummary {
            codec: stream.codec_name.clone(),
            sample_rate_hz: stream.sample_rate_hz(),
            channels: stream.channels,
            bit_depth: stream.bit_depth(),
            duration_seconds: stream.duration_seconds(),
        })
    }
}

impl StreamProbe {
    /// Effective bit depth: `bits_per_raw_sample` when it is a positive
    /// integer, else `bits_per_sample` when positive, else
    /// [`DEFAULT_BIT_DEPTH`].
    pub fn bit_depth(&self) -> u32 {
        match self.bits_per_raw_sample.parse::<u32>() {
            Ok(bits) if bits > 0 => bits,
            _ if self.bits_per_sample > 0 => self.bits_per_sample,
            _ => DEFAULT_BIT_DEPTH,
        }
    }

    pub fn sample_rate_hz(&self) -> u32 {
        self.sample_rate.parse().unwrap_or(0)
    }

    pub fn duration_seconds(&self) -> f64 {
        parse_seconds(&self.duration)
    }

    pub fn bit_rate_bps(&self) -> u64 {
        self.bit_rate.parse().unwrap_or(0)
    }

    pub fn is_audio(&self) -> bool {
        self.codec_type == AUDIO_CODEC_TYPE
    }
}

impl ProbeFormat {
    pub fn duration_seconds(&self) -> f64 {
        parse_seconds(&self.duration)
    }

    pub fn size_bytes(&self) -> u64 {
        self.size.parse().unwrap_or(0)
    }

    pub fn bit_rate_bps(&self) -> u64 {
        self.bit_rate.parse().unwrap_or(0)
    }
}

fn parse_seconds(value: &str) -> f64 {
    value
        .parse::<f64>()
        .ok()
        .filter(|seconds| seconds.is_finite())
        .unwrap_or(0.0)
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

fn is_zero_i64(value: &i64) -> bool {
    *value == 0
}
