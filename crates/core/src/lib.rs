//! Core library for tagmeld, a cross-format audio metadata normalization
//! engine.
//!
//! The engine takes text captured from native introspection tools (an MP4
//! atom dumper and a Vorbis comment exporter) plus a JSON stream probe report
//! and reconciles them into one canonical model keyed by semantic tag names.
//! It never spawns the tools itself; callers hand it captured output. Every
//! entry point is pure and may be called from any number of threads at once.

pub mod capture;
pub mod config;
pub mod error;
pub mod mp4;
pub mod native;
pub mod pair;
pub mod probe;
pub mod tables;
pub mod tags;
pub mod vorbis;

pub use capture::ToolCapture;
pub use config::{AppConfig, OutputConfig, VorbisConfig};
pub use error::{NativeFormat, Result, TagMeldError};
pub use mp4::{parse_atom_dump, parse_atom_text, AtomLine};
pub use native::{parse_id3v2, parse_native, parse_opus_native, parse_vorbis_native};
pub use pair::{format_pair, parse_pair, PairValue};
pub use probe::{decode_probe_json, AudioSummary, ProbeFormat, StreamProbe, StreamProbeReport};
pub use tags::{CanonicalTagSet, TagMismatch, TagProfile};
pub use vorbis::{
    count_picture_blocks, parse_vorbis_dump, parse_vorbis_dump_with, parse_vorbis_text,
};
