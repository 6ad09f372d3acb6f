//! Native tag readers that are declared but not implemented. Each always
//! fails with [`TagMeldError::Unsupported`]; none of them approximates.

use std::path::Path;

use crate::{error::NativeFormat, tags::CanonicalTagSet, Result, TagMeldError};

/// Native ID3v2 reader for MP3 files.
pub fn parse_id3v2(path: &Path) -> Result<CanonicalTagSet> {
    unsupported(NativeFormat::Id3v2, path)
}

/// Native Vorbis comment reader for Ogg Vorbis files, without the dump tool.
pub fn parse_vorbis_native(path: &Path) -> Result<CanonicalTagSet> {
    unsupported(NativeFormat::OggVorbis, path)
}

/// Native Opus tag reader.
pub fn parse_opus_native(path: &Path) -> Result<CanonicalTagSet> {
    unsupported(NativeFormat::Opus, path)
}

/// Dispatches to the reader for `format`.
pub fn parse_native(format: NativeFormat, path: &Path) -> Result<CanonicalTagSet> {
    match format {
        NativeFormat::Id3v2 => parse_id3v2(path),
        NativeFormat::OggVorbis => parse_vorbis_native(path),
        NativeFormat::Opus => parse_opus_native(path),
    }
}

fn unsupported(format: NativeFormat, path: &Path) -> Result<CanonicalTagSet> {
    Err(TagMeldError::Unsupported {
        format,
        path: path.to_path_buf(),
    })
}
