//! Parser for Vorbis comment exports (`metaflac --export-tags-to=-`) and the
//! picture block listing (`metaflac --list --block-type=PICTURE`).
//!
//! Unlike the MP4 path, `TRACKNUMBER` and `DISCNUMBER` keep the raw source
//! string in `text`; only the numeric fields are derived.

use crate::{
    capture::ToolCapture,
    config::VorbisConfig,
    pair::{parse_lenient, parse_pair},
    tables::vorbis_to_semantic,
    tags::{CanonicalTagSet, DISC_NUMBER_KEY, TRACK_NUMBER_KEY},
    Result,
};

/// Parses a captured Vorbis comment export using the default configuration.
///
/// `pictures` is the separate picture block listing for the same file. A
/// missing or failed listing yields a picture count of zero and never fails
/// the parse.
pub fn parse_vorbis_dump(
    tags: &ToolCapture,
    pictures: Option<&ToolCapture>,
) -> Result<CanonicalTagSet> {
    parse_vorbis_dump_with(&VorbisConfig::default(), tags, pictures)
}

/// Same as [`parse_vorbis_dump`] with an explicit configuration.
pub fn parse_vorbis_dump_with(
    config: &VorbisConfig,
    tags: &ToolCapture,
    pictures: Option<&ToolCapture>,
) -> Result<CanonicalTagSet> {
    let text = tags.stdout_checked()?;
    let mut parsed = parse_vorbis_text(&text);
    parsed.picture_count = pictures
        .map(|listing| picture_count_from_capture(listing, &config.picture_marker))
        .unwrap_or(0);
    Ok(parsed)
}

/// Parses `KEY=value` lines into a [`CanonicalTagSet`]. The first `=` splits
/// key from value; lines without a key are skipped.
pub fn parse_vorbis_text(text: &str) -> CanonicalTagSet {
    let mut tags = CanonicalTagSet::new();

    for line in text.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        if key.is_empty() {
            continue;
        }

        let key = key.to_uppercase();
        match key.as_str() {
            "TRACKNUMBER" => {
                tags.track = parse_pair(value).0;
                tags.append(TRACK_NUMBER_KEY, value);
            }
            "TRACKTOTAL" | "TOTALTRACKS" => {
                tags.track_total = parse_total(value);
                tags.append(vorbis_to_semantic(&key), value);
            }
            "DISCNUMBER" => {
                tags.disc = parse_pair(value).0;
                tags.append(DISC_NUMBER_KEY, value);
            }
            "DISCTOTAL" | "TOTALDISCS" => {
                tags.disc_total = parse_total(value);
                tags.append(vorbis_to_semantic(&key), value);
            }
            _ => tags.append(vorbis_to_semantic(&key), value),
        }
    }

    tags
}

/// Counts the lines of a picture block listing that carry `marker`.
pub fn count_picture_blocks(listing: &str, marker: &str) -> u32 {
    let count = listing.lines().filter(|line| line.contains(marker)).count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

fn picture_count_from_capture(listing: &ToolCapture, marker: &str) -> u32 {
    match listing.stdout_checked() {
        Ok(text) => count_picture_blocks(&text, marker),
        Err(err) => {
            tracing::debug!(error = %err, "picture listing unavailable, assuming no pictures");
            0
        }
    }
}

// Totals are plain integers; surrounding whitespace is not tolerated.
fn parse_total(value: &str) -> u32 {
    if value.trim() != value {
        return 0;
    }
    parse_lenient(value)
}
