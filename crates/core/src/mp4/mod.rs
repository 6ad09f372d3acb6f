//! Parser for the text listing an MP4 atom dumper (`AtomicParsley -t`) prints.
//!
//! Three line shapes are recognised:
//!
//! ```text
//! Atom "covr" contains: 1 piece of artwork
//! Atom "----" [com.apple.iTunes;MusicBrainz Album Id] contains: 69af009e-...
//! Atom "©nam" contains: Test Title
//! ```
//!
//! Anything else (banners, headers) is ignored.

use crate::{
    capture::ToolCapture,
    pair::{format_pair, parse_pair},
    tables::{
        atom_to_semantic, freeform_to_semantic, normalize_atom_name, DISC_ATOM, TRACK_ATOM,
    },
    tags::{CanonicalTagSet, DISC_NUMBER_KEY, TRACK_NUMBER_KEY},
    Result,
};

const ATOM_PREFIX: &str = "Atom \"";
const CONTAINS: &str = " contains: ";
const ARTWORK_PREFIX: &str = "Atom \"covr\" contains: ";
const FREEFORM_PREFIX: &str = "Atom \"----\" [";
const BOM: char = '\u{feff}';

/// One recognised line of the atom listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AtomLine<'a> {
    Artwork { pieces: u32 },
    Freeform { domain: &'a str, name: &'a str, value: &'a str },
    Atom { code: &'a str, value: &'a str },
}

impl<'a> AtomLine<'a> {
    /// Classifies a single line. The artwork and freeform shapes are tried
    /// before the generic one because they share its prefix.
    pub fn parse(line: &'a str) -> Option<Self> {
        if let Some(pieces) = parse_artwork(line) {
            return Some(AtomLine::Artwork { pieces });
        }

        if let Some((domain, name, value)) = parse_freeform(line) {
            return Some(AtomLine::Freeform { domain, name, value });
        }

        parse_generic(line).map(|(code, value)| AtomLine::Atom { code, value })
    }
}

/// Parses a captured atom dump. A failed tool run is returned as an error
/// and no partial tag set is produced.
pub fn parse_atom_dump(capture: &ToolCapture) -> Result<CanonicalTagSet> {
    let text = capture.stdout_checked()?;
    Ok(parse_atom_text(&text))
}

/// Parses atom dump text into a [`CanonicalTagSet`].
pub fn parse_atom_text(text: &str) -> CanonicalTagSet {
    let mut tags = CanonicalTagSet::new();

    for raw in text.lines() {
        let line = raw.strip_prefix(BOM).unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        match AtomLine::parse(line) {
            Some(AtomLine::Artwork { pieces }) => tags.picture_count = pieces,
            Some(AtomLine::Freeform { name, value, .. }) => {
                tags.append(freeform_to_semantic(name), value);
            }
            Some(AtomLine::Atom { code, value }) => apply_atom(&mut tags, code, value),
            None => tracing::trace!(line, "ignoring unrecognised atom dump line"),
        }
    }

    tags
}

fn apply_atom(tags: &mut CanonicalTagSet, code: &str, value: &str) {
    match code {
        TRACK_ATOM => {
            let (track, total) = parse_pair(value);
            tags.track = track;
            tags.track_total = total;
            tags.append(TRACK_NUMBER_KEY, format_pair(track, total));
        }
        DISC_ATOM => {
            let (disc, total) = parse_pair(value);
            tags.disc = disc;
            tags.disc_total = total;
            tags.append(DISC_NUMBER_KEY, format_pair(disc, total));
        }
        _ => {
            let semantic = atom_to_semantic(&normalize_atom_name(code));
            tags.append(semantic, value);
        }
    }
}

// `Atom "covr" contains: <N> piece...`
fn parse_artwork(line: &str) -> Option<u32> {
    let rest = line.strip_prefix(ARTWORK_PREFIX)?;
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    if digits_end == 0 || !rest[digits_end..].starts_with(" piece") {
        return None;
    }

    Some(rest[..digits_end].parse().unwrap_or(0))
}

// `Atom "----" [<domain>;<name>] contains: <value>`
fn parse_freeform(line: &str) -> Option<(&str, &str, &str)> {
    let rest = line.strip_prefix(FREEFORM_PREFIX)?;
    let (domain, rest) = rest.split_once(';')?;
    let (name, rest) = rest.split_once(']')?;
    let value = rest.strip_prefix(CONTAINS)?;

    if domain.is_empty() || name.is_empty() {
        return None;
    }

    Some((domain, name, value))
}

// `Atom "<code>" contains: <value>`
fn parse_generic(line: &str) -> Option<(&str, &str)> {
    let rest = line.strip_prefix(ATOM_PREFIX)?;
    let (code, rest) = rest.split_once('"')?;
    let value = rest.strip_prefix(CONTAINS)?;

    if code.is_empty() {
        return None;
    }

    Some((code, value))
}
