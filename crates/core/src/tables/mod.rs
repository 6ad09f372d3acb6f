//! Static vocabularies that map MP4 atom codes, iTunes freeform names and
//! Vorbis comment keys onto the canonical semantic keys.
//!
//! Every lookup is total: a name missing from its table still canonicalizes
//! to a deterministic key so unknown tags survive.

use std::{collections::HashMap, sync::LazyLock};

/// Atom code for freeform (reverse-DNS) atoms. These carry their own name and
/// are routed through [`freeform_to_semantic`] instead.
pub const FREEFORM_ATOM: &str = "----";

/// Atom code for the numbered track field.
pub const TRACK_ATOM: &str = "trkn";

/// Atom code for the numbered disc field.
pub const DISC_ATOM: &str = "disk";

const ATOM_ENTRIES: &[(&str, &str)] = &[
    ("(c)nam", "title"),
    ("(c)ART", "artist"),
    ("(c)alb", "album"),
    ("(c)day", "date"),
    ("(c)cmt", "comment"),
    ("(c)wrt", "composer"),
    ("(c)gen", "genre"),
    ("(c)grp", "grouping"),
    ("(c)lyr", "lyrics"),
    ("(c)wrk", "work"),
    ("(c)mvn", "movement"),
    ("aART", "albumartist"),
    ("soar", "artistsort"),
    ("soaa", "albumartistsort"),
    ("soco", "composersort"),
    ("sonm", "titlesort"),
    ("soal", "albumsort"),
    ("cprt", "copyright"),
    ("desc", "description"),
    ("ldes", "longdescription"),
    ("tvsh", "tvshow"),
    ("tven", "tvepisodeid"),
    ("tvnn", "tvnetwork"),
    ("tvsn", "tvseason"),
    ("tves", "tvepisode"),
    ("purd", "purchasedate"),
    ("pcst", "podcast"),
    ("catg", "category"),
    ("keyw", "keyword"),
    ("purl", "podcasturl"),
    ("egid", "episodeguid"),
    ("stik", "mediatype"),
    ("hdvd", "hd"),
    ("rtng", "rating"),
    ("pgap", "gapless"),
    ("cpil", "compilation"),
    ("tmpo", "tempo"),
];

const FREEFORM_ENTRIES: &[(&str, &str)] = &[
    ("MUSICBRAINZ ALBUM RELEASE COUNTRY", "releasecountry"),
    ("MUSICBRAINZ ALBUM ID", "musicbrainz_albumid"),
    ("MUSICBRAINZ ARTIST ID", "musicbrainz_artistid"),
    ("MUSICBRAINZ ALBUM ARTIST ID", "musicbrainz_albumartistid"),
    ("MUSICBRAINZ TRACK ID", "musicbrainz_recordingid"),
    ("MUSICBRAINZ RELEASE TRACK ID", "musicbrainz_releasetrackid"),
    ("MUSICBRAINZ RELEASE GROUP ID", "musicbrainz_releasegroupid"),
    ("MUSICBRAINZ WORK ID", "musicbrainz_workid"),
    ("ACOUSTID ID", "acoustid_id"),
    ("MUSICBRAINZ ALBUM TYPE", "releasetype"),
    ("MUSICBRAINZ ALBUM STATUS", "releasestatus"),
    ("ASIN", "asin"),
    ("LABEL", "label"),
    ("CATALOGNUMBER", "catalognumber"),
    ("MEDIA", "media"),
    ("SCRIPT", "script"),
    ("LANGUAGE", "language"),
    ("ORIGINALDATE", "originaldate"),
    ("ORIGINALYEAR", "originalyear"),
    ("ARTISTS", "artists"),
    ("ARRANGER", "arranger"),
    ("BARCODE", "barcode"),
    ("ISRC", "isrc"),
];

// Follows the Picard tag map. MUSICBRAINZ_TRACKID holds the recording MBID;
// the release track MBID lives in MUSICBRAINZ_RELEASETRACKID.
const VORBIS_ENTRIES: &[(&str, &str)] = &[
    ("ALBUM", "album"),
    ("ALBUMARTIST", "albumartist"),
    ("ALBUMARTISTSORT", "albumartistsort"),
    ("ARTIST", "artist"),
    ("ARTISTSORT", "artistsort"),
    ("ARTISTS", "artists"),
    ("ASIN", "asin"),
    ("BARCODE", "barcode"),
    ("CATALOGNUMBER", "catalognumber"),
    ("COMMENT", "comment"),
    ("COMPILATION", "compilation"),
    ("COMPOSER", "composer"),
    ("COMPOSERSORT", "composersort"),
    ("COPYRIGHT", "copyright"),
    ("DATE", "date"),
    ("DISCSUBTITLE", "discsubtitle"),
    ("DISCTOTAL", "disctotal"),
    ("TOTALDISCS", "totaldiscs"),
    ("GENRE", "genre"),
    ("ISRC", "isrc"),
    ("LABEL", "label"),
    ("LANGUAGE", "language"),
    ("LYRICS", "lyrics"),
    ("MEDIA", "media"),
    ("ORIGINALDATE", "originaldate"),
    ("ORIGINALYEAR", "originalyear"),
    ("PERFORMER", "performer"),
    ("RELEASECOUNTRY", "releasecountry"),
    ("RELEASESTATUS", "releasestatus"),
    ("RELEASETYPE", "releasetype"),
    ("SCRIPT", "script"),
    ("TITLE", "title"),
    ("TITLESORT", "titlesort"),
    ("TOTALTRACKS", "totaltracks"),
    ("TRACKTOTAL", "tracktotal"),
    ("WORK", "work"),
    ("WRITER", "writer"),
    ("ARRANGER", "arranger"),
    ("MUSICBRAINZ_TRACKID", "musicbrainz_recordingid"),
    ("MUSICBRAINZ_RELEASETRACKID", "musicbrainz_releasetrackid"),
    ("MUSICBRAINZ_ALBUMID", "musicbrainz_albumid"),
    ("MUSICBRAINZ_ARTISTID", "musicbrainz_artistid"),
    ("MUSICBRAINZ_ALBUMARTISTID", "musicbrainz_albumartistid"),
    ("MUSICBRAINZ_RELEASEGROUPID", "musicbrainz_releasegroupid"),
    ("MUSICBRAINZ_WORKID", "musicbrainz_workid"),
    ("ACOUSTID_ID", "acoustid_id"),
];

static ATOM_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| ATOM_ENTRIES.iter().copied().collect());

static FREEFORM_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| FREEFORM_ENTRIES.iter().copied().collect());

static VORBIS_TABLE: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| VORBIS_ENTRIES.iter().copied().collect());

/// Rewrites the copyright sign the atom dumper prints literally (`©nam`) into
/// the ASCII escape the atom table is keyed on (`(c)nam`).
pub fn normalize_atom_name(name: &str) -> String {
    name.replace('\u{a9}', "(c)")
}

/// Maps a normalised atom code to its semantic key. Unknown codes pass
/// through unchanged.
pub fn atom_to_semantic(atom: &str) -> String {
    match ATOM_TABLE.get(atom) {
        Some(semantic) => (*semantic).to_string(),
        None => atom.to_string(),
    }
}

/// Maps the name part of a freeform atom to its semantic key, matching
/// case-insensitively. Unknown names are lowercased with spaces turned into
/// underscores.
pub fn freeform_to_semantic(name: &str) -> String {
    match FREEFORM_TABLE.get(name.to_uppercase().as_str()) {
        Some(semantic) => (*semantic).to_string(),
        None => name.replace(' ', "_").to_lowercase(),
    }
}

/// Maps an uppercase Vorbis comment key to its semantic key. Unknown keys are
/// lowercased.
pub fn vorbis_to_semantic(key: &str) -> String {
    match VORBIS_TABLE.get(key) {
        Some(semantic) => (*semantic).to_string(),
        None => key.to_lowercase(),
    }
}
