use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pair::format_pair;

/// Canonical key under which the textual track number is stored.
pub const TRACK_NUMBER_KEY: &str = "tracknumber";

/// Canonical key under which the textual disc number is stored.
pub const DISC_NUMBER_KEY: &str = "discnumber";

/// Unified metadata accumulated from one tool dump.
///
/// `text` is keyed by canonical semantic names only. An absent tag is an
/// absent key, never an empty vector. Numeric fields use zero for "absent".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanonicalTagSet {
    pub text: BTreeMap<String, Vec<String>>,
    pub track: u32,
    pub track_total: u32,
    pub disc: u32,
    pub disc_total: u32,
    pub picture_count: u32,
}

impl CanonicalTagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `value` under `key`, keeping earlier values in order.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.text.entry(key.into()).or_default().push(value.into());
    }

    pub fn values(&self, key: &str) -> &[String] {
        self.text.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn first(&self, key: &str) -> Option<&str> {
        self.values(key).first().map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.text.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.text.keys().map(String::as_str)
    }

    /// Number of distinct canonical text keys. Numeric fields are not
    /// counted, so a set holding only a picture count has `len() == 0` while
    /// `is_empty()` is false.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when no text tag and no numeric field is set.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.track == 0
            && self.track_total == 0
            && self.disc == 0
            && self.disc_total == 0
            && self.picture_count == 0
    }
}

/// Expected tag values written to a file before it is dumped again, used to
/// check that a parsed [`CanonicalTagSet`] agrees with what was written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagProfile {
    pub title: String,
    pub artist: String,
    pub album: String,
    pub album_artist: String,
    pub date: String,
    pub track: u32,
    pub track_total: u32,
    pub disc: u32,
    pub disc_total: u32,
    pub genre: String,
    pub comment: String,
    pub composer: String,
}

/// One disagreement between a [`TagProfile`] and a parsed tag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagMismatch {
    pub field: String,
    pub expected: String,
    pub found: Option<String>,
}

impl TagProfile {
    /// The standard fixture metadata.
    pub fn standard() -> Self {
        Self {
            title: "Test Title".to_string(),
            artist: "Test Artist".to_string(),
            album: "Test Album".to_string(),
            album_artist: "Test AlbumArtist".to_string(),
            date: "2000".to_string(),
            track: 3,
            track_total: 6,
            disc: 2,
            disc_total: 0,
            genre: "Jazz".to_string(),
            comment: "Test Comment".to_string(),
            composer: "Test Composer".to_string(),
        }
    }

    /// Renders the profile as the `KEY=value` lines a Vorbis comment writer
    /// emits. Empty strings and zero numbers are left out.
    pub fn vorbis_comment_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for (key, value) in self.text_fields() {
            if !value.is_empty() {
                lines.push(format!("{}={value}", key.to_uppercase()));
            }
        }

        let numbers = [
            ("TRACKNUMBER", self.track),
            ("TRACKTOTAL", self.track_total),
            ("DISCNUMBER", self.disc),
            ("DISCTOTAL", self.disc_total),
        ];
        for (key, value) in numbers {
            if value > 0 {
                lines.push(format!("{key}={value}"));
            }
        }

        lines
    }

    /// Lists every non-empty profile field that `tags` does not reproduce.
    ///
    /// Text fields compare against the first value under the canonical key;
    /// numbers compare against the numeric fields of the set.
    pub fn diff(&self, tags: &CanonicalTagSet) -> Vec<TagMismatch> {
        let mut mismatches = Vec::new();

        for (key, expected) in self.text_fields() {
            if expected.is_empty() {
                continue;
            }
            let found = tags.first(key);
            if found != Some(expected) {
                mismatches.push(TagMismatch {
                    field: key.to_string(),
                    expected: expected.to_string(),
                    found: found.map(str::to_string),
                });
            }
        }

        let numbers = [
            (TRACK_NUMBER_KEY, self.track, tags.track),
            ("tracktotal", self.track_total, tags.track_total),
            (DISC_NUMBER_KEY, self.disc, tags.disc),
            ("disctotal", self.disc_total, tags.disc_total),
        ];
        for (field, expected, found) in numbers {
            if expected > 0 && expected != found {
                mismatches.push(TagMismatch {
                    field: field.to_string(),
                    expected: expected.to_string(),
                    found: (found > 0).then(|| found.to_string()),
                });
            }
        }

        mismatches
    }

    /// The track value in the normalised `N/M` spelling.
    pub fn track_pair(&self) -> String {
        format_pair(self.track, self.track_total)
    }

    /// The disc value in the normalised `N/M` spelling.
    pub fn disc_pair(&self) -> String {
        format_pair(self.disc, self.disc_total)
    }

    fn text_fields(&self) -> [(&'static str, &str); 8] {
        [
            ("title", self.title.as_str()),
            ("artist", self.artist.as_str()),
            ("album", self.album.as_str()),
            ("albumartist", self.album_artist.as_str()),
            ("date", self.date.as_str()),
            ("genre", self.genre.as_str()),
            ("comment", self.comment.as_str()),
            ("composer", self.composer.as_str()),
        ]
    }
}
