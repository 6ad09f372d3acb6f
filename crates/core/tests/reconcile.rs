//! End-to-end checks over realistic tool captures.

use tagmeld_core::{
    decode_probe_json, parse_atom_dump, parse_vorbis_dump, CanonicalTagSet, TagMeldError,
    TagProfile, ToolCapture,
};

const ATOM_DUMP: &str = "\u{feff}Atom \"\u{a9}nam\" contains: Test Title
Atom \"\u{a9}ART\" contains: Test Artist
Atom \"\u{a9}alb\" contains: Test Album
Atom \"aART\" contains: Test AlbumArtist
Atom \"\u{a9}day\" contains: 2000
Atom \"trkn\" contains: 3 of 6
Atom \"disk\" contains: 2 of 0
Atom \"\u{a9}gen\" contains: Jazz
Atom \"\u{a9}cmt\" contains: Test Comment
Atom \"\u{a9}wrt\" contains: Test Composer
Atom \"----\" [com.apple.iTunes;MusicBrainz Track Id] contains: 12345678-1234-1234-1234-123456789012
Atom \"----\" [com.apple.iTunes;MusicBrainz Album Id] contains: abcdefab-abcd-abcd-abcd-abcdefabcdef
Atom \"----\" [com.apple.iTunes;CUSTOM_UNKNOWN_TAG] contains: CustomValue
Atom \"covr\" contains: 1 piece of artwork
";

const VORBIS_EXPORT: &str = "TITLE=Test Title
ARTIST=Test Artist
ARTIST=Artist Two
ALBUM=Test Album
ALBUMARTIST=Test AlbumArtist
DATE=2000
TRACKNUMBER=3
TRACKTOTAL=6
DISCNUMBER=2
GENRE=Jazz
COMMENT=Test Comment
COMPOSER=Test Composer
MUSICBRAINZ_TRACKID=12345678-1234-1234-1234-123456789012
";

const PICTURE_LISTING: &str = "METADATA block #3
  type: 6 (PICTURE)
  is last: true
  length: 1234
";

const PROBE_JSON: &str = r#"{
    "streams": [
        {
            "index": 0,
            "codec_name": "mjpeg",
            "codec_type": "video",
            "time_base": "1/90000"
        },
        {
            "index": 1,
            "codec_name": "alac",
            "codec_type": "audio",
            "sample_rate": "96000",
            "channels": 2,
            "channel_layout": "stereo",
            "bits_per_raw_sample": "24",
            "bits_per_sample": 0,
            "duration": "3.000000",
            "bit_rate": "3456000",
            "sample_fmt": "s32p",
            "nb_frames": "71",
            "duration_ts": 288000,
            "time_base": "1/96000"
        }
    ],
    "format": {
        "filename": "tagged.m4a",
        "nb_streams": 2,
        "format_name": "mov,mp4,m4a,3gp,3g2,mj2",
        "duration": "3.000000",
        "size": "1300000",
        "bit_rate": "3466666",
        "probe_score": 100
    }
}"#;

fn no_raw_vocabulary_keys(tags: &CanonicalTagSet) {
    for key in tags.keys() {
        assert_eq!(key, key.to_lowercase(), "key {key} is not canonical");
        assert!(!key.contains('\u{a9}'), "key {key} kept the copyright sign");
        assert!(!key.contains(' '), "key {key} contains a space");
    }
}

#[test]
fn atom_dump_reconciles_to_standard_profile() {
    let capture = ToolCapture::success("AtomicParsley", "tagged.m4a", ATOM_DUMP);
    let tags = parse_atom_dump(&capture).unwrap();

    assert!(TagProfile::standard().diff(&tags).is_empty());
    assert_eq!(tags.values("tracknumber"), ["3/6"]);
    assert_eq!(tags.values("discnumber"), ["2"]);
    assert_eq!(
        tags.values("musicbrainz_recordingid"),
        ["12345678-1234-1234-1234-123456789012"]
    );
    assert_eq!(tags.values("custom_unknown_tag"), ["CustomValue"]);
    assert_eq!(tags.picture_count, 1);
    no_raw_vocabulary_keys(&tags);
}

#[test]
fn vorbis_export_reconciles_to_standard_profile() {
    let export = ToolCapture::success("metaflac", "tagged.flac", VORBIS_EXPORT);
    let listing = ToolCapture::success("metaflac", "tagged.flac", PICTURE_LISTING);
    let tags = parse_vorbis_dump(&export, Some(&listing)).unwrap();

    assert!(TagProfile::standard().diff(&tags).is_empty());
    assert_eq!(tags.values("artist"), ["Test Artist", "Artist Two"]);
    assert_eq!(tags.values("tracknumber"), ["3"]);
    assert_eq!(tags.picture_count, 1);
    no_raw_vocabulary_keys(&tags);
}

#[test]
fn both_paths_agree_on_recording_id() {
    let mp4 = parse_atom_dump(&ToolCapture::success("AtomicParsley", "a.m4a", ATOM_DUMP)).unwrap();
    let flac = parse_vorbis_dump(&ToolCapture::success("metaflac", "a.flac", VORBIS_EXPORT), None)
        .unwrap();

    assert_eq!(
        mp4.values("musicbrainz_recordingid"),
        flac.values("musicbrainz_recordingid")
    );
    assert_eq!(flac.picture_count, 0);
}

#[test]
fn cover_only_dump_counts_pictures_without_text() {
    let capture = ToolCapture::success(
        "AtomicParsley",
        "cover.m4a",
        "Atom \"covr\" contains: 2 pieces of artwork\n",
    );
    let tags = parse_atom_dump(&capture).unwrap();

    assert_eq!(tags.len(), 0);
    assert_eq!(tags.picture_count, 2);
    assert!(!tags.is_empty());
}

#[test]
fn tool_failure_returns_no_tags() {
    let capture = ToolCapture::failure(
        "AtomicParsley",
        "broken.m4a",
        Some(1),
        "AtomicParsley error: bad mpeg4 file",
    );

    match parse_atom_dump(&capture) {
        Err(err @ TagMeldError::ToolFailed { .. }) => {
            assert!(err.to_string().contains("bad mpeg4 file"));
            assert!(err.to_string().contains("broken.m4a"));
        }
        other => panic!("expected tool failure, got {other:?}"),
    }
}

#[test]
fn probe_selects_first_audio_stream() {
    let report = decode_probe_json(PROBE_JSON.as_bytes()).unwrap();
    let audio = report.audio_stream().unwrap();

    assert_eq!(audio.index, 1);
    assert_eq!(audio.bit_depth(), 24);
    assert_eq!(audio.sample_rate_hz(), 96_000);
    assert_eq!(audio.bit_rate_bps(), 3_456_000);

    let summary = report.audio_summary().unwrap();
    assert_eq!(summary.codec, "alac");
    assert_eq!(summary.channels, 2);
    assert!((summary.duration_seconds - 3.0).abs() < 1e-9);

    assert_eq!(report.format.size_bytes(), 1_300_000);
    assert!((report.format.duration_seconds() - 3.0).abs() < 1e-9);
}

#[test]
fn probe_without_audio_fails_typed() {
    let json = r#"{"streams":[{"index":0,"codec_name":"h264","codec_type":"video"}],
                   "format":{"filename":"v.mp4","nb_streams":1,"format_name":"mp4","probe_score":100}}"#;
    let report = decode_probe_json(json.as_bytes()).unwrap();

    assert!(matches!(report.audio_stream(), Err(TagMeldError::NoAudioStream)));
}

#[test]
fn parsing_is_independent_across_threads() {
    let handles: Vec<_> = (0..8)
        .map(|_| {
            std::thread::spawn(|| {
                let capture = ToolCapture::success("AtomicParsley", "a.m4a", ATOM_DUMP);
                parse_atom_dump(&capture).unwrap()
            })
        })
        .collect();

    let results: Vec<CanonicalTagSet> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
}
