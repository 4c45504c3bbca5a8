// tests/export_roundtrip.rs
use sansad_scrape::{
    config::options::{ExportFormat, ExportOptions},
    segment::{Language, Profile, Segmenter},
    store::{self, DataSet},
};

const TRANSCRIPT: &str = "Opening remarks, with a comma.\n\n\
    SHRI A (X): He said \"no\", twice.\n\n\
    And then a second paragraph.\n\
    श्री ब: धन्यवाद, अध्यक्ष जी।\n";

#[test]
fn segments_survive_write_and_read() {
    let dir = tempfile::tempdir().unwrap();
    let seg = Segmenter::for_profile(Profile::Layered).unwrap().preserve_paragraphs(true);
    let segments = seg.segment(TRANSCRIPT).segments;
    assert_eq!(segments.len(), 3);

    for full in [true, false] {
        let path = dir.path().join(format!("segments_{full}.csv"));
        store::write_table(&path, &DataSet::from_segments(&segments, full), &ExportOptions::default())
            .unwrap();

        let back = store::read_segments(&path).unwrap();
        assert_eq!(back.len(), segments.len());
        for (a, b) in segments.iter().zip(&back) {
            assert_eq!(a.speaker, b.speaker);
            assert_eq!(a.speech, b.speech);
        }
        assert_eq!(back[2].language, Language::Hi);
    }
}

#[test]
fn full_layout_columns() {
    let seg = Segmenter::for_profile(Profile::Layered).unwrap();
    let ds = DataSet::from_segments(&seg.segment(TRANSCRIPT).segments, true);
    assert_eq!(
        ds.headers.as_deref().unwrap(),
        ["Speaker", "Speech", "Words_in_Speech", "Language"]
    );
    assert_eq!(ds.rows[1][0], "SHRI A (X)");
    assert_eq!(ds.rows[1][3], "en");
    assert_eq!(ds.rows[2][3], "hi");
}

#[test]
fn tsv_export_without_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("t.tsv");
    let opts = ExportOptions { format: ExportFormat::Tsv, include_headers: true, bom: false };
    let ds = DataSet {
        headers: Some(vec!["Speaker".into(), "Speech".into()]),
        rows: vec![vec!["SHRI A".into(), "one, two".into()]],
    };
    store::write_table(&path, &ds, &opts).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert_eq!(text, "Speaker\tSpeech\nSHRI A\tone, two\n");
    assert_eq!(store::read_table(&path, b'\t').unwrap(), ds);
}
