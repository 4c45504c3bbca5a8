// tests/pdf_pages.rs
use std::fs;
use std::path::Path;

use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};

use sansad_scrape::{
    config::options::PdfOptions,
    convert::pdf,
    segment::Profile,
    store,
};

/// One line of Courier text per page.
fn write_pdf(path: &Path, lines: &[String]) {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for line in lines {
        let content = Content {
            operations: vec![
                Operation::new("BT", vec![]),
                Operation::new("Tf", vec!["F1".into(), 12.into()]),
                Operation::new("Td", vec![72.into(), 720.into()]),
                Operation::new("Tj", vec![Object::string_literal(line.as_str())]),
                Operation::new("ET", vec![]),
            ],
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode().unwrap()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let media_box: Vec<Object> = vec![0.into(), 0.into(), 595.into(), 842.into()];
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => media_box,
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes).unwrap();
    fs::write(path, bytes).unwrap();
}

fn synopsis(dir: &Path, pages: usize) -> PdfOptions {
    let lines: Vec<String> = (0..pages).map(|i| format!("SHRI MEMBER {i}: PAGEMARK{i} spoke.")).collect();
    let pdf_path = dir.join("synopsis.pdf");
    write_pdf(&pdf_path, &lines);
    PdfOptions {
        pdf_path,
        dump_path: dir.join("synopsis.txt"),
        csv_out: dir.join("synopsis.csv"),
        ..PdfOptions::default()
    }
}

#[test]
fn default_range_skips_front_matter() {
    let dir = tempfile::tempdir().unwrap();
    let opts = synopsis(dir.path(), 7);
    assert_eq!(opts.first_page, 5);
    assert_eq!(opts.profile, Profile::Synopsis);

    let summary = pdf::extract(&opts, None).unwrap();

    let dump = fs::read_to_string(&opts.dump_path).unwrap();
    for i in 0..5 {
        assert!(!dump.contains(&format!("PAGEMARK{i}")), "page {i} leaked into {dump:?}");
    }
    assert!(dump.contains("PAGEMARK5"));
    assert!(dump.contains("PAGEMARK6"));
    assert_eq!(summary.files_written, vec![opts.dump_path.clone(), opts.csv_out.clone()]);

    let rows = store::read_segments(&opts.csv_out).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows[0].speech.contains("PAGEMARK5"));
}

#[test]
fn explicit_last_page_is_inclusive() {
    let dir = tempfile::tempdir().unwrap();
    let opts = PdfOptions { first_page: 1, last_page: Some(2), ..synopsis(dir.path(), 4) };
    pdf::extract(&opts, None).unwrap();

    let dump = fs::read_to_string(&opts.dump_path).unwrap();
    assert!(!dump.contains("PAGEMARK0"));
    assert!(dump.contains("PAGEMARK1"));
    assert!(dump.contains("PAGEMARK2"));
    assert!(!dump.contains("PAGEMARK3"));
}

#[test]
fn range_past_the_end_gives_an_empty_dump() {
    let dir = tempfile::tempdir().unwrap();
    let opts = synopsis(dir.path(), 3);
    let summary = pdf::extract(&opts, None).unwrap();
    assert_eq!(fs::read_to_string(&opts.dump_path).unwrap(), "");
    assert!(summary.preview.is_empty());
}
