// tests/roster_tables.rs
use sansad_scrape::{
    config::options::{ExportOptions, RosterOptions},
    specs::roster::{self, TableRules},
    store::{self, UTF8_BOM},
};

const PAGE: &str = r#"<!DOCTYPE html><html><body>
<table class="infobox"><tr><th>Ignored</th></tr><tr><td>x</td></tr></table>

<h2>Andhra Pradesh</h2>
<table class="wikitable sortable">
  <tbody>
    <tr><th>No.</th><th>Constituency</th><th>Name</th><th colspan="2">Party</th></tr>
    <tr><td>1</td><td>Araku (ST)</td><td>Goddeti Madhavi</td><td style="background:#1569C7"></td><td>YSRCP</td></tr>
    <tr><td>2</td><td>Srikakulam</td><td>Ram Mohan Naidu Kinjarapu<sup>[1]</sup></td><td></td><td>TDP</td><td>extra</td></tr>
    <tr><td colspan="3">Vacant</td></tr>
  </tbody>
</table>

<h2>Goa</h2>
<table class="wikitable">
  <tr><th>No.</th><th>Name</th><th>Remarks</th></tr>
  <tr><td>1</td><td>Shripad Naik</td><td>Minister</td></tr>
</table>

<table class="wikitable"><tr><th>Header only</th></tr></table>
</body></html>"#;

fn rules() -> TableRules<'static> {
    TableRules { class: "wikitable", ..Default::default() }
}

#[test]
fn flattens_member_tables() {
    let tables = roster::parse_tables(PAGE, rules()).unwrap();
    assert_eq!(tables.len(), 2);

    let ap = &tables[0];
    assert_eq!(ap.headers, vec!["No.", "Constituency", "Name", "Party", "Party.1"]);
    assert_eq!(ap.rows[0], vec!["1", "Araku (ST)", "Goddeti Madhavi", "", "YSRCP"]);
    // truncated to the header width
    assert_eq!(ap.rows[1].len(), 5);
    // colspan=3 → three identical values, then padding
    assert_eq!(ap.rows[2], vec!["Vacant", "Vacant", "Vacant", "", ""]);
}

#[test]
fn combined_columns_are_the_header_union() {
    let tables = roster::parse_tables(PAGE, rules()).unwrap();
    let ds = roster::combine(&tables);
    assert_eq!(
        ds.headers.as_deref().unwrap(),
        ["No.", "Constituency", "Name", "Party", "Party.1", "Remarks"]
    );
    assert_eq!(ds.row_count(), 4);
    assert_eq!(ds.rows[3], vec!["1", "", "Shripad Naik", "", "", "Minister"]);
}

#[test]
fn footnotes_follow_options() {
    let opts = RosterOptions { strip_footnotes: true, ..RosterOptions::default() };
    let tables = roster::parse_tables(PAGE, TableRules::from(&opts)).unwrap();
    assert_eq!(tables[0].rows[1][2], "Ram Mohan Naidu Kinjarapu");
}

#[test]
fn roster_csv_has_bom_and_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("lok_sabha_all_members.csv");
    let ds = roster::combine(&roster::parse_tables(PAGE, rules()).unwrap());

    store::write_table(&path, &ds, &ExportOptions::default()).unwrap();
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(UTF8_BOM));
    assert!(bytes[UTF8_BOM.len()..].starts_with(b"No.,Constituency,Name,Party,Party.1,Remarks"));

    let back = store::read_table(&path, b',').unwrap();
    assert_eq!(back, ds);
}
