// tests/roster_http.rs
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use sansad_scrape::{
    Error,
    config::options::{AppOptions, RosterOptions},
    progress::Progress,
    runner::{self, Job},
    store,
};

/// Answer exactly one request with `status` and `body`, then hang up.
fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let url = format!("http://{}/wiki/List_of_members", listener.local_addr().unwrap());
    let handle = thread::spawn(move || {
        let (stream, _) = listener.accept().unwrap();
        let mut reader = BufReader::new(stream);
        let mut line = String::new();
        while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
            line.clear();
        }
        let mut stream = reader.into_inner();
        write!(
            stream,
            "HTTP/1.1 {status}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        )
        .unwrap();
    });
    (url, handle)
}

#[derive(Default)]
struct Lines {
    logged: Vec<String>,
    finished: bool,
}

impl Progress for Lines {
    fn log(&mut self, msg: &str) { self.logged.push(msg.to_string()); }
    fn finish(&mut self) { self.finished = true; }
}

fn options(url: String, out: std::path::PathBuf) -> AppOptions {
    AppOptions {
        roster: RosterOptions { url, out, ..RosterOptions::default() },
        ..AppOptions::default()
    }
}

#[test]
fn not_found_aborts_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("members.csv");
    let (url, server) = serve_once("404 Not Found", "gone");

    let err = runner::run(Job::Roster, &options(url.clone(), out.clone()), None).unwrap_err();
    server.join().unwrap();

    match err {
        Error::Status { status, url: failed } => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    assert!(!out.exists());
}

#[test]
fn ok_page_is_written_as_csv() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("members.csv");
    let (url, server) = serve_once(
        "200 OK",
        r#"<table class="wikitable"><tr><th>No.</th><th>Name</th></tr><tr><td>1</td><td>A</td></tr></table>"#,
    );

    let mut lines = Lines::default();
    let summary = runner::run(Job::Roster, &options(url, out.clone()), Some(&mut lines)).unwrap();
    server.join().unwrap();

    // Fetch, parse, then the runner's own line after the collector returned.
    assert_eq!(lines.logged.len(), 3);
    assert!(lines.logged[2].starts_with("Wrote "));
    assert!(lines.finished);

    assert_eq!(summary.files_written, vec![out.clone()]);
    let ds = store::read_table(&out, b',').unwrap();
    assert_eq!(ds.headers.unwrap(), vec!["No.", "Name"]);
    assert_eq!(ds.rows, vec![vec!["1", "A"]]);
}
