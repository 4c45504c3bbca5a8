// src/scrape/roster.rs
use tracing::info;

use crate::{
    config::options::RosterOptions,
    core::net,
    error::{Error, Result},
    progress::Progress,
    specs::roster::{self, TableRules},
    store::DataSet,
};

/// Fetch the roster page and flatten every matching table into one dataset.
/// Any HTTP failure aborts; there is nothing useful to salvage from one page.
pub fn collect_roster(
    opts: &RosterOptions,
    mut progress: Option<&mut dyn Progress>,
) -> Result<DataSet> {
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Fetching {}", opts.url));
    }
    let client = net::client()?;
    let html = net::http_get(&client, &opts.url)?;

    let tables = roster::parse_tables(&html, TableRules::from(opts))?;
    if tables.is_empty() {
        return Err(Error::Structure(format!(
            "no <table class=\"{}\"> with data rows at {}",
            opts.table_class, opts.url
        )));
    }

    let ds = roster::combine(&tables);
    info!(
        "Roster: {} table(s), {} row(s), {} column(s)",
        tables.len(),
        ds.row_count(),
        ds.header_count()
    );
    if let Some(p) = progress.as_deref_mut() {
        p.log(&format!("Parsed {} table(s), {} member row(s)", tables.len(), ds.row_count()));
    }
    Ok(ds)
}
