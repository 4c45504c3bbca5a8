// src/gui/router.rs
use super::pages::{self, Page, PageKind};

pub static PAGES: &[&'static dyn Page] = &[
    &pages::roster::PAGE,
    &pages::debates::PAGE,
    &pages::segments::PAGE,
];

pub fn all_pages() -> &'static [&'static dyn Page] {
    PAGES
}

pub fn page_for(kind: PageKind) -> &'static dyn Page {
    match kind {
        PageKind::Roster => &pages::roster::PAGE,
        PageKind::Debates => &pages::debates::PAGE,
        PageKind::Segments => &pages::segments::PAGE,
    }
}
