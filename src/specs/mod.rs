// src/specs/mod.rs
//! # Page and file-name specs
//!
//! Pure parsing of what the collectors bring home. Nothing in here touches the
//! network or the disk; every function takes a string and returns data, so each
//! spec is tested against inline fixtures.
//!
//! - `roster`  – `<table class="wikitable">` flattening (colspan/rowspan, header union).
//! - `debate`  – transcript paragraphs out of a rendered debate page.
//! - `session` – `16_4_24Feb2015` session keys and the year they map to.
//!
//! Fetching, caching and writing live in `scrape` and `convert`.

pub mod debate;
pub mod roster;
pub mod session;
