// src/convert/mod.rs
//! Offline conversions: transcript text → segment CSVs, synopsis PDF → text → CSV.
pub mod pdf;
pub mod transcripts;
