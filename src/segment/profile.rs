// src/segment/profile.rs
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Named header rule sets. The transcript sources disagree on what counts as a
/// speaker header, so none of these is "the" rule; pick per corpus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    /// Line-anchored honorifics, uppercase-run fallback below 90% coverage.
    #[default]
    Layered,
    /// Inline honorifics, short labels, procedural lines dropped. No fallback.
    Strict,
    /// Synopsis PDFs: `SHRI`/`SHRIMATI`/`THE MINISTER`/`ADV.` lines.
    Synopsis,
}

/// Where a segmented file lands under the output directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputLayout {
    /// `<out>/<year>/<stem>.csv`
    ByYear,
    /// `<out>/<stem><suffix>.csv`
    Flat(&'static str),
}

impl Profile {
    pub const ALL: [Profile; 3] = [Profile::Layered, Profile::Strict, Profile::Synopsis];

    pub fn label(&self) -> &'static str {
        match self {
            Profile::Layered => "layered",
            Profile::Strict => "strict",
            Profile::Synopsis => "synopsis",
        }
    }

    pub fn layout(&self) -> OutputLayout {
        match self {
            Profile::Layered => OutputLayout::ByYear,
            Profile::Strict => OutputLayout::Flat("_cleaned"),
            Profile::Synopsis => OutputLayout::Flat(""),
        }
    }

    /// Whether rows carry `Words_in_Speech` and `Language`.
    pub fn full_columns(&self) -> bool {
        matches!(self, Profile::Layered)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Profile {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Profile::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown profile: {s} (expected layered, strict or synopsis)"))
    }
}
