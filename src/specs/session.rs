// src/specs/session.rs
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};

use crate::config::consts::{DEBATE_FILE_PREFIX, MISC_YEAR_DIR};
use crate::error::{Error, Result};

const DATE_FMT: &str = "%d%b%Y";

/// `<legislature>_<session>_<ddMonYYYY>`, e.g. `16_4_24Feb2015`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionKey {
    pub legislature: u32,
    pub session: u32,
    pub date: NaiveDate,
}

impl SessionKey {
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

impl FromStr for SessionKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::SessionKey(s!(s));
        let mut parts = s.trim().split('_');
        let (Some(ls), Some(sess), Some(date), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        Ok(SessionKey {
            legislature: ls.parse().map_err(|_| bad())?,
            session: sess.parse().map_err(|_| bad())?,
            date: NaiveDate::parse_from_str(date, DATE_FMT).map_err(|_| bad())?,
        })
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.legislature, self.session, self.date.format(DATE_FMT))
    }
}

/// Year for a transcript file stem: the session key's year, else the first
/// standalone `19xx`/`20xx` in the stem.
pub fn year_hint(stem: &str) -> Option<i32> {
    let key = stem.strip_prefix(DEBATE_FILE_PREFIX).unwrap_or(stem);
    if let Ok(k) = key.parse::<SessionKey>() {
        return Some(k.year());
    }
    stem.split(|c: char| !c.is_ascii_digit())
        .filter(|run| run.len() == 4 && (run.starts_with("19") || run.starts_with("20")))
        .find_map(|run| run.parse().ok())
}

/// Output subdirectory for the by-year layout.
pub fn year_dir(stem: &str) -> String {
    year_hint(stem).map_or_else(|| s!(MISC_YEAR_DIR), |y| y.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_prints_keys() {
        let k: SessionKey = "16_4_24Feb2015".parse().unwrap();
        assert_eq!((k.legislature, k.session, k.year()), (16, 4, 2015));
        assert_eq!(k.to_string(), "16_4_24Feb2015");
        assert_eq!("17_1_02Mar2016".parse::<SessionKey>().unwrap().to_string(), "17_1_02Mar2016");
    }

    #[test]
    fn rejects_malformed_keys() {
        for bad in ["", "16_4", "16_4_31Feb2015", "x_4_24Feb2015", "16_4_24Feb2015_extra"] {
            assert!(bad.parse::<SessionKey>().is_err(), "{bad}");
        }
    }

    #[test]
    fn year_directory_resolution() {
        assert_eq!(year_dir("debate_16_7_02Mar2016"), "2016");
        assert_eq!(year_dir("17_3_05Feb2020"), "2020");
        assert_eq!(year_dir("budget_speech_2019_final"), "2019");
        assert_eq!(year_dir("scan12019"), "misc");
        assert_eq!(year_dir("notes"), "misc");
    }
}
