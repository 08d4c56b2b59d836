use std::fmt;
use std::str::FromStr;

use crate::error::{HeraldError, Result};

pub const MIN_YEAR: i64 = 1000;
pub const MAX_YEAR: i64 = 9999;

/// A calendar year that always renders as exactly four digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreationYear(u16);

impl CreationYear {
    pub fn new(year: i64) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(HeraldError::YearOutOfRange(year));
        }
        Ok(Self(year as u16))
    }

    pub fn get(self) -> u16 {
        self.0
    }
}

impl fmt::Display for CreationYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}

impl FromStr for CreationYear {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let year: i64 = s
            .trim()
            .parse()
            .map_err(|_| format!("invalid year: {s}"))?;
        Self::new(year).map_err(|e| e.to_string())
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
