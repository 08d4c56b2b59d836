//! # Creation Context
//!
//! Works out which year goes on the copyright line. The caller always says
//! where the year comes from; nothing here inspects the call stack or guesses
//! which file's timestamp matters.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Datelike, Local, Utc};
use tracing::debug;

use herald_common::config::Config;
use herald_common::error::{HeraldError, Result};
use herald_common::year::CreationYear;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum YearSource {
    /// A year chosen by the caller.
    Explicit(CreationYear),
    /// The creation (birth) time of the named file.
    FileCreated(PathBuf),
    /// `Config::project_start_year`.
    ProjectStart,
}

impl YearSource {
    pub fn resolve(&self, cfg: &Config) -> Result<CreationYear> {
        match self {
            Self::Explicit(year) => Ok(*year),
            Self::FileCreated(path) => creation_year(path),
            Self::ProjectStart => cfg.project_start_year.ok_or(HeraldError::NoProjectStartYear),
        }
    }
}

/// Reads the creation time of `path` and returns its year in local time.
///
/// Fails when the path cannot be resolved, the file is gone, or the
/// filesystem does not record birth times.
pub fn creation_year(path: &Path) -> Result<CreationYear> {
    let resolved: PathBuf = fs::canonicalize(path).map_err(|e| lookup_error(path, e))?;
    let metadata: fs::Metadata = fs::metadata(&resolved).map_err(|e| lookup_error(path, e))?;

    let created: SystemTime = metadata
        .created()
        .map_err(|source| HeraldError::CreationTimeUnsupported {
            path: resolved.clone(),
            source,
        })?;

    let year = year_of(created)?;
    debug!(path = %resolved.display(), %year, "resolved creation year");
    Ok(year)
}

/// Converts a timestamp to its calendar year in the local time zone.
///
/// Timestamps chrono cannot represent fail with `YearOutOfRange`.
pub fn year_of(time: SystemTime) -> Result<CreationYear> {
    let secs: i64 = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_secs()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_secs()).map_or(i64::MIN, |s| -s),
    };

    let utc: DateTime<Utc> = DateTime::<Utc>::from_timestamp(secs, 0)
        .ok_or(HeraldError::YearOutOfRange(approximate_year(secs)))?;
    let local: DateTime<Local> = utc.with_timezone(&Local);
    CreationYear::new(i64::from(local.year()))
}

fn approximate_year(secs: i64) -> i64 {
    const SECS_PER_YEAR: i64 = 31_556_952;
    1970 + secs / SECS_PER_YEAR
}

fn lookup_error(path: &Path, source: io::Error) -> HeraldError {
    match source.kind() {
        io::ErrorKind::NotFound => HeraldError::Missing {
            path: path.to_path_buf(),
        },
        _ => HeraldError::Unresolved {
            path: path.to_path_buf(),
            source,
        },
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
