//! # Error Model
//!
//! Every failure the library can raise. The context variants all mean the
//! same thing to a caller: the creation year could not be determined, so no
//! header was produced.

use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, HeraldError>;

#[derive(Debug, thiserror::Error)]
pub enum HeraldError {
    /// The path could not be canonicalized for a reason other than absence.
    #[error("cannot resolve '{}': {source}", .path.display())]
    Unresolved { path: PathBuf, source: io::Error },

    #[error("'{}' no longer exists", .path.display())]
    Missing { path: PathBuf },

    /// Raised on filesystems and platforms without birth-time metadata.
    #[error("creation time is not available for '{}': {source}", .path.display())]
    CreationTimeUnsupported { path: PathBuf, source: io::Error },

    #[error("year {0} is not a 4-digit calendar year")]
    YearOutOfRange(i64),

    #[error("no project start year configured")]
    NoProjectStartYear,

    #[error("unknown comment style '{0}'")]
    UnknownStyle(String),

    #[error("no comment style known for extension '{0}'")]
    UnknownExtension(String),

    #[error("header does not fit in {width} columns: {reason}")]
    Layout { width: usize, reason: String },
}

impl HeraldError {
    /// True for the failures that mean "cannot determine creation context".
    pub fn is_context(&self) -> bool {
        matches!(
            self,
            Self::Unresolved { .. }
                | Self::Missing { .. }
                | Self::CreationTimeUnsupported { .. }
                | Self::YearOutOfRange(_)
                | Self::NoProjectStartYear
        )
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn context_failures_are_classified() {
        let missing = HeraldError::Missing { path: PathBuf::from("gone.swift") };
        assert!(missing.is_context());
        assert!(HeraldError::NoProjectStartYear.is_context());
        assert!(HeraldError::YearOutOfRange(99).is_context());
    }

    #[test]
    fn layout_and_style_failures_are_not_context() {
        let layout = HeraldError::Layout { width: 10, reason: "too narrow".into() };
        assert!(!layout.is_context());
        assert!(!HeraldError::UnknownStyle("xml".into()).is_context());
    }

    #[test]
    fn messages_name_the_path() {
        let err = HeraldError::Missing { path: PathBuf::from("gen/Types.swift") };
        assert_eq!(err.to_string(), "'gen/Types.swift' no longer exists");
    }
}
