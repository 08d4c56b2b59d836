//! # herald-core
//!
//! Builds the GPL-3.0-or-later notice placed at the top of generated source
//! files.
//!
//! The year is always supplied by the caller through a [`YearSource`]: an
//! explicit year, the creation time of a file the caller names, or the
//! project start year from the [`Config`].

pub mod header;
pub mod provenance;

pub use header::Header;
pub use provenance::YearSource;

use herald_common::config::Config;
use herald_common::error::Result;

/// Resolves the year from `source` and renders the header for it.
pub fn generate(source: &YearSource, cfg: &Config) -> Result<Header> {
    let year = source.resolve(cfg)?;
    Header::render(year, cfg)
}
