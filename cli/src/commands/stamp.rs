use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use crate::commands::{LayoutArgs, YearArgs, to_config};
use herald_common::config::Config;
use herald_core::Header;

pub fn stamp(file: &Path, year: &YearArgs, layout: &LayoutArgs) -> anyhow::Result<()> {
    let cfg: Config = to_config(year, layout, Some(file))?;
    let source: String = fs::read_to_string(file)
        .with_context(|| format!("could not read '{}'", file.display()))?;
    let header: Header =
        herald_core::generate(&year.source(), &cfg).context("could not render header")?;

    debug!(file = %file.display(), style = %cfg.style, "stamping file");
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(header.prepend_to(&source).as_bytes())?;
    stdout.flush()?;
    Ok(())
}
