use std::io::Write;

use anyhow::Context;
use tracing::debug;

use crate::commands::{LayoutArgs, YearArgs, to_config};
use herald_common::config::Config;
use herald_core::Header;

pub fn render(year: &YearArgs, layout: &LayoutArgs) -> anyhow::Result<()> {
    let cfg: Config = to_config(year, layout, None)?;
    let header: Header =
        herald_core::generate(&year.source(), &cfg).context("could not render header")?;

    debug!(style = %cfg.style, "writing header to stdout");
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(header.as_str().as_bytes())?;
    stdout.flush()?;
    Ok(())
}
