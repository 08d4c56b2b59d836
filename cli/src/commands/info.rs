use anyhow::Context;
use colored::*;

use crate::commands::{LayoutArgs, YearArgs, to_config};
use crate::terminal::print::{self, GLOBAL_KEY_WIDTH};
use herald_common::config::Config;
use herald_common::year::CreationYear;
use herald_core::YearSource;

pub fn info(year: &YearArgs, layout: &LayoutArgs, q_level: u8) -> anyhow::Result<()> {
    let cfg: Config = to_config(year, layout, None)?;
    let source: YearSource = year.source();
    let resolved: CreationYear = source
        .resolve(&cfg)
        .context("cannot determine creation context")?;

    let source_desc: String = match &source {
        YearSource::Explicit(_) => String::from("explicit"),
        YearSource::FileCreated(path) => format!("created {}", path.display()),
        YearSource::ProjectStart => String::from("project start"),
    };

    let details: Vec<(&str, ColoredString)> = vec![
        ("Owner", cfg.owner.normal()),
        ("Project", cfg.project.normal()),
        ("Year", resolved.to_string().bold().green()),
        ("Source", source_desc.normal()),
        ("Style", format!("{} ({})", cfg.style, cfg.style.marker()).normal()),
        ("Width", cfg.width.to_string().normal()),
    ];

    print::header("header configuration", q_level);
    let key_width: usize = details.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    GLOBAL_KEY_WIDTH.set(key_width);

    for (key, value) in details {
        print::aligned_line(key, value);
    }

    print::fat_separator();
    Ok(())
}
