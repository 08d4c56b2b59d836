pub mod info;
pub mod render;
pub mod stamp;

use std::path::{Path, PathBuf};

use clap::{ArgAction, Args, Parser, Subcommand};
use herald_common::comment::CommentStyle;
use herald_common::config::{Config, DEFAULT_OWNER, DEFAULT_PROJECT, DEFAULT_WIDTH};
use herald_common::year::CreationYear;
use herald_core::YearSource;

#[derive(Parser)]
#[command(name = "herald")]
#[command(about = "License headers for generated source files.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides info lines, -qq hides warnings)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Increase log detail (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print a license header to stdout
    #[command(alias = "r")]
    Render {
        #[command(flatten)]
        year: YearArgs,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Print a file with a license header in front of it
    #[command(alias = "s")]
    Stamp {
        file: PathBuf,
        #[command(flatten)]
        year: YearArgs,
        #[command(flatten)]
        layout: LayoutArgs,
    },
    /// Show the configuration a header would be rendered with
    #[command(alias = "i")]
    Info {
        #[command(flatten)]
        year: YearArgs,
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

/// Where the copyright year comes from. Exactly one must be given.
#[derive(Args, Debug, Clone)]
#[group(required = true, multiple = false)]
pub struct YearArgs {
    /// Use this year
    #[arg(long)]
    pub year: Option<CreationYear>,

    /// Use the creation year of this file
    #[arg(long, value_name = "PATH")]
    pub created_from: Option<PathBuf>,

    /// Use this year as the project start year
    #[arg(long, value_name = "YEAR")]
    pub project_start: Option<CreationYear>,
}

#[derive(Args, Debug, Clone)]
pub struct LayoutArgs {
    /// Comment style: slash, hash, dash or semicolon
    #[arg(long, conflicts_with = "for_file")]
    pub style: Option<CommentStyle>,

    /// Pick the comment style from this file's extension
    #[arg(long = "for", value_name = "FILE")]
    pub for_file: Option<PathBuf>,

    #[arg(long, default_value = DEFAULT_OWNER)]
    pub owner: String,

    #[arg(long, default_value = DEFAULT_PROJECT)]
    pub project: String,

    /// Maximum line width, comment marker included
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

impl YearArgs {
    pub fn source(&self) -> YearSource {
        match (&self.year, &self.created_from) {
            (Some(year), _) => YearSource::Explicit(*year),
            (None, Some(path)) => YearSource::FileCreated(path.clone()),
            (None, None) => YearSource::ProjectStart,
        }
    }
}

/// Builds the header config. `target` is the file the header is meant for,
/// used for the comment style when neither `--style` nor `--for` is given.
pub fn to_config(
    year: &YearArgs,
    layout: &LayoutArgs,
    target: Option<&Path>,
) -> anyhow::Result<Config> {
    let style: CommentStyle = match (layout.style, layout.for_file.as_deref().or(target)) {
        (Some(style), _) => style,
        (None, Some(path)) => CommentStyle::from_path(path)?,
        (None, None) => CommentStyle::default(),
    };

    Ok(Config {
        owner: layout.owner.clone(),
        project: layout.project.clone(),
        width: layout.width,
        style,
        project_start_year: year.project_start,
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
