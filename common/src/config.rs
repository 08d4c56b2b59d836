use crate::comment::CommentStyle;
use crate::year::CreationYear;

pub const DEFAULT_OWNER: &str = "Supernova";
pub const DEFAULT_PROJECT: &str = "Deus";
pub const DEFAULT_WIDTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Copyright holder named on the copyright line.
    pub owner: String,
    /// Project named on the "This file is part of" line.
    pub project: String,
    /// Maximum number of display columns per line, marker included.
    ///
    /// Rule lines are always exactly this wide.
    pub width: usize,
    pub style: CommentStyle,
    /// Used when the caller asks for the project start year instead of a file
    /// timestamp.
    pub project_start_year: Option<CreationYear>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            owner: DEFAULT_OWNER.to_string(),
            project: DEFAULT_PROJECT.to_string(),
            width: DEFAULT_WIDTH,
            style: CommentStyle::default(),
            project_start_year: None,
        }
    }
}
