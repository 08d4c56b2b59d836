//! # Comment Styles
//!
//! The line-comment marker that prefixes every header line.
//!
//! A style can be named directly (`slash`, `hash`, `dash`, `semicolon`) or
//! inferred from the extension of the file the header will be written into.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::{HeraldError, Result};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CommentStyle {
    /// `//` as in Swift, Rust and the C family.
    #[default]
    Slash,
    /// `#` as in Python, shell and TOML.
    Hash,
    /// `--` as in SQL, Lua and Haskell.
    DoubleDash,
    /// `;;` as in the Lisp family.
    Semicolon,
}

impl CommentStyle {
    pub fn marker(self) -> &'static str {
        match self {
            Self::Slash => "//",
            Self::Hash => "#",
            Self::DoubleDash => "--",
            Self::Semicolon => ";;",
        }
    }

    /// Infers the style from a bare extension such as `"swift"` or `".py"`.
    pub fn from_extension(ext: &str) -> Result<Self> {
        let lower = ext.trim_start_matches('.').to_ascii_lowercase();

        let style = match lower.as_str() {
            "swift" | "rs" | "c" | "h" | "cc" | "cpp" | "hpp" | "m" | "js" | "ts" | "go"
            | "java" | "kt" | "scala" | "cs" | "proto" => Self::Slash,
            "py" | "sh" | "bash" | "zsh" | "toml" | "yaml" | "yml" | "rb" | "pl" | "cmake"
            | "r" => Self::Hash,
            "sql" | "lua" | "hs" | "elm" | "ada" => Self::DoubleDash,
            "el" | "lisp" | "clj" | "scm" | "rkt" => Self::Semicolon,
            _ => return Err(HeraldError::UnknownExtension(ext.to_string())),
        };

        Ok(style)
    }

    /// Infers the style from a path, looking through a trailing `.gyb`
    /// template suffix (`Types.swift.gyb` is a Swift file).
    pub fn from_path(path: &Path) -> Result<Self> {
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();
        let name = name.strip_suffix(".gyb").unwrap_or(name);

        match Path::new(name).extension().and_then(|e| e.to_str()) {
            Some(ext) => Self::from_extension(ext),
            None => Err(HeraldError::UnknownExtension(path.display().to_string())),
        }
    }
}

impl fmt::Display for CommentStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Slash => "slash",
            Self::Hash => "hash",
            Self::DoubleDash => "dash",
            Self::Semicolon => "semicolon",
        };
        f.write_str(name)
    }
}

impl FromStr for CommentStyle {
    type Err = String;

    /// Accepts the style name or the marker itself (`"slash"` or `"//"`).
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "slash" | "//" => Ok(Self::Slash),
            "hash" | "#" => Ok(Self::Hash),
            "dash" | "--" => Ok(Self::DoubleDash),
            "semicolon" | ";;" => Ok(Self::Semicolon),
            _ => Err(HeraldError::UnknownStyle(s.to_string()).to_string()),
        }
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
