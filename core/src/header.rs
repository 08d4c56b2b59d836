use std::fmt;

use tracing::debug;
use unicode_width::UnicodeWidthStr;

use herald_common::config::Config;
use herald_common::error::{HeraldError, Result};
use herald_common::year::CreationYear;

const RULE_CAP: &str = "===";
const RULE_FILL: char = '-';

const GPL_NOTICE: [&str; 3] = [
    "This program is free software: you can redistribute it and/or modify it under the terms of \
     the GNU General Public License as published by the Free Software Foundation, either version 3 \
     of the License, or (at your option) any later version.",
    "This program is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; \
     without even the implied warranty of MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See \
     the GNU General Public License for more details.",
    "You should have received a copy of the GNU General Public License along with this program. If \
     not, see https://www.gnu.org/licenses.",
];

/// A rendered license header, one `\n`-terminated line per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    text: String,
}

impl Header {
    /// Renders the notice for `year` using the owner, project, width and
    /// comment style in `cfg`.
    ///
    /// Fails with [`HeraldError::Layout`] when any part cannot fit within
    /// `cfg.width` columns. The copyright line is never wrapped.
    pub fn render(year: CreationYear, cfg: &Config) -> Result<Self> {
        let marker: &str = cfg.style.marker();
        let width: usize = cfg.width;

        let rule: String = rule(marker, width)?;
        let mut lines: Vec<String> = vec![rule.clone()];

        if cfg.owner.chars().any(char::is_control) {
            return Err(layout(width, "owner contains control characters"));
        }

        let copyright = format!("{marker} Copyright © {year} {}. All rights reserved.", cfg.owner);
        if copyright.width() > width {
            return Err(layout(width, "copyright line is too long"));
        }
        lines.push(copyright);

        let project = format!("This file is part of the {} open-source project.", cfg.project);
        let paragraphs = std::iter::once(project.as_str()).chain(GPL_NOTICE);

        for paragraph in paragraphs {
            lines.push(marker.to_string());
            wrap(marker, paragraph, width, &mut lines)?;
        }

        lines.push(rule);

        let mut text = String::new();
        for line in &lines {
            text.push_str(line);
            text.push('\n');
        }

        debug!(%year, style = %cfg.style, width, lines = lines.len(), "rendered header");
        Ok(Self { text })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Returns the header followed by `source`, ready to be written out as a
    /// generated file.
    pub fn prepend_to(&self, source: &str) -> String {
        let mut stamped = String::with_capacity(self.text.len() + source.len());
        stamped.push_str(&self.text);
        stamped.push_str(source);
        stamped
    }

    pub fn into_string(self) -> String {
        self.text
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl From<Header> for String {
    fn from(header: Header) -> Self {
        header.text
    }
}

/// `<marker> ===---...---===`, exactly `width` columns wide.
fn rule(marker: &str, width: usize) -> Result<String> {
    let head: String = format!("{marker} {RULE_CAP}");
    let fixed: usize = head.width() + RULE_CAP.len();

    if width <= fixed {
        return Err(layout(width, "no room for the horizontal rule"));
    }

    let fill: String = std::iter::repeat_n(RULE_FILL, width - fixed).collect();
    Ok(format!("{head}{fill}{RULE_CAP}"))
}

/// Greedy word wrap. Each produced line starts with `marker` and a space.
fn wrap(marker: &str, paragraph: &str, width: usize, lines: &mut Vec<String>) -> Result<()> {
    let marker_width: usize = marker.width();
    let mut line: String = marker.to_string();
    let mut line_width: usize = marker_width;

    for word in paragraph.split_whitespace() {
        let word_width: usize = word.width();

        if line_width + 1 + word_width > width && line_width > marker_width {
            lines.push(std::mem::replace(&mut line, marker.to_string()));
            line_width = marker_width;
        }

        if line_width + 1 + word_width > width {
            return Err(layout(width, format!("'{word}' does not fit on a line")));
        }

        line.push(' ');
        line.push_str(word);
        line_width += 1 + word_width;
    }

    if line_width > marker_width {
        lines.push(line);
    }

    Ok(())
}

fn layout(width: usize, reason: impl Into<String>) -> HeraldError {
    HeraldError::Layout {
        width,
        reason: reason.into(),
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
