#![cfg(test)]
use herald_common::comment::CommentStyle;
use herald_common::config::Config;
use herald_common::error::HeraldError;
use herald_core::{Header, YearSource, generate};
use herald_integration_tests::{config_with_start, is_rule, year};

const STYLES: [CommentStyle; 4] = [
    CommentStyle::Slash,
    CommentStyle::Hash,
    CommentStyle::DoubleDash,
    CommentStyle::Semicolon,
];

/// Character count, which is what a 100-column editor ruler measures.
fn columns(line: &str) -> usize {
    line.chars().count()
}

#[test]
fn every_style_stays_within_one_hundred_columns() {
    for style in STYLES {
        let cfg = Config { style, ..Config::default() };
        let header = Header::render(year(2025), &cfg).unwrap();

        for line in header.lines() {
            assert!(columns(line) <= 100, "{style}: line too wide: {line:?}");
            assert!(line.starts_with(style.marker()), "{style}: missing marker: {line:?}");
        }
    }
}

#[test]
fn header_opens_and_closes_with_rules() {
    for style in STYLES {
        let cfg = Config { style, ..Config::default() };
        let header = Header::render(year(2025), &cfg).unwrap();
        let lines: Vec<&str> = header.lines().collect();

        let first = lines.first().copied().unwrap();
        let last = lines.last().copied().unwrap();
        assert!(is_rule(first, style.marker()), "{style}: {first:?}");
        assert!(is_rule(last, style.marker()), "{style}: {last:?}");
        assert_eq!(first, last);
        assert_eq!(columns(first), 100);
        assert!(header.as_str().ends_with("===\n"));
    }
}

#[test]
fn copyright_line_names_year_and_owner() {
    let cfg = Config { owner: "Acme Labs".into(), project: "Orbit".into(), ..Config::default() };
    let header = Header::render(year(1999), &cfg).unwrap();
    let lines: Vec<&str> = header.lines().collect();

    assert_eq!(lines[1], "// Copyright © 1999 Acme Labs. All rights reserved.");
    assert_eq!(lines[3], "// This file is part of the Orbit open-source project.");
}

#[test]
fn notice_keeps_gpl_wording() {
    let header = Header::render(year(2025), &Config::default()).unwrap();
    let joined: String = header
        .lines()
        .map(|l| l.trim_start_matches("//").trim())
        .collect::<Vec<_>>()
        .join(" ");

    assert!(joined.contains("either version 3 of the License, or (at your option) any later version."));
    assert!(joined.contains("WITHOUT ANY WARRANTY"));
    assert!(joined.contains("see https://www.gnu.org/licenses."));
}

#[test]
fn generation_is_deterministic() {
    let cfg = config_with_start(2024);
    let first = generate(&YearSource::ProjectStart, &cfg).unwrap();
    let second = generate(&YearSource::ProjectStart, &cfg).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.into_string());
}

#[test]
fn unresolved_context_produces_no_header() {
    let result = generate(&YearSource::ProjectStart, &Config::default());
    assert!(matches!(result, Err(HeraldError::NoProjectStartYear)));

    let missing = YearSource::FileCreated("no/such/dir/Generated.swift".into());
    let err = generate(&missing, &Config::default()).unwrap_err();
    assert!(err.is_context(), "unexpected error: {err}");
}

#[test]
fn stamped_source_follows_the_header() {
    let cfg = Config { style: CommentStyle::Hash, ..Config::default() };
    let header = Header::render(year(2025), &cfg).unwrap();
    let stamped = header.prepend_to("from pathlib import Path\n");

    let lines: Vec<&str> = stamped.lines().collect();
    assert!(is_rule(lines[0], "#"));
    assert_eq!(lines[lines.len() - 1], "from pathlib import Path");
    assert!(is_rule(lines[lines.len() - 2], "#"));
}
