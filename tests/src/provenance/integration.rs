#![cfg(test)]
use std::fs;
use std::time::SystemTime;

use herald_common::config::Config;
use herald_common::error::HeraldError;
use herald_core::provenance::{creation_year, year_of};
use herald_core::{YearSource, generate};

fn local_year_now() -> u16 {
    year_of(SystemTime::now()).unwrap().get()
}

/// A freshly created file carries this year, unless the filesystem has no
/// birth times, in which case the failure must say so.
#[test]
fn fresh_file_reports_current_year_or_unsupported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Generated.swift");
    fs::write(&path, "struct Generated {}\n").unwrap();

    let supported: bool = fs::metadata(&path).unwrap().created().is_ok();

    match creation_year(&path) {
        Ok(year) => {
            assert!(supported);
            assert_eq!(year.get(), local_year_now());
        }
        Err(err) => {
            assert!(!supported, "unexpected failure: {err}");
            assert!(matches!(err, HeraldError::CreationTimeUnsupported { .. }));
        }
    }
}

#[test]
fn file_source_renders_header_for_its_year() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("reflect.py");
    fs::write(&path, "").unwrap();

    if fs::metadata(&path).unwrap().created().is_err() {
        return;
    }

    let header = generate(&YearSource::FileCreated(path), &Config::default()).unwrap();
    let expected = format!("// Copyright © {} Supernova. All rights reserved.", local_year_now());
    assert!(header.lines().any(|l| l == expected));
}

#[test]
fn deleted_file_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("Removed.swift");
    fs::write(&path, "").unwrap();
    fs::remove_file(&path).unwrap();

    let err = creation_year(&path).unwrap_err();
    assert!(matches!(err, HeraldError::Missing { path: ref p } if p == &path));
}

#[test]
fn path_through_a_regular_file_is_unresolved() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("Types.swift");
    fs::write(&file, "").unwrap();

    let err = creation_year(&file.join("child.swift")).unwrap_err();
    assert!(matches!(err, HeraldError::Unresolved { .. }), "unexpected error: {err}");
    assert!(err.is_context());
}

#[test]
fn directory_paths_resolve_like_files() {
    let dir = tempfile::tempdir().unwrap();
    match creation_year(dir.path()) {
        Ok(year) => assert!(year.get() >= 1000),
        Err(err) => assert!(matches!(err, HeraldError::CreationTimeUnsupported { .. })),
    }
}
