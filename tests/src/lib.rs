//! Shared fixtures for the integration tests.

use herald_common::config::Config;
use herald_common::year::CreationYear;

pub const RULE_PREFIX: &str = "===-";
pub const RULE_SUFFIX: &str = "-===";

pub fn year(y: i64) -> CreationYear {
    CreationYear::new(y).expect("fixture year must be four digits")
}

pub fn config_with_start(y: i64) -> Config {
    Config {
        project_start_year: Some(year(y)),
        ..Config::default()
    }
}

/// True when `line` is a horizontal rule for `marker`.
pub fn is_rule(line: &str, marker: &str) -> bool {
    line.strip_prefix(marker)
        .and_then(|rest| rest.strip_prefix(' '))
        .is_some_and(|rest| rest.starts_with(RULE_PREFIX) && rest.ends_with(RULE_SUFFIX))
}
