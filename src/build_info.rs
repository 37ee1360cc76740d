//! Build stamp
//!
//! `build.rs` bumps a counter and records the compile time; every shopping
//! report carries the resulting stamp so stored reports can be traced back
//! to the binary that produced them.

use std::fmt;

use serde::Serialize;

/// Which build of the crate produced a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    /// ISO 8601, or "unknown" outside a cargo build
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    pub const CURRENT: BuildInfo = BuildInfo {
        name: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        build_number: match option_env!("MENU_UNITS_BUILD_NUMBER") {
            Some(raw) => parse_build_number(raw),
            None => 0,
        },
        build_timestamp: match option_env!("MENU_UNITS_BUILD_TIMESTAMP") {
            Some(raw) => raw,
            None => "unknown",
        },
    };

    pub fn current() -> Self {
        Self::CURRENT
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Decimal counter from build.rs; anything malformed reads as build 0
const fn parse_build_number(raw: &str) -> u64 {
    let digits = raw.as_bytes();
    if digits.is_empty() {
        return 0;
    }
    let mut number: u64 = 0;
    let mut i = 0;
    while i < digits.len() {
        if !digits[i].is_ascii_digit() {
            return 0;
        }
        number = number * 10 + (digits[i] - b'0') as u64;
        i += 1;
    }
    number
}

/// One-line stamp on stderr before any report output
pub fn print_startup_banner() {
    eprintln!("Menu Units :: {}", BuildInfo::CURRENT);
}
