use anyhow::{anyhow, Result};
use std::str::FromStr;

/// Token for [`Severity::Debug`].
pub const DEBUG: &str = "d";
/// Token for [`Severity::Warn`].
pub const WARN: &str = "w";
/// Token for [`Severity::Error`].
pub const ERR: &str = "e";

/// Message severity. Ordered by rank, `Debug` is the lowest.
#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Clone, Copy, Hash)]
pub enum Severity {
    Debug = 0,
    Warn = 1,
    Error = 2,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Debug, Severity::Warn, Severity::Error];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Warn => "WARNING",
            Severity::Error => "ERROR",
        }
    }

    pub fn token(self) -> &'static str {
        match self {
            Severity::Debug => DEBUG,
            Severity::Warn => WARN,
            Severity::Error => ERR,
        }
    }

    pub fn rank(self) -> u8 {
        self as u8
    }
}

impl Default for Severity {
    fn default() -> Self {
        Self::Warn
    }
}

impl FromStr for Severity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        Severity::ALL
            .iter()
            .copied()
            .find(|severity| severity.token() == s)
            .ok_or_else(|| anyhow!("Unknown severity \"{}\".", s))
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
