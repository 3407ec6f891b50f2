//! Search configuration.
//!
//! [`SearchOptions`] collects the policy decisions the engine makes explicit
//! instead of leaving them to heap internals:
//!
//! - [`TieBreak`]: which of several equal-priority entries is popped first
//! - [`PrunePolicy`]: whether branch-and-bound keeps children whose potential
//!   merely ties the incumbent
//!
//! Options can be built in code, read from JSON, or taken from the
//! environment:
//!
//! - `COSTSEARCH_TIE_BREAK`: `fifo` (default) or `lifo`
//! - `COSTSEARCH_PRUNE`: `inclusive` (default) or `strict`

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable selecting the tie-break policy.
pub const TIE_BREAK_ENV: &str = "COSTSEARCH_TIE_BREAK";

/// Environment variable selecting the prune policy.
pub const PRUNE_ENV: &str = "COSTSEARCH_PRUNE";

/// Order in which entries with equal priority leave the frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// Earlier insertions first.
    #[default]
    Fifo,
    /// Later insertions first (depth-first flavour among ties).
    Lifo,
}

/// How branch-and-bound compares a child's potential against the incumbent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PrunePolicy {
    /// Keep children whose potential is at least the incumbent score. Needed
    /// whenever a secondary tie-break can still improve on an equal score.
    #[default]
    Inclusive,
    /// Keep only children whose potential strictly exceeds the incumbent.
    Strict,
}

impl PrunePolicy {
    /// Whether a region with `potential` may still matter against an
    /// incumbent scoring `incumbent`.
    pub fn keeps<T: Ord>(self, potential: &T, incumbent: &T) -> bool {
        match self {
            PrunePolicy::Inclusive => potential >= incumbent,
            PrunePolicy::Strict => potential > incumbent,
        }
    }
}

impl fmt::Display for TieBreak {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            TieBreak::Fifo => "fifo",
            TieBreak::Lifo => "lifo",
        };
        f.write_str(value)
    }
}

impl FromStr for TieBreak {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "fifo" => Ok(TieBreak::Fifo),
            "lifo" => Ok(TieBreak::Lifo),
            other => Err(Error::InvalidOptions {
                message: format!("unknown tie-break policy '{other}'"),
            }),
        }
    }
}

impl fmt::Display for PrunePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            PrunePolicy::Inclusive => "inclusive",
            PrunePolicy::Strict => "strict",
        };
        f.write_str(value)
    }
}

impl FromStr for PrunePolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "inclusive" => Ok(PrunePolicy::Inclusive),
            "strict" => Ok(PrunePolicy::Strict),
            other => Err(Error::InvalidOptions {
                message: format!("unknown prune policy '{other}'"),
            }),
        }
    }
}

/// Policy knobs shared by both search drivers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SearchOptions {
    pub tie_break: TieBreak,
    pub prune: PrunePolicy,
}

impl SearchOptions {
    /// Convenience builder for the tie-break policy.
    pub fn with_tie_break(mut self, tie_break: TieBreak) -> Self {
        self.tie_break = tie_break;
        self
    }

    /// Convenience builder for the prune policy.
    pub fn with_prune(mut self, prune: PrunePolicy) -> Self {
        self.prune = prune;
        self
    }

    /// Parse options from a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read options from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::OptionsFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&contents)
    }

    /// Build options from `COSTSEARCH_TIE_BREAK` and `COSTSEARCH_PRUNE`.
    ///
    /// Unset or empty variables fall back to the defaults. Unrecognised values
    /// are an error.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut options = Self::default();
        if let Some(value) = non_empty(&lookup, TIE_BREAK_ENV) {
            options.tie_break = value.parse()?;
        }
        if let Some(value) = non_empty(&lookup, PRUNE_ENV) {
            options.prune = value.parse()?;
        }
        Ok(options)
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<String> {
    match lookup(key) {
        Some(value) if value.trim().is_empty() => {
            tracing::warn!(variable = key, "ignoring empty search option variable");
            None
        }
        other => other,
    }
}
