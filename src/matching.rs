//! Active-state matching.
//!
//! Decides whether a link represents the current location. Comparison is
//! literal: no trailing-slash, query-string or case normalisation happens
//! here, so callers that want normalised matching must normalise both the
//! location and the link target themselves.
//!
//! | Mode         | Active when                                 |
//! |--------------|---------------------------------------------|
//! | `Exact`      | `current == target`                         |
//! | `StartsWith` | `current` begins with `target`              |
//! | `Includes`   | `target` occurs anywhere in `current`       |
//!
//! An empty target is therefore active everywhere under `StartsWith` and
//! `Includes`, and only on an empty location under `Exact`.
//!
//! # Examples
//!
//! ```
//! use gpui_navlink::matching::{is_active, MatchMode};
//!
//! assert!(is_active("/about/team", "/about", None, MatchMode::StartsWith));
//! assert!(!is_active("/about/team", "/about", None, MatchMode::Exact));
//! assert!(is_active("/docs", "/guide", Some("/docs"), MatchMode::Exact));
//! ```

use crate::error::ParseMatchModeError;
use crate::{trace_log, warn_log};
use std::fmt;
use std::str::FromStr;

/// Comparison policy between the current location and a link target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MatchMode {
    /// Literal equality.
    Exact,
    /// Literal prefix.
    StartsWith,
    /// Literal substring.
    #[default]
    Includes,
}

impl MatchMode {
    /// Parse a mode name, falling back to [`MatchMode::Includes`] for
    /// anything unrecognised.
    pub fn parse_lossy(input: &str) -> Self {
        input.parse().unwrap_or_else(|err: ParseMatchModeError| {
            warn_log!("{}; falling back to includes", err);
            MatchMode::Includes
        })
    }

    /// Canonical name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Exact => "exact",
            MatchMode::StartsWith => "startsWith",
            MatchMode::Includes => "includes",
        }
    }

    /// Apply this mode to an already-resolved comparison path.
    pub fn matches(self, current_path: &str, comparison_path: &str) -> bool {
        match self {
            MatchMode::Exact => current_path == comparison_path,
            MatchMode::StartsWith => current_path.starts_with(comparison_path),
            MatchMode::Includes => current_path.contains(comparison_path),
        }
    }
}

impl FromStr for MatchMode {
    type Err = ParseMatchModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MatchMode::Exact),
            "startsWith" | "starts_with" | "starts-with" => Ok(MatchMode::StartsWith),
            "includes" => Ok(MatchMode::Includes),
            _ => Err(ParseMatchModeError {
                input: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The path used for matching: the override when present, else the target.
pub fn comparison_path<'a>(target: &'a str, compare_target: Option<&'a str>) -> &'a str {
    compare_target.unwrap_or(target)
}

/// Whether a link pointing at `target` is active at `current_path`.
pub fn is_active(
    current_path: &str,
    target: &str,
    compare_target: Option<&str>,
    mode: MatchMode,
) -> bool {
    let against = comparison_path(target, compare_target);
    let active = mode.matches(current_path, against);
    trace_log!(
        "Match '{}' against '{}' ({}): {}",
        current_path,
        against,
        mode,
        active
    );
    active
}
