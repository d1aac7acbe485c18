//! URL addressing modes for the navigation subsystem.
use crate::error::RouterError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the active route is represented in the address bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressingMode {
    /// Plain paths through the History API, e.g. `/app/line`.
    #[default]
    History,
    /// Fragment-based virtual paths, e.g. `/app/#/line`.
    Hash,
}

impl AddressingMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::History => "history",
            Self::Hash => "hash",
        }
    }

    /// Build the address a link should point at for `path` under `base`.
    #[must_use]
    pub fn href(self, base: Option<&str>, path: &str) -> String {
        let base = base.map_or("", |b| b.trim_end_matches('/'));
        let path = if path.starts_with('/') {
            path.to_string()
        } else {
            format!("/{path}")
        };
        match self {
            Self::History => format!("{base}{path}"),
            Self::Hash => format!("{base}/#{path}"),
        }
    }

    /// Extract the route path from a browser address.
    ///
    /// `pathname` is the location path (including any deployment base) and
    /// `fragment` the location hash, with or without its leading `#`.
    #[must_use]
    pub fn route_path(self, base: Option<&str>, pathname: &str, fragment: &str) -> String {
        let raw = match self {
            Self::History => strip_base(base, pathname),
            Self::Hash => fragment.strip_prefix('#').unwrap_or(fragment),
        };
        if raw.is_empty() {
            "/".to_string()
        } else if raw.starts_with('/') {
            raw.to_string()
        } else {
            format!("/{raw}")
        }
    }
}

fn strip_base<'a>(base: Option<&str>, pathname: &'a str) -> &'a str {
    let Some(base) = base.map(|b| b.trim_end_matches('/')).filter(|b| !b.is_empty()) else {
        return pathname;
    };
    match pathname.strip_prefix(base) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => pathname,
    }
}

impl fmt::Display for AddressingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AddressingMode {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "history" => Ok(Self::History),
            "hash" => Ok(Self::Hash),
            _ => Err(RouterError::UnknownMode(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes_loosely() {
        assert_eq!(
            "history".parse::<AddressingMode>(),
            Ok(AddressingMode::History)
        );
        assert_eq!(" HASH ".parse::<AddressingMode>(), Ok(AddressingMode::Hash));
        assert_eq!(
            "abstract".parse::<AddressingMode>(),
            Err(RouterError::UnknownMode("abstract".to_string()))
        );
    }

    #[test]
    fn href_respects_mode_and_base() {
        assert_eq!(AddressingMode::History.href(None, "/line"), "/line");
        assert_eq!(AddressingMode::History.href(Some("/app/"), "bar"), "/app/bar");
        assert_eq!(AddressingMode::Hash.href(None, "/pie"), "/#/pie");
        assert_eq!(AddressingMode::Hash.href(Some("/app"), "/pie"), "/app/#/pie");
    }

    #[test]
    fn route_path_reads_pathname_in_history_mode() {
        let mode = AddressingMode::History;
        assert_eq!(mode.route_path(None, "/scatter", ""), "/scatter");
        assert_eq!(mode.route_path(Some("/app"), "/app/scatter", "#x"), "/scatter");
        assert_eq!(mode.route_path(Some("/app"), "/app", ""), "/");
        assert_eq!(mode.route_path(Some("/app"), "/application", ""), "/application");
    }

    #[test]
    fn route_path_reads_fragment_in_hash_mode() {
        let mode = AddressingMode::Hash;
        assert_eq!(mode.route_path(None, "/index.html", "#/bar"), "/bar");
        assert_eq!(mode.route_path(None, "/", "bar"), "/bar");
        assert_eq!(mode.route_path(None, "/", ""), "/");
        assert_eq!(mode.route_path(None, "/", "#"), "/");
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&AddressingMode::Hash).unwrap();
        assert_eq!(json, format!("\"{}\"", AddressingMode::Hash));
    }
}
