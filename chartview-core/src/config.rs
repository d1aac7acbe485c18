//! Router configuration handed to the navigation subsystem.
use crate::error::RouterError;
use crate::mode::AddressingMode;
use crate::table::{RouteTable, chart_routes};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What happens when a requested path matches no route.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Fallback {
    /// Mount nothing.
    #[default]
    Blank,
    /// Mount the not-found page.
    NotFound,
    /// Replace the address with the given route path.
    Redirect(String),
}

impl fmt::Display for Fallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blank => f.write_str("blank"),
            Self::NotFound => f.write_str("not-found"),
            Self::Redirect(path) => write!(f, "redirect:{path}"),
        }
    }
}

impl FromStr for Fallback {
    type Err = RouterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(target) = trimmed.strip_prefix("redirect:") {
            let target = target.trim();
            if target.is_empty() {
                return Err(RouterError::UnknownFallback(s.to_string()));
            }
            return Ok(Self::Redirect(target.to_string()));
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "blank" | "none" => Ok(Self::Blank),
            "not-found" | "notfound" | "404" => Ok(Self::NotFound),
            _ => Err(RouterError::UnknownFallback(s.to_string())),
        }
    }
}

/// Everything the navigation handler needs at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    pub mode: AddressingMode,
    /// Deployment base path (e.g. `/charts`), `None` for root.
    pub base: Option<String>,
    pub fallback: Fallback,
    pub routes: RouteTable,
    /// Reject empty tables and colliding paths at construction. Off by
    /// default: duplicates are tolerated and the first entry wins.
    #[serde(default)]
    pub strict: bool,
}

impl RouterConfig {
    /// The application's configuration: history mode over the chart routes.
    #[must_use]
    pub fn chart_app() -> Self {
        Self {
            mode: AddressingMode::History,
            base: None,
            fallback: Fallback::default(),
            routes: chart_routes(),
            strict: false,
        }
    }

    /// Build the chart configuration from optional textual settings.
    ///
    /// Missing or blank values keep the defaults of [`RouterConfig::chart_app`].
    ///
    /// # Errors
    /// Returns an error when the mode or fallback cannot be parsed.
    pub fn from_settings(
        mode: Option<&str>,
        base: Option<&str>,
        fallback: Option<&str>,
    ) -> Result<Self, RouterError> {
        let mut config = Self::chart_app();
        if let Some(mode) = non_blank(mode) {
            config.mode = mode.parse()?;
        }
        if let Some(fallback) = non_blank(fallback) {
            config.fallback = fallback.parse()?;
        }
        Ok(config.with_base(base.unwrap_or("")))
    }

    #[must_use]
    pub fn with_mode(mut self, mode: AddressingMode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the deployment base; surrounding whitespace and trailing slashes are dropped.
    #[must_use]
    pub fn with_base(mut self, base: &str) -> Self {
        self.base = normalize_base(base);
        self
    }

    #[must_use]
    pub fn with_fallback(mut self, fallback: Fallback) -> Self {
        self.fallback = fallback;
        self
    }

    #[must_use]
    pub fn with_routes(mut self, routes: RouteTable) -> Self {
        self.routes = routes;
        self
    }

    #[must_use]
    pub const fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::chart_app()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn normalize_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else if base.starts_with('/') {
        Some(base.to_string())
    } else {
        Some(format!("/{base}"))
    }
}
