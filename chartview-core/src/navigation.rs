//! Navigation handler: validates a router configuration once and matches
//! requested paths against its route table.
use crate::config::{Fallback, RouterConfig};
use crate::error::RouterError;
use crate::mode::AddressingMode;
use crate::table::{RouteEntry, RouteTable, match_key};
use crate::view::ViewId;
use regex::Regex;
use std::sync::OnceLock;

static PATH_LITERAL: OnceLock<Option<Regex>> = OnceLock::new();

fn is_path_literal(path: &str) -> bool {
    PATH_LITERAL
        .get_or_init(|| Regex::new(r"^/[A-Za-z0-9._~\-/]*$").ok())
        .as_ref()
        .is_some_and(|re| re.is_match(path))
}

/// Outcome of matching a requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A route matched; mount its view.
    View(ViewId),
    /// Nothing matched and the fallback mounts nothing.
    Blank,
    /// Nothing matched; show the not-found page.
    NotFound,
    /// Nothing matched; replace the address with the route for this view.
    Redirect(ViewId),
}

impl Resolution {
    #[must_use]
    pub const fn view(self) -> Option<ViewId> {
        match self {
            Self::View(view) => Some(view),
            Self::Blank | Self::NotFound | Self::Redirect(_) => None,
        }
    }

    #[must_use]
    pub const fn is_match(self) -> bool {
        matches!(self, Self::View(_))
    }
}

/// The installed navigation handler. One instance is built at startup and
/// shared by reference for the lifetime of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    config: RouterConfig,
    redirect: Option<ViewId>,
}

impl Navigation {
    /// Validate `config` and build the handler.
    ///
    /// Duplicate paths and an empty table are accepted unless
    /// [`RouterConfig::strict`] is set; lookups keep the first matching entry.
    ///
    /// # Errors
    /// Fails on a malformed path literal or a redirect fallback that targets no
    /// route. In strict mode also fails on an empty table or colliding paths.
    pub fn new(config: RouterConfig) -> Result<Self, RouterError> {
        if config.strict && config.routes.is_empty() {
            return Err(RouterError::EmptyTable);
        }

        let mut keys: Vec<String> = Vec::with_capacity(config.routes.len());
        for (index, entry) in config.routes.iter().enumerate() {
            if !is_path_literal(&entry.path) {
                return Err(RouterError::InvalidPath(entry.path.clone()));
            }
            let key = match_key(&entry.path);
            if config.strict {
                if let Some(first) = keys.iter().position(|k| *k == key) {
                    return Err(RouterError::DuplicatePath {
                        path: entry.path.clone(),
                        first,
                        second: index,
                    });
                }
            }
            keys.push(key);
        }

        let redirect = match &config.fallback {
            Fallback::Redirect(target) => {
                let view = config
                    .routes
                    .get(target)
                    .map(|entry| entry.view)
                    .ok_or_else(|| RouterError::UnknownRedirect(target.clone()))?;
                Some(view)
            }
            Fallback::Blank | Fallback::NotFound => None,
        };

        Ok(Self { config, redirect })
    }

    /// Match `path` against the table, applying the fallback when nothing matches.
    ///
    /// Query strings and fragments are ignored, matching is case-insensitive and
    /// a single trailing slash is tolerated.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolution {
        if let Some(entry) = self.config.routes.get(path) {
            return Resolution::View(entry.view);
        }
        match (&self.config.fallback, self.redirect) {
            (Fallback::NotFound, _) => Resolution::NotFound,
            (Fallback::Redirect(_), Some(view)) => Resolution::Redirect(view),
            _ => Resolution::Blank,
        }
    }

    /// Resolve a full browser address according to the configured mode and base.
    #[must_use]
    pub fn resolve_location(&self, pathname: &str, fragment: &str) -> Resolution {
        let path = self
            .config
            .mode
            .route_path(self.config.base.as_deref(), pathname, fragment);
        self.resolve(&path)
    }

    /// Address a link to `view` should use, if the view has a route.
    #[must_use]
    pub fn href(&self, view: ViewId) -> Option<String> {
        self.entry_for(view)
            .map(|entry| self.config.mode.href(self.config.base.as_deref(), &entry.path))
    }

    #[must_use]
    pub fn entry_for(&self, view: ViewId) -> Option<&RouteEntry> {
        self.config.routes.entry_for(view)
    }

    #[must_use]
    pub const fn mode(&self) -> AddressingMode {
        self.config.mode
    }

    #[must_use]
    pub fn base(&self) -> Option<&str> {
        self.config.base.as_deref()
    }

    #[must_use]
    pub const fn fallback(&self) -> &Fallback {
        &self.config.fallback
    }

    #[must_use]
    pub const fn routes(&self) -> &RouteTable {
        &self.config.routes
    }

    #[must_use]
    pub const fn config(&self) -> &RouterConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_literal_pattern_rejects_queries_and_spaces() {
        assert!(is_path_literal("/line"));
        assert!(is_path_literal("/charts/line-2"));
        assert!(!is_path_literal("line"));
        assert!(!is_path_literal("/line?x"));
        assert!(!is_path_literal("/my line"));
    }

    #[test]
    fn resolution_helpers() {
        assert_eq!(Resolution::View(ViewId::Pie).view(), Some(ViewId::Pie));
        assert!(Resolution::View(ViewId::Pie).is_match());
        assert_eq!(Resolution::Redirect(ViewId::Pie).view(), None);
        assert!(!Resolution::NotFound.is_match());
    }
}
