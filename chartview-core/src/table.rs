//! The static route table mapping URL paths to chart views.
use crate::view::ViewId;
use serde::{Deserialize, Serialize};

/// A single association between a path literal and the view it mounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteEntry {
    pub path: String,
    pub view: ViewId,
}

impl RouteEntry {
    #[must_use]
    pub fn new(path: impl Into<String>, view: ViewId) -> Self {
        Self {
            path: path.into(),
            view,
        }
    }
}

/// Ordered list of routes. Order matters: the first matching entry wins.
///
/// The table does not enforce path uniqueness itself; see
/// [`crate::Navigation::new`] for validation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    #[must_use]
    pub const fn new(entries: Vec<RouteEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RouteEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    /// First entry in table order matching `path`.
    ///
    /// Uses the same loose comparison as [`crate::Navigation::resolve`]: any
    /// query or fragment is dropped, case is ignored and one trailing slash is
    /// tolerated.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<&RouteEntry> {
        let key = match_key(path);
        self.entries
            .iter()
            .find(|entry| match_key(&entry.path) == key)
    }

    /// First entry mounting `view`.
    #[must_use]
    pub fn entry_for(&self, view: ViewId) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.view == view)
    }
}

impl<'a> IntoIterator for &'a RouteTable {
    type Item = &'a RouteEntry;
    type IntoIter = std::slice::Iter<'a, RouteEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl FromIterator<RouteEntry> for RouteTable {
    fn from_iter<I: IntoIterator<Item = RouteEntry>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Comparison key for a path: query and fragment removed, one trailing slash
/// dropped, lowercased, rooted at `/`.
pub(crate) fn match_key(path: &str) -> String {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let path = &path[..end];
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    let mut key = trimmed.to_ascii_lowercase();
    if !key.starts_with('/') {
        key.insert(0, '/');
    }
    key
}

/// The application's route table: one entry per chart view.
#[must_use]
pub fn chart_routes() -> RouteTable {
    RouteTable::new(vec![
        RouteEntry::new("/line", ViewId::Line),
        RouteEntry::new("/bar", ViewId::Bar),
        RouteEntry::new("/scatter", ViewId::Scatter),
        RouteEntry::new("/pie", ViewId::Pie),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn chart_routes_has_four_entries() {
        assert_eq!(chart_routes().len(), 4);
    }

    #[test]
    fn each_path_maps_to_its_view_exactly_once() {
        let table = chart_routes();
        let expected = [
            ("/line", ViewId::Line),
            ("/bar", ViewId::Bar),
            ("/scatter", ViewId::Scatter),
            ("/pie", ViewId::Pie),
        ];
        for (path, view) in expected {
            let hits: Vec<_> = table.iter().filter(|e| e.path == path).collect();
            assert_eq!(hits.len(), 1, "{path} should appear once");
            assert_eq!(hits[0].view, view);
        }
    }

    #[test]
    fn paths_are_unique() {
        let table = chart_routes();
        let unique: HashSet<_> = table.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(unique.len(), table.len());
    }

    #[test]
    fn get_returns_first_match_on_duplicates() {
        let table: RouteTable = [
            RouteEntry::new("/line", ViewId::Line),
            RouteEntry::new("/line", ViewId::Bar),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.get("/line").map(|e| e.view), Some(ViewId::Line));
        assert!(table.get("/pie").is_none());
    }

    #[test]
    fn get_matches_loosely() {
        let table = chart_routes();
        assert_eq!(table.get("/LINE").map(|e| e.view), Some(ViewId::Line));
        assert_eq!(table.get("/bar/").map(|e| e.view), Some(ViewId::Bar));
        assert_eq!(table.get("/pie?slice=2").map(|e| e.view), Some(ViewId::Pie));
        assert!(table.get("/line/extra").is_none());
    }

    #[test]
    fn match_key_normalizes_requests() {
        assert_eq!(match_key("/Line/"), "/line");
        assert_eq!(match_key("/bar?x=1#top"), "/bar");
        assert_eq!(match_key("pie"), "/pie");
        assert_eq!(match_key("/"), "/");
        assert_eq!(match_key(""), "/");
    }

    #[test]
    fn serializes_as_plain_list() {
        let json = serde_json::to_string(&chart_routes()).unwrap();
        assert_eq!(
            json,
            r#"[{"path":"/line","view":"line"},{"path":"/bar","view":"bar"},{"path":"/scatter","view":"scatter"},{"path":"/pie","view":"pie"}]"#
        );
    }
}
