use anyhow::Result;
use chartview_core::{Navigation, Resolution, ViewId};
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteRow {
    pub path: String,
    pub view: ViewId,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveRow {
    pub path: String,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewId>,
}

impl ResolveRow {
    #[must_use]
    pub fn is_match(&self) -> bool {
        self.outcome == "view"
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub mode: String,
    pub base: Option<String>,
    pub fallback: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub resolutions: Vec<ResolveRow>,
}

impl Report {
    #[must_use]
    pub fn unmatched(&self) -> usize {
        self.resolutions.iter().filter(|r| !r.is_match()).count()
    }
}

#[must_use]
pub fn build_report(navigation: &Navigation, list: bool, paths: &[String]) -> Report {
    let routes = if list {
        navigation
            .routes()
            .iter()
            .map(|entry| RouteRow {
                path: entry.path.clone(),
                view: entry.view,
                href: navigation
                    .mode()
                    .href(navigation.base(), &entry.path),
            })
            .collect()
    } else {
        Vec::new()
    };

    let resolutions = paths
        .iter()
        .map(|path| {
            let resolution = navigation.resolve(path);
            let (outcome, view) = match resolution {
                Resolution::View(view) => ("view", Some(view)),
                Resolution::Blank => ("blank", None),
                Resolution::NotFound => ("not-found", None),
                Resolution::Redirect(view) => ("redirect", Some(view)),
            };
            log::debug!("{path} -> {resolution:?}");
            ResolveRow {
                path: path.clone(),
                outcome,
                view,
            }
        })
        .collect();

    Report {
        mode: navigation.mode().to_string(),
        base: navigation.base().map(str::to_string),
        fallback: navigation.fallback().to_string(),
        routes,
        resolutions,
    }
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn generate_json_report(out: &mut dyn Write, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// # Errors
/// Returns an error if writing to `out` fails.
pub fn generate_console_report(out: &mut dyn Write, report: &Report) -> Result<()> {
    writeln!(
        out,
        "mode: {}  base: {}  fallback: {}",
        report.mode.bright_white().bold(),
        report.base.as_deref().unwrap_or("/"),
        report.fallback
    )?;

    if !report.routes.is_empty() {
        writeln!(out, "{}", "Routes:".bright_cyan().bold())?;
        for row in &report.routes {
            writeln!(out, "  {:12} -> {:8} {}", row.path, row.view.to_string(), row.href.dimmed())?;
        }
    }

    if !report.resolutions.is_empty() {
        writeln!(out, "{}", "Resolutions:".bright_cyan().bold())?;
        for row in &report.resolutions {
            let target = row.view.map(|v| v.to_string()).unwrap_or_default();
            if row.is_match() {
                writeln!(out, "  ✅ {:12} -> {}", row.path, target.green())?;
            } else {
                writeln!(
                    out,
                    "  ⚠️  {:12} -> {} {}",
                    row.path,
                    row.outcome.yellow(),
                    target
                )?;
            }
        }
    }
    Ok(())
}
