//! Compile-time configuration for the router and logging.
//!
//! Values come from environment variables captured at build time:
//!
//! - `PUBLIC_URL`: deployment base path (e.g. `/charts` on GitHub Pages)
//! - `CHARTVIEW_ROUTER_MODE`: `history` (default) or `hash`
//! - `CHARTVIEW_FALLBACK`: `blank` (default), `not-found` or `redirect:<path>`
//! - `CHARTVIEW_LOG`: `error`, `warn`, `info` (default), `debug` or `trace`
use chartview_core::{RouterConfig, RouterError};

/// Router configuration for this build.
///
/// # Errors
/// Returns an error if `CHARTVIEW_ROUTER_MODE` or `CHARTVIEW_FALLBACK` hold
/// values the router does not recognize.
pub fn router_config() -> Result<RouterConfig, RouterError> {
    RouterConfig::from_settings(
        option_env!("CHARTVIEW_ROUTER_MODE"),
        option_env!("PUBLIC_URL"),
        option_env!("CHARTVIEW_FALLBACK"),
    )
}

#[must_use]
pub fn log_level() -> log::Level {
    log_level_from(option_env!("CHARTVIEW_LOG"))
}

fn log_level_from(value: Option<&str>) -> log::Level {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(log::Level::Info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chartview_core::{AddressingMode, Fallback};

    #[test]
    fn default_build_uses_history_mode_and_blank_fallback() {
        let config = router_config().expect("default settings are valid");
        assert_eq!(config.mode, AddressingMode::History);
        assert_eq!(config.fallback, Fallback::Blank);
        assert_eq!(config.routes.len(), 4);
    }

    #[test]
    fn router_base_is_none_by_default() {
        assert_eq!(router_config().unwrap().base, None);
    }

    #[test]
    fn log_level_parses_or_defaults() {
        assert_eq!(log_level_from(Some("debug")), log::Level::Debug);
        assert_eq!(log_level_from(Some("WARN")), log::Level::Warn);
        assert_eq!(log_level_from(Some("chatty")), log::Level::Info);
        assert_eq!(log_level_from(None), log::Level::Info);
    }
}
