// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use ordermap::OrderMap;
use std::str::FromStr;
use tracing_core::LevelFilter;

/// Environment variable that sets the log level when none is given explicitly.
pub const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Default log file path (and rotated file prefix).
pub const DEFAULT_LOG_FILE_NAME: &str = "rgb_cube_log.jsonl";

/// Where log lines go, and how verbose they are. Convert into this from a
/// [`LevelFilter`], a [`DisplayPreference`] or a [`WriterConfig`] and pass it to
/// [`crate::try_initialize_logging_global`].
///
/// Every line also carries the key/value pairs in `context` (eg: the name of the
/// running command).
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub writer_config: WriterConfig,
    pub level_filter: LevelFilter,
    pub context: OrderMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriterConfig {
    None,
    Display(DisplayPreference),
    File(String /* tracing_log_file_path_and_prefix */),
    DisplayAndFile(
        DisplayPreference,
        String, /* tracing_log_file_path_and_prefix */
    ),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayPreference {
    Stdout,
    Stderr,
}

/// Logs go to stderr (so that they don't mix with rendered output on stdout), at the
/// level given by [`LOG_LEVEL_ENV_VAR`].
impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            writer_config: WriterConfig::Display(DisplayPreference::Stderr),
            level_filter: level_filter_from_env(),
            context: OrderMap::new(),
        }
    }
}

impl From<LevelFilter> for TracingConfig {
    fn from(level_filter: LevelFilter) -> Self {
        Self {
            level_filter,
            ..Default::default()
        }
    }
}

impl From<tracing::Level> for TracingConfig {
    fn from(level: tracing::Level) -> Self { LevelFilter::from_level(level).into() }
}

impl From<DisplayPreference> for TracingConfig {
    fn from(display_preference: DisplayPreference) -> Self {
        WriterConfig::Display(display_preference).into()
    }
}

impl From<WriterConfig> for TracingConfig {
    fn from(writer_config: WriterConfig) -> Self {
        Self {
            writer_config,
            ..Default::default()
        }
    }
}

impl TracingConfig {
    #[must_use]
    pub fn new_display(preferred_display: DisplayPreference) -> Self {
        preferred_display.into()
    }

    #[must_use]
    pub fn new_file(filename: Option<String>) -> Self {
        WriterConfig::File(filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()))
            .into()
    }

    #[must_use]
    pub fn new_file_and_display(
        filename: Option<String>,
        preferred_display: DisplayPreference,
    ) -> Self {
        WriterConfig::DisplayAndFile(
            preferred_display,
            filename.unwrap_or_else(|| DEFAULT_LOG_FILE_NAME.to_string()),
        )
        .into()
    }

    #[must_use]
    pub fn with_level_filter(mut self, level_filter: LevelFilter) -> Self {
        self.level_filter = level_filter;
        self
    }

    #[must_use]
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn get_writer_config(&self) -> WriterConfig { self.writer_config.clone() }

    #[must_use]
    pub fn get_level_filter(&self) -> LevelFilter { self.level_filter }
}

/// Level named by [`LOG_LEVEL_ENV_VAR`], or [`LevelFilter::INFO`] if it is unset or not
/// a level.
#[must_use]
pub fn level_filter_from_env() -> LevelFilter {
    parse_level_filter(std::env::var(LOG_LEVEL_ENV_VAR).ok().as_deref())
}

/// Case insensitive. Besides the [`tracing`] level names (and `off`), the common
/// aliases `warning` and `critical` are accepted.
#[must_use]
pub fn parse_level_filter(value: Option<&str>) -> LevelFilter {
    let Some(value) = value.map(str::trim) else {
        return LevelFilter::INFO;
    };
    if value.eq_ignore_ascii_case("warning") {
        return LevelFilter::WARN;
    }
    if value.eq_ignore_ascii_case("critical") {
        return LevelFilter::ERROR;
    }
    LevelFilter::from_str(value).unwrap_or(LevelFilter::INFO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_eq2;
    use test_case::test_case;

    #[test_case(None, LevelFilter::INFO)]
    #[test_case(Some("debug"), LevelFilter::DEBUG)]
    #[test_case(Some("ERROR"), LevelFilter::ERROR)]
    #[test_case(Some(" Trace "), LevelFilter::TRACE)]
    #[test_case(Some("warning"), LevelFilter::WARN)]
    #[test_case(Some("CRITICAL"), LevelFilter::ERROR)]
    #[test_case(Some("off"), LevelFilter::OFF)]
    #[test_case(Some("chatty"), LevelFilter::INFO)]
    fn test_parse_level_filter(input: Option<&str>, expected: LevelFilter) {
        assert_eq2!(parse_level_filter(input), expected);
    }

    #[test]
    fn test_conversions() {
        let config: TracingConfig = LevelFilter::DEBUG.into();
        assert_eq2!(config.get_level_filter(), LevelFilter::DEBUG);
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::Display(DisplayPreference::Stderr)
        );

        let config = TracingConfig::new_file(None)
            .with_level_filter(LevelFilter::TRACE)
            .with_context("command", "net");
        assert_eq2!(
            config.get_writer_config(),
            WriterConfig::File(DEFAULT_LOG_FILE_NAME.to_string())
        );
        assert_eq2!(config.context.get("command").map(String::as_str), Some("net"));
    }

    #[test]
    #[serial_test::serial]
    fn test_level_filter_from_env() {
        unsafe {
            std::env::set_var(LOG_LEVEL_ENV_VAR, "debug");
            assert_eq2!(level_filter_from_env(), LevelFilter::DEBUG);
            std::env::remove_var(LOG_LEVEL_ENV_VAR);
            assert_eq2!(level_filter_from_env(), LevelFilter::INFO);
        }
    }
}
