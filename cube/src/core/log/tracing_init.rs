// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{DisplayPreference, JsonEventFormatter, TracingConfig, WriterConfig,
            rolling_file_appender_impl};
use crate::ok;
use miette::IntoDiagnostic;
use ordermap::OrderMap;
use tracing::subscriber::DefaultGuard;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

macro_rules! create_fmt {
    ($context:expr) => {
        tracing_subscriber::fmt::layer()
            .with_ansi(false)
            .event_format(JsonEventFormatter::new($context))
    };
}

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs a global subscriber. Does nothing when the level filter is
/// [`LevelFilter::OFF`].
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return ok!();
    }

    it.install_global()
}

/// Thread local subscriber, active until the returned guard is dropped. This is what
/// tests use. Returns [`None`] when the level filter is [`LevelFilter::OFF`].
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_initialize_logging_thread_local(
    options: impl Into<TracingConfig>,
) -> miette::Result<Option<DefaultGuard>> {
    let it: TracingConfig = options.into();

    // Early return if the level filter is off.
    if matches!(it.get_level_filter(), LevelFilter::OFF) {
        return Ok(None);
    }

    it.install_thread_local().map(Some)
}

impl TracingConfig {
    /// # Errors
    ///
    /// If the log file can't be created, or a global subscriber is already installed.
    pub fn install_global(self) -> miette::Result<()> {
        let layers = try_create_layers(self)?;
        tracing_subscriber::registry()
            .with(layers)
            .try_init()
            .into_diagnostic()
    }

    /// # Errors
    ///
    /// If the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<DefaultGuard> {
        let layers = try_create_layers(self)?;
        let subscriber = tracing_subscriber::registry().with(layers);
        ok!(tracing::subscriber::set_default(subscriber))
    }
}

/// Level filter, followed by a display layer and / or a file layer depending on the
/// [`WriterConfig`].
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();
    let context = tracing_config.context;

    let mut return_it: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter)];

    if let Some(layer) =
        try_create_display_layer(level_filter, writer_config.clone(), context.clone())
    {
        return_it.push(layer);
    }

    if let Some(layer) = try_create_file_layer(level_filter, writer_config, context)? {
        return_it.push(layer);
    }

    Ok(return_it)
}

#[must_use]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
    context: OrderMap<String, String>,
) -> Option<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!(context);

    match writer_config {
        WriterConfig::DisplayAndFile(display_pref, _)
        | WriterConfig::Display(display_pref) => match display_pref {
            DisplayPreference::Stdout => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stdout)
                    .with_filter(level_filter),
            )),
            DisplayPreference::Stderr => Some(Box::new(
                fmt_layer
                    .with_writer(std::io::stderr)
                    .with_filter(level_filter),
            )),
        },
        WriterConfig::None | WriterConfig::File(_) => None,
    }
}

/// # Errors
///
/// If the log file can't be created.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
    context: OrderMap<String, String>,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let fmt_layer = create_fmt!(context);

    Ok(match writer_config {
        WriterConfig::DisplayAndFile(_, tracing_log_file_path_and_prefix)
        | WriterConfig::File(tracing_log_file_path_and_prefix) => {
            let file =
                rolling_file_appender_impl::try_create(&tracing_log_file_path_and_prefix)?;
            Some(Box::new(
                fmt_layer.with_writer(file).with_filter(level_filter),
            ))
        }
        WriterConfig::None | WriterConfig::Display(_) => None,
    })
}
