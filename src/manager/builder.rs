//! Stepwise construction for managers that need more than the environment
//! defaults: explicit config, custom sinks, a refresh hook, or a fake environment.

use super::LoggerManager;
use crate::config::{Config, Settings};
use crate::context::LoggerContext;
use crate::fmt::OutputFormat;
use crate::logger::ContextHook;
use crate::sink::{Sink, SinkPair};
use std::sync::Arc;

/// Where settings come from when the manager is built.
enum SettingsSource {
    /// Resolve a config against the process environment.
    Environment(Config),
    /// Resolve a config against a caller-supplied lookup.
    Lookup(Config, Box<dyn Fn(&str) -> Option<String>>),
    Fixed(Settings),
}

pub struct LoggerManagerBuilder {
    source: SettingsSource,
    format_override: Option<OutputFormat>,
    project_override: Option<String>,
    sinks: SinkPair,
    fetch_context: Option<ContextHook>,
}

impl Default for LoggerManagerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerManagerBuilder {
    /// Default config resolved against the process environment, stdout/stderr sinks.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: SettingsSource::Environment(Config::default()),
            format_override: None,
            project_override: None,
            sinks: SinkPair::default(),
            fetch_context: None,
        }
    }

    /// Resolves `config` against the process environment.
    #[must_use]
    pub fn config(mut self, config: &Config) -> Self {
        self.source = SettingsSource::Environment(config.clone());
        self
    }

    /// Resolves `config` against `lookup` instead of the process environment.
    #[must_use]
    pub fn config_with_env<F>(mut self, config: &Config, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String> + 'static,
    {
        self.source = SettingsSource::Lookup(config.clone(), Box::new(lookup));
        self
    }

    /// Skips config resolution entirely.
    #[must_use]
    pub fn settings(mut self, settings: Settings) -> Self {
        self.source = SettingsSource::Fixed(settings);
        self
    }

    /// Forces the rendering mode regardless of platform detection.
    #[must_use]
    pub const fn format(mut self, format: OutputFormat) -> Self {
        self.format_override = Some(format);
        self
    }

    #[must_use]
    pub fn structured(self, structured: bool) -> Self {
        self.format(OutputFormat::from_structured(structured))
    }

    #[must_use]
    pub fn project_id(mut self, project_id: impl Into<String>) -> Self {
        self.project_override = Some(project_id.into());
        self
    }

    /// Destination for `DEBUG` through `WARNING`. Defaults to stdout.
    #[must_use]
    pub fn normal_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks = self.sinks.with_normal(Arc::new(sink));
        self
    }

    /// Destination for `ERROR` and above. Defaults to stderr.
    #[must_use]
    pub fn error_sink(mut self, sink: impl Sink + 'static) -> Self {
        self.sinks = self.sinks.with_error(Arc::new(sink));
        self
    }

    /// Ambient-context accessor polled by every logger on every call.
    /// It must not log through this crate.
    #[must_use]
    pub fn fetch_context<F>(mut self, fetch: F) -> Self
    where
        F: Fn() -> Option<LoggerContext> + Send + Sync + 'static,
    {
        self.fetch_context = Some(Arc::new(fetch));
        self
    }

    #[must_use]
    pub fn build(self) -> LoggerManager {
        let mut settings = match self.source {
            SettingsSource::Environment(config) => config.resolve(),
            SettingsSource::Lookup(config, lookup) => config.resolve_with(lookup),
            SettingsSource::Fixed(settings) => settings,
        };
        if let Some(format) = self.format_override {
            settings.format = format;
        }
        if let Some(project_id) = self.project_override {
            settings.project_id = project_id;
        }

        LoggerManager::from_parts(settings, self.sinks, self.fetch_context)
    }
}
