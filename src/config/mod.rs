//! TOML configuration loading, `source = "..."` include resolution, and
//! resolution against the process environment.
//!
//! A config file is optional. Without one the manager behaves exactly as the
//! environment dictates: project id from `GOOGLE_CLOUD_PROJECT`, structured
//! output when `GAE_DEPLOYMENT_ID` is present.

mod structs;

pub use structs::{EnvConfig, GeneralConfig};

use crate::context::UNKNOWN_PROJECT;
use crate::fmt::{ModeSetting, OutputFormat};
use crate::internal;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// An empty file still produces a working config; every field has a default.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub env: EnvConfig,
}

/// What a manager actually runs with once config and environment are combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub project_id: String,
    pub format: OutputFormat,
    pub source_location: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Config::default().resolve_with(|_| None)
    }
}

/// Scans raw TOML for `source = "..."` directives before deserialization.
/// Returns the extracted paths and the remaining TOML content stripped of those lines.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        // `source_location = ...` shares the prefix, so the key must match exactly.
        if let Some((key, value)) = line.trim().split_once('=')
            && key.trim() == "source"
        {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

/// `~` is expanded; relative includes are taken from the including file's directory.
fn resolve_include(base: &Path, include: &str) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(include).into_owned());
    if expanded.is_relative() {
        base.join(expanded)
    } else {
        expanded
    }
}

impl Config {
    /// Loads `<config dir>/gumo/logging.toml`; an absent file means defaults.
    ///
    /// # Errors
    /// No config directory on this platform, or any [`load_from`](Self::load_from) failure.
    pub fn load() -> Result<Self, crate::Error> {
        let config_path = Self::get_config_path()?;
        internal::debug("CONFIG", &format!("Reading {}", config_path.display()));
        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path. `~` is expanded.
    ///
    /// # Errors
    /// Fails on unreadable files, invalid TOML, or an include chain that loops.
    /// A missing file, or a missing include, is not an error.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        Self::load_with_sources(Path::new(&expanded), &mut HashSet::new())
    }

    /// Parses a config from a TOML string. `source` directives are ignored here.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on invalid TOML.
    pub fn from_toml(content: &str) -> Result<Self, crate::Error> {
        let (_, toml_content) = extract_sources(content);
        Ok(toml::from_str(&toml_content)?)
    }

    fn load_with_sources(path: &Path, seen: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                internal::debug(
                    "CONFIG",
                    &format!("No config at {}, environment only", path.display()),
                );
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        // Only files on the current include chain count; diamonds are fine.
        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !seen.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("{} is already being loaded", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let (includes, toml_content) = extract_sources(&content);
        let mut config: Self =
            toml::from_str(&toml_content).map_err(|source| crate::Error::ConfigParse {
                path: Some(path.to_path_buf()),
                source,
            })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for include in includes {
            let include_path = resolve_include(base, &include);
            internal::debug("CONFIG", &format!("Including {}", include_path.display()));
            config.merge(Self::load_with_sources(&include_path, seen)?);
        }

        seen.remove(&canonical);
        Ok(config)
    }

    /// Fills settings the including file left unset from a sourced file.
    /// The including file always wins; `mode = "auto"` counts as unset.
    pub fn merge(&mut self, other: Self) {
        if self.general.project_id.is_none() {
            self.general.project_id = other.general.project_id;
        }
        if self.general.mode == ModeSetting::Auto {
            self.general.mode = other.general.mode;
        }
    }

    /// `<config dir>/gumo/logging.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("gumo").join("logging.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Resolves against the real process environment.
    #[must_use]
    pub fn resolve(&self) -> Settings {
        self.resolve_with(|name| std::env::var(name).ok())
    }

    /// Resolves against an arbitrary environment accessor.
    ///
    /// Project id: non-empty project variable, then `general.project_id`, then
    /// `<unknown-project>`. Format: `auto` is structured iff the platform
    /// variable is present at all, even when empty.
    #[must_use]
    pub fn resolve_with(&self, lookup: impl Fn(&str) -> Option<String>) -> Settings {
        let project_id = lookup(&self.env.project_var)
            .filter(|id| !id.is_empty())
            .or_else(|| self.general.project_id.clone())
            .unwrap_or_else(|| UNKNOWN_PROJECT.to_string());

        let format = match self.general.mode {
            ModeSetting::Structured => OutputFormat::Structured,
            ModeSetting::Text => OutputFormat::Text,
            ModeSetting::Auto => {
                OutputFormat::from_structured(lookup(&self.env.platform_var).is_some())
            }
        };

        internal::debug(
            "CONFIG",
            &format!("project={project_id} structured={}", format.is_structured()),
        );

        Settings {
            project_id,
            format,
            source_location: self.general.source_location,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::extract_sources;

    #[test]
    fn source_location_key_is_not_an_include() {
        let (sources, rest) = extract_sources("source = \"a.toml\"\nsource_location = false\n");
        assert_eq!(sources, vec!["a.toml".to_string()]);
        assert_eq!(rest, "source_location = false\n");
    }
}
