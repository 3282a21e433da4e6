//! Property source location.
//!
//! Computes which configuration files a resolution run should consult:
//! the profile-aware candidate list under the config type's default
//! directory, or explicitly registered extra files and directories.

use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::debug;

use strata_core::format::{decode_file, CANDIDATE_EXTENSIONS};
use strata_core::props::resolver::{resolve_layer, resolve_string};
use strata_core::{Properties, PropertySource};

use crate::error::{Result, SourceError};

/// Property key naming the active profiles, comma-separated.
pub const ACTIVE_PROFILES_KEY: &str = "spring.profiles.active";

/// Classification of a source set: local files or remote-mirrored files.
///
/// Each type carries its own default search directory and the property
/// key that overrides it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigType {
    Local,
    Remote,
}

impl ConfigType {
    /// Returns the default search directory for this type.
    pub fn default_dir(&self) -> &'static str {
        match self {
            ConfigType::Local => "./conf",
            ConfigType::Remote => "./conf/remote",
        }
    }

    /// Returns the property key that overrides the default directory.
    pub fn override_key(&self) -> &'static str {
        match self {
            ConfigType::Local => "spring.app.config-local.dir",
            ConfigType::Remote => "spring.app.config-remote.dir",
        }
    }

    /// Returns the type tag as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigType::Local => "local",
            ConfigType::Remote => "remote",
        }
    }
}

impl std::fmt::Display for ConfigType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigType {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "local" => Ok(ConfigType::Local),
            "remote" => Ok(ConfigType::Remote),
            other => Err(SourceError::UnknownConfigType(other.to_string())),
        }
    }
}

/// Working state of the locator for one config type.
///
/// Registries start empty; when both stay empty, `load_files` discovers
/// candidates under the (possibly overridden) default directory.
/// Registered extras replace discovery entirely: extra files first in
/// registration order, then each extra directory expanded through the
/// candidate list.
#[derive(Debug)]
pub struct PropertySources {
    config_type: ConfigType,
    app_name: String,
    extra_dirs: Vec<PathBuf>,
    extra_files: Vec<PathBuf>,
}

impl PropertySources {
    /// Creates a locator for the given config type and application name.
    pub fn new(config_type: ConfigType, app_name: impl Into<String>) -> Self {
        Self {
            config_type,
            app_name: app_name.into(),
            extra_dirs: Vec::new(),
            extra_files: Vec::new(),
        }
    }

    /// Returns the config type this locator serves.
    pub fn config_type(&self) -> ConfigType {
        self.config_type
    }

    /// Returns the registered extra directories.
    pub fn extra_dirs(&self) -> &[PathBuf] {
        &self.extra_dirs
    }

    /// Returns the registered extra files.
    pub fn extra_files(&self) -> &[PathBuf] {
        &self.extra_files
    }

    /// Registers an extra directory to expand at load time.
    ///
    /// A missing path is registered anyway; optional override
    /// directories are allowed to be absent and are skipped at load. A
    /// path that exists but is not a directory, or a failing filesystem
    /// check, is operator misconfiguration and fails fatally.
    pub fn add_dir(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(SourceError::not_a_directory(path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(SourceError::stat(path, e)),
        }
        self.extra_dirs.push(path);
        Ok(())
    }

    /// Registers an extra file to load.
    ///
    /// Validation mirrors [`PropertySources::add_dir`].
    pub fn add_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        match std::fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            Ok(_) => return Err(SourceError::not_a_file(path)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(SourceError::stat(path, e)),
        }
        self.extra_files.push(path);
        Ok(())
    }

    /// Clears both registries, for reuse between independent runs.
    pub fn reset(&mut self) {
        self.extra_dirs.clear();
        self.extra_files.clear();
    }

    /// Computes the directory to search.
    ///
    /// The config type's default applies unless the type's override key
    /// is present in `props`, in which case its placeholder-resolved
    /// value replaces the default.
    pub fn default_dir(&self, props: &Properties) -> Result<String> {
        match props.get(self.config_type.override_key()) {
            Some(raw) => {
                let dir = resolve_string(raw, |key| props.get(key).map(str::to_string))?;
                Ok(dir)
            }
            None => Ok(self.config_type.default_dir().to_string()),
        }
    }

    /// Builds the candidate file list for one base directory.
    ///
    /// Base filenames cycle through every supported extension in
    /// precedence order, followed by the same cycle for each active
    /// profile (`<appName>-<profile>.<ext>`), in the order profiles are
    /// listed under `spring.profiles.active`.
    pub fn candidate_files(&self, dir: impl AsRef<Path>, props: &Properties) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();

        let mut names = vec![self.app_name.clone()];
        if let Some(raw) = props.get(ACTIVE_PROFILES_KEY) {
            let profiles = resolve_string(raw, |key| props.get(key).map(str::to_string))?;
            for profile in profiles.split(',') {
                let profile = profile.trim();
                if !profile.is_empty() {
                    names.push(format!("{}-{}", self.app_name, profile));
                }
            }
        }

        let mut files = Vec::with_capacity(names.len() * CANDIDATE_EXTENSIONS.len());
        for name in &names {
            for ext in CANDIDATE_EXTENSIONS {
                files.push(dir.join(format!("{name}.{ext}")));
            }
        }
        Ok(files)
    }

    /// Discovers, decodes and resolves every available file layer.
    ///
    /// Candidates that do not exist are skipped; every existing candidate
    /// is decoded per its extension and its string leaves resolved
    /// against its own tree first, then `props`. Any decode or resolve
    /// failure aborts the whole call.
    pub fn load_files(&self, props: &Properties) -> Result<Vec<PropertySource>> {
        let mut candidates = Vec::new();
        if self.extra_files.is_empty() && self.extra_dirs.is_empty() {
            let dir = self.default_dir(props)?;
            candidates = self.candidate_files(&dir, props)?;
        } else {
            for file in &self.extra_files {
                candidates.push(resolve_path(file, props)?);
            }
            for dir in &self.extra_dirs {
                let dir = resolve_path(dir, props)?;
                candidates.extend(self.candidate_files(&dir, props)?);
            }
        }

        let mut sources = Vec::new();
        for path in candidates {
            match std::fs::metadata(&path) {
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => continue,
                Err(e) => return Err(SourceError::stat(path, e)),
            }
            debug!(path = %path.display(), "loading config file");
            let mut layer = decode_file(&path).map_err(SourceError::from)?;
            resolve_layer(&mut layer, Some(props))?;
            sources.push(PropertySource::new(path.display().to_string(), layer));
        }
        debug!(count = sources.len(), config_type = %self.config_type, "loaded property sources");
        Ok(sources)
    }
}

/// Resolves placeholders inside a registered path.
fn resolve_path(path: &Path, props: &Properties) -> Result<PathBuf> {
    let raw = path.to_string_lossy();
    let resolved = resolve_string(&raw, |key| props.get(key).map(str::to_string))?;
    Ok(PathBuf::from(resolved))
}
