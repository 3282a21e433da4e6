//! Bootstrap resolution entry points.
//!
//! [`BootConfig`] and [`AppConfig`] assemble the layered property set an
//! application starts from. Both fold the same way: the caller-owned
//! system layer and the environment layer first (so discovery can read
//! directory overrides and active profiles), discovered file layers in
//! candidate order, then the system and environment layers re-asserted
//! on top so their values win at identical scalar paths. A closing
//! placeholder pass resolves every remaining string leaf.
//!
//! There is no process-wide configuration singleton: the system layer is
//! an explicit [`SysConfig`] constructed per resolution run and passed
//! into `refresh` together with an [`EnvVars`] snapshot.

use tracing::debug;

use strata_core::props::resolver::resolve_layer;
use strata_core::{merge, Properties};

use crate::env::EnvVars;
use crate::error::Result;
use crate::sources::{ConfigType, PropertySources};

/// Base name of the application's configuration files.
const APP_NAME: &str = "app";

/// Programmatic pre-seed layer, the explicit replacement for the
/// original process-wide system configuration.
#[derive(Debug, Clone, Default)]
pub struct SysConfig {
    props: Properties,
}

impl SysConfig {
    /// Creates an empty system layer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property in the system layer.
    pub fn set(&mut self, path: &str, value: impl Into<String>) -> Result<()> {
        self.props.set(path, value)?;
        Ok(())
    }

    /// Reads a property from the system layer.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.props.get(path)
    }

    /// Returns the layer's properties.
    pub fn props(&self) -> &Properties {
        &self.props
    }
}

/// Boot-phase configuration: local sources only.
#[derive(Debug)]
pub struct BootConfig {
    local: PropertySources,
}

impl BootConfig {
    /// Creates a boot configuration resolver.
    pub fn new() -> Self {
        Self {
            local: PropertySources::new(ConfigType::Local, APP_NAME),
        }
    }

    /// Returns the local source set for extra registrations.
    pub fn local_mut(&mut self) -> &mut PropertySources {
        &mut self.local
    }

    /// Resolves the boot property set.
    pub fn refresh(&self, sys: &SysConfig, env: &EnvVars) -> Result<Properties> {
        refresh(&[&self.local], sys, env)
    }
}

impl Default for BootConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Application configuration: local sources, then remote-mirrored
/// sources on top.
#[derive(Debug)]
pub struct AppConfig {
    local: PropertySources,
    remote: PropertySources,
}

impl AppConfig {
    /// Creates an application configuration resolver.
    pub fn new() -> Self {
        Self {
            local: PropertySources::new(ConfigType::Local, APP_NAME),
            remote: PropertySources::new(ConfigType::Remote, APP_NAME),
        }
    }

    /// Returns the local source set for extra registrations.
    pub fn local_mut(&mut self) -> &mut PropertySources {
        &mut self.local
    }

    /// Returns the remote source set for extra registrations.
    pub fn remote_mut(&mut self) -> &mut PropertySources {
        &mut self.remote
    }

    /// Resolves the application property set.
    pub fn refresh(&self, sys: &SysConfig, env: &EnvVars) -> Result<Properties> {
        refresh(&[&self.local, &self.remote], sys, env)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn refresh(sources: &[&PropertySources], sys: &SysConfig, env: &EnvVars) -> Result<Properties> {
    let env_layer = env.to_layer()?;

    let mut target = Properties::new();
    merge::fold(&mut target, sys.props())?;
    merge::fold(&mut target, &env_layer)?;

    // Discovery for every source set reads the same system/environment
    // state; file layers only fold in afterwards.
    let mut layers = Vec::new();
    for source_set in sources {
        layers.extend(source_set.load_files(&target)?);
    }
    for layer in &layers {
        debug!(source = %layer.name, "folding property source");
        merge::fold(&mut target, &layer.props)?;
    }

    merge::fold(&mut target, sys.props())?;
    merge::fold(&mut target, &env_layer)?;

    resolve_layer(&mut target, None)?;
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_without_sources_yields_env_and_sys() {
        let mut sys = SysConfig::new();
        sys.set("from.sys", "1").unwrap();
        let env: EnvVars = [("GS_FROM_ENV", "2")].into_iter().collect();

        // No ./conf directory in the test cwd, so only the two layers fold.
        let props = BootConfig::new().refresh(&sys, &env).unwrap();
        assert_eq!(props.get("from.sys"), Some("1"));
        assert_eq!(props.get("from.env"), Some("2"));
    }

    #[test]
    fn test_env_overrides_sys() {
        let mut sys = SysConfig::new();
        sys.set("shared.key", "sys").unwrap();
        assert_eq!(sys.get("shared.key"), Some("sys"));
        let env: EnvVars = [("GS_SHARED_KEY", "env")].into_iter().collect();

        let props = BootConfig::new().refresh(&sys, &env).unwrap();
        assert_eq!(props.get("shared.key"), Some("env"));
    }

    #[test]
    fn test_refresh_reports_env_collision() {
        let env: EnvVars = [("GS_A", "a"), ("GS_A_B", "a.b")].into_iter().collect();
        let err = BootConfig::new().refresh(&SysConfig::new(), &env).unwrap_err();
        assert_eq!(err.to_string(), "property conflict at path a.b");
    }
}
