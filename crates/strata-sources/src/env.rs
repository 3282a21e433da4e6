//! Environment variable ingestion.
//!
//! Variables under the `GS_` prefix flatten into the dotted property
//! namespace: the prefix is stripped, the rest is lower-cased, and
//! underscores become path separators. Hyphens survive inside a segment,
//! so `GS_SPRING_APP_CONFIG-LOCAL_DIR` flattens to
//! `spring.app.config-local.dir`.

use strata_core::Properties;

use crate::error::Result;

/// Environment variable prefix consulted by the ingestor.
pub const ENV_PREFIX: &str = "GS_";

/// A snapshot of environment variables.
///
/// The ingestor never reads the process environment implicitly; callers
/// capture it once with [`EnvVars::from_os`] and pass the snapshot into
/// resolution. Tests build literal snapshots instead of mutating global
/// process state.
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: Vec<(String, String)>,
}

impl EnvVars {
    /// Captures the current process environment.
    pub fn from_os() -> Self {
        Self {
            vars: std::env::vars().collect(),
        }
    }

    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattens the prefixed variables into one property layer.
    ///
    /// Matching names are applied in sorted order, so a structural
    /// collision (`GS_A` with `GS_A_B`) reports deterministically against
    /// the longer path.
    pub fn to_layer(&self) -> Result<Properties> {
        let mut keys: Vec<(String, &str)> = self
            .vars
            .iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(ENV_PREFIX)
                    .map(|rest| (flatten_key(rest), value.as_str()))
            })
            .collect();
        keys.sort();

        let mut layer = Properties::new();
        for (path, value) in keys {
            layer.set(&path, value)?;
        }
        Ok(layer)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Converts a prefix-stripped variable name into a dotted path.
fn flatten_key(name: &str) -> String {
    name.to_lowercase().replace('_', ".")
}
