//! # Strata Sources
//!
//! Property source discovery and bootstrap resolution for Strata Config.
//!
//! This crate turns the pieces in `strata-core` into a bootstrap
//! resolver: it ingests `GS_*` environment variables into the dotted
//! property namespace, locates configuration files by config type and
//! active profile, and folds every layer (system, environment, local
//! files, remote-mirrored files) into the single property set an
//! application starts from.
//!
//! ## Example
//!
//! ```no_run
//! use strata_sources::{AppConfig, EnvVars, SysConfig};
//!
//! # fn main() -> Result<(), strata_sources::SourceError> {
//! let sys = SysConfig::new();
//! let env = EnvVars::from_os();
//! let props = AppConfig::new().refresh(&sys, &env)?;
//! println!("app name: {:?}", props.get("spring.app.name"));
//! # Ok(())
//! # }
//! ```
//!
//! Resolution is fail-fast by design: an unresolved placeholder, a
//! decode failure or a structural merge conflict aborts the run, and a
//! failing run is expected to prevent application startup.

pub mod bootstrap;
pub mod env;
pub mod error;
pub mod sources;
pub mod task;

// Re-exports
pub use bootstrap::{AppConfig, BootConfig, SysConfig};
pub use env::{EnvVars, ENV_PREFIX};
pub use error::{Result, SourceError};
pub use sources::{ConfigType, PropertySources, ACTIVE_PROFILES_KEY};
pub use task::{spawn, TaskHandle};

// Re-export strata_core for consumers
pub use strata_core;
