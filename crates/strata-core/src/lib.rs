//! # Strata Core
//!
//! Property tree, format decoders and merge engine for Strata Config.
//!
//! This crate holds the format-agnostic half of the configuration
//! resolver: the [`Properties`] store addressed by dotted paths, the
//! decoders that turn `.properties`/YAML/TOML/JSON text into property
//! layers, the `${...}` placeholder resolver, and the order-sensitive
//! merge that folds layers into one property set while detecting
//! structural conflicts.
//!
//! Source discovery (directories, profiles, environment variables) lives
//! in `strata-sources`, which drives the pieces defined here.

pub mod error;
pub mod format;
pub mod merge;
pub mod props;

pub use error::{ConfigError, Result};
pub use format::ConfigFormat;
pub use props::{Properties, PropertySource, Value};
