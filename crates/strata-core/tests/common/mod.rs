#![allow(dead_code)]
use strata_core::{Properties, PropertySource};

/// Helper to create a Properties store from path/value pairs.
/// Panics on conflicts (intended for tests).
pub fn props(pairs: &[(&str, &str)]) -> Properties {
    Properties::from_pairs(pairs.iter().copied()).expect("failed to build test properties")
}

/// Helper to create a named layer from path/value pairs.
pub fn layer(name: &str, pairs: &[(&str, &str)]) -> PropertySource {
    PropertySource::new(name, props(pairs))
}
