use strata_core::merge::{fold, fold_sources};
use strata_core::props::resolver::resolve_layer;
use strata_core::Properties;

mod common;

#[test]
fn test_agreeing_layers_merge() {
    // Two layers asserting the same path with the same scalar value.
    let mut target = common::props(&[("spring.app.name", "demo")]);
    fold(&mut target, &common::props(&[("spring.app.name", "demo")])).unwrap();
    assert_eq!(target.get("spring.app.name"), Some("demo"));
}

#[test]
fn test_scalar_ancestor_conflict() {
    // A layer asserting `a` as a scalar conflicts with one treating `a`
    // as a container, whichever order they fold in.
    let mut target = common::props(&[("a", "a")]);
    let err = fold(&mut target, &common::props(&[("a.b", "a.b")])).unwrap_err();
    assert_eq!(err.to_string(), "property conflict at path a.b");

    let mut target = common::props(&[("a.b", "a.b")]);
    let err = fold(&mut target, &common::props(&[("a", "a")])).unwrap_err();
    assert_eq!(err.to_string(), "property conflict at path a");
}

#[test]
fn test_reassertion_gives_priority() {
    // Environment-style layering: the override layer folds first (so
    // discovery can read it), files fold over it, then it is re-asserted
    // so its values win at identical scalar paths.
    let env = common::layer("env", &[("http.server.addr", "127.0.0.1:9090")]);
    let file = common::layer(
        "app.properties",
        &[
            ("http.server.addr", "0.0.0.0:8080"),
            ("spring.app.name", "demo"),
        ],
    );

    let mut target = Properties::new();
    fold_sources(&mut target, [&env, &file, &env]).unwrap();

    assert_eq!(target.get("http.server.addr"), Some("127.0.0.1:9090"));
    assert_eq!(target.get("spring.app.name"), Some("demo"));
}

#[test]
fn test_priority_never_resolves_structure() {
    // Re-assertion wins scalar disagreements, but a structural clash is
    // still a conflict even when the "winning" layer folds last.
    let env = common::layer("env", &[("http.server.addr", "0.0.0.0:8080")]);
    let file = common::layer("app.yaml", &[("http.server[0].addr", "0.0.0.0:8081")]);

    let mut target = Properties::new();
    let err = fold_sources(&mut target, [&env, &file]).unwrap_err();
    assert_eq!(
        err.to_string(),
        "property conflict at path http.server[0].addr"
    );
}

#[test]
fn test_merged_set_resolves_across_layers() {
    // A value in one layer may reference a property introduced by another;
    // the closing resolution pass sees the union.
    let defaults = common::layer("defaults", &[("app.port", "8080")]);
    let file = common::layer("app.properties", &[("app.addr", "0.0.0.0:${app.port}")]);

    let mut target = Properties::new();
    fold_sources(&mut target, [&defaults, &file]).unwrap();
    resolve_layer(&mut target, None).unwrap();

    assert_eq!(target.get("app.addr"), Some("0.0.0.0:8080"));
}
