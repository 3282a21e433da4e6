use strata_core::format::{decode, decode_file, ConfigFormat};
use strata_core::props::resolver::resolve_layer;

mod common;

#[test]
fn test_formats_agree_on_equivalent_content() {
    let from_properties = decode(
        "spring.app.name=demo\nhttp.server.addr=0.0.0.0:8080\n",
        ConfigFormat::Properties,
    )
    .unwrap();
    let from_yaml = decode(
        "spring:\n  app:\n    name: demo\nhttp:\n  server:\n    addr: 0.0.0.0:8080\n",
        ConfigFormat::Yaml,
    )
    .unwrap();
    let from_toml = decode(
        "[spring.app]\nname = \"demo\"\n\n[http.server]\naddr = \"0.0.0.0:8080\"\n",
        ConfigFormat::Toml,
    )
    .unwrap();

    assert_eq!(from_properties.data(), from_yaml.data());
    assert_eq!(from_yaml.data(), from_toml.data());
}

#[test]
fn test_decoded_layer_resolves_against_fallback() {
    // File values may reference properties from an earlier layer, e.g.
    // the environment scan.
    let env = common::props(&[("logging.dir", "/var/log")]);
    let mut layer = decode("app.log-file=${logging.dir}/app.log\n", ConfigFormat::Properties).unwrap();

    resolve_layer(&mut layer, Some(&env)).unwrap();
    assert_eq!(layer.get("app.log-file"), Some("/var/log/app.log"));
}

#[test]
fn test_own_tree_shadows_fallback() {
    let env = common::props(&[("logging.dir", "/var/log")]);
    let mut layer = decode(
        "logging.dir=/tmp/log\napp.log-file=${logging.dir}/app.log\n",
        ConfigFormat::Properties,
    )
    .unwrap();

    resolve_layer(&mut layer, Some(&env)).unwrap();
    assert_eq!(layer.get("app.log-file"), Some("/tmp/log/app.log"));
}

#[test]
fn test_decode_file_reports_missing_file() {
    let err = decode_file(std::path::Path::new("./no/such/file.yaml")).unwrap_err();
    assert!(matches!(err, strata_core::ConfigError::Io(_)));
}
