use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::props::Properties;

pub mod json;
pub mod properties;
pub mod toml;
pub mod yaml;

/// File extensions in candidate-enumeration precedence order.
///
/// Candidate file lists cycle through these for every base name, so a
/// `.properties` file is consulted before a `.yaml` file of the same name.
pub const CANDIDATE_EXTENSIONS: [&str; 6] = ["properties", "yaml", "yml", "toml", "tml", "json"];

/// Supported configuration formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Properties,
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Returns the file extensions associated with this format.
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            ConfigFormat::Properties => &["properties"],
            ConfigFormat::Yaml => &["yaml", "yml"],
            ConfigFormat::Toml => &["toml", "tml"],
            ConfigFormat::Json => &["json"],
        }
    }

    /// Detects the format from a file extension (without dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "properties" => Some(ConfigFormat::Properties),
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" | "tml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }

    /// Detects the format from a file path based on extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }
}

/// A trait for decoding configuration text into a property layer.
pub trait FormatParser {
    /// Parses the input string into a property store.
    fn parse(&self, input: &str) -> Result<Properties>;
}

/// Decodes content in the given format.
pub fn decode(content: &str, format: ConfigFormat) -> Result<Properties> {
    match format {
        ConfigFormat::Properties => properties::PropertiesFormat.parse(content),
        ConfigFormat::Yaml => yaml::YamlFormat.parse(content),
        ConfigFormat::Toml => toml::TomlFormat.parse(content),
        ConfigFormat::Json => json::JsonFormat.parse(content),
    }
}

/// Reads and decodes a file, dispatching on its extension.
///
/// Parse failures are reported against the file path; there is no format
/// auto-detection beyond the extension.
pub fn decode_file(path: &Path) -> Result<Properties> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| {
        ConfigError::UnsupportedFormat(
            path.extension()
                .and_then(|e| e.to_str())
                .unwrap_or("unknown")
                .to_string(),
        )
    })?;

    let content = std::fs::read_to_string(path)?;
    decode(&content, format).map_err(|e| match e {
        ConfigError::Parse { reason, .. } => ConfigError::parse(path, reason),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_extension() {
        assert_eq!(
            ConfigFormat::from_extension("properties"),
            Some(ConfigFormat::Properties)
        );
        assert_eq!(ConfigFormat::from_extension("yaml"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("YML"), Some(ConfigFormat::Yaml));
        assert_eq!(ConfigFormat::from_extension("toml"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("tml"), Some(ConfigFormat::Toml));
        assert_eq!(ConfigFormat::from_extension("json"), Some(ConfigFormat::Json));
        assert_eq!(ConfigFormat::from_extension("txt"), None);
    }

    #[test]
    fn test_from_path() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("./conf/app.properties")),
            Some(ConfigFormat::Properties)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("app")), None);
    }

    #[test]
    fn candidate_extensions_cover_all_formats() {
        for ext in CANDIDATE_EXTENSIONS {
            let format = ConfigFormat::from_extension(ext).unwrap();
            assert!(format.extensions().contains(&ext));
        }
    }

    #[test]
    fn decode_file_dispatches_on_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".properties")
            .tempfile()
            .unwrap();
        writeln!(file, "spring.app.name=demo").unwrap();

        let props = decode_file(file.path()).unwrap();
        assert_eq!(props.get("spring.app.name"), Some("demo"));
    }

    #[test]
    fn decode_file_rejects_unknown_extension() {
        let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        let err = decode_file(file.path()).unwrap_err();
        assert_eq!(err.to_string(), "unsupported format: txt");
    }

    #[test]
    fn decode_file_names_failing_file() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, "{{ not json").unwrap();

        let err = decode_file(file.path()).unwrap_err();
        assert!(err.is_parse_error());
        assert!(err.to_string().contains("parse error in"));
    }
}
