use crate::error::{ConfigError, Result};
use crate::format::FormatParser;
use crate::props::Properties;

/// Java-style properties file decoder.
///
/// Lines are `key=value` or `key: value`; `#` and `!` start comments.
/// Keys are dotted property paths and may carry `[n]` index segments, so
/// a single file can populate nested maps and sequences. Routing every
/// line through [`Properties::set`] means a file that contradicts its own
/// structure (`a=1` and `a.b=2`) fails with a merge conflict at decode
/// time.
pub struct PropertiesFormat;

impl FormatParser for PropertiesFormat {
    fn parse(&self, input: &str) -> Result<Properties> {
        let mut props = Properties::new();

        for (line_num, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let Some((key, value)) = line.split_once(['=', ':']) else {
                return Err(ConfigError::parse(
                    "properties",
                    format!("invalid syntax at line {}: missing separator", line_num + 1),
                ));
            };
            props.set(key.trim(), value.trim())?;
        }

        Ok(props)
    }
}
