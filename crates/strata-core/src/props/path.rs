//! Dotted property path parsing.
//!
//! A path addresses one node in the property tree: map fields are named
//! segments separated by dots, sequence elements are `[n]` index segments
//! appended to the preceding field (`http.server[0].addr`).

use crate::error::{ConfigError, Result};

/// One step of a parsed property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A map field name.
    Key(String),
    /// A sequence index.
    Index(usize),
}

/// Parses a dotted path into its segments.
///
/// # Example
///
/// ```
/// use strata_core::props::path::{parse, Segment};
///
/// let segs = parse("http.server[0].addr").unwrap();
/// assert_eq!(segs[0], Segment::Key("http".into()));
/// assert_eq!(segs[2], Segment::Index(0));
/// ```
pub fn parse(path: &str) -> Result<Vec<Segment>> {
    if path.is_empty() {
        return Err(ConfigError::invalid_path(path, "empty path"));
    }

    let mut segments = Vec::new();
    for part in path.split('.') {
        let (key, brackets) = match part.find('[') {
            Some(i) => (&part[..i], &part[i..]),
            None => (part, ""),
        };

        if key.is_empty() {
            return Err(ConfigError::invalid_path(path, "empty segment"));
        }
        if key.contains(']') {
            return Err(ConfigError::invalid_path(path, "unexpected ']'"));
        }
        segments.push(Segment::Key(key.to_string()));

        let mut rest = brackets;
        while !rest.is_empty() {
            let Some(stripped) = rest.strip_prefix('[') else {
                return Err(ConfigError::invalid_path(path, "expected '['"));
            };
            let Some(end) = stripped.find(']') else {
                return Err(ConfigError::invalid_path(path, "unterminated index"));
            };
            let index: usize = stripped[..end]
                .parse()
                .map_err(|_| ConfigError::invalid_path(path, "non-numeric index"))?;
            segments.push(Segment::Index(index));
            rest = &stripped[end + 1..];
        }
    }

    Ok(segments)
}

/// Renders segments back into canonical dotted form.
pub fn join(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        match segment {
            Segment::Key(key) => {
                if !out.is_empty() {
                    out.push('.');
                }
                out.push_str(key);
            }
            Segment::Index(i) => {
                out.push('[');
                out.push_str(&i.to_string());
                out.push(']');
            }
        }
    }
    out
}
