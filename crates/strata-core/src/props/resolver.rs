//! Placeholder substitution over property stores.
//!
//! Scans string values for `${key}` and `${key:default}` tokens and
//! substitutes them from a lookup function. Substituted text is rescanned,
//! so a property value may itself reference further properties; recursion
//! is depth-bounded to turn self-reference cycles into errors instead of
//! stack overflows.

use crate::error::{ConfigError, Result};
use crate::props::map::Properties;

/// Maximum substitution depth before a cycle is assumed.
const MAX_RESOLVE_DEPTH: usize = 16;

/// Resolves every `${...}` token in `s` using `lookup`.
///
/// A token without a default whose key is unknown fails; the error chain
/// names both the original string and the missing key:
///
/// ```
/// use strata_core::props::resolver::resolve_string;
///
/// let err = resolve_string("${a}", |_| None).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     r#"resolve string "${a}" error << property a not exist"#
/// );
/// ```
///
/// Strings without tokens pass through unchanged, which makes resolution
/// idempotent.
pub fn resolve_string<F>(s: &str, lookup: F) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    if !s.contains("${") {
        return Ok(s.to_string());
    }
    resolve_inner(s, &lookup, 0).map_err(|e| ConfigError::resolve(s, e))
}

fn resolve_inner(s: &str, lookup: &dyn Fn(&str) -> Option<String>, depth: usize) -> Result<String> {
    if depth > MAX_RESOLVE_DEPTH {
        return Err(ConfigError::ResolveDepth);
    }

    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let body = &rest[start + 2..];
        let end = find_closing(body).ok_or_else(|| ConfigError::BadPlaceholder {
            string: s.to_string(),
        })?;
        let token = &body[..end];

        let (key_part, default_part) = split_token(token);
        // The key itself may be computed from another placeholder.
        let key = if key_part.contains("${") {
            resolve_inner(key_part, lookup, depth + 1)?
        } else {
            key_part.to_string()
        };

        match lookup(&key) {
            Some(value) => out.push_str(&resolve_inner(&value, lookup, depth + 1)?),
            None => match default_part {
                Some(default) => out.push_str(&resolve_inner(default, lookup, depth + 1)?),
                None => return Err(ConfigError::not_exist(key)),
            },
        }

        rest = &body[end + 1..];
    }
    out.push_str(rest);
    Ok(out)
}

/// Finds the `}` closing the token whose body starts at the beginning of
/// `s`, skipping over nested `${...}` openings.
fn find_closing(s: &str) -> Option<usize> {
    let bytes = s.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'$' && bytes.get(i + 1) == Some(&b'{') {
            depth += 1;
            i += 2;
            continue;
        }
        if bytes[i] == b'}' {
            if depth == 0 {
                return Some(i);
            }
            depth -= 1;
        }
        i += 1;
    }
    None
}

/// Splits a token body into key and optional default at the first `:`
/// outside nested placeholders.
fn split_token(token: &str) -> (&str, Option<&str>) {
    let bytes = token.as_bytes();
    let mut depth = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'$' if bytes.get(i + 1) == Some(&b'{') => {
                depth += 1;
                i += 2;
                continue;
            }
            b'}' if depth > 0 => depth -= 1,
            b':' if depth == 0 => return (&token[..i], Some(&token[i + 1..])),
            _ => {}
        }
        i += 1;
    }
    (token, None)
}

/// Resolves every string leaf of `props` in place.
///
/// Lookups try `props` itself first, then `fallback`. File layers are
/// resolved this way at load time (own tree first, then the merged-so-far
/// layer); the final merged set is resolved with no fallback.
pub fn resolve_layer(props: &mut Properties, fallback: Option<&Properties>) -> Result<()> {
    for (path, value) in props.data() {
        if !value.contains("${") {
            continue;
        }
        let resolved = resolve_string(&value, |key| {
            props
                .get(key)
                .or_else(|| fallback.and_then(|f| f.get(key)))
                .map(str::to_string)
        })?;
        props.set(&path, resolved)?;
    }
    Ok(())
}
