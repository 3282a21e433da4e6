use crate::props::map::Properties;

/// One source's decoded property layer.
///
/// A layer is produced by exactly one source (one environment scan or one
/// decoded file) and is immutable once produced: the merge engine only
/// reads layers while folding them into the accumulating target.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySource {
    /// Where the layer came from (file path, `"env"`, `"sys"`).
    pub name: String,
    /// The decoded, placeholder-resolved properties.
    pub props: Properties,
}

impl PropertySource {
    /// Creates a new property source.
    pub fn new(name: impl Into<String>, props: Properties) -> Self {
        Self {
            name: name.into(),
            props,
        }
    }
}
