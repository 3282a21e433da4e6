//! Ordered layer composition with conflict detection.
//!
//! Layers are folded lowest-priority first: a later layer may overwrite
//! the scalar value at an existing path, so re-asserting a layer at the
//! end of a fold sequence gives its values priority. What a later layer
//! may never do is change a path's structural role: writing a scalar
//! where a container exists (or the reverse) fails with
//! `property conflict at path <path>`, regardless of fold order.
//! Priority resolves value disagreement, never structural incompatibility.

use crate::error::Result;
use crate::props::{Properties, PropertySource};

/// Folds one layer into the accumulating target.
///
/// Leaves are applied in sorted path order so that conflict reporting is
/// deterministic for any layer content.
pub fn fold(target: &mut Properties, layer: &Properties) -> Result<()> {
    for (path, value) in layer.data() {
        target.set(&path, value)?;
    }
    Ok(())
}

/// Folds a sequence of sources, lowest priority first.
pub fn fold_sources<'a, I>(target: &mut Properties, sources: I) -> Result<()>
where
    I: IntoIterator<Item = &'a PropertySource>,
{
    for source in sources {
        fold(target, &source.props)?;
    }
    Ok(())
}
