use anyhow::Result;

use crate::view::Node;

/// A zero-argument operation producing a renderable tree.
///
/// Views receive their collaborators as capabilities instead of reaching for
/// globals, so any closure returning `Result<Node>` can stand in for a real
/// component.
pub trait Capability: Send + Sync {
    fn render(&self) -> Result<Node>;
}

impl<F> Capability for F
where
    F: Fn() -> Result<Node> + Send + Sync,
{
    fn render(&self) -> Result<Node> {
        self()
    }
}
