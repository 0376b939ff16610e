/// Error raised when a cut is requested on a block that is already
/// infeasible.
///
/// Every block handed to [`Block::cut`](crate::shape::Block::cut) is supposed
/// to have a non-empty region: seed blocks are validated on construction and
/// cutting only ever emits feasible children. Observing a block whose
/// half-space system admits no interior on *both* sides of a cutting plane
/// therefore indicates an algorithmic regression, and the decomposition
/// aborts with this error instead of silently dropping the block.
#[derive(thiserror::Error, Debug, Copy, Clone, Eq, PartialEq)]
pub enum GeometryError {
    /// A block reaching `cut` already had an empty region.
    #[error("attempted to cut a block whose half-space system is already infeasible")]
    InfeasibleBlock,
}
