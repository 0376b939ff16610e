//! Convex polyhedral rock block.

use crate::math::{Point, Real, Vector};
use crate::query::feasibility;
use crate::shape::Face;

/// A convex rock block, expressed as the intersection of the half-spaces of
/// its faces, all relative to `center`.
///
/// Blocks are immutable values: cutting and pruning produce new blocks and
/// never mutate shared state, so any step of a decomposition can safely be
/// re-executed. The face list of an intermediate block may contain redundant
/// half-spaces; [`Block::non_redundant_faces`] reduces it to a minimal
/// description of the same region.
#[derive(PartialEq, Debug, Clone)]
pub struct Block {
    /// The reference point the block's faces are expressed against.
    pub center: Point,
    /// The faces whose half-space intersection is the block's region.
    pub faces: Vec<Face>,
}

impl Block {
    /// Builds a block from its center and faces.
    #[inline]
    pub fn new(center: Point, faces: Vec<Face>) -> Block {
        Block { center, faces }
    }

    /// The half-space constraints of this block's faces, relative to its
    /// center.
    #[inline]
    pub fn constraints(&self) -> Vec<(Vector, Real)> {
        self.faces.iter().map(|f| f.constraint()).collect()
    }

    /// Does this block's region have a strictly interior point?
    ///
    /// A block whose region is empty, or degenerate to a point, segment or
    /// sliver thinner than `eps`, is not feasible and must be discarded.
    #[inline]
    pub fn is_feasible(&self, eps: Real) -> bool {
        feasibility::is_strictly_feasible(&self.constraints(), eps)
    }

    /// Tests whether a point in global coordinates lies inside this block,
    /// with tolerance `eps`.
    pub fn contains_point(&self, pt: &Point, eps: Real) -> bool {
        let local = Point::from(pt - self.center);
        self.faces.iter().all(|f| f.contains_local_point(&local, eps))
    }

    /// The same block re-expressed relative to `new_center`.
    pub fn translated_to(&self, new_center: Point) -> Block {
        let delta = new_center - self.center;
        Block {
            center: new_center,
            faces: self.faces.iter().map(|f| f.shifted(&delta)).collect(),
        }
    }
}
