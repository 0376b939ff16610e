use crate::math::{Real, Vector};
use crate::query::{feasibility, GeometryError, SplitResult};
use crate::shape::{Block, Face, Joint};

impl Block {
    /// Cuts this block by a joint plane.
    ///
    /// The joint plane splits space into a kept half-space
    /// `{x | normal · (x - center) <= offset}` and its complement, with
    /// `offset` the signed distance from the block center to the plane. Both
    /// sides are tested for a strictly interior point; the cut emits:
    ///
    /// * [`SplitResult::Pair`] with the kept-side and excluded-side children
    ///   when the plane crosses the block's interior. Each child appends one
    ///   cut face flagged artificial; everything else is inherited untouched.
    /// * [`SplitResult::Negative`] or [`SplitResult::Positive`] when the
    ///   block lies entirely on one side (possibly tangent to the plane).
    ///   The block is left unchanged in geometry; the tangent face would be
    ///   non-binding anyway, so it is not appended at all.
    /// * [`SplitResult::Untouched`] when the joint is bounded and its finite
    ///   extent does not reach this block: a joint cannot cut rock beyond
    ///   its own physical extent, so the block survives whole even if the
    ///   unbounded carrier plane would have crossed it.
    ///
    /// Both sides being empty means the input block was already infeasible,
    /// which the decomposition invariants rule out; that case is an error,
    /// never silently discarded.
    pub fn cut(&self, joint: &Joint, epsilon: Real) -> Result<SplitResult<Block>, GeometryError> {
        let offset = joint.offset_from(&self.center);
        let base = self.constraints();

        if !joint.is_persistent() && !self.joint_extent_reaches(joint, offset, &base) {
            return Ok(SplitResult::Untouched);
        }

        let normal = joint.normal.into_inner();
        let mut kept = base.clone();
        kept.push((normal, offset));
        let mut excluded = base;
        excluded.push((-normal, -offset));

        let kept_feasible = feasibility::is_strictly_feasible(&kept, epsilon);
        let excluded_feasible = feasibility::is_strictly_feasible(&excluded, epsilon);

        match (kept_feasible, excluded_feasible) {
            (true, true) => {
                let mut kept_faces = self.faces.clone();
                kept_faces.push(Face::artificial(
                    joint.normal,
                    offset,
                    joint.phi,
                    joint.cohesion,
                ));
                let mut excluded_faces = self.faces.clone();
                excluded_faces.push(Face::artificial(
                    -joint.normal,
                    -offset,
                    joint.phi,
                    joint.cohesion,
                ));
                Ok(SplitResult::Pair(
                    Block::new(self.center, kept_faces),
                    Block::new(self.center, excluded_faces),
                ))
            }
            (true, false) => Ok(SplitResult::Negative),
            (false, true) => Ok(SplitResult::Positive),
            (false, false) => Err(GeometryError::InfeasibleBlock),
        }
    }

    /// Does the finite extent of `joint` intersect this block?
    ///
    /// The contact region is the block intersected with the joint plane and
    /// the joint's in-plane bounds. It lies inside the plane, so it can be
    /// non-empty without having volume; plain (non-strict) feasibility is the
    /// right test.
    fn joint_extent_reaches(
        &self,
        joint: &Joint,
        offset: Real,
        base: &[(Vector, Real)],
    ) -> bool {
        let mut system = base.to_vec();
        system.extend(joint.bound_constraints_from(&self.center));
        let normal = joint.normal.into_inner();
        system.push((normal, offset));
        system.push((-normal, -offset));
        feasibility::is_feasible(&system)
    }
}
