//! Planar geological discontinuity used as a cutting plane.

use crate::math::{Point, Real, UnitVector, Vector};
use crate::shape::face::normalize_raw;

/// One half-space constraint bounding a joint's finite extent, expressed in
/// the joint's plane relative to the joint center.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct JointBound {
    /// The in-plane outward normal of the bounding half-space.
    pub normal: UnitVector,
    /// The distance of the bounding plane from the joint center.
    pub offset: Real,
}

/// A planar discontinuity cutting through the rock mass.
///
/// The cutting plane is `{x | normal · (x - local_origin) = distance}`. A
/// joint with no bounds is persistent: it extends through the whole rock
/// mass. A joint with bounds is confined to the in-plane convex polygon
/// `{x | b.normal · (x - center) <= b.offset for every bound b}` and cannot
/// cut rock outside that extent.
#[derive(PartialEq, Debug, Clone)]
pub struct Joint {
    /// The unit normal of the cutting plane.
    pub normal: UnitVector,
    /// The distance of the plane from `local_origin`, along `normal`.
    pub distance: Real,
    /// The origin relative to which `distance` is expressed.
    pub local_origin: Point,
    /// A point of the plane, the reference for the joint's bounds.
    pub center: Point,
    /// The friction angle of the discontinuity, in radians.
    pub phi: Real,
    /// The cohesion of the discontinuity.
    pub cohesion: Real,
    /// The in-plane half-spaces bounding the joint's finite extent, empty for
    /// a persistent joint.
    pub bounds: Vec<JointBound>,
}

impl Joint {
    /// Builds a joint from raw plane coefficients, normalizing the plane
    /// normal and every bound normal and enforcing non-negative distances the
    /// same way [`Face::from_raw`](crate::shape::Face::from_raw) does.
    ///
    /// Returns `None` if the plane normal or any bound normal is degenerate.
    pub fn from_raw(
        normal: Vector,
        distance: Real,
        local_origin: Point,
        center: Point,
        phi: Real,
        cohesion: Real,
        bounds: Vec<(Vector, Real)>,
    ) -> Option<Joint> {
        let (normal, distance) = normalize_raw(normal, distance)?;
        let bounds = bounds
            .into_iter()
            .map(|(n, d)| normalize_raw(n, d).map(|(normal, offset)| JointBound { normal, offset }))
            .collect::<Option<Vec<_>>>()?;

        Some(Joint {
            normal,
            distance,
            local_origin,
            center,
            phi,
            cohesion,
            bounds,
        })
    }

    /// Is this joint persistent, i.e. an unbounded cutting plane?
    #[inline]
    pub fn is_persistent(&self) -> bool {
        self.bounds.is_empty()
    }

    /// The signed distance of the cutting plane from `point`, along the joint
    /// normal.
    #[inline]
    pub fn offset_from(&self, point: &Point) -> Real {
        self.normal.dot(&(self.local_origin - point)) + self.distance
    }

    /// The joint's bounding half-spaces re-expressed relative to `point`, as
    /// `(gradient, rhs)` constraints `gradient · x <= rhs`.
    pub fn bound_constraints_from<'a>(
        &'a self,
        point: &Point,
    ) -> impl Iterator<Item = (Vector, Real)> + 'a {
        let delta = self.center - point;
        self.bounds.iter().map(move |b| {
            (b.normal.into_inner(), b.offset + b.normal.dot(&delta))
        })
    }
}
