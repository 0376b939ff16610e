//! Oriented half-space face of a rock block.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use na::Unit;

/// A planar face bounding a rock block.
///
/// The face represents the half-space `{x | normal · (x - origin) <= offset}`
/// where `origin` is the center of the block owning this face. The offset is a
/// signed distance: faces produced by cuts may carry a negative offset when
/// the block center lies on the far side of the cutting plane.
#[derive(PartialEq, Debug, Clone, Copy)]
pub struct Face {
    /// The outward normal of the face's plane.
    pub normal: UnitVector,
    /// The signed distance of the plane from the block center, along `normal`.
    pub offset: Real,
    /// The friction angle of the discontinuity this face lies on, in radians.
    pub phi: Real,
    /// The cohesion of the discontinuity this face lies on.
    pub cohesion: Real,
    /// `true` iff this face was introduced by a cut rather than being part of
    /// the original rock volume or a physical joint surface.
    pub artificial: bool,
}

impl Face {
    /// Builds a face from an already-normalized outward normal.
    #[inline]
    pub fn new(normal: UnitVector, offset: Real, phi: Real, cohesion: Real) -> Face {
        Face {
            normal,
            offset,
            phi,
            cohesion,
            artificial: false,
        }
    }

    /// Builds a cut-generated face.
    ///
    /// Such faces are flagged so downstream stability analyses can tell them
    /// apart from physical discontinuity surfaces. The flag survives every
    /// subsequent cut and the redundancy elimination.
    #[inline]
    pub fn artificial(normal: UnitVector, offset: Real, phi: Real, cohesion: Real) -> Face {
        Face {
            normal,
            offset,
            phi,
            cohesion,
            artificial: true,
        }
    }

    /// Builds a face from raw plane coefficients `a x + b y + c z <= d`.
    ///
    /// The normal is scaled to unit length, with `d` scaled by the same
    /// factor, and the orientation is flipped if needed so that the resulting
    /// offset is non-negative (the local origin then lies inside the
    /// half-space). Offsets within [`DEFAULT_EPSILON`] of zero are snapped to
    /// exactly `0.0`.
    ///
    /// Returns `None` if `(a, b, c)` is degenerate (shorter than
    /// [`DEFAULT_EPSILON`]).
    pub fn from_raw(a: Real, b: Real, c: Real, d: Real, phi: Real, cohesion: Real) -> Option<Face> {
        let (normal, offset) = normalize_raw(Vector::new(a, b, c), d)?;
        Some(Face::new(normal, offset, phi, cohesion))
    }

    /// The same half-space, re-expressed relative to an origin translated by
    /// `delta`.
    #[inline]
    pub fn shifted(&self, delta: &Vector) -> Face {
        Face {
            offset: self.offset - self.normal.dot(delta),
            ..*self
        }
    }

    /// The half-space constraint `(gradient, rhs)` of this face, meaning
    /// `gradient · x <= rhs` for points `x` relative to the block center.
    #[inline]
    pub fn constraint(&self) -> (Vector, Real) {
        (self.normal.into_inner(), self.offset)
    }

    /// Tests whether a point expressed relative to the block center satisfies
    /// this face's half-space, with tolerance `eps`.
    #[inline]
    pub fn contains_local_point(&self, pt: &Point, eps: Real) -> bool {
        self.normal.dot(&pt.coords) <= self.offset + eps
    }

    /// Tests whether `self` and `other` describe the same half-space, i.e.
    /// coincident planes with the same orientation.
    #[inline]
    pub fn same_half_space(&self, other: &Face, eps: Real) -> bool {
        self.normal.dot(&other.normal) >= 1.0 - eps && (self.offset - other.offset).abs() <= eps
    }
}

/// Scales a raw plane `normal · x <= d` to unit length and flips its
/// orientation if needed so the resulting distance is non-negative, snapping
/// near-zero distances to exactly `0.0`.
///
/// Returns `None` if `normal` is shorter than [`DEFAULT_EPSILON`].
pub(crate) fn normalize_raw(normal: Vector, d: Real) -> Option<(UnitVector, Real)> {
    let (mut normal, norm) = Unit::try_new_and_get(normal, DEFAULT_EPSILON)?;
    let mut offset = d / norm;

    if offset < -DEFAULT_EPSILON {
        normal = -normal;
        offset = -offset;
    } else if offset < DEFAULT_EPSILON {
        offset = 0.0;
    }

    Some((normal, offset))
}
