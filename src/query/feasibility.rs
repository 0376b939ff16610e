//! Linear-feasibility tests over half-space systems.

use crate::math::{Real, Vector};
use crate::query::lp::{maximize, LpSolution};

/// The radius of the largest sphere inscribed in the intersection of the
/// given half-spaces `gradient · x <= rhs`.
///
/// This is the Chebyshev-center linear program: maximize `r` subject to
/// `gradient · x + r <= rhs` for every constraint. The program always has a
/// solution; the sign of the optimal radius classifies the region:
///
/// * `radius > 0`: the region has a strictly interior point;
/// * `radius == 0`: the region is non-empty but degenerate (a point,
///   segment or polygon with no volume);
/// * `radius < 0`: the region is empty, and the radius measures how far the
///   constraints are from being satisfiable.
///
/// Returns `None` when the radius is unbounded, which happens iff the region
/// contains arbitrarily large spheres.
pub fn interior_sphere_radius(constraints: &[(Vector, Real)]) -> Option<Real> {
    let objective = [0.0, 0.0, 0.0, 1.0];
    let rows: Vec<_> = constraints
        .iter()
        .map(|(n, d)| (vec![n.x, n.y, n.z, 1.0], *d))
        .collect();

    match maximize(&objective, &rows) {
        LpSolution::Optimal { value, .. } => Some(value),
        LpSolution::Unbounded => None,
        LpSolution::Infeasible => {
            // The Chebyshev program is feasible for any half-space system;
            // reaching this indicates the solver lost the plot numerically.
            log::debug!("interior-sphere program reported infeasible");
            Some(Real::NEG_INFINITY)
        }
    }
}

/// Does the intersection of the given half-spaces contain a strictly interior
/// point, i.e. an inscribed sphere of radius greater than `eps`?
pub fn is_strictly_feasible(constraints: &[(Vector, Real)], eps: Real) -> bool {
    match interior_sphere_radius(constraints) {
        Some(radius) => radius > eps,
        None => true,
    }
}

/// Does the intersection of the given half-spaces contain any point at all?
///
/// Unlike [`is_strictly_feasible`] this accepts degenerate solution sets,
/// which is what the bounded-joint contact test needs: the contact region
/// lies inside the joint plane and never has volume.
pub fn is_feasible(constraints: &[(Vector, Real)]) -> bool {
    let rows: Vec<_> = constraints
        .iter()
        .map(|(n, d)| (vec![n.x, n.y, n.z], *d))
        .collect();

    !matches!(maximize(&[0.0; 3], &rows), LpSolution::Infeasible)
}
