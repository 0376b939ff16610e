//! Dense two-phase primal simplex over a handful of variables.

use crate::math::Real;

/// Pivot tolerance of the simplex tableau.
///
/// This is an algebraic rank/degeneracy threshold internal to the solver; the
/// geometric tolerance of the decomposition is applied by callers to the
/// optimal *value*, never to pivots.
const PIVOT_EPS: Real = 1.0e-9;

/// Hard cap on pivots. Bland's rule already prevents cycling; the cap only
/// guards against float-noise livelock on pathological input.
const MAX_PIVOTS: usize = 10_000;

/// The outcome of a linear program.
#[derive(Debug, Clone, PartialEq)]
pub enum LpSolution {
    /// The program has a finite optimum.
    Optimal {
        /// The optimal objective value.
        value: Real,
        /// A point attaining the optimum.
        point: Vec<Real>,
    },
    /// The objective is unbounded over the feasible region.
    Unbounded,
    /// The constraint system has no solution.
    Infeasible,
}

/// Maximizes `objective · x` subject to `gradient · x <= rhs` for every
/// `(gradient, rhs)` constraint, with `x` free in sign.
///
/// Free variables are handled by the classical `x = u - v` split with
/// `u, v >= 0`; constraints with a negative right-hand side get an artificial
/// variable eliminated by a phase-1 solve. Bland's rule keeps the pivoting
/// finite under degeneracy.
pub fn maximize(objective: &[Real], constraints: &[(Vec<Real>, Real)]) -> LpSolution {
    let n = objective.len();
    let mut tableau = Tableau::new(n, constraints);

    if tableau.artificials > 0 && !tableau.run_phase1() {
        return LpSolution::Infeasible;
    }

    tableau.set_objective(objective);
    if !tableau.run_phase2() {
        return LpSolution::Unbounded;
    }

    LpSolution::Optimal {
        value: tableau.obj_rhs,
        point: tableau.extract_point(n),
    }
}

struct Tableau {
    /// Coefficient rows, one per constraint; column layout is
    /// `[u_0, v_0, .., u_{n-1}, v_{n-1} | slacks | artificials]`.
    rows: Vec<Vec<Real>>,
    rhs: Vec<Real>,
    /// Basic column of each row.
    basis: Vec<usize>,
    /// Reduced-cost row and current objective value.
    obj: Vec<Real>,
    obj_rhs: Real,
    /// First artificial column; also the column count after phase 1.
    art_start: usize,
    artificials: usize,
}

impl Tableau {
    fn new(n: usize, constraints: &[(Vec<Real>, Real)]) -> Tableau {
        let m = constraints.len();
        let art_start = 2 * n + m;
        let artificials = constraints.iter().filter(|(_, b)| *b < 0.0).count();
        let cols = art_start + artificials;

        let mut rows = Vec::with_capacity(m);
        let mut rhs = Vec::with_capacity(m);
        let mut basis = Vec::with_capacity(m);
        let mut next_art = art_start;

        for (i, (gradient, b)) in constraints.iter().enumerate() {
            let mut row = vec![0.0; cols];
            for (j, &g) in gradient.iter().enumerate() {
                row[2 * j] = g;
                row[2 * j + 1] = -g;
            }
            row[2 * n + i] = 1.0;

            if *b < 0.0 {
                for c in row.iter_mut() {
                    *c = -*c;
                }
                row[next_art] = 1.0;
                basis.push(next_art);
                rhs.push(-b);
                next_art += 1;
            } else {
                basis.push(2 * n + i);
                rhs.push(*b);
            }
            rows.push(row);
        }

        Tableau {
            rows,
            rhs,
            basis,
            obj: vec![0.0; cols],
            obj_rhs: 0.0,
            art_start,
            artificials,
        }
    }

    /// Phase 1: maximize minus the sum of the artificial variables. Returns
    /// `false` if the constraint system is infeasible, otherwise leaves the
    /// tableau with a feasible basis and no artificial columns.
    fn run_phase1(&mut self) -> bool {
        for c in self.obj.iter_mut() {
            *c = 0.0;
        }
        for j in self.art_start..self.obj.len() {
            self.obj[j] = 1.0;
        }
        self.obj_rhs = 0.0;
        for i in 0..self.rows.len() {
            if self.basis[i] >= self.art_start {
                for j in 0..self.obj.len() {
                    self.obj[j] -= self.rows[i][j];
                }
                self.obj_rhs -= self.rhs[i];
            }
        }

        // Phase 1 is never unbounded: its objective is at most zero.
        let _ = self.pivot_until_optimal(self.obj.len());

        if self.obj_rhs < -PIVOT_EPS {
            return false;
        }

        self.drive_out_artificials();
        true
    }

    /// Pivots any artificial variable left basic at level zero onto a
    /// structural or slack column, dropping rows that turn out redundant,
    /// then truncates the artificial columns away.
    fn drive_out_artificials(&mut self) {
        let mut i = 0;
        while i < self.rows.len() {
            if self.basis[i] >= self.art_start {
                let pivot_col = (0..self.art_start).find(|&j| self.rows[i][j].abs() > PIVOT_EPS);
                match pivot_col {
                    Some(j) => self.pivot(i, j),
                    None => {
                        // The row is a linear combination of the others.
                        log::debug!("dropping redundant constraint row {}", i);
                        let _ = self.rows.remove(i);
                        let _ = self.rhs.remove(i);
                        let _ = self.basis.remove(i);
                        continue;
                    }
                }
            }
            i += 1;
        }

        for row in self.rows.iter_mut() {
            row.truncate(self.art_start);
        }
        self.obj.truncate(self.art_start);
    }

    /// Installs the reduced-cost row of the real objective over the current
    /// basis. `objective` has one entry per structural variable.
    fn set_objective(&mut self, objective: &[Real]) {
        let cost = |j: usize| -> Real {
            if j < 2 * objective.len() {
                let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                sign * objective[j / 2]
            } else {
                0.0
            }
        };

        for j in 0..self.obj.len() {
            self.obj[j] = -cost(j);
        }
        self.obj_rhs = 0.0;
        for i in 0..self.rows.len() {
            let cb = cost(self.basis[i]);
            if cb != 0.0 {
                for j in 0..self.obj.len() {
                    self.obj[j] += cb * self.rows[i][j];
                }
                self.obj_rhs += cb * self.rhs[i];
            }
        }
    }

    /// Phase 2: pivots to optimality. Returns `false` if the objective is
    /// unbounded.
    fn run_phase2(&mut self) -> bool {
        self.pivot_until_optimal(self.obj.len())
    }

    /// Primal simplex loop with Bland's rule, considering entering columns
    /// below `col_limit`. Returns `false` on an unbounded ray.
    fn pivot_until_optimal(&mut self, col_limit: usize) -> bool {
        for _ in 0..MAX_PIVOTS {
            // Bland: the entering column is the lowest-index improving one.
            let entering = (0..col_limit).find(|&j| self.obj[j] < -PIVOT_EPS);
            let Some(j) = entering else {
                return true;
            };

            let mut leaving: Option<(usize, Real)> = None;
            for i in 0..self.rows.len() {
                let a = self.rows[i][j];
                if a > PIVOT_EPS {
                    let ratio = self.rhs[i] / a;
                    let better = match leaving {
                        None => true,
                        Some((r, best)) => {
                            ratio < best - PIVOT_EPS
                                || (ratio < best + PIVOT_EPS && self.basis[i] < self.basis[r])
                        }
                    };
                    if better {
                        leaving = Some((i, ratio));
                    }
                }
            }

            match leaving {
                Some((r, _)) => self.pivot(r, j),
                None => return false,
            }
        }

        log::debug!("simplex hit the pivot cap; returning the current basis");
        true
    }

    fn pivot(&mut self, r: usize, j: usize) {
        let inv = 1.0 / self.rows[r][j];
        for c in self.rows[r].iter_mut() {
            *c *= inv;
        }
        self.rhs[r] *= inv;

        let pivot_row = self.rows[r].clone();
        let pivot_rhs = self.rhs[r];

        for (i, row) in self.rows.iter_mut().enumerate() {
            if i == r {
                continue;
            }
            let factor = row[j];
            if factor != 0.0 {
                for (c, value) in row.iter_mut().enumerate() {
                    *value -= factor * pivot_row[c];
                }
                self.rhs[i] -= factor * pivot_rhs;
            }
        }

        let factor = self.obj[j];
        if factor != 0.0 {
            for (c, value) in self.obj.iter_mut().enumerate() {
                *value -= factor * pivot_row[c];
            }
            self.obj_rhs -= factor * pivot_rhs;
        }

        self.basis[r] = j;
    }

    /// Recovers the structural solution `x_j = u_j - v_j` from the basis.
    fn extract_point(&self, n: usize) -> Vec<Real> {
        let mut point = vec![0.0; n];
        for (i, &b) in self.basis.iter().enumerate() {
            if b < 2 * n {
                let sign = if b % 2 == 0 { 1.0 } else { -1.0 };
                point[b / 2] += sign * self.rhs[i];
            }
        }
        point
    }
}
