//! Elimination of non-binding faces from a block.

use crate::math::Real;
use crate::query::lp::{maximize, LpSolution};
use crate::shape::{Block, Face};

impl Block {
    /// The subset of this block's faces that actually bound its region.
    ///
    /// The returned faces describe exactly the same region as `self.faces`,
    /// and every one of them is binding: removing it would strictly enlarge
    /// the region. A face `f` is non-binding when maximizing `f.normal · x`
    /// over the *remaining* faces stays strictly below `f.offset` (minus the
    /// tolerance): the other constraints already confine the region inside
    /// `f`'s plane, so `f` can never be tight. An unbounded maximum means the
    /// region escapes past `f`'s plane without it, so `f` is binding.
    ///
    /// Faces are tested against the progressively reduced set, so a pair of
    /// faces that are each redundant given the other cannot both survive.
    /// Coincident duplicate half-spaces are resolved by keeping the first
    /// occurrence. The operation is idempotent.
    pub fn non_redundant_faces(&self, epsilon: Real) -> Vec<Face> {
        let mut keep = vec![true; self.faces.len()];

        for i in 0..self.faces.len() {
            let face = &self.faces[i];

            let duplicate = self.faces[..i]
                .iter()
                .zip(keep.iter())
                .any(|(f, &k)| k && f.same_half_space(face, epsilon));
            if duplicate {
                keep[i] = false;
                continue;
            }

            let objective = [face.normal.x, face.normal.y, face.normal.z];
            let others: Vec<_> = self
                .faces
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i && keep[j])
                .map(|(_, f)| {
                    let (n, d) = f.constraint();
                    (vec![n.x, n.y, n.z], d)
                })
                .collect();

            match maximize(&objective, &others) {
                LpSolution::Optimal { value, .. } if value < face.offset - epsilon => {
                    keep[i] = false;
                }
                LpSolution::Infeasible => {
                    // Only an empty block gets here, and empty blocks are
                    // discarded during cutting.
                    log::debug!("redundancy test on an infeasible block");
                }
                _ => {}
            }
        }

        self.faces
            .iter()
            .zip(keep)
            .filter(|(_, k)| *k)
            .map(|(f, _)| *f)
            .collect()
    }

    /// This block rebuilt with its minimal face list.
    pub fn pruned(&self, epsilon: Real) -> Block {
        Block::new(self.center, self.non_redundant_faces(epsilon))
    }
}
