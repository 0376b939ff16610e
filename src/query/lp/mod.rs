//! A small embedded linear-programming solver.
//!
//! Every feasibility and binding-face decision of the decomposition reduces
//! to a linear program with three or four variables and one inequality per
//! face, so a dense two-phase simplex is both sufficient and cheap. No
//! external solver is involved.

pub use self::simplex::{maximize, LpSolution};

mod simplex;
