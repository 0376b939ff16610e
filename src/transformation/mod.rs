//! Decomposition of a rock mass into convex blocks.

pub use self::decomposition::{decompose, decompose_from_input};

mod decomposition;
mod redundancy;
