//! Decomposition of a rock volume into blocks by an ordered joint sequence.

use crate::io::RockMassInput;
use crate::math::Real;
use crate::query::{GeometryError, SplitResult};
use crate::shape::{Block, Joint};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Applies every joint, in order, to the blocks descending from `seed`, then
/// prunes each surviving block down to its binding faces.
///
/// Each joint application maps `cut` over the current block collection and
/// flattens the fan-out; joints are strictly sequential with respect to each
/// other, forming a barrier between steps, while the blocks within one step
/// are independent and processed data-parallel when the `parallel` feature is
/// enabled. The joint list is shared and read-only: workers borrow it, it is
/// never cloned per step. Every step is a pure function of its inputs, so a
/// failed or repeated worker can simply re-execute its blocks.
///
/// Returns [`GeometryError::InfeasibleBlock`] if any cut observes a block
/// that was already empty, which indicates an algorithmic regression rather
/// than a property of the input.
pub fn decompose(seed: Block, joints: &[Joint], epsilon: Real) -> Result<Vec<Block>, GeometryError> {
    let mut blocks = vec![seed];
    for joint in joints {
        blocks = apply_joint(blocks, joint, epsilon)?;
    }
    Ok(prune(blocks, epsilon))
}

/// Seeds a block at the input's global origin from its rock-volume faces and
/// decomposes it by the input's joints.
pub fn decompose_from_input(
    input: &RockMassInput,
    epsilon: Real,
) -> Result<Vec<Block>, GeometryError> {
    let seed = Block::new(input.origin, input.volume.clone());
    decompose(seed, &input.joints, epsilon)
}

fn cut_one(block: Block, joint: &Joint, epsilon: Real) -> Result<Vec<Block>, GeometryError> {
    match block.cut(joint, epsilon)? {
        SplitResult::Pair(kept, excluded) => Ok(vec![kept, excluded]),
        // One-sided and untouched outcomes keep the block as it was.
        _ => Ok(vec![block]),
    }
}

fn apply_joint(
    blocks: Vec<Block>,
    joint: &Joint,
    epsilon: Real,
) -> Result<Vec<Block>, GeometryError> {
    #[cfg(feature = "parallel")]
    let pieces: Result<Vec<Vec<Block>>, GeometryError> = blocks
        .into_par_iter()
        .map(|block| cut_one(block, joint, epsilon))
        .collect();
    #[cfg(not(feature = "parallel"))]
    let pieces: Result<Vec<Vec<Block>>, GeometryError> = blocks
        .into_iter()
        .map(|block| cut_one(block, joint, epsilon))
        .collect();

    Ok(pieces?.into_iter().flatten().collect())
}

fn prune(blocks: Vec<Block>, epsilon: Real) -> Vec<Block> {
    #[cfg(feature = "parallel")]
    let pruned = blocks.into_par_iter().map(|b| b.pruned(epsilon)).collect();
    #[cfg(not(feature = "parallel"))]
    let pruned = blocks.into_iter().map(|b| b.pruned(epsilon)).collect();

    pruned
}
