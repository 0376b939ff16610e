//! JSON rendering of decomposition results.

use std::io::Write;

use serde::Serialize;

use crate::math::Real;
use crate::shape::{Block, Face};

/// A failure while serializing blocks.
#[derive(thiserror::Error, Debug)]
pub enum JsonError {
    /// The serializer or the underlying writer failed.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct BlockRecord {
    center: [Real; 3],
    faces: Vec<FaceRecord>,
}

#[derive(Serialize)]
struct FaceRecord {
    normal: [Real; 3],
    offset: Real,
    phi: Real,
    cohesion: Real,
    artificial: bool,
}

impl BlockRecord {
    fn from_block(block: &Block) -> BlockRecord {
        BlockRecord {
            center: [block.center.x, block.center.y, block.center.z],
            faces: block.faces.iter().map(FaceRecord::from_face).collect(),
        }
    }
}

impl FaceRecord {
    fn from_face(face: &Face) -> FaceRecord {
        FaceRecord {
            normal: [face.normal.x, face.normal.y, face.normal.z],
            offset: face.offset,
            phi: face.phi,
            cohesion: face.cohesion,
            artificial: face.artificial,
        }
    }
}

/// Writes one JSON record per block, carrying its center and the
/// `(normal, offset, phi, cohesion, artificial)` tuple of every face.
pub fn write_blocks<W: Write>(writer: W, blocks: &[Block]) -> Result<(), JsonError> {
    let records: Vec<_> = blocks.iter().map(BlockRecord::from_block).collect();
    Ok(serde_json::to_writer_pretty(writer, &records)?)
}

/// Renders blocks to a JSON string; mostly a convenience for tests.
pub fn blocks_to_json_string(blocks: &[Block]) -> Result<String, JsonError> {
    let records: Vec<_> = blocks.iter().map(BlockRecord::from_block).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}
