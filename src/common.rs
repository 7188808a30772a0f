// ptnode-fields/src/common.rs

use serde::{Deserialize, Serialize};

/// Largest probability a PtNode can carry (one unsigned byte).
pub const MAX_PROBABILITY: i32 = 0xFF;

/// Largest magnitude a dict offset field can hold (23 bits).
pub const MAX_DICT_OFFSET_VALUE: i64 = 0x7F_FFFF;
pub const MIN_DICT_OFFSET_VALUE: i64 = -0x7F_FFFF;
pub const DICT_OFFSET_NEGATIVE_FLAG: u32 = 0x80_0000;
pub const DICT_OFFSET_FIELD_SIZE: usize = 3;

pub const MAX_PTNODE_ARRAY_SIZE_TO_USE_SMALL_SIZE_FIELD: usize = 0x7F;
pub const MAX_PTNODE_ARRAY_SIZE: usize = 0x7FFF;
pub const SMALL_PTNODE_ARRAY_SIZE_FIELD_SIZE: usize = 1;
pub const LARGE_PTNODE_ARRAY_SIZE_FIELD_SIZE: usize = 2;
pub const LARGE_PTNODE_ARRAY_SIZE_FIELD_SIZE_FLAG: u32 = 0x8000;

pub const NODE_FLAG_FIELD_SIZE: usize = 1;
pub const PROBABILITY_FIELD_SIZE: usize = 1;

/// Code points in `[MINIMAL_ONE_BYTE_CHARACTER_VALUE, MAXIMAL_ONE_BYTE_CHARACTER_VALUE]`
/// are stored in a single byte; everything else takes three.
pub const MINIMAL_ONE_BYTE_CHARACTER_VALUE: u32 = 0x20;
pub const MAXIMAL_ONE_BYTE_CHARACTER_VALUE: u32 = 0xFF;
/// Ends a multi-code-point sequence. Never valid as a stored character.
pub const CHARACTER_ARRAY_TERMINATOR: u32 = 0x1F;
pub const CHARACTER_ARRAY_TERMINATOR_SIZE: usize = 1;

/// Configuration for the growable part of a `BufferWithExtendableBuffer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BufferConfig {
    /// Number of bytes reserved each time the additional buffer runs out of room.
    pub extend_step: usize,
    /// Hard upper bound on the reserved size of the additional buffer.
    /// Appends that would need more room than this fail.
    pub max_additional_size: usize,
}

impl Default for BufferConfig {
    fn default() -> Self {
        BufferConfig {
            extend_step: 128 * 1024,        // 128 KiB
            max_additional_size: 1024 * 1024, // 1 MiB
        }
    }
}
