// ptnode-fields/src/test_utils.rs

//! Field readers and buffer doubles for unit tests.

use crate::buffer::{BufferWithExtendableBuffer, ExtendableBuffer};
use crate::common::{
    DICT_OFFSET_FIELD_SIZE, DICT_OFFSET_NEGATIVE_FLAG, LARGE_PTNODE_ARRAY_SIZE_FIELD_SIZE_FLAG,
};
use crate::error::{BufferError, BufferResult};

pub fn read_dict_offset_and_advance(buffer: &BufferWithExtendableBuffer, pos: &mut usize) -> i64 {
    let data = buffer
        .read_uint_and_advance(DICT_OFFSET_FIELD_SIZE, pos)
        .unwrap();
    let magnitude = i64::from(data & !DICT_OFFSET_NEGATIVE_FLAG);
    if data & DICT_OFFSET_NEGATIVE_FLAG != 0 {
        -magnitude
    } else {
        magnitude
    }
}

/// Reads a relative link field and resolves it against the field's own position.
pub fn read_linked_position_and_advance(
    buffer: &BufferWithExtendableBuffer,
    pos: &mut usize,
) -> Option<usize> {
    let field_pos = *pos;
    match read_dict_offset_and_advance(buffer, pos) {
        0 => None,
        offset => Some((field_pos as i64 + offset) as usize),
    }
}

pub fn read_pt_node_array_size_and_advance(
    buffer: &BufferWithExtendableBuffer,
    pos: &mut usize,
) -> usize {
    let first_byte = buffer.read_uint_and_advance(1, pos).unwrap();
    if first_byte & 0x80 == 0 {
        return first_byte as usize;
    }
    let second_byte = buffer.read_uint_and_advance(1, pos).unwrap();
    (((first_byte << 8) | second_byte) & !LARGE_PTNODE_ARRAY_SIZE_FIELD_SIZE_FLAG) as usize
}

/// Records every call instead of storing bytes.
#[derive(Debug, Default)]
pub struct RecordingBuffer {
    pub uint_writes: Vec<(u32, usize, usize)>,
    pub code_point_writes: Vec<(Vec<char>, bool, usize)>,
}

impl ExtendableBuffer for RecordingBuffer {
    fn write_uint_and_advance(
        &mut self,
        data: u32,
        size: usize,
        pos: &mut usize,
    ) -> BufferResult<()> {
        self.uint_writes.push((data, size, *pos));
        *pos += size;
        Ok(())
    }

    fn write_code_points_and_advance(
        &mut self,
        code_points: &[char],
        has_multiple: bool,
        pos: &mut usize,
    ) -> BufferResult<()> {
        self.code_point_writes
            .push((code_points.to_vec(), has_multiple, *pos));
        *pos += code_points.len() + usize::from(has_multiple);
        Ok(())
    }
}

/// Fails every write with the given error.
#[derive(Debug)]
pub struct FailingBuffer(pub BufferError);

impl ExtendableBuffer for FailingBuffer {
    fn write_uint_and_advance(&mut self, _: u32, _: usize, _: &mut usize) -> BufferResult<()> {
        Err(self.0.clone())
    }

    fn write_code_points_and_advance(
        &mut self,
        _: &[char],
        _: bool,
        _: &mut usize,
    ) -> BufferResult<()> {
        Err(self.0.clone())
    }
}
