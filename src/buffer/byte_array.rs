// ptnode-fields/src/buffer/byte_array.rs

//! Raw big-endian layout of integers and code points inside a byte slice.
//!
//! These routines do no bounds bookkeeping of their own; callers reserve the
//! region first (see `BufferWithExtendableBuffer::check_and_prepare_writing`).

use byteorder::{BigEndian, ByteOrder};

use crate::common::{
    CHARACTER_ARRAY_TERMINATOR, CHARACTER_ARRAY_TERMINATOR_SIZE, MAXIMAL_ONE_BYTE_CHARACTER_VALUE,
    MINIMAL_ONE_BYTE_CHARACTER_VALUE,
};

/// Writes the low `size` bytes of `data` (1..=4) at `*pos` and advances `pos`.
pub fn write_uint_and_advance(buffer: &mut [u8], data: u32, size: usize, pos: &mut usize) {
    let target = &mut buffer[*pos..*pos + size];
    match size {
        1 => target[0] = data as u8,
        2 => BigEndian::write_u16(target, data as u16),
        3 => BigEndian::write_u24(target, data & 0xFF_FFFF),
        _ => BigEndian::write_u32(target, data),
    }
    *pos += size;
}

/// Reads a `size`-byte (1..=4) big-endian unsigned integer at `pos`.
pub fn read_uint(buffer: &[u8], size: usize, pos: usize) -> u32 {
    BigEndian::read_uint(&buffer[pos..pos + size], size) as u32
}

fn is_one_byte_character(code_point: u32) -> bool {
    (MINIMAL_ONE_BYTE_CHARACTER_VALUE..=MAXIMAL_ONE_BYTE_CHARACTER_VALUE).contains(&code_point)
}

/// Number of code points that will actually be stored: the sequence ends at the
/// first terminator character, if any.
fn stored_code_points(code_points: &[char]) -> impl Iterator<Item = u32> + '_ {
    code_points
        .iter()
        .map(|&c| c as u32)
        .take_while(|&cp| cp != CHARACTER_ARRAY_TERMINATOR)
}

/// Size in bytes `write_code_points_and_advance` will use for `code_points`.
pub fn code_points_size(code_points: &[char], writes_terminator: bool) -> usize {
    let body: usize = stored_code_points(code_points)
        .map(|cp| if is_one_byte_character(cp) { 1 } else { 3 })
        .sum();
    if writes_terminator {
        body + CHARACTER_ARRAY_TERMINATOR_SIZE
    } else {
        body
    }
}

/// Lays out `code_points` at `*pos`: one byte per code point in the Latin-1
/// printable range, three bytes otherwise, then the terminator if requested.
pub fn write_code_points_and_advance(
    buffer: &mut [u8],
    code_points: &[char],
    writes_terminator: bool,
    pos: &mut usize,
) {
    for cp in stored_code_points(code_points) {
        let size = if is_one_byte_character(cp) { 1 } else { 3 };
        write_uint_and_advance(buffer, cp, size, pos);
    }
    if writes_terminator {
        write_uint_and_advance(
            buffer,
            CHARACTER_ARRAY_TERMINATOR,
            CHARACTER_ARRAY_TERMINATOR_SIZE,
            pos,
        );
    }
}
