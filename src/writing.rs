// ptnode-fields/src/writing.rs

//! Encoders for the fields of a dynamic Patricia trie node.
//!
//! Every function validates its value, writes the field at `*field_pos` and
//! advances `field_pos` past it. A rejected value is reported before anything
//! reaches the buffer, so the buffer and the cursor are left untouched. Buffer
//! failures are passed through as `FieldError::Buffer`.
//!
//! Offsets come in two flavours. Forward links and children positions are
//! stored relative to the position of their own field. The parent offset is
//! already an offset from the node head and is stored as given.

use log::info;

use crate::buffer::ExtendableBuffer;
use crate::common::{
    DICT_OFFSET_FIELD_SIZE, DICT_OFFSET_NEGATIVE_FLAG, LARGE_PTNODE_ARRAY_SIZE_FIELD_SIZE,
    LARGE_PTNODE_ARRAY_SIZE_FIELD_SIZE_FLAG, MAX_DICT_OFFSET_VALUE, MAX_PROBABILITY,
    MAX_PTNODE_ARRAY_SIZE, MAX_PTNODE_ARRAY_SIZE_TO_USE_SMALL_SIZE_FIELD, MIN_DICT_OFFSET_VALUE,
    NODE_FLAG_FIELD_SIZE, PROBABILITY_FIELD_SIZE, SMALL_PTNODE_ARRAY_SIZE_FIELD_SIZE,
};
use crate::error::{FieldError, FieldKind, Result};
use crate::flags::NodeFlags;

/// Logs a value the caller should never have produced and hands the error back.
fn invariant_violation(err: FieldError) -> FieldError {
    info!("{}", err);
    if cfg!(feature = "strict-invariants") {
        debug_assert!(false, "{}", err);
    }
    err
}

/// Offset from `field_pos` to `target`, or 0 for "no position". Saturates at
/// the `i64` bounds, which are far outside the dict offset range.
fn relative_offset(target: Option<usize>, field_pos: usize) -> i64 {
    match target {
        Some(target) => {
            let offset = target as i128 - field_pos as i128;
            i64::try_from(offset).unwrap_or(if offset < 0 { i64::MIN } else { i64::MAX })
        }
        None => 0,
    }
}

/// Sign-magnitude form of a dict offset: magnitude in the low 23 bits, bit 23
/// set for negative offsets.
fn encode_dict_offset(offset: i64) -> Result<u32> {
    if !(MIN_DICT_OFFSET_VALUE..=MAX_DICT_OFFSET_VALUE).contains(&offset) {
        return Err(invariant_violation(FieldError::RangeViolation {
            field: FieldKind::DictOffset,
            value: offset,
            min: MIN_DICT_OFFSET_VALUE,
            max: MAX_DICT_OFFSET_VALUE,
        }));
    }
    let magnitude = offset.unsigned_abs() as u32;
    if offset < 0 {
        Ok(magnitude | DICT_OFFSET_NEGATIVE_FLAG)
    } else {
        Ok(magnitude)
    }
}

/// Writes a signed dict offset as a 3-byte field.
pub fn write_dict_offset<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    offset: i64,
    offset_field_pos: &mut usize,
) -> Result<()> {
    let data = encode_dict_offset(offset)?;
    buffer.write_uint_and_advance(data, DICT_OFFSET_FIELD_SIZE, offset_field_pos)?;
    Ok(())
}

/// Writes the link to the next PtNode array, relative to the field position.
pub fn write_forward_link_position_and_advance<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    forward_link_pos: Option<usize>,
    forward_link_field_pos: &mut usize,
) -> Result<()> {
    let offset = relative_offset(forward_link_pos, *forward_link_field_pos);
    write_dict_offset(buffer, offset, forward_link_field_pos)
}

/// Writes the number of PtNodes in an array.
///
/// Sizes up to `0x7F` take one byte. Larger sizes take two bytes with the
/// top bit set so a reader can tell the two forms apart from the first byte.
pub fn write_pt_node_array_size_and_advance<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    array_size: usize,
    array_size_field_pos: &mut usize,
) -> Result<()> {
    if array_size <= MAX_PTNODE_ARRAY_SIZE_TO_USE_SMALL_SIZE_FIELD {
        buffer.write_uint_and_advance(
            array_size as u32,
            SMALL_PTNODE_ARRAY_SIZE_FIELD_SIZE,
            array_size_field_pos,
        )?;
    } else if array_size <= MAX_PTNODE_ARRAY_SIZE {
        let data = array_size as u32 | LARGE_PTNODE_ARRAY_SIZE_FIELD_SIZE_FLAG;
        buffer.write_uint_and_advance(
            data,
            LARGE_PTNODE_ARRAY_SIZE_FIELD_SIZE,
            array_size_field_pos,
        )?;
    } else {
        return Err(invariant_violation(FieldError::RangeViolation {
            field: FieldKind::PtNodeArraySize,
            value: i64::try_from(array_size).unwrap_or(i64::MAX),
            min: 0,
            max: MAX_PTNODE_ARRAY_SIZE as i64,
        }));
    }
    Ok(())
}

/// Writes the node flags byte verbatim, including bits this crate has no name for.
pub fn write_flags_and_advance<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    node_flags: NodeFlags,
    node_flags_field_pos: &mut usize,
) -> Result<()> {
    buffer.write_uint_and_advance(
        u32::from(node_flags.bits()),
        NODE_FLAG_FIELD_SIZE,
        node_flags_field_pos,
    )?;
    Ok(())
}

/// Writes the parent offset. Unlike the other links this is not made relative
/// to the field position: `parent_offset` is already relative to the node head.
pub fn write_parent_offset_and_advance<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    parent_offset: Option<i64>,
    parent_pos_field_pos: &mut usize,
) -> Result<()> {
    write_dict_offset(buffer, parent_offset.unwrap_or(0), parent_pos_field_pos)
}

/// Writes the code points of a node. The buffer is told whether there is more
/// than one, since single code points are stored without a terminator.
pub fn write_code_points_and_advance<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    code_points: &[char],
    code_point_field_pos: &mut usize,
) -> Result<()> {
    if code_points.is_empty() {
        return Err(invariant_violation(FieldError::PreconditionViolation(
            "code points cannot be written because the code point count is 0".to_string(),
        )));
    }
    let has_multiple_code_points = code_points.len() > 1;
    buffer.write_code_points_and_advance(
        code_points,
        has_multiple_code_points,
        code_point_field_pos,
    )?;
    Ok(())
}

/// Writes a probability in `[0, MAX_PROBABILITY]` as one byte.
pub fn write_probability_and_advance<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    probability: i32,
    probability_field_pos: &mut usize,
) -> Result<()> {
    if !(0..=MAX_PROBABILITY).contains(&probability) {
        return Err(invariant_violation(FieldError::RangeViolation {
            field: FieldKind::Probability,
            value: i64::from(probability),
            min: 0,
            max: i64::from(MAX_PROBABILITY),
        }));
    }
    buffer.write_uint_and_advance(
        probability as u32,
        PROBABILITY_FIELD_SIZE,
        probability_field_pos,
    )?;
    Ok(())
}

/// Writes the position of a node's children array, relative to the field position.
pub fn write_children_position_and_advance<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    children_position: Option<usize>,
    children_position_field_pos: &mut usize,
) -> Result<()> {
    let offset = relative_offset(children_position, *children_position_field_pos);
    write_dict_offset(buffer, offset, children_position_field_pos)
}

/// Writes an empty root PtNode array at `root_pos`: a zero array size followed
/// by a forward link to nowhere.
pub fn write_empty_dictionary<B: ExtendableBuffer + ?Sized>(
    buffer: &mut B,
    root_pos: usize,
) -> Result<()> {
    let mut writing_pos = root_pos;
    write_pt_node_array_size_and_advance(buffer, 0, &mut writing_pos)?;
    write_forward_link_position_and_advance(buffer, None, &mut writing_pos)
}
