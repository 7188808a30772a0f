// ptnode-fields/src/lib.rs

//! Field encoders for the nodes of a dynamic Patricia trie dictionary.
//!
//! The trie lives in a growable byte buffer. Each node (PtNode) is a run of
//! variable-width fields: flags, parent offset, code points, probability,
//! children position, and per array a size and a forward link. The functions
//! in [`writing`] serialize one already-decided field value at an
//! already-chosen position.

pub mod buffer;
pub mod common;
pub mod error;
pub mod flags;
pub mod writing;

#[cfg(test)]
mod test_utils;

pub use buffer::{BufferWithExtendableBuffer, ExtendableBuffer};
pub use common::{BufferConfig, MAX_DICT_OFFSET_VALUE, MAX_PROBABILITY, MIN_DICT_OFFSET_VALUE};
pub use error::{BufferError, FieldError, FieldKind, Result};
pub use flags::NodeFlags;
pub use writing::{
    write_children_position_and_advance, write_code_points_and_advance, write_dict_offset,
    write_empty_dictionary, write_flags_and_advance, write_forward_link_position_and_advance,
    write_parent_offset_and_advance, write_probability_and_advance,
    write_pt_node_array_size_and_advance,
};
