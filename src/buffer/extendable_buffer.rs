// ptnode-fields/src/buffer/extendable_buffer.rs

use crate::error::BufferResult;

/// Trait for a byte buffer that trie node fields are written into.
///
/// Implementations own the bytes and decide how the buffer grows. A failing
/// call must leave both the buffer contents and `pos` untouched.
pub trait ExtendableBuffer {
    /// Writes the low `size` bytes of `data` big-endian at `*pos` and advances
    /// `pos` by `size`.
    fn write_uint_and_advance(&mut self, data: u32, size: usize, pos: &mut usize)
    -> BufferResult<()>;

    /// Writes a code point sequence at `*pos` and advances `pos` past it.
    /// `has_multiple` selects the multi-code-point layout, which carries a
    /// terminator after the last code point.
    fn write_code_points_and_advance(
        &mut self,
        code_points: &[char],
        has_multiple: bool,
        pos: &mut usize,
    ) -> BufferResult<()>;
}
