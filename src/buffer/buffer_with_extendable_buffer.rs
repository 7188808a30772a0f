// ptnode-fields/src/buffer/buffer_with_extendable_buffer.rs

use log::{trace, warn};

use super::byte_array;
use super::extendable_buffer::ExtendableBuffer;
use crate::common::BufferConfig;
use crate::error::{BufferError, BufferResult};

/// A dictionary buffer made of a fixed-size original region followed by an
/// additional region that grows at its tail.
///
/// Positions below `original_size()` address the original region in place.
/// Positions at or above it address the additional region, where writing is
/// only allowed inside the used part or exactly at the tail (an append).
#[derive(Debug, Clone)]
pub struct BufferWithExtendableBuffer {
    original_buffer: Vec<u8>,
    /// Reserved bytes of the additional region; only the first
    /// `used_additional_buffer_size` are meaningful.
    additional_buffer: Vec<u8>,
    used_additional_buffer_size: usize,
    config: BufferConfig,
}

impl BufferWithExtendableBuffer {
    pub fn new(original_buffer: Vec<u8>, config: BufferConfig) -> Self {
        Self {
            original_buffer,
            additional_buffer: Vec::new(),
            used_additional_buffer_size: 0,
            config,
        }
    }

    pub fn with_defaults(original_buffer: Vec<u8>) -> Self {
        Self::new(original_buffer, BufferConfig::default())
    }

    /// An empty dictionary: everything written goes to the additional region.
    pub fn empty(config: BufferConfig) -> Self {
        Self::new(Vec::new(), config)
    }

    pub fn config(&self) -> &BufferConfig {
        &self.config
    }

    pub fn original_size(&self) -> usize {
        self.original_buffer.len()
    }

    pub fn used_additional_size(&self) -> usize {
        self.used_additional_buffer_size
    }

    /// Position right after the last used byte; appends happen here.
    pub fn tail_position(&self) -> usize {
        self.original_buffer.len() + self.used_additional_buffer_size
    }

    pub fn is_in_additional_buffer(&self, pos: usize) -> bool {
        pos >= self.original_buffer.len()
    }

    /// The original region, or the used part of the additional region.
    pub fn get_buffer(&self, uses_additional_buffer: bool) -> &[u8] {
        if uses_additional_buffer {
            &self.additional_buffer[..self.used_additional_buffer_size]
        } else {
            self.original_buffer.as_slice()
        }
    }

    /// Reads a `size`-byte big-endian unsigned integer at `pos`.
    pub fn read_uint(&self, size: usize, pos: usize) -> BufferResult<u32> {
        if !(1..=4).contains(&size) {
            return Err(BufferError::InvalidFieldSize(size));
        }
        let (region, local_pos) = self.region(pos);
        let tail = self.tail_position();
        let in_bounds = pos.checked_add(size).is_some_and(|end| end <= tail)
            && local_pos.checked_add(size).is_some_and(|end| end <= region.len());
        if !in_bounds {
            return Err(BufferError::BeyondTail { pos, size, tail });
        }
        Ok(byte_array::read_uint(region, size, local_pos))
    }

    pub fn read_uint_and_advance(&self, size: usize, pos: &mut usize) -> BufferResult<u32> {
        let value = self.read_uint(size, *pos)?;
        *pos += size;
        Ok(value)
    }

    /// All used bytes, original region first.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.tail_position());
        bytes.extend_from_slice(&self.original_buffer);
        bytes.extend_from_slice(self.get_buffer(true));
        bytes
    }

    fn region(&self, pos: usize) -> (&[u8], usize) {
        if self.is_in_additional_buffer(pos) {
            (self.additional_buffer.as_slice(), pos - self.original_buffer.len())
        } else {
            (self.original_buffer.as_slice(), pos)
        }
    }

    fn region_mut(&mut self, pos: usize) -> (&mut [u8], usize) {
        let original_size = self.original_buffer.len();
        if pos >= original_size {
            (self.additional_buffer.as_mut_slice(), pos - original_size)
        } else {
            (self.original_buffer.as_mut_slice(), pos)
        }
    }

    /// Grows the reserved additional region so that it holds at least `required` bytes.
    fn extend_buffer(&mut self, required: usize) -> BufferResult<()> {
        let step = self.config.extend_step.max(1);
        let steps = (required - self.additional_buffer.len()).div_ceil(step);
        let new_size = self.additional_buffer.len() + steps * step;
        if new_size > self.config.max_additional_size {
            warn!(
                "Additional buffer cannot be extended to {} bytes (max {}).",
                new_size, self.config.max_additional_size
            );
            return Err(BufferError::CapacityExceeded {
                requested: new_size,
                max: self.config.max_additional_size,
            });
        }
        trace!(
            "Extending additional buffer from {} to {} bytes.",
            self.additional_buffer.len(),
            new_size
        );
        self.additional_buffer.resize(new_size, 0);
        Ok(())
    }

    /// Checks that `size` bytes can be written at `pos`, reserving room when the
    /// write is an append. Nothing is changed when this fails.
    fn check_and_prepare_writing(&mut self, pos: usize, size: usize) -> BufferResult<()> {
        let original_size = self.original_buffer.len();
        let end = pos.checked_add(size);
        if self.is_in_additional_buffer(pos) {
            let tail = self.tail_position();
            let Some(end) = end else {
                return Err(BufferError::BeyondTail { pos, size, tail });
            };
            if pos == tail {
                let required = end - original_size;
                if required > self.additional_buffer.len() {
                    self.extend_buffer(required)?;
                }
                self.used_additional_buffer_size += size;
            } else if end > tail {
                return Err(BufferError::BeyondTail { pos, size, tail });
            }
        } else if end.is_none_or(|end| end > original_size) {
            return Err(BufferError::OutOfBounds {
                pos,
                size,
                original_size,
            });
        }
        Ok(())
    }
}

impl ExtendableBuffer for BufferWithExtendableBuffer {
    fn write_uint_and_advance(
        &mut self,
        data: u32,
        size: usize,
        pos: &mut usize,
    ) -> BufferResult<()> {
        if !(1..=4).contains(&size) {
            return Err(BufferError::InvalidFieldSize(size));
        }
        self.check_and_prepare_writing(*pos, size)?;
        let (region, mut local_pos) = self.region_mut(*pos);
        byte_array::write_uint_and_advance(region, data, size, &mut local_pos);
        *pos += size;
        Ok(())
    }

    fn write_code_points_and_advance(
        &mut self,
        code_points: &[char],
        has_multiple: bool,
        pos: &mut usize,
    ) -> BufferResult<()> {
        let size = byte_array::code_points_size(code_points, has_multiple);
        self.check_and_prepare_writing(*pos, size)?;
        let (region, mut local_pos) = self.region_mut(*pos);
        byte_array::write_code_points_and_advance(region, code_points, has_multiple, &mut local_pos);
        *pos += size;
        Ok(())
    }
}
