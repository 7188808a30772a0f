// ptnode-fields/src/buffer/mod.rs

//! The growable byte buffer trie nodes are written into.

pub mod buffer_with_extendable_buffer;
pub mod byte_array;
pub mod extendable_buffer;


pub use buffer_with_extendable_buffer::BufferWithExtendableBuffer;
pub use extendable_buffer::ExtendableBuffer;
