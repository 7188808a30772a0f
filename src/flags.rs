// ptnode-fields/src/flags.rs

bitflags::bitflags! {
    /// The one-byte flags field at the head of every PtNode.
    ///
    /// The low six bits describe the node's content. The top two bits hold the
    /// moved/deleted state used by the dynamic trie when nodes are rewritten
    /// elsewhere in the buffer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        const IS_BLACKLISTED       = 0b0000_0001;
        const IS_NOT_A_WORD        = 0b0000_0010;
        const HAS_BIGRAMS          = 0b0000_0100;
        const HAS_SHORTCUT_TARGETS = 0b0000_1000;
        const IS_TERMINAL          = 0b0001_0000;
        const HAS_MULTIPLE_CHARS   = 0b0010_0000;

        /// The node has been copied to a new position; readers follow its forward link.
        const IS_MOVED             = 0b0100_0000;
        /// The node has been removed from the trie.
        const IS_DELETED           = 0b1000_0000;
        /// Both state bits set: the node lives at this position.
        const IS_NOT_MOVED         = 0b1100_0000;
    }
}

/// Mask covering the moved/deleted state bits.
pub const MASK_MOVED: u8 = 0b1100_0000;

impl NodeFlags {
    /// Builds the flags for a live (not moved) PtNode from its attributes.
    pub fn create(
        is_blacklisted: bool,
        is_not_a_word: bool,
        is_terminal: bool,
        has_shortcut_targets: bool,
        has_bigrams: bool,
        has_multiple_chars: bool,
    ) -> Self {
        let mut flags = NodeFlags::IS_NOT_MOVED;
        flags.set(NodeFlags::IS_BLACKLISTED, is_blacklisted);
        flags.set(NodeFlags::IS_NOT_A_WORD, is_not_a_word);
        flags.set(NodeFlags::IS_TERMINAL, is_terminal);
        flags.set(NodeFlags::HAS_SHORTCUT_TARGETS, has_shortcut_targets);
        flags.set(NodeFlags::HAS_BIGRAMS, has_bigrams);
        flags.set(NodeFlags::HAS_MULTIPLE_CHARS, has_multiple_chars);
        flags
    }

    /// Returns the same flags with the state bits replaced by `IS_MOVED`.
    pub fn as_moved(self) -> Self {
        NodeFlags::from_bits_retain((self.bits() & !MASK_MOVED) | NodeFlags::IS_MOVED.bits())
    }

    /// Returns the same flags with the state bits replaced by `IS_DELETED`.
    pub fn as_deleted(self) -> Self {
        NodeFlags::from_bits_retain((self.bits() & !MASK_MOVED) | NodeFlags::IS_DELETED.bits())
    }

    pub fn is_moved(self) -> bool {
        self.bits() & MASK_MOVED == NodeFlags::IS_MOVED.bits()
    }

    pub fn is_deleted(self) -> bool {
        self.bits() & MASK_MOVED == NodeFlags::IS_DELETED.bits()
    }
}
