//! FieldStream protocol V1 framing constants.

/// Magic found at the very beginning of every stream.
pub(crate) const PROTOCOL_MAGIC: [u8; 4] = *b"FSP1";

// Field tags, stored in the low 4 bits of each field header.
pub(crate) const TAG_BOOL_FALSE: u8 = 0x00;
pub(crate) const TAG_BOOL_TRUE: u8 = 0x01;
pub(crate) const TAG_INTEGER_32: u8 = 0x02;
pub(crate) const TAG_INTEGER_64: u8 = 0x03;
pub(crate) const TAG_FLOAT_32: u8 = 0x04;
pub(crate) const TAG_FLOAT_64: u8 = 0x05;
pub(crate) const TAG_UTF_STRING: u8 = 0x06;
pub(crate) const TAG_REF_OBJECT: u8 = 0x08;
pub(crate) const TAG_REF_SEQUENCE: u8 = 0x09;

/// Bit width of the tag inside a field header word.
pub(crate) const TAG_BITS: u32 = 4;
/// Mask extracting the tag from a field header word.
pub(crate) const TAG_MASK: u16 = (1 << TAG_BITS) - 1;

/// Field-name table capacity, bounded by the 12-bit header slot.
/// Index 0 is reserved, so usable indices are `1..4096`.
pub(crate) const FIELD_NAME_TABLE_LIMIT: u32 = 1 << (16 - TAG_BITS);
/// Type-name table capacity; index 0 is reserved, usable indices are `1..65536`.
pub(crate) const TYPE_NAME_TABLE_LIMIT: u32 = 1 << 16;
