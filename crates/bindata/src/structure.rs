//! Field composition: ordered records of fields.

use crate::field::{Field, StringField};
use crate::format::Endianness;
use crate::int::UInt32Field;

/// An ordered, fixed sequence of fields read or written as one record.
///
/// The sequence order is fixed for the lifetime of the structure and
/// defines the on-disk layout: the first field occupies the lowest offset.
/// Reading and writing a structure is driven entirely by
/// [`crate::File`], which treats it as an opaque ordered list.
pub trait FieldStruct {
    /// The ordered fields comprising this structure.
    fn fields(&self) -> Vec<&dyn Field>;

    /// The ordered fields comprising this structure, mutably.
    fn fields_mut(&mut self) -> Vec<&mut dyn Field>;
}

/// The header of a tagged, length-prefixed chunk record:
/// `[4-byte tag][4-byte unsigned length]`.
///
/// Container-style formats (RIFF/WAV and friends) lay files out as a run
/// of such records, each header followed by `size` bytes of payload.
#[derive(Debug, Clone)]
pub struct ChunkHeader {
    id: StringField,
    size: UInt32Field,
}

impl ChunkHeader {
    /// The byte width of the tag field.
    pub const ID_WIDTH: usize = 4;

    /// Creates a zeroed header with a little-endian size field.
    pub fn new() -> Self {
        Self::with_endianness(Endianness::Little)
    }

    /// Creates a zeroed header whose size field uses the given byte order.
    pub fn with_endianness(endianness: Endianness) -> Self {
        Self {
            id: StringField::fixed(Self::ID_WIDTH),
            size: UInt32Field::with_endianness(endianness),
        }
    }

    /// The 4-byte chunk tag.
    pub fn id(&self) -> &StringField {
        &self.id
    }

    /// The 4-byte chunk tag, mutably.
    pub fn id_mut(&mut self) -> &mut StringField {
        &mut self.id
    }

    /// The declared payload length.
    pub fn size(&self) -> &UInt32Field {
        &self.size
    }

    /// The declared payload length, mutably.
    pub fn size_mut(&mut self) -> &mut UInt32Field {
        &mut self.size
    }
}

impl Default for ChunkHeader {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldStruct for ChunkHeader {
    fn fields(&self) -> Vec<&dyn Field> {
        vec![&self.id, &self.size]
    }

    fn fields_mut(&mut self) -> Vec<&mut dyn Field> {
        vec![&mut self.id, &mut self.size]
    }
}
