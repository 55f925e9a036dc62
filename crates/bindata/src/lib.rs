//! Binary-data access as typed, fixed-width fields.
//!
//! This crate models a file as a sequence of fields that can be read from
//! or written to arbitrary byte offsets, and composes fields into
//! structures usable to navigate container-style binary formats
//! (RIFF/WAV-like tagged, length-prefixed chunks).
//!
//! # Building blocks
//!
//! - [`Field`] - a fixed-size byte buffer with a textual rendering.
//!   Variants: [`RawField`] (opaque bytes), [`StringField`] (fixed-width
//!   text), and integer fields of 1, 2, 3, 4, and 8 bytes in signed and
//!   unsigned flavors, each with a selectable byte order.
//! - [`FieldStruct`] - an ordered composition of fields read or written as
//!   one record. [`ChunkHeader`] is the chunk-navigation instance:
//!   a 4-byte tag plus a 32-bit unsigned size.
//! - [`FileStream`] - the raw storage contract; [`StdFileStream`] backs it
//!   with a file on disk.
//! - [`File`] - the validated entry point enforcing open-mode, offset, and
//!   bounds invariants, including chunk-header scanning.
//!
//! # Chunk layout
//!
//! Chunk records are `[4-byte tag][4-byte unsigned length][length bytes of
//! payload]`, repeated contiguously with no padding.
//!
//! # Example
//!
//! ```no_run
//! use bindata::{File, FileMode};
//!
//! let mut file = File::from_path("track.wav")?;
//! file.open(FileMode::Read)?;
//! file.set_offset(12)?; // skip the RIFF/WAVE preamble
//! let header = file.find_chunk_header("fmt ")?;
//! println!("fmt chunk holds {} bytes", header.size().value()?);
//! file.close();
//! # Ok::<(), bindata::Error>(())
//! ```

mod error;
mod field;
mod file;
mod format;
mod int;
mod stream;
mod structure;

pub use error::{Error, Result};
pub use field::{Field, RawField, StringField};
pub use file::File;
pub use format::{Endianness, Format};
pub use int::{
    Int16Field, Int24Field, Int32Field, Int64Field, Int8Field, UInt16Field, UInt24Field,
    UInt32Field, UInt64Field, UInt8Field,
};
pub use stream::{FileMode, FileStream, StdFileStream};
pub use structure::{ChunkHeader, FieldStruct};
