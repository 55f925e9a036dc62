//! The field abstraction: fixed-size typed byte buffers.
//!
//! A [`Field`] owns a fixed-size buffer and knows how to render it as text.
//! Concrete variants are [`RawField`] (opaque bytes), [`StringField`]
//! (fixed-width text), and the integer family in [`crate::int`].

use std::fmt;

use crate::format::{self, Format};
use crate::{Error, Result};

pub(crate) const ZERO_SIZE_ERROR: &str = "field size must be at least 1 byte";
pub(crate) const RELEASED_ERROR: &str = "field buffer has been released";
const RAW_FORMAT_ERROR: &str = "raw fields can only be formatted as Bin, Hex, or Ascii";
const STRING_FORMAT_ERROR: &str = "string fields can only be formatted as Bin, Hex, or Ascii";

/// The capability interface shared by all field variants.
///
/// A field's length is fixed at construction and never changes. Taking the
/// buffer out of a field (see [`RawField::take`] and friends) leaves it in a
/// released state: `size()` reports 0 and every buffer or rendering
/// operation fails with [`Error::InvalidField`].
pub trait Field {
    /// Borrows the owned buffer.
    fn data(&self) -> Result<&[u8]>;

    /// Mutably borrows the owned buffer.
    fn data_mut(&mut self) -> Result<&mut [u8]>;

    /// The fixed byte length, or 0 if the buffer has been released.
    fn size(&self) -> usize;

    /// The format used by [`Field::render`].
    fn default_format(&self) -> Format;

    /// Renders the buffer in the given format.
    ///
    /// Fails with [`Error::InvalidFormat`] if the variant does not support
    /// the requested format.
    fn render_as(&self, format: Format) -> Result<String>;

    /// Renders the buffer in the variant's default format.
    fn render(&self) -> Result<String> {
        self.render_as(self.default_format())
    }
}

/// An owned-or-released byte buffer backing every field variant.
///
/// The released state models a moved-from field as a checked runtime
/// condition rather than a dangling pointer.
#[derive(Debug, Clone)]
pub(crate) struct FieldBuf(Option<Box<[u8]>>);

impl FieldBuf {
    /// Creates a zeroed buffer, rejecting zero-length fields.
    pub(crate) fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidField(ZERO_SIZE_ERROR));
        }
        Ok(Self::fixed(size))
    }

    /// Creates a zeroed buffer of a known non-zero length.
    pub(crate) fn fixed(size: usize) -> Self {
        Self(Some(vec![0u8; size].into_boxed_slice()))
    }

    pub(crate) fn bytes(&self) -> Result<&[u8]> {
        match &self.0 {
            Some(buf) => Ok(buf),
            None => Err(Error::InvalidField(RELEASED_ERROR)),
        }
    }

    pub(crate) fn bytes_mut(&mut self) -> Result<&mut [u8]> {
        match &mut self.0 {
            Some(buf) => Ok(buf),
            None => Err(Error::InvalidField(RELEASED_ERROR)),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.0.as_ref().map_or(0, |buf| buf.len())
    }

    /// Transfers the buffer out, leaving this one released.
    pub(crate) fn take(&mut self) -> Self {
        Self(self.0.take())
    }
}

/// A field holding opaque bytes.
///
/// Renders as hex by default; also supports binary and verbatim ASCII.
#[derive(Debug, Clone)]
pub struct RawField {
    buf: FieldBuf,
}

impl RawField {
    /// Creates a zero-filled raw field of the given size.
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self { buf: FieldBuf::new(size)? })
    }

    /// Transfers the buffer into a new field, leaving this one released.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self { buf: self.buf.take() }
    }
}

impl Field for RawField {
    fn data(&self) -> Result<&[u8]> {
        self.buf.bytes()
    }

    fn data_mut(&mut self) -> Result<&mut [u8]> {
        self.buf.bytes_mut()
    }

    fn size(&self) -> usize {
        self.buf.len()
    }

    fn default_format(&self) -> Format {
        Format::Hex
    }

    fn render_as(&self, format: Format) -> Result<String> {
        let data = self.buf.bytes()?;
        match format {
            Format::Bin => Ok(format::render_bin(data)),
            Format::Hex => Ok(format::render_hex(data)),
            Format::Ascii => Ok(format::render_ascii(data)),
            Format::Dec => Err(Error::InvalidFormat(RAW_FORMAT_ERROR)),
        }
    }
}

impl fmt::Display for RawField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().map_err(|_| fmt::Error)?)
    }
}

/// A field interpreted as fixed-length text.
///
/// The default rendering substitutes `.` for any byte outside the printable
/// range 0x20-0x7E; the explicit [`Format::Ascii`] rendering applies the
/// same substitution. There is no raw-passthrough text mode.
#[derive(Debug, Clone)]
pub struct StringField {
    buf: FieldBuf,
}

impl StringField {
    /// Creates a null-filled string field of the given size.
    pub fn new(size: usize) -> Result<Self> {
        Ok(Self { buf: FieldBuf::new(size)? })
    }

    /// Creates a string field of the given size initialized from `text`,
    /// truncated or null-padded to fit.
    pub fn with_text(text: &str, size: usize) -> Result<Self> {
        let mut field = Self::new(size)?;
        field.set_text(text)?;
        Ok(field)
    }

    /// Creates a string field of a known non-zero size.
    pub(crate) fn fixed(size: usize) -> Self {
        Self { buf: FieldBuf::fixed(size) }
    }

    /// Writes `text` into the buffer, left-aligned, null-padding the
    /// remainder and truncating if the text exceeds capacity.
    pub fn set_text(&mut self, text: &str) -> Result<()> {
        let buf = self.buf.bytes_mut()?;
        let bytes = text.as_bytes();
        let len = bytes.len().min(buf.len());
        buf[..len].copy_from_slice(&bytes[..len]);
        buf[len..].fill(0);
        Ok(())
    }

    /// Transfers the buffer into a new field, leaving this one released.
    #[must_use]
    pub fn take(&mut self) -> Self {
        Self { buf: self.buf.take() }
    }
}

impl Field for StringField {
    fn data(&self) -> Result<&[u8]> {
        self.buf.bytes()
    }

    fn data_mut(&mut self) -> Result<&mut [u8]> {
        self.buf.bytes_mut()
    }

    fn size(&self) -> usize {
        self.buf.len()
    }

    fn default_format(&self) -> Format {
        Format::Ascii
    }

    fn render_as(&self, format: Format) -> Result<String> {
        let data = self.buf.bytes()?;
        match format {
            Format::Bin => Ok(format::render_bin(data)),
            Format::Hex => Ok(format::render_hex(data)),
            Format::Ascii => Ok(format::render_printable(data)),
            Format::Dec => Err(Error::InvalidFormat(STRING_FORMAT_ERROR)),
        }
    }
}

impl fmt::Display for StringField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render().map_err(|_| fmt::Error)?)
    }
}
