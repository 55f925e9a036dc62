//! Integer field variants.
//!
//! Ten concrete field types covering widths of 1, 2, 3, 4, and 8 bytes in
//! signed and unsigned flavors. Each field stores a two's-complement value
//! in a per-field byte order (little-endian by default); the in-memory
//! numeric value itself is order-independent. The 24-bit variants widen to
//! `u32`/`i32` since no native 3-byte integer type exists.

use std::fmt;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use crate::field::{Field, FieldBuf};
use crate::format::{self, Endianness, Format};
use crate::Result;

fn decode_u8(buf: &[u8], _endianness: Endianness) -> u8 {
    buf[0]
}

fn encode_u8(buf: &mut [u8], value: u8, _endianness: Endianness) {
    buf[0] = value;
}

fn decode_i8(buf: &[u8], _endianness: Endianness) -> i8 {
    buf[0] as i8
}

fn encode_i8(buf: &mut [u8], value: i8, _endianness: Endianness) {
    buf[0] = value as u8;
}

macro_rules! codec {
    ($decode:ident, $encode:ident, $ty:ty, $read:ident, $write:ident) => {
        fn $decode(buf: &[u8], endianness: Endianness) -> $ty {
            match endianness {
                Endianness::Little => LittleEndian::$read(buf),
                Endianness::Big => BigEndian::$read(buf),
            }
        }

        fn $encode(buf: &mut [u8], value: $ty, endianness: Endianness) {
            match endianness {
                Endianness::Little => LittleEndian::$write(buf, value),
                Endianness::Big => BigEndian::$write(buf, value),
            }
        }
    };
}

codec!(decode_u16, encode_u16, u16, read_u16, write_u16);
codec!(decode_i16, encode_i16, i16, read_i16, write_i16);
codec!(decode_u32, encode_u32, u32, read_u32, write_u32);
codec!(decode_i32, encode_i32, i32, read_i32, write_i32);
codec!(decode_u64, encode_u64, u64, read_u64, write_u64);
codec!(decode_i64, encode_i64, i64, read_i64, write_i64);

// The 24-bit codecs widen to 32-bit native integers. The stored triplet is
// assembled with the configured byte order deciding which byte is most
// significant; values are truncated to 24 bits on write and the signed
// variant sign-extends on read.
fn decode_u24(buf: &[u8], endianness: Endianness) -> u32 {
    match endianness {
        Endianness::Little => LittleEndian::read_u24(buf),
        Endianness::Big => BigEndian::read_u24(buf),
    }
}

fn encode_u24(buf: &mut [u8], value: u32, endianness: Endianness) {
    let value = value & 0x00FF_FFFF;
    match endianness {
        Endianness::Little => LittleEndian::write_u24(buf, value),
        Endianness::Big => BigEndian::write_u24(buf, value),
    }
}

fn decode_i24(buf: &[u8], endianness: Endianness) -> i32 {
    match endianness {
        Endianness::Little => LittleEndian::read_i24(buf),
        Endianness::Big => BigEndian::read_i24(buf),
    }
}

fn encode_i24(buf: &mut [u8], value: i32, endianness: Endianness) {
    encode_u24(buf, value as u32, endianness);
}

macro_rules! int_field {
    ($(#[$meta:meta])* $name:ident, $ty:ty, $width:expr, $decode:ident, $encode:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            buf: FieldBuf,
            endianness: Endianness,
        }

        impl $name {
            /// The fixed byte width of this field.
            pub const WIDTH: usize = $width;

            /// Creates a zeroed little-endian field.
            pub fn new() -> Self {
                Self::with_endianness(Endianness::Little)
            }

            /// Creates a zeroed field with the given byte order.
            pub fn with_endianness(endianness: Endianness) -> Self {
                Self {
                    buf: FieldBuf::fixed(Self::WIDTH),
                    endianness,
                }
            }

            /// Creates a little-endian field holding `value`.
            pub fn from_value(value: $ty) -> Self {
                let mut field = Self::new();
                // A freshly constructed field always has a buffer.
                let _ = field.set_value(value);
                field
            }

            /// The byte order applied when encoding or decoding the buffer.
            pub fn endianness(&self) -> Endianness {
                self.endianness
            }

            /// Decodes the stored bytes into a numeric value.
            pub fn value(&self) -> Result<$ty> {
                Ok($decode(self.buf.bytes()?, self.endianness))
            }

            /// Encodes `value` into the stored bytes.
            pub fn set_value(&mut self, value: $ty) -> Result<()> {
                let endianness = self.endianness;
                $encode(self.buf.bytes_mut()?, value, endianness);
                Ok(())
            }

            /// Transfers the buffer into a new field, leaving this one
            /// released.
            #[must_use]
            pub fn take(&mut self) -> Self {
                Self {
                    buf: self.buf.take(),
                    endianness: self.endianness,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Field for $name {
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
                Format::Dec
            }

            fn render_as(&self, format: Format) -> Result<String> {
                match format {
                    Format::Bin => Ok(format::render_bin(self.buf.bytes()?)),
                    Format::Hex => Ok(format::render_hex(self.buf.bytes()?)),
                    Format::Ascii => Ok(format::render_ascii(self.buf.bytes()?)),
                    Format::Dec => Ok(self.value()?.to_string()),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.render().map_err(|_| fmt::Error)?)
            }
        }
    };
}

int_field!(
    /// An unsigned 8-bit integer field.
    UInt8Field, u8, 1, decode_u8, encode_u8
);
int_field!(
    /// A signed 8-bit integer field.
    Int8Field, i8, 1, decode_i8, encode_i8
);
int_field!(
    /// An unsigned 16-bit integer field.
    UInt16Field, u16, 2, decode_u16, encode_u16
);
int_field!(
    /// A signed 16-bit integer field.
    Int16Field, i16, 2, decode_i16, encode_i16
);
int_field!(
    /// An unsigned 24-bit integer field, widened to `u32`.
    UInt24Field, u32, 3, decode_u24, encode_u24
);
int_field!(
    /// A signed 24-bit integer field, widened to `i32`.
    Int24Field, i32, 3, decode_i24, encode_i24
);
int_field!(
    /// An unsigned 32-bit integer field.
    UInt32Field, u32, 4, decode_u32, encode_u32
);
int_field!(
    /// A signed 32-bit integer field.
    Int32Field, i32, 4, decode_i32, encode_i32
);
int_field!(
    /// An unsigned 64-bit integer field.
    UInt64Field, u64, 8, decode_u64, encode_u64
);
int_field!(
    /// A signed 64-bit integer field.
    Int64Field, i64, 8, decode_i64, encode_i64
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_value_round_trips() {
        let mut ui8 = UInt8Field::new();
        ui8.set_value(42).unwrap();
        assert_eq!(ui8.value().unwrap(), 42);

        let mut i8f = Int8Field::new();
        i8f.set_value(-42).unwrap();
        assert_eq!(i8f.value().unwrap(), -42);

        let mut ui16 = UInt16Field::new();
        ui16.set_value(4200).unwrap();
        assert_eq!(ui16.value().unwrap(), 4200);

        let mut i16f = Int16Field::new();
        i16f.set_value(-4200).unwrap();
        assert_eq!(i16f.value().unwrap(), -4200);

        let mut ui24 = UInt24Field::new();
        ui24.set_value(420_000).unwrap();
        assert_eq!(ui24.value().unwrap(), 420_000);

        let mut i24 = Int24Field::new();
        i24.set_value(-420_000).unwrap();
        assert_eq!(i24.value().unwrap(), -420_000);

        let mut ui32 = UInt32Field::new();
        ui32.set_value(420_000_000).unwrap();
        assert_eq!(ui32.value().unwrap(), 420_000_000);

        let mut i32f = Int32Field::new();
        i32f.set_value(-420_000_000).unwrap();
        assert_eq!(i32f.value().unwrap(), -420_000_000);

        let mut ui64 = UInt64Field::new();
        ui64.set_value(420_000_000_000).unwrap();
        assert_eq!(ui64.value().unwrap(), 420_000_000_000);

        let mut i64f = Int64Field::new();
        i64f.set_value(-420_000_000_000).unwrap();
        assert_eq!(i64f.value().unwrap(), -420_000_000_000);
    }

    #[test]
    fn test_byte_order_controls_storage_layout() {
        let mut little = UInt32Field::new();
        little.set_value(0x0102_0304).unwrap();
        assert_eq!(little.data().unwrap(), &[0x04, 0x03, 0x02, 0x01]);

        let mut big = UInt32Field::with_endianness(Endianness::Big);
        big.set_value(0x0102_0304).unwrap();
        assert_eq!(big.data().unwrap(), &[0x01, 0x02, 0x03, 0x04]);

        // Same value either way once decoded.
        assert_eq!(little.value().unwrap(), big.value().unwrap());
    }

    #[test]
    fn test_24_bit_layout_and_sign_extension() {
        let mut little = UInt24Field::new();
        little.set_value(0x0001_0203).unwrap();
        assert_eq!(little.data().unwrap(), &[0x03, 0x02, 0x01]);

        let mut big = UInt24Field::with_endianness(Endianness::Big);
        big.set_value(0x0001_0203).unwrap();
        assert_eq!(big.data().unwrap(), &[0x01, 0x02, 0x03]);

        let mut negative = Int24Field::new();
        negative.set_value(-1).unwrap();
        assert_eq!(negative.data().unwrap(), &[0xFF, 0xFF, 0xFF]);
        assert_eq!(negative.value().unwrap(), -1);

        let mut big_negative = Int24Field::with_endianness(Endianness::Big);
        big_negative.set_value(-420_000).unwrap();
        assert_eq!(big_negative.value().unwrap(), -420_000);
    }

    #[test]
    fn test_24_bit_truncates_on_write() {
        let mut field = UInt24Field::new();
        field.set_value(0xFF00_0001).unwrap();
        assert_eq!(field.value().unwrap(), 0x0000_0001);
    }

    #[test]
    fn test_from_value() {
        assert_eq!(UInt8Field::from_value(99).value().unwrap(), 99);
        assert_eq!(UInt32Field::from_value(4).data().unwrap(), &[4, 0, 0, 0]);
        assert_eq!(
            Int64Field::from_value(-420_000_000_000).value().unwrap(),
            -420_000_000_000
        );
    }

    #[test]
    fn test_rendering() {
        let field = UInt16Field::from_value(0x4142);
        assert_eq!(field.render().unwrap(), "16706");
        assert_eq!(field.render_as(Format::Dec).unwrap(), "16706");
        // Bin, hex, and ascii render the raw bytes in storage order,
        // independent of the numeric byte order.
        assert_eq!(field.render_as(Format::Hex).unwrap(), "42 41");
        assert_eq!(field.render_as(Format::Ascii).unwrap(), "BA");
        assert_eq!(field.render_as(Format::Bin).unwrap(), "01000010 01000001");

        let negative = Int16Field::from_value(-4200);
        assert_eq!(negative.render().unwrap(), "-4200");
        assert_eq!(format!("{negative}"), "-4200");
    }

    #[test]
    fn test_take_releases_the_source() {
        let mut source = UInt32Field::from_value(420_000_000);
        let moved = source.take();

        assert_eq!(source.size(), 0);
        assert!(matches!(source.value(), Err(Error::InvalidField(_))));
        assert!(matches!(source.set_value(1), Err(Error::InvalidField(_))));
        assert!(matches!(source.render(), Err(Error::InvalidField(_))));

        assert_eq!(moved.size(), 4);
        assert_eq!(moved.value().unwrap(), 420_000_000);
    }

    #[test]
    fn test_clone_is_a_deep_copy() {
        let original = UInt16Field::from_value(4200);
        let mut copy = original.clone();
        copy.set_value(1).unwrap();
        assert_eq!(original.value().unwrap(), 4200);
        assert_eq!(copy.value().unwrap(), 1);
    }

    #[test]
    fn test_widths() {
        assert_eq!(UInt8Field::new().size(), 1);
        assert_eq!(Int16Field::new().size(), 2);
        assert_eq!(UInt24Field::new().size(), 3);
        assert_eq!(Int32Field::new().size(), 4);
        assert_eq!(UInt64Field::new().size(), 8);
    }
}
