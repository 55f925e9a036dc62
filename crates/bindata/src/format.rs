//! Byte order and text rendering selectors.

/// Byte order used when encoding or decoding a multi-byte integer value
/// into its stored bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endianness {
    /// Least significant byte first. The default for all fields.
    #[default]
    Little,
    /// Most significant byte first.
    Big,
}

/// Text rendering format for a field's contents.
///
/// Not every field variant supports every format: raw and string fields
/// reject [`Format::Dec`], which only makes sense for integer fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Eight '0'/'1' characters per byte, space-separated, in buffer order.
    Bin,
    /// Two uppercase hex digits per byte, space-separated, in buffer order.
    Hex,
    /// One character per byte.
    Ascii,
    /// Base-10 rendering of the integer value.
    Dec,
}

/// Renders bytes as space-separated uppercase hex pairs, in storage order.
///
/// Storage order is independent of any numeric byte order: this renders the
/// raw bytes, not an integer value.
pub(crate) fn render_hex(data: &[u8]) -> String {
    let pairs: Vec<String> = data.iter().map(|b| format!("{b:02X}")).collect();
    pairs.join(" ")
}

/// Renders bytes as space-separated 8-bit binary groups, most significant
/// bit first, in storage order.
pub(crate) fn render_bin(data: &[u8]) -> String {
    let groups: Vec<String> = data.iter().map(|b| format!("{b:08b}")).collect();
    groups.join(" ")
}

/// Renders one character per byte, verbatim.
pub(crate) fn render_ascii(data: &[u8]) -> String {
    data.iter().map(|&b| b as char).collect()
}

/// Renders one character per byte, substituting `.` for anything outside
/// the printable range 0x20-0x7E (control characters, DEL, and the upper
/// 128 values).
pub(crate) fn render_printable(data: &[u8]) -> String {
    data.iter()
        .map(|&b| if (0x20..=0x7E).contains(&b) { b as char } else { '.' })
        .collect()
}
