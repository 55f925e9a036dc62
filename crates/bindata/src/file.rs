//! The validated file orchestrator.
//!
//! [`File`] wraps a [`FileStream`] and layers the open-mode, offset, and
//! bounds invariants on top of it: at most one open mode at a time, the
//! offset never exceeds the size, and reads never cross end-of-file. Byte
//! transfer itself is delegated to the stream.

use crate::field::Field;
use crate::stream::{FileMode, FileStream, StdFileStream};
use crate::structure::{ChunkHeader, FieldStruct};
use crate::{Error, Result};

const EMPTY_NAME_ERROR: &str = "file name cannot be empty";
const ALREADY_OPEN_ERROR: &str = "file is already open";
const DOES_NOT_EXIST_ERROR: &str = "file does not exist";
const NOT_OPEN_FOR_READING_ERROR: &str = "file is not open for reading";
const NOT_OPEN_FOR_WRITING_ERROR: &str = "file is not open for writing";
const READ_PAST_END_ERROR: &str = "cannot read beyond end of file";
const WRITE_PAST_END_ERROR: &str = "offset must not be beyond end of file";
const OFFSET_PAST_END_ERROR: &str = "offset cannot be beyond file size";

/// A binary file accessed as typed fields at explicit offsets.
///
/// Every operation is synchronous and completes before returning.
/// Concurrent calls on one instance are undefined; callers must serialize
/// access externally. No provision is made for detecting external
/// modification of the underlying resource.
#[derive(Debug)]
pub struct File<S: FileStream = StdFileStream> {
    stream: S,
}

impl File<StdFileStream> {
    /// Creates a closed file over the named path on disk.
    ///
    /// Fails with [`Error::InvalidFile`] if the name is empty, since the
    /// file would have no underlying storage resource.
    pub fn from_path(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(Error::InvalidFile(EMPTY_NAME_ERROR));
        }
        Ok(Self::new(StdFileStream::new(name)))
    }
}

impl<S: FileStream> File<S> {
    /// Creates a closed file over the given stream.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// The name of the underlying resource.
    pub fn name(&self) -> &str {
        self.stream.file_name()
    }

    /// The current size of the file in bytes.
    pub fn size(&self) -> u64 {
        self.stream.size()
    }

    /// The current read/write cursor position.
    pub fn offset(&self) -> u64 {
        self.stream.offset()
    }

    /// Whether the file is currently open.
    pub fn is_open(&self) -> bool {
        self.stream.is_open()
    }

    /// Whether the underlying resource exists.
    pub fn exists(&self) -> bool {
        self.stream.exists()
    }

    /// The mode the file was last opened in.
    pub fn mode(&self) -> FileMode {
        self.stream.mode()
    }

    /// Opens the file in the given mode.
    ///
    /// Fails with [`Error::InvalidFileOperation`] if the file is already
    /// open, or if the resource does not exist and `mode` is
    /// [`FileMode::Read`].
    pub fn open(&mut self, mode: FileMode) -> Result<()> {
        if self.is_open() {
            return Err(Error::InvalidFileOperation(ALREADY_OPEN_ERROR));
        }
        if !self.exists() && mode == FileMode::Read {
            return Err(Error::InvalidFileOperation(DOES_NOT_EXIST_ERROR));
        }
        self.stream.open(mode)
    }

    /// Closes the file unconditionally.
    pub fn close(&mut self) {
        self.stream.close();
    }

    /// Reads `field.size()` bytes at the current offset into the field.
    ///
    /// Requires the file to be open in [`FileMode::Read`] or
    /// [`FileMode::ReadWrite`], and the full field to fit before
    /// end-of-file. On failure the offset does not advance and the field is
    /// not mutated.
    pub fn read(&mut self, field: &mut dyn Field) -> Result<()> {
        if !self.is_open_for_reading() {
            return Err(Error::InvalidFileOperation(NOT_OPEN_FOR_READING_ERROR));
        }
        if self.stream.offset() + field.size() as u64 > self.stream.size() {
            return Err(Error::InvalidFileOperation(READ_PAST_END_ERROR));
        }
        self.stream.read(field)
    }

    /// Writes the field's bytes at the current offset.
    ///
    /// Requires the file to be open in [`FileMode::Write`],
    /// [`FileMode::WriteAppend`], or [`FileMode::ReadWrite`]. The offset may
    /// equal the size (writes legitimately extend the file) but not exceed
    /// it.
    pub fn write(&mut self, field: &dyn Field) -> Result<()> {
        if !self.is_open_for_writing() {
            return Err(Error::InvalidFileOperation(NOT_OPEN_FOR_WRITING_ERROR));
        }
        if self.stream.offset() > self.stream.size() {
            return Err(Error::InvalidFileOperation(WRITE_PAST_END_ERROR));
        }
        self.stream.write(field)
    }

    /// Reads a structure field-by-field in sequence order.
    ///
    /// A per-field failure aborts the whole operation without rolling back
    /// fields already transferred.
    pub fn read_struct(&mut self, structure: &mut dyn FieldStruct) -> Result<()> {
        for field in structure.fields_mut() {
            self.read(field)?;
        }
        Ok(())
    }

    /// Writes a structure field-by-field in sequence order, so its on-disk
    /// layout is the concatenation of its fields' encodings.
    ///
    /// A per-field failure aborts the whole operation without rolling back
    /// fields already transferred.
    pub fn write_struct(&mut self, structure: &dyn FieldStruct) -> Result<()> {
        for field in structure.fields() {
            self.write(field)?;
        }
        Ok(())
    }

    /// Seeks to an absolute offset.
    ///
    /// `offset == size` is permitted, positioning exactly at end-of-file;
    /// anything beyond fails with [`Error::InvalidFileOperation`].
    pub fn set_offset(&mut self, offset: u64) -> Result<()> {
        if offset > self.size() {
            return Err(Error::InvalidFileOperation(OFFSET_PAST_END_ERROR));
        }
        self.stream.set_offset(offset)
    }

    /// Scans chunk records for a header whose tag equals `id`.
    ///
    /// Scanning begins at the *current* offset; callers wanting a
    /// whole-file scan must seek to the first chunk boundary first. Each
    /// candidate header is read with a little-endian size field, and on a
    /// tag mismatch the scan skips the chunk's entire declared payload to
    /// reach the next record.
    ///
    /// Format precondition: from the starting offset onward, the file must
    /// consist of contiguous `[tag][length][payload]` records with no
    /// padding, every payload exactly as long as its header declares. When
    /// no matching record remains, the scan terminates with the
    /// end-of-file bounds error from the final failed read rather than a
    /// dedicated not-found error.
    pub fn find_chunk_header(&mut self, id: &str) -> Result<ChunkHeader> {
        loop {
            let mut header = ChunkHeader::new();
            self.read_struct(&mut header)?;
            if header.id().render()? == id {
                return Ok(header);
            }
            let next = self.stream.offset() + u64::from(header.size().value()?);
            self.set_offset(next)?;
        }
    }

    fn is_open_for_reading(&self) -> bool {
        let mode = self.stream.mode();
        self.is_open() && (mode == FileMode::Read || mode == FileMode::ReadWrite)
    }

    fn is_open_for_writing(&self) -> bool {
        let mode = self.stream.mode();
        self.is_open()
            && (mode == FileMode::Write
                || mode == FileMode::WriteAppend
                || mode == FileMode::ReadWrite)
    }
}
