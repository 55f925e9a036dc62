//! The raw storage contract and its filesystem implementation.
//!
//! [`FileStream`] is the minimal interface for sequential, seekable byte
//! access to one named resource. It performs no validation beyond what the
//! underlying resource itself enforces; all safety invariants live in
//! [`crate::File`].

use std::fs;
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::field::Field;
use crate::{Error, Result};

const STREAM_NOT_OPEN_ERROR: &str = "stream is not open";

/// The mode a stream or file is opened in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileMode {
    /// Read-only access. The default.
    #[default]
    Read,
    /// Write-only access, truncating any existing contents.
    Write,
    /// Write-only access with the offset forced to end-of-stream on open.
    WriteAppend,
    /// Combined read and write access to an existing resource.
    ReadWrite,
}

/// Sequential, seekable byte access to one named storage resource.
///
/// Concurrent calls on one stream instance are undefined; callers must
/// serialize access externally.
pub trait FileStream {
    /// The name of the underlying resource.
    fn file_name(&self) -> &str;

    /// Whether the stream is currently open.
    fn is_open(&self) -> bool;

    /// Whether the underlying resource exists.
    fn exists(&self) -> bool;

    /// The current read/write cursor position, in bytes from the start.
    fn offset(&self) -> u64;

    /// The mode the stream was last opened in.
    fn mode(&self) -> FileMode;

    /// The current size of the resource in bytes.
    fn size(&self) -> u64;

    /// Opens the resource in the given mode.
    fn open(&mut self, mode: FileMode) -> Result<()>;

    /// Closes the stream. The tracked offset survives for the next open.
    fn close(&mut self);

    /// Fills the field's buffer with exactly `field.size()` bytes at the
    /// current offset, then advances the offset by that amount.
    fn read(&mut self, field: &mut dyn Field) -> Result<()>;

    /// Writes exactly `field.size()` bytes at the current offset, advances
    /// the offset, and grows the tracked size if the new offset exceeds it.
    fn write(&mut self, field: &dyn Field) -> Result<()>;

    /// Seeks to an absolute offset.
    fn set_offset(&mut self, offset: u64) -> Result<()>;
}

/// A [`FileStream`] backed by a file on disk.
#[derive(Debug)]
pub struct StdFileStream {
    name: String,
    handle: Option<fs::File>,
    mode: FileMode,
    size: u64,
    offset: u64,
}

impl StdFileStream {
    /// Creates a closed stream for the named file.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: None,
            mode: FileMode::Read,
            size: 0,
            offset: 0,
        }
    }
}

impl FileStream for StdFileStream {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    fn exists(&self) -> bool {
        Path::new(&self.name).exists()
    }

    fn offset(&self) -> u64 {
        self.offset
    }

    fn mode(&self) -> FileMode {
        self.mode
    }

    fn size(&self) -> u64 {
        if self.handle.is_some() {
            self.size
        } else {
            fs::metadata(&self.name).map(|m| m.len()).unwrap_or(0)
        }
    }

    fn open(&mut self, mode: FileMode) -> Result<()> {
        let mut options = fs::OpenOptions::new();
        match mode {
            FileMode::Read => {
                options.read(true);
            }
            FileMode::Write => {
                options.write(true).create(true).truncate(true);
            }
            FileMode::WriteAppend => {
                options.write(true).create(true);
            }
            FileMode::ReadWrite => {
                options.read(true).write(true);
            }
        }
        let mut handle = options.open(&self.name)?;
        self.size = handle.metadata()?.len();
        if mode == FileMode::WriteAppend {
            self.offset = self.size;
        }
        handle.seek(SeekFrom::Start(self.offset))?;
        self.handle = Some(handle);
        self.mode = mode;
        Ok(())
    }

    fn close(&mut self) {
        self.handle = None;
    }

    fn read(&mut self, field: &mut dyn Field) -> Result<()> {
        let handle = self
            .handle
            .as_mut()
            .ok_or(Error::InvalidFileOperation(STREAM_NOT_OPEN_ERROR))?;
        handle.read_exact(field.data_mut()?)?;
        self.offset += field.size() as u64;
        Ok(())
    }

    fn write(&mut self, field: &dyn Field) -> Result<()> {
        let handle = self
            .handle
            .as_mut()
            .ok_or(Error::InvalidFileOperation(STREAM_NOT_OPEN_ERROR))?;
        handle.write_all(field.data()?)?;
        self.offset += field.size() as u64;
        if self.offset > self.size {
            self.size = self.offset;
        }
        Ok(())
    }

    fn set_offset(&mut self, offset: u64) -> Result<()> {
        self.offset = offset;
        if let Some(handle) = self.handle.as_mut() {
            handle.seek(SeekFrom::Start(offset))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::RawField;
    use crate::int::UInt32Field;

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> String {
        dir.path().join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_closed_stream_queries() {
        let dir = tempfile::tempdir().unwrap();
        let stream = StdFileStream::new(temp_path(&dir, "missing"));
        assert_eq!(stream.file_name(), temp_path(&dir, "missing"));
        assert!(!stream.is_open());
        assert!(!stream.exists());
        assert_eq!(stream.size(), 0);
        assert_eq!(stream.offset(), 0);
        assert_eq!(stream.mode(), FileMode::Read);
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "data");
        let mut stream = StdFileStream::new(&path);

        stream.open(FileMode::Write).unwrap();
        let field = UInt32Field::from_value(0xDEAD_BEEF);
        stream.write(&field).unwrap();
        assert_eq!(stream.offset(), 4);
        assert_eq!(stream.size(), 4);
        stream.close();
        assert!(!stream.is_open());
        assert!(stream.exists());

        stream.set_offset(0).unwrap();
        stream.open(FileMode::Read).unwrap();
        let mut read_back = UInt32Field::new();
        stream.read(&mut read_back).unwrap();
        assert_eq!(read_back.value().unwrap(), 0xDEAD_BEEF);
        assert_eq!(stream.offset(), 4);
    }

    #[test]
    fn test_reading_while_closed_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut stream = StdFileStream::new(temp_path(&dir, "closed"));
        let mut field = RawField::new(4).unwrap();
        assert!(matches!(
            stream.read(&mut field),
            Err(Error::InvalidFileOperation(_))
        ));
        assert_eq!(stream.offset(), 0);
    }

    #[test]
    fn test_append_positions_at_end() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "append");
        std::fs::write(&path, b"1234").unwrap();

        let mut stream = StdFileStream::new(&path);
        stream.open(FileMode::WriteAppend).unwrap();
        assert_eq!(stream.offset(), 4);
        assert_eq!(stream.size(), 4);

        stream.write(&UInt32Field::from_value(1)).unwrap();
        assert_eq!(stream.offset(), 8);
        assert_eq!(stream.size(), 8);
        stream.close();

        assert_eq!(std::fs::read(&path).unwrap(), b"1234\x01\0\0\0");
    }

    #[test]
    fn test_write_mode_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "truncate");
        std::fs::write(&path, b"old contents").unwrap();

        let mut stream = StdFileStream::new(&path);
        stream.open(FileMode::Write).unwrap();
        assert_eq!(stream.size(), 0);
    }

    #[test]
    fn test_offset_survives_close() {
        let dir = tempfile::tempdir().unwrap();
        let path = temp_path(&dir, "seek");
        std::fs::write(&path, b"abcdefgh").unwrap();

        let mut stream = StdFileStream::new(&path);
        stream.set_offset(4).unwrap();
        stream.open(FileMode::Read).unwrap();
        let mut field = RawField::new(4).unwrap();
        stream.read(&mut field).unwrap();
        assert_eq!(field.render_as(crate::Format::Ascii).unwrap(), "efgh");
    }
}
