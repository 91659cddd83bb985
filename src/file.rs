//! Uniform file and handle operations.
//!
//! Thin wrappers over the std platform seam with one deliberate contract:
//! binary mode everywhere (no newline translation on any target), 64-bit
//! offsets and sizes everywhere (files beyond 4 GiB work on every target),
//! and failures propagated through [`io::Result`]. Unlike allocation, file
//! operations are expected to fail under ordinary conditions: a missing
//! file or a permission error is the caller's to handle, never fatal.
//!
//! Ownership of an opened handle transfers to the caller; this layer does
//! not track handle lifetime beyond the open call.

use std::fs::{File, Metadata, OpenOptions};
use std::io::{self, Seek, SeekFrom};
use std::path::Path;

/// Open a file for binary reading.
pub fn open_read(path: impl AsRef<Path>) -> io::Result<File> {
    File::open(path)
}

/// Open a file for binary writing, creating it or truncating an existing
/// one. On unix the file is created with permissions restricted to the
/// owning user (`0o600`).
pub fn open_write(path: impl AsRef<Path>) -> io::Result<File> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    options.open(path)
}

/// Seek a handle to `pos`; returns the resulting offset from the start.
pub fn seek<S: Seek>(handle: &mut S, pos: SeekFrom) -> io::Result<u64> {
    handle.seek(pos)
}

/// Current offset from the start of the stream.
///
/// Works for a raw file handle and for buffered handles alike:
/// `BufReader`/`BufWriter` report the logical position, accounting for
/// their buffer.
pub fn position<S: Seek>(handle: &mut S) -> io::Result<u64> {
    handle.stream_position()
}

/// Point-in-time facts about a file, with a 64-bit size on every target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    /// File size in bytes.
    pub size: u64,
    /// Whether the path names a regular file.
    pub is_file: bool,
    /// Whether the path names a directory.
    pub is_dir: bool,
}

impl FileStat {
    fn from_metadata(meta: &Metadata) -> Self {
        Self {
            size: meta.len(),
            is_file: meta.is_file(),
            is_dir: meta.is_dir(),
        }
    }
}

/// Stat by path (follows symlinks).
pub fn stat(path: impl AsRef<Path>) -> io::Result<FileStat> {
    Ok(FileStat::from_metadata(&std::fs::metadata(path)?))
}

/// Stat by open handle.
pub fn fstat(file: &File) -> io::Result<FileStat> {
    Ok(FileStat::from_metadata(&file.metadata()?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn open_read_missing_path_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let result = open_read(dir.path().join("absent.bin"));
        let err = result.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn open_write_creates_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.bin");
        let file = open_write(&path).unwrap();
        assert_eq!(fstat(&file).unwrap().size, 0);
        assert!(fstat(&file).unwrap().is_file);
    }

    #[cfg(unix)]
    #[test]
    fn open_write_restricts_permissions_to_owner() {
        use std::os::unix::fs::MetadataExt;
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("private.bin");
        let file = open_write(&path).unwrap();
        let mode = file.metadata().unwrap().mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn open_write_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncate.bin");
        open_write(&path).unwrap().write_all(b"old contents").unwrap();
        let file = open_write(&path).unwrap();
        assert_eq!(fstat(&file).unwrap().size, 0);
    }

    #[test]
    fn write_seek_read_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roundtrip.bin");
        let payload = b"\x00\x01binary\r\npayload\xff";

        let mut file = open_write(&path).unwrap();
        file.write_all(payload).unwrap();
        assert_eq!(position(&mut file).unwrap(), payload.len() as u64);

        // Reopen for read and pull the bytes back.
        let mut file = open_read(&path).unwrap();
        assert_eq!(seek(&mut file, SeekFrom::Start(0)).unwrap(), 0);
        let mut back = Vec::new();
        file.read_to_end(&mut back).unwrap();
        assert_eq!(back, payload);
    }

    #[test]
    fn position_accounts_for_buffering() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("buffered.bin");
        open_write(&path).unwrap().write_all(&[7u8; 64]).unwrap();

        let mut reader = io::BufReader::new(open_read(&path).unwrap());
        let mut first = [0u8; 10];
        reader.read_exact(&mut first).unwrap();
        // The buffered handle reports the logical offset, not how far the
        // underlying descriptor has read ahead.
        assert_eq!(position(&mut reader).unwrap(), 10);
    }

    #[test]
    fn stat_by_path_matches_stat_by_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stat.bin");
        let mut file = open_write(&path).unwrap();
        file.write_all(&[0u8; 123]).unwrap();
        file.sync_all().unwrap();

        let by_path = stat(&path).unwrap();
        let by_handle = fstat(&file).unwrap();
        assert_eq!(by_path, by_handle);
        assert_eq!(by_path.size, 123);
        assert!(by_path.is_file);
        assert!(!by_path.is_dir);
    }

    #[test]
    fn stat_reports_directories() {
        let dir = tempfile::tempdir().unwrap();
        let st = stat(dir.path()).unwrap();
        assert!(st.is_dir);
        assert!(!st.is_file);
    }
}
