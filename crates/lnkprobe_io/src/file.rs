//! Native file handle for path-based checks.

use lnkprobe_core::{ByteStream, CoreError, Result};
use std::fs::OpenOptions;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

/// A read-only handle over a native file.
///
/// `FileHandle` implements [`ByteStream`] for any path the filesystem can
/// open: regular files, device nodes, or anything else with a byte length.
/// The size is derived once at open time; the underlying descriptor is
/// released when the handle is dropped, on every exit path.
#[derive(Debug)]
pub struct FileHandle {
    file: std::fs::File,
    size: u64,
}

impl FileHandle {
    /// Opens `path` read-only and caches its size.
    ///
    /// Fails with [`CoreError::Io`] if the file cannot be opened or its
    /// size cannot be determined.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let mut file = OpenOptions::new()
            .read(true)
            .write(false)
            .open(path.as_ref())
            .map_err(|e| CoreError::io("open", e))?;

        #[cfg(target_os = "linux")]
        {
            use rustix::fs::{Advice, fadvise};
            let _ = fadvise(&file, 0, None, Advice::WillNeed);
        }

        let size = file
            .seek(SeekFrom::End(0))
            .map_err(|e| CoreError::io("seek", e))?;
        file.seek(SeekFrom::Start(0))
            .map_err(|e| CoreError::io("seek", e))?;

        Ok(Self { file, size })
    }

    /// Opens a handle from a byte-encoded native path.
    pub fn open_narrow(path: &[u8]) -> Result<Self> {
        #[cfg(unix)]
        {
            use std::ffi::OsStr;
            use std::os::unix::ffi::OsStrExt;
            Self::open(OsStr::from_bytes(path))
        }
        #[cfg(not(unix))]
        {
            let path = std::str::from_utf8(path).map_err(|_| {
                CoreError::UnsupportedInput("narrow path is not valid UTF-8".to_string())
            })?;
            Self::open(path)
        }
    }

    /// Opens a handle from UTF-16 code units of a native wide path.
    #[cfg(windows)]
    pub fn open_wide(path: &[u16]) -> Result<Self> {
        use std::ffi::OsString;
        use std::os::windows::ffi::OsStringExt;
        Self::open(OsString::from_wide(path))
    }
}

impl ByteStream for FileHandle {
    fn read_at(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
        self.file
            .seek(SeekFrom::Start(offset))
            .map_err(|e| CoreError::io("seek", e))?;

        let mut filled = 0;
        while filled < buffer.len() {
            match self.file.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(CoreError::io("read", e)),
            }
        }
        Ok(filled)
    }

    #[inline]
    fn size(&self) -> Option<u64> {
        Some(self.size)
    }
}
