//! Adapter exposing caller-owned streams through the handle contract.

use lnkprobe_core::{ByteStream, CoreError, RawStream, Result};
use std::io::{ErrorKind, Read, Seek, SeekFrom};

/// Wraps a borrowed [`RawStream`] behind [`ByteStream`].
///
/// The adapter never takes ownership: dropping it leaves the underlying
/// stream open, with an unspecified position. Construction probes the
/// stream's seek capability exactly once and derives the total size from
/// it; a stream that cannot seek is rejected here, before any read is
/// attempted.
pub struct StreamAdapter<'a> {
    inner: &'a mut dyn RawStream,
    size: u64,
}

impl std::fmt::Debug for StreamAdapter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StreamAdapter")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl<'a> StreamAdapter<'a> {
    pub fn new(inner: &'a mut dyn RawStream) -> Result<Self> {
        let size = inner
            .seek(SeekFrom::End(0))
            .map_err(|e| CoreError::AdapterInit { source: e })?;
        inner
            .seek(SeekFrom::Start(0))
            .map_err(|e| CoreError::AdapterInit { source: e })?;

        tracing::debug!(size, "adapted external stream");
        Ok(Self { inner, size })
    }
}

impl ByteStream for StreamAdapter<'_> {
    fn read_at(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
        self.inner.seek(SeekFrom::Start(offset)).map_err(|e| {
            if e.kind() == ErrorKind::Unsupported {
                CoreError::NonSeekable(format!("seek refused: {e}"))
            } else {
                CoreError::io("seek", e)
            }
        })?;

        let mut filled = 0;
        while filled < buffer.len() {
            match self.inner.read(&mut buffer[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
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
