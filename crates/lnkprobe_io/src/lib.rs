mod adapter;
mod file;

pub use adapter::StreamAdapter;
pub use file::FileHandle;

use lnkprobe_core::{ByteStream, InputSource, Result};

#[cfg(not(windows))]
use lnkprobe_core::CoreError;

/// One open resource backing a signature check or a full parse.
pub enum Handle<'a> {
    File(FileHandle),
    Stream(StreamAdapter<'a>),
}

/// Opens the resource a classified input refers to.
///
/// Path variants open a native [`FileHandle`]; stream variants are adapted
/// in place. This is the single point where inputs become handles, so the
/// full parser reuses it instead of re-deriving classification.
pub fn open_input(source: InputSource<'_>) -> Result<Handle<'_>> {
    match source {
        InputSource::NarrowPath(bytes) => Ok(Handle::File(FileHandle::open_narrow(&bytes)?)),
        #[cfg(windows)]
        InputSource::WidePath(units) => Ok(Handle::File(FileHandle::open_wide(&units)?)),
        #[cfg(not(windows))]
        InputSource::WidePath(_) => Err(CoreError::UnsupportedInput(
            "wide paths are not the native encoding on this platform".to_string(),
        )),
        InputSource::Stream(stream) => Ok(Handle::Stream(StreamAdapter::new(stream)?)),
    }
}

impl ByteStream for Handle<'_> {
    fn read_at(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
        match self {
            Handle::File(h) => h.read_at(offset, buffer),
            Handle::Stream(h) => h.read_at(offset, buffer),
        }
    }

    #[inline]
    fn size(&self) -> Option<u64> {
        match self {
            Handle::File(h) => h.size(),
            Handle::Stream(h) => h.size(),
        }
    }
}
