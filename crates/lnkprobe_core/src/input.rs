//! Input classification: resolving a caller-supplied value into one concrete
//! source variant, once, at the boundary.

use crate::error::{CoreError, Result};
use crate::traits::RawStream;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// A caller-supplied value to check: something path-like, or a borrowed
/// stream. The `From` impls make the accepted shapes explicit instead of
/// probing capabilities at runtime.
pub enum Input<'a> {
    Text(OsString),
    Stream(&'a mut dyn RawStream),
}

impl<'a> Input<'a> {
    pub fn stream(stream: &'a mut dyn RawStream) -> Self {
        Input::Stream(stream)
    }
}

impl<'a> From<&str> for Input<'a> {
    fn from(text: &str) -> Self {
        Input::Text(OsString::from(text))
    }
}

impl<'a> From<String> for Input<'a> {
    fn from(text: String) -> Self {
        Input::Text(OsString::from(text))
    }
}

impl<'a> From<&OsStr> for Input<'a> {
    fn from(text: &OsStr) -> Self {
        Input::Text(text.to_os_string())
    }
}

impl<'a> From<OsString> for Input<'a> {
    fn from(text: OsString) -> Self {
        Input::Text(text)
    }
}

impl<'a> From<&Path> for Input<'a> {
    fn from(path: &Path) -> Self {
        Input::Text(path.as_os_str().to_os_string())
    }
}

impl<'a> From<PathBuf> for Input<'a> {
    fn from(path: PathBuf) -> Self {
        Input::Text(path.into_os_string())
    }
}

/// One resolved input. Exactly one variant per classified value.
///
/// The two path encodings are mutually exclusive per platform build: text
/// resolves to `WidePath` on Windows (whose filesystem API is wide-native)
/// and to `NarrowPath` everywhere else. The choice is made at compile time,
/// never probed per call.
pub enum InputSource<'a> {
    /// Byte-encoded native path.
    NarrowPath(Vec<u8>),
    /// UTF-16 code units of the native wide path.
    WidePath(Vec<u16>),
    /// Borrowed external stream; ownership stays with the caller.
    Stream(&'a mut dyn RawStream),
}

impl std::fmt::Debug for InputSource<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSource::NarrowPath(bytes) => f.debug_tuple("NarrowPath").field(bytes).finish(),
            InputSource::WidePath(units) => f.debug_tuple("WidePath").field(units).finish(),
            InputSource::Stream(_) => f.debug_tuple("Stream").finish(),
        }
    }
}

/// Resolves `input` into exactly one [`InputSource`] variant.
///
/// Purely classifies: nothing is opened and no stream is touched. Empty
/// text is not a usable path and fails with
/// [`CoreError::UnsupportedInput`]; stream capability problems surface
/// later, when the adapter probes the stream at construction.
pub fn classify(input: Input<'_>) -> Result<InputSource<'_>> {
    match input {
        Input::Text(text) => {
            if text.is_empty() {
                return Err(CoreError::UnsupportedInput("empty path".to_string()));
            }
            Ok(encode_native(&text))
        }
        Input::Stream(stream) => Ok(InputSource::Stream(stream)),
    }
}

#[cfg(windows)]
fn encode_native<'a>(text: &OsStr) -> InputSource<'a> {
    use std::os::windows::ffi::OsStrExt;
    InputSource::WidePath(text.encode_wide().collect())
}

#[cfg(not(windows))]
fn encode_native<'a>(text: &OsStr) -> InputSource<'a> {
    #[cfg(unix)]
    let bytes = {
        use std::os::unix::ffi::OsStrExt;
        text.as_bytes().to_vec()
    };
    #[cfg(not(unix))]
    let bytes = text.to_string_lossy().into_owned().into_bytes();

    InputSource::NarrowPath(bytes)
}
