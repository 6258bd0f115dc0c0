//! Fast signature gate for Windows Shortcut (LNK) files.
//!
//! Answers one question cheaply, without a structural parse: does this
//! input start with the fixed LNK magic header? Callers hand in either a
//! native path or any seekable stream; both go through the same
//! classification and handle layer, so a full parser built on top can
//! reuse [`open_input`] and [`Handle`] directly.
//!
//! ```no_run
//! let is_lnk = lnkprobe::check_file_signature("example.lnk")?;
//! # Ok::<(), lnkprobe::CoreError>(())
//! ```

pub use lnkprobe_core::{
    ByteStream, CoreError, HEADER_SIZE, Input, InputSource, RawStream, Result, SIGNATURE,
    SIGNATURE_LEN, classify, has_lnk_signature,
};
pub use lnkprobe_io::{FileHandle, Handle, StreamAdapter, open_input};

use std::ffi::OsStr;
use std::io::{Read, Seek};

/// Returns the library version string. Pure and thread-safe.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Checks whether the file at `path` starts with the LNK signature.
///
/// Files shorter than the signature, including empty files, yield
/// `Ok(false)`. Fails with [`CoreError::Io`] only if the file cannot be
/// opened or read at all. The handle opened for the check is released
/// before this returns, on every exit path.
pub fn check_file_signature(path: impl AsRef<OsStr>) -> Result<bool> {
    let source = classify(Input::from(path.as_ref()))?;
    let mut handle = open_input(source)?;
    let matched = has_lnk_signature(&mut handle)?;
    tracing::debug!(matched, "path signature check complete");
    Ok(matched)
}

/// Checks whether a caller-owned stream starts with the LNK signature.
///
/// The stream is borrowed for the duration of the check and never closed;
/// its position afterwards is unspecified, so callers must seek before
/// reusing it. A stream whose seek capability fails the construction probe
/// yields [`CoreError::AdapterInit`] before any read is attempted.
///
/// Holding the `&mut` borrow for the whole check also makes sharing one
/// stream across concurrent checks unrepresentable.
pub fn check_file_signature_stream<R: Read + Seek>(stream: &mut R) -> Result<bool> {
    let source = classify(Input::stream(stream))?;
    let mut handle = open_input(source)?;
    let matched = has_lnk_signature(&mut handle)?;
    tracing::debug!(matched, "stream signature check complete");
    Ok(matched)
}
