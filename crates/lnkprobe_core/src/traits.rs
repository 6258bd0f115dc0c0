//! Core traits defining the interfaces between input resolution and the
//! signature checker.
//!
//! These traits follow the Ports & Adapters pattern: the checker only ever
//! sees a [`ByteStream`], while the adapters in the I/O crate decide how a
//! concrete file or caller-owned stream satisfies it.

use crate::error::Result;
use std::io::{Read, Seek};

/// One open, positionable, readable resource.
///
/// A `ByteStream` is exclusively owned by the single operation that created
/// it; it is never shared across concurrent checks and is released (dropped)
/// exactly once when that operation's scope ends, on every exit path.
///
/// # Example
///
/// ```ignore
/// struct MemStream(Vec<u8>);
///
/// impl ByteStream for MemStream {
///     fn read_at(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize> {
///         // Copy from the backing buffer starting at offset
///     }
///
///     fn size(&self) -> Option<u64> {
///         Some(self.0.len() as u64)
///     }
/// }
/// ```
pub trait ByteStream {
    /// Reads from the absolute `offset`, filling as much of `buffer` as the
    /// resource allows.
    ///
    /// # Returns
    ///
    /// The number of bytes actually read; fewer than `buffer.len()` only at
    /// end-of-data. Position between calls is unspecified, so callers must
    /// pass an absolute offset every time.
    fn read_at(&mut self, offset: u64, buffer: &mut [u8]) -> Result<usize>;

    /// Total size of the resource in bytes, when cheaply known.
    ///
    /// `None` means the size was not determined up front; readers then
    /// proceed optimistically and rely on short reads to signal the end.
    fn size(&self) -> Option<u64>;
}

/// The external stream shape accepted at the API boundary: anything offering
/// bounded reads and absolute seeks.
///
/// Capability verification happens once, at adapter construction, never per
/// call. The caller keeps ownership of the underlying resource; adapters
/// only borrow it.
pub trait RawStream: Read + Seek {}

impl<T: Read + Seek + ?Sized> RawStream for T {}
