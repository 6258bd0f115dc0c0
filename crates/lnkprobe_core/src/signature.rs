//! The fixed LNK magic header and the bounded comparison against it.

use crate::error::Result;
use crate::traits::ByteStream;

/// First bytes of every Windows Shortcut (LNK) file: the little-endian
/// header size (0x4C) followed by the LNK class identifier
/// `00021401-0000-0000-c000-000000000046`.
pub const SIGNATURE: [u8; 20] = [
    0x4C, 0x00, 0x00, 0x00, 0x01, 0x14, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x46,
];

/// Number of bytes compared by [`has_lnk_signature`].
pub const SIGNATURE_LEN: usize = SIGNATURE.len();

/// Fixed total length of the LNK file header. The gate only inspects the
/// signature prefix; validating the rest belongs to the full parser.
pub const HEADER_SIZE: u64 = 76;

/// Checks whether the resource behind `source` starts with the LNK
/// signature.
///
/// Resources shorter than the signature, including empty ones, are a
/// negative result, not an error: only a failure to read at all is
/// surfaced. Returns `true` only on an exact byte match of the full
/// signature prefix.
pub fn has_lnk_signature(source: &mut dyn ByteStream) -> Result<bool> {
    if let Some(size) = source.size() {
        if size < SIGNATURE_LEN as u64 {
            tracing::debug!(size, "resource shorter than the signature");
            return Ok(false);
        }
    }

    let mut prefix = [0u8; SIGNATURE_LEN];
    let bytes_read = source.read_at(0, &mut prefix)?;
    if bytes_read < SIGNATURE_LEN {
        tracing::debug!(bytes_read, "truncated read, treating as non-match");
        return Ok(false);
    }

    Ok(prefix == SIGNATURE)
}
