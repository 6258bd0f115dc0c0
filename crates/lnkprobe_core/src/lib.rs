mod error;
mod input;
mod signature;
mod traits;

pub use error::{CoreError, Result};
pub use input::{Input, InputSource, classify};
pub use signature::{HEADER_SIZE, SIGNATURE, SIGNATURE_LEN, has_lnk_signature};
pub use traits::{ByteStream, RawStream};
