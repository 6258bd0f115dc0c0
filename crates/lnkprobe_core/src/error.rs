use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unsupported input: {0}")]
    UnsupportedInput(String),

    #[error("stream does not support seeking: {0}")]
    NonSeekable(String),

    #[error("unable to initialize stream adapter: {source}")]
    AdapterInit {
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error during {op}: {source}")]
    Io {
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("out of memory: {0}")]
    OutOfMemory(String),
}

impl CoreError {
    /// Tags a low-level I/O failure with the operation that raised it.
    /// OS-reported allocation failures keep their own variant.
    pub fn io(op: &'static str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::OutOfMemory {
            return Self::OutOfMemory(format!("{op}: {source}"));
        }
        Self::Io { op, source }
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
