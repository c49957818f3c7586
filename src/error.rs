use stylecodec::CodecError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditError {
    #[error("CSS parse error: {0}")]
    Codec(#[from] CodecError),

    #[error("The file is not an image: {mime}")]
    NotAnImage { mime: String },

    #[error("File too large: {size_kb} KB (maximum is {limit_kb} KB)")]
    FileTooLarge { size_kb: u64, limit_kb: u64 },

    #[error("Invalid internal class prefix: {prefix:?}")]
    InvalidPrefix { prefix: String },
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, EditError>;
