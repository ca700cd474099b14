use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Copy, Clone)]
pub enum QRError {
    #[error("capacity exceeded: {len} bytes, largest supported version holds {max}")]
    CapacityExceeded { len: usize, max: usize },

    #[error("data too long for version {version}: {len} bytes, capacity {max}")]
    DataTooLong { len: usize, version: usize, max: usize },

    #[error("invalid version: {0}")]
    InvalidVersion(usize),

    #[error("invalid masking pattern: {0}")]
    InvalidMaskingPattern(u8),
}

pub type QRResult<T> = Result<T, QRError>;
