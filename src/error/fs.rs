//! File system errors

use super::PromoterError;

/// Creates a file write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> PromoterError {
    PromoterError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PromoterError {
    PromoterError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> PromoterError {
    PromoterError::IoError {
        message: message.into(),
    }
}
