//! Package manifest errors

use super::PromoterError;

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> PromoterError {
    PromoterError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> PromoterError {
    PromoterError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest serialize failed error
pub fn serialize_failed(path: impl Into<String>, reason: impl Into<String>) -> PromoterError {
    PromoterError::ManifestSerializeFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
