//! Bundle discovery and assembly errors

use super::PromoterError;

/// Creates a no bundles found error
pub fn none_found(path: impl Into<String>) -> PromoterError {
    PromoterError::NoBundlesFound { path: path.into() }
}

/// Creates a discovery failed error
pub fn discovery_failed(path: impl Into<String>, reason: impl Into<String>) -> PromoterError {
    PromoterError::DiscoveryFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a descriptor missing error
pub fn descriptor_missing(name: impl Into<String>, path: impl Into<String>) -> PromoterError {
    PromoterError::DescriptorMissing {
        name: name.into(),
        path: path.into(),
    }
}

/// Creates a payload missing error
pub fn payload_missing(name: impl Into<String>, path: impl Into<String>) -> PromoterError {
    PromoterError::PayloadMissing {
        name: name.into(),
        path: path.into(),
    }
}

/// Creates an assembly failed error
pub fn assembly_failed(name: impl Into<String>, reason: impl Into<String>) -> PromoterError {
    PromoterError::AssemblyFailed {
        name: name.into(),
        reason: reason.into(),
    }
}

/// Creates an output inside payload error
pub fn output_inside_payload(
    name: impl Into<String>,
    output: impl Into<String>,
    payload: impl Into<String>,
) -> PromoterError {
    PromoterError::OutputInsidePayload {
        name: name.into(),
        output: output.into(),
        payload: payload.into(),
    }
}
