use crate::domain::ports::{ProviderError, ProviderFailure, ProviderResult};
use crate::error::{PaymentError, Result};

/// Converts a provider's error shape into the uniform domain error.
///
/// The message is `error`, or `error:\ndetail` when a detail is present. The
/// provider code is carried along untouched.
pub fn normalize(err: ProviderError) -> PaymentError {
    let message = match err.detail {
        Some(detail) => format!("{}:\n{}", err.error, detail),
        None => err.error,
    };
    PaymentError::InvalidData {
        message,
        code: err.code,
    }
}

/// Splits a provider result into success, normalized rejection, or raw fault.
pub fn classify<T>(result: ProviderResult<T>) -> Result<T> {
    result.map_err(|failure| match failure {
        ProviderFailure::Rejected(err) => normalize(err),
        ProviderFailure::Fault(err) => PaymentError::ProviderFault(err),
    })
}
