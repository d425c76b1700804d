//! Engine error taxonomy.

use thiserror::Error;

use crate::dataset::DatasetError;
use crate::protocol::{ContainerError, ContainerKind, OperationCode, ResponseCode};
use crate::transport::TransportError;

#[derive(Error, Debug)]
pub enum PtpError {
    /// Wire bytes do not parse as a container. Indicates a desync.
    #[error("Malformed container: {0}")]
    Malformed(#[from] ContainerError),

    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),

    #[error("Link error: {0}")]
    Link(TransportError),

    #[error("Timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Transaction ID mismatch: expected {expected}, got {actual}")]
    TransactionMismatch { expected: u32, actual: u32 },

    #[error("Data phase for {actual} while {expected} is in flight")]
    DataPhaseMismatch {
        expected: OperationCode,
        actual: OperationCode,
    },

    #[error("Unexpected {kind} container from device")]
    UnexpectedContainer { kind: ContainerKind },

    /// The responder answered with a non-OK response code.
    #[error("Device responded {name} ({code}) to {operation}")]
    DeviceResponse {
        operation: OperationCode,
        code: ResponseCode,
        name: String,
        params: Vec<u32>,
    },

    #[error("Operation {operation} requires an open session")]
    SessionNotOpen { operation: OperationCode },

    #[error("Session is {state}, cannot {action}")]
    InvalidSessionState { state: String, action: &'static str },

    #[error("Unknown code name: {0}")]
    UnknownCode(String),

    #[error("Unknown extension: {0} (expected auto, raw or a vendor name)")]
    UnknownExtension(String),

    #[error("{operation} response is missing parameter {index}")]
    MissingParameter {
        operation: OperationCode,
        index: usize,
    },

    #[error("Property {property} is not writable with {value}")]
    InvalidPropertyValue { property: String, value: String },
}

impl From<TransportError> for PtpError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Timeout { timeout_ms } => PtpError::Timeout { timeout_ms },
            other => PtpError::Link(other),
        }
    }
}

impl PtpError {
    /// Response code of a device rejection.
    pub fn response_code(&self) -> Option<ResponseCode> {
        match self {
            PtpError::DeviceResponse { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// The device reported DeviceBusy.
    pub fn is_busy(&self) -> bool {
        self.response_code().is_some_and(|c| c.is_busy())
    }

    /// Whether the caller may reasonably retry the same request.
    ///
    /// Only busy responses and timeouts qualify. Desync errors never do.
    pub fn is_retryable(&self) -> bool {
        match self {
            PtpError::Timeout { .. } => true,
            PtpError::DeviceResponse { code, .. } => {
                code.is_busy() || *code == ResponseCode::TRANSACTION_CANCELLED
            }
            _ => false,
        }
    }

    /// The link should no longer be trusted.
    pub fn is_link_failure(&self) -> bool {
        matches!(self, PtpError::Link(_) | PtpError::Timeout { .. })
    }
}

pub type Result<T> = std::result::Result<T, PtpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_error_mapping() {
        let e: PtpError = TransportError::Timeout { timeout_ms: 250 }.into();
        assert!(matches!(e, PtpError::Timeout { timeout_ms: 250 }));
        assert!(e.is_retryable());

        let e: PtpError = TransportError::Disconnected.into();
        assert!(matches!(e, PtpError::Link(TransportError::Disconnected)));
        assert!(e.is_link_failure());
        assert!(!e.is_retryable());
    }

    #[test]
    fn test_device_response_classification() {
        let busy = PtpError::DeviceResponse {
            operation: OperationCode::INITIATE_CAPTURE,
            code: ResponseCode::DEVICE_BUSY,
            name: "DeviceBusy".into(),
            params: vec![],
        };
        assert!(busy.is_busy());
        assert!(busy.is_retryable());
        assert_eq!(busy.response_code(), Some(ResponseCode::DEVICE_BUSY));

        let full = PtpError::DeviceResponse {
            operation: OperationCode::INITIATE_CAPTURE,
            code: ResponseCode::STORE_FULL,
            name: "StoreFull".into(),
            params: vec![],
        };
        assert!(!full.is_busy());
        assert!(!full.is_retryable());
        assert!(full.to_string().contains("StoreFull"));
    }

    #[test]
    fn test_desync_not_retryable() {
        let e = PtpError::TransactionMismatch {
            expected: 3,
            actual: 4,
        };
        assert!(!e.is_retryable());
        assert!(!e.is_link_failure());
        assert_eq!(e.response_code(), None);
    }
}
