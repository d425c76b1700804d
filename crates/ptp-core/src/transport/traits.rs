//! Transport layer abstraction.
//!
//! Defines the `PtpTransport` trait that moves raw container bytes between
//! the engine and a responder, allowing different implementations (nusb,
//! mock, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Device not found: VID={vid:04X} PID={pid:04X}")]
    DeviceNotFound { vid: u16, pid: u16 },

    #[error("No still image interface found")]
    NoStillImageInterface,

    #[error("Failed to open device: {0}")]
    OpenFailed(String),

    #[error("Failed to claim interface {interface}: {message}")]
    ClaimInterfaceFailed { interface: u8, message: String },

    #[error("Endpoint not found: type={ep_type}, direction={direction}")]
    EndpointNotFound { ep_type: String, direction: String },

    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Read failed: {0}")]
    ReadFailed(String),

    #[error("Device disconnected")]
    Disconnected,

    #[error("Timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Abstract PTP transport.
///
/// Implementations only move bytes; framing and correlation belong to the
/// engine. Methods take `&self` so one transport can be shared between the
/// transaction path and an event poller.
pub trait PtpTransport: Send + Sync {
    /// Send raw bytes on the main OUT pipe.
    fn send(&self, data: &[u8]) -> Result<(), TransportError>;

    /// Receive at most `max_len` bytes from the main IN pipe.
    ///
    /// One call may return part of a container or several containers back to
    /// back; the engine reassembles.
    fn receive(&self, max_len: usize) -> Result<Vec<u8>, TransportError>;

    /// Poll the out-of-band event pipe. `Ok(None)` means nothing is pending.
    ///
    /// Transports without a separate event path deliver events interleaved
    /// on [`receive`](Self::receive) and keep this default.
    fn receive_event(&self) -> Result<Option<Vec<u8>>, TransportError> {
        Ok(None)
    }

    /// Whether [`receive_event`](Self::receive_event) is backed by a real pipe.
    fn has_event_endpoint(&self) -> bool {
        false
    }

    /// Release link resources. Must be idempotent.
    fn close(&self) -> Result<(), TransportError>;

    /// Check if the link is still usable.
    fn is_connected(&self) -> bool;
}

impl<T: PtpTransport + ?Sized> PtpTransport for Box<T> {
    fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        (**self).send(data)
    }

    fn receive(&self, max_len: usize) -> Result<Vec<u8>, TransportError> {
        (**self).receive(max_len)
    }

    fn receive_event(&self) -> Result<Option<Vec<u8>>, TransportError> {
        (**self).receive_event()
    }

    fn has_event_endpoint(&self) -> bool {
        (**self).has_event_endpoint()
    }

    fn close(&self) -> Result<(), TransportError> {
        (**self).close()
    }

    fn is_connected(&self) -> bool {
        (**self).is_connected()
    }
}
