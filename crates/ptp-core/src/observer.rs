//! Link-level notifications for UI decoupling.
//!
//! Allows CLI or GUI front-ends to follow session transitions, transactions
//! and raw packets without tight coupling to the engine.

use std::fmt;
use std::sync::Arc;

use crate::protocol::{ContainerHeader, ContainerKind, OperationCode, ResponseCode};
use crate::session::SessionState;
use crate::transport::{PtpTransport, TransportError};

/// Bytes of each packet kept for display.
const PACKET_PREVIEW_LEN: usize = 32;

/// Packet direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketDirection {
    Tx, // Transmit (Host -> Device)
    Rx, // Receive (Device -> Host)
}

impl fmt::Display for PacketDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PacketDirection::Tx => write!(f, "TX"),
            PacketDirection::Rx => write!(f, "RX"),
        }
    }
}

/// Events emitted by a device handle.
#[derive(Debug, Clone)]
pub enum LinkEvent {
    /// Device handle ready; `extension` is the active dialect.
    Connected { model: String, extension: String },
    /// Session state changed.
    SessionChanged { from: SessionState, to: SessionState },
    /// A transaction finished.
    Transaction {
        operation: OperationCode,
        transaction_id: u32,
        response: ResponseCode,
    },
    /// Packet sent/received.
    Packet {
        direction: PacketDirection,
        kind: Option<ContainerKind>,
        length: usize,
        data: Option<Vec<u8>>,
    },
    /// Link closed or lost.
    Disconnected,
}

/// Observer trait for link events.
///
/// Implement this trait in your UI layer to receive updates.
pub trait LinkObserver: Send + Sync {
    fn on_event(&self, event: &LinkEvent);
}

/// No-op observer that discards all events.
pub struct NullObserver;

impl LinkObserver for NullObserver {
    fn on_event(&self, _event: &LinkEvent) {}
}

/// Observer that logs events using tracing.
pub struct TracingObserver;

impl LinkObserver for TracingObserver {
    fn on_event(&self, event: &LinkEvent) {
        match event {
            LinkEvent::Connected { model, extension } => {
                tracing::info!(model = %model, extension = %extension, "Device connected");
            }
            LinkEvent::SessionChanged { from, to } => {
                tracing::info!(from = %from, to = %to, "Session state changed");
            }
            LinkEvent::Transaction {
                operation,
                transaction_id,
                response,
            } => {
                tracing::debug!(
                    op = %operation,
                    tid = transaction_id,
                    response = %response,
                    "Transaction complete"
                );
            }
            LinkEvent::Packet {
                direction,
                kind,
                length,
                ..
            } => {
                let kind = kind.map_or_else(|| "Fragment".to_string(), |k| k.to_string());
                tracing::trace!(dir = %direction, kind = %kind, len = length, "Packet");
            }
            LinkEvent::Disconnected => {
                tracing::warn!("Device disconnected");
            }
        }
    }
}

/// Transport wrapper that emits packet events.
pub struct ObservableTransport<T: PtpTransport, O: LinkObserver + ?Sized> {
    inner: T,
    observer: Arc<O>,
}

impl<T: PtpTransport, O: LinkObserver + ?Sized> ObservableTransport<T, O> {
    pub fn new(inner: T, observer: Arc<O>) -> Self {
        Self { inner, observer }
    }

    pub fn inner(&self) -> &T {
        &self.inner
    }

    fn report(&self, direction: PacketDirection, data: &[u8]) {
        // A chunk that starts mid-container has no valid header.
        let kind = ContainerHeader::peek(data).ok().map(|h| h.kind);
        self.observer.on_event(&LinkEvent::Packet {
            direction,
            kind,
            length: data.len(),
            data: Some(data.iter().take(PACKET_PREVIEW_LEN).cloned().collect()),
        });
    }
}

impl<T: PtpTransport, O: LinkObserver + ?Sized> PtpTransport for ObservableTransport<T, O> {
    fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        let res = self.inner.send(data);
        if res.is_ok() {
            self.report(PacketDirection::Tx, data);
        }
        res
    }

    fn receive(&self, max_len: usize) -> Result<Vec<u8>, TransportError> {
        let res = self.inner.receive(max_len);
        if let Ok(data) = &res
            && !data.is_empty()
        {
            self.report(PacketDirection::Rx, data);
        }
        res
    }

    fn receive_event(&self) -> Result<Option<Vec<u8>>, TransportError> {
        let res = self.inner.receive_event();
        if let Ok(Some(data)) = &res {
            self.report(PacketDirection::Rx, data);
        }
        res
    }

    fn has_event_endpoint(&self) -> bool {
        self.inner.has_event_endpoint()
    }

    fn close(&self) -> Result<(), TransportError> {
        let res = self.inner.close();
        self.observer.on_event(&LinkEvent::Disconnected);
        res
    }

    fn is_connected(&self) -> bool {
        self.inner.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::Container;
    use crate::transport::MockTransport;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<LinkEvent>>);

    impl LinkObserver for Recorder {
        fn on_event(&self, event: &LinkEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn test_packets_reported_with_kind() {
        let mock = MockTransport::new();
        mock.queue_ok(1, &[]);
        let recorder = Arc::new(Recorder::default());
        let transport = ObservableTransport::new(mock, recorder.clone());

        transport
            .send(&Container::command(0x1001, 0, &[]).encode().unwrap())
            .unwrap();
        transport.receive(512).unwrap();

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert!(matches!(
            events[0],
            LinkEvent::Packet {
                direction: PacketDirection::Tx,
                kind: Some(ContainerKind::Command),
                length: 12,
                ..
            }
        ));
        assert!(matches!(
            events[1],
            LinkEvent::Packet {
                direction: PacketDirection::Rx,
                kind: Some(ContainerKind::Response),
                ..
            }
        ));
    }

    #[test]
    fn test_failed_send_not_reported() {
        let mock = MockTransport::new();
        mock.fail_next_sends(1);
        let recorder = Arc::new(Recorder::default());
        let transport = ObservableTransport::new(mock, recorder.clone());

        assert!(transport.send(b"xx").is_err());
        assert!(recorder.0.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fragment_has_no_kind() {
        let mock = MockTransport::new();
        mock.queue_bytes(&[0xAA; 40]);
        let recorder = Arc::new(Recorder::default());
        let transport = ObservableTransport::new(mock, recorder.clone());
        transport.receive(512).unwrap();
        assert!(matches!(
            recorder.0.lock().unwrap()[0],
            LinkEvent::Packet { kind: None, .. }
        ));
    }
}
