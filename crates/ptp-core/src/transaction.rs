//! Transaction engine.
//!
//! Runs one Command → (Data) → Response exchange at a time over a transport
//! and owns the inbound byte buffer, so containers split across reads or
//! packed into one read are framed correctly. Event containers that show up
//! on the main pipe are parked in a FIFO for the event channel.

use std::collections::VecDeque;
use std::mem;
use tracing::{debug, trace, warn};

use crate::error::{PtpError, Result};
use crate::protocol::constants::{
    DEFAULT_MAX_INBOUND_CONTAINER, DEFAULT_RECEIVE_CHUNK, USB_TRANSFER_BUFFER,
};
use crate::protocol::{
    Container, ContainerError, ContainerHeader, ContainerKind, OperationCode, ResponseCode,
};
use crate::transport::{PtpTransport, TransportError};

/// One operation to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub operation: OperationCode,
    pub params: Vec<u32>,
    /// Outgoing dataset, sent in a Data container after the command.
    pub data: Option<Vec<u8>>,
}

impl Request {
    pub fn new(operation: OperationCode, params: &[u32]) -> Self {
        Self {
            operation,
            params: params.to_vec(),
            data: None,
        }
    }

    pub fn with_data(mut self, data: Vec<u8>) -> Self {
        self.data = Some(data);
        self
    }
}

/// What the responder answered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub transaction_id: u32,
    pub code: ResponseCode,
    pub params: Vec<u32>,
    /// Incoming dataset, if the responder sent a data phase.
    pub data: Option<Vec<u8>>,
}

impl Reply {
    pub fn is_ok(&self) -> bool {
        self.code.is_ok()
    }

    pub fn param(&self, index: usize) -> Option<u32> {
        self.params.get(index).copied()
    }

    /// Incoming dataset bytes; empty when there was no data phase.
    pub fn data_bytes(&self) -> &[u8] {
        self.data.as_deref().unwrap_or(&[])
    }
}

/// Drop trailing zero parameters; responders treat absent and zero alike
/// and some reject unused ones.
pub fn strip_trailing_zeros(params: &[u32]) -> &[u32] {
    let end = params.iter().rposition(|&p| p != 0).map_or(0, |i| i + 1);
    &params[..end]
}

pub struct TransactionEngine<T: PtpTransport> {
    transport: T,
    /// Bytes received but not yet framed.
    pending: Vec<u8>,
    /// Event containers seen on the main pipe.
    events: VecDeque<Container>,
    receive_chunk: usize,
    /// Largest declared container length accepted from the responder.
    max_container: usize,
}

impl<T: PtpTransport> TransactionEngine<T> {
    pub fn new(transport: T) -> Self {
        Self::with_limits(transport, DEFAULT_RECEIVE_CHUNK, DEFAULT_MAX_INBOUND_CONTAINER)
    }

    pub fn with_limits(transport: T, receive_chunk: usize, max_container: usize) -> Self {
        Self {
            transport,
            pending: Vec::new(),
            events: VecDeque::new(),
            receive_chunk: receive_chunk.max(ContainerHeader::SIZE),
            max_container: max_container.max(ContainerHeader::SIZE),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Number of queued event containers.
    pub fn queued_events(&self) -> usize {
        self.events.len()
    }

    /// Run one transaction under `transaction_id`.
    ///
    /// Any response code is returned as a [`Reply`]; turning non-OK codes
    /// into errors is up to the caller, which knows the code names.
    pub fn execute(&mut self, request: &Request, transaction_id: u32) -> Result<Reply> {
        let op = request.operation;
        let params = strip_trailing_zeros(&request.params);
        debug!(op = %op, tid = transaction_id, params = ?params, "Sending command");

        let command = Container::command(op.value(), transaction_id, params).encode()?;
        self.transport.send(&command)?;

        if let Some(data) = &request.data {
            trace!(op = %op, tid = transaction_id, len = data.len(), "Sending data phase");
            let container = Container::data(op.value(), transaction_id, data.clone()).encode()?;
            self.transport.send(&container)?;
        }

        let mut incoming: Option<Vec<u8>> = None;
        loop {
            let container = self.receive_container()?;
            match container.kind {
                ContainerKind::Event => {
                    debug!(code = %format!("0x{:04X}", container.code), "Event during transaction");
                    self.events.push_back(container);
                }
                ContainerKind::Data => {
                    check_transaction(transaction_id, container.transaction_id)?;
                    if container.code != op.value() {
                        return Err(PtpError::DataPhaseMismatch {
                            expected: op,
                            actual: OperationCode(container.code),
                        });
                    }
                    let bytes = container.into_data();
                    trace!(tid = transaction_id, len = bytes.len(), "Data phase received");
                    match &mut incoming {
                        Some(existing) => existing.extend_from_slice(&bytes),
                        None => incoming = Some(bytes),
                    }
                }
                ContainerKind::Response => {
                    check_transaction(transaction_id, container.transaction_id)?;
                    let reply = Reply {
                        transaction_id,
                        code: ResponseCode(container.code),
                        params: container.params().to_vec(),
                        data: incoming,
                    };
                    debug!(op = %op, tid = transaction_id, response = %reply.code, "Response received");
                    return Ok(reply);
                }
                ContainerKind::Command => {
                    return Err(PtpError::UnexpectedContainer {
                        kind: ContainerKind::Command,
                    });
                }
            }
        }
    }

    /// Next event container, without blocking beyond one transport poll.
    ///
    /// Queued events come first. Then the out-of-band pipe is polled if the
    /// transport has one, otherwise the main pipe is read once and a timeout
    /// counts as "nothing pending".
    pub fn poll_event(&mut self) -> Result<Option<Container>> {
        if let Some(event) = self.events.pop_front() {
            return Ok(Some(event));
        }

        if self.transport.has_event_endpoint() {
            return match self.transport.receive_event()? {
                Some(bytes) if !bytes.is_empty() => {
                    let container = Container::decode(&bytes)?;
                    if container.kind != ContainerKind::Event {
                        return Err(PtpError::UnexpectedContainer {
                            kind: container.kind,
                        });
                    }
                    Ok(Some(container))
                }
                _ => Ok(None),
            };
        }

        if self.frame_pending()?.is_none() {
            match self.transport.receive(self.receive_chunk) {
                Ok(chunk) => self.pending.extend_from_slice(&chunk),
                Err(TransportError::Timeout { .. }) => return Ok(None),
                Err(e) => return Err(e.into()),
            }
        }
        while let Some(container) = self.frame_pending()? {
            if container.kind == ContainerKind::Event {
                return Ok(Some(container));
            }
            warn!(kind = %container.kind, tid = container.transaction_id, "Discarding container outside a transaction");
        }
        Ok(None)
    }

    /// Append an event obtained by other means (vendor polling operations).
    pub fn push_event(&mut self, event: Container) {
        self.events.push_back(event);
    }

    /// Release the transport.
    pub fn close(&mut self) -> Result<()> {
        self.pending.clear();
        self.transport.close()?;
        Ok(())
    }

    /// Read until one full container is framed.
    fn receive_container(&mut self) -> Result<Container> {
        loop {
            if let Some(container) = self.frame_pending()? {
                return Ok(container);
            }
            let wanted = self.read_size();
            let chunk = self.transport.receive(wanted)?;
            trace!(len = chunk.len(), buffered = self.pending.len(), "Chunk received");
            self.pending.extend_from_slice(&chunk);
        }
    }

    /// Bytes to ask the transport for: what the head container still needs,
    /// at least one chunk and never more than one transfer buffer.
    fn read_size(&self) -> usize {
        let missing = match ContainerHeader::peek(&self.pending) {
            Ok(header) => (header.length as usize).saturating_sub(self.pending.len()),
            Err(_) => ContainerHeader::SIZE.saturating_sub(self.pending.len()),
        };
        let ceiling = self.receive_chunk.max(USB_TRANSFER_BUFFER);
        missing.clamp(self.receive_chunk, ceiling)
    }

    /// Split one complete container off the buffer, if there is one.
    fn frame_pending(&mut self) -> Result<Option<Container>> {
        if self.pending.len() < ContainerHeader::SIZE {
            return Ok(None);
        }
        let header = match ContainerHeader::peek(&self.pending) {
            Ok(header) => header,
            Err(e) => {
                // The stream is desynchronized; nothing buffered can be trusted.
                self.pending.clear();
                return Err(e.into());
            }
        };
        let length = header.length as usize;
        if length > self.max_container {
            self.pending.clear();
            return Err(ContainerError::TooLarge(length).into());
        }
        if self.pending.len() < length {
            return Ok(None);
        }
        let rest = self.pending.split_off(length);
        let bytes = mem::replace(&mut self.pending, rest);
        Ok(Some(Container::decode(&bytes)?))
    }
}

fn check_transaction(expected: u32, actual: u32) -> Result<()> {
    if expected != actual {
        return Err(PtpError::TransactionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::MockTransport;

    fn engine() -> (MockTransport, TransactionEngine<MockTransport>) {
        let mock = MockTransport::new();
        (mock.clone(), TransactionEngine::new(mock))
    }

    #[test]
    fn test_strip_trailing_zeros() {
        assert_eq!(strip_trailing_zeros(&[1, 0, 0]), &[1]);
        assert_eq!(strip_trailing_zeros(&[0, 5, 0]), &[0, 5]);
        assert!(strip_trailing_zeros(&[0, 0]).is_empty());
        assert!(strip_trailing_zeros(&[]).is_empty());
    }

    #[test]
    fn test_command_response() {
        let (mock, mut engine) = engine();
        mock.queue_ok(1, &[3]);

        let reply = engine
            .execute(&Request::new(OperationCode::GET_NUM_OBJECTS, &[0xFFFF_FFFF, 0, 0]), 1)
            .unwrap();
        assert!(reply.is_ok());
        assert_eq!(reply.param(0), Some(3));
        assert!(reply.data.is_none());

        let sent = mock.sent_containers();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].kind, ContainerKind::Command);
        assert_eq!(sent[0].params(), &[0xFFFF_FFFF]);
    }

    #[test]
    fn test_incoming_data_phase() {
        let (mock, mut engine) = engine();
        mock.queue_container(&Container::data(0x1004, 2, vec![1, 0, 0, 0, 1, 0, 1, 0]));
        mock.queue_ok(2, &[]);

        let reply = engine
            .execute(&Request::new(OperationCode::GET_STORAGE_IDS, &[]), 2)
            .unwrap();
        assert_eq!(reply.data_bytes(), &[1, 0, 0, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn test_outgoing_data_phase() {
        let (mock, mut engine) = engine();
        mock.queue_ok(4, &[]);
        let request =
            Request::new(OperationCode::SET_DEVICE_PROP_VALUE, &[0x5005]).with_data(vec![2, 0]);
        engine.execute(&request, 4).unwrap();

        let sent = mock.sent_containers();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[1].kind, ContainerKind::Data);
        assert_eq!(sent[1].transaction_id, 4);
        assert_eq!(sent[1].data_bytes(), &[2, 0]);
    }

    #[test]
    fn test_non_ok_response_is_returned() {
        let (mock, mut engine) = engine();
        mock.queue_container(&Container::response(0x2019, 1, &[]));
        let reply = engine
            .execute(&Request::new(OperationCode::INITIATE_CAPTURE, &[]), 1)
            .unwrap();
        assert!(!reply.is_ok());
        assert!(reply.code.is_busy());
    }

    #[test]
    fn test_response_transaction_mismatch() {
        let (mock, mut engine) = engine();
        mock.queue_ok(6, &[]);
        let err = engine
            .execute(&Request::new(OperationCode::GET_STORAGE_IDS, &[]), 5)
            .unwrap_err();
        assert!(matches!(
            err,
            PtpError::TransactionMismatch {
                expected: 5,
                actual: 6
            }
        ));
    }

    #[test]
    fn test_data_phase_mismatch() {
        let (mock, mut engine) = engine();
        mock.queue_container(&Container::data(0x1009, 1, vec![0]));
        let err = engine
            .execute(&Request::new(OperationCode::GET_THUMB, &[1]), 1)
            .unwrap_err();
        assert!(matches!(err, PtpError::DataPhaseMismatch { .. }));

        mock.queue_container(&Container::data(0x100A, 9, vec![0]));
        let err = engine
            .execute(&Request::new(OperationCode::GET_THUMB, &[1]), 2)
            .unwrap_err();
        assert!(matches!(err, PtpError::TransactionMismatch { .. }));
    }

    #[test]
    fn test_event_during_transaction_is_queued() {
        let (mock, mut engine) = engine();
        mock.queue_container(&Container::event(0x4002, 0xFFFF_FFFF, &[0x42]));
        mock.queue_ok(1, &[]);

        let reply = engine
            .execute(&Request::new(OperationCode::INITIATE_CAPTURE, &[]), 1)
            .unwrap();
        assert!(reply.is_ok());
        assert_eq!(engine.queued_events(), 1);

        let event = engine.poll_event().unwrap().unwrap();
        assert_eq!(event.code, 0x4002);
        assert_eq!(event.params(), &[0x42]);
    }

    #[test]
    fn test_reassembly_across_reads() {
        let (mock, mut engine) = engine();
        let data = Container::data(0x1009, 3, (0..=255u8).cycle().take(2000).collect())
            .encode()
            .unwrap();
        let response = Container::response(0x2001, 3, &[]).encode().unwrap();
        // Split the data container unevenly and glue the response onto its tail.
        mock.queue_bytes(&data[..5]);
        mock.queue_bytes(&data[5..700]);
        let mut tail = data[700..].to_vec();
        tail.extend_from_slice(&response);
        mock.queue_bytes(&tail);

        let reply = engine
            .execute(&Request::new(OperationCode::GET_OBJECT, &[1]), 3)
            .unwrap();
        assert_eq!(reply.data_bytes().len(), 2000);
        assert_eq!(reply.data_bytes()[256], 0);
        assert_eq!(mock.pending_reads(), 0);
    }

    #[test]
    fn test_malformed_bytes_surface() {
        let (mock, mut engine) = engine();
        let mut bytes = Container::response(0x2001, 1, &[]).encode().unwrap();
        bytes[4] = 0x09;
        mock.queue_bytes(&bytes);
        let err = engine
            .execute(&Request::new(OperationCode::GET_STORAGE_IDS, &[]), 1)
            .unwrap_err();
        assert!(matches!(err, PtpError::Malformed(_)));
    }

    #[test]
    fn test_reads_capped_for_large_data_phase() {
        let (mock, mut engine) = engine();
        let payload: Vec<u8> = (0..=255u8).cycle().take(40_000).collect();
        mock.queue_container(&Container::data(0x1009, 1, payload.clone()));
        mock.queue_ok(1, &[]);

        let reply = engine
            .execute(&Request::new(OperationCode::GET_OBJECT, &[1]), 1)
            .unwrap();
        assert_eq!(reply.data_bytes(), payload.as_slice());

        let sizes = mock.receive_sizes();
        assert!(sizes.len() > 3);
        assert!(sizes.iter().all(|&n| n <= USB_TRANSFER_BUFFER));
    }

    #[test]
    fn test_oversized_declared_length_rejected() {
        let (mock, mut engine) = engine();
        let mut bytes = 0xFFFF_FFF0u32.to_le_bytes().to_vec();
        bytes.extend_from_slice(&2u16.to_le_bytes());
        bytes.extend_from_slice(&0x1009u16.to_le_bytes());
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&[0; 4]);
        mock.queue_bytes(&bytes);

        let err = engine
            .execute(&Request::new(OperationCode::GET_OBJECT, &[1]), 1)
            .unwrap_err();
        assert!(matches!(
            err,
            PtpError::Malformed(ContainerError::TooLarge(0xFFFF_FFF0))
        ));
        // Only the first chunk was ever requested.
        assert_eq!(mock.receive_sizes(), vec![DEFAULT_RECEIVE_CHUNK]);
    }

    #[test]
    fn test_configured_container_limit() {
        let mock = MockTransport::new();
        let mut engine = TransactionEngine::with_limits(mock.clone(), 512, 1024);
        // Only the first read's worth of the oversized container arrives.
        let bytes = Container::data(0x1009, 1, vec![0; 2000]).encode().unwrap();
        mock.queue_bytes(&bytes[..512]);

        let err = engine
            .execute(&Request::new(OperationCode::GET_OBJECT, &[1]), 1)
            .unwrap_err();
        assert!(matches!(err, PtpError::Malformed(ContainerError::TooLarge(2012))));

        // Small containers still pass.
        mock.queue_ok(2, &[7]);
        let reply = engine
            .execute(&Request::new(OperationCode::GET_NUM_OBJECTS, &[]), 2)
            .unwrap();
        assert_eq!(reply.param(0), Some(7));
    }

    #[test]
    fn test_timeout_surfaces() {
        let (_mock, mut engine) = engine();
        let err = engine
            .execute(&Request::new(OperationCode::GET_STORAGE_IDS, &[]), 1)
            .unwrap_err();
        assert!(matches!(err, PtpError::Timeout { .. }));
    }

    #[test]
    fn test_poll_event_interleaved_and_out_of_band() {
        let (mock, mut engine) = engine();
        assert!(engine.poll_event().unwrap().is_none());
        mock.queue_container(&Container::event(0x400D, 0xFFFF_FFFF, &[]));
        assert_eq!(engine.poll_event().unwrap().unwrap().code, 0x400D);

        let mock = MockTransport::with_event_endpoint();
        let mut engine = TransactionEngine::new(mock.clone());
        mock.queue_event(&Container::event(0xC201, 0xFFFF_FFFF, &[1]));
        assert_eq!(engine.poll_event().unwrap().unwrap().code, 0xC201);
        assert!(engine.poll_event().unwrap().is_none());
    }
}
