//! Mock transport for testing.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::traits::{PtpTransport, TransportError};
use crate::protocol::Container;

/// Scriptable in-memory responder.
///
/// Reads pop queued byte chunks in order; writes are captured. Clones share
/// the same queues, so a test can keep a handle after moving the transport
/// into a device.
#[derive(Clone)]
pub struct MockTransport {
    /// Chunks returned by `receive`.
    rx_queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
    /// Chunks returned by `receive_event`.
    event_queue: Arc<Mutex<VecDeque<Vec<u8>>>>,
    /// Captured writes.
    write_log: Arc<Mutex<Vec<Vec<u8>>>>,
    /// `max_len` of every `receive` call.
    receive_sizes: Arc<Mutex<Vec<usize>>>,
    /// Whether device is "connected".
    connected: Arc<Mutex<bool>>,
    /// Number of upcoming sends that fail.
    failing_sends: Arc<Mutex<usize>>,
    close_calls: Arc<Mutex<usize>>,
    event_endpoint: bool,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            rx_queue: Arc::new(Mutex::new(VecDeque::new())),
            event_queue: Arc::new(Mutex::new(VecDeque::new())),
            write_log: Arc::new(Mutex::new(Vec::new())),
            receive_sizes: Arc::new(Mutex::new(Vec::new())),
            connected: Arc::new(Mutex::new(true)),
            failing_sends: Arc::new(Mutex::new(0)),
            close_calls: Arc::new(Mutex::new(0)),
            event_endpoint: false,
        }
    }

    /// Mock with an out-of-band event pipe.
    pub fn with_event_endpoint() -> Self {
        Self {
            event_endpoint: true,
            ..Self::new()
        }
    }

    /// Queue raw bytes to be returned on the next receive.
    pub fn queue_bytes(&self, bytes: &[u8]) {
        self.rx_queue.lock().unwrap().push_back(bytes.to_vec());
    }

    /// Queue an encoded container on the main pipe.
    pub fn queue_container(&self, container: &Container) {
        self.queue_bytes(&container.encode().unwrap());
    }

    /// Queue an OK response for `transaction_id`.
    pub fn queue_ok(&self, transaction_id: u32, params: &[u32]) {
        self.queue_container(&Container::response(0x2001, transaction_id, params));
    }

    /// Queue an encoded container on the event pipe.
    pub fn queue_event(&self, container: &Container) {
        self.event_queue
            .lock()
            .unwrap()
            .push_back(container.encode().unwrap());
    }

    /// Get all captured writes.
    pub fn get_writes(&self) -> Vec<Vec<u8>> {
        self.write_log.lock().unwrap().clone()
    }

    /// Captured writes decoded as containers.
    pub fn sent_containers(&self) -> Vec<Container> {
        self.get_writes()
            .iter()
            .map(|w| Container::decode(w).unwrap())
            .collect()
    }

    /// Clear captured writes.
    pub fn clear_writes(&self) {
        self.write_log.lock().unwrap().clear();
    }

    /// Number of reads still queued on the main pipe.
    pub fn pending_reads(&self) -> usize {
        self.rx_queue.lock().unwrap().len()
    }

    /// Sizes requested by each `receive` so far.
    pub fn receive_sizes(&self) -> Vec<usize> {
        self.receive_sizes.lock().unwrap().clone()
    }

    /// Make the next `count` sends fail with a write error.
    pub fn fail_next_sends(&self, count: usize) {
        *self.failing_sends.lock().unwrap() = count;
    }

    pub fn close_calls(&self) -> usize {
        *self.close_calls.lock().unwrap()
    }

    /// Simulate device disconnect.
    pub fn disconnect(&self) {
        *self.connected.lock().unwrap() = false;
    }

    /// Simulate device reconnect.
    pub fn reconnect(&self) {
        *self.connected.lock().unwrap() = true;
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl PtpTransport for MockTransport {
    fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        if !self.is_connected() {
            return Err(TransportError::Disconnected);
        }
        let mut failing = self.failing_sends.lock().unwrap();
        if *failing > 0 {
            *failing -= 1;
            return Err(TransportError::WriteFailed("injected failure".into()));
        }
        self.write_log.lock().unwrap().push(data.to_vec());
        Ok(())
    }

    fn receive(&self, max_len: usize) -> Result<Vec<u8>, TransportError> {
        self.receive_sizes.lock().unwrap().push(max_len);
        if !self.is_connected() {
            return Err(TransportError::Disconnected);
        }
        let mut queue = self.rx_queue.lock().unwrap();
        let mut chunk = queue
            .pop_front()
            .ok_or(TransportError::Timeout { timeout_ms: 5000 })?;
        if chunk.len() > max_len {
            let rest = chunk.split_off(max_len);
            queue.push_front(rest);
        }
        Ok(chunk)
    }

    fn receive_event(&self) -> Result<Option<Vec<u8>>, TransportError> {
        if !self.is_connected() {
            return Err(TransportError::Disconnected);
        }
        Ok(self.event_queue.lock().unwrap().pop_front())
    }

    fn has_event_endpoint(&self) -> bool {
        self.event_endpoint
    }

    fn close(&self) -> Result<(), TransportError> {
        *self.close_calls.lock().unwrap() += 1;
        *self.connected.lock().unwrap() = false;
        Ok(())
    }

    fn is_connected(&self) -> bool {
        *self.connected.lock().unwrap()
    }
}
