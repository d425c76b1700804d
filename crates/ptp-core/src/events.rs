//! Event channel.
//!
//! Responders raise events either on the main pipe, interleaved with
//! transactions, or on a separate interrupt pipe. Both end up here as
//! [`EventRecord`]s in arrival order.

use std::fmt;
use std::thread;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::device::PtpDevice;
use crate::error::{PtpError, Result};
use crate::extension::ExtensionDescriptor;
use crate::protocol::{Container, EventCode};
use crate::transport::PtpTransport;

/// One event raised by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventRecord {
    pub code: EventCode,
    /// Name in the active extension, or the hex code.
    pub name: String,
    pub transaction_id: u32,
    pub params: Vec<u32>,
}

impl EventRecord {
    pub fn from_container(container: &Container, extension: &ExtensionDescriptor) -> Self {
        let code = EventCode(container.code);
        Self {
            code,
            name: extension.event_label(code),
            transaction_id: container.transaction_id,
            params: container.params().to_vec(),
        }
    }

    pub fn param(&self, index: usize) -> Option<u32> {
        self.params.get(index).copied()
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.code)?;
        if !self.params.is_empty() {
            let params: Vec<String> = self.params.iter().map(|p| format!("0x{:08X}", p)).collect();
            write!(f, " [{}]", params.join(", "))?;
        }
        Ok(())
    }
}

/// Blocking iterator over device events.
///
/// Sleeps between empty polls and ends when the link is lost. Errors that
/// leave the link usable are yielded and the stream keeps going. Dropping the
/// stream leaves undelivered events queued on the device.
pub struct EventStream<'a, T: PtpTransport> {
    device: &'a PtpDevice<T>,
    interval: Duration,
    vendor_polling: bool,
    finished: bool,
}

impl<'a, T: PtpTransport> EventStream<'a, T> {
    pub(crate) fn new(device: &'a PtpDevice<T>, interval: Duration) -> Self {
        Self {
            device,
            interval,
            vendor_polling: device.extension().event_check_operation().is_some(),
            finished: false,
        }
    }

    /// Whether empty polls also run the extension's event check operation
    /// while a session is open. On by default when the extension has one.
    pub fn with_vendor_polling(mut self, enabled: bool) -> Self {
        self.vendor_polling = enabled;
        self
    }

    fn refill(&self) -> Result<usize> {
        if self.vendor_polling && self.device.session_id().is_some() {
            return self.device.check_vendor_events();
        }
        Ok(0)
    }
}

impl<T: PtpTransport> Iterator for EventStream<'_, T> {
    type Item = Result<EventRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            match self.device.poll_event() {
                Ok(Some(event)) => return Some(Ok(event)),
                Ok(None) => {}
                Err(PtpError::Link(e)) => {
                    info!(error = %e, "Event stream ended");
                    self.finished = true;
                    return None;
                }
                Err(e) => return Some(Err(e)),
            }

            if !self.device.is_connected() {
                debug!("Transport disconnected, ending event stream");
                self.finished = true;
                return None;
            }

            match self.refill() {
                Ok(0) => thread::sleep(self.interval),
                Ok(n) => debug!(count = n, "Vendor events queued"),
                Err(e) => {
                    warn!(error = %e, "Vendor event check failed");
                    thread::sleep(self.interval);
                }
            }
        }
        None
    }
}
