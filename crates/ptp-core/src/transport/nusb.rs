//! nusb-based USB transport implementation.
//!
//! Claims the still image class interface (class 6) and uses its bulk IN/OUT
//! pipes for containers and its interrupt IN pipe for events.

use nusb::descriptors::TransferType;
use nusb::io::{EndpointRead, EndpointWrite};
use nusb::transfer::{Bulk, Direction, In, Interrupt, Out};
use nusb::{MaybeFuture, list_devices};
use std::io::{ErrorKind, Read, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};
use std::time::Duration;
use tracing::{debug, info, instrument, trace};

use super::traits::{PtpTransport, TransportError};
use crate::protocol::constants::{DEFAULT_TIMEOUT_MS, USB_CLASS_STILL_IMAGE, USB_TRANSFER_BUFFER};

/// How long an event poll waits on the interrupt pipe.
const EVENT_POLL_TIMEOUT_MS: u64 = 10;

/// Endpoints of one still image interface.
#[derive(Debug, Default, Clone, Copy)]
struct StillImageEndpoints {
    interface: u8,
    bulk_in: u8,
    bulk_out: u8,
    interrupt_in: Option<u8>,
}

/// nusb-based USB transport.
pub struct NusbTransport {
    writer: Mutex<EndpointWrite<Bulk>>,
    reader: Mutex<EndpointRead<Bulk>>,
    events: Option<Mutex<EndpointRead<Interrupt>>>,
    closed: AtomicBool,
    timeout_ms: u64,
    vid: u16,
    pid: u16,
}

impl NusbTransport {
    /// Open the first device exposing a still image interface.
    #[instrument(level = "info")]
    pub fn open() -> Result<Self, TransportError> {
        Self::open_matching(None, DEFAULT_TIMEOUT_MS)
    }

    /// Open a device with specific VID/PID.
    #[instrument(level = "info", fields(vid = format!("{:04X}", vid), pid = format!("{:04X}", pid)))]
    pub fn open_with_ids(vid: u16, pid: u16) -> Result<Self, TransportError> {
        Self::open_matching(Some((vid, pid)), DEFAULT_TIMEOUT_MS)
    }

    /// Open with an optional VID/PID filter and a bulk read timeout.
    pub fn open_matching(ids: Option<(u16, u16)>, timeout_ms: u64) -> Result<Self, TransportError> {
        let devices = list_devices()
            .wait()
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?;

        for device_info in devices {
            if let Some((vid, pid)) = ids
                && (device_info.vendor_id() != vid || device_info.product_id() != pid)
            {
                continue;
            }
            let has_still_image = device_info
                .interfaces()
                .any(|i| i.class() == USB_CLASS_STILL_IMAGE);
            if ids.is_some() || has_still_image {
                return Self::open_device_info(device_info, timeout_ms);
            }
        }

        match ids {
            Some((vid, pid)) => Err(TransportError::DeviceNotFound { vid, pid }),
            None => Err(TransportError::NoStillImageInterface),
        }
    }

    fn open_device_info(
        device_info: nusb::DeviceInfo,
        timeout_ms: u64,
    ) -> Result<Self, TransportError> {
        let vid = device_info.vendor_id();
        let pid = device_info.product_id();

        info!(
            vendor_id = %format!("{:04X}", vid),
            product_id = %format!("{:04X}", pid),
            product = device_info.product_string().unwrap_or("?"),
            "Found device"
        );

        let device = device_info
            .open()
            .wait()
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?;

        let eps = find_still_image_endpoints(&device)?;

        let interface = device.claim_interface(eps.interface).wait().map_err(|e| {
            TransportError::ClaimInterfaceFailed {
                interface: eps.interface,
                message: e.to_string(),
            }
        })?;

        let writer = interface
            .endpoint::<Bulk, Out>(eps.bulk_out)
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?
            .writer(USB_TRANSFER_BUFFER);

        let mut reader = interface
            .endpoint::<Bulk, In>(eps.bulk_in)
            .map_err(|e| TransportError::OpenFailed(e.to_string()))?
            .reader(USB_TRANSFER_BUFFER);
        reader.set_read_timeout(Duration::from_millis(timeout_ms));

        let events = match eps.interrupt_in {
            Some(addr) => {
                let mut events = interface
                    .endpoint::<Interrupt, In>(addr)
                    .map_err(|e| TransportError::OpenFailed(e.to_string()))?
                    .reader(64);
                events.set_read_timeout(Duration::from_millis(EVENT_POLL_TIMEOUT_MS));
                Some(Mutex::new(events))
            }
            None => None,
        };

        info!(
            interface = eps.interface,
            in_ep = %format!("0x{:02X}", eps.bulk_in),
            out_ep = %format!("0x{:02X}", eps.bulk_out),
            int_ep = ?eps.interrupt_in,
            "Device opened successfully"
        );

        Ok(Self {
            writer: Mutex::new(writer),
            reader: Mutex::new(reader),
            events,
            closed: AtomicBool::new(false),
            timeout_ms,
            vid,
            pid,
        })
    }

    pub fn vendor_id(&self) -> u16 {
        self.vid
    }

    pub fn product_id(&self) -> u16 {
        self.pid
    }

    fn ensure_open(&self) -> Result<(), TransportError> {
        if self.closed.load(Ordering::Acquire) {
            return Err(TransportError::Disconnected);
        }
        Ok(())
    }

    fn map_io(&self, err: std::io::Error, read: bool) -> TransportError {
        match err.kind() {
            ErrorKind::TimedOut => TransportError::Timeout {
                timeout_ms: self.timeout_ms,
            },
            ErrorKind::NotConnected | ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => {
                self.closed.store(true, Ordering::Release);
                TransportError::Disconnected
            }
            _ if read => TransportError::ReadFailed(err.to_string()),
            _ => TransportError::WriteFailed(err.to_string()),
        }
    }
}

fn find_still_image_endpoints(device: &nusb::Device) -> Result<StillImageEndpoints, TransportError> {
    for config in device.configurations() {
        for iface in config.interfaces() {
            for alt in iface.alt_settings() {
                if alt.class() != USB_CLASS_STILL_IMAGE {
                    continue;
                }
                let mut eps = StillImageEndpoints {
                    interface: iface.interface_number(),
                    ..Default::default()
                };
                for ep in alt.endpoints() {
                    match (ep.transfer_type(), ep.direction()) {
                        (TransferType::Bulk, Direction::In) => eps.bulk_in = ep.address(),
                        (TransferType::Bulk, Direction::Out) => eps.bulk_out = ep.address(),
                        (TransferType::Interrupt, Direction::In) => {
                            eps.interrupt_in = Some(ep.address())
                        }
                        _ => {}
                    }
                }
                if eps.bulk_in == 0 {
                    return Err(TransportError::EndpointNotFound {
                        ep_type: "Bulk".into(),
                        direction: "In".into(),
                    });
                }
                if eps.bulk_out == 0 {
                    return Err(TransportError::EndpointNotFound {
                        ep_type: "Bulk".into(),
                        direction: "Out".into(),
                    });
                }
                return Ok(eps);
            }
        }
    }
    Err(TransportError::NoStillImageInterface)
}

fn lock<T>(m: &Mutex<T>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl PtpTransport for NusbTransport {
    #[instrument(skip(self, data), fields(len = data.len()))]
    fn send(&self, data: &[u8]) -> Result<(), TransportError> {
        self.ensure_open()?;
        let mut writer = lock(&self.writer);
        writer.write_all(data).map_err(|e| self.map_io(e, false))?;
        writer.flush().map_err(|e| self.map_io(e, false))?;

        debug!(bytes_written = data.len(), "Write complete");
        Ok(())
    }

    #[instrument(skip(self), fields(max_len))]
    fn receive(&self, max_len: usize) -> Result<Vec<u8>, TransportError> {
        self.ensure_open()?;
        let mut buf = vec![0u8; max_len];
        let n = lock(&self.reader)
            .read(&mut buf)
            .map_err(|e| self.map_io(e, true))?;

        buf.truncate(n);
        debug!(bytes_read = n, "Read complete");
        Ok(buf)
    }

    fn receive_event(&self) -> Result<Option<Vec<u8>>, TransportError> {
        self.ensure_open()?;
        let Some(events) = &self.events else {
            return Ok(None);
        };
        let mut buf = vec![0u8; 64];
        match lock(events).read(&mut buf) {
            Ok(0) => Ok(None),
            Ok(n) => {
                buf.truncate(n);
                trace!(bytes_read = n, "Interrupt read complete");
                Ok(Some(buf))
            }
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(None),
            Err(e) => Err(self.map_io(e, true)),
        }
    }

    fn has_event_endpoint(&self) -> bool {
        self.events.is_some()
    }

    fn close(&self) -> Result<(), TransportError> {
        if !self.closed.swap(true, Ordering::AcqRel) {
            info!(
                vendor_id = %format!("{:04X}", self.vid),
                product_id = %format!("{:04X}", self.pid),
                "Transport closed"
            );
        }
        Ok(())
    }

    fn is_connected(&self) -> bool {
        !self.closed.load(Ordering::Acquire)
    }
}
