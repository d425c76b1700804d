//! Device handle.
//!
//! [`PtpDevice`] is the caller-facing surface of the engine. Transport,
//! session state, reassembly buffer and event queue sit behind one mutex, so
//! at most one transaction is on the wire per handle and the session depth
//! only changes under that lock.
//!
//! ```no_run
//! use ptp_core::{DeviceConfig, NusbTransport, PtpDevice};
//!
//! let transport = NusbTransport::open()?;
//! let device = PtpDevice::connect(transport, DeviceConfig::default())?;
//! let session = device.session()?;
//! for id in device.get_storage_ids()? {
//!     println!("{:?}", device.get_storage_info(id)?);
//! }
//! session.close()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

mod capture;
mod objects;
mod properties;
mod storage;

pub use objects::ObjectLocation;

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock};
use std::time::Duration;

use tracing::{debug, info, instrument, warn};

use crate::config::DeviceConfig;
use crate::dataset::{Dataset, DevicePropDesc, DeviceInfo};
use crate::error::{PtpError, Result};
use crate::events::{EventRecord, EventStream};
use crate::extension::{ExtensionDescriptor, ExtensionMode, ExtensionRegistry, VendorDataset};
use crate::observer::{LinkEvent, LinkObserver, ObservableTransport, TracingObserver};
use crate::protocol::constants::{NO_TRANSACTION, TRANSACTION_ID_NA};
use crate::protocol::{Container, EventCode, OperationCode, PropertyCode, ResponseCode};
use crate::session::{CloseStep, OpenStep, SessionManager, SessionState};
use crate::transaction::{Reply, Request, TransactionEngine};
use crate::transport::PtpTransport;

type Engine<T> = TransactionEngine<ObservableTransport<T, dyn LinkObserver>>;

/// Everything serialized by the handle lock.
struct Link<T: PtpTransport> {
    engine: Engine<T>,
    session: SessionManager,
    /// DevicePropDesc per property, filled on demand.
    knowledge: HashMap<PropertyCode, DevicePropDesc>,
    info: DeviceInfo,
}

pub struct PtpDevice<T: PtpTransport> {
    link: Mutex<Link<T>>,
    extension: RwLock<ExtensionDescriptor>,
    registry: ExtensionRegistry,
    config: DeviceConfig,
    observer: Arc<dyn LinkObserver>,
}

impl<T: PtpTransport> PtpDevice<T> {
    /// Connect with the default tracing observer.
    pub fn connect(transport: T, config: DeviceConfig) -> Result<Self> {
        Self::connect_with_observer(transport, config, Arc::new(TracingObserver))
    }

    /// Fetch DeviceInfo, pick the extension and, if configured, load every
    /// property description.
    #[instrument(skip_all)]
    pub fn connect_with_observer(
        transport: T,
        config: DeviceConfig,
        observer: Arc<dyn LinkObserver>,
    ) -> Result<Self> {
        let mode = config.extension_mode()?;
        let transport = ObservableTransport::new(transport, observer.clone());
        let mut engine = TransactionEngine::with_limits(
            transport,
            config.receive_chunk,
            config.max_container_size,
        );

        let reply = engine.execute(
            &Request::new(OperationCode::GET_DEVICE_INFO, &[]),
            NO_TRANSACTION,
        )?;
        let raw = ExtensionDescriptor::raw();
        let reply = check_reply(&raw, OperationCode::GET_DEVICE_INFO, reply)?;
        let info = DeviceInfo::from_bytes(reply.data_bytes())?;

        let registry = ExtensionRegistry::new();
        let extension = registry.select(mode, &info);
        info!(
            manufacturer = %info.manufacturer,
            model = %info.model,
            extension = extension.name(),
            "Device connected"
        );
        observer.on_event(&LinkEvent::Connected {
            model: info.model.clone(),
            extension: extension.name().to_string(),
        });

        let device = Self {
            link: Mutex::new(Link {
                engine,
                session: SessionManager::new(config.session_policy()),
                knowledge: HashMap::new(),
                info,
            }),
            extension: RwLock::new(extension),
            registry,
            config,
            observer,
        };

        if device.config.load_property_descriptions {
            device.load_property_descriptions()?;
        }
        Ok(device)
    }

    /// Builder form of [`PtpDevice::force_extension`].
    pub fn with_extension_mode(self, mode: ExtensionMode) -> Self {
        self.force_extension(mode);
        self
    }

    /// Re-select the extension against the DeviceInfo read at connect time.
    pub fn force_extension(&self, mode: ExtensionMode) -> ExtensionDescriptor {
        let info = self.lock().info.clone();
        let extension = self.registry.select(mode, &info);
        info!(extension = extension.name(), mode = %mode, "Extension selected");
        *self
            .extension
            .write()
            .unwrap_or_else(PoisonError::into_inner) = extension;
        extension
    }

    pub fn extension(&self) -> ExtensionDescriptor {
        *self.extension.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn config(&self) -> &DeviceConfig {
        &self.config
    }

    /// DeviceInfo as last read from the device.
    pub fn info(&self) -> DeviceInfo {
        self.lock().info.clone()
    }

    /// Read DeviceInfo again. Allowed with or without a session.
    pub fn device_info(&self) -> Result<DeviceInfo> {
        let reply = self.invoke(OperationCode::GET_DEVICE_INFO, &[], None)?;
        let info = DeviceInfo::from_bytes(reply.data_bytes())?;
        self.lock().info = info.clone();
        Ok(info)
    }

    pub fn session_state(&self) -> SessionState {
        self.lock().session.state()
    }

    /// ID of the open session, if any.
    pub fn session_id(&self) -> Option<u32> {
        self.lock().session.session_id()
    }

    /// Last transaction ID used in the current session.
    pub fn transaction_id(&self) -> u32 {
        self.lock().session.transaction_id()
    }

    pub fn is_connected(&self) -> bool {
        self.lock().engine.transport().is_connected()
    }

    // ========================================================================
    // Transactions
    // ========================================================================

    /// Run one operation. Non-OK responses become [`PtpError::DeviceResponse`].
    ///
    /// OpenSession and CloseSession are refused; sessions go through
    /// [`PtpDevice::session`] so the local state follows the device.
    #[instrument(level = "debug", skip(self, params, data), fields(op = %operation))]
    pub fn invoke(
        &self,
        operation: OperationCode,
        params: &[u32],
        data: Option<Vec<u8>>,
    ) -> Result<Reply> {
        if operation == OperationCode::OPEN_SESSION || operation == OperationCode::CLOSE_SESSION {
            return Err(PtpError::InvalidSessionState {
                state: self.session_state().to_string(),
                action: "open or close it outside a session scope",
            });
        }
        let mut request = Request::new(operation, params);
        request.data = data;
        let extension = self.extension();

        let mut link = self.lock();
        let transaction_id = link.session.next_transaction_id(operation)?;
        let reply = link.engine.execute(&request, transaction_id)?;
        drop(link);

        self.observer.on_event(&LinkEvent::Transaction {
            operation,
            transaction_id,
            response: reply.code,
        });
        check_reply(&extension, operation, reply)
    }

    /// [`PtpDevice::invoke`] by operation name in the active extension.
    pub fn invoke_named(
        &self,
        name: &str,
        params: &[u32],
        data: Option<Vec<u8>>,
    ) -> Result<Reply> {
        let operation = self
            .extension()
            .operation_code(name)
            .ok_or_else(|| PtpError::UnknownCode(name.to_string()))?;
        self.invoke(operation, params, data)
    }

    /// Run a vendor operation and decode its data phase with the extension's
    /// layout. `Ok(None)` when no layout is registered for `operation`.
    pub fn vendor_dataset(
        &self,
        operation: OperationCode,
        params: &[u32],
    ) -> Result<Option<VendorDataset>> {
        let reply = self.invoke(operation, params, None)?;
        Ok(self
            .extension()
            .decode_vendor_dataset(operation, reply.data_bytes())?)
    }

    // ========================================================================
    // Sessions
    // ========================================================================

    /// Enter a session scope. The first scope opens the device session;
    /// nested scopes share it. The session closes when the last guard goes.
    #[instrument(skip(self))]
    pub fn session(&self) -> Result<SessionGuard<'_, T>> {
        let mut link = self.lock();
        let session_id = match link.session.begin_open()? {
            OpenStep::Nested { generation } => {
                debug!(depth = link.session.depth(), "Joined open session");
                return Ok(SessionGuard::new(self, generation));
            }
            OpenStep::Send { session_id } => session_id,
        };
        self.notify_session(SessionState::Closed, SessionState::Opening);

        let request = Request::new(OperationCode::OPEN_SESSION, &[session_id]);
        let outcome = link.engine.execute(&request, NO_TRANSACTION);
        let outcome = match outcome {
            Ok(reply) if reply.code == ResponseCode::SESSION_ALREADY_OPEN => {
                warn!(session_id, "Device reports a session already open, adopting it");
                Ok(reply)
            }
            Ok(reply) => check_reply(&self.extension(), OperationCode::OPEN_SESSION, reply),
            Err(e) => Err(e),
        };

        let ok = outcome.is_ok();
        let generation = link.session.finish_open(session_id, ok);
        let state = link.session.state();
        drop(link);
        self.notify_session(SessionState::Opening, state);

        outcome?;
        match generation {
            Some(generation) => {
                info!(session_id, "Session opened");
                Ok(SessionGuard::new(self, generation))
            }
            None => Err(PtpError::InvalidSessionState {
                state: state.to_string(),
                action: "open",
            }),
        }
    }

    /// Leave a session scope. Returns the CloseSession failure, if any; the
    /// session is closed locally either way.
    fn release(&self, generation: u64) -> Result<()> {
        let mut link = self.lock();
        let transaction_id = match link.session.begin_close(generation)? {
            CloseStep::Nested { depth } => {
                debug!(depth, "Left nested session scope");
                return Ok(());
            }
            CloseStep::Stale => {
                debug!("Session scope already ended");
                return Ok(());
            }
            CloseStep::Send { transaction_id } => transaction_id,
        };
        let from = SessionState::Open { depth: 1 };
        let request = Request::new(OperationCode::CLOSE_SESSION, &[]);
        let outcome = link
            .engine
            .execute(&request, transaction_id)
            .and_then(|reply| check_reply(&self.extension(), OperationCode::CLOSE_SESSION, reply));
        link.session.finish_close();
        drop(link);

        self.notify_session(from, SessionState::Closed);
        info!("Session closed");
        outcome.map(|_| ())
    }

    /// The device ended the session on its own.
    fn session_lost(&self) {
        let mut link = self.lock();
        let from = link.session.state();
        link.session.mark_closed_by_device();
        link.knowledge.clear();
        drop(link);
        self.notify_session(from, SessionState::Closed);
    }

    fn notify_session(&self, from: SessionState, to: SessionState) {
        if from != to {
            self.observer.on_event(&LinkEvent::SessionChanged { from, to });
        }
    }

    // ========================================================================
    // Events
    // ========================================================================

    /// Next pending event, polling the transport at most once.
    pub fn poll_event(&self) -> Result<Option<EventRecord>> {
        let extension = self.extension();
        let mut link = self.lock();
        let Some(container) = link.engine.poll_event()? else {
            return Ok(None);
        };
        let record = EventRecord::from_container(&container, &extension);
        debug!(event = %record, "Event received");

        if record.code == EventCode::DEVICE_PROP_CHANGED
            && let Some(prop) = record.param(0)
        {
            // Cached descriptions carry the current value.
            link.knowledge.remove(&PropertyCode(prop as u16));
        }
        drop(link);

        if record.code == EventCode::DEVICE_RESET {
            self.session_lost();
        }
        Ok(Some(record))
    }

    /// Blocking stream of events.
    pub fn events(&self) -> EventStream<'_, T> {
        EventStream::new(self, Duration::from_millis(self.config.event_poll_interval_ms))
    }

    /// Run the extension's event check operation and queue what it reports.
    /// Returns the number of events queued.
    pub fn check_vendor_events(&self) -> Result<usize> {
        let extension = self.extension();
        let Some(operation) = extension.event_check_operation() else {
            return Ok(0);
        };
        let Some(VendorDataset::Events(events)) = self.vendor_dataset(operation, &[])? else {
            return Ok(0);
        };
        let mut link = self.lock();
        for (code, param) in &events {
            link.engine
                .push_event(Container::event(code.0, TRANSACTION_ID_NA, &[*param]));
        }
        Ok(events.len())
    }

    /// End any open session and release the transport. Outstanding guards
    /// become no-ops.
    #[instrument(skip(self))]
    pub fn close(&self) -> Result<()> {
        let mut link = self.lock();
        let from = link.session.state();
        if link.session.is_open() {
            let transaction_id = link.session.next_transaction_id(OperationCode::CLOSE_SESSION)?;
            let request = Request::new(OperationCode::CLOSE_SESSION, &[]);
            if let Err(e) = link.engine.execute(&request, transaction_id) {
                warn!(error = %e, "CloseSession failed during close");
            }
        }
        link.session.abandon();
        link.knowledge.clear();
        let result = link.engine.close();
        drop(link);
        self.notify_session(from, SessionState::Closed);
        result
    }

    fn lock(&self) -> MutexGuard<'_, Link<T>> {
        // A panicking caller must not wedge session release.
        self.link.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn check_reply(
    extension: &ExtensionDescriptor,
    operation: OperationCode,
    reply: Reply,
) -> Result<Reply> {
    if reply.is_ok() {
        return Ok(reply);
    }
    Err(PtpError::DeviceResponse {
        operation,
        code: reply.code,
        name: extension.response_label(reply.code),
        params: reply.params,
    })
}

/// First response parameter, required.
fn first_param(operation: OperationCode, reply: &Reply) -> Result<u32> {
    reply
        .param(0)
        .ok_or(PtpError::MissingParameter { operation, index: 0 })
}

// ============================================================================
// Session scope
// ============================================================================

/// One session scope on a device. Dropping it leaves the scope; close
/// failures on drop are logged, use [`SessionGuard::close`] to see them.
#[must_use = "the session closes when the guard is dropped"]
pub struct SessionGuard<'a, T: PtpTransport> {
    device: &'a PtpDevice<T>,
    generation: u64,
    released: bool,
}

impl<'a, T: PtpTransport> SessionGuard<'a, T> {
    fn new(device: &'a PtpDevice<T>, generation: u64) -> Self {
        Self {
            device,
            generation,
            released: false,
        }
    }

    pub fn device(&self) -> &'a PtpDevice<T> {
        self.device
    }

    /// Leave the scope, reporting a failed CloseSession.
    pub fn close(mut self) -> Result<()> {
        self.released = true;
        self.device.release(self.generation)
    }
}

impl<T: PtpTransport> Drop for SessionGuard<'_, T> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(e) = self.device.release(self.generation) {
            warn!(error = %e, "Session close failed");
        }
    }
}
