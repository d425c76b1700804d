//! PTP-Core: Picture Transfer Protocol (ISO 15740) client engine in Rust.
//!
//! The crate talks PTP to cameras, drones and media players over any
//! transport that can move whole containers in both directions.
//!
//! # Architecture
//!
//! The crate is organized into layers:
//!
//! - **Protocol**: Operation/response/event/property codes, container codec
//! - **Dataset**: Typed values and the standard datasets (DeviceInfo, StorageInfo, ...)
//! - **Transport**: Bulk/interrupt pipe abstraction (nusb, mock)
//! - **Transaction**: Command/data/response phases and event demultiplexing
//! - **Session**: OpenSession/CloseSession bookkeeping with nested scopes
//! - **Extension**: Vendor code tables, detection and vendor dataset layouts
//! - **Device**: The caller-facing handle tying the layers together
//! - **Observer**: Link events for logging and UIs
//!
//! # Example
//!
//! ```no_run
//! use ptp_core::{DeviceConfig, NusbTransport, ObjectFormatCode, PtpDevice};
//!
//! let config = DeviceConfig::default();
//! let transport = NusbTransport::open_matching(config.usb_filter(), config.timeout_ms)?;
//! let device = PtpDevice::connect(transport, config)?;
//! println!("{} ({})", device.info().model, device.extension().name());
//!
//! let session = device.session()?;
//! let handles = device.get_object_handles(0xFFFF_FFFF, ObjectFormatCode::ANY, 0)?;
//! println!("{} objects", handles.len());
//! session.close()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod device;
pub mod error;
pub mod events;
pub mod extension;
pub mod observer;
pub mod protocol;
pub mod session;
pub mod transaction;
pub mod transport;

// Re-exports for convenience
pub use config::DeviceConfig;
pub use dataset::{
    DataType, DeviceInfo, DevicePropDesc, ObjectInfo, PropertyForm, PtpValue, StorageInfo,
};
pub use device::{ObjectLocation, PtpDevice, SessionGuard};
pub use error::{PtpError, Result};
pub use events::{EventRecord, EventStream};
pub use extension::{ExtensionDescriptor, ExtensionMode, ExtensionRegistry, Vendor, VendorDataset};
pub use observer::{LinkEvent, LinkObserver, NullObserver, PacketDirection, TracingObserver};
pub use protocol::{
    Container, ContainerKind, EventCode, ObjectFormatCode, OperationCode, PropertyCode,
    ResponseCode,
};
pub use session::{SessionIdPolicy, SessionState};
pub use transport::{MockTransport, NusbTransport, PtpTransport, TransportError};
