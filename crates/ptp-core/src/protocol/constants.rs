//! Protocol constants from ISO 15740:2013 (PTP) and the PTP USB still image
//! class specification.

// ============================================================================
// Container Layout
// ============================================================================

/// Generic container header: length (4) + type (2) + code (2) + transaction ID (4).
pub const CONTAINER_HEADER_SIZE: usize = 12;

/// Maximum number of 32-bit parameters carried by Command/Response/Event containers.
pub const MAX_PARAMS: usize = 5;

/// Largest container the 32-bit length field can describe.
pub const MAX_CONTAINER_SIZE: usize = u32::MAX as usize;

/// Default cap on inbound containers; larger declared lengths are rejected
/// before any payload is read.
pub const DEFAULT_MAX_INBOUND_CONTAINER: usize = 0x4000_0000; // 1 GiB

/// Container type codes.
pub const CONTAINER_TYPE_COMMAND: u16 = 0x0001;
pub const CONTAINER_TYPE_DATA: u16 = 0x0002;
pub const CONTAINER_TYPE_RESPONSE: u16 = 0x0003;
pub const CONTAINER_TYPE_EVENT: u16 = 0x0004;

// ============================================================================
// Sessions and Transactions
// ============================================================================

/// Transaction ID used for commands issued outside a session.
pub const NO_TRANSACTION: u32 = 0x0000_0000;

/// First transaction ID of every session.
pub const FIRST_TRANSACTION_ID: u32 = 0x0000_0001;

/// Last usable transaction ID before the counter wraps back to 1.
pub const LAST_TRANSACTION_ID: u32 = 0xFFFF_FFFE;

/// Transaction ID meaning "not applicable" in events.
pub const TRANSACTION_ID_NA: u32 = 0xFFFF_FFFF;

/// Default first session ID handed to OpenSession.
pub const DEFAULT_SESSION_ID: u32 = 0x0000_0001;

/// Wildcard parameter value ("all storages", "all formats", "root", ...).
pub const PARAM_ALL: u32 = 0xFFFF_FFFF;

// ============================================================================
// Vendor Extension IDs (DeviceInfo.VendorExtensionID)
// ============================================================================

pub const VENDOR_EASTMAN_KODAK: u32 = 0x0000_0001;
pub const VENDOR_SEIKO_EPSON: u32 = 0x0000_0002;
pub const VENDOR_AGILENT: u32 = 0x0000_0003;
pub const VENDOR_POLAROID: u32 = 0x0000_0004;
pub const VENDOR_AGFA_GEVAERT: u32 = 0x0000_0005;
pub const VENDOR_MICROSOFT: u32 = 0x0000_0006;
pub const VENDOR_EQUINOX: u32 = 0x0000_0007;
pub const VENDOR_VIEWQUEST: u32 = 0x0000_0008;
pub const VENDOR_ST_MICROELECTRONICS: u32 = 0x0000_0009;
pub const VENDOR_NIKON: u32 = 0x0000_000A;
pub const VENDOR_CANON: u32 = 0x0000_000B;
pub const VENDOR_FOTONATION: u32 = 0x0000_000C;
pub const VENDOR_PENTAX: u32 = 0x0000_000D;
pub const VENDOR_FUJI: u32 = 0x0000_000E;
/// Not assigned by the standard; used by Sony devices in the wild.
pub const VENDOR_SONY: u32 = 0x0000_0011;
pub const VENDOR_SAMSUNG: u32 = 0x0000_001A;
pub const VENDOR_PARROT: u32 = 0x0000_001B;

// ============================================================================
// USB Transport
// ============================================================================

/// USB interface class for still image capture devices.
pub const USB_CLASS_STILL_IMAGE: u8 = 0x06;

/// Default chunk size requested from the bulk IN pipe.
pub const DEFAULT_RECEIVE_CHUNK: usize = 0x200; // 512 bytes

/// Default transfer buffer used by the USB endpoint readers/writers.
pub const USB_TRANSFER_BUFFER: usize = 0x4000; // 16 KB

/// Default read timeout for the bulk IN pipe.
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
