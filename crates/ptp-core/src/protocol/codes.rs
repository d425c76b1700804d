//! Typed 16-bit PTP codes.
//!
//! Operation, response, event, property and object format codes share the
//! same wire representation but live in disjoint ranges. Each gets its own
//! newtype so an event code can never be sent as an opcode by accident.
//! Human-readable names are resolved through the active extension table
//! (see [`crate::extension`]), not here.

use std::fmt;

macro_rules! code_type {
    ($(#[$meta:meta])* $name:ident, $vendor_nibble:expr) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub struct $name(pub u16);

        impl $name {
            /// Raw wire value.
            pub const fn value(self) -> u16 {
                self.0
            }

            /// True when the code lies in the vendor-extension range.
            pub const fn is_vendor(self) -> bool {
                (self.0 & 0xF000) == $vendor_nibble
            }
        }

        impl From<u16> for $name {
            fn from(v: u16) -> Self {
                Self(v)
            }
        }

        impl From<$name> for u16 {
            fn from(c: $name) -> Self {
                c.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "(0x{:04X})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{:04X}", self.0)
            }
        }
    };
}

code_type!(
    /// Operation code carried by Command and Data containers.
    OperationCode,
    0x9000
);
code_type!(
    /// Response code carried by Response containers.
    ResponseCode,
    0xA000
);
code_type!(
    /// Event code carried by Event containers.
    EventCode,
    0xC000
);
code_type!(
    /// Device property code.
    PropertyCode,
    0xD000
);
code_type!(
    /// Object format code.
    ObjectFormatCode,
    0xB000
);

impl OperationCode {
    pub const UNDEFINED: Self = Self(0x1000);
    pub const GET_DEVICE_INFO: Self = Self(0x1001);
    pub const OPEN_SESSION: Self = Self(0x1002);
    pub const CLOSE_SESSION: Self = Self(0x1003);
    pub const GET_STORAGE_IDS: Self = Self(0x1004);
    pub const GET_STORAGE_INFO: Self = Self(0x1005);
    pub const GET_NUM_OBJECTS: Self = Self(0x1006);
    pub const GET_OBJECT_HANDLES: Self = Self(0x1007);
    pub const GET_OBJECT_INFO: Self = Self(0x1008);
    pub const GET_OBJECT: Self = Self(0x1009);
    pub const GET_THUMB: Self = Self(0x100A);
    pub const DELETE_OBJECT: Self = Self(0x100B);
    pub const SEND_OBJECT_INFO: Self = Self(0x100C);
    pub const SEND_OBJECT: Self = Self(0x100D);
    pub const INITIATE_CAPTURE: Self = Self(0x100E);
    pub const FORMAT_STORE: Self = Self(0x100F);
    pub const RESET_DEVICE: Self = Self(0x1010);
    pub const SELF_TEST: Self = Self(0x1011);
    pub const SET_OBJECT_PROTECTION: Self = Self(0x1012);
    pub const POWER_DOWN: Self = Self(0x1013);
    pub const GET_DEVICE_PROP_DESC: Self = Self(0x1014);
    pub const GET_DEVICE_PROP_VALUE: Self = Self(0x1015);
    pub const SET_DEVICE_PROP_VALUE: Self = Self(0x1016);
    pub const RESET_DEVICE_PROP_VALUE: Self = Self(0x1017);
    pub const TERMINATE_OPEN_CAPTURE: Self = Self(0x1018);
    pub const MOVE_OBJECT: Self = Self(0x1019);
    pub const COPY_OBJECT: Self = Self(0x101A);
    pub const GET_PARTIAL_OBJECT: Self = Self(0x101B);
    pub const INITIATE_OPEN_CAPTURE: Self = Self(0x101C);

    /// Operations a responder accepts without an open session.
    pub const fn is_session_exempt(self) -> bool {
        matches!(self.0, 0x1001 | 0x1002)
    }
}

impl ResponseCode {
    pub const UNDEFINED: Self = Self(0x2000);
    pub const OK: Self = Self(0x2001);
    pub const GENERAL_ERROR: Self = Self(0x2002);
    pub const SESSION_NOT_OPEN: Self = Self(0x2003);
    pub const INVALID_TRANSACTION_ID: Self = Self(0x2004);
    pub const OPERATION_NOT_SUPPORTED: Self = Self(0x2005);
    pub const PARAMETER_NOT_SUPPORTED: Self = Self(0x2006);
    pub const INCOMPLETE_TRANSFER: Self = Self(0x2007);
    pub const INVALID_STORAGE_ID: Self = Self(0x2008);
    pub const INVALID_OBJECT_HANDLE: Self = Self(0x2009);
    pub const DEVICE_PROP_NOT_SUPPORTED: Self = Self(0x200A);
    pub const STORE_FULL: Self = Self(0x200C);
    pub const ACCESS_DENIED: Self = Self(0x200F);
    pub const DEVICE_BUSY: Self = Self(0x2019);
    pub const INVALID_PARAMETER: Self = Self(0x201D);
    pub const SESSION_ALREADY_OPEN: Self = Self(0x201E);
    pub const TRANSACTION_CANCELLED: Self = Self(0x201F);

    pub const fn is_ok(self) -> bool {
        self.0 == Self::OK.0
    }

    pub const fn is_busy(self) -> bool {
        self.0 == Self::DEVICE_BUSY.0
    }
}

impl EventCode {
    pub const UNDEFINED: Self = Self(0x4000);
    pub const CANCEL_TRANSACTION: Self = Self(0x4001);
    pub const OBJECT_ADDED: Self = Self(0x4002);
    pub const OBJECT_REMOVED: Self = Self(0x4003);
    pub const STORE_ADDED: Self = Self(0x4004);
    pub const STORE_REMOVED: Self = Self(0x4005);
    pub const DEVICE_PROP_CHANGED: Self = Self(0x4006);
    pub const OBJECT_INFO_CHANGED: Self = Self(0x4007);
    pub const DEVICE_INFO_CHANGED: Self = Self(0x4008);
    pub const REQUEST_OBJECT_TRANSFER: Self = Self(0x4009);
    pub const STORE_FULL: Self = Self(0x400A);
    pub const DEVICE_RESET: Self = Self(0x400B);
    pub const STORAGE_INFO_CHANGED: Self = Self(0x400C);
    pub const CAPTURE_COMPLETE: Self = Self(0x400D);
    pub const UNREPORTED_STATUS: Self = Self(0x400E);
}

impl PropertyCode {
    pub const BATTERY_LEVEL: Self = Self(0x5001);
    pub const IMAGE_SIZE: Self = Self(0x5003);
    pub const WHITE_BALANCE: Self = Self(0x5005);
    pub const F_NUMBER: Self = Self(0x5007);
    pub const EXPOSURE_TIME: Self = Self(0x500D);
    pub const EXPOSURE_INDEX: Self = Self(0x500F);
    pub const DATE_TIME: Self = Self(0x5011);
}

impl ObjectFormatCode {
    /// "Any format" filter used by GetNumObjects / GetObjectHandles.
    pub const ANY: Self = Self(0x0000);
    pub const UNDEFINED: Self = Self(0x3000);
    pub const ASSOCIATION: Self = Self(0x3001);
    pub const EXIF_JPEG: Self = Self(0x3801);
}
