//! Vendor extension registry and code dispatch.
//!
//! Vendors reuse the PTP code space above the ISO ranges. An
//! [`ExtensionDescriptor`] layers one vendor's static tables over the base
//! ISO table: every lookup consults the vendor table first and falls through
//! to the base table. Detection from a [`DeviceInfo`] is a pure function run
//! once when a device handle is created.

pub mod base;
pub mod canon;
pub mod layout;
pub mod microsoft;
pub mod nikon;
pub mod parrot;
pub mod sony;

use std::fmt;
use std::str::FromStr;

use crate::dataset::{DatasetError, DeviceInfo};
use crate::error::PtpError;
use crate::protocol::constants::{
    VENDOR_CANON, VENDOR_MICROSOFT, VENDOR_NIKON, VENDOR_PARROT, VENDOR_SONY,
};
use crate::protocol::{EventCode, ObjectFormatCode, OperationCode, PropertyCode, ResponseCode};

pub use layout::{DatasetLayout, VendorDataset, VendorLayout};

/// Code to name mapping.
pub type CodeTable = &'static [(u16, &'static str)];

/// The five code spaces an extension may augment.
#[derive(Debug)]
pub struct CodeTables {
    pub operations: CodeTable,
    pub responses: CodeTable,
    pub events: CodeTable,
    pub properties: CodeTable,
    pub formats: CodeTable,
}

static NO_TABLES: CodeTables = CodeTables {
    operations: &[],
    responses: &[],
    events: &[],
    properties: &[],
    formats: &[],
};

fn name_of(table: CodeTable, code: u16) -> Option<&'static str> {
    table.iter().find(|(c, _)| *c == code).map(|(_, n)| *n)
}

fn code_of(table: CodeTable, name: &str) -> Option<u16> {
    table
        .iter()
        .find(|(_, n)| *n == name)
        .or_else(|| table.iter().find(|(_, n)| n.eq_ignore_ascii_case(name)))
        .map(|(c, _)| *c)
}

// ============================================================================
// Vendors
// ============================================================================

/// Vendor dialects with built-in tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vendor {
    Microsoft,
    Nikon,
    Canon,
    Sony,
    Parrot,
}

impl Vendor {
    pub const ALL: [Vendor; 5] = [
        Vendor::Microsoft,
        Vendor::Nikon,
        Vendor::Canon,
        Vendor::Sony,
        Vendor::Parrot,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Vendor::Microsoft => "Microsoft",
            Vendor::Nikon => "Nikon",
            Vendor::Canon => "Canon",
            Vendor::Sony => "Sony",
            Vendor::Parrot => "Parrot",
        }
    }

    /// DeviceInfo.VendorExtensionID announced by this vendor's devices.
    pub const fn extension_id(self) -> u32 {
        match self {
            Vendor::Microsoft => VENDOR_MICROSOFT,
            Vendor::Nikon => VENDOR_NIKON,
            Vendor::Canon => VENDOR_CANON,
            Vendor::Sony => VENDOR_SONY,
            Vendor::Parrot => VENDOR_PARROT,
        }
    }

    fn tables(self) -> &'static CodeTables {
        match self {
            Vendor::Microsoft => &microsoft::TABLES,
            Vendor::Nikon => &nikon::TABLES,
            Vendor::Canon => &canon::TABLES,
            Vendor::Sony => &sony::TABLES,
            Vendor::Parrot => &parrot::TABLES,
        }
    }

    fn layouts(self) -> &'static [VendorLayout] {
        match self {
            Vendor::Nikon => nikon::LAYOUTS,
            Vendor::Parrot => parrot::LAYOUTS,
            _ => &[],
        }
    }
}

impl fmt::Display for Vendor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Vendor {
    type Err = PtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("mtp") {
            return Ok(Vendor::Microsoft);
        }
        Vendor::ALL
            .into_iter()
            .find(|v| v.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| PtpError::UnknownExtension(s.to_string()))
    }
}

// ============================================================================
// Descriptor
// ============================================================================

/// The active dialect of one device handle.
#[derive(Debug, Clone, Copy)]
pub struct ExtensionDescriptor {
    vendor: Option<Vendor>,
    vendor_extension_id: u32,
    vendor_extension_version: u16,
    tables: &'static CodeTables,
    layouts: &'static [VendorLayout],
}

impl ExtensionDescriptor {
    /// Base ISO codes only.
    pub fn raw() -> Self {
        Self {
            vendor: None,
            vendor_extension_id: 0,
            vendor_extension_version: 0,
            tables: &NO_TABLES,
            layouts: &[],
        }
    }

    pub fn for_vendor(vendor: Vendor) -> Self {
        Self {
            vendor: Some(vendor),
            vendor_extension_id: vendor.extension_id(),
            vendor_extension_version: 0,
            tables: vendor.tables(),
            layouts: vendor.layouts(),
        }
    }

    /// Record the extension version a device reported.
    pub fn with_version(mut self, version: u16) -> Self {
        self.vendor_extension_version = version;
        self
    }

    pub fn vendor(&self) -> Option<Vendor> {
        self.vendor
    }

    pub fn name(&self) -> &'static str {
        self.vendor.map_or("Raw", Vendor::name)
    }

    pub fn vendor_extension_id(&self) -> u32 {
        self.vendor_extension_id
    }

    pub fn vendor_extension_version(&self) -> u16 {
        self.vendor_extension_version
    }

    pub fn is_raw(&self) -> bool {
        self.vendor.is_none()
    }

    pub fn operation_name(&self, code: OperationCode) -> Option<&'static str> {
        name_of(self.tables.operations, code.0).or_else(|| name_of(base::TABLES.operations, code.0))
    }

    pub fn operation_code(&self, name: &str) -> Option<OperationCode> {
        code_of(self.tables.operations, name)
            .or_else(|| code_of(base::TABLES.operations, name))
            .map(OperationCode)
    }

    pub fn response_name(&self, code: ResponseCode) -> Option<&'static str> {
        name_of(self.tables.responses, code.0).or_else(|| name_of(base::TABLES.responses, code.0))
    }

    pub fn event_name(&self, code: EventCode) -> Option<&'static str> {
        name_of(self.tables.events, code.0).or_else(|| name_of(base::TABLES.events, code.0))
    }

    pub fn event_code(&self, name: &str) -> Option<EventCode> {
        code_of(self.tables.events, name)
            .or_else(|| code_of(base::TABLES.events, name))
            .map(EventCode)
    }

    pub fn property_name(&self, code: PropertyCode) -> Option<&'static str> {
        name_of(self.tables.properties, code.0)
            .or_else(|| name_of(base::TABLES.properties, code.0))
    }

    pub fn property_code(&self, name: &str) -> Option<PropertyCode> {
        code_of(self.tables.properties, name)
            .or_else(|| code_of(base::TABLES.properties, name))
            .map(PropertyCode)
    }

    pub fn object_format_name(&self, code: ObjectFormatCode) -> Option<&'static str> {
        name_of(self.tables.formats, code.0).or_else(|| name_of(base::TABLES.formats, code.0))
    }

    /// Name of `code`, or its hex form when no table knows it.
    pub fn operation_label(&self, code: OperationCode) -> String {
        label(self.operation_name(code), code.0)
    }

    pub fn response_label(&self, code: ResponseCode) -> String {
        label(self.response_name(code), code.0)
    }

    pub fn event_label(&self, code: EventCode) -> String {
        label(self.event_name(code), code.0)
    }

    pub fn property_label(&self, code: PropertyCode) -> String {
        label(self.property_name(code), code.0)
    }

    pub fn object_format_label(&self, code: ObjectFormatCode) -> String {
        label(self.object_format_name(code), code.0)
    }

    pub fn layout(&self, operation: OperationCode) -> Option<DatasetLayout> {
        self.layouts
            .iter()
            .find(|l| l.operation == operation.0)
            .map(|l| l.layout)
    }

    /// Decode the data phase of a vendor operation. `Ok(None)` when the
    /// extension has no layout for `operation`.
    pub fn decode_vendor_dataset(
        &self,
        operation: OperationCode,
        data: &[u8],
    ) -> Result<Option<VendorDataset>, DatasetError> {
        self.layout(operation).map(|l| l.decode(data)).transpose()
    }

    /// Vendor operation that drains pending events over the command pipe.
    pub fn event_check_operation(&self) -> Option<OperationCode> {
        match self.vendor {
            Some(Vendor::Nikon) => Some(OperationCode(nikon::CHECK_EVENTS)),
            _ => None,
        }
    }
}

impl Default for ExtensionDescriptor {
    fn default() -> Self {
        Self::raw()
    }
}

impl fmt::Display for ExtensionDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn label(name: Option<&str>, code: u16) -> String {
    name.map_or_else(|| format!("0x{:04X}", code), str::to_string)
}

// ============================================================================
// Selection
// ============================================================================

/// How a device handle picks its dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtensionMode {
    /// Detect from DeviceInfo.
    #[default]
    Auto,
    /// Base ISO codes only.
    Raw,
    Forced(Vendor),
}

impl FromStr for ExtensionMode {
    type Err = PtpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "auto" => Ok(ExtensionMode::Auto),
            "raw" | "none" => Ok(ExtensionMode::Raw),
            other => other.parse().map(ExtensionMode::Forced),
        }
    }
}

impl fmt::Display for ExtensionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtensionMode::Auto => f.write_str("auto"),
            ExtensionMode::Raw => f.write_str("raw"),
            ExtensionMode::Forced(v) => write!(f, "{}", v.name().to_ascii_lowercase()),
        }
    }
}

/// Maps DeviceInfo to a descriptor.
#[derive(Debug, Clone)]
pub struct ExtensionRegistry {
    ids: Vec<(u32, Vendor)>,
}

impl Default for ExtensionRegistry {
    fn default() -> Self {
        Self {
            ids: Vendor::ALL.iter().map(|v| (v.extension_id(), *v)).collect(),
        }
    }
}

impl ExtensionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map another VendorExtensionID to a vendor's tables. Replaces any
    /// existing mapping for `id`.
    pub fn register(&mut self, id: u32, vendor: Vendor) {
        self.ids.retain(|(known, _)| *known != id);
        self.ids.push((id, vendor));
    }

    pub fn vendor_for_id(&self, id: u32) -> Option<Vendor> {
        self.ids.iter().find(|(k, _)| *k == id).map(|(_, v)| *v)
    }

    /// Pick the dialect for a device.
    ///
    /// Canon and Nikon bodies often announce the Microsoft extension ID, so
    /// the manufacturer string wins over the ID for those two.
    pub fn detect(&self, info: &DeviceInfo) -> ExtensionDescriptor {
        let vendor = if info.manufacturer.contains("Canon") {
            Some(Vendor::Canon)
        } else if info.manufacturer.contains("Nikon") {
            Some(Vendor::Nikon)
        } else {
            self.vendor_for_id(info.vendor_extension_id)
        };
        match vendor {
            Some(v) => ExtensionDescriptor::for_vendor(v).with_version(info.vendor_extension_version),
            None => ExtensionDescriptor::raw(),
        }
    }

    pub fn select(&self, mode: ExtensionMode, info: &DeviceInfo) -> ExtensionDescriptor {
        match mode {
            ExtensionMode::Auto => self.detect(info),
            ExtensionMode::Raw => ExtensionDescriptor::raw(),
            ExtensionMode::Forced(v) => {
                ExtensionDescriptor::for_vendor(v).with_version(info.vendor_extension_version)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::PtpValue;
    use crate::dataset::device_info::tests::sequoia;

    #[test]
    fn test_detect_by_extension_id() {
        let registry = ExtensionRegistry::new();
        let ext = registry.detect(&sequoia());
        assert_eq!(ext.vendor(), Some(Vendor::Parrot));
        assert_eq!(ext.vendor_extension_id(), VENDOR_PARROT);
    }

    #[test]
    fn test_manufacturer_wins_over_id() {
        let registry = ExtensionRegistry::new();
        let info = DeviceInfo {
            vendor_extension_id: VENDOR_MICROSOFT,
            manufacturer: "Nikon Corporation".into(),
            ..Default::default()
        };
        assert_eq!(registry.detect(&info).vendor(), Some(Vendor::Nikon));
    }

    #[test]
    fn test_unknown_id_is_raw() {
        let registry = ExtensionRegistry::new();
        let info = DeviceInfo {
            vendor_extension_id: 0x0000_0042,
            manufacturer: "Acme".into(),
            ..Default::default()
        };
        let ext = registry.detect(&info);
        assert!(ext.is_raw());
        assert_eq!(ext.name(), "Raw");
    }

    #[test]
    fn test_register_extra_id() {
        let mut registry = ExtensionRegistry::new();
        registry.register(0x42, Vendor::Sony);
        let info = DeviceInfo {
            vendor_extension_id: 0x42,
            ..Default::default()
        };
        assert_eq!(registry.detect(&info).vendor(), Some(Vendor::Sony));
    }

    #[test]
    fn test_select_modes() {
        let registry = ExtensionRegistry::new();
        let info = sequoia();
        assert!(registry.select(ExtensionMode::Raw, &info).is_raw());
        assert_eq!(
            registry
                .select(ExtensionMode::Forced(Vendor::Sony), &info)
                .vendor(),
            Some(Vendor::Sony)
        );
        assert_eq!(
            registry.select(ExtensionMode::Auto, &info).vendor(),
            Some(Vendor::Parrot)
        );
    }

    #[test]
    fn test_vendor_table_first_then_base() {
        let parrot = ExtensionDescriptor::for_vendor(Vendor::Parrot);
        let nikon = ExtensionDescriptor::for_vendor(Vendor::Nikon);
        let raw = ExtensionDescriptor::raw();

        // Same code, different meaning per vendor.
        assert_eq!(
            parrot.operation_name(OperationCode(0x9201)),
            Some("GetSunshineValues")
        );
        assert_eq!(
            nikon.operation_name(OperationCode(0x9201)),
            Some("StartLiveView")
        );
        assert_eq!(raw.operation_name(OperationCode(0x9201)), None);

        // Base codes resolve everywhere.
        assert_eq!(
            parrot.operation_name(OperationCode::GET_DEVICE_INFO),
            Some("GetDeviceInfo")
        );
        assert_eq!(
            nikon.response_name(ResponseCode::DEVICE_BUSY),
            Some("DeviceBusy")
        );
        assert_eq!(raw.event_label(EventCode(0xC101)), "0xC101");
        assert_eq!(nikon.event_label(EventCode(0xC101)), "ObjectAddedInSDRAM");
    }

    #[test]
    fn test_name_to_code() {
        let parrot = ExtensionDescriptor::for_vendor(Vendor::Parrot);
        assert_eq!(
            parrot.operation_code("GetImuValues"),
            Some(OperationCode(0x9208))
        );
        assert_eq!(
            parrot.operation_code("getdeviceinfo"),
            Some(OperationCode::GET_DEVICE_INFO)
        );
        assert_eq!(
            parrot.property_code("BatteryLevel"),
            Some(PropertyCode::BATTERY_LEVEL)
        );
        assert_eq!(parrot.property_code("GPSEnable"), Some(PropertyCode(0xD221)));
        assert_eq!(parrot.operation_code("NoSuchThing"), None);
    }

    #[test]
    fn test_decode_vendor_dataset() {
        let parrot = ExtensionDescriptor::for_vendor(Vendor::Parrot);
        let mut data = 3u32.to_le_bytes().to_vec();
        for v in [1u32, 2, 3] {
            data.extend_from_slice(&v.to_le_bytes());
        }
        let decoded = parrot
            .decode_vendor_dataset(OperationCode(0x9203), &data)
            .unwrap()
            .unwrap();
        assert_eq!(decoded.field("Roll"), Some(PtpValue::UInt32(3)));

        let status = parrot
            .decode_vendor_dataset(OperationCode(0x9209), &(1u32 << 13).to_le_bytes())
            .unwrap()
            .unwrap();
        assert_eq!(status.field("CameraRunning"), Some(PtpValue::UInt8(1)));

        // No layout registered.
        assert!(
            parrot
                .decode_vendor_dataset(OperationCode::GET_STORAGE_IDS, &data)
                .unwrap()
                .is_none()
        );
    }

    #[test]
    fn test_event_check_operation() {
        assert_eq!(
            ExtensionDescriptor::for_vendor(Vendor::Nikon).event_check_operation(),
            Some(OperationCode(0x90C7))
        );
        assert_eq!(ExtensionDescriptor::raw().event_check_operation(), None);
    }

    #[test]
    fn test_mode_parsing() {
        assert_eq!("auto".parse::<ExtensionMode>().unwrap(), ExtensionMode::Auto);
        assert_eq!("RAW".parse::<ExtensionMode>().unwrap(), ExtensionMode::Raw);
        assert_eq!(
            "parrot".parse::<ExtensionMode>().unwrap(),
            ExtensionMode::Forced(Vendor::Parrot)
        );
        assert_eq!(
            "mtp".parse::<ExtensionMode>().unwrap(),
            ExtensionMode::Forced(Vendor::Microsoft)
        );
        assert!(matches!(
            "kodak".parse::<ExtensionMode>(),
            Err(PtpError::UnknownExtension(_))
        ));
        assert_eq!(ExtensionMode::Forced(Vendor::Canon).to_string(), "canon");
    }
}
