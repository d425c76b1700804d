//! DeviceInfo dataset (GetDeviceInfo).

use super::codec::{Dataset, DatasetError, DatasetReader};
use crate::protocol::{EventCode, ObjectFormatCode, OperationCode, PropertyCode};

/// Device identification and capability summary.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DeviceInfo {
    pub standard_version: u16,
    pub vendor_extension_id: u32,
    pub vendor_extension_version: u16,
    pub vendor_extension_desc: String,
    pub functional_mode: u16,
    pub operations_supported: Vec<OperationCode>,
    pub events_supported: Vec<EventCode>,
    pub device_properties_supported: Vec<PropertyCode>,
    pub capture_formats: Vec<ObjectFormatCode>,
    pub image_formats: Vec<ObjectFormatCode>,
    pub manufacturer: String,
    pub model: String,
    pub device_version: String,
    pub serial_number: String,
}

impl DeviceInfo {
    pub fn supports_operation(&self, op: OperationCode) -> bool {
        self.operations_supported.contains(&op)
    }

    pub fn supports_property(&self, prop: PropertyCode) -> bool {
        self.device_properties_supported.contains(&prop)
    }
}

impl Dataset for DeviceInfo {
    fn read(r: &mut DatasetReader<'_>) -> Result<Self, DatasetError> {
        Ok(Self {
            standard_version: r.read_u16()?,
            vendor_extension_id: r.read_u32()?,
            vendor_extension_version: r.read_u16()?,
            vendor_extension_desc: r.read_string()?,
            functional_mode: r.read_u16()?,
            operations_supported: Vec::read(r)?,
            events_supported: Vec::read(r)?,
            device_properties_supported: Vec::read(r)?,
            capture_formats: Vec::read(r)?,
            image_formats: Vec::read(r)?,
            manufacturer: r.read_string()?,
            model: r.read_string()?,
            device_version: r.read_string()?,
            serial_number: r.read_string()?,
        })
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
        self.standard_version.write(out)?;
        self.vendor_extension_id.write(out)?;
        self.vendor_extension_version.write(out)?;
        self.vendor_extension_desc.write(out)?;
        self.functional_mode.write(out)?;
        self.operations_supported.write(out)?;
        self.events_supported.write(out)?;
        self.device_properties_supported.write(out)?;
        self.capture_formats.write(out)?;
        self.image_formats.write(out)?;
        self.manufacturer.write(out)?;
        self.model.write(out)?;
        self.device_version.write(out)?;
        self.serial_number.write(out)
    }
}
