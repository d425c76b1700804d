//! Device properties.
//!
//! Property values carry no type on the wire. The engine keeps the
//! DevicePropDesc of each property it has seen and types values through it.

use tracing::{debug, instrument, warn};

use super::PtpDevice;
use crate::dataset::{Dataset, DevicePropDesc, PtpValue};
use crate::error::{PtpError, Result};
use crate::protocol::{OperationCode, PropertyCode};
use crate::transport::PtpTransport;

impl<T: PtpTransport> PtpDevice<T> {
    /// Fetch a property description from the device and cache it.
    #[instrument(skip(self), fields(prop = %property))]
    pub fn get_device_prop_desc(&self, property: PropertyCode) -> Result<DevicePropDesc> {
        let reply = self.invoke(
            OperationCode::GET_DEVICE_PROP_DESC,
            &[u32::from(property.0)],
            None,
        )?;
        let desc = DevicePropDesc::from_bytes(reply.data_bytes())?;
        self.lock().knowledge.insert(property, desc.clone());
        Ok(desc)
    }

    /// Cached description, fetched on first use.
    pub fn property_description(&self, property: PropertyCode) -> Result<DevicePropDesc> {
        if let Some(desc) = self.lock().knowledge.get(&property) {
            return Ok(desc.clone());
        }
        self.get_device_prop_desc(property)
    }

    /// Every cached description, in code order.
    pub fn known_properties(&self) -> Vec<DevicePropDesc> {
        let mut descs: Vec<DevicePropDesc> = self.lock().knowledge.values().cloned().collect();
        descs.sort_by_key(|d| d.property_code);
        descs
    }

    /// Fetch the description of every property listed in DeviceInfo.
    /// Properties the device refuses to describe are skipped. Returns the
    /// number cached.
    #[instrument(skip(self))]
    pub fn load_property_descriptions(&self) -> Result<usize> {
        let properties = self.lock().info.device_properties_supported.clone();
        let _session = self.session()?;
        let mut loaded = 0;
        for property in properties {
            match self.get_device_prop_desc(property) {
                Ok(_) => loaded += 1,
                Err(e @ PtpError::DeviceResponse { .. }) => {
                    warn!(prop = %self.extension().property_label(property), error = %e, "Skipping property");
                }
                Err(e @ PtpError::Dataset(_)) => {
                    warn!(prop = %self.extension().property_label(property), error = %e, "Undecodable property description");
                }
                Err(e) => return Err(e),
            }
        }
        debug!(loaded, "Property descriptions loaded");
        Ok(loaded)
    }

    /// Current value, typed through the property's description.
    #[instrument(skip(self), fields(prop = %property))]
    pub fn get_device_prop_value(&self, property: PropertyCode) -> Result<PtpValue> {
        let desc = self.property_description(property)?;
        let reply = self.invoke(
            OperationCode::GET_DEVICE_PROP_VALUE,
            &[u32::from(property.0)],
            None,
        )?;
        let value = PtpValue::from_bytes(desc.data_type, reply.data_bytes())?;
        if let Some(cached) = self.lock().knowledge.get_mut(&property) {
            cached.current = value.clone();
        }
        Ok(value)
    }

    /// Set a property. The value must have the property's type and be
    /// allowed by its form.
    #[instrument(skip(self, value), fields(prop = %property, value = %value))]
    pub fn set_device_prop_value(&self, property: PropertyCode, value: PtpValue) -> Result<()> {
        let desc = self.property_description(property)?;
        value.expect_type(desc.data_type)?;
        if !desc.is_writable() || !desc.form.permits(&value) {
            return Err(PtpError::InvalidPropertyValue {
                property: self.extension().property_label(property),
                value: value.to_string(),
            });
        }
        self.invoke(
            OperationCode::SET_DEVICE_PROP_VALUE,
            &[u32::from(property.0)],
            Some(value.to_bytes()?),
        )?;
        if let Some(cached) = self.lock().knowledge.get_mut(&property) {
            cached.current = value;
        }
        Ok(())
    }

    /// Restore the factory default. The cached description is dropped.
    #[instrument(skip(self), fields(prop = %property))]
    pub fn reset_device_prop_value(&self, property: PropertyCode) -> Result<()> {
        self.invoke(
            OperationCode::RESET_DEVICE_PROP_VALUE,
            &[u32::from(property.0)],
            None,
        )?;
        self.lock().knowledge.remove(&property);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DataType, PropertyForm};
    use crate::device::tests::{connected, queue_reply};
    use crate::protocol::{Container, ContainerKind, EventCode};

    fn exposure_index() -> DevicePropDesc {
        DevicePropDesc {
            property_code: PropertyCode::EXPOSURE_INDEX,
            data_type: DataType::UInt16,
            get_set: 0x01,
            factory_default: PtpValue::UInt16(100),
            current: PtpValue::UInt16(200),
            form: PropertyForm::Enumeration(vec![
                PtpValue::UInt16(100),
                PtpValue::UInt16(200),
                PtpValue::UInt16(400),
            ]),
        }
    }

    fn queue_desc(mock: &crate::transport::MockTransport, tid: u32, desc: &DevicePropDesc) {
        queue_reply(
            mock,
            OperationCode::GET_DEVICE_PROP_DESC,
            tid,
            Some(desc.to_bytes().unwrap()),
            &[],
        );
    }

    #[test]
    fn test_value_typed_through_cached_desc() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        queue_desc(&mock, 1, &exposure_index());
        queue_reply(&mock, OperationCode::GET_DEVICE_PROP_VALUE, 2, Some(vec![0x90, 0x01]), &[]);
        assert_eq!(
            device
                .get_device_prop_value(PropertyCode::EXPOSURE_INDEX)
                .unwrap(),
            PtpValue::UInt16(400)
        );

        // Second read uses the cache: one transaction only.
        queue_reply(&mock, OperationCode::GET_DEVICE_PROP_VALUE, 3, Some(vec![0x64, 0x00]), &[]);
        assert_eq!(
            device
                .get_device_prop_value(PropertyCode::EXPOSURE_INDEX)
                .unwrap(),
            PtpValue::UInt16(100)
        );
        assert_eq!(device.transaction_id(), 3);
        assert_eq!(
            device.known_properties()[0].current,
            PtpValue::UInt16(100)
        );
        mock.queue_ok(4, &[]);
    }

    #[test]
    fn test_set_value_checks_form_and_type() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        queue_desc(&mock, 1, &exposure_index());
        device
            .get_device_prop_desc(PropertyCode::EXPOSURE_INDEX)
            .unwrap();

        // Not in the enumeration: nothing sent.
        let before = mock.get_writes().len();
        assert!(matches!(
            device.set_device_prop_value(PropertyCode::EXPOSURE_INDEX, PtpValue::UInt16(300)),
            Err(PtpError::InvalidPropertyValue { .. })
        ));
        assert!(matches!(
            device.set_device_prop_value(PropertyCode::EXPOSURE_INDEX, PtpValue::UInt32(400)),
            Err(PtpError::Dataset(_))
        ));
        assert_eq!(mock.get_writes().len(), before);

        mock.queue_ok(2, &[]);
        device
            .set_device_prop_value(PropertyCode::EXPOSURE_INDEX, PtpValue::UInt16(400))
            .unwrap();
        let sent = mock.sent_containers();
        let data = sent.last().unwrap();
        assert_eq!(data.kind, ContainerKind::Data);
        assert_eq!(data.data_bytes(), &[0x90, 0x01]);
        assert_eq!(
            device
                .property_description(PropertyCode::EXPOSURE_INDEX)
                .unwrap()
                .current,
            PtpValue::UInt16(400)
        );
        mock.queue_ok(3, &[]);
    }

    #[test]
    fn test_prop_changed_event_invalidates_cache() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        queue_desc(&mock, 1, &exposure_index());
        device
            .get_device_prop_desc(PropertyCode::EXPOSURE_INDEX)
            .unwrap();
        assert_eq!(device.known_properties().len(), 1);

        mock.queue_container(&Container::event(0x4006, 0xFFFF_FFFF, &[0x500F]));
        let event = device.poll_event().unwrap().unwrap();
        assert_eq!(event.code, EventCode::DEVICE_PROP_CHANGED);
        assert!(device.known_properties().is_empty());
        mock.queue_ok(2, &[]);
    }

    #[test]
    fn test_load_skips_refused_properties() {
        let (mock, device) = connected();
        // Sequoia lists BatteryLevel and 0xD201.
        mock.queue_ok(0, &[]);
        let battery = DevicePropDesc {
            property_code: PropertyCode::BATTERY_LEVEL,
            data_type: DataType::UInt8,
            get_set: 0x00,
            factory_default: PtpValue::UInt8(100),
            current: PtpValue::UInt8(80),
            form: PropertyForm::None,
        };
        queue_desc(&mock, 1, &battery);
        mock.queue_container(&Container::response(0x200A, 2, &[]));
        mock.queue_ok(3, &[]);

        assert_eq!(device.load_property_descriptions().unwrap(), 1);
        assert_eq!(device.known_properties(), vec![battery]);
        // The scope opened for loading is closed again.
        assert_eq!(device.session_id(), None);
    }

    #[test]
    fn test_read_only_property_rejected() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        let mut desc = exposure_index();
        desc.get_set = 0x00;
        queue_desc(&mock, 1, &desc);
        assert!(matches!(
            device.set_device_prop_value(PropertyCode::EXPOSURE_INDEX, PtpValue::UInt16(100)),
            Err(PtpError::InvalidPropertyValue { ref property, .. }) if property == "ExposureIndex"
        ));
        mock.queue_ok(2, &[]);
    }
}
