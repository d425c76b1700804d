//! DevicePropDesc dataset (GetDevicePropDesc).

use super::codec::{Dataset, DatasetError, DatasetReader};
use super::value::{DataType, PtpValue};
use crate::protocol::PropertyCode;

const FORM_NONE: u8 = 0x00;
const FORM_RANGE: u8 = 0x01;
const FORM_ENUMERATION: u8 = 0x02;

/// Allowed values of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyForm {
    None,
    Range {
        min: PtpValue,
        max: PtpValue,
        step: PtpValue,
    },
    Enumeration(Vec<PtpValue>),
    /// Vendor form flag; the remaining bytes are kept verbatim.
    Other { flag: u8, raw: Vec<u8> },
}

impl PropertyForm {
    pub fn flag(&self) -> u8 {
        match self {
            PropertyForm::None => FORM_NONE,
            PropertyForm::Range { .. } => FORM_RANGE,
            PropertyForm::Enumeration(_) => FORM_ENUMERATION,
            PropertyForm::Other { flag, .. } => *flag,
        }
    }

    /// Whether `value` is permitted. Vendor forms cannot be checked and permit anything.
    pub fn permits(&self, value: &PtpValue) -> bool {
        match self {
            PropertyForm::None | PropertyForm::Other { .. } => true,
            PropertyForm::Enumeration(values) => values.contains(value),
            PropertyForm::Range { min, max, step } => {
                match (value.as_i128(), min.as_i128(), max.as_i128(), step.as_i128()) {
                    (Some(v), Some(lo), Some(hi), Some(step)) => {
                        // Offsets across the full i128 range only fit in u128.
                        v >= lo
                            && v <= hi
                            && (step == 0 || v.abs_diff(lo) % step.unsigned_abs() == 0)
                    }
                    _ => false,
                }
            }
        }
    }
}

/// Property description: type, access, defaults and form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DevicePropDesc {
    pub property_code: PropertyCode,
    pub data_type: DataType,
    /// 0x00 read-only, 0x01 read-write.
    pub get_set: u8,
    pub factory_default: PtpValue,
    pub current: PtpValue,
    pub form: PropertyForm,
}

impl DevicePropDesc {
    pub fn is_writable(&self) -> bool {
        self.get_set == 0x01
    }
}

impl Dataset for DevicePropDesc {
    fn read(r: &mut DatasetReader<'_>) -> Result<Self, DatasetError> {
        let property_code = PropertyCode::read(r)?;
        let data_type = DataType::from_code(r.read_u16()?)?;
        let get_set = r.read_u8()?;
        let factory_default = PtpValue::read(data_type, r)?;
        let current = PtpValue::read(data_type, r)?;
        let form = match r.read_u8()? {
            FORM_NONE => PropertyForm::None,
            FORM_RANGE => PropertyForm::Range {
                min: PtpValue::read(data_type, r)?,
                max: PtpValue::read(data_type, r)?,
                step: PtpValue::read(data_type, r)?,
            },
            FORM_ENUMERATION => {
                let count = r.read_u16()?;
                let values = (0..count)
                    .map(|_| PtpValue::read(data_type, r))
                    .collect::<Result<Vec<_>, _>>()?;
                PropertyForm::Enumeration(values)
            }
            flag => PropertyForm::Other {
                flag,
                raw: r.read_rest()?,
            },
        };
        Ok(Self {
            property_code,
            data_type,
            get_set,
            factory_default,
            current,
            form,
        })
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
        self.property_code.write(out)?;
        self.data_type.code().write(out)?;
        self.get_set.write(out)?;
        self.factory_default.expect_type(self.data_type)?;
        self.factory_default.write(out)?;
        self.current.expect_type(self.data_type)?;
        self.current.write(out)?;
        self.form.flag().write(out)?;
        match &self.form {
            PropertyForm::None => {}
            PropertyForm::Range { min, max, step } => {
                for v in [min, max, step] {
                    v.expect_type(self.data_type)?;
                    v.write(out)?;
                }
            }
            PropertyForm::Enumeration(values) => {
                let count =
                    u16::try_from(values.len()).map_err(|_| DatasetError::ArrayTooLong(values.len()))?;
                count.write(out)?;
                for v in values {
                    v.expect_type(self.data_type)?;
                    v.write(out)?;
                }
            }
            PropertyForm::Other { raw, .. } => out.extend_from_slice(raw),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn battery() -> DevicePropDesc {
        DevicePropDesc {
            property_code: PropertyCode::BATTERY_LEVEL,
            data_type: DataType::UInt8,
            get_set: 0x00,
            factory_default: PtpValue::UInt8(100),
            current: PtpValue::UInt8(73),
            form: PropertyForm::Range {
                min: PtpValue::UInt8(0),
                max: PtpValue::UInt8(100),
                step: PtpValue::UInt8(1),
            },
        }
    }

    #[test]
    fn test_range_wire_layout() {
        let bytes = battery().to_bytes().unwrap();
        assert_eq!(
            bytes,
            vec![0x01, 0x50, 0x02, 0x00, 0x00, 100, 73, 0x01, 0, 100, 1]
        );
        let back = DevicePropDesc::from_bytes(&bytes).unwrap();
        assert_eq!(back, battery());
        assert!(!back.is_writable());
    }

    #[test]
    fn test_enumeration_form() {
        let desc = DevicePropDesc {
            property_code: PropertyCode::WHITE_BALANCE,
            data_type: DataType::UInt16,
            get_set: 0x01,
            factory_default: PtpValue::UInt16(2),
            current: PtpValue::UInt16(4),
            form: PropertyForm::Enumeration(vec![
                PtpValue::UInt16(2),
                PtpValue::UInt16(4),
                PtpValue::UInt16(6),
            ]),
        };
        let bytes = desc.to_bytes().unwrap();
        let back = DevicePropDesc::from_bytes(&bytes).unwrap();
        assert_eq!(back, desc);
        assert!(back.form.permits(&PtpValue::UInt16(6)));
        assert!(!back.form.permits(&PtpValue::UInt16(5)));
    }

    #[test]
    fn test_string_property() {
        let desc = DevicePropDesc {
            property_code: PropertyCode::DATE_TIME,
            data_type: DataType::String,
            get_set: 0x01,
            factory_default: PtpValue::String(String::new()),
            current: PtpValue::String("20240101T000000".to_string()),
            form: PropertyForm::None,
        };
        let bytes = desc.to_bytes().unwrap();
        assert_eq!(DevicePropDesc::from_bytes(&bytes).unwrap(), desc);
    }

    #[test]
    fn test_range_permits() {
        let form = battery().form;
        assert!(form.permits(&PtpValue::UInt8(0)));
        assert!(form.permits(&PtpValue::UInt8(100)));
        assert!(!form.permits(&PtpValue::UInt8(101)));
        assert!(!form.permits(&PtpValue::String("x".into())));
    }

    #[test]
    fn test_range_permits_full_int128_span() {
        let form = PropertyForm::Range {
            min: PtpValue::Int128(i128::MIN),
            max: PtpValue::Int128(i128::MAX),
            step: PtpValue::Int128(2),
        };
        assert!(form.permits(&PtpValue::Int128(0)));
        assert!(form.permits(&PtpValue::Int128(i128::MIN)));
        assert!(!form.permits(&PtpValue::Int128(1)));
        assert!(!form.permits(&PtpValue::Int128(i128::MAX)));
    }

    #[test]
    fn test_vendor_form_kept_verbatim() {
        let mut bytes = battery().to_bytes().unwrap();
        bytes.truncate(7);
        bytes.extend_from_slice(&[0x03, 0xAA, 0xBB]);
        let desc = DevicePropDesc::from_bytes(&bytes).unwrap();
        assert_eq!(
            desc.form,
            PropertyForm::Other {
                flag: 0x03,
                raw: vec![0xAA, 0xBB]
            }
        );
        assert_eq!(desc.to_bytes().unwrap(), bytes);
    }

    #[test]
    fn test_unsupported_data_type() {
        let bytes = [0x01, 0x50, 0x00, 0x00, 0x00];
        assert!(matches!(
            DevicePropDesc::from_bytes(&bytes),
            Err(DatasetError::UnsupportedType(0))
        ));
    }

    #[test]
    fn test_mismatched_value_type_rejected_on_write() {
        let mut desc = battery();
        desc.current = PtpValue::UInt16(73);
        assert!(matches!(
            desc.to_bytes(),
            Err(DatasetError::TypeMismatch { .. })
        ));
    }
}
