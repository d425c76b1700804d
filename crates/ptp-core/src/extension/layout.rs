//! Vendor dataset layouts.
//!
//! Some vendor operations return small fixed-shape datasets (sensor arrays,
//! status bitmasks, calibration states). A layout names the parts of such a
//! dataset so callers get labelled values instead of raw bytes.

use std::fmt;

use crate::dataset::{DataType, Dataset, DatasetError, DatasetReader, PtpValue};
use crate::protocol::EventCode;

/// Shape of a vendor dataset.
#[derive(Debug, Clone, Copy)]
pub enum DatasetLayout {
    /// PTP array (u32 count prefix) whose elements carry positional names.
    /// Elements beyond `fields` are labelled `Value{index}`.
    NamedArray {
        element: DataType,
        fields: &'static [&'static str],
    },
    /// u32 bitmask, bit 0 first.
    Flags { fields: &'static [&'static str] },
    /// u32 holding one of a fixed set of values.
    Enumerated { values: &'static [(u32, &'static str)] },
    /// u16 count followed by {u16 event code, u32 parameter} records.
    EventList,
}

/// Layout bound to the operation whose data phase it describes.
#[derive(Debug, Clone, Copy)]
pub struct VendorLayout {
    pub operation: u16,
    pub layout: DatasetLayout,
}

/// A decoded vendor dataset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VendorDataset {
    Fields(Vec<(String, PtpValue)>),
    Flags(Vec<(&'static str, bool)>),
    Enumerated {
        value: u32,
        name: Option<&'static str>,
    },
    Events(Vec<(EventCode, u32)>),
}

impl VendorDataset {
    /// Value of a named field or flag.
    pub fn field(&self, name: &str) -> Option<PtpValue> {
        match self {
            VendorDataset::Fields(fields) => fields
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.clone()),
            VendorDataset::Flags(flags) => flags
                .iter()
                .find(|(n, _)| *n == name)
                .map(|(_, set)| PtpValue::UInt8(u8::from(*set))),
            _ => None,
        }
    }
}

impl fmt::Display for VendorDataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VendorDataset::Fields(fields) => {
                for (i, (name, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}={}", name, value)?;
                }
                Ok(())
            }
            VendorDataset::Flags(flags) => {
                let set: Vec<&str> = flags
                    .iter()
                    .filter(|(_, on)| *on)
                    .map(|(name, _)| *name)
                    .collect();
                write!(f, "[{}]", set.join(", "))
            }
            VendorDataset::Enumerated { value, name } => match name {
                Some(name) => write!(f, "{} ({})", name, value),
                None => write!(f, "Unknown ({})", value),
            },
            VendorDataset::Events(events) => {
                for (i, (code, param)) in events.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}:0x{:08X}", code, param)?;
                }
                Ok(())
            }
        }
    }
}

impl DatasetLayout {
    pub fn decode(&self, data: &[u8]) -> Result<VendorDataset, DatasetError> {
        let mut r = DatasetReader::new(data);
        match *self {
            DatasetLayout::NamedArray { element, fields } => {
                let size = element
                    .scalar_size()
                    .ok_or(DatasetError::UnsupportedType(element.code()))?;
                let count = r.read_count(size)?;
                let mut out = Vec::with_capacity(count);
                for i in 0..count {
                    let name = fields
                        .get(i)
                        .map_or_else(|| format!("Value{}", i), |n| n.to_string());
                    out.push((name, PtpValue::read(element, &mut r)?));
                }
                Ok(VendorDataset::Fields(out))
            }
            DatasetLayout::Flags { fields } => {
                let mask = r.read_u32()?;
                Ok(VendorDataset::Flags(
                    fields
                        .iter()
                        .enumerate()
                        .map(|(bit, name)| (*name, mask & (1 << bit) != 0))
                        .collect(),
                ))
            }
            DatasetLayout::Enumerated { values } => {
                let value = r.read_u32()?;
                let name = values.iter().find(|(v, _)| *v == value).map(|(_, n)| *n);
                Ok(VendorDataset::Enumerated { value, name })
            }
            DatasetLayout::EventList => {
                let count = r.read_u16()? as usize;
                r.require(count.saturating_mul(6))?;
                let mut events = Vec::with_capacity(count);
                for _ in 0..count {
                    let code = EventCode::read(&mut r)?;
                    events.push((code, r.read_u32()?));
                }
                Ok(VendorDataset::Events(events))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn u32_array(values: &[u32]) -> Vec<u8> {
        let mut out = Vec::new();
        values.to_vec().write(&mut out).unwrap();
        out
    }

    #[test]
    fn test_named_array() {
        let layout = DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: &["Yaw", "Pitch", "Roll"],
        };
        let decoded = layout.decode(&u32_array(&[10, 20, 30, 40])).unwrap();
        assert_eq!(decoded.field("Pitch"), Some(PtpValue::UInt32(20)));
        assert_eq!(decoded.field("Value3"), Some(PtpValue::UInt32(40)));
        assert_eq!(decoded.to_string(), "Yaw=10, Pitch=20, Roll=30, Value3=40");
    }

    #[test]
    fn test_named_array_truncated() {
        let layout = DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: &[],
        };
        let mut data = u32_array(&[1, 2]);
        data.truncate(8);
        assert!(matches!(
            layout.decode(&data),
            Err(DatasetError::Truncated { .. })
        ));
    }

    #[test]
    fn test_flags_lsb_first() {
        let layout = DatasetLayout::Flags {
            fields: &["A", "B", "C"],
        };
        let decoded = layout.decode(&0b101u32.to_le_bytes()).unwrap();
        assert_eq!(
            decoded,
            VendorDataset::Flags(vec![("A", true), ("B", false), ("C", true)])
        );
        assert_eq!(decoded.to_string(), "[A, C]");
    }

    #[test]
    fn test_enumerated_unknown_value() {
        let layout = DatasetLayout::Enumerated {
            values: &[(1, "Ok")],
        };
        assert_eq!(
            layout.decode(&1u32.to_le_bytes()).unwrap().to_string(),
            "Ok (1)"
        );
        assert_eq!(
            layout.decode(&9u32.to_le_bytes()).unwrap(),
            VendorDataset::Enumerated {
                value: 9,
                name: None
            }
        );
    }

    #[test]
    fn test_event_list() {
        let mut data = vec![0x02, 0x00];
        data.extend_from_slice(&0xC101u16.to_le_bytes());
        data.extend_from_slice(&0x1234u32.to_le_bytes());
        data.extend_from_slice(&0x4006u16.to_le_bytes());
        data.extend_from_slice(&0x5001u32.to_le_bytes());
        assert_eq!(
            DatasetLayout::EventList.decode(&data).unwrap(),
            VendorDataset::Events(vec![
                (EventCode(0xC101), 0x1234),
                (EventCode::DEVICE_PROP_CHANGED, 0x5001),
            ])
        );

        // Count promises more records than present.
        assert!(DatasetLayout::EventList.decode(&[0x05, 0x00]).is_err());
    }
}
