//! The PTP typed-value system.
//!
//! A [`DataType`] code tells a reader how to interpret a property value in a
//! DevicePropDesc or a GetDevicePropValue dataset. [`PtpValue`] holds one
//! decoded value of any supported type.

use std::fmt;

use super::codec::{Dataset, DatasetError, DatasetReader};

/// Array data type codes are the scalar code with this bit set.
pub const ARRAY_FLAG: u16 = 0x4000;

/// Data type code for PTP strings.
pub const STRING_TYPE: u16 = 0xFFFF;

macro_rules! typed_values {
    ($($scalar:ident / $array:ident : $ty:ty = $code:expr),* $(,)?) => {
        /// ISO15740 data type codes supported by the engine.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum DataType {
            $($scalar,)*
            $($array,)*
            String,
        }

        impl DataType {
            pub const fn code(self) -> u16 {
                match self {
                    $(DataType::$scalar => $code,)*
                    $(DataType::$array => $code | ARRAY_FLAG,)*
                    DataType::String => STRING_TYPE,
                }
            }

            /// Resolve a wire data type code. Undefined (0x0000) and codes
            /// outside the table are rejected.
            pub fn from_code(code: u16) -> Result<Self, DatasetError> {
                $(
                    if code == $code {
                        return Ok(DataType::$scalar);
                    }
                    if code == ($code | ARRAY_FLAG) {
                        return Ok(DataType::$array);
                    }
                )*
                if code == STRING_TYPE {
                    return Ok(DataType::String);
                }
                Err(DatasetError::UnsupportedType(code))
            }

            /// Encoded size of one value, for scalar types.
            pub const fn scalar_size(self) -> Option<usize> {
                match self {
                    $(DataType::$scalar => Some(std::mem::size_of::<$ty>()),)*
                    _ => None,
                }
            }

            pub const fn is_array(self) -> bool {
                self.code() & ARRAY_FLAG != 0 && !matches!(self, DataType::String)
            }
        }

        impl fmt::Display for DataType {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(DataType::$scalar => f.write_str(stringify!($scalar)),)*
                    $(DataType::$array => f.write_str(stringify!($array)),)*
                    DataType::String => f.write_str("String"),
                }
            }
        }

        /// One decoded typed value.
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum PtpValue {
            $($scalar($ty),)*
            $($array(Vec<$ty>),)*
            String(String),
        }

        impl PtpValue {
            pub fn data_type(&self) -> DataType {
                match self {
                    $(PtpValue::$scalar(_) => DataType::$scalar,)*
                    $(PtpValue::$array(_) => DataType::$array,)*
                    PtpValue::String(_) => DataType::String,
                }
            }

            /// Read one value of type `data_type`.
            pub fn read(
                data_type: DataType,
                reader: &mut DatasetReader<'_>,
            ) -> Result<Self, DatasetError> {
                Ok(match data_type {
                    $(DataType::$scalar => PtpValue::$scalar(<$ty>::read(reader)?),)*
                    $(DataType::$array => PtpValue::$array(Vec::<$ty>::read(reader)?),)*
                    DataType::String => PtpValue::String(reader.read_string()?),
                })
            }

            pub fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
                match self {
                    $(PtpValue::$scalar(v) => v.write(out),)*
                    $(PtpValue::$array(v) => v.write(out),)*
                    PtpValue::String(s) => s.write(out),
                }
            }

            /// Integer view of a scalar value, for range checks and display.
            pub fn as_i128(&self) -> Option<i128> {
                match self {
                    $(PtpValue::$scalar(v) => i128::try_from(*v).ok(),)*
                    _ => None,
                }
            }
        }

        impl fmt::Display for PtpValue {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(PtpValue::$scalar(v) => write!(f, "{}", v),)*
                    $(PtpValue::$array(v) => write!(f, "{:?}", v),)*
                    PtpValue::String(s) => write!(f, "{:?}", s),
                }
            }
        }
    };
}

typed_values! {
    Int8 / Int8Array: i8 = 0x0001,
    UInt8 / UInt8Array: u8 = 0x0002,
    Int16 / Int16Array: i16 = 0x0003,
    UInt16 / UInt16Array: u16 = 0x0004,
    Int32 / Int32Array: i32 = 0x0005,
    UInt32 / UInt32Array: u32 = 0x0006,
    Int64 / Int64Array: i64 = 0x0007,
    UInt64 / UInt64Array: u64 = 0x0008,
    Int128 / Int128Array: i128 = 0x0009,
    UInt128 / UInt128Array: u128 = 0x000A,
}

impl PtpValue {
    /// Decode a complete value dataset, such as the payload of GetDevicePropValue.
    pub fn from_bytes(data_type: DataType, data: &[u8]) -> Result<Self, DatasetError> {
        let mut reader = DatasetReader::new(data);
        Self::read(data_type, &mut reader)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, DatasetError> {
        let mut out = Vec::new();
        self.write(&mut out)?;
        Ok(out)
    }

    /// Fail unless the value has type `expected`.
    pub fn expect_type(&self, expected: DataType) -> Result<(), DatasetError> {
        let actual = self.data_type();
        if actual != expected {
            return Err(DatasetError::TypeMismatch {
                expected: expected.to_string(),
                actual: actual.to_string(),
            });
        }
        Ok(())
    }
}
