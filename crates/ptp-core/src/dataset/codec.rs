//! Bounds-checked dataset reader and the [`Dataset`] trait.
//!
//! Datasets are little-endian. Every length-prefixed item (arrays, strings)
//! is checked against the bytes that remain before anything is allocated,
//! so a corrupt count can never read past the dataset or trigger a huge
//! allocation.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{Cursor, Read};
use thiserror::Error;

use crate::protocol::{EventCode, ObjectFormatCode, OperationCode, PropertyCode, ResponseCode};

/// Longest PTP string in UTF-16 code units (the count byte includes the terminator).
pub const MAX_STRING_UNITS: usize = 254;

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("Dataset truncated at offset {offset}: need {needed} bytes, {available} left")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("Unsupported data type 0x{0:04X}")]
    UnsupportedType(u16),
    #[error("Invalid PTP string: {0}")]
    InvalidString(String),
    #[error("String of {0} UTF-16 units exceeds the 254 unit limit")]
    StringTooLong(usize),
    #[error("Array of {0} elements exceeds the 32-bit count field")]
    ArrayTooLong(usize),
    #[error("Value of type {actual} where {expected} was expected")]
    TypeMismatch { expected: String, actual: String },
    #[error("{0} unread bytes after dataset")]
    TrailingBytes(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Cursor over a dataset that refuses to read past its end.
#[derive(Debug)]
pub struct DatasetReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> DatasetReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(data),
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    pub fn remaining(&self) -> usize {
        self.cursor.get_ref().len().saturating_sub(self.position())
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Fail unless at least `needed` bytes remain.
    pub fn require(&self, needed: usize) -> Result<(), DatasetError> {
        if needed > self.remaining() {
            return Err(DatasetError::Truncated {
                offset: self.position(),
                needed,
                available: self.remaining(),
            });
        }
        Ok(())
    }

    /// Fail if any bytes are left unread.
    pub fn finish(&self) -> Result<(), DatasetError> {
        match self.remaining() {
            0 => Ok(()),
            n => Err(DatasetError::TrailingBytes(n)),
        }
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<Vec<u8>, DatasetError> {
        self.require(len)?;
        let mut buf = vec![0u8; len];
        self.cursor.read_exact(&mut buf)?;
        Ok(buf)
    }

    /// Everything that has not been read yet.
    pub fn read_rest(&mut self) -> Result<Vec<u8>, DatasetError> {
        self.read_bytes(self.remaining())
    }

    pub fn read_u8(&mut self) -> Result<u8, DatasetError> {
        self.require(1)?;
        Ok(self.cursor.read_u8()?)
    }

    pub fn read_i8(&mut self) -> Result<i8, DatasetError> {
        self.require(1)?;
        Ok(self.cursor.read_i8()?)
    }

    pub fn read_u16(&mut self) -> Result<u16, DatasetError> {
        self.require(2)?;
        Ok(self.cursor.read_u16::<LittleEndian>()?)
    }

    pub fn read_i16(&mut self) -> Result<i16, DatasetError> {
        self.require(2)?;
        Ok(self.cursor.read_i16::<LittleEndian>()?)
    }

    pub fn read_u32(&mut self) -> Result<u32, DatasetError> {
        self.require(4)?;
        Ok(self.cursor.read_u32::<LittleEndian>()?)
    }

    pub fn read_i32(&mut self) -> Result<i32, DatasetError> {
        self.require(4)?;
        Ok(self.cursor.read_i32::<LittleEndian>()?)
    }

    pub fn read_u64(&mut self) -> Result<u64, DatasetError> {
        self.require(8)?;
        Ok(self.cursor.read_u64::<LittleEndian>()?)
    }

    pub fn read_i64(&mut self) -> Result<i64, DatasetError> {
        self.require(8)?;
        Ok(self.cursor.read_i64::<LittleEndian>()?)
    }

    pub fn read_u128(&mut self) -> Result<u128, DatasetError> {
        self.require(16)?;
        Ok(self.cursor.read_u128::<LittleEndian>()?)
    }

    pub fn read_i128(&mut self) -> Result<i128, DatasetError> {
        self.require(16)?;
        Ok(self.cursor.read_i128::<LittleEndian>()?)
    }

    /// Read a u32 element count and check that `count * element_size` bytes remain.
    pub fn read_count(&mut self, element_size: usize) -> Result<usize, DatasetError> {
        let count = self.read_u32()? as usize;
        let needed = count
            .checked_mul(element_size)
            .ok_or(DatasetError::ArrayTooLong(count))?;
        self.require(needed)?;
        Ok(count)
    }

    /// Read a PTP string: count byte (including terminator) then UTF-16LE units.
    pub fn read_string(&mut self) -> Result<String, DatasetError> {
        let count = self.read_u8()? as usize;
        if count == 0 {
            return Ok(String::new());
        }
        self.require(count * 2)?;
        let mut units = Vec::with_capacity(count);
        for _ in 0..count {
            units.push(self.cursor.read_u16::<LittleEndian>()?);
        }
        let end = units.iter().position(|&u| u == 0).unwrap_or(units.len());
        String::from_utf16(&units[..end]).map_err(|e| DatasetError::InvalidString(e.to_string()))
    }
}

/// Write a PTP string. The empty string is the single byte `0x00`.
pub fn write_string(out: &mut Vec<u8>, s: &str) -> Result<(), DatasetError> {
    if s.is_empty() {
        out.write_u8(0)?;
        return Ok(());
    }
    if s.contains('\0') {
        return Err(DatasetError::InvalidString(
            "embedded NUL character".to_string(),
        ));
    }
    let units: Vec<u16> = s.encode_utf16().collect();
    if units.len() > MAX_STRING_UNITS {
        return Err(DatasetError::StringTooLong(units.len()));
    }
    out.write_u8((units.len() + 1) as u8)?;
    for u in units {
        out.write_u16::<LittleEndian>(u)?;
    }
    out.write_u16::<LittleEndian>(0)?;
    Ok(())
}

/// Write a u32 element count for a PTP array.
pub fn write_count(out: &mut Vec<u8>, count: usize) -> Result<(), DatasetError> {
    let count = u32::try_from(count).map_err(|_| DatasetError::ArrayTooLong(count))?;
    out.write_u32::<LittleEndian>(count)?;
    Ok(())
}

/// A structure that can be read from and written to a dataset.
pub trait Dataset: Sized {
    fn read(reader: &mut DatasetReader<'_>) -> Result<Self, DatasetError>;

    fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError>;

    /// Decode from a complete dataset. Trailing bytes are tolerated, since
    /// responders routinely pad datasets.
    fn from_bytes(data: &[u8]) -> Result<Self, DatasetError> {
        let mut reader = DatasetReader::new(data);
        Self::read(&mut reader)
    }

    fn to_bytes(&self) -> Result<Vec<u8>, DatasetError> {
        let mut out = Vec::new();
        self.write(&mut out)?;
        Ok(out)
    }
}

/// Fixed-size dataset element, usable inside PTP arrays.
pub trait Scalar: Dataset {
    const SIZE: usize;
}

macro_rules! impl_scalar {
    ($ty:ty, $size:expr, $read:ident, $write:expr) => {
        impl Dataset for $ty {
            fn read(reader: &mut DatasetReader<'_>) -> Result<Self, DatasetError> {
                reader.$read()
            }

            fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
                let write: fn(&mut Vec<u8>, $ty) -> std::io::Result<()> = $write;
                write(out, *self).map_err(Into::into)
            }
        }

        impl Scalar for $ty {
            const SIZE: usize = $size;
        }
    };
}

impl_scalar!(u8, 1, read_u8, |o, v| o.write_u8(v));
impl_scalar!(i8, 1, read_i8, |o, v| o.write_i8(v));
impl_scalar!(u16, 2, read_u16, |o, v| o.write_u16::<LittleEndian>(v));
impl_scalar!(i16, 2, read_i16, |o, v| o.write_i16::<LittleEndian>(v));
impl_scalar!(u32, 4, read_u32, |o, v| o.write_u32::<LittleEndian>(v));
impl_scalar!(i32, 4, read_i32, |o, v| o.write_i32::<LittleEndian>(v));
impl_scalar!(u64, 8, read_u64, |o, v| o.write_u64::<LittleEndian>(v));
impl_scalar!(i64, 8, read_i64, |o, v| o.write_i64::<LittleEndian>(v));
impl_scalar!(u128, 16, read_u128, |o, v| o.write_u128::<LittleEndian>(v));
impl_scalar!(i128, 16, read_i128, |o, v| o.write_i128::<LittleEndian>(v));

macro_rules! impl_code_scalar {
    ($($code:ty),*) => {
        $(
            impl Dataset for $code {
                fn read(reader: &mut DatasetReader<'_>) -> Result<Self, DatasetError> {
                    reader.read_u16().map(Self)
                }

                fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
                    self.0.write(out)
                }
            }

            impl Scalar for $code {
                const SIZE: usize = 2;
            }
        )*
    };
}

impl_code_scalar!(
    OperationCode,
    ResponseCode,
    EventCode,
    PropertyCode,
    ObjectFormatCode
);

impl Dataset for String {
    fn read(reader: &mut DatasetReader<'_>) -> Result<Self, DatasetError> {
        reader.read_string()
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
        write_string(out, self)
    }
}

/// PTP arrays: u32 element count followed by the elements.
impl<T: Scalar> Dataset for Vec<T> {
    fn read(reader: &mut DatasetReader<'_>) -> Result<Self, DatasetError> {
        let count = reader.read_count(T::SIZE)?;
        (0..count).map(|_| T::read(reader)).collect()
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
        write_count(out, self.len())?;
        for item in self {
            item.write(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_string_is_single_zero_byte() {
        let bytes = String::new().to_bytes().unwrap();
        assert_eq!(bytes, vec![0x00]);
        assert_eq!(String::from_bytes(&[0x00]).unwrap(), "");
    }

    #[test]
    fn test_string_wire_format() {
        let bytes = "Hi".to_string().to_bytes().unwrap();
        assert_eq!(bytes, vec![0x03, b'H', 0x00, b'i', 0x00, 0x00, 0x00]);
        assert_eq!(String::from_bytes(&bytes).unwrap(), "Hi");
    }

    #[test]
    fn test_string_roundtrip_non_ascii() {
        for s in ["Nikon D750", "Ünïcödé", "カメラ", "\u{1F4F7} cam"] {
            let bytes = s.to_string().to_bytes().unwrap();
            assert_eq!(String::from_bytes(&bytes).unwrap(), s);
        }
    }

    #[test]
    fn test_string_limits() {
        let max = "a".repeat(MAX_STRING_UNITS);
        let bytes = max.to_bytes().unwrap();
        assert_eq!(bytes[0], 255);
        assert_eq!(String::from_bytes(&bytes).unwrap(), max);

        let too_long = "a".repeat(MAX_STRING_UNITS + 1);
        assert!(matches!(
            too_long.to_bytes(),
            Err(DatasetError::StringTooLong(255))
        ));
        assert!(matches!(
            "a\0b".to_string().to_bytes(),
            Err(DatasetError::InvalidString(_))
        ));
    }

    #[test]
    fn test_truncated_string() {
        // Claims 3 units but only carries one.
        let err = String::from_bytes(&[0x03, b'H', 0x00]).unwrap_err();
        assert!(matches!(err, DatasetError::Truncated { needed: 6, .. }));
    }

    #[test]
    fn test_array_count_is_bounded() {
        // Count of 0xFFFFFFFF with 4 bytes of payload must not allocate.
        let bytes = [0xFF, 0xFF, 0xFF, 0xFF, 1, 2, 3, 4];
        assert!(matches!(
            Vec::<u32>::from_bytes(&bytes),
            Err(DatasetError::Truncated { .. })
        ));
    }

    #[test]
    fn test_array_roundtrip() {
        let handles: Vec<u32> = vec![1, 0x10000, 0xFFFF_FFFF];
        let bytes = handles.to_bytes().unwrap();
        assert_eq!(bytes.len(), 4 + 12);
        assert_eq!(Vec::<u32>::from_bytes(&bytes).unwrap(), handles);

        let empty: Vec<i64> = Vec::new();
        assert_eq!(empty.to_bytes().unwrap(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn test_reader_finish() {
        let mut reader = DatasetReader::new(&[1, 2, 3]);
        assert_eq!(reader.read_u16().unwrap(), 0x0201);
        assert!(matches!(reader.finish(), Err(DatasetError::TrailingBytes(1))));
        assert_eq!(reader.read_u8().unwrap(), 3);
        assert!(reader.finish().is_ok());
        assert!(reader.read_u8().is_err());
    }
}
