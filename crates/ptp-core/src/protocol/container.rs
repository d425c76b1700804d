//! PTP generic container codec.
//!
//! Every exchange with a responder is framed as a container:
//!
//! ```text
//! 0      4      6      8              12
//! +------+------+------+--------------+----------------------+
//! | len  | type | code | transaction  | payload ...          |
//! +------+------+------+--------------+----------------------+
//! ```
//!
//! All fields are little-endian. Command, Response and Event containers carry
//! up to five 32-bit parameters; Data containers carry an opaque dataset.

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::fmt;
use std::io::Cursor;
use thiserror::Error;

use super::constants::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContainerError {
    #[error("Buffer too small for a container header: expected {expected}, got {actual}")]
    TooShort { expected: usize, actual: usize },
    #[error("Declared length {declared} exceeds the {available} bytes available")]
    LengthExceedsBuffer { declared: usize, available: usize },
    #[error("Declared length {declared} does not match buffer of {actual} bytes")]
    LengthMismatch { declared: usize, actual: usize },
    #[error("Unknown container type 0x{0:04X}")]
    UnknownKind(u16),
    #[error("Container declares {0} parameters, at most 5 are allowed")]
    TooManyParameters(usize),
    #[error("Parameter block of {0} bytes is not a multiple of 4")]
    MisalignedParameters(usize),
    #[error("Container of {0} bytes exceeds the size limit")]
    TooLarge(usize),
}

/// The four container kinds defined by the transport layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Command,
    Data,
    Response,
    Event,
}

impl ContainerKind {
    pub const fn code(self) -> u16 {
        match self {
            ContainerKind::Command => CONTAINER_TYPE_COMMAND,
            ContainerKind::Data => CONTAINER_TYPE_DATA,
            ContainerKind::Response => CONTAINER_TYPE_RESPONSE,
            ContainerKind::Event => CONTAINER_TYPE_EVENT,
        }
    }

    pub fn from_code(code: u16) -> Result<Self, ContainerError> {
        match code {
            CONTAINER_TYPE_COMMAND => Ok(ContainerKind::Command),
            CONTAINER_TYPE_DATA => Ok(ContainerKind::Data),
            CONTAINER_TYPE_RESPONSE => Ok(ContainerKind::Response),
            CONTAINER_TYPE_EVENT => Ok(ContainerKind::Event),
            other => Err(ContainerError::UnknownKind(other)),
        }
    }

    /// Whether the payload is a parameter block rather than a dataset.
    pub const fn carries_params(self) -> bool {
        !matches!(self, ContainerKind::Data)
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContainerKind::Command => write!(f, "Command"),
            ContainerKind::Data => write!(f, "Data"),
            ContainerKind::Response => write!(f, "Response"),
            ContainerKind::Event => write!(f, "Event"),
        }
    }
}

/// Container payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Params(Vec<u32>),
    Data(Vec<u8>),
}

impl Payload {
    /// Encoded size in bytes.
    pub fn len(&self) -> usize {
        match self {
            Payload::Params(p) => p.len() * 4,
            Payload::Data(d) => d.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Fixed 12-byte container header (12 bytes / 0x0C).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContainerHeader {
    pub length: u32,
    pub kind: ContainerKind,
    pub code: u16,
    pub transaction_id: u32,
}

impl ContainerHeader {
    pub const SIZE: usize = CONTAINER_HEADER_SIZE;

    /// Parse the header at the start of `data` without looking at the payload.
    pub fn peek(data: &[u8]) -> Result<Self, ContainerError> {
        if data.len() < Self::SIZE {
            return Err(ContainerError::TooShort {
                expected: Self::SIZE,
                actual: data.len(),
            });
        }
        let mut cursor = Cursor::new(data);
        let length = read_u32(&mut cursor)?;
        let kind = ContainerKind::from_code(read_u16(&mut cursor)?)?;
        let code = read_u16(&mut cursor)?;
        let transaction_id = read_u32(&mut cursor)?;

        if (length as usize) < Self::SIZE {
            return Err(ContainerError::LengthMismatch {
                declared: length as usize,
                actual: data.len(),
            });
        }

        Ok(Self {
            length,
            kind,
            code,
            transaction_id,
        })
    }
}

/// One decoded PTP container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    pub kind: ContainerKind,
    pub code: u16,
    pub transaction_id: u32,
    pub payload: Payload,
}

impl Container {
    pub fn command(code: u16, transaction_id: u32, params: &[u32]) -> Self {
        Self {
            kind: ContainerKind::Command,
            code,
            transaction_id,
            payload: Payload::Params(params.to_vec()),
        }
    }

    pub fn data(code: u16, transaction_id: u32, data: Vec<u8>) -> Self {
        Self {
            kind: ContainerKind::Data,
            code,
            transaction_id,
            payload: Payload::Data(data),
        }
    }

    pub fn response(code: u16, transaction_id: u32, params: &[u32]) -> Self {
        Self {
            kind: ContainerKind::Response,
            code,
            transaction_id,
            payload: Payload::Params(params.to_vec()),
        }
    }

    pub fn event(code: u16, transaction_id: u32, params: &[u32]) -> Self {
        Self {
            kind: ContainerKind::Event,
            code,
            transaction_id,
            payload: Payload::Params(params.to_vec()),
        }
    }

    /// Total encoded length including the header.
    pub fn len(&self) -> usize {
        ContainerHeader::SIZE + self.payload.len()
    }

    /// A container always has at least a header.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Parameters of a Command/Response/Event container; empty for Data.
    pub fn params(&self) -> &[u32] {
        match &self.payload {
            Payload::Params(p) => p,
            Payload::Data(_) => &[],
        }
    }

    /// Dataset bytes of a Data container; empty for the other kinds.
    pub fn data_bytes(&self) -> &[u8] {
        match &self.payload {
            Payload::Data(d) => d,
            Payload::Params(_) => &[],
        }
    }

    pub fn into_data(self) -> Vec<u8> {
        match self.payload {
            Payload::Data(d) => d,
            Payload::Params(_) => Vec::new(),
        }
    }

    pub fn encode(&self) -> Result<Vec<u8>, ContainerError> {
        if let Payload::Params(p) = &self.payload
            && p.len() > MAX_PARAMS
        {
            return Err(ContainerError::TooManyParameters(p.len()));
        }
        let total = self.len();
        if total > MAX_CONTAINER_SIZE {
            return Err(ContainerError::TooLarge(total));
        }

        let mut buf = Vec::with_capacity(total);
        // Writes into a Vec cannot fail.
        let _ = buf.write_u32::<LittleEndian>(total as u32);
        let _ = buf.write_u16::<LittleEndian>(self.kind.code());
        let _ = buf.write_u16::<LittleEndian>(self.code);
        let _ = buf.write_u32::<LittleEndian>(self.transaction_id);
        match &self.payload {
            Payload::Params(params) => {
                for &p in params {
                    let _ = buf.write_u32::<LittleEndian>(p);
                }
            }
            Payload::Data(data) => buf.extend_from_slice(data),
        }
        Ok(buf)
    }

    /// Decode exactly one container occupying the whole of `data`.
    pub fn decode(data: &[u8]) -> Result<Self, ContainerError> {
        let header = ContainerHeader::peek(data)?;
        let declared = header.length as usize;
        if declared > data.len() {
            return Err(ContainerError::LengthExceedsBuffer {
                declared,
                available: data.len(),
            });
        }
        if declared != data.len() {
            return Err(ContainerError::LengthMismatch {
                declared,
                actual: data.len(),
            });
        }

        let body = &data[ContainerHeader::SIZE..declared];
        let payload = if header.kind.carries_params() {
            Payload::Params(decode_params(body)?)
        } else {
            Payload::Data(body.to_vec())
        };

        Ok(Self {
            kind: header.kind,
            code: header.code,
            transaction_id: header.transaction_id,
            payload,
        })
    }
}

fn decode_params(body: &[u8]) -> Result<Vec<u32>, ContainerError> {
    if body.len() % 4 != 0 {
        return Err(ContainerError::MisalignedParameters(body.len()));
    }
    let count = body.len() / 4;
    if count > MAX_PARAMS {
        return Err(ContainerError::TooManyParameters(count));
    }
    let mut cursor = Cursor::new(body);
    (0..count).map(|_| read_u32(&mut cursor)).collect()
}

fn read_u16(cursor: &mut Cursor<&[u8]>) -> Result<u16, ContainerError> {
    let available = cursor.get_ref().len();
    cursor
        .read_u16::<LittleEndian>()
        .map_err(|_| ContainerError::TooShort {
            expected: cursor.position() as usize + 2,
            actual: available,
        })
}

fn read_u32(cursor: &mut Cursor<&[u8]>) -> Result<u32, ContainerError> {
    let available = cursor.get_ref().len();
    cursor
        .read_u32::<LittleEndian>()
        .map_err(|_| ContainerError::TooShort {
            expected: cursor.position() as usize + 4,
            actual: available,
        })
}
