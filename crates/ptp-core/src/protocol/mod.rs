//! Protocol module - PTP wire definitions.

pub mod codes;
pub mod constants;
pub mod container;

pub use codes::{EventCode, ObjectFormatCode, OperationCode, PropertyCode, ResponseCode};
pub use constants::*;
pub use container::{Container, ContainerError, ContainerHeader, ContainerKind, Payload};
