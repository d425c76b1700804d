//! Datasets carried in Data containers.

pub mod codec;
pub mod device_info;
pub mod prop_desc;
pub mod storage;
pub mod value;

pub use codec::{Dataset, DatasetError, DatasetReader, Scalar};
pub use device_info::DeviceInfo;
pub use prop_desc::{DevicePropDesc, PropertyForm};
pub use storage::{ObjectInfo, StorageInfo};
pub use value::{DataType, PtpValue};
