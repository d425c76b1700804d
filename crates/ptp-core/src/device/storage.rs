//! Storage operations.

use tracing::instrument;

use super::PtpDevice;
use crate::dataset::{Dataset, StorageInfo};
use crate::error::Result;
use crate::protocol::OperationCode;
use crate::transport::PtpTransport;

impl<T: PtpTransport> PtpDevice<T> {
    /// IDs of the stores currently present.
    #[instrument(skip(self))]
    pub fn get_storage_ids(&self) -> Result<Vec<u32>> {
        let reply = self.invoke(OperationCode::GET_STORAGE_IDS, &[], None)?;
        Ok(Vec::<u32>::from_bytes(reply.data_bytes())?)
    }

    #[instrument(skip(self))]
    pub fn get_storage_info(&self, storage_id: u32) -> Result<StorageInfo> {
        let reply = self.invoke(OperationCode::GET_STORAGE_INFO, &[storage_id], None)?;
        Ok(StorageInfo::from_bytes(reply.data_bytes())?)
    }
}

#[cfg(test)]
mod tests {
    use crate::dataset::{Dataset, StorageInfo};
    use crate::device::tests::{connected, queue_reply};
    use crate::error::PtpError;
    use crate::protocol::{Container, OperationCode};

    #[test]
    fn test_storage_ids_and_info() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        let ids = vec![0x0001_0001u32, 0x0002_0001];
        queue_reply(&mock, OperationCode::GET_STORAGE_IDS, 1, Some(ids.to_bytes().unwrap()), &[]);
        assert_eq!(device.get_storage_ids().unwrap(), ids);

        let info = StorageInfo {
            storage_type: 0x0004,
            filesystem_type: 0x0002,
            max_capacity: 64 << 30,
            free_space_in_bytes: 1 << 30,
            free_space_in_images: 0xFFFF_FFFF,
            storage_description: "SD".into(),
            ..Default::default()
        };
        queue_reply(&mock, OperationCode::GET_STORAGE_INFO, 2, Some(info.to_bytes().unwrap()), &[]);
        assert_eq!(device.get_storage_info(0x0001_0001).unwrap(), info);

        let sent = mock.sent_containers();
        assert_eq!(sent.last().unwrap().params(), &[0x0001_0001]);
        mock.queue_ok(3, &[]);
    }

    #[test]
    fn test_invalid_storage_id() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        mock.queue_container(&Container::response(0x2008, 1, &[]));
        let err = device.get_storage_info(0xDEAD).unwrap_err();
        assert!(matches!(
            err,
            PtpError::DeviceResponse { ref name, .. } if name == "InvalidStorageId"
        ));
        mock.queue_ok(2, &[]);
    }
}
