//! Object enumeration and transfer.

use tracing::{debug, instrument};

use super::{PtpDevice, first_param};
use crate::dataset::{Dataset, ObjectInfo};
use crate::error::{PtpError, Result};
use crate::protocol::{ObjectFormatCode, OperationCode};
use crate::transport::PtpTransport;

/// Where the responder placed an object announced with SendObjectInfo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObjectLocation {
    pub storage_id: u32,
    pub parent: u32,
    pub handle: u32,
}

impl<T: PtpTransport> PtpDevice<T> {
    /// Count objects. `storage_id` 0xFFFFFFFF means all stores, `parent`
    /// 0xFFFFFFFF the root and 0 any level.
    #[instrument(skip(self))]
    pub fn get_num_objects(
        &self,
        storage_id: u32,
        format: ObjectFormatCode,
        parent: u32,
    ) -> Result<u32> {
        let op = OperationCode::GET_NUM_OBJECTS;
        let reply = self.invoke(op, &[storage_id, u32::from(format.0), parent], None)?;
        first_param(op, &reply)
    }

    /// Same filters as [`PtpDevice::get_num_objects`].
    #[instrument(skip(self))]
    pub fn get_object_handles(
        &self,
        storage_id: u32,
        format: ObjectFormatCode,
        parent: u32,
    ) -> Result<Vec<u32>> {
        let reply = self.invoke(
            OperationCode::GET_OBJECT_HANDLES,
            &[storage_id, u32::from(format.0), parent],
            None,
        )?;
        Ok(Vec::<u32>::from_bytes(reply.data_bytes())?)
    }

    #[instrument(skip(self))]
    pub fn get_object_info(&self, handle: u32) -> Result<ObjectInfo> {
        let reply = self.invoke(OperationCode::GET_OBJECT_INFO, &[handle], None)?;
        Ok(ObjectInfo::from_bytes(reply.data_bytes())?)
    }

    #[instrument(skip(self))]
    pub fn get_object(&self, handle: u32) -> Result<Vec<u8>> {
        let reply = self.invoke(OperationCode::GET_OBJECT, &[handle], None)?;
        let data = reply.data.unwrap_or_default();
        debug!(handle, len = data.len(), "Object received");
        Ok(data)
    }

    /// Up to `max_bytes` of an object starting at `offset`.
    #[instrument(skip(self))]
    pub fn get_partial_object(&self, handle: u32, offset: u32, max_bytes: u32) -> Result<Vec<u8>> {
        let reply = self.invoke(
            OperationCode::GET_PARTIAL_OBJECT,
            &[handle, offset, max_bytes],
            None,
        )?;
        Ok(reply.data.unwrap_or_default())
    }

    #[instrument(skip(self))]
    pub fn get_thumb(&self, handle: u32) -> Result<Vec<u8>> {
        let reply = self.invoke(OperationCode::GET_THUMB, &[handle], None)?;
        Ok(reply.data.unwrap_or_default())
    }

    /// Delete one object, or with `handle` 0xFFFFFFFF every object of
    /// `format` (ANY for all).
    #[instrument(skip(self))]
    pub fn delete_object(&self, handle: u32, format: ObjectFormatCode) -> Result<()> {
        self.invoke(
            OperationCode::DELETE_OBJECT,
            &[handle, u32::from(format.0)],
            None,
        )?;
        Ok(())
    }

    /// Announce an object to be sent with [`PtpDevice::send_object`].
    #[instrument(skip(self, info), fields(filename = %info.filename))]
    pub fn send_object_info(
        &self,
        storage_id: u32,
        parent: u32,
        info: &ObjectInfo,
    ) -> Result<ObjectLocation> {
        let op = OperationCode::SEND_OBJECT_INFO;
        let reply = self.invoke(op, &[storage_id, parent], Some(info.to_bytes()?))?;
        let param = |index| {
            reply
                .param(index)
                .ok_or(PtpError::MissingParameter { operation: op, index })
        };
        Ok(ObjectLocation {
            storage_id: param(0)?,
            parent: param(1)?,
            handle: param(2)?,
        })
    }

    /// Send the data of the object announced last.
    #[instrument(skip(self, data), fields(len = data.len()))]
    pub fn send_object(&self, data: Vec<u8>) -> Result<()> {
        self.invoke(OperationCode::SEND_OBJECT, &[], Some(data))?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub fn move_object(&self, handle: u32, storage_id: u32, parent: u32) -> Result<()> {
        self.invoke(OperationCode::MOVE_OBJECT, &[handle, storage_id, parent], None)?;
        Ok(())
    }

    /// Returns the handle of the copy.
    #[instrument(skip(self))]
    pub fn copy_object(&self, handle: u32, storage_id: u32, parent: u32) -> Result<u32> {
        let op = OperationCode::COPY_OBJECT;
        let reply = self.invoke(op, &[handle, storage_id, parent], None)?;
        first_param(op, &reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::device::tests::{connected, queue_reply};
    use crate::protocol::constants::PARAM_ALL;
    use crate::protocol::{Container, ContainerKind};

    #[test]
    fn test_enumerate_objects() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        mock.queue_ok(1, &[2]);
        assert_eq!(
            device
                .get_num_objects(PARAM_ALL, ObjectFormatCode::ANY, 0)
                .unwrap(),
            2
        );

        let handles = vec![0x10u32, 0x11];
        queue_reply(&mock, OperationCode::GET_OBJECT_HANDLES, 2, Some(handles.to_bytes().unwrap()), &[]);
        assert_eq!(
            device
                .get_object_handles(0x0001_0001, ObjectFormatCode::EXIF_JPEG, PARAM_ALL)
                .unwrap(),
            handles
        );

        let commands: Vec<Vec<u32>> = mock
            .sent_containers()
            .into_iter()
            .filter(|c| c.kind == ContainerKind::Command)
            .map(|c| c.params().to_vec())
            .collect();
        // Trailing zero filters are not sent.
        assert_eq!(commands[1], vec![PARAM_ALL]);
        assert_eq!(commands[2], vec![0x0001_0001, 0x3801, PARAM_ALL]);
        mock.queue_ok(3, &[]);
    }

    #[test]
    fn test_missing_count_parameter() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        mock.queue_ok(1, &[]);
        assert!(matches!(
            device.get_num_objects(PARAM_ALL, ObjectFormatCode::ANY, 0),
            Err(PtpError::MissingParameter { index: 0, .. })
        ));
        mock.queue_ok(2, &[]);
    }

    #[test]
    fn test_get_object_split_across_reads() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        let payload: Vec<u8> = (0..2000u32).map(|i| i as u8).collect();
        let data = Container::data(0x1009, 1, payload.clone()).encode().unwrap();
        for chunk in data.chunks(700) {
            mock.queue_bytes(chunk);
        }
        mock.queue_ok(1, &[]);
        assert_eq!(device.get_object(0x10).unwrap(), payload);
        mock.queue_ok(2, &[]);
    }

    #[test]
    fn test_send_object_info_and_data() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        let info = ObjectInfo {
            object_format: ObjectFormatCode(0x3004),
            object_compressed_size: 5,
            filename: "NOTE.TXT".into(),
            ..Default::default()
        };
        mock.queue_ok(1, &[0x0001_0001, PARAM_ALL, 0x42]);
        let location = device.send_object_info(0x0001_0001, PARAM_ALL, &info).unwrap();
        assert_eq!(
            location,
            ObjectLocation {
                storage_id: 0x0001_0001,
                parent: PARAM_ALL,
                handle: 0x42
            }
        );

        mock.queue_ok(2, &[]);
        device.send_object(b"hello".to_vec()).unwrap();

        let sent = mock.sent_containers();
        // Open, command + data, command + data.
        assert_eq!(sent.len(), 5);
        assert_eq!(sent[2].kind, ContainerKind::Data);
        assert_eq!(ObjectInfo::from_bytes(sent[2].data_bytes()).unwrap(), info);
        assert_eq!(sent[4].data_bytes(), b"hello");
        assert_eq!(sent[4].transaction_id, 2);
        mock.queue_ok(3, &[]);
    }

    #[test]
    fn test_copy_returns_new_handle() {
        let (mock, device) = connected();
        mock.queue_ok(0, &[]);
        let _session = device.session().unwrap();

        mock.queue_ok(1, &[0x99]);
        assert_eq!(device.copy_object(0x10, 0x0002_0001, PARAM_ALL).unwrap(), 0x99);
        mock.queue_ok(2, &[]);
        device.move_object(0x10, 0x0002_0001, PARAM_ALL).unwrap();
        mock.queue_ok(3, &[]);
        device.delete_object(0x10, ObjectFormatCode::ANY).unwrap();

        let last = mock.sent_containers().pop().unwrap();
        assert_eq!(last.code, 0x100B);
        assert_eq!(last.params(), &[0x10]);
        mock.queue_ok(4, &[]);
    }
}
