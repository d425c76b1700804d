//! Capture and device control.

use tracing::{info, instrument};

use super::PtpDevice;
use crate::error::Result;
use crate::protocol::{ObjectFormatCode, OperationCode};
use crate::transport::PtpTransport;

impl<T: PtpTransport> PtpDevice<T> {
    /// Trigger a capture. Completion is reported through events
    /// (ObjectAdded, CaptureComplete). `storage_id` 0 lets the device choose.
    #[instrument(skip(self))]
    pub fn initiate_capture(&self, storage_id: u32, format: ObjectFormatCode) -> Result<()> {
        self.invoke(
            OperationCode::INITIATE_CAPTURE,
            &[storage_id, u32::from(format.0)],
            None,
        )?;
        Ok(())
    }

    /// Start an open-ended capture. Returns the transaction ID that
    /// [`PtpDevice::terminate_open_capture`] needs.
    #[instrument(skip(self))]
    pub fn initiate_open_capture(&self, storage_id: u32, format: ObjectFormatCode) -> Result<u32> {
        let reply = self.invoke(
            OperationCode::INITIATE_OPEN_CAPTURE,
            &[storage_id, u32::from(format.0)],
            None,
        )?;
        Ok(reply.transaction_id)
    }

    #[instrument(skip(self))]
    pub fn terminate_open_capture(&self, capture_transaction_id: u32) -> Result<()> {
        self.invoke(
            OperationCode::TERMINATE_OPEN_CAPTURE,
            &[capture_transaction_id],
            None,
        )?;
        Ok(())
    }

    /// Reset the device. It drops the session, so outstanding session
    /// guards become no-ops.
    #[instrument(skip(self))]
    pub fn reset_device(&self) -> Result<()> {
        self.invoke(OperationCode::RESET_DEVICE, &[], None)?;
        info!("Device reset");
        self.session_lost();
        Ok(())
    }

    /// Power the device down. The session ends as with [`PtpDevice::reset_device`].
    #[instrument(skip(self))]
    pub fn power_down(&self) -> Result<()> {
        self.invoke(OperationCode::POWER_DOWN, &[], None)?;
        info!("Device powered down");
        self.session_lost();
        Ok(())
    }
}
