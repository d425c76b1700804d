//! Canon extension (PowerShot and EOS).

use super::CodeTables;

pub static TABLES: CodeTables = CodeTables {
    operations: &[
        (0x9001, "GetObjectSize"),
        (0x9002, "SetObjectArchive"),
        (0x9003, "KeepDeviceOn"),
        (0x9004, "LockDeviceUI"),
        (0x9005, "UnlockDeviceUI"),
        (0x9006, "GetObjectHandleByName"),
        (0x9008, "InitiateReleaseControl"),
        (0x9009, "TerminateReleaseControl"),
        (0x900A, "TerminatePlaybackMode"),
        (0x900B, "ViewfinderOn"),
        (0x900C, "ViewfinderOff"),
        (0x900D, "DoAeAfAwb"),
        (0x900E, "GetCustomizeSpec"),
        (0x900F, "GetCustomizeItemInfo"),
        (0x9010, "GetCustomizeData"),
        (0x9011, "SetCustomizeData"),
        (0x9012, "GetCaptureStatus"),
        (0x9013, "CheckEvent"),
        (0x9014, "FocusLock"),
        (0x9015, "FocusUnlock"),
        (0x9016, "GetLocalReleaseParam"),
        (0x9017, "SetLocalReleaseParam"),
        (0x9018, "AskAboutPcEvf"),
        (0x9019, "SendPartialObject"),
        (0x901A, "InitiateCaptureInMemory"),
        (0x901B, "GetPartialObjectEx"),
        (0x901C, "SetObjectTime"),
        (0x901D, "GetViewfinderImage"),
        (0x901E, "GetObjectAttributes"),
        (0x901F, "ChangeUSBProtocol"),
        (0x9020, "GetChanges"),
        (0x9021, "GetObjectInfoEx"),
        (0x9022, "InitiateDirectTransfer"),
        (0x9023, "TerminateDirectTransfer"),
        (0x9024, "SendObjectInfoByPath"),
        (0x9025, "SendObjectByPath"),
        (0x9026, "InitiateDirectTansferEx"),
        (0x9027, "GetAncillaryObjectHandles"),
        (0x9028, "GetTreeInfo"),
        (0x9029, "GetTreeSize"),
        (0x902A, "NotifyProgress"),
        (0x902B, "NotifyCancelAccepted"),
        (0x902D, "GetDirectory"),
        (0x9030, "SetPairingInfo"),
        (0x9031, "GetPairingInfo"),
        (0x9032, "DeletePairingInfo"),
        (0x9033, "GetMACAddress"),
        (0x9034, "SetDisplayMonitor"),
        (0x9035, "PairingComplete"),
        (0x9036, "GetWirelessMAXChannel"),
        (0x9101, "EOSGetStorageIDs"),
        (0x9102, "EOSGetStorageInfo"),
        (0x9103, "EOSGetObjectInfo"),
        (0x9104, "EOSGetObject"),
        (0x9105, "EOSDeleteObject"),
        (0x9106, "EOSFormatStore"),
        (0x9107, "EOSGetPartialObject"),
        (0x9108, "EOSGetDeviceInfoEx"),
        (0x9109, "EOSGetObjectInfoEx"),
        (0x910A, "EOSGetThumbEx"),
        (0x910B, "EOSSendPartialObject"),
        (0x910C, "EOSSetObjectAttributes"),
        (0x910D, "EOSGetObjectTime"),
        (0x910E, "EOSSetObjectTime"),
        (0x910F, "EOSRemoteRelease"),
        (0x9110, "EOSSetDevicePropValueEx"),
        (0x9113, "EOSGetRemoteMode"),
        (0x9114, "EOSSetRemoteMode"),
        (0x9115, "EOSSetEventMode"),
        (0x9116, "EOSGetEvent"),
        (0x9117, "EOSTransferComplete"),
        (0x9118, "EOSCancelTransfer"),
        (0x9119, "EOSResetTransfer"),
        (0x911A, "EOSPCHDDCapacity"),
        (0x911B, "EOSSetUILock"),
        (0x911C, "EOSResetUILock"),
        (0x911D, "EOSKeepDeviceOn"),
        (0x911E, "EOSSetNullPacketMode"),
        (0x911F, "EOSUpdateFirmware"),
        (0x9120, "EOSTransferCompleteDT"),
        (0x9121, "EOSCancelTransferDT"),
        (0x9122, "EOSSetWftProfile"),
        (0x9123, "EOSGetWftProfile"),
        (0x9124, "EOSSetProfileToWft"),
        (0x9125, "EOSBulbStart"),
        (0x9126, "EOSBulbEnd"),
        (0x9127, "EOSRequestDevicePropValue"),
        (0x9128, "EOSRemoteReleaseOn"),
        (0x9129, "EOSRemoteReleaseOff"),
        (0x9151, "EOSInitiateViewfinder"),
        (0x9152, "EOSTerminateViewfinder"),
        (0x9153, "EOSGetViewFinderImage"),
        (0x9154, "EOSDoAf"),
        (0x9155, "EOSDriveLens"),
        (0x9156, "EOSDepthOfFieldPreview"),
        (0x9157, "EOSClickWB"),
        (0x9158, "EOSZoom"),
        (0x9159, "EOSZoomPosition"),
        (0x915A, "EOSSetLiveAfFrame"),
        (0x9160, "EOSAfCancel"),
        (0x91FE, "EOSFAPIMessageTX"),
        (0x91FF, "EOSFAPIMessageRX"),
    ],
    responses: &[],
    events: &[
        (0xC008, "CanonDeviceInfoChanged"),
        (0xC009, "CanonRequestObjectTransfer"),
        (0xC00C, "CameraModeChanged"),
        (0xC101, "RequestGetEvent"),
        (0xC181, "ObjectAdded"),
        (0xC182, "ObjectRemoved"),
        (0xC183, "RequestGetObjectInfoEx"),
        (0xC184, "StorageStatusChanged"),
        (0xC185, "StorageInfoChanged"),
        (0xC186, "RequestObjectTransfer"),
        (0xC187, "ObjectInfoChangedEx"),
        (0xC188, "ObjectContentChanged"),
        (0xC189, "DevicePropChanged"),
        (0xC18A, "AvailListChanged"),
        (0xC18B, "CameraStatusChanged"),
        (0xC18D, "WillSoonShutdown"),
        (0xC18E, "ShutdownTimerUpdated"),
        (0xC18F, "RequestCancelTransfer"),
        (0xC190, "RequestObjectTransferDT"),
        (0xC191, "RequestCancelTransferDT"),
        (0xC192, "StoreAdded"),
        (0xC193, "StoreRemoved"),
        (0xC194, "BulbExposureTime"),
        (0xC195, "RecordingTime"),
        (0xC1A2, "RequestObjectTransferTS"),
        (0xC1A3, "AfResult"),
        (0xC1A4, "CTGInfoCheckComplete"),
        (0xC1A5, "OLCInfoChanged"),
        (0xC1A7, "ObjectAddedUnknown"),
        (0xC1A9, "RequestObjectTransferNew"),
        (0xC1F1, "RequestObjectTransferFTP"),
    ],
    properties: &[
        (0xD001, "BeepMode"),
        (0xD003, "ViewfinderMode"),
        (0xD006, "ImageQuality"),
        (0xD008, "CanonImageSize"),
        (0xD00A, "CanonFlashMode"),
        (0xD00C, "TvAvSetting"),
        (0xD010, "MeteringMode"),
        (0xD011, "MacroMode"),
        (0xD012, "FocusingPoint"),
        (0xD013, "CanonWhiteBalance"),
        (0xD01C, "ISOSpeed"),
        (0xD01D, "Aperture"),
        (0xD01E, "ShutterSpeed"),
        (0xD01F, "ExpCompensation"),
        (0xD02A, "Zoom"),
        (0xD02C, "SizeQualityMode"),
        (0xD031, "FlashMemory"),
        (0xD032, "CameraModel"),
        (0xD033, "CameraOwner"),
        (0xD034, "UnixTime"),
        (0xD036, "ViewfinderOutput"),
        (0xD039, "RealImageWidth"),
        (0xD040, "PhotoEffect"),
        (0xD041, "AssistLight"),
    ],
    formats: &[
        (0xB101, "CRW"),
        (0xB103, "CRW3"),
        (0xB104, "MOV"),
    ],
};
