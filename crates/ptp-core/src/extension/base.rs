//! ISO 15740 base code tables.

use super::CodeTables;

pub static TABLES: CodeTables = CodeTables {
    operations: &[
        (0x1000, "Undefined"),
        (0x1001, "GetDeviceInfo"),
        (0x1002, "OpenSession"),
        (0x1003, "CloseSession"),
        (0x1004, "GetStorageIDs"),
        (0x1005, "GetStorageInfo"),
        (0x1006, "GetNumObjects"),
        (0x1007, "GetObjectHandles"),
        (0x1008, "GetObjectInfo"),
        (0x1009, "GetObject"),
        (0x100A, "GetThumb"),
        (0x100B, "DeleteObject"),
        (0x100C, "SendObjectInfo"),
        (0x100D, "SendObject"),
        (0x100E, "InitiateCapture"),
        (0x100F, "FormatStore"),
        (0x1010, "ResetDevice"),
        (0x1011, "SelfTest"),
        (0x1012, "SetObjectProtection"),
        (0x1013, "PowerDown"),
        (0x1014, "GetDevicePropDesc"),
        (0x1015, "GetDevicePropValue"),
        (0x1016, "SetDevicePropValue"),
        (0x1017, "ResetDevicePropValue"),
        (0x1018, "TerminateOpenCapture"),
        (0x1019, "MoveObject"),
        (0x101A, "CopyObject"),
        (0x101B, "GetPartialObject"),
        (0x101C, "InitiateOpenCapture"),
        (0x101D, "StartEnumHandles"),
        (0x101E, "EnumHandles"),
        (0x101F, "StopEnumHandles"),
        (0x1020, "GetVendorExtensionMaps"),
        (0x1021, "GetVendorDeviceInfo"),
        (0x1022, "GetResizedImageObject"),
        (0x1023, "GetFilesystemManifest"),
        (0x1024, "GetStreamInfo"),
        (0x1025, "GetStream"),
    ],
    responses: &[
        (0x2000, "Undefined"),
        (0x2001, "OK"),
        (0x2002, "GeneralError"),
        (0x2003, "SessionNotOpen"),
        (0x2004, "InvalidTransactionID"),
        (0x2005, "OperationNotSupported"),
        (0x2006, "ParameterNotSupported"),
        (0x2007, "IncompleteTransfer"),
        (0x2008, "InvalidStorageId"),
        (0x2009, "InvalidObjectHandle"),
        (0x200A, "DevicePropNotSupported"),
        (0x200B, "InvalidObjectFormatCode"),
        (0x200C, "StoreFull"),
        (0x200D, "ObjectWriteProtected"),
        (0x200E, "StoreReadOnly"),
        (0x200F, "AccessDenied"),
        (0x2010, "NoThumbnailPresent"),
        (0x2011, "SelfTestFailed"),
        (0x2012, "PartialDeletion"),
        (0x2013, "StoreNotAvailable"),
        (0x2014, "SpecificationByFormatUnsupported"),
        (0x2015, "NoValidObjectInfo"),
        (0x2016, "InvalidCodeFormat"),
        (0x2017, "UnknownVendorCode"),
        (0x2018, "CaptureAlreadyTerminated"),
        (0x2019, "DeviceBusy"),
        (0x201A, "InvalidParentObject"),
        (0x201B, "InvalidDevicePropFormat"),
        (0x201C, "InvalidDevicePropValue"),
        (0x201D, "InvalidParameter"),
        (0x201E, "SessionAlreadyOpened"),
        (0x201F, "TransactionCanceled"),
        (0x2020, "SpecificationOfDestinationUnsupported"),
        (0x2021, "InvalidEnumHandle"),
        (0x2022, "NoStreamEnabled"),
        (0x2023, "InvalidDataset"),
    ],
    events: &[
        (0x4000, "Undefined"),
        (0x4001, "CancelTransaction"),
        (0x4002, "ObjectAdded"),
        (0x4003, "ObjectRemoved"),
        (0x4004, "StoreAdded"),
        (0x4005, "StoreRemoved"),
        (0x4006, "DevicePropChanged"),
        (0x4007, "ObjectInfoChanged"),
        (0x4008, "DeviceInfoChanged"),
        (0x4009, "RequestObjectTransfer"),
        (0x400A, "StoreFull"),
        (0x400B, "DeviceReset"),
        (0x400C, "StorageInfoChanged"),
        (0x400D, "CaptureComplete"),
        (0x400E, "UnreportedStatus"),
    ],
    properties: &[
        (0x5000, "Undefined"),
        (0x5001, "BatteryLevel"),
        (0x5002, "FunctionalMode"),
        (0x5003, "ImageSize"),
        (0x5004, "CompressionSetting"),
        (0x5005, "WhiteBalance"),
        (0x5006, "RGBGain"),
        (0x5007, "FNumber"),
        (0x5008, "FocalLength"),
        (0x5009, "FocusDistance"),
        (0x500A, "FocusMode"),
        (0x500B, "ExposureMeteringMode"),
        (0x500C, "FlashMode"),
        (0x500D, "ExposureTime"),
        (0x500E, "ExposureProgramMode"),
        (0x500F, "ExposureIndex"),
        (0x5010, "ExposureBiasCompensation"),
        (0x5011, "DateTime"),
        (0x5012, "CaptureDelay"),
        (0x5013, "StillCaptureMode"),
        (0x5014, "Contrast"),
        (0x5015, "Sharpness"),
        (0x5016, "DigitalZoom"),
        (0x5017, "EffectMode"),
        (0x5018, "BurstNumber"),
        (0x5019, "BurstInterval"),
        (0x501A, "TimelapseNumber"),
        (0x501B, "TimelapseInterval"),
        (0x501C, "FocusMeteringMode"),
        (0x501D, "UploadURL"),
        (0x501E, "Artist"),
        (0x501F, "CopyrightInfo"),
    ],
    formats: &[
        (0x3000, "UndefinedAncillary"),
        (0x3001, "Association"),
        (0x3002, "Script"),
        (0x3003, "Executable"),
        (0x3004, "Text"),
        (0x3005, "HTML"),
        (0x3006, "DPOF"),
        (0x3007, "AIFF"),
        (0x3008, "WAV"),
        (0x3009, "MP3"),
        (0x300A, "AVI"),
        (0x300B, "MPEG"),
        (0x300C, "ASF"),
        (0x300D, "QT"),
        (0x3800, "UndefinedImage"),
        (0x3801, "EXIF_JPEG"),
        (0x3802, "TIFF_EP"),
        (0x3803, "FlashPix"),
        (0x3804, "BMP"),
        (0x3805, "CIFF"),
        (0x3807, "GIF"),
        (0x3808, "JFIF"),
        (0x3809, "PCD"),
        (0x380A, "PICT"),
        (0x380B, "PNG"),
        (0x380D, "TIFF"),
        (0x380E, "TIFF_IT"),
        (0x380F, "JP2"),
        (0x3810, "JPX"),
        (0x3811, "DNG"),
    ],
};
