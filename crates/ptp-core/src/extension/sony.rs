//! Sony extension.

use super::CodeTables;

pub static TABLES: CodeTables = CodeTables {
    operations: &[
        (0x9201, "SDIOConnect"),
        (0x9202, "SDIOGetExtDeviceInfo"),
        (0x9203, "SonyGetDevicePropDesc"),
        (0x9204, "SonyGetDevicePropValue"),
        (0x9205, "SetControlDeviceA"),
        (0x9206, "GetControlDeviceDesc"),
        (0x9207, "SetControlDeviceB"),
        (0x9209, "GetAllDevicePropData"),
    ],
    responses: &[(0xA101, "Sony1")],
    events: &[
        (0xC201, "SonyObjectAdded"),
        (0xC202, "SonyObjectRemoved"),
        (0xC203, "SonyPropertyChanged"),
    ],
    properties: &[
        (0xD200, "DPCCompensation"),
        (0xD201, "DRangeOptimize"),
        (0xD203, "SonyImageSize"),
        (0xD20D, "ShutterSpeed"),
        (0xD20F, "ColorTemp"),
        (0xD210, "CCFilter"),
        (0xD211, "AspectRatio"),
        (0xD213, "FocusFound"),
        (0xD215, "ObjectInMemory"),
        (0xD216, "ExposeIndex"),
        (0xD218, "SonyBatteryLevel"),
        (0xD21B, "PictureEffect"),
        (0xD21C, "ABFilter"),
        (0xD21E, "ISO"),
        (0xD2C1, "AutoFocus"),
        (0xD2C2, "Capture"),
        (0xD2C7, "StillImage"),
        (0xD2C8, "Movie"),
    ],
    formats: &[(0xB101, "RAW"), (0xB301, "SonyFormat1")],
};
