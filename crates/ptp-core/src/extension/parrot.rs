//! Parrot (Sequoia) extension.

use super::CodeTables;
use super::layout::{DatasetLayout, VendorLayout};
use crate::dataset::DataType;

pub static TABLES: CodeTables = CodeTables {
    operations: &[
        (0x9201, "GetSunshineValues"),
        (0x9202, "GetTemperatureValues"),
        (0x9203, "GetAngleValues"),
        (0x9204, "GetGpsValues"),
        (0x9205, "GetGyroscopeValues"),
        (0x9206, "GetAccelerometerValues"),
        (0x9207, "GetMagnetometerValues"),
        (0x9208, "GetImuValues"),
        (0x9209, "GetStatusMask"),
        (0x920A, "EjectStorage"),
        (0x9210, "StartMagnetoCalib"),
        (0x9211, "StopMagnetoCalib"),
        (0x9212, "MagnetoCalibStatus"),
        (0x9213, "SendFirmwareUpdate"),
        (0x9400, "SetGeotag"),
    ],
    responses: &[],
    events: &[(0xC201, "Status"), (0xC202, "MagnetoCalibrationStatus")],
    properties: &[
        (0xD201, "PhotoSensorEnableMask"),
        (0xD202, "PhotoSensorsKeepOn"),
        (0xD203, "MultispectralImageSize"),
        (0xD204, "MainBitDepth"),
        (0xD205, "MultispectralBitDepth"),
        (0xD206, "HeatingEnable"),
        (0xD207, "WifiStatus"),
        (0xD208, "WifiSSID"),
        (0xD209, "WifiEncryptionType"),
        (0xD20A, "WifiPassphrase"),
        (0xD20B, "WifiChannel"),
        (0xD20C, "Localization"),
        (0xD20D, "WifiMode"),
        (0xD210, "AntiFlickeringFrequency"),
        (0xD211, "DisplayOverlayMask"),
        (0xD212, "GPSInterval"),
        (0xD213, "MultisensorsExposureMeteringMode"),
        (0xD214, "MultisensorsExposureTime"),
        (0xD215, "MultisensorsExposureProgramMode"),
        (0xD216, "MultisensorsExposureIndex"),
        (0xD217, "MultisensorsIrradianceGain"),
        (0xD218, "MultisensorsIrradianceIntegrationTime"),
        (0xD219, "OverlapRate"),
        (0xD220, "LEDsEnableMask"),
        (0xD221, "GPSEnable"),
        (0xD222, "SelectedStorage"),
        (0xD223, "MediaFolderName"),
        (0xD224, "XMPTag"),
    ],
    formats: &[],
};

const XYZ: &[&str] = &["X", "Y", "Z"];

pub static LAYOUTS: &[VendorLayout] = &[
    VendorLayout {
        operation: 0x9201,
        layout: DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: &[
                "Green0", "Red0", "RedEdge0", "NIR0", "Green1", "Red1", "RedEdge1", "NIR1",
            ],
        },
    },
    VendorLayout {
        operation: 0x9202,
        layout: DatasetLayout::NamedArray {
            element: DataType::Int32,
            fields: &["P7", "P7MU", "DDR", "WiFi", "IMU", "IMUSunshine"],
        },
    },
    VendorLayout {
        operation: 0x9203,
        layout: DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: &["Yaw", "Pitch", "Roll"],
        },
    },
    VendorLayout {
        operation: 0x9204,
        layout: DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: &[
                "LongitudeDeg",
                "LongitudeMin",
                "LongitudeSec",
                "LatitudeDeg",
                "LatitudeMin",
                "LatitudeSec",
                "Altitude",
            ],
        },
    },
    VendorLayout {
        operation: 0x9205,
        layout: DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: XYZ,
        },
    },
    VendorLayout {
        operation: 0x9206,
        layout: DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: XYZ,
        },
    },
    VendorLayout {
        operation: 0x9207,
        layout: DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: XYZ,
        },
    },
    VendorLayout {
        operation: 0x9208,
        layout: DatasetLayout::NamedArray {
            element: DataType::UInt32,
            fields: &[
                "GyroscopeX",
                "GyroscopeY",
                "GyroscopeZ",
                "AccelerometerX",
                "AccelerometerY",
                "AccelerometerZ",
                "MagnetometerX",
                "MagnetometerY",
                "MagnetometerZ",
                "AngleYaw",
                "AnglePitch",
                "AngleRoll",
            ],
        },
    },
    VendorLayout {
        operation: 0x9209,
        // LSB first.
        layout: DatasetLayout::Flags {
            fields: &[
                "SnapshotRequested",
                "BodyImuCalibRunning",
                "AuxiliaryImuCalibRunning",
                "AuxiliaryConnected",
                "AuxiliaryGpsRunning",
                "RemoteGpsRunning",
                "CamRGBError",
                "CamGreenError",
                "CamRedError",
                "CamRedEdgeError",
                "CamNIRError",
                "BodySensorsInitDone",
                "AuxiliarySensorsInitDone",
                "CameraRunning",
            ],
        },
    },
    VendorLayout {
        operation: 0x9212,
        layout: DatasetLayout::Enumerated {
            values: &[
                (1, "CalibrationOk"),
                (2, "CalibrationRunning"),
                (3, "CalibrationRollPending"),
                (4, "CalibrationPitchPending"),
                (5, "CalibrationYawPending"),
                (6, "CalibrationFailed"),
                (7, "CalibrationAborted"),
            ],
        },
    },
];
