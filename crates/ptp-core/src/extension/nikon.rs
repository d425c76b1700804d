//! Nikon extension.

use super::CodeTables;
use super::layout::{DatasetLayout, VendorLayout};

/// Vendor event polling operation. Its data phase is a [`DatasetLayout::EventList`].
pub const CHECK_EVENTS: u16 = 0x90C7;

pub static TABLES: CodeTables = CodeTables {
    operations: &[
        (0x9006, "GetProfileAllData"),
        (0x9007, "SendProfileData"),
        (0x9008, "DeleteProfile"),
        (0x9009, "SetProfileData"),
        (0x9010, "AdvancedTransfer"),
        (0x9011, "GetFileInfoInBlock"),
        (0x90C0, "Capture"),
        (0x90C1, "AFDrive"),
        (0x90C2, "SetControlMode"),
        (0x90C3, "DelImageSDRAM"),
        (0x90C4, "GetLargeThumb"),
        (0x90C5, "CurveDownload"),
        (0x90C6, "CurveUpload"),
        (0x90C7, "CheckEvents"),
        (0x90C8, "DeviceReady"),
        (0x90C9, "SetPreWBData"),
        (0x90CA, "GetVendorPropCodes"),
        (0x90CB, "AFCaptureSDRAM"),
        (0x90CC, "GetPictCtrlData"),
        (0x90CD, "SetPictCtrlData"),
        (0x90CE, "DelCstPicCtrl"),
        (0x90CF, "GetPicCtrlCapability"),
        (0x9200, "GetPreviewImg"),
        (0x9201, "StartLiveView"),
        (0x9202, "EndLiveView"),
        (0x9203, "GetLiveViewImg"),
        (0x9204, "MfDrive"),
        (0x9205, "ChangeAFArea"),
        (0x9206, "AFDriveCancel"),
        (0x9207, "InitiateCaptureRecInMedia"),
        (0x9209, "GetVendorStorageIDs"),
        (0x920A, "StartMovieRecInCard"),
        (0x920B, "EndMovieRec"),
        (0x920C, "TerminateCapture"),
        (0x90E0, "GetDevicePTPIPInfo"),
        (0x9400, "GetPartialObjectHiSpeed"),
        (0x9504, "GetDevicePropEx"),
    ],
    responses: &[
        (0xA001, "HardwareError"),
        (0xA002, "OutOfFocus"),
        (0xA003, "ChangeCameraModeFailed"),
        (0xA004, "InvalidStatus"),
        (0xA005, "SetPropertyNotSupported"),
        (0xA006, "WbResetError"),
        (0xA007, "DustReferenceError"),
        (0xA008, "ShutterSpeedBulb"),
        (0xA009, "MirrorUpSequence"),
        (0xA00A, "CameraModeNotAdjustFNumber"),
        (0xA00B, "NotLiveView"),
        (0xA00C, "MfDriveStepEnd"),
        (0xA00E, "MfDriveStepInsufficiency"),
        (0xA022, "AdvancedTransferCancel"),
    ],
    events: &[
        (0xC101, "ObjectAddedInSDRAM"),
        (0xC102, "CaptureCompleteRecInSdram"),
        (0xC103, "AdvancedTransfer"),
        (0xC104, "PreviewImageAdded"),
    ],
    properties: &[
        (0xD010, "ShootingBank"),
        (0xD011, "ShootingBankNameA"),
        (0xD012, "ShootingBankNameB"),
        (0xD013, "ShootingBankNameC"),
        (0xD014, "ShootingBankNameD"),
        (0xD015, "ResetBank0"),
        (0xD016, "RawCompression"),
        (0xD017, "WhiteBalanceAutoBias"),
        (0xD018, "WhiteBalanceTungstenBias"),
        (0xD019, "WhiteBalanceFluorescentBias"),
        (0xD01A, "WhiteBalanceDaylightBias"),
        (0xD01B, "WhiteBalanceFlashBias"),
        (0xD01C, "WhiteBalanceCloudyBias"),
        (0xD01D, "WhiteBalanceShadeBias"),
        (0xD01E, "WhiteBalanceColorTemperature"),
        (0xD01F, "WhiteBalancePresetNo"),
        (0xD020, "WhiteBalancePresetName0"),
        (0xD021, "WhiteBalancePresetName1"),
        (0xD022, "WhiteBalancePresetName2"),
        (0xD023, "WhiteBalancePresetName3"),
        (0xD024, "WhiteBalancePresetName4"),
        (0xD025, "WhiteBalancePresetVal0"),
        (0xD026, "WhiteBalancePresetVal1"),
        (0xD027, "WhiteBalancePresetVal2"),
        (0xD028, "WhiteBalancePresetVal3"),
        (0xD029, "WhiteBalancePresetVal4"),
        (0xD02A, "ImageSharpening"),
        (0xD02B, "ToneCompensation"),
        (0xD02C, "ColorModel"),
        (0xD02D, "HueAdjustment"),
        (0xD02E, "NonCPULensDataFocalLength"),
        (0xD02F, "NonCPULensDataMaximumAperture"),
        (0xD030, "ShootingMode"),
        (0xD031, "JPEGCompressionPolicy"),
        (0xD032, "ColorSpace"),
        (0xD033, "AutoDXCrop"),
        (0xD034, "FlickerReduction"),
        (0xD035, "RemoteMode"),
        (0xD036, "VideoMode"),
        (0xD037, "NikonEffectMode"),
        (0xD038, "Mode"),
        (0xD040, "CSMMenuBankSelect"),
        (0xD041, "MenuBankNameA"),
        (0xD042, "MenuBankNameB"),
        (0xD043, "MenuBankNameC"),
        (0xD044, "MenuBankNameD"),
        (0xD045, "ResetBank"),
        (0xD048, "A1AFCModePriority"),
        (0xD049, "A2AFSModePriority"),
        (0xD04A, "A3GroupDynamicAF"),
        (0xD04B, "A4AFActivation"),
        (0xD04C, "FocusAreaIllumManualFocus"),
        (0xD04D, "FocusAreaIllumContinuous"),
        (0xD04E, "FocusAreaIllumWhenSelected"),
        (0xD04F, "FocusAreaWrap"),
        (0xD050, "VerticalAFON"),
        (0xD051, "AFLockOn"),
        (0xD052, "FocusAreaZone"),
        (0xD053, "EnableCopyright"),
        (0xD054, "ISOAuto"),
        (0xD055, "EVISOStep"),
        (0xD056, "EVStep"),
        (0xD057, "EVStepExposureComp"),
        (0xD058, "ExposureCompensation"),
        (0xD059, "CenterWeightArea"),
        (0xD05A, "ExposureBaseMatrix"),
        (0xD05B, "ExposureBaseCenter"),
        (0xD05C, "ExposureBaseSpot"),
        (0xD05D, "LiveViewAFArea"),
        (0xD05E, "AELockMode"),
        (0xD05F, "AELAFLMode"),
        (0xD061, "LiveViewAFFocus"),
        (0xD062, "MeterOff"),
        (0xD063, "SelfTimer"),
        (0xD064, "MonitorOff"),
        (0xD065, "ImgConfTime"),
        (0xD066, "AutoOffTimers"),
        (0xD067, "AngleLevel"),
        (0xD068, "D1ShootingSpeed"),
        (0xD069, "D2MaximumShots"),
        (0xD06A, "ExposureDelayMode"),
        (0xD06B, "LongExposureNoiseReduction"),
        (0xD06C, "FileNumberSequence"),
        (0xD06D, "ControlPanelFinderRearControl"),
        (0xD06E, "ControlPanelFinderViewfinder"),
        (0xD06F, "D7Illumination"),
        (0xD070, "NrHighISO"),
        (0xD071, "SHSetCHGUIDDisp"),
        (0xD072, "ArtistName"),
        (0xD073, "NikonCopyrightInfo"),
        (0xD074, "FlashSyncSpeed"),
        (0xD075, "FlashShutterSpeed"),
        (0xD076, "E3AAFlashMode"),
        (0xD077, "E4ModelingFlash"),
        (0xD078, "BracketSet"),
        (0xD079, "E6ManualModeBracketing"),
        (0xD07A, "BracketOrder"),
        (0xD07B, "E8AutoBracketSelection"),
        (0xD07C, "BracketingSet"),
        (0xD080, "F1CenterButtonShootingMode"),
        (0xD081, "CenterButtonPlaybackMode"),
        (0xD082, "F2Multiselector"),
        (0xD083, "F3PhotoInfoPlayback"),
        (0xD084, "F4AssignFuncButton"),
        (0xD085, "F5CustomizeCommDials"),
        (0xD086, "ReverseCommandDial"),
        (0xD087, "ApertureSetting"),
        (0xD088, "MenusAndPlayback"),
        (0xD089, "F6ButtonsAndDials"),
        (0xD08A, "NoCFCard"),
        (0xD08B, "CenterButtonZoomRatio"),
        (0xD08C, "FunctionButton2"),
        (0xD08D, "AFAreaPoint"),
        (0xD08E, "NormalAFOn"),
        (0xD08F, "CleanImageSensor"),
        (0xD090, "ImageCommentString"),
        (0xD091, "ImageCommentEnable"),
        (0xD092, "ImageRotation"),
        (0xD093, "ManualSetLensNo"),
        (0xD0A0, "MovScreenSize"),
        (0xD0A1, "MovVoice"),
        (0xD0A2, "MovMicrophone"),
        (0xD0A3, "MovFileSlot"),
        (0xD0A4, "MovRecProhibitCondition"),
        (0xD0A6, "ManualMovieSetting"),
        (0xD0A7, "MovQuality"),
        (0xD0B2, "LiveViewScreenDisplaySetting"),
        (0xD0B3, "MonitorOffDelay"),
        (0xD0C0, "Bracketing"),
        (0xD0C1, "AutoExposureBracketStep"),
        (0xD0C2, "AutoExposureBracketProgram"),
        (0xD0C3, "AutoExposureBracketCount"),
        (0xD0C4, "WhiteBalanceBracketStep"),
        (0xD0C5, "WhiteBalanceBracketProgram"),
        (0xD0E0, "LensID"),
        (0xD0E1, "LensSort"),
        (0xD0E2, "LensType"),
        (0xD0E3, "FocalLengthMin"),
        (0xD0E4, "FocalLengthMax"),
        (0xD0E5, "MaxApAtMinFocalLength"),
        (0xD0E6, "MaxApAtMaxFocalLength"),
        (0xD0F0, "FinderISODisp"),
        (0xD0F2, "AutoOffPhoto"),
        (0xD0F3, "AutoOffMenu"),
        (0xD0F4, "AutoOffInfo"),
        (0xD0F5, "SelfTimerShootNum"),
        (0xD0F7, "VignetteCtrl"),
        (0xD0F8, "AutoDistortionControl"),
        (0xD0F9, "SceneMode"),
        (0xD0FD, "SceneMode2"),
        (0xD0FE, "SelfTimerInterval"),
        (0xD100, "NikonExposureTime"),
        (0xD101, "ACPower"),
        (0xD102, "WarningStatus"),
        (0xD103, "MaximumShots"),
        (0xD104, "AFLockStatus"),
        (0xD105, "AELockStatus"),
        (0xD106, "FVLockStatus"),
        (0xD107, "AutofocusLCDTopMode2"),
        (0xD108, "AutofocusArea"),
        (0xD109, "FlexibleProgram"),
        (0xD10A, "LightMeter"),
        (0xD10B, "RecordingMedia"),
        (0xD10C, "USBSpeed"),
        (0xD10D, "CCDNumber"),
        (0xD10E, "CameraOrientation"),
        (0xD10F, "GroupPtnType"),
        (0xD110, "FNumberLock"),
        (0xD111, "ExposureApertureLock"),
        (0xD112, "TVLockSetting"),
        (0xD113, "AVLockSetting"),
        (0xD114, "IllumSetting"),
        (0xD115, "FocusPointBright"),
        (0xD120, "ExternalFlashAttached"),
        (0xD121, "ExternalFlashStatus"),
        (0xD122, "ExternalFlashSort"),
        (0xD123, "ExternalFlashMode"),
        (0xD124, "ExternalFlashCompensation"),
        (0xD125, "NewExternalFlashMode"),
        (0xD126, "FlashExposureCompensation"),
        (0xD130, "HDRMode"),
        (0xD131, "HDRHighDynamic"),
        (0xD132, "HDRSmoothing"),
        (0xD140, "OptimizeImage"),
        (0xD142, "Saturation"),
        (0xD143, "BWFillerEffect"),
        (0xD144, "BWSharpness"),
        (0xD145, "BWContrast"),
        (0xD146, "BWSettingType"),
        (0xD148, "Slot2SaveMode"),
        (0xD149, "RawBitMode"),
        (0xD14E, "ActiveDLighting"),
        (0xD14F, "FlourescentType"),
        (0xD150, "TuneColourTemperature"),
        (0xD151, "TunePreset0"),
        (0xD152, "TunePreset1"),
        (0xD153, "TunePreset2"),
        (0xD154, "TunePreset3"),
        (0xD155, "TunePreset4"),
        (0xD160, "BeepOff"),
        (0xD161, "AutofocusMode"),
        (0xD163, "AFAssist"),
        (0xD164, "PADVPMode"),
        (0xD165, "ImageReview"),
        (0xD166, "AFAreaIllumination"),
        (0xD167, "NikonFlashMode"),
        (0xD168, "FlashCommanderMode"),
        (0xD169, "FlashSign"),
        (0xD16B, "RemoteTimeout"),
        (0xD16C, "GridDisplay"),
        (0xD16D, "FlashModeManualPower"),
        (0xD16E, "FlashModeCommanderPower"),
        (0xD16F, "AutoFP"),
        (0xD170, "DateImprintSetting"),
        (0xD171, "DateCounterSelect"),
        (0xD172, "DateCountData"),
        (0xD173, "DateCountDisplaySetting"),
        (0xD174, "RangeFinderSetting"),
        (0xD180, "CSMMenu"),
        (0xD181, "WarningDisplay"),
        (0xD182, "BatteryCellKind"),
        (0xD183, "ISOAutoHiLimit"),
        (0xD184, "DynamicAFArea"),
        (0xD186, "ContinuousSpeedHigh"),
        (0xD187, "InfoDispSetting"),
        (0xD189, "PreviewButton"),
        (0xD18A, "PreviewButton2"),
        (0xD18B, "AEAFLockButton2"),
        (0xD18D, "IndicatorDisp"),
        (0xD18E, "CellKindPriority"),
        (0xD190, "BracketingFramesAndSteps"),
        (0xD1A0, "LiveViewMode"),
        (0xD1A1, "LiveViewDriveMode"),
        (0xD1A2, "LiveViewStatus"),
        (0xD1A3, "LiveViewImageZoomRatio"),
        (0xD1A4, "LiveViewProhibitCondition"),
        (0xD1A8, "MovieShutterSpeed"),
        (0xD1A9, "MovieFNumber"),
        (0xD1AA, "MovieISO"),
        (0xD1AC, "LiveViewMovieMode"),
        (0xD1B0, "ExposureDisplayStatus"),
        (0xD1B1, "ExposureIndicateStatus"),
        (0xD1B2, "InfoDispErrStatus"),
        (0xD1B3, "ExposureIndicateLightup"),
        (0xD1C0, "FlashOpen"),
        (0xD1C1, "FlashCharged"),
        (0xD1D0, "FlashMRepeatValue"),
        (0xD1D1, "FlashMRepeatCount"),
        (0xD1D2, "FlashMRepeatInterval"),
        (0xD1D3, "FlashCommandChannel"),
        (0xD1D4, "FlashCommandSelfMode"),
        (0xD1D5, "FlashCommandSelfCompensation"),
        (0xD1D6, "FlashCommandSelfValue"),
        (0xD1D7, "FlashCommandAMode"),
        (0xD1D8, "FlashCommandACompensation"),
        (0xD1D9, "FlashCommandAValue"),
        (0xD1DA, "FlashCommandBMode"),
        (0xD1DB, "FlashCommandBCompensation"),
        (0xD1DC, "FlashCommandBValue"),
        (0xD1F0, "ApplicationMode"),
        (0xD1F2, "ActiveSlot"),
        (0xD200, "ActivePicCtrlItem"),
        (0xD201, "ChangePicCtrlItem"),
        (0xD236, "MovieNrHighISO"),
        (0xD241, "D241"),
        (0xD244, "D244"),
        (0xD247, "D247"),
        (0xD24F, "GUID"),
        (0xD250, "D250"),
        (0xD251, "D251"),
        (0xF002, "ISO"),
        (0xF009, "ImageCompression"),
        (0xF00A, "NikonImageSize"),
        (0xF00C, "NikonWhiteBalance"),
        (0xF00E, "HiISONoiseReduction"),
    ],
    formats: &[],
};

pub static LAYOUTS: &[VendorLayout] = &[VendorLayout {
    operation: CHECK_EVENTS,
    layout: DatasetLayout::EventList,
}];
