//! Microsoft MTP extension.

use super::CodeTables;

pub static TABLES: CodeTables = CodeTables {
    operations: &[
        (0x9801, "GetObjectPropsSupported"),
        (0x9802, "GetObjectPropDesc"),
        (0x9803, "GetObjectPropValue"),
        (0x9804, "SetObjectPropValue"),
        (0x9805, "GetObjPropList"),
        (0x9806, "SetObjPropList"),
        (0x9807, "GetInterdependendPropdesc"),
        (0x9808, "SendObjectPropList"),
        (0x9810, "GetObjectReferences"),
        (0x9811, "SetObjectReferences"),
        (0x9812, "UpdateDeviceFirmware"),
        (0x9820, "Skip"),
        (0x9101, "GetSecureTimeChallenge"),
        (0x9102, "GetSecureTimeResponse"),
        (0x9103, "SetLicenseResponse"),
        (0x9104, "GetSyncList"),
        (0x9105, "SendMeterChallengeQuery"),
        (0x9106, "GetMeterChallenge"),
        (0x9107, "SetMeterResponse"),
        (0x9108, "CleanDataStore"),
        (0x9109, "GetLicenseState"),
        (0x910A, "SendWMDRMPDCommand"),
        (0x910B, "SendWMDRMPDRequest"),
        (0x9212, "SendWMDRMPDAppRequest"),
        (0x9213, "GetWMDRMPDAppResponse"),
        (0x9214, "EnableTrustedFilesOperations"),
        (0x9215, "DisableTrustedFilesOperations"),
        (0x9216, "EndTrustedAppSession"),
        (0x9170, "OpenMediaSession"),
        (0x9171, "CloseMediaSession"),
        (0x9172, "GetNextDataBlock"),
        (0x9173, "SetCurrentTimePosition"),
        (0x9180, "SendRegistrationRequest"),
        (0x9181, "GetRegistrationResponse"),
        (0x9182, "GetProximityChallenge"),
        (0x9183, "SendProximityResponse"),
        (0x9184, "SendWMDRMNDLicenseRequest"),
        (0x9185, "GetWMDRMNDLicenseResponse"),
        (0x9201, "ReportAddedDeletedItems"),
        (0x9202, "ReportAcquiredItems"),
        (0x9203, "PlaylistObjectPref"),
        (0x9122, "ProcessWFCObject"),
    ],
    responses: &[
        (0xA800, "MicrosoftUndefined"),
        (0xA801, "Invalid_ObjectPropCode"),
        (0xA802, "Invalid_ObjectProp_Format"),
        (0xA803, "Invalid_ObjectProp_Value"),
        (0xA804, "Invalid_ObjectReference"),
        (0xA806, "Invalid_Dataset"),
        (0xA807, "Specification_By_Group_Unsupported"),
        (0xA808, "Specification_By_Depth_Unsupported"),
        (0xA809, "Object_Too_Large"),
        (0xA80A, "ObjectProp_Not_Supported"),
        (0xA170, "Invalid_Media_Session_ID"),
        (0xA171, "Media_Session_Limit_Reached"),
        (0xA172, "No_More_Data"),
        (0xA121, "Invalid_WFC_Syntax"),
        (0xA122, "WFC_Version_Not_Supported"),
    ],
    events: &[
        (0xC801, "ObjectPropChanged"),
        (0xC802, "ObjectPropDescChanged"),
        (0xC803, "ObjectReferencesChanged"),
    ],
    properties: &[
        (0xD401, "SynchronizationPartner"),
        (0xD402, "DeviceFriendlyName"),
        (0xD403, "Volume"),
        (0xD404, "SupportedFormatsOrdered"),
        (0xD405, "DeviceIcon"),
        (0xD406, "SessionInitiatorVendorInfo"),
        (0xD407, "PerceivedDeviceType"),
        (0xD410, "PlaybackRate"),
        (0xD411, "PlaybackObject"),
        (0xD412, "PlaybackContainerIndex"),
    ],
    formats: &[
        (0xB211, "MediaCard"),
        (0xB212, "MediaCardGroup"),
        (0xB213, "Encounter"),
        (0xB214, "EncounterBox"),
        (0xB215, "M4A"),
        (0xB802, "Firmware"),
        (0xB881, "WindowsImageFormat"),
        (0xB900, "UndefinedAudio"),
        (0xB901, "WMA"),
        (0xB902, "OGG"),
        (0xB903, "AAC"),
        (0xB904, "AudibleCodec"),
        (0xB906, "FLAC"),
        (0xB909, "SamsungPlaylist"),
        (0xB980, "UndefinedVideo"),
        (0xB981, "WMV"),
        (0xB982, "MP4"),
        (0xB983, "MP2"),
        (0xB984, "Mobile3GP"),
        (0xBA00, "UndefinedCollection"),
        (0xBA01, "AbstractMultimediaAlbum"),
        (0xBA02, "AbstractImageAlbum"),
        (0xBA03, "AbstractAudioAlbum"),
        (0xBA04, "AbstractVideoAlbum"),
        (0xBA05, "AbstractAudioVideoPlaylist"),
        (0xBA06, "AbstractContactGroup"),
        (0xBA07, "AbstractMessageFolder"),
        (0xBA08, "AbstractChapteredProduction"),
        (0xBA09, "AbstractAudioPlaylist"),
        (0xBA0A, "AbstractVideoPlaylist"),
        (0xBA0B, "AbstractMediacast"),
        (0xBA10, "WPLPlaylist"),
        (0xBA11, "M3UPlaylist"),
        (0xBA12, "MPLPlaylist"),
        (0xBA13, "ASXPlaylist"),
        (0xBA14, "PLSPlaylist"),
        (0xBA80, "UndefinedDocument"),
        (0xBA81, "AbstractDocument"),
        (0xBA82, "XMLDocument"),
        (0xBA83, "MSWordDocument"),
        (0xBA84, "MHTCompiledHTMLDocument"),
        (0xBA85, "MSExcelSpreadsheetXLS"),
        (0xBA86, "MSPowerpointPresentationPPT"),
        (0xBB00, "UndefinedMessage"),
        (0xBB01, "AbstractMessage"),
        (0xBB80, "UndefinedContact"),
        (0xBB81, "AbstractContact"),
        (0xBB82, "vCard2"),
        (0xBB83, "vCard3"),
        (0xBE00, "UndefinedCalendarItem"),
        (0xBE01, "AbstractCalendarItem"),
        (0xBE02, "vCalendar1"),
        (0xBE03, "vCalendar2"),
        (0xBE80, "UndefinedWindowsExecutable"),
        (0xBE81, "MediaCast"),
        (0xBE82, "Section"),
    ],
};
