//! Device handle configuration.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::extension::ExtensionMode;
use crate::protocol::constants::{
    DEFAULT_MAX_INBOUND_CONTAINER, DEFAULT_RECEIVE_CHUNK, DEFAULT_SESSION_ID, DEFAULT_TIMEOUT_MS,
};
use crate::session::SessionIdPolicy;

/// Default pause between empty event polls.
pub const DEFAULT_EVENT_POLL_INTERVAL_MS: u64 = 100;

/// Configuration for a PTP device handle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// `auto`, `raw` or a vendor name (`canon`, `nikon`, `sony`, `microsoft`, `parrot`).
    pub extension: String,
    /// First session ID handed out by OpenSession.
    pub first_session_id: u32,
    /// Use this session ID for every session instead of incrementing.
    pub fixed_session_id: Option<u32>,
    /// Bytes requested per transport read.
    pub receive_chunk: usize,
    /// Largest inbound container accepted, header included.
    pub max_container_size: usize,
    /// Pause between empty polls of an event stream.
    pub event_poll_interval_ms: u64,
    /// Fetch every property description right after connecting. Off by
    /// default, unlike ptpy's `knowledge=True`; descriptions are otherwise
    /// fetched on first use.
    pub load_property_descriptions: bool,
    /// USB vendor ID filter.
    pub usb_vendor_id: Option<u16>,
    /// USB product ID filter.
    pub usb_product_id: Option<u16>,
    /// Transport read timeout.
    pub timeout_ms: u64,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            extension: ExtensionMode::Auto.to_string(),
            first_session_id: DEFAULT_SESSION_ID,
            fixed_session_id: None,
            receive_chunk: DEFAULT_RECEIVE_CHUNK,
            max_container_size: DEFAULT_MAX_INBOUND_CONTAINER,
            event_poll_interval_ms: DEFAULT_EVENT_POLL_INTERVAL_MS,
            load_property_descriptions: false,
            usb_vendor_id: None,
            usb_product_id: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl DeviceConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: DeviceConfig = toml::from_str(&content)?;
        // Reject a bad extension name at load time, not at connect time.
        config.extension_mode()?;
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn extension_mode(&self) -> crate::error::Result<ExtensionMode> {
        self.extension.parse()
    }

    pub fn session_policy(&self) -> SessionIdPolicy {
        match self.fixed_session_id {
            Some(id) => SessionIdPolicy::Fixed(id),
            None => SessionIdPolicy::Incrementing {
                first: self.first_session_id,
            },
        }
    }

    /// VID/PID pair for the USB adapter, when both are set.
    pub fn usb_filter(&self) -> Option<(u16, u16)> {
        self.usb_vendor_id.zip(self.usb_product_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extension::Vendor;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: DeviceConfig = toml::from_str(
            r#"
            extension = "parrot"
            fixed_session_id = 7
            "#,
        )
        .unwrap();
        assert_eq!(
            config.extension_mode().unwrap(),
            ExtensionMode::Forced(Vendor::Parrot)
        );
        assert_eq!(config.session_policy(), SessionIdPolicy::Fixed(7));
        assert_eq!(config.receive_chunk, DEFAULT_RECEIVE_CHUNK);
        assert_eq!(config.max_container_size, DEFAULT_MAX_INBOUND_CONTAINER);
        assert!(!config.load_property_descriptions);
        assert_eq!(config.usb_filter(), None);
    }

    #[test]
    fn test_save_and_load() {
        let path = std::env::temp_dir().join(format!("ptp-config-{}.toml", std::process::id()));
        let config = DeviceConfig {
            usb_vendor_id: Some(0x19CF),
            usb_product_id: Some(0x5038),
            event_poll_interval_ms: 250,
            ..Default::default()
        };
        config.save_to_file(&path).unwrap();
        let loaded = DeviceConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded, config);
        assert_eq!(loaded.usb_filter(), Some((0x19CF, 0x5038)));
        assert_eq!(
            loaded.session_policy(),
            SessionIdPolicy::Incrementing { first: 1 }
        );
    }

    #[test]
    fn test_bad_extension_rejected_on_load() {
        let path =
            std::env::temp_dir().join(format!("ptp-config-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "extension = \"kodak\"\n").unwrap();
        let result = DeviceConfig::load_from_file(&path);
        std::fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }
}
