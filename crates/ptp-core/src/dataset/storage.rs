//! StorageInfo and ObjectInfo datasets.

use super::codec::{Dataset, DatasetError, DatasetReader};
use crate::protocol::ObjectFormatCode;

/// Description of one store (GetStorageInfo).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StorageInfo {
    pub storage_type: u16,
    pub filesystem_type: u16,
    pub access_capability: u16,
    pub max_capacity: u64,
    pub free_space_in_bytes: u64,
    pub free_space_in_images: u32,
    pub storage_description: String,
    pub volume_label: String,
}

impl StorageInfo {
    /// Access capability 0 is read-write; 1 and 2 are read-only variants.
    pub fn is_writable(&self) -> bool {
        self.access_capability == 0
    }
}

impl Dataset for StorageInfo {
    fn read(r: &mut DatasetReader<'_>) -> Result<Self, DatasetError> {
        Ok(Self {
            storage_type: r.read_u16()?,
            filesystem_type: r.read_u16()?,
            access_capability: r.read_u16()?,
            max_capacity: r.read_u64()?,
            free_space_in_bytes: r.read_u64()?,
            free_space_in_images: r.read_u32()?,
            storage_description: r.read_string()?,
            volume_label: r.read_string()?,
        })
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
        self.storage_type.write(out)?;
        self.filesystem_type.write(out)?;
        self.access_capability.write(out)?;
        self.max_capacity.write(out)?;
        self.free_space_in_bytes.write(out)?;
        self.free_space_in_images.write(out)?;
        self.storage_description.write(out)?;
        self.volume_label.write(out)
    }
}

/// Object metadata (GetObjectInfo / SendObjectInfo).
///
/// Dates are kept in their ISO 8601 wire form (`YYYYMMDDThhmmss[.s]`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ObjectInfo {
    pub storage_id: u32,
    pub object_format: ObjectFormatCode,
    pub protection_status: u16,
    pub object_compressed_size: u32,
    pub thumb_format: ObjectFormatCode,
    pub thumb_compressed_size: u32,
    pub thumb_pix_width: u32,
    pub thumb_pix_height: u32,
    pub image_pix_width: u32,
    pub image_pix_height: u32,
    pub image_bit_depth: u32,
    pub parent_object: u32,
    pub association_type: u16,
    pub association_desc: u32,
    pub sequence_number: u32,
    pub filename: String,
    pub capture_date: String,
    pub modification_date: String,
    pub keywords: String,
}

impl ObjectInfo {
    pub fn is_association(&self) -> bool {
        self.object_format == ObjectFormatCode::ASSOCIATION
    }
}

impl Dataset for ObjectInfo {
    fn read(r: &mut DatasetReader<'_>) -> Result<Self, DatasetError> {
        Ok(Self {
            storage_id: r.read_u32()?,
            object_format: ObjectFormatCode::read(r)?,
            protection_status: r.read_u16()?,
            object_compressed_size: r.read_u32()?,
            thumb_format: ObjectFormatCode::read(r)?,
            thumb_compressed_size: r.read_u32()?,
            thumb_pix_width: r.read_u32()?,
            thumb_pix_height: r.read_u32()?,
            image_pix_width: r.read_u32()?,
            image_pix_height: r.read_u32()?,
            image_bit_depth: r.read_u32()?,
            parent_object: r.read_u32()?,
            association_type: r.read_u16()?,
            association_desc: r.read_u32()?,
            sequence_number: r.read_u32()?,
            filename: r.read_string()?,
            capture_date: r.read_string()?,
            modification_date: r.read_string()?,
            keywords: r.read_string()?,
        })
    }

    fn write(&self, out: &mut Vec<u8>) -> Result<(), DatasetError> {
        self.storage_id.write(out)?;
        self.object_format.write(out)?;
        self.protection_status.write(out)?;
        self.object_compressed_size.write(out)?;
        self.thumb_format.write(out)?;
        self.thumb_compressed_size.write(out)?;
        self.thumb_pix_width.write(out)?;
        self.thumb_pix_height.write(out)?;
        self.image_pix_width.write(out)?;
        self.image_pix_height.write(out)?;
        self.image_bit_depth.write(out)?;
        self.parent_object.write(out)?;
        self.association_type.write(out)?;
        self.association_desc.write(out)?;
        self.sequence_number.write(out)?;
        self.filename.write(out)?;
        self.capture_date.write(out)?;
        self.modification_date.write(out)?;
        self.keywords.write(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_info_layout() {
        let info = StorageInfo {
            storage_type: 0x0004,
            filesystem_type: 0x0002,
            access_capability: 0,
            max_capacity: 64 * 1024 * 1024 * 1024,
            free_space_in_bytes: 1024,
            free_space_in_images: 0xFFFF_FFFF,
            storage_description: "SD".to_string(),
            volume_label: String::new(),
        };
        let bytes = info.to_bytes().unwrap();
        // 3 * u16 + 2 * u64 + u32 + "SD" (1 + 3 * 2) + "" (1)
        assert_eq!(bytes.len(), 6 + 16 + 4 + 7 + 1);
        assert_eq!(StorageInfo::from_bytes(&bytes).unwrap(), info);
        assert!(info.is_writable());
    }

    #[test]
    fn test_object_info_roundtrip() {
        let info = ObjectInfo {
            storage_id: 0x0001_0001,
            object_format: ObjectFormatCode::EXIF_JPEG,
            object_compressed_size: 4_200_000,
            thumb_format: ObjectFormatCode::EXIF_JPEG,
            image_pix_width: 6000,
            image_pix_height: 4000,
            image_bit_depth: 24,
            parent_object: 0x10,
            sequence_number: 3,
            filename: "IMG_0001.JPG".to_string(),
            capture_date: "20240131T235959".to_string(),
            ..Default::default()
        };
        let bytes = info.to_bytes().unwrap();
        let back = ObjectInfo::from_bytes(&bytes).unwrap();
        assert_eq!(back, info);
        assert!(!back.is_association());
    }

    #[test]
    fn test_object_info_tolerates_padding() {
        let info = ObjectInfo {
            object_format: ObjectFormatCode::ASSOCIATION,
            filename: "DCIM".to_string(),
            ..Default::default()
        };
        let mut bytes = info.to_bytes().unwrap();
        bytes.extend_from_slice(&[0, 0, 0, 0]);
        assert!(ObjectInfo::from_bytes(&bytes).unwrap().is_association());
    }
}
