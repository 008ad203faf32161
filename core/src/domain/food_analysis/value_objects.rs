use bytes::Bytes;

use crate::domain::food_analysis::entities::ProductRecord;

pub const ANALYZING_NOTICE: &str = "Analyzing image with AI...";
pub const SCANNING_NOTICE: &str = "Scanning for barcode...";
pub const NO_BARCODE_NOTICE: &str = "No barcode found in the image";
pub const FALLBACK_NOTICE: &str = "Couldn't connect to the backend server. Using fallback mode.";

/// Image payload submitted for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub data: Bytes,
    pub file_name: String,
    pub mime_type: String,
}

impl ImageUpload {
    pub fn new(
        data: impl Into<Bytes>,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
    ) -> Self {
        Self {
            data: data.into(),
            file_name: file_name.into(),
            mime_type: mime_type.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Outcome of a barcode scan. A missing barcode is a normal result, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum BarcodeLookup {
    Found(ProductRecord),
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-facing side-channel message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}
