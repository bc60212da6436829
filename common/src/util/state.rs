use std::path::PathBuf;

use super::consts::{DEFAULT_IMAGE_FILE_NAME, DEFAULT_MAX_BODY_BYTES};

#[derive(Debug, Clone, Copy)]
pub struct WebhookSettings {
    pub max_body_bytes: usize,
    pub strict_status_codes: bool,
    pub expose_outcome: bool,
}

impl Default for WebhookSettings {
    fn default() -> Self {
        WebhookSettings {
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            strict_status_codes: false,
            expose_outcome: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageNaming {
    /// Every upload lands on the same file name; concurrent uploads race.
    Fixed(String),
    Unique,
}

impl ImageNaming {
    pub fn parse(naming: &str, file_name: String) -> Option<Self> {
        match naming.trim().to_ascii_lowercase().as_str() {
            "fixed" => Some(ImageNaming::Fixed(file_name)),
            "unique" => Some(ImageNaming::Unique),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ImageStorageSettings {
    pub directory: PathBuf,
    pub naming: ImageNaming,
    pub atomic_writes: bool,
}

impl Default for ImageStorageSettings {
    fn default() -> Self {
        ImageStorageSettings {
            directory: PathBuf::from("."),
            naming: ImageNaming::Fixed(DEFAULT_IMAGE_FILE_NAME.to_string()),
            atomic_writes: false,
        }
    }
}
