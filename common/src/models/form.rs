use std::{collections::HashMap, io::Cursor};

use bytes::Bytes;

pub const STATUS: &str = "status";
pub const ID_GEN: &str = "id_gen";
pub const TIME_GEN: &str = "time_gen";
pub const IMG_MESSAGE: &str = "img_message";
pub const RES_IMAGE: &str = "res_image";

/// Parsed multipart body: plain fields and file parts keyed by part name.
#[derive(Debug, Default, Clone)]
pub struct WebhookForm {
    pub values: HashMap<String, Vec<String>>,
    pub files: HashMap<String, Vec<FormFile>>,
}

impl WebhookForm {
    pub fn add_value(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    pub fn add_file(&mut self, name: impl Into<String>, file: FormFile) {
        self.files.entry(name.into()).or_default().push(file);
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|values| values.first()).map(String::as_str)
    }

    pub fn file(&self, name: &str) -> Option<&FormFile> {
        self.files.get(name).and_then(|files| files.first())
    }
}

#[derive(Debug, Clone)]
pub struct FormFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

impl FormFile {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, data: impl Into<Bytes>) -> Self {
        FormFile {
            file_name: file_name.into(),
            content_type,
            data: data.into(),
        }
    }

    pub fn open(&self) -> Cursor<Bytes> {
        Cursor::new(self.data.clone())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_value_wins() {
        let mut form = WebhookForm::default();
        form.add_value(STATUS, "200");
        form.add_value(STATUS, "500");

        assert_eq!(form.value(STATUS), Some("200"));
        assert_eq!(form.value(ID_GEN), None);
    }

    #[test]
    fn files_are_kept_apart_from_values() {
        let mut form = WebhookForm::default();
        form.add_file(RES_IMAGE, FormFile::new("a.png", Some("image/png".to_string()), vec![1u8, 2, 3]));

        assert!(form.value(RES_IMAGE).is_none());
        assert_eq!(form.file(RES_IMAGE).map(FormFile::len), Some(3));
    }
}
