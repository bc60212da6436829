use std::{path::Path, str::FromStr};

use mime::Mime;

/// Substring test on the raw header bytes, not a media-type parse.
pub fn is_multipart_form_data(content_type: Option<&[u8]>) -> bool {
    let needle = mime::MULTIPART_FORM_DATA.essence_str().as_bytes();
    content_type.map_or(false, |content_type| content_type.windows(needle.len()).any(|window| window == needle))
}

pub fn get_content_type(mime_type: Option<&str>, filename: &str) -> Mime {
    if let Some(mime_type) = mime_type {
        if let Ok(content_type) = Mime::from_str(mime_type) {
            return content_type;
        }
    }
    if let Some(extension) = Path::new(filename).extension() {
        if let Some(extension) = extension.to_str() {
            return match extension.to_ascii_lowercase().as_str() {
                "png" => mime::IMAGE_PNG,
                "jpg" | "jpeg" => mime::IMAGE_JPEG,
                "gif" => mime::IMAGE_GIF,
                "bmp" => mime::IMAGE_BMP,
                "svg" => mime::IMAGE_SVG,
                _ => mime::APPLICATION_OCTET_STREAM,
            };
        }
    }
    mime::APPLICATION_OCTET_STREAM
}

pub fn get_extension(content_type: &Mime) -> &'static str {
    if content_type.type_() != mime::IMAGE {
        return "bin";
    }
    match content_type.subtype().as_str() {
        "png" => "png",
        "jpeg" => "jpg",
        "gif" => "gif",
        "bmp" => "bmp",
        "svg" => "svg",
        "webp" => "webp",
        _ => "bin",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multipart_check_is_a_substring_match() {
        assert!(is_multipart_form_data(Some(b"multipart/form-data; boundary=abc".as_slice())));
        assert!(is_multipart_form_data(Some(b"text/plain, multipart/form-data".as_slice())));
        assert!(!is_multipart_form_data(Some(b"Multipart/Form-Data; boundary=abc".as_slice())));
        assert!(!is_multipart_form_data(Some(b"application/json".as_slice())));
        assert!(!is_multipart_form_data(Some(b"multipart/form".as_slice())));
        assert!(!is_multipart_form_data(None));
    }

    #[test]
    fn multipart_check_tolerates_non_ascii_bytes() {
        assert!(is_multipart_form_data(Some(b"multipart/form-data; boundary=abc; charset=\"\xe9\"".as_slice())));
    }

    #[test]
    fn declared_type_wins_over_filename() {
        let content_type = get_content_type(Some("image/jpeg"), "upload.png");
        assert_eq!(get_extension(&content_type), "jpg");
    }

    #[test]
    fn falls_back_to_filename_then_bin() {
        assert_eq!(get_extension(&get_content_type(None, "shot.PNG")), "png");
        assert_eq!(get_extension(&get_content_type(Some("not a mime"), "notes.txt")), "bin");
        assert_eq!(get_extension(&get_content_type(None, "")), "bin");
    }
}
