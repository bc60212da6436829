pub const WEBHOOK_PATH: &str = "/webhook";
pub const STATUS_SUCCESS: &str = "200";
pub const MISSING_IMG_MESSAGE: &str = "status is not 200 and img_message is missing";

pub const DEFAULT_PORT: u16 = 4000;
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;
pub const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 59;
pub const DEFAULT_IMAGE_FILE_NAME: &str = "resImage.png";
