use std::path::PathBuf;

use crate::{error::WebhookError, models::FormFile};

#[async_trait::async_trait]
pub trait IImageStorage: Send + Sync {
    async fn store_image(&self, image: &FormFile) -> Result<PathBuf, WebhookError>;
}
