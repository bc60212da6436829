use std::sync::Arc;

use common::{
    error::WebhookError,
    persistence::{IImageStorage, LocalImageStorage},
    util::state::{ImageStorageSettings, WebhookSettings},
};

pub type Services = Arc<ServiceCollection>;

pub struct ServiceCollection {
    pub image_storage: Arc<dyn IImageStorage>,
    pub settings: WebhookSettings,
}

impl ServiceCollection {
    pub async fn build(settings: WebhookSettings, storage_settings: &ImageStorageSettings) -> Result<Services, WebhookError> {
        let image_storage = Arc::new(LocalImageStorage::build(storage_settings).await?);
        Ok(Self::new(image_storage, settings))
    }

    pub fn new(image_storage: Arc<dyn IImageStorage>, settings: WebhookSettings) -> Services {
        Arc::new(ServiceCollection { image_storage, settings })
    }
}
