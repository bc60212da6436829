use std::path::{Path, PathBuf};

use chrono::Utc;
use tokio::{
    fs::{self, File},
    io::{self, AsyncWriteExt},
};
use tracing::{debug, info};

use crate::{
    error::WebhookError,
    models::FormFile,
    util::{
        mime::{get_content_type, get_extension},
        random::generate_30_alphanumeric,
        state::{ImageNaming, ImageStorageSettings},
    },
};

use super::{tempfiles::StagingFile, IImageStorage};

#[derive(Debug)]
pub struct LocalImageStorage {
    directory: PathBuf,
    naming: ImageNaming,
    atomic_writes: bool,
}

impl LocalImageStorage {
    pub async fn build(settings: &ImageStorageSettings) -> Result<Self, WebhookError> {
        fs::create_dir_all(&settings.directory).await?;
        Ok(LocalImageStorage {
            directory: settings.directory.clone(),
            naming: settings.naming.clone(),
            atomic_writes: settings.atomic_writes,
        })
    }

    pub fn destination(&self, image: &FormFile) -> PathBuf {
        match &self.naming {
            ImageNaming::Fixed(file_name) => self.directory.join(file_name),
            ImageNaming::Unique => {
                let content_type = get_content_type(image.content_type.as_deref(), &image.file_name);
                self.directory.join(format!(
                    "{}_{}.{}",
                    Utc::now().format("%Y%m%dT%H%M%S%3fZ"),
                    generate_30_alphanumeric(),
                    get_extension(&content_type)
                ))
            }
        }
    }

    async fn write_in_place(&self, image: &FormFile, destination: &Path) -> Result<(), WebhookError> {
        let mut source = image.open();
        let mut target = File::create(destination).await?;
        io::copy(&mut source, &mut target).await?;
        target.flush().await?;
        Ok(())
    }

    async fn write_atomically(&self, image: &FormFile, destination: &Path) -> Result<(), WebhookError> {
        let staging = StagingFile::new_in(&self.directory);
        if let Err(err) = self.write_in_place(image, staging.get_path()).await {
            staging.clean_up().await;
            return Err(err);
        }
        staging.persist(destination).await
    }
}

#[async_trait::async_trait]
impl IImageStorage for LocalImageStorage {
    async fn store_image(&self, image: &FormFile) -> Result<PathBuf, WebhookError> {
        let destination = self.destination(image);
        debug!(file_name = %image.file_name, size = image.len(), atomic = self.atomic_writes, "Storing image");
        if self.atomic_writes {
            self.write_atomically(image, &destination).await?;
        } else {
            self.write_in_place(image, &destination).await?;
        }
        info!("Stored image at {}", destination.display());
        Ok(destination)
    }
}
