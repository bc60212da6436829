use std::path::PathBuf;

use tracing::info;

use crate::{
    error::WebhookError,
    models::{WebhookForm, ID_GEN, IMG_MESSAGE, RES_IMAGE, STATUS, TIME_GEN},
    persistence::IImageStorage,
    util::consts::{MISSING_IMG_MESSAGE, STATUS_SUCCESS},
};

/// Applies the status rule, stores `res_image` if present and logs the
/// correlation identifiers. Returns where the image was written.
///
/// An absent `status` field counts as success. A failing status stops
/// processing before the image is touched.
pub async fn process_form_data(form: &WebhookForm, image_storage: &dyn IImageStorage) -> Result<Option<PathBuf>, WebhookError> {
    if let Some(status) = form.value(STATUS) {
        if status != STATUS_SUCCESS {
            let message = form.value(IMG_MESSAGE).unwrap_or(MISSING_IMG_MESSAGE);
            return Err(WebhookError::ValidationFailure(message.to_string()));
        }
    }

    let stored_image = match form.file(RES_IMAGE) {
        Some(image) => Some(image_storage.store_image(image).await?),
        None => None,
    };

    match (form.value(ID_GEN), form.value(TIME_GEN)) {
        (Some(id_gen), Some(time_gen)) => info!(id_gen, time_gen, "processFormData: ID: {}, Time: {}", id_gen, time_gen),
        _ => info!("processFormData: idGen or timeGen not provided"),
    }

    Ok(stored_image)
}
