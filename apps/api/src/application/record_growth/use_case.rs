use crate::{
    application::record_growth::dto::{RecordGrowthRequest, UploadedImage},
    domain::{
        record::{
            entity::{NewRecord, Record},
            repository::RecordRepository,
        },
        shared::errors::DomainError,
    },
    infrastructure::storage::traits::StorageService,
};
use chrono::{Local, NaiveDateTime};
use image::ImageFormat;
use std::{path::Path, sync::Arc};
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// Extensions accepted by the upload form.
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Saves a growth-log photo and appends the matching record.
///
/// The image file is written before the record is inserted and the two writes
/// share no transaction. If the insert fails the file is removed again on a
/// best-effort basis; a crash between the two steps still leaves an orphaned
/// file behind.
pub struct RecordGrowthUseCase {
    repository: Arc<dyn RecordRepository>,
    storage: Arc<dyn StorageService>,
    unique_names: bool,
}

impl RecordGrowthUseCase {
    /// # Arguments
    /// * `repository` - Record store
    /// * `storage` - Where uploaded photos are written
    /// * `unique_names` - Append a random suffix so uploads within the same
    ///   second get distinct file names
    pub fn new(
        repository: Arc<dyn RecordRepository>,
        storage: Arc<dyn StorageService>,
        unique_names: bool,
    ) -> Self {
        Self {
            repository,
            storage,
            unique_names,
        }
    }

    pub async fn execute(&self, request: RecordGrowthRequest) -> Result<Option<Record>, DomainError> {
        self.execute_at(request, Local::now().naive_local()).await
    }

    /// Runs the upload as if submitted at `now`.
    ///
    /// # Returns
    /// `Ok(None)` when the submission carried no photo. Nothing is stored in
    /// that case and no error is raised.
    ///
    /// # Errors
    /// - `ValidationError` for an extension other than jpg/jpeg/png, bytes
    ///   that are not a JPEG or PNG image, or bytes whose format does not
    ///   match the extension
    /// - `InfrastructureError` when the file or the record cannot be written
    #[instrument(skip(self, request), fields(plant = %request.plant))]
    pub async fn execute_at(
        &self,
        request: RecordGrowthRequest,
        now: NaiveDateTime,
    ) -> Result<Option<Record>, DomainError> {
        let Some(upload) = request.image.filter(|img| !img.data.is_empty()) else {
            debug!("Submission without a photo ignored");
            return Ok(None);
        };

        let extension = validated_extension(&upload)?;
        let format = image::guess_format(&upload.data)
            .ok()
            .filter(|f| matches!(f, ImageFormat::Jpeg | ImageFormat::Png))
            .ok_or_else(|| {
                warn!("Rejected upload {}: not a JPEG or PNG image", upload.file_name);
                DomainError::ValidationError("Uploaded file is not a JPEG or PNG image".into())
            })?;

        if ImageFormat::from_extension(&extension) != Some(format) {
            warn!("Rejected upload {}: content is {:?}", upload.file_name, format);
            return Err(DomainError::ValidationError(format!(
                "'{}' does not contain a {} image",
                upload.file_name,
                extension.to_ascii_lowercase()
            )));
        }

        let key = upload_file_name(now, &extension, self.unique_names);
        let image_path = self
            .storage
            .upload(&key, upload.data.to_vec(), format.to_mime_type())
            .await
            .map_err(|e| {
                error!("Storage upload failed for {}: {}", key, e);
                DomainError::InfrastructureError(format!("Failed to store image: {}", e))
            })?;

        let new_record = NewRecord::new(
            request.user.as_deref(),
            request.plant.as_str(),
            now.date(),
            image_path,
        );

        let id = match self.repository.append(&new_record).await {
            Ok(id) => id,
            Err(e) => {
                if let Err(cleanup) = self.storage.delete(&key).await {
                    warn!("Could not remove orphaned upload {}: {}", key, cleanup);
                }
                return Err(e);
            }
        };

        info!("Growth record #{} saved at {}", id, new_record.image_path);
        Ok(Some(Record {
            id,
            user: new_record.user,
            plant: new_record.plant,
            date: new_record.date,
            image_path: new_record.image_path,
        }))
    }
}

fn validated_extension(image: &UploadedImage) -> Result<String, DomainError> {
    Path::new(&image.file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .map(str::to_string)
        .ok_or_else(|| {
            DomainError::ValidationError(format!(
                "Unsupported file type for '{}', expected jpg or png",
                image.file_name
            ))
        })
}

/// Upload file name: submission time to the second plus the original extension.
///
/// Without `unique` two uploads in the same second get the same name and the
/// later one replaces the earlier file.
pub fn upload_file_name(now: NaiveDateTime, extension: &str, unique: bool) -> String {
    let stamp = now.format("%Y%m%d_%H%M%S");
    if unique {
        let id = Uuid::now_v7().simple().to_string();
        format!("{}_{}.{}", stamp, &id[id.len() - 8..], extension)
    } else {
        format!("{}.{}", stamp, extension)
    }
}
