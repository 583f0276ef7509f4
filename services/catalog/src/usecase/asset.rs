use std::io::Write as _;
use std::time::Duration;

use anyhow::Context as _;
use backon::{ExponentialBuilder, Retryable};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use image::GenericImageView as _;
use rand::RngExt;
use tempfile::NamedTempFile;

use crate::domain::repository::{AssetRepository, ObjectStorePort, VinylRepository};
use crate::domain::types::{Asset, NewAsset};
use crate::error::CatalogServiceError;

/// Extensions the upload pipeline accepts.
pub const EXTENSIONS: [&str; 4] = ["png", "gif", "jpg", "jpeg"];

/// Storage-key salt length. Collisions are not checked (36^16 space).
pub const SALT_LEN: usize = 16;

/// Charset for storage-key salts (uppercase alphanumeric).
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

fn generate_salt() -> String {
    let mut rng = rand::rng();
    (0..SALT_LEN)
        .map(|_| CHARSET[rng.random_range(0..CHARSET.len())] as char)
        .collect()
}

/// Split `data:<mime>;base64,<payload>` into mime and payload.
fn split_data_url(image_data: &str) -> Result<(&str, &str), CatalogServiceError> {
    image_data
        .strip_prefix("data:")
        .and_then(|rest| rest.split_once(";base64,"))
        .ok_or_else(|| CatalogServiceError::ImageDecode("not a base64 data url".to_owned()))
}

/// Map a MIME type to one of the supported file extensions.
fn derive_extension(mime: &str) -> Result<&'static str, CatalogServiceError> {
    let subtype = mime.rsplit('/').next().unwrap_or(mime);
    let candidate = if subtype == "jpeg" { "jpg" } else { subtype };
    EXTENSIONS
        .iter()
        .find(|ext| **ext == candidate)
        .copied()
        .ok_or_else(|| CatalogServiceError::UnsupportedExtension(subtype.to_owned()))
}

fn content_type_for(extension: &str) -> &'static str {
    match extension {
        "png" => "image/png",
        "gif" => "image/gif",
        _ => "image/jpeg",
    }
}

async fn write_temp_file(bytes: Vec<u8>) -> Result<NamedTempFile, CatalogServiceError> {
    tokio::task::spawn_blocking(move || -> std::io::Result<NamedTempFile> {
        let mut file = NamedTempFile::new()?;
        file.write_all(&bytes)?;
        file.flush()?;
        Ok(file)
    })
    .await
    .context("temp file write task")?
    .map_err(|e| CatalogServiceError::Upload(format!("temp file: {e}")))
}

// ── IngestAsset ──────────────────────────────────────────────────────────────

pub struct IngestAssetUseCase<A: AssetRepository, O: ObjectStorePort> {
    pub assets: A,
    pub store: O,
    pub upload_timeout: Duration,
}

impl<A: AssetRepository, O: ObjectStorePort> IngestAssetUseCase<A, O> {
    /// Run the upload pipeline for one base64 data URL:
    /// derive the extension, decode the payload, probe pixel dimensions,
    /// stage the bytes in a scoped temp file, upload under a random salt
    /// key, mark the object public, and only then record the asset row.
    ///
    /// Every step failure is returned to the caller; nothing is persisted
    /// on a failed upload, and the temp file is removed on all exit paths
    /// (the `NamedTempFile` guard drops on success, error, timeout, and
    /// cancellation alike).
    pub async fn execute(&self, image_data: &str) -> Result<Asset, CatalogServiceError> {
        let (mime, payload) = split_data_url(image_data)?;
        let extension = derive_extension(mime)?;

        let bytes = BASE64
            .decode(payload)
            .map_err(|e| CatalogServiceError::ImageDecode(e.to_string()))?;
        let (width, height) = image::load_from_memory(&bytes)
            .map_err(|e| CatalogServiceError::ImageDecode(e.to_string()))?
            .dimensions();

        let salt = generate_salt();
        let key = format!("{salt}.{extension}");

        let tmp = write_temp_file(bytes).await?;

        // The put is the only network call with transient-failure
        // potential: bounded exponential-backoff retry, whole attempt
        // sequence capped by the configured deadline.
        let put = || async {
            self.store
                .put_object(&key, tmp.path(), content_type_for(extension))
                .await
        };
        tokio::time::timeout(
            self.upload_timeout,
            put.retry(
                ExponentialBuilder::default()
                    .with_min_delay(Duration::from_millis(200))
                    .with_max_times(3),
            ),
        )
        .await
        .map_err(|_| {
            CatalogServiceError::Upload(format!(
                "timed out after {}s",
                self.upload_timeout.as_secs()
            ))
        })??;
        self.store.set_public_read(&key).await?;
        drop(tmp);

        self.assets
            .create(&NewAsset {
                base_url: self.store.base_url().to_owned(),
                salt,
                extension: extension.to_owned(),
                width: width as i32,
                height: height as i32,
                created_at: Utc::now(),
            })
            .await
    }
}

// ── AttachVinylImage ─────────────────────────────────────────────────────────

pub struct AttachVinylImageUseCase<A, O, V>
where
    A: AssetRepository,
    O: ObjectStorePort,
    V: VinylRepository,
{
    pub ingest: IngestAssetUseCase<A, O>,
    pub vinyls: V,
}

impl<A, O, V> AttachVinylImageUseCase<A, O, V>
where
    A: AssetRepository,
    O: ObjectStorePort,
    V: VinylRepository,
{
    /// Ingest a cover image and point the vinyl's `img` field at it.
    pub async fn execute(
        &self,
        vinyl_id: i32,
        image_data: &str,
    ) -> Result<Asset, CatalogServiceError> {
        self.vinyls
            .find_by_id(vinyl_id)
            .await?
            .ok_or(CatalogServiceError::VinylNotFound)?;
        let asset = self.ingest.execute(image_data).await?;
        self.vinyls
            .update_img(vinyl_id, &asset.public_url())
            .await?;
        Ok(asset)
    }
}
