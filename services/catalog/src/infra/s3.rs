use std::path::Path;

use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;

use crate::domain::repository::ObjectStorePort;
use crate::error::CatalogServiceError;

/// S3-backed object store for uploaded cover images.
#[derive(Clone)]
pub struct S3ObjectStore {
    client: aws_sdk_s3::Client,
    bucket: String,
    base_url: String,
}

impl S3ObjectStore {
    /// Build a client from the ambient AWS environment (credentials,
    /// region) the way the SDK resolves them by default.
    pub async fn connect(bucket: String, base_url: String) -> Self {
        let sdk_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self {
            client: aws_sdk_s3::Client::new(&sdk_config),
            bucket,
            base_url,
        }
    }
}

impl ObjectStorePort for S3ObjectStore {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn put_object(
        &self,
        key: &str,
        path: &Path,
        content_type: &str,
    ) -> Result<(), CatalogServiceError> {
        let body = ByteStream::from_path(path)
            .await
            .map_err(|e| CatalogServiceError::Upload(format!("read staged file: {e}")))?;
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .body(body)
            .send()
            .await
            .map_err(|e| CatalogServiceError::Upload(format!("put {key}: {e}")))?;
        Ok(())
    }

    async fn set_public_read(&self, key: &str) -> Result<(), CatalogServiceError> {
        self.client
            .put_object_acl()
            .bucket(&self.bucket)
            .key(key)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await
            .map_err(|e| CatalogServiceError::Upload(format!("set acl on {key}: {e}")))?;
        Ok(())
    }
}
