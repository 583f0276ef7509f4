use serde::Deserialize;

use spindle_core::config::Config;

/// Catalog service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct CatalogConfig {
    /// Database connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 8000). Env var: `PORT`.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Bucket uploaded cover images land in. Env var: `S3_BUCKET_NAME`.
    pub s3_bucket_name: String,
    /// Public base URL for uploaded objects. Defaults to the bucket's
    /// virtual-hosted us-east-1 endpoint. Env var: `S3_PUBLIC_BASE_URL`.
    pub s3_public_base_url: Option<String>,
    /// Deadline for one upload, retries included (default 30).
    /// Env var: `UPLOAD_TIMEOUT_SECS`.
    #[serde(default = "default_upload_timeout_secs")]
    pub upload_timeout_secs: u64,
}

fn default_port() -> u16 {
    8000
}

fn default_upload_timeout_secs() -> u64 {
    30
}

impl Config for CatalogConfig {}

impl CatalogConfig {
    pub fn public_base_url(&self) -> String {
        self.s3_public_base_url.clone().unwrap_or_else(|| {
            format!("https://{}.s3.us-east-1.amazonaws.com", self.s3_bucket_name)
        })
    }
}
