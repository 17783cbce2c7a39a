//! Hosted-backend implementation of FileStore

use async_trait::async_trait;
use reqwest::Method;
use tracing::instrument;

use gallery_core::traits::{FileStore, StoreResult, UploadedFile};
use gallery_core::DomainError;

use crate::client::RestClient;

use super::error::error_detail;

/// Hosted object-storage implementation of FileStore
#[derive(Debug, Clone)]
pub struct RemoteFileStore {
    client: RestClient,
    bucket: String,
}

impl RemoteFileStore {
    /// Create a new RemoteFileStore targeting a bucket
    pub fn new(client: RestClient, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    fn object_path(&self, object_name: &str) -> String {
        format!("storage/v1/object/{}/{}", self.bucket, object_name)
    }

    fn public_url(&self, object_name: &str) -> String {
        self.client
            .url(&format!("storage/v1/object/public/{}/{}", self.bucket, object_name))
    }
}

#[async_trait]
impl FileStore for RemoteFileStore {
    #[instrument(skip(self, file), fields(size = file.bytes.len(), content_type = %file.content_type))]
    async fn upload(&self, object_name: &str, file: &UploadedFile) -> StoreResult<String> {
        let response = self
            .client
            .request(Method::POST, &self.object_path(object_name))
            .header("Content-Type", &file.content_type)
            .body(file.bytes.clone())
            .send()
            .await
            .map_err(|e| DomainError::StorageError(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DomainError::StorageError(error_detail(response).await));
        }

        Ok(self.public_url(object_name))
    }
}
