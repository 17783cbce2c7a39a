//! Upload service
//!
//! Validates image uploads against the storage policy before any network
//! call, then delegates to the file store and returns the public URL.

use tracing::{info, instrument};
use uuid::Uuid;

use gallery_common::config::StorageConfig;
use gallery_core::traits::UploadedFile;
use gallery_core::{DomainError, Permissions};

use super::context::ServiceContext;
use super::error::ServiceResult;
use super::permission::PermissionService;

/// Default upload ceiling: 5 MiB
const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Upload limits applied before the storage call
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    pub max_file_size_bytes: usize,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE,
        }
    }
}

impl UploadPolicy {
    /// Derive the policy from storage configuration
    pub fn from_config(config: &StorageConfig) -> Self {
        Self {
            max_file_size_bytes: config.max_file_size_bytes(),
        }
    }
}

/// Upload service
pub struct UploadService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UploadService<'a> {
    /// Create a new UploadService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Upload an image and return its publicly resolvable URL
    ///
    /// Rejects non-image content types and files over the policy's size
    /// ceiling before anything leaves the process.
    #[instrument(skip(self, file), fields(file_name = %file.file_name, size = file.bytes.len()))]
    pub async fn upload_image(&self, file: &UploadedFile) -> ServiceResult<String> {
        PermissionService::new(self.ctx).require(Permissions::UPLOAD_FILES)?;
        validate_image(file, self.ctx.upload_policy())?;

        let object_name = object_name_for(&file.file_name);
        let url = self.ctx.file_store().upload(&object_name, file).await?;

        info!(object_name = %object_name, "Image uploaded");
        Ok(url)
    }
}

/// Check a file against the upload policy
fn validate_image(file: &UploadedFile, policy: &UploadPolicy) -> Result<(), DomainError> {
    if !file.content_type.starts_with("image/") {
        return Err(DomainError::UnsupportedContentType(
            file.content_type.clone(),
        ));
    }
    if file.bytes.is_empty() {
        return Err(DomainError::Validation("file is empty".to_string()));
    }
    if file.bytes.len() > policy.max_file_size_bytes {
        return Err(DomainError::FileTooLarge {
            size: file.bytes.len(),
            max: policy.max_file_size_bytes,
        });
    }
    Ok(())
}

/// Collision-free object name keeping the original extension
fn object_name_for(file_name: &str) -> String {
    let extension = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext)
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or("bin");
    format!("covers/{}.{}", Uuid::new_v4(), extension.to_lowercase())
}
