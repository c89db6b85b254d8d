//! `/upload` endpoints.
//!
//! Images are forwarded by the backend to a media CDN; the response carries
//! the hosted URL. A 503 means the backend has no CDN credentials, which
//! callers surface through [`ApiError::upload_message`].

use reqwest::multipart::{Form, Part};
use wishlist_shared::{ApiError, UploadResponse, UploadStatus};

use crate::api_client::ApiClient;

pub const AVATAR_UPLOAD_PATH: &str = "/upload/avatar";
pub const PRODUCT_IMAGE_UPLOAD_PATH: &str = "/upload/product-image";
pub const IMAGE_UPLOAD_PATH: &str = "/upload/image";
pub const UPLOAD_TEST_PATH: &str = "/upload/test";

/// A file picked by the user, read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl UploadFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let content_type = guess_image_mime(&name).map(str::to_string);
        Self {
            name,
            content_type,
            bytes,
        }
    }

    fn into_form(self, field: &'static str) -> Result<Form, ApiError> {
        let part = Part::bytes(self.bytes).file_name(self.name);
        let part = match self.content_type.as_deref() {
            Some(mime) => part
                .mime_str(mime)
                .map_err(|e| ApiError::Network(format!("invalid content type {mime}: {e}")))?,
            None => part,
        };
        Ok(Form::new().part(field, part))
    }
}

/// Content type for common image extensions.
pub fn guess_image_mime(file_name: &str) -> Option<&'static str> {
    let ext = file_name.rsplit_once('.')?.1.to_ascii_lowercase();
    match ext.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "gif" => Some("image/gif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "avif" => Some("image/avif"),
        _ => None,
    }
}

impl ApiClient {
    pub async fn upload_avatar(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        self.post_multipart(AVATAR_UPLOAD_PATH, file.into_form("avatar")?)
            .await
    }

    pub async fn upload_product_image(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        self.post_multipart(PRODUCT_IMAGE_UPLOAD_PATH, file.into_form("image")?)
            .await
    }

    pub async fn upload_image(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        self.post_multipart(IMAGE_UPLOAD_PATH, file.into_form("image")?)
            .await
    }

    /// Ask the backend whether uploads are configured.
    pub async fn upload_status(&self) -> Result<UploadStatus, ApiError> {
        self.get_json(UPLOAD_TEST_PATH).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guesses_common_image_types() {
        assert_eq!(guess_image_mime("me.PNG"), Some("image/png"));
        assert_eq!(guess_image_mime("photo.final.jpeg"), Some("image/jpeg"));
        assert_eq!(guess_image_mime("notes.txt"), None);
        assert_eq!(guess_image_mime("no-extension"), None);
    }

    #[test]
    fn upload_file_records_guessed_type() {
        let file = UploadFile::new("gift.webp", vec![1, 2, 3]);
        assert_eq!(file.content_type.as_deref(), Some("image/webp"));
        assert_eq!(file.bytes.len(), 3);
    }
}
