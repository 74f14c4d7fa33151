//! Object storage access via presigned URLs
//!
//! Receipt and voucher images never pass through the API server: the
//! client asks for a presigned URL, then uploads directly with a
//! matching `Content-Type`.

use uuid::Uuid;

use crate::types::{PresignedRequest, PresignedResponse};
use crate::{ClientResult, HttpClient};

/// Content type for an object name, by extension; unknown extensions
/// upload as a generic byte stream
pub fn content_type_de(object_name: &str) -> String {
    mime_guess::from_path(object_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

/// Unique object name under a prefix, keeping the original extension
pub fn nombre_objeto(prefijo: &str, file_name: &str) -> String {
    let extension = std::path::Path::new(file_name)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("bin");
    format!("{prefijo}/{}.{extension}", Uuid::new_v4())
}

impl HttpClient {
    /// Ask the API to presign an operation on an object
    pub async fn presigned_url(&self, request: &PresignedRequest) -> ClientResult<PresignedResponse> {
        self.post("/presigned-url", request).await
    }

    /// Upload bytes under the given object name; returns the name for
    /// later reference in records
    pub async fn subir_objeto(&self, object_name: &str, bytes: Vec<u8>) -> ClientResult<String> {
        let content_type = content_type_de(object_name);
        let presigned = self
            .presigned_url(&PresignedRequest::put(object_name, content_type.clone()))
            .await?;

        tracing::debug!(object_name, size = bytes.len(), "Uploading object to presigned URL");
        self.put_raw(&presigned.url, bytes, &content_type).await?;
        Ok(object_name.to_string())
    }

    /// Presigned read URL for an already-stored object
    pub async fn url_de_descarga(&self, object_name: &str) -> ClientResult<String> {
        let presigned = self
            .presigned_url(&PresignedRequest::get(object_name))
            .await?;
        Ok(presigned.url)
    }
}
