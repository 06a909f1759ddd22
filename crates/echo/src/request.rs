use axum::extract::{FromRequest, Multipart, Request};
use murmur_core::ServiceError;

/// Body limit for audio uploads (32 MiB)
pub const BODY_LIMIT_BYTES: usize = 32 << 20;

/// Extractor for the uploaded recording in a multipart form
///
/// Takes the first field that is either named `file` or carries a filename.
pub struct ExtractAudio(pub Vec<u8>);

impl<S> FromRequest<S> for ExtractAudio
where
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| ServiceError::Validation(format!("Failed to parse multipart form: {e}")))?;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ServiceError::Validation(format!("Failed to read multipart field: {e}")))?
        {
            let is_audio = field.name() == Some("file") || field.file_name().is_some();

            if !is_audio {
                continue;
            }

            let bytes = field
                .bytes()
                .await
                .map_err(|e| ServiceError::Validation(format!("Failed to read audio data: {e}")))?;

            return Ok(Self(bytes.to_vec()));
        }

        Err(ServiceError::Validation(
            "Missing required 'file' field in multipart form".to_string(),
        ))
    }
}
