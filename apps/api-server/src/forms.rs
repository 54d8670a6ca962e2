//! Blog bodies arrive either as JSON or as `multipart/form-data` carrying a
//! banner file. Both are reduced to a [`BlogForm`].
//!
//! Bodies are streamed with per-field caps, so an oversized upload is a 400
//! problem document rather than a transport-level 413. An uploaded banner
//! stays in memory until the handler has validated the rest of the form.

use actix_multipart::{Field, Multipart};
use actix_web::{HttpMessage, HttpRequest, web};
use futures::TryStreamExt;

use blogsite_core::ports::BannerStore;
use blogsite_shared::dto::BlogFields;

use crate::middleware::error::{AppError, AppResult};

/// Cap for non-file form fields.
const MAX_TEXT_FIELD_BYTES: usize = 256 * 1024;

/// Cap for a JSON blog body.
const MAX_JSON_BYTES: usize = 1024 * 1024;

const BANNER_FIELDS: [&str; 3] = ["banner", "bannerImage", "banner_image"];

/// A banner file received with the form but not yet written anywhere.
#[derive(Debug)]
pub struct BannerUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl BannerUpload {
    /// Persist the file and return its public URL.
    pub async fn store(self, banners: &dyn BannerStore) -> AppResult<String> {
        let url = banners.store(&self.file_name, self.bytes).await?;
        tracing::debug!(url = %url, "Stored banner upload");
        Ok(url)
    }
}

/// Text fields plus an optional pending banner.
#[derive(Debug, Default)]
pub struct BlogForm {
    pub fields: BlogFields,
    pub banner: Option<BannerUpload>,
}

/// Read a blog body, choosing the decoder from the `Content-Type` header.
pub async fn read_blog_form(
    req: &HttpRequest,
    payload: web::Payload,
    max_upload_bytes: usize,
) -> AppResult<BlogForm> {
    let content_type = req.content_type().to_ascii_lowercase();

    if content_type == "multipart/form-data" {
        read_multipart(Multipart::new(req.headers(), payload), max_upload_bytes).await
    } else if content_type.is_empty()
        || content_type == "application/json"
        || content_type.ends_with("+json")
    {
        read_json(payload).await
    } else {
        Err(malformed_body(format!("unsupported content type {content_type}")))
    }
}

/// Best-effort cleanup of a banner whose request failed after it was stored.
pub async fn discard_banner(banners: &dyn BannerStore, url: Option<&str>) {
    let Some(url) = url else { return };
    if let Err(err) = banners.remove(url).await {
        tracing::warn!(url = %url, error = %err, "Failed to remove banner upload");
    }
}

async fn read_json(mut payload: web::Payload) -> AppResult<BlogForm> {
    let mut body = Vec::new();
    while let Some(chunk) = payload.try_next().await.map_err(malformed_body)? {
        if body.len() + chunk.len() > MAX_JSON_BYTES {
            return Err(AppError::BadRequest(format!(
                "JSON body exceeds the {MAX_JSON_BYTES} byte limit"
            )));
        }
        body.extend_from_slice(&chunk);
    }

    let fields = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {e}")))?;

    Ok(BlogForm {
        fields,
        banner: None,
    })
}

async fn read_multipart(mut multipart: Multipart, max_upload_bytes: usize) -> AppResult<BlogForm> {
    let mut form = BlogForm::default();

    while let Some(mut field) = multipart.try_next().await.map_err(malformed_body)? {
        let (name, file_name) = match field.content_disposition() {
            Some(disposition) => (
                disposition.get_name().unwrap_or_default().to_string(),
                disposition.get_filename().map(str::to_string),
            ),
            None => (String::new(), None),
        };

        let limit = if file_name.is_some() {
            max_upload_bytes
        } else {
            MAX_TEXT_FIELD_BYTES
        };
        let bytes = read_field(&mut field, &name, limit).await?;
        let is_banner = BANNER_FIELDS.contains(&name.as_str());

        match (name.as_str(), file_name) {
            (_, Some(file_name)) if is_banner => {
                // Browsers send an empty part when no file was picked
                if !bytes.is_empty() {
                    form.banner = Some(BannerUpload { file_name, bytes });
                }
            }
            (_, Some(_)) => tracing::debug!(field = %name, "Ignoring unexpected file part"),
            ("title", None) => form.fields.title = Some(utf8(&name, bytes)?),
            ("content", None) => form.fields.content = Some(utf8(&name, bytes)?),
            ("category", None) => form.fields.category = Some(utf8(&name, bytes)?),
            (_, None) if is_banner => form.fields.banner_image = Some(utf8(&name, bytes)?),
            _ => {}
        }
    }

    Ok(form)
}

async fn read_field(field: &mut Field, name: &str, limit: usize) -> AppResult<Vec<u8>> {
    let mut buf = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(malformed_body)? {
        if buf.len() + chunk.len() > limit {
            return Err(AppError::BadRequest(format!(
                "Field '{name}' exceeds the {limit} byte limit"
            )));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

fn utf8(name: &str, bytes: Vec<u8>) -> AppResult<String> {
    String::from_utf8(bytes)
        .map_err(|_| AppError::BadRequest(format!("Field '{name}' must be UTF-8 text")))
}

fn malformed_body(err: impl std::fmt::Display) -> AppError {
    AppError::BadRequest(format!(
        "Expected a JSON or multipart/form-data body: {err}"
    ))
}
