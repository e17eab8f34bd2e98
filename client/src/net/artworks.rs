//! Artwork catalogue endpoints.
//!
//! Create and update are multipart: a JSON `data` part plus a binary `image`
//! part. Create requires the image at the type level; update takes it as
//! optional so an edit can keep the existing picture.

#[cfg(test)]
#[path = "artworks_test.rs"]
mod artworks_test;

use super::error::ApiError;
use super::http::ApiClient;
use super::transport::{FormPart, Method};
use super::types::{ArtCategory, Artwork, ArtworkRequest, ImageUpload};

pub const DATA_PART: &str = "data";
pub const IMAGE_PART: &str = "image";

/// Build the multipart parts for a create/update call.
///
/// # Errors
///
/// Returns [`ApiError::Encode`] if the request cannot be serialized.
pub fn artwork_form_parts(data: &ArtworkRequest, image: Option<&ImageUpload>) -> Result<Vec<FormPart>, ApiError> {
    let json = serde_json::to_vec(data).map_err(|e| ApiError::Encode(e.to_string()))?;
    let mut parts = vec![FormPart {
        name: DATA_PART.to_owned(),
        content_type: "application/json".to_owned(),
        filename: None,
        bytes: json,
    }];
    if let Some(image) = image {
        parts.push(FormPart {
            name: IMAGE_PART.to_owned(),
            content_type: image.content_type.clone(),
            filename: Some(image.filename.clone()),
            bytes: image.bytes.clone(),
        });
    }
    Ok(parts)
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn find_all(api: &ApiClient) -> Result<Vec<Artwork>, ApiError> {
    api.get_json("/artworks").await
}

/// # Errors
///
/// Propagates [`ApiError`]; a missing artwork is a 404.
pub async fn find_by_id(api: &ApiClient, id: i64) -> Result<Artwork, ApiError> {
    api.get_json(&format!("/artworks/{id}")).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn find_by_category(api: &ApiClient, category: ArtCategory) -> Result<Vec<Artwork>, ApiError> {
    api.get_json(&format!("/artworks/category/{}", category.as_str())).await
}

/// Create an artwork (owner only).
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn save(api: &ApiClient, data: &ArtworkRequest, image: &ImageUpload) -> Result<Artwork, ApiError> {
    let parts = artwork_form_parts(data, Some(image))?;
    api.send_multipart(Method::Post, "/artworks", parts).await
}

/// Update an artwork (owner only); `None` keeps the stored image.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn update(
    api: &ApiClient,
    id: i64,
    data: &ArtworkRequest,
    image: Option<&ImageUpload>,
) -> Result<Artwork, ApiError> {
    let parts = artwork_form_parts(data, image)?;
    api.send_multipart(Method::Put, &format!("/artworks/{id}"), parts).await
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn delete_by_id(api: &ApiClient, id: i64) -> Result<(), ApiError> {
    api.send_empty(Method::Delete, &format!("/artworks/{id}")).await
}

/// Category tags as the backend lists them, in its order.
///
/// Unknown tags are dropped so an older client keeps working against a newer
/// backend.
///
/// # Errors
///
/// Propagates [`ApiError`].
pub async fn categories(api: &ApiClient) -> Result<Vec<ArtCategory>, ApiError> {
    let raw: Vec<String> = api.get_json("/meta/art-categories").await?;
    Ok(raw.iter().filter_map(|tag| tag.parse().ok()).collect())
}
