//! Artwork create/update form model.
//!
//! Validation runs entirely client-side and short-circuits before any request
//! is built: a create without an image never reaches the network.

#[cfg(test)]
#[path = "artwork_form_test.rs"]
mod artwork_form_test;

use crate::net::artworks;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{ArtCategory, Artwork, ArtworkRequest, ImageUpload};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArtworkFormMode {
    Create,
    Update { id: i64, image_url: Option<String> },
}

impl ArtworkFormMode {
    pub fn for_artwork(artwork: Option<&Artwork>) -> Self {
        match artwork {
            Some(a) => Self::Update { id: a.id, image_url: a.img_url.clone() },
            None => Self::Create,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Create Artwork",
            Self::Update { .. } => "Update Artwork",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            Self::Create => "Create",
            Self::Update { .. } => "Update",
        }
    }
}

/// Raw form input. Price stays text until validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtworkDraft {
    pub title: String,
    pub description: String,
    pub category: ArtCategory,
    pub price: String,
    pub label: String,
}

impl Default for ArtworkDraft {
    fn default() -> Self {
        Self::blank()
    }
}

impl ArtworkDraft {
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: ArtCategory::Other,
            price: "0".to_owned(),
            label: String::new(),
        }
    }

    pub fn from_artwork(artwork: &Artwork) -> Self {
        Self {
            title: artwork.title.clone(),
            description: artwork.description.clone(),
            category: artwork.category,
            price: artwork.price.to_string(),
            label: artwork.label.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ArtworkFormError {
    #[error("{0} is required.")]
    MissingField(&'static str),
    #[error("Price must be a non-negative number.")]
    InvalidPrice,
    #[error("Choose an image for the new artwork.")]
    ImageRequired,
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Check the draft and build the JSON part of the request.
///
/// # Errors
///
/// Returns the first failing rule; `ImageRequired` only in create mode.
pub fn validate(
    mode: &ArtworkFormMode,
    draft: &ArtworkDraft,
    image: Option<&ImageUpload>,
) -> Result<ArtworkRequest, ArtworkFormError> {
    let title = draft.title.trim();
    if title.is_empty() {
        return Err(ArtworkFormError::MissingField("Title"));
    }
    let description = draft.description.trim();
    if description.is_empty() {
        return Err(ArtworkFormError::MissingField("Description"));
    }
    let price: f64 = draft.price.trim().parse().map_err(|_| ArtworkFormError::InvalidPrice)?;
    if !price.is_finite() || price < 0.0 {
        return Err(ArtworkFormError::InvalidPrice);
    }
    if *mode == ArtworkFormMode::Create && image.is_none() {
        return Err(ArtworkFormError::ImageRequired);
    }
    let label = draft.label.trim();
    Ok(ArtworkRequest {
        title: title.to_owned(),
        description: description.to_owned(),
        category: draft.category,
        label: (!label.is_empty()).then(|| label.to_owned()),
        price,
    })
}

/// Validate, then create or update.
///
/// # Errors
///
/// Validation errors are returned before any request is sent; backend
/// failures come back as [`ArtworkFormError::Api`].
pub async fn submit(
    api: &ApiClient,
    mode: &ArtworkFormMode,
    draft: &ArtworkDraft,
    image: Option<&ImageUpload>,
) -> Result<Artwork, ArtworkFormError> {
    let request = validate(mode, draft, image)?;
    let saved = match (mode, image) {
        (ArtworkFormMode::Create, Some(image)) => artworks::save(api, &request, image).await?,
        (ArtworkFormMode::Create, None) => return Err(ArtworkFormError::ImageRequired),
        (ArtworkFormMode::Update { id, .. }, image) => artworks::update(api, *id, &request, image).await?,
    };
    Ok(saved)
}
