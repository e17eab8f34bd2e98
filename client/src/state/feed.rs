//! Feed filter tabs: `ALL` followed by the backend's category list.

#[cfg(test)]
#[path = "feed_test.rs"]
mod feed_test;

use crate::net::artworks;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{ArtCategory, Artwork};

pub const ALL_LABEL: &str = "ALL";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FeedFilter {
    #[default]
    All,
    Category(ArtCategory),
}

impl FeedFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Category(c) => c.as_str(),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        if label == ALL_LABEL {
            return Some(Self::All);
        }
        label.parse().ok().map(Self::Category)
    }
}

/// Tab order shown above the feed.
pub fn tabs(categories: &[ArtCategory]) -> Vec<FeedFilter> {
    std::iter::once(FeedFilter::All)
        .chain(categories.iter().copied().map(FeedFilter::Category))
        .collect()
}

/// # Errors
///
/// Propagates [`ApiError`].
pub async fn load(api: &ApiClient, filter: FeedFilter) -> Result<Vec<Artwork>, ApiError> {
    match filter {
        FeedFilter::All => artworks::find_all(api).await,
        FeedFilter::Category(category) => artworks::find_by_category(api, category).await,
    }
}
