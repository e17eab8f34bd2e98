use std::sync::Arc;

use async_trait::async_trait;
use futures::executor::block_on;

use super::*;
use crate::net::test_support::{self, url};
use crate::net::transport::{ApiRequest, ApiResponse, RequestBody, Transport};
use crate::state::session::SessionStore;
use crate::util::storage::MemoryStorage;

// =============================================================
// Helpers
// =============================================================

fn artwork(id: i64, category: ArtCategory) -> Artwork {
    Artwork {
        id,
        title: format!("Piece {id}"),
        description: "oil on canvas".to_owned(),
        category,
        label: None,
        price: 100.0,
        img_url: None,
    }
}

fn request() -> ArtworkRequest {
    ArtworkRequest {
        title: "Dawn".to_owned(),
        description: "oil".to_owned(),
        category: ArtCategory::Painting,
        label: None,
        price: 250.0,
    }
}

fn image() -> ImageUpload {
    ImageUpload {
        filename: "dawn.png".to_owned(),
        content_type: "image/png".to_owned(),
        bytes: vec![0x89, b'P', b'N', b'G'],
    }
}

/// Backend stand-in that serves a fixed catalogue and filters by category path.
struct Catalogue {
    items: Vec<Artwork>,
}

#[async_trait(?Send)]
impl Transport for Catalogue {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let path = request.url.trim_start_matches(test_support::BASE);
        let selected: Vec<&Artwork> = match path.strip_prefix("/artworks/category/") {
            Some(tag) => {
                let category: ArtCategory = tag.parse().map_err(|_| ApiError::from_status(400, ""))?;
                self.items.iter().filter(|a| a.category == category).collect()
            }
            None => self.items.iter().collect(),
        };
        Ok(ApiResponse { status: 200, body: serde_json::to_string(&selected).unwrap() })
    }
}

fn catalogue_client() -> ApiClient {
    let items = vec![
        artwork(1, ArtCategory::Painting),
        artwork(2, ArtCategory::Sculpture),
        artwork(3, ArtCategory::Painting),
        artwork(4, ArtCategory::Other),
    ];
    let session = SessionStore::new(Arc::new(MemoryStorage::new()));
    ApiClient::new(test_support::BASE, Arc::new(Catalogue { items }), session)
}

// =============================================================
// Queries
// =============================================================

#[test]
fn find_by_category_returns_only_that_category() {
    let api = catalogue_client();
    let paintings = block_on(find_by_category(&api, ArtCategory::Painting)).unwrap();
    assert_eq!(paintings.iter().map(|a| a.id).collect::<Vec<_>>(), vec![1, 3]);
    assert!(paintings.iter().all(|a| a.category == ArtCategory::Painting));

    let none = block_on(find_by_category(&api, ArtCategory::Craft)).unwrap();
    assert!(none.is_empty());
}

#[test]
fn find_all_returns_whole_catalogue() {
    let api = catalogue_client();
    assert_eq!(block_on(find_all(&api)).unwrap().len(), 4);
}

#[test]
fn category_path_uses_wire_tag() {
    let (stub, api) = test_support::client();
    stub.respond(200, "[]");
    block_on(find_by_category(&api, ArtCategory::DigitalArt)).unwrap();
    assert_eq!(stub.last().url, url("/artworks/category/DIGITAL_ART"));
}

#[test]
fn categories_skip_unknown_tags() {
    let (stub, api) = test_support::client();
    stub.respond(200, r#"["PAINTING","HOLOGRAM","OTHER"]"#);
    let got = block_on(categories(&api)).unwrap();
    assert_eq!(got, vec![ArtCategory::Painting, ArtCategory::Other]);
    assert_eq!(stub.last().url, url("/meta/art-categories"));
}

#[test]
fn find_by_id_404_is_not_found() {
    let (stub, api) = test_support::client();
    stub.respond(404, r#"{"status":404,"message":"Artwork not found"}"#);
    let err = block_on(find_by_id(&api, 77)).unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(stub.last().url, url("/artworks/77"));
}

// =============================================================
// Multipart
// =============================================================

#[test]
fn form_parts_carry_data_and_image() {
    let parts = artwork_form_parts(&request(), Some(&image())).unwrap();
    assert_eq!(parts.len(), 2);

    assert_eq!(parts[0].name, DATA_PART);
    assert_eq!(parts[0].content_type, "application/json");
    assert_eq!(parts[0].filename, None);
    let data: serde_json::Value = serde_json::from_slice(&parts[0].bytes).unwrap();
    assert_eq!(data["title"], "Dawn");
    assert_eq!(data["category"], "PAINTING");

    assert_eq!(parts[1].name, IMAGE_PART);
    assert_eq!(parts[1].content_type, "image/png");
    assert_eq!(parts[1].filename.as_deref(), Some("dawn.png"));
    assert_eq!(parts[1].bytes, image().bytes);
}

#[test]
fn form_parts_without_image_has_only_data() {
    let parts = artwork_form_parts(&request(), None).unwrap();
    assert_eq!(parts.len(), 1);
    assert_eq!(parts[0].name, DATA_PART);
}

#[test]
fn save_posts_multipart() {
    let (stub, api) = test_support::client();
    stub.respond(201, &serde_json::to_string(&artwork(9, ArtCategory::Painting)).unwrap());

    let saved = block_on(save(&api, &request(), &image())).unwrap();
    assert_eq!(saved.id, 9);
    let req = stub.last();
    assert_eq!(req.method, Method::Post);
    assert_eq!(req.url, url("/artworks"));
    assert!(matches!(req.body, RequestBody::Multipart(ref parts) if parts.len() == 2));
}

#[test]
fn update_without_image_puts_data_only() {
    let (stub, api) = test_support::client();
    stub.respond(200, &serde_json::to_string(&artwork(5, ArtCategory::Painting)).unwrap());

    block_on(update(&api, 5, &request(), None)).unwrap();
    let req = stub.last();
    assert_eq!(req.method, Method::Put);
    assert_eq!(req.url, url("/artworks/5"));
    assert!(matches!(req.body, RequestBody::Multipart(ref parts) if parts.len() == 1));
}

#[test]
fn double_submit_reaches_backend_twice() {
    let (stub, api) = test_support::client();
    let body = serde_json::to_string(&artwork(9, ArtCategory::Painting)).unwrap();
    stub.respond(201, &body);
    stub.respond(201, &body);

    block_on(save(&api, &request(), &image())).unwrap();
    block_on(save(&api, &request(), &image())).unwrap();
    assert_eq!(stub.count(), 2);
}
