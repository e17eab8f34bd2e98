use futures::executor::block_on;

use super::*;
use crate::net::test_support::{self, url};

#[test]
fn tabs_start_with_all() {
    let got = tabs(&[ArtCategory::Painting, ArtCategory::Print]);
    assert_eq!(
        got,
        vec![
            FeedFilter::All,
            FeedFilter::Category(ArtCategory::Painting),
            FeedFilter::Category(ArtCategory::Print),
        ]
    );
    assert_eq!(tabs(&[]), vec![FeedFilter::All]);
}

#[test]
fn labels_round_trip_through_tab_text() {
    assert_eq!(FeedFilter::All.label(), "ALL");
    assert_eq!(FeedFilter::Category(ArtCategory::MixedMedia).label(), "MIXED_MEDIA");
    assert_eq!(FeedFilter::from_label("ALL"), Some(FeedFilter::All));
    assert_eq!(
        FeedFilter::from_label("MIXED_MEDIA"),
        Some(FeedFilter::Category(ArtCategory::MixedMedia))
    );
    assert_eq!(FeedFilter::from_label("Paintings"), None);
}

#[test]
fn load_dispatches_on_filter() {
    let (stub, api) = test_support::client();
    stub.respond(200, "[]");
    stub.respond(200, "[]");

    block_on(load(&api, FeedFilter::All)).unwrap();
    assert_eq!(stub.last().url, url("/artworks"));

    block_on(load(&api, FeedFilter::Category(ArtCategory::Sculpture))).unwrap();
    assert_eq!(stub.last().url, url("/artworks/category/SCULPTURE"));
}
