use crate::db::documents::SeedFile;
use crate::router::handle;
use crate::tests::utils::{body_string, get, sample_seed, test_app};

#[test]
fn home_page_shows_featured_content() {
    let app = test_app(sample_seed());

    let resp = handle(get("/"), &app).expect("Handler failed");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("Sunny Bungalow"), "featured property missing");
    assert!(body.contains("First-Time Buyer Guide"), "featured post missing");
    assert!(!body.contains("Secret Draft"), "unpublished property leaked");
    assert!(!body.contains("Harbour Condo"), "non-featured property listed");
}

#[test]
fn empty_store_renders_empty_states() {
    let app = test_app(SeedFile::default());

    let body = body_string(handle(get("/properties"), &app).unwrap());
    assert!(body.contains("No properties found"));

    let body = body_string(handle(get("/blog"), &app).unwrap());
    assert!(body.contains("No posts found"));
}

#[test]
fn listing_applies_filters_and_titles_the_page() {
    let app = test_app(sample_seed());

    let body = body_string(handle(get("/properties"), &app).unwrap());
    assert!(body.contains("Browse Properties | Real Estate Listings"));
    assert!(body.contains("Sunny Bungalow"));
    assert!(body.contains("Harbour Condo"));
    assert!(body.contains("Ranch Estate"));
    assert!(!body.contains("Secret Draft"));

    let body = body_string(
        handle(get("/properties?type=house&status=all&price=under-500k&bedrooms=3"), &app).unwrap(),
    );
    assert!(body.contains("House Under $500,000 3+ Bedrooms | Real Estate Listings"));
    assert!(body.contains("Sunny Bungalow"));
    assert!(!body.contains("Ranch Estate"));
    assert!(!body.contains("Harbour Condo"));

    let body = body_string(handle(get("/properties?search=harbour"), &app).unwrap());
    assert!(body.contains("Harbour Condo"));
    assert!(!body.contains("Sunny Bungalow"));
}

#[test]
fn canonical_link_lists_only_active_filters() {
    let app = test_app(sample_seed());
    let body = body_string(
        handle(get("/properties?search=view&type=all&city=Austin"), &app).unwrap(),
    );
    assert!(body.contains(r#"rel="canonical" href="/properties?city=Austin&amp;search=view""#));
}

#[test]
fn property_detail_renders_normalized_record() {
    let app = test_app(sample_seed());

    let resp = handle(get("/properties/sunny-bungalow"), &app).unwrap();
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("1 Main St, Austin, CA, 90000, USA"));
    assert!(body.contains("$450,000"));
    assert!(body.contains("/api/media/front.jpg"));
    assert!(body.contains("Garage"));
}

#[test]
fn unknown_or_unpublished_slugs_are_not_found() {
    let app = test_app(sample_seed());

    for uri in ["/properties/secret-draft", "/properties/nope", "/blog/unpublished-thoughts", "/nowhere"] {
        let err = handle(get(uri), &app).unwrap_err();
        assert_eq!(err.status_code(), 404, "{uri}");
    }
}

#[test]
fn blog_post_flattens_rich_text() {
    let app = test_app(sample_seed());

    let body = body_string(handle(get("/blog/first-time-buyer-guide"), &app).unwrap());
    assert!(body.contains("<p><strong>Rates &amp; fees</strong></p>"));
    assert!(body.contains("Jordan Lee"));
    assert!(body.contains("Guides"));
    assert!(body.contains("#buying"));
}
