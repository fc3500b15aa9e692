//! Integration tests for the entity views.
//!
//! These tests feed realistic item and review records through the public
//! API and verify field access, coercion and the image helpers.

use serde_json::{json, Value};
use walmart_api::{
    ConfigError, Dimensions, ImageSize, InvalidParameterError, LinkShareId, Product, ProductReview,
    StockStatus,
};

/// An item record shaped like a lookup response with rich attributes.
fn ipod_record() -> Value {
    json!({
        "itemId": 42608121,
        "parentItemId": 42608121,
        "name": "Apple iPod touch 32GB &amp; Case",
        "msrp": 249.0,
        "salePrice": 199.0,
        "upc": "888462353151",
        "categoryPath": "Electronics/iPods &amp; MP3 Players/iPod touch",
        "shortDescription": "The &quot;thinnest&quot; iPod ever",
        "longDescription": "&lt;p&gt;Bigger display&lt;/p&gt;",
        "brandName": "Apple",
        "thumbnailImage": "https://i5.walmartimages.com/t.jpeg",
        "mediumImage": "https://i5.walmartimages.com/m.jpeg",
        "largeImage": "https://i5.walmartimages.com/l.jpeg",
        "productTrackingUrl": "http://linksynergy.walmart.com/fs-bin/click?id=|LSNID|&offerid=223073.7200&type=14",
        "color": "Space Gray",
        "modelNumber": "MKJ02LL/A",
        "productUrl": "http://c.affil.walmart.com/t/api01?l=http%3A%2F%2Fwww.walmart.com%2Fip%2F42608121",
        "customerRating": "4.5",
        "numReviews": 129,
        "availableOnline": true,
        "stock": "Available",
        "weight": "0.55",
        "dimensions": "4.86 x 2.31 x 0.24",
        "imageEntities": [
            {
                "thumbnailImage": "https://i5.walmartimages.com/side-t.jpeg",
                "mediumImage": "https://i5.walmartimages.com/side-m.jpeg",
                "largeImage": "https://i5.walmartimages.com/side-l.jpeg",
                "entityType": "SECONDARY"
            },
            {
                "thumbnailImage": "https://i5.walmartimages.com/front-t.jpeg",
                "mediumImage": "https://i5.walmartimages.com/front-m.jpeg",
                "largeImage": "https://i5.walmartimages.com/front-l.jpeg",
                "entityType": "PRIMARY"
            },
            {
                "thumbnailImage": "https://i5.walmartimages.com/back-t.jpeg",
                "largeImage": "https://i5.walmartimages.com/back-l.jpeg",
                "entityType": "SECONDARY"
            }
        ]
    })
}

fn product(value: Value, link_share_id: Option<&str>) -> Product {
    Product::from_value(value, link_share_id.map(|id| LinkShareId::new(id).unwrap())).unwrap()
}

#[test]
fn test_full_record_accessors() {
    let product = product(ipod_record(), Some("LS42"));

    assert_eq!(product.item_id().as_deref(), Some("42608121"));
    assert_eq!(product.parent_item_id().as_deref(), Some("42608121"));
    assert_eq!(
        product.name().as_deref(),
        Some("Apple iPod touch 32GB & Case")
    );
    assert_eq!(product.msrp().unwrap(), Some(249.0));
    assert_eq!(product.sale_price().unwrap(), Some(199.0));
    assert_eq!(product.upc().as_deref(), Some("888462353151"));
    assert_eq!(product.brand_name().as_deref(), Some("Apple"));
    assert_eq!(product.color().as_deref(), Some("Space Gray"));
    assert_eq!(product.model_number().as_deref(), Some("MKJ02LL/A"));
    assert_eq!(product.customer_rating().unwrap(), Some(4.5));
    assert_eq!(product.num_reviews().unwrap(), Some(129));
    assert_eq!(product.available_online().unwrap(), Some(true));
    assert_eq!(product.stock().unwrap(), Some(StockStatus::Available));
    assert_eq!(product.weight().unwrap(), Some(0.55));
    assert!(product.size().is_none());
    assert!(product.category_node().is_none());
}

#[test]
fn test_descriptions_are_unescaped_and_distinct() {
    let product = product(ipod_record(), None);

    assert_eq!(
        product.short_description().as_deref(),
        Some("The \"thinnest\" iPod ever")
    );
    assert_eq!(
        product.long_description().as_deref(),
        Some("<p>Bigger display</p>")
    );
}

#[test]
fn test_dimensions_split_into_components() {
    let product = product(ipod_record(), None);

    assert_eq!(
        product.dimensions().unwrap(),
        Some(Dimensions {
            length: 4.86,
            width: 2.31,
            height: 0.24
        })
    );
    assert_eq!(product.length().unwrap(), Some(4.86));
    assert_eq!(product.width().unwrap(), Some(2.31));
    assert_eq!(product.height().unwrap(), Some(0.24));
}

#[test]
fn test_malformed_dimensions_fail_instead_of_guessing() {
    for raw in ["4.86 x 2.31", "a x b x c", "1 x 2 x 3 x 4"] {
        let product = product(json!({"dimensions": raw}), None);
        assert!(product.dimensions().is_err(), "accepted {raw:?}");
        assert!(product.height().is_err());
    }
}

#[test]
fn test_images_put_primary_first() {
    let product = product(ipod_record(), None);

    assert_eq!(
        product.images(),
        Some(vec![
            "https://i5.walmartimages.com/front-l.jpeg".to_string(),
            "https://i5.walmartimages.com/side-l.jpeg".to_string(),
            "https://i5.walmartimages.com/back-l.jpeg".to_string(),
        ])
    );

    // the back image has no medium rendition
    assert_eq!(
        product.images_by_size(ImageSize::Medium),
        Some(vec![
            "https://i5.walmartimages.com/front-m.jpeg".to_string(),
            "https://i5.walmartimages.com/side-m.jpeg".to_string(),
        ])
    );
}

#[test]
fn test_images_skip_empty_primary_url() {
    let product = product(
        json!({
            "imageEntities": [
                {"entityType": "SECONDARY", "largeImage": "https://i5.walmartimages.com/side-l.jpeg"},
                {"entityType": "PRIMARY", "largeImage": ""},
                {"entityType": "SECONDARY", "largeImage": "https://i5.walmartimages.com/back-l.jpeg"}
            ]
        }),
        None,
    );

    assert_eq!(
        product.images(),
        Some(vec![
            "https://i5.walmartimages.com/side-l.jpeg".to_string(),
            "https://i5.walmartimages.com/back-l.jpeg".to_string(),
        ])
    );
}

#[test]
fn test_images_by_size_name() {
    let product = product(ipod_record(), None);

    let thumbnails = product.get_images_by_size("thumbnail").unwrap().unwrap();
    assert_eq!(thumbnails[0], "https://i5.walmartimages.com/front-t.jpeg");
    assert_eq!(thumbnails.len(), 3);

    assert!(matches!(
        product.get_images_by_size("huge"),
        Err(InvalidParameterError::InvalidImageSize { .. })
    ));
}

#[test]
fn test_images_absent_without_entities() {
    let product = product(json!({"itemId": 1, "imageEntities": []}), None);
    assert!(product.images().is_none());
    assert_eq!(product.get_images_by_size("large").unwrap(), None);

    let product = self::product(json!({"itemId": 1}), None);
    assert!(product.images().is_none());
}

#[test]
fn test_tracking_url_substitutes_link_share_id() {
    let product = product(ipod_record(), Some("LS42"));
    assert_eq!(
        product.product_tracking_url().unwrap().as_deref(),
        Some("http://linksynergy.walmart.com/fs-bin/click?id=LS42&offerid=223073.7200&type=14")
    );
}

#[test]
fn test_tracking_url_requires_link_share_id() {
    let product = product(ipod_record(), None);
    assert!(matches!(
        product.product_tracking_url(),
        Err(ConfigError::MissingLinkShareId)
    ));

    // configured id but no tracking URL in the record
    let product = self::product(json!({"itemId": 1}), Some("LS42"));
    assert_eq!(product.product_tracking_url().unwrap(), None);
}

#[test]
fn test_stock_states() {
    let cases = [
        ("Available", StockStatus::Available, true),
        ("Limited Supply", StockStatus::LimitedSupply, true),
        ("Last few items", StockStatus::LastFewItems, true),
        ("Not available", StockStatus::NotAvailable, false),
    ];
    for (raw, expected, available) in cases {
        let product = product(json!({"stock": raw}), None);
        let stock = product.stock().unwrap().unwrap();
        assert_eq!(stock, expected);
        assert_eq!(stock.is_available(), available);
        assert_eq!(stock.to_string(), raw);
    }

    let product = product(json!({"stock": "Backordered"}), None);
    assert!(product.stock().is_err());
}

#[test]
fn test_get_attribute_reads_any_field() {
    let product = product(ipod_record(), None);
    assert_eq!(
        product.get_attribute("color").as_deref(),
        Some("Space Gray")
    );
    assert_eq!(product.get_attribute("numReviews").as_deref(), Some("129"));
    assert!(product.get_attribute("clearance").is_none());
}

#[test]
fn test_non_object_values_have_no_view() {
    assert!(Product::from_value(json!([]), None).is_none());
    assert!(Product::from_value(json!("item"), None).is_none());
    assert!(ProductReview::from_value(json!(5)).is_none());
}

#[test]
fn test_review_record() {
    let review = ProductReview::from_value(json!({
        "name": "Apple iPod touch",
        "overallRating": {"label": "Overall", "rating": "4"},
        "reviewer": "Gadgeteer",
        "reviewText": "Sound is great &amp; battery lasts",
        "submissionTime": "2015-11-02T08:30:00",
        "title": "Worth it",
        "upVotes": 10,
        "downVotes": 2
    }))
    .unwrap();

    assert_eq!(review.reviewer().as_deref(), Some("Gadgeteer"));
    assert_eq!(
        review.review().as_deref(),
        Some("Sound is great & battery lasts")
    );
    assert_eq!(review.date().as_deref(), Some("2015-11-02T08:30:00"));
    assert!(review.submitted_at().unwrap().is_some());
    assert_eq!(review.title().as_deref(), Some("Worth it"));
    assert_eq!(review.rating().unwrap(), Some(4));
    assert_eq!(review.up_votes().unwrap(), Some(10));
    assert_eq!(review.down_votes().unwrap(), Some(2));
}
