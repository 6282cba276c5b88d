use postersession_core::{decode_area, encode_area, PosterSessionArea, WireError};
use std::error::Error;

#[test]
fn new_area_generates_identity_and_starts_without_stars() {
    let first = PosterSessionArea::new("poster", "https://example.org/p.png");
    let second = PosterSessionArea::new("poster", "https://example.org/p.png");

    assert!(!first.id.is_empty());
    assert_ne!(first.id, second.id);
    assert_eq!(first.stars, 0);
    assert_eq!(first.title, "poster");
}

#[test]
fn decode_reads_generated_client_payload() {
    let area = decode_area(r#"{"id":"a","title":"x","imageContents":"aGVsbG8=","stars":5}"#)
        .expect("payload should decode");

    assert_eq!(
        area,
        PosterSessionArea::with_id("a", "x", "aGVsbG8=").with_stars(5)
    );
}

#[test]
fn decode_rejects_missing_fields() {
    let err = decode_area(r#"{"id":"a","title":"x","stars":5}"#)
        .expect_err("imageContents is required");

    assert!(matches!(err, WireError::Malformed(_)));
    assert!(err.source().is_some());
    assert!(err.to_string().contains("imageContents"));
}

#[test]
fn encoded_area_decodes_to_same_record() {
    let area = PosterSessionArea::with_id("poster-7", "Rust at scale", "").with_stars(12);
    let json = encode_area(&area).expect("area should encode");

    assert_eq!(decode_area(&json).expect("area should decode"), area);
}
