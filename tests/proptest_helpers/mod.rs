#![allow(dead_code)]

use boxdiff::model::{BoundingBox, Identifier, Image, ImageSet};
use proptest::prelude::*;
use proptest::test_runner::{Config as ProptestConfig, FileFailurePersistence};

pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(64);

    let mut config = ProptestConfig::with_failure_persistence(FileFailurePersistence::WithSource(
        "proptest-regressions",
    ));
    config.cases = cases;
    config.max_shrink_iters = 1024;
    config
}

/// Any identifier kind, including strings that look like nothing else.
pub fn arb_identifier() -> impl Strategy<Value = Identifier> {
    prop_oneof![
        any::<i64>().prop_map(Identifier::Integer),
        any::<u128>().prop_map(|bits| Identifier::Uuid(uuid::Uuid::from_u128(bits))),
        "[a-z][a-z0-9_-]{0,12}".prop_map(Identifier::String),
    ]
}

/// Coordinates on a 1/8 grid so that `a + (b - a) == b` holds exactly.
pub fn arb_coord() -> impl Strategy<Value = f64> {
    (-8000i32..8000).prop_map(|v| v as f64 / 8.0)
}

pub fn arb_extent() -> impl Strategy<Value = f64> {
    (1i32..4000).prop_map(|v| v as f64 / 8.0)
}

/// Extents of either sign, including zero.
pub fn arb_signed_extent() -> impl Strategy<Value = f64> {
    (-4000i32..4000).prop_map(|v| v as f64 / 8.0)
}

pub fn arb_label() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cat".to_string()),
        Just("dog".to_string()),
        Just("person".to_string()),
        "[a-z]{1,8}",
    ]
}

pub fn arb_box_with_id(id: Identifier) -> impl Strategy<Value = BoundingBox> {
    (arb_label(), arb_coord(), arb_coord(), arb_extent(), arb_extent()).prop_map(
        move |(label, x, y, width, height)| BoundingBox {
            id: id.clone(),
            label,
            x,
            y,
            width,
            height,
        },
    )
}

pub fn arb_box() -> impl Strategy<Value = BoundingBox> {
    arb_identifier().prop_flat_map(arb_box_with_id)
}

/// A box whose width and height may be zero or negative.
pub fn arb_degenerate_box() -> impl Strategy<Value = BoundingBox> {
    (
        arb_coord(),
        arb_coord(),
        arb_signed_extent(),
        arb_signed_extent(),
    )
        .prop_map(|(x, y, width, height)| BoundingBox::new(1, "box", x, y, width, height))
}

/// An image whose box IDs are unique, drawn from a small integer pool so
/// that two generated images usually share some IDs.
pub fn arb_image(max_boxes: usize) -> impl Strategy<Value = Image> {
    (
        arb_identifier(),
        proptest::collection::btree_set(0i64..(max_boxes as i64 * 2), 0..=max_boxes),
    )
        .prop_flat_map(|(id, box_ids)| {
            let boxes: Vec<_> = box_ids
                .into_iter()
                .map(|box_id| arb_box_with_id(Identifier::Integer(box_id)))
                .collect();
            (Just(id), boxes)
        })
        .prop_flat_map(|(id, boxes)| (Just(id), Just(boxes).prop_shuffle()))
        .prop_map(|(id, bounding_boxes)| Image { id, bounding_boxes })
}

/// An image set with unique image IDs and unique box IDs per image.
pub fn arb_image_set(max_images: usize, max_boxes: usize) -> impl Strategy<Value = ImageSet> {
    (
        arb_identifier(),
        proptest::collection::btree_set(arb_identifier(), 0..=max_images),
    )
        .prop_flat_map(move |(id, image_ids)| {
            let images: Vec<_> = image_ids
                .into_iter()
                .map(|image_id| {
                    arb_image(max_boxes).prop_map(move |mut image| {
                        image.id = image_id.clone();
                        image
                    })
                })
                .collect();
            (Just(id), images)
        })
        .prop_map(|(id, images)| ImageSet { id, images })
}
