use boxdiff::diff::{bounding_box_diff, image_diff, image_set_diff, ImageDifference};
use boxdiff::model::{BoundingBox, Image};
use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn apply_inverts_box_delta(
        (p, q) in proptest_helpers::arb_identifier().prop_flat_map(|id| {
            (
                proptest_helpers::arb_box_with_id(id.clone()),
                proptest_helpers::arb_box_with_id(id),
            )
        })
    ) {
        let delta = p.delta(&q);
        prop_assert_eq!(q.apply(&delta), p.clone());

        let mut in_place = q.clone();
        in_place.apply_in_place(&delta);
        prop_assert_eq!(in_place, p);
    }

    #[test]
    fn delta_flags_match_coarse_diff(old in proptest_helpers::arb_box(), new in proptest_helpers::arb_box()) {
        prop_assert_eq!(new.delta(&old).difference(), bounding_box_diff(&old, &new));
    }

    #[test]
    fn self_delta_is_empty(set in proptest_helpers::arb_image_set(4, 6)) {
        let delta = set.delta(&set).expect("unique ids");
        prop_assert!(delta.is_empty());
        prop_assert!(image_set_diff(&set, &set).is_empty());
    }

    #[test]
    fn image_delta_partitions_every_box(
        old in proptest_helpers::arb_image(8),
        new in proptest_helpers::arb_image(8),
    ) {
        let delta = old.delta(&new).expect("unique ids");

        prop_assert_eq!(
            delta.boxes_removed.len() + delta.box_deltas.len(),
            old.bounding_boxes.len()
        );
        prop_assert_eq!(
            delta.boxes_added.len() + delta.box_deltas.len(),
            new.bounding_boxes.len()
        );
        prop_assert_eq!(delta.difference(), image_diff(&old, &new));

        let ids: Vec<_> = delta.box_deltas.iter().map(|d| d.id.clone()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        prop_assert_eq!(ids, sorted);
    }

    #[test]
    fn coarse_image_flags_follow_subsets(
        old in proptest_helpers::arb_image(6),
        new in proptest_helpers::arb_image(6),
    ) {
        let old_ids = old.box_ids();
        let new_ids = new.box_ids();
        let flags = image_diff(&old, &new);

        prop_assert_eq!(
            flags.contains(ImageDifference::BOXES_ADDED),
            !new_ids.is_subset(&old_ids)
        );
        prop_assert_eq!(
            flags.contains(ImageDifference::BOXES_REMOVED),
            !old_ids.is_subset(&new_ids)
        );
    }

    #[test]
    fn alignment_ignores_box_order(
        (old, new, reordered) in (
            proptest_helpers::arb_image(8),
            proptest_helpers::arb_image(8),
        )
            .prop_flat_map(|(old, new)| {
                let boxes = new.bounding_boxes.clone();
                (Just(old), Just(new), Just(boxes).prop_shuffle())
            })
    ) {
        let shuffled = Image {
            id: new.id.clone(),
            bounding_boxes: reordered,
        };

        let expected = old.delta(&new).expect("unique ids");
        let actual = old.delta(&shuffled).expect("unique ids");
        prop_assert_eq!(expected.box_deltas, actual.box_deltas);
    }

    #[test]
    fn image_set_delta_recurses_into_shared_images(
        old in proptest_helpers::arb_image_set(4, 5),
        new in proptest_helpers::arb_image_set(4, 5),
    ) {
        let delta = new.delta(&old).expect("unique ids");

        for image_delta in &delta.image_deltas {
            let target: &Image = new.images.iter().find(|i| i.id == image_delta.id).expect("target image");
            let base: &Image = old.images.iter().find(|i| i.id == image_delta.id).expect("base image");
            prop_assert_eq!(image_delta, &target.delta(base).expect("unique ids"));
        }
        prop_assert_eq!(
            delta.images_added.len() + delta.image_deltas.len(),
            old.images.len()
        );
    }
}

#[test]
fn zero_delta_keeps_any_box() {
    let bbox = BoundingBox::new(5, "cat", -3.25, 7.5, 0.0, -2.0);
    assert_eq!(bbox.apply(&bbox.delta(&bbox)), bbox);
}
