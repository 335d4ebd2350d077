use proptest::prelude::*;

mod proptest_helpers;

proptest! {
    #![proptest_config(proptest_helpers::proptest_config())]

    #[test]
    fn iou_with_self_is_one(bbox in proptest_helpers::arb_box()) {
        prop_assert_eq!(bbox.iou(&bbox), 1.0);
    }

    #[test]
    fn iou_is_symmetric_and_bounded(a in proptest_helpers::arb_box(), b in proptest_helpers::arb_box()) {
        let ab = a.iou(&b);
        prop_assert_eq!(ab, b.iou(&a));
        prop_assert!((0.0..=1.0).contains(&ab), "iou out of range: {}", ab);
    }

    #[test]
    fn degenerate_boxes_stay_in_unit_range(
        a in proptest_helpers::arb_degenerate_box(),
        b in proptest_helpers::arb_degenerate_box(),
    ) {
        let ab = a.iou(&b);
        prop_assert!((0.0..=1.0).contains(&ab), "iou out of range: {}", ab);
        prop_assert!(!ab.is_sign_negative(), "negative zero iou for {:?} and {:?}", a, b);
        prop_assert_eq!(ab, b.iou(&a));
    }

    #[test]
    fn disjoint_boxes_have_zero_iou(a in proptest_helpers::arb_box(), b in proptest_helpers::arb_box()) {
        let mut shifted = b.clone();
        shifted.x = a.right() + 1.0;
        prop_assert_eq!(a.iou(&shifted), 0.0);
    }
}
