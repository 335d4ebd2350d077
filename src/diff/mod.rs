//! Coarse diffs and fine-grained deltas between entity versions.
//!
//! Two kinds of comparison are offered at every level:
//!
//! - **Coarse diff** ([`bounding_box_diff`], [`image_diff`],
//!   [`image_set_diff`]): cheap boolean flags saying *what kind* of change
//!   occurred between an old and a new version.
//! - **Delta** ([`BoundingBox::delta`], [`Image::delta`], [`ImageSet::delta`]):
//!   the full structural difference, with numeric box deltas that can be
//!   re-applied with [`BoundingBox::apply`].
//!
//! Entities are matched purely by [`Identifier`](crate::model::Identifier).
//! Shared children are paired by sorting both sides by identifier.

mod align;
mod delta;
mod flags;
mod report;

pub use delta::{BoundingBoxDelta, ImageDelta, ImageSetDelta};
pub use flags::{flag_names, BoundingBoxDifference, ImageDifference, ImageSetDifference};

use std::collections::HashSet;

use crate::model::{BoundingBox, Identifier, Image, ImageSet};

/// Compares an old and a new version of a bounding box.
///
/// Floats are compared exactly, without tolerance.
pub fn bounding_box_diff(old: &BoundingBox, new: &BoundingBox) -> BoundingBoxDifference {
    let mut flags = BoundingBoxDifference::empty();

    if new.x != old.x || new.y != old.y {
        flags |= BoundingBoxDifference::MOVED;
    }

    if new.width != old.width || new.height != old.height {
        flags |= BoundingBoxDifference::RESIZED;
    }

    if new.label != old.label {
        flags |= BoundingBoxDifference::RELABELED;
    }

    flags
}

/// Compares the box-ID sets of an old and a new version of an image.
pub fn image_diff(old: &Image, new: &Image) -> ImageDifference {
    let (added, removed) = membership_changes(&old.box_ids(), &new.box_ids());

    let mut flags = ImageDifference::empty();
    if added {
        flags |= ImageDifference::BOXES_ADDED;
    }
    if removed {
        flags |= ImageDifference::BOXES_REMOVED;
    }
    flags
}

/// Compares the image-ID sets of an old and a new version of an image set.
pub fn image_set_diff(old: &ImageSet, new: &ImageSet) -> ImageSetDifference {
    let (added, removed) = membership_changes(&old.image_ids(), &new.image_ids());

    let mut flags = ImageSetDifference::empty();
    if added {
        flags |= ImageSetDifference::IMAGES_ADDED;
    }
    if removed {
        flags |= ImageSetDifference::IMAGES_REMOVED;
    }
    flags
}

/// Returns `(new has IDs old lacks, old has IDs new lacks)`.
fn membership_changes(old: &HashSet<&Identifier>, new: &HashSet<&Identifier>) -> (bool, bool) {
    let added = !new.is_subset(old);
    let removed = !old.is_subset(new);
    (added, removed)
}
