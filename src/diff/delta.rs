//! Fine-grained deltas and their inverse, delta application.
//!
//! A delta is computed as `target.delta(&other)`: it describes how `target`
//! differs from `other`, so applying it to `other` reproduces `target`.

use serde::{Deserialize, Serialize};

use super::align::align;
use super::flags::{BoundingBoxDifference, ImageDifference, ImageSetDifference};
use crate::error::BoxdiffError;
use crate::model::{BoundingBox, Identifier, Image, ImageSet};

/// Numeric and label change between two versions of a bounding box.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBoxDelta {
    /// ID of the target box.
    pub id: Identifier,
    pub old_label: String,
    pub new_label: String,
    pub delta_x: f64,
    pub delta_y: f64,
    pub delta_width: f64,
    pub delta_height: f64,
}

impl BoundingBoxDelta {
    /// Returns the coarse flags this delta implies.
    pub fn difference(&self) -> BoundingBoxDifference {
        let mut flags = BoundingBoxDifference::empty();

        if self.delta_x != 0.0 || self.delta_y != 0.0 {
            flags |= BoundingBoxDifference::MOVED;
        }

        if self.delta_width != 0.0 || self.delta_height != 0.0 {
            flags |= BoundingBoxDifference::RESIZED;
        }

        if self.old_label != self.new_label {
            flags |= BoundingBoxDifference::RELABELED;
        }

        flags
    }

    /// Returns true if the delta changes nothing.
    pub fn is_empty(&self) -> bool {
        self.difference().is_empty()
    }
}

/// Structural change between two versions of an image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageDelta {
    /// ID of the target image.
    pub id: Identifier,
    /// Boxes of the other image whose ID the target lacks.
    pub boxes_added: Vec<BoundingBox>,
    /// Boxes of the target image whose ID the other lacks.
    pub boxes_removed: Vec<BoundingBox>,
    /// One delta per shared box ID, ascending by ID.
    pub box_deltas: Vec<BoundingBoxDelta>,
}

impl ImageDelta {
    /// Returns the coarse membership flags this delta implies.
    pub fn difference(&self) -> ImageDifference {
        let mut flags = ImageDifference::empty();
        if !self.boxes_added.is_empty() {
            flags |= ImageDifference::BOXES_ADDED;
        }
        if !self.boxes_removed.is_empty() {
            flags |= ImageDifference::BOXES_REMOVED;
        }
        flags
    }

    /// Returns the shared-box deltas that actually change something.
    pub fn changed_boxes(&self) -> impl Iterator<Item = &BoundingBoxDelta> {
        self.box_deltas.iter().filter(|delta| !delta.is_empty())
    }

    /// Returns true if no box was added, removed, or changed.
    pub fn is_empty(&self) -> bool {
        self.difference().is_empty() && self.changed_boxes().next().is_none()
    }
}

/// Structural change between two versions of an image set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSetDelta {
    /// ID of the target image set.
    pub id: Identifier,
    /// Images of the other set whose ID the target lacks.
    pub images_added: Vec<Image>,
    /// Images of the target set whose ID the other lacks.
    pub images_removed: Vec<Image>,
    /// One delta per shared image ID, ascending by ID.
    pub image_deltas: Vec<ImageDelta>,
}

impl ImageSetDelta {
    /// Returns the coarse membership flags this delta implies.
    pub fn difference(&self) -> ImageSetDifference {
        let mut flags = ImageSetDifference::empty();
        if !self.images_added.is_empty() {
            flags |= ImageSetDifference::IMAGES_ADDED;
        }
        if !self.images_removed.is_empty() {
            flags |= ImageSetDifference::IMAGES_REMOVED;
        }
        flags
    }

    /// Returns the shared-image deltas that actually change something.
    pub fn changed_images(&self) -> impl Iterator<Item = &ImageDelta> {
        self.image_deltas.iter().filter(|delta| !delta.is_empty())
    }

    /// Returns true if no image was added, removed, or changed.
    pub fn is_empty(&self) -> bool {
        self.difference().is_empty() && self.changed_images().next().is_none()
    }
}

impl BoundingBox {
    /// Computes how `self` differs from `other`.
    ///
    /// The result keeps `self`'s ID and holds `self - other` for every
    /// geometry field, so `other.apply(&self.delta(other))` reproduces `self`.
    pub fn delta(&self, other: &BoundingBox) -> BoundingBoxDelta {
        BoundingBoxDelta {
            id: self.id.clone(),
            old_label: other.label.clone(),
            new_label: self.label.clone(),
            delta_x: self.x - other.x,
            delta_y: self.y - other.y,
            delta_width: self.width - other.width,
            delta_height: self.height - other.height,
        }
    }

    /// Returns a new box with `delta` applied to this one.
    ///
    /// The result takes the delta's ID and new label.
    pub fn apply(&self, delta: &BoundingBoxDelta) -> BoundingBox {
        BoundingBox {
            id: delta.id.clone(),
            label: delta.new_label.clone(),
            x: self.x + delta.delta_x,
            y: self.y + delta.delta_y,
            width: self.width + delta.delta_width,
            height: self.height + delta.delta_height,
        }
    }

    /// Applies `delta` to this box in place.
    ///
    /// Unlike [`apply`](Self::apply), the receiver keeps its own ID.
    pub fn apply_in_place(&mut self, delta: &BoundingBoxDelta) -> &mut Self {
        self.label.clone_from(&delta.new_label);
        self.x += delta.delta_x;
        self.y += delta.delta_y;
        self.width += delta.delta_width;
        self.height += delta.delta_height;
        self
    }
}

impl Image {
    /// Computes how `self` differs from `other`, box by box.
    ///
    /// Shared boxes are paired by ascending ID and diffed with
    /// [`BoundingBox::delta`].
    ///
    /// # Errors
    /// Returns [`BoxdiffError::DuplicateId`] if either image repeats a box ID.
    pub fn delta(&self, other: &Image) -> Result<ImageDelta, BoxdiffError> {
        let alignment = align(&self.id, &self.bounding_boxes, &other.bounding_boxes)?;

        let box_deltas = alignment
            .pairs
            .iter()
            .map(|(target, base)| {
                tracing::trace!(image = %self.id, id = %target.id, "box delta");
                target.delta(base)
            })
            .collect();

        Ok(ImageDelta {
            id: self.id.clone(),
            boxes_added: alignment.added.into_iter().cloned().collect(),
            boxes_removed: alignment.removed.into_iter().cloned().collect(),
            box_deltas,
        })
    }
}

impl ImageSet {
    /// Computes how `self` differs from `other`, image by image.
    ///
    /// # Errors
    /// Returns [`BoxdiffError::DuplicateId`] if either set repeats an image
    /// ID, or if any paired image repeats a box ID.
    pub fn delta(&self, other: &ImageSet) -> Result<ImageSetDelta, BoxdiffError> {
        let alignment = align(&self.id, &self.images, &other.images)?;

        let image_deltas = alignment
            .pairs
            .iter()
            .map(|(target, base)| target.delta(base))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ImageSetDelta {
            id: self.id.clone(),
            images_added: alignment.added.into_iter().cloned().collect(),
            images_removed: alignment.removed.into_iter().cloned().collect(),
            image_deltas,
        })
    }
}
