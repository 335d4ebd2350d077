//! Images (identified lists of boxes) and image sets (identified lists of images).

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::bbox::BoundingBox;
use super::ids::Identifier;

/// An identified, ordered list of bounding boxes.
///
/// Box identifiers are expected to be unique within one image. Diffing
/// treats them as a set, and a delta between images where one side repeats
/// an identifier is rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: Identifier,
    pub bounding_boxes: Vec<BoundingBox>,
}

impl Image {
    /// Creates an image with no boxes.
    pub fn new(id: impl Into<Identifier>) -> Self {
        Self {
            id: id.into(),
            bounding_boxes: Vec::new(),
        }
    }

    /// Appends a box to this image.
    pub fn with_box(mut self, bbox: BoundingBox) -> Self {
        self.bounding_boxes.push(bbox);
        self
    }

    /// Returns the set of box identifiers.
    pub fn box_ids(&self) -> HashSet<&Identifier> {
        self.bounding_boxes.iter().map(|b| &b.id).collect()
    }
}

/// An identified, ordered list of images.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageSet {
    pub id: Identifier,
    pub images: Vec<Image>,
}

impl ImageSet {
    /// Creates an image set with no images.
    pub fn new(id: impl Into<Identifier>) -> Self {
        Self {
            id: id.into(),
            images: Vec::new(),
        }
    }

    /// Appends an image to this set.
    pub fn with_image(mut self, image: Image) -> Self {
        self.images.push(image);
        self
    }

    /// Returns the set of image identifiers.
    pub fn image_ids(&self) -> HashSet<&Identifier> {
        self.images.iter().map(|i| &i.id).collect()
    }
}
