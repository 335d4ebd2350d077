//! Entity model for boxdiff.
//!
//! Three value types nest bottom-up: a [`BoundingBox`] is a labeled
//! rectangle, an [`Image`] groups boxes, and an [`ImageSet`] groups images.
//! Every entity carries an [`Identifier`] that is used to align it with its
//! counterpart in another version of the collection.
//!
//! The types are plain data. They permit "invalid" geometry (negative
//! extents, zero area) so that diffing never has to reject input.
//!
//! # Example
//!
//! ```
//! use boxdiff::model::{BoundingBox, Image, ImageSet};
//!
//! let set = ImageSet::new(1).with_image(
//!     Image::new("frame-0").with_box(BoundingBox::new(7, "cat", 0.0, 0.0, 10.0, 10.0)),
//! );
//! assert_eq!(set.images[0].bounding_boxes[0].label, "cat");
//! ```

mod bbox;
mod ids;
mod image;
pub mod io_json;

pub use bbox::BoundingBox;
pub use ids::Identifier;
pub use image::{Image, ImageSet};
