//! Text formatting for deltas.

use std::fmt;

use super::delta::{BoundingBoxDelta, ImageDelta, ImageSetDelta};
use super::flags::flag_names;

impl fmt::Display for BoundingBoxDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "box {}: {} (dx={}, dy={}, dw={}, dh={}",
            self.id,
            flag_names(&self.difference()),
            self.delta_x,
            self.delta_y,
            self.delta_width,
            self.delta_height
        )?;
        if self.old_label != self.new_label {
            write!(f, ", label '{}' -> '{}'", self.old_label, self.new_label)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for ImageDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_image_delta(f, self, "")
    }
}

impl fmt::Display for ImageSetDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Image set {}: {} added, {} removed, {} shared ({} changed)",
            self.id,
            self.images_added.len(),
            self.images_removed.len(),
            self.image_deltas.len(),
            self.changed_images().count()
        )?;

        for image in &self.images_added {
            writeln!(f, "  + image {} ({} boxes)", image.id, image.bounding_boxes.len())?;
        }
        for image in &self.images_removed {
            writeln!(f, "  - image {} ({} boxes)", image.id, image.bounding_boxes.len())?;
        }
        for delta in self.changed_images() {
            write_image_delta(f, delta, "  ")?;
        }

        Ok(())
    }
}

fn write_image_delta(f: &mut fmt::Formatter<'_>, delta: &ImageDelta, indent: &str) -> fmt::Result {
    writeln!(
        f,
        "{indent}Image {}: {} added, {} removed, {} shared ({} changed)",
        delta.id,
        delta.boxes_added.len(),
        delta.boxes_removed.len(),
        delta.box_deltas.len(),
        delta.changed_boxes().count()
    )?;

    for bbox in &delta.boxes_added {
        writeln!(f, "{indent}  + box {} '{}'", bbox.id, bbox.label)?;
    }
    for bbox in &delta.boxes_removed {
        writeln!(f, "{indent}  - box {} '{}'", bbox.id, bbox.label)?;
    }
    for box_delta in delta.changed_boxes() {
        writeln!(f, "{indent}  ~ {box_delta}")?;
    }

    Ok(())
}
