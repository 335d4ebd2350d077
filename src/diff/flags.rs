//! Coarse difference flags.

use bitflags::bitflags;

bitflags! {
    /// What changed between two versions of a bounding box.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct BoundingBoxDifference: u8 {
        /// The `(x, y)` corner changed.
        const MOVED     = 0b0000_0001;
        /// Width or height changed.
        const RESIZED   = 0b0000_0010;
        /// The label changed.
        const RELABELED = 0b0000_0100;
    }
}

bitflags! {
    /// Which box-level membership changes occurred between two images.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct ImageDifference: u8 {
        const BOXES_ADDED   = 0b0000_0001;
        const BOXES_REMOVED = 0b0000_0010;
    }
}

bitflags! {
    /// Which image-level membership changes occurred between two image sets.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
    #[serde(transparent)]
    pub struct ImageSetDifference: u8 {
        const IMAGES_ADDED   = 0b0000_0001;
        const IMAGES_REMOVED = 0b0000_0010;
    }
}

/// Joins the names of the set flags with `" | "`, or returns `"none"`.
pub fn flag_names<F: bitflags::Flags>(flags: &F) -> String {
    let names: Vec<&str> = flags.iter_names().map(|(name, _)| name).collect();
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" | ")
    }
}
