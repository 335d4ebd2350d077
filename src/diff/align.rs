//! Alignment of two identified collections by identifier.

use std::collections::HashSet;

use crate::error::BoxdiffError;
use crate::model::{BoundingBox, Identifier, Image};

/// An entity that can be aligned with its counterpart by identifier.
pub(crate) trait Identified {
    fn id(&self) -> &Identifier;
}

impl Identified for BoundingBox {
    fn id(&self) -> &Identifier {
        &self.id
    }
}

impl Identified for Image {
    fn id(&self) -> &Identifier {
        &self.id
    }
}

/// The three-way partition of a `target` and an `other` collection.
#[derive(Debug)]
pub(crate) struct Alignment<'a, T> {
    /// Entries of `other` whose ID is absent from `target`, in `other`'s order.
    pub added: Vec<&'a T>,
    /// Entries of `target` whose ID is absent from `other`, in `target`'s order.
    pub removed: Vec<&'a T>,
    /// `(target, other)` pairs sharing an ID, ascending by ID.
    pub pairs: Vec<(&'a T, &'a T)>,
}

/// Partitions `target` and `other` by identifier membership and pairs the
/// shared entries.
///
/// Shared entries are filtered on each side, sorted by ID, and zipped, so
/// pair `i` is the `i`-th smallest shared ID.
///
/// # Errors
/// Returns [`BoxdiffError::DuplicateId`] if either side repeats an ID.
pub(crate) fn align<'a, T: Identified>(
    parent: &Identifier,
    target: &'a [T],
    other: &'a [T],
) -> Result<Alignment<'a, T>, BoxdiffError> {
    let target_ids = unique_ids(parent, target)?;
    let other_ids = unique_ids(parent, other)?;

    let added: Vec<&T> = other
        .iter()
        .filter(|entry| !target_ids.contains(entry.id()))
        .collect();
    let removed: Vec<&T> = target
        .iter()
        .filter(|entry| !other_ids.contains(entry.id()))
        .collect();

    let mut shared_target: Vec<&T> = target
        .iter()
        .filter(|entry| other_ids.contains(entry.id()))
        .collect();
    let mut shared_other: Vec<&T> = other
        .iter()
        .filter(|entry| target_ids.contains(entry.id()))
        .collect();

    shared_target.sort_by(|a, b| a.id().cmp(b.id()));
    shared_other.sort_by(|a, b| a.id().cmp(b.id()));

    assert_eq!(
        shared_target.len(),
        shared_other.len(),
        "shared ID sequences of {} differ in length",
        parent
    );

    tracing::debug!(
        %parent,
        added = added.len(),
        removed = removed.len(),
        shared = shared_target.len(),
        "aligned children"
    );

    let pairs = shared_target.into_iter().zip(shared_other).collect();

    Ok(Alignment {
        added,
        removed,
        pairs,
    })
}

fn unique_ids<'a, T: Identified>(
    parent: &Identifier,
    entries: &'a [T],
) -> Result<HashSet<&'a Identifier>, BoxdiffError> {
    let mut seen = HashSet::with_capacity(entries.len());
    for entry in entries {
        if !seen.insert(entry.id()) {
            return Err(BoxdiffError::DuplicateId {
                parent: parent.clone(),
                id: entry.id().clone(),
            });
        }
    }
    Ok(seen)
}
