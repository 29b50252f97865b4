//! Visual order: items sorted by where they are painted.

use crate::element::ElementId;
use crate::environment::ListEnvironment;
use sortable_core::geometry::BoundingBox;
use sortable_core::profiling::profile_function;
use std::cmp::Ordering;

/// Compare two boxes by top edge, then left edge.
pub fn compare_visual(a: &BoundingBox, b: &BoundingBox) -> Ordering {
    a.top.total_cmp(&b.top).then_with(|| a.left.total_cmp(&b.left))
}

/// Sort `(item, box)` pairs into visual order.
///
/// The sort is stable, so items at exactly the same position keep their
/// relative input order.
pub fn sort_visual(entries: &mut [(ElementId, BoundingBox)]) {
    entries.sort_by(|(_, a), (_, b)| compare_visual(a, b));
}

/// Read every item's painted box from the environment, in visual order.
pub fn read_visual_order<E: ListEnvironment + ?Sized>(env: &E) -> Vec<(ElementId, BoundingBox)> {
    profile_function!();
    let mut entries: Vec<_> = env
        .items()
        .into_iter()
        .map(|item| (item, env.bounding_box(item)))
        .collect();
    sort_visual(&mut entries);
    entries
}
