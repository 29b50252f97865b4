//! Per-gesture geometry capture and hit testing.

use crate::element::ElementId;
use crate::environment::ListEnvironment;
use crate::order::read_visual_order;
use sortable_core::geometry::BoundingBox;
use sortable_core::math::Vec2;
use sortable_core::profiling::profile_function;

/// One item and its box at the moment the gesture started.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapshotEntry {
    pub item: ElementId,
    pub bounds: BoundingBox,
}

/// Item boxes captured at gesture start, in visual order.
///
/// The snapshot is read-only for the lifetime of a gesture. Hit testing and
/// preview slot positions always refer to this pre-drag layout, never to the
/// boxes as they are painted mid-preview.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    entries: Vec<SnapshotEntry>,
}

impl Snapshot {
    /// Capture every item's current box in visual order.
    pub fn capture<E: ListEnvironment + ?Sized>(env: &E) -> Self {
        profile_function!();
        let entries = read_visual_order(env)
            .into_iter()
            .map(|(item, bounds)| SnapshotEntry { item, bounds })
            .collect();
        Self { entries }
    }

    /// Build a snapshot from entries already in visual order.
    pub fn from_entries(entries: Vec<SnapshotEntry>) -> Self {
        Self { entries }
    }

    /// Index of the first entry whose box contains `point`.
    ///
    /// Overlapping boxes resolve to the earliest entry.
    pub fn locate(&self, point: Vec2) -> Option<usize> {
        profile_function!();
        self.entries
            .iter()
            .position(|entry| entry.bounds.contains(point))
    }

    pub fn index_of(&self, item: ElementId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.item == item)
    }

    pub fn get(&self, index: usize) -> Option<&SnapshotEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[SnapshotEntry] {
        &self.entries
    }

    /// Items in the order they were captured.
    pub fn items(&self) -> Vec<ElementId> {
        self.entries.iter().map(|entry| entry.item).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(count: u64, height: f32) -> Snapshot {
        Snapshot::from_entries(
            (0..count)
                .map(|i| SnapshotEntry {
                    item: ElementId(i),
                    bounds: BoundingBox::new(0.0, i as f32 * height, 100.0, (i + 1) as f32 * height),
                })
                .collect(),
        )
    }

    #[test]
    fn test_locate_inside_each_box() {
        let snapshot = column(4, 40.0);
        assert_eq!(snapshot.locate(Vec2::new(50.0, 20.0)), Some(0));
        assert_eq!(snapshot.locate(Vec2::new(50.0, 60.0)), Some(1));
        assert_eq!(snapshot.locate(Vec2::new(1.0, 159.0)), Some(3));
    }

    #[test]
    fn test_locate_outside_all_boxes() {
        let snapshot = column(4, 40.0);
        assert_eq!(snapshot.locate(Vec2::new(150.0, 20.0)), None);
        assert_eq!(snapshot.locate(Vec2::new(50.0, -1.0)), None);
        assert_eq!(snapshot.locate(Vec2::new(50.0, 161.0)), None);
        assert_eq!(Snapshot::default().locate(Vec2::ZERO), None);
    }

    #[test]
    fn test_shared_edge_resolves_to_first_entry() {
        let snapshot = column(3, 40.0);
        assert_eq!(snapshot.locate(Vec2::new(50.0, 40.0)), Some(0));
        assert_eq!(snapshot.locate(Vec2::new(50.0, 80.0)), Some(1));
    }

    #[test]
    fn test_overlapping_boxes_first_match_wins() {
        let snapshot = Snapshot::from_entries(vec![
            SnapshotEntry {
                item: ElementId(10),
                bounds: BoundingBox::new(0.0, 0.0, 100.0, 60.0),
            },
            SnapshotEntry {
                item: ElementId(11),
                bounds: BoundingBox::new(0.0, 30.0, 100.0, 90.0),
            },
        ]);
        assert_eq!(snapshot.locate(Vec2::new(10.0, 45.0)), Some(0));
        assert_eq!(snapshot.locate(Vec2::new(10.0, 75.0)), Some(1));
    }

    #[test]
    fn test_index_of() {
        let snapshot = column(3, 10.0);
        assert_eq!(snapshot.index_of(ElementId(2)), Some(2));
        assert_eq!(snapshot.index_of(ElementId(7)), None);
        assert_eq!(snapshot.items(), vec![ElementId(0), ElementId(1), ElementId(2)]);
        assert_eq!(snapshot.len(), 3);
    }
}
