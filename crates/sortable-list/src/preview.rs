//! Live reorder preview.
//!
//! While an item is dragged the list is shown in its would-be order by
//! translating items, not by moving them. Structural moves mid-gesture would
//! invalidate the captured boxes, so the real reorder is left to whoever
//! receives the final order.

use crate::config::PreviewStyle;
use crate::element::{ElementId, Presentation, Transition};
use crate::environment::ListEnvironment;
use crate::snapshot::Snapshot;
use sortable_core::math::Vec2;
use sortable_core::profiling::profile_function;

/// How a snapshot entry is shown for a given drag and candidate slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotRole {
    /// The item being dragged, shown at the candidate slot.
    Lifted,
    /// Between the candidate slot and the dragged item, before the dragged
    /// item: slides one slot forward.
    ShiftForward,
    /// Between the dragged item and the candidate slot, after the dragged
    /// item: slides one slot back.
    ShiftBackward,
    /// Outside the affected range.
    Settled,
}

impl SlotRole {
    /// Classify entry `index` for a drag from `dragged` to `candidate`.
    pub fn classify(index: usize, dragged: usize, candidate: usize) -> Self {
        let lo = dragged.min(candidate);
        let hi = dragged.max(candidate);

        if index == dragged {
            SlotRole::Lifted
        } else if index < lo || index > hi {
            SlotRole::Settled
        } else if index < dragged {
            SlotRole::ShiftForward
        } else {
            SlotRole::ShiftBackward
        }
    }
}

/// Presentation computed for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPresentation {
    pub item: ElementId,
    pub role: SlotRole,
    pub presentation: Presentation,
}

/// Compute the preview for every snapshot entry.
///
/// Returns an empty list when there is nothing to preview: no dragged
/// index, no candidate, or indices outside the snapshot.
pub fn compute_preview(
    snapshot: &Snapshot,
    dragged: Option<usize>,
    candidate: Option<usize>,
    style: &PreviewStyle,
) -> Vec<ItemPresentation> {
    profile_function!();
    let (Some(dragged), Some(candidate)) = (dragged, candidate) else {
        return Vec::new();
    };
    let Some(target) = snapshot.get(candidate) else {
        return Vec::new();
    };
    if dragged >= snapshot.len() {
        return Vec::new();
    }

    let entries = snapshot.entries();
    let slide = if style.slide_duration.is_zero() {
        Transition::Instant
    } else {
        Transition::Slide(style.slide_duration)
    };

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let role = SlotRole::classify(index, dragged, candidate);
            let origin = entry.bounds.origin();
            let (translation, opacity) = match role {
                SlotRole::Lifted => (target.bounds.origin() - origin, style.lifted_opacity),
                SlotRole::Settled => (Vec2::ZERO, style.settled_opacity),
                SlotRole::ShiftForward => (
                    entries[index + 1].bounds.origin() - origin,
                    style.shifted_opacity,
                ),
                SlotRole::ShiftBackward => (
                    entries[index - 1].bounds.origin() - origin,
                    style.shifted_opacity,
                ),
            };
            ItemPresentation {
                item: entry.item,
                role,
                presentation: Presentation {
                    translation,
                    opacity: Some(opacity),
                    transition: slide,
                },
            }
        })
        .collect()
}

/// Write computed presentations to the environment.
pub fn apply_preview<E: ListEnvironment + ?Sized>(env: &E, presentations: &[ItemPresentation]) {
    for p in presentations {
        env.set_presentation(p.item, &p.presentation);
    }
}

/// Clear every item's preview and pin placement to `order`.
///
/// Transitions are set to instant so items do not animate back from their
/// preview offsets once the placement index takes over.
pub fn reset_preview<E: ListEnvironment + ?Sized>(env: &E, order: &[ElementId]) {
    profile_function!();
    let cleared = Presentation::cleared();
    for (placement, item) in order.iter().enumerate() {
        env.set_presentation(*item, &cleared);
        env.set_placement(*item, placement);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::SnapshotEntry;
    use sortable_core::geometry::BoundingBox;

    fn column(count: u64) -> Snapshot {
        Snapshot::from_entries(
            (0..count)
                .map(|i| SnapshotEntry {
                    item: ElementId(i),
                    bounds: BoundingBox::new(0.0, i as f32 * 40.0, 100.0, (i + 1) as f32 * 40.0),
                })
                .collect(),
        )
    }

    fn find(preview: &[ItemPresentation], id: u64) -> ItemPresentation {
        *preview.iter().find(|p| p.item == ElementId(id)).unwrap()
    }

    #[test]
    fn test_classify_dragging_up() {
        // drag index 2 to slot 0
        assert_eq!(SlotRole::classify(0, 2, 0), SlotRole::ShiftForward);
        assert_eq!(SlotRole::classify(1, 2, 0), SlotRole::ShiftForward);
        assert_eq!(SlotRole::classify(2, 2, 0), SlotRole::Lifted);
        assert_eq!(SlotRole::classify(3, 2, 0), SlotRole::Settled);
    }

    #[test]
    fn test_classify_dragging_down() {
        // drag index 1 to slot 3
        assert_eq!(SlotRole::classify(0, 1, 3), SlotRole::Settled);
        assert_eq!(SlotRole::classify(1, 1, 3), SlotRole::Lifted);
        assert_eq!(SlotRole::classify(2, 1, 3), SlotRole::ShiftBackward);
        assert_eq!(SlotRole::classify(3, 1, 3), SlotRole::ShiftBackward);
        assert_eq!(SlotRole::classify(4, 1, 3), SlotRole::Settled);
    }

    #[test]
    fn test_preview_drag_up() {
        let snapshot = column(4);
        let preview = compute_preview(&snapshot, Some(2), Some(0), &PreviewStyle::default());
        assert_eq!(preview.len(), 4);

        let a = find(&preview, 0);
        assert_eq!(a.presentation.translation, Vec2::new(0.0, 40.0));
        assert_eq!(a.presentation.opacity, Some(1.0));

        let b = find(&preview, 1);
        assert_eq!(b.presentation.translation, Vec2::new(0.0, 40.0));

        let c = find(&preview, 2);
        assert_eq!(c.role, SlotRole::Lifted);
        assert_eq!(c.presentation.translation, Vec2::new(0.0, -80.0));
        assert_eq!(c.presentation.opacity, Some(0.1));

        let d = find(&preview, 3);
        assert_eq!(d.presentation.translation, Vec2::ZERO);
        assert_eq!(d.presentation.opacity, Some(0.7));
    }

    #[test]
    fn test_preview_drag_down() {
        let snapshot = column(4);
        let preview = compute_preview(&snapshot, Some(0), Some(2), &PreviewStyle::default());

        assert_eq!(find(&preview, 0).presentation.translation, Vec2::new(0.0, 80.0));
        assert_eq!(find(&preview, 1).presentation.translation, Vec2::new(0.0, -40.0));
        assert_eq!(find(&preview, 2).presentation.translation, Vec2::new(0.0, -40.0));
        assert_eq!(find(&preview, 3).role, SlotRole::Settled);
    }

    #[test]
    fn test_candidate_equal_to_dragged() {
        let snapshot = column(3);
        let preview = compute_preview(&snapshot, Some(1), Some(1), &PreviewStyle::default());
        let lifted = find(&preview, 1);
        assert_eq!(lifted.presentation.translation, Vec2::ZERO);
        assert_eq!(lifted.presentation.opacity, Some(0.1));
        assert_eq!(find(&preview, 0).role, SlotRole::Settled);
        assert_eq!(find(&preview, 2).role, SlotRole::Settled);
    }

    #[test]
    fn test_nothing_to_preview() {
        let snapshot = column(3);
        let style = PreviewStyle::default();
        assert!(compute_preview(&snapshot, None, Some(1), &style).is_empty());
        assert!(compute_preview(&snapshot, Some(1), None, &style).is_empty());
        assert!(compute_preview(&snapshot, Some(5), Some(1), &style).is_empty());
        assert!(compute_preview(&snapshot, Some(1), Some(5), &style).is_empty());
    }

    #[test]
    fn test_zero_slide_duration_is_instant() {
        let snapshot = column(2);
        let style = PreviewStyle::default().slide_duration(std::time::Duration::ZERO);
        let preview = compute_preview(&snapshot, Some(1), Some(0), &style);
        assert!(preview
            .iter()
            .all(|p| p.presentation.transition == Transition::Instant));
    }
}
