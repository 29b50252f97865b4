//! Mock implementation of [`ListEnvironment`] for testing.

use parking_lot::Mutex;
use sortable_core::alloc::HashMap;
use sortable_core::geometry::BoundingBox;
use sortable_core::math::Vec2;
use sortable_list::{DropEffect, ElementId, ListEnvironment, Presentation, Subscriptions};

/// Records an environment call for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvCall {
    CreateHandle { item: ElementId, handle: ElementId },
    SetDraggable { element: ElementId, draggable: bool },
    SetPresentation { item: ElementId, presentation: Presentation },
    SetPlacement { item: ElementId, placement: usize },
    SetDropEffect(DropEffect),
    Subscribe(Subscriptions),
    Unsubscribe(Subscriptions),
}

/// How the mock positions items.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockLayout {
    /// One item per row, top to bottom.
    Column,
    /// Rows of `columns` items, left to right then top to bottom.
    Grid { columns: usize },
}

#[derive(Debug, Clone)]
struct MockItem {
    id: ElementId,
    size: Vec2,
    handles: Vec<ElementId>,
    children: Vec<ElementId>,
    placement: Option<usize>,
    presentation: Presentation,
}

#[derive(Debug)]
struct MockState {
    layout: MockLayout,
    items: Vec<MockItem>,
    draggable: HashMap<ElementId, bool>,
    subscriptions: Subscriptions,
    drop_effect: Option<DropEffect>,
    next_id: u64,
}

impl MockState {
    fn alloc_id(&mut self) -> ElementId {
        let id = ElementId(self.next_id);
        self.next_id += 1;
        id
    }

    fn item_mut(&mut self, id: ElementId) -> Option<&mut MockItem> {
        self.items.iter_mut().find(|item| item.id == id)
    }

    fn item(&self, id: ElementId) -> Option<&MockItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Item containing `element` as itself, a handle or another child.
    fn owner_of(&self, element: ElementId) -> Option<&MockItem> {
        self.items.iter().find(|item| {
            item.id == element || item.handles.contains(&element) || item.children.contains(&element)
        })
    }

    /// Layout boxes, before presentation offsets.
    ///
    /// Items flow in placement order like CSS `order`: unset placement sorts
    /// as zero and ties keep declaration order.
    fn layout_boxes(&self) -> HashMap<ElementId, BoundingBox> {
        let mut flow: Vec<(usize, &MockItem)> = self.items.iter().enumerate().collect();
        flow.sort_by_key(|(declared, item)| (item.placement.unwrap_or(0), *declared));

        let mut boxes = HashMap::new();
        match self.layout {
            MockLayout::Column => {
                let mut top = 0.0;
                for (_, item) in flow {
                    boxes.insert(
                        item.id,
                        BoundingBox::from_origin_size(Vec2::new(0.0, top), item.size),
                    );
                    top += item.size.y;
                }
            }
            MockLayout::Grid { columns } => {
                let columns = columns.max(1);
                let mut top = 0.0;
                for row in flow.chunks(columns) {
                    let mut left = 0.0;
                    let mut row_height: f32 = 0.0;
                    for (_, item) in row {
                        boxes.insert(
                            item.id,
                            BoundingBox::from_origin_size(Vec2::new(left, top), item.size),
                        );
                        left += item.size.x;
                        row_height = row_height.max(item.size.y);
                    }
                    top += row_height;
                }
            }
        }
        boxes
    }
}

/// Mock UI host for driving a [`SortableList`](sortable_list::SortableList).
///
/// Methods take `&self` and record into `Mutex`-guarded state, mirroring how
/// a real host hands out shared references to its element tree.
pub struct MockListEnvironment {
    state: Mutex<MockState>,
    calls: Mutex<Vec<EnvCall>>,
}

impl MockListEnvironment {
    /// Create an empty environment.
    pub fn new(layout: MockLayout) -> Self {
        Self {
            state: Mutex::new(MockState {
                layout,
                items: Vec::new(),
                draggable: HashMap::new(),
                subscriptions: Subscriptions::empty(),
                drop_effect: None,
                next_id: 1,
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// A column of `count` items of equal size.
    pub fn column(count: usize, size: Vec2) -> Self {
        let env = Self::new(MockLayout::Column);
        for _ in 0..count {
            env.append_item(size);
        }
        env
    }

    /// A grid of `count` equal items, `columns` per row.
    pub fn grid(columns: usize, count: usize, size: Vec2) -> Self {
        let env = Self::new(MockLayout::Grid { columns });
        for _ in 0..count {
            env.append_item(size);
        }
        env
    }

    /// Append an item at the end of the declaration order.
    pub fn append_item(&self, size: Vec2) -> ElementId {
        let mut state = self.state.lock();
        let id = state.alloc_id();
        state.items.push(MockItem {
            id,
            size,
            handles: Vec::new(),
            children: Vec::new(),
            placement: None,
            presentation: Presentation::cleared(),
        });
        id
    }

    /// Remove an item. Returns `false` if it was not present.
    pub fn remove_item(&self, item: ElementId) -> bool {
        let mut state = self.state.lock();
        let before = state.items.len();
        state.items.retain(|i| i.id != item);
        state.items.len() != before
    }

    /// Add a caller-provided `.drag-handle` to an item.
    pub fn add_handle(&self, item: ElementId) -> Option<ElementId> {
        let mut state = self.state.lock();
        let id = state.alloc_id();
        state.item_mut(item)?.handles.push(id);
        Some(id)
    }

    /// Add a plain child element (not a handle) to an item.
    pub fn add_child(&self, item: ElementId) -> Option<ElementId> {
        let mut state = self.state.lock();
        let id = state.alloc_id();
        state.item_mut(item)?.children.push(id);
        Some(id)
    }

    /// Allocate an element that belongs to no item.
    pub fn detached_element(&self) -> ElementId {
        self.state.lock().alloc_id()
    }

    /// Item ids in declaration order.
    pub fn item_ids(&self) -> Vec<ElementId> {
        self.state.lock().items.iter().map(|item| item.id).collect()
    }

    pub fn handles(&self, item: ElementId) -> Vec<ElementId> {
        self.state
            .lock()
            .item(item)
            .map(|i| i.handles.clone())
            .unwrap_or_default()
    }

    pub fn is_draggable(&self, element: ElementId) -> bool {
        self.state
            .lock()
            .draggable
            .get(&element)
            .copied()
            .unwrap_or(false)
    }

    pub fn presentation(&self, item: ElementId) -> Option<Presentation> {
        self.state.lock().item(item).map(|i| i.presentation)
    }

    pub fn placement(&self, item: ElementId) -> Option<usize> {
        self.state.lock().item(item).and_then(|i| i.placement)
    }

    pub fn subscriptions(&self) -> Subscriptions {
        self.state.lock().subscriptions
    }

    pub fn drop_effect(&self) -> Option<DropEffect> {
        self.state.lock().drop_effect
    }

    /// Center of an item's current painted box, handy as a pointer position.
    pub fn center_of(&self, item: ElementId) -> Vec2 {
        self.bounding_box(item).center()
    }

    /// Get a copy of all recorded calls (for test assertions).
    pub fn calls(&self) -> Vec<EnvCall> {
        self.calls.lock().clone()
    }

    /// Count presentation writes.
    pub fn count_presentation_writes(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, EnvCall::SetPresentation { .. }))
            .count()
    }

    /// Count handle injections.
    pub fn count_handle_creates(&self) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| matches!(call, EnvCall::CreateHandle { .. }))
            .count()
    }

    /// Clear recorded calls (useful between test steps).
    pub fn clear_calls(&self) {
        self.calls.lock().clear();
    }

    /// Get total number of recorded calls.
    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }

    fn record(&self, call: EnvCall) {
        self.calls.lock().push(call);
    }
}

impl Default for MockListEnvironment {
    fn default() -> Self {
        Self::new(MockLayout::Column)
    }
}

impl ListEnvironment for MockListEnvironment {
    fn items(&self) -> Vec<ElementId> {
        self.item_ids()
    }

    fn bounding_box(&self, element: ElementId) -> BoundingBox {
        let state = self.state.lock();
        let Some(owner) = state.owner_of(element) else {
            return BoundingBox::default();
        };
        let layout = state.layout_boxes();
        layout
            .get(&owner.id)
            .copied()
            .unwrap_or_default()
            .translated(owner.presentation.translation)
    }

    fn owning_item(&self, element: ElementId) -> Option<ElementId> {
        self.state.lock().owner_of(element).map(|item| item.id)
    }

    fn find_handle(&self, item: ElementId) -> Option<ElementId> {
        self.state
            .lock()
            .item(item)
            .and_then(|i| i.handles.first().copied())
    }

    fn create_handle(&self, item: ElementId) -> ElementId {
        let handle = {
            let mut state = self.state.lock();
            let id = state.alloc_id();
            if let Some(i) = state.item_mut(item) {
                i.handles.push(id);
            }
            id
        };
        self.record(EnvCall::CreateHandle { item, handle });
        handle
    }

    fn set_draggable(&self, element: ElementId, draggable: bool) {
        self.state.lock().draggable.insert(element, draggable);
        self.record(EnvCall::SetDraggable { element, draggable });
    }

    fn set_presentation(&self, item: ElementId, presentation: &Presentation) {
        if let Some(i) = self.state.lock().item_mut(item) {
            i.presentation = *presentation;
        }
        self.record(EnvCall::SetPresentation {
            item,
            presentation: *presentation,
        });
    }

    fn set_placement(&self, item: ElementId, placement: usize) {
        if let Some(i) = self.state.lock().item_mut(item) {
            i.placement = Some(placement);
        }
        self.record(EnvCall::SetPlacement { item, placement });
    }

    fn set_drop_effect(&self, effect: DropEffect) {
        self.state.lock().drop_effect = Some(effect);
        self.record(EnvCall::SetDropEffect(effect));
    }

    fn subscribe(&self, subscriptions: Subscriptions) {
        self.state.lock().subscriptions |= subscriptions;
        self.record(EnvCall::Subscribe(subscriptions));
    }

    fn unsubscribe(&self, subscriptions: Subscriptions) {
        self.state.lock().subscriptions &= !subscriptions;
        self.record(EnvCall::Unsubscribe(subscriptions));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_layout() {
        let env = MockListEnvironment::column(3, Vec2::new(100.0, 40.0));
        let ids = env.item_ids();
        assert_eq!(env.bounding_box(ids[0]), BoundingBox::new(0.0, 0.0, 100.0, 40.0));
        assert_eq!(env.bounding_box(ids[2]), BoundingBox::new(0.0, 80.0, 100.0, 120.0));
    }

    #[test]
    fn test_grid_layout() {
        let env = MockListEnvironment::grid(2, 3, Vec2::new(50.0, 20.0));
        let ids = env.item_ids();
        assert_eq!(env.bounding_box(ids[1]), BoundingBox::new(50.0, 0.0, 100.0, 20.0));
        assert_eq!(env.bounding_box(ids[2]), BoundingBox::new(0.0, 20.0, 50.0, 40.0));
    }

    #[test]
    fn test_placement_reflows() {
        let env = MockListEnvironment::column(2, Vec2::new(100.0, 40.0));
        let ids = env.item_ids();
        env.set_placement(ids[0], 1);
        env.set_placement(ids[1], 0);
        assert_eq!(env.bounding_box(ids[1]).top, 0.0);
        assert_eq!(env.bounding_box(ids[0]).top, 40.0);
    }

    #[test]
    fn test_translation_moves_painted_box() {
        let env = MockListEnvironment::column(2, Vec2::new(100.0, 40.0));
        let ids = env.item_ids();
        env.set_presentation(
            ids[1],
            &Presentation {
                translation: Vec2::new(0.0, -40.0),
                ..Presentation::cleared()
            },
        );
        assert_eq!(env.bounding_box(ids[1]).top, 0.0);
        assert_eq!(env.count_presentation_writes(), 1);
    }

    #[test]
    fn test_owner_lookup() {
        let env = MockListEnvironment::column(1, Vec2::new(100.0, 40.0));
        let item = env.item_ids()[0];
        let handle = env.add_handle(item).unwrap();
        let child = env.add_child(item).unwrap();
        assert_eq!(env.owning_item(handle), Some(item));
        assert_eq!(env.owning_item(child), Some(item));
        assert_eq!(env.owning_item(env.detached_element()), None);
        assert_eq!(env.find_handle(item), Some(handle));
    }
}
