//! The sortable list controller.
//!
//! [`SortableList`] owns the gesture state machine:
//!
//! ```text
//! Start ──► capture snapshot
//! Move  ──► hit test ──► (candidate changed?) ──► preview
//! End   ──► read visual order ──► emit SortEvent ──► reset preview
//! ```
//!
//! All geometry and presentation goes through a [`ListEnvironment`].

use crate::config::{DragHandles, SortableConfig};
use crate::element::ElementId;
use crate::environment::{ListEnvironment, Subscriptions};
use crate::error::{SortableError, SortableResult};
use crate::event::{SortEvent, SortListeners};
use crate::gesture::{ActiveGesture, GestureEvent, GestureState};
use crate::mutation::MutationQueue;
use crate::order::read_visual_order;
use crate::preview::{apply_preview, compute_preview, reset_preview};
use crate::snapshot::Snapshot;
use sortable_core::alloc::HashMap;
use sortable_core::math::Vec2;
use sortable_core::profiling::profile_function;

/// Drag-to-reorder controller for one list.
#[derive(Debug)]
pub struct SortableList {
    config: SortableConfig,
    active: bool,
    gesture: Option<ActiveGesture>,
    mutations: MutationQueue,
    listeners: SortListeners,
}

impl SortableList {
    /// Create an inactive controller. Call [`SortableList::attach`] to start.
    pub fn new(config: SortableConfig) -> Self {
        Self {
            config,
            active: false,
            gesture: None,
            mutations: MutationQueue::new(),
            listeners: SortListeners::new(),
        }
    }

    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    /// Gesture state of the drag in progress.
    pub fn gesture(&self) -> Option<&GestureState> {
        self.gesture.as_ref().map(|g| &g.state)
    }

    /// Snapshot of the drag in progress.
    pub fn snapshot(&self) -> Option<&Snapshot> {
        self.gesture.as_ref().map(|g| &g.snapshot)
    }

    /// Register a callback for completed sorts.
    pub fn on_sort(&mut self, callback: impl FnMut(&SortEvent) + 'static) {
        self.listeners.add(callback);
    }

    /// Mount the controller on a list, activating it if the config says so.
    pub fn attach<E: ListEnvironment + ?Sized>(&mut self, env: &E) -> SortableResult<()> {
        if self.config.sortable {
            self.activate(env)
        } else {
            Ok(())
        }
    }

    /// Unmount the controller.
    pub fn detach<E: ListEnvironment + ?Sized>(&mut self, env: &E) {
        self.deactivate(env);
    }

    /// Start listening and make every current item draggable.
    pub fn activate<E: ListEnvironment + ?Sized>(&mut self, env: &E) -> SortableResult<()> {
        if self.active {
            return Ok(());
        }

        // Pin the order the user currently sees, which may differ from
        // declaration order after earlier sorts.
        for (position, (item, _)) in read_visual_order(env).into_iter().enumerate() {
            self.prepare_item(env, item, position)?;
        }
        env.subscribe(Subscriptions::all());
        self.active = true;
        tracing::debug!(drag_handles = ?self.config.drag_handles, "sortable list activated");
        Ok(())
    }

    /// Stop listening, revoke draggable and abort any gesture in flight.
    pub fn deactivate<E: ListEnvironment + ?Sized>(&mut self, env: &E) {
        if !self.active {
            return;
        }

        self.cancel_gesture(env);
        env.unsubscribe(Subscriptions::all());
        for item in env.items() {
            self.release_item(env, item);
        }
        self.mutations.clear();
        self.active = false;
        tracing::debug!("sortable list deactivated");
    }

    /// Apply a new `sortable` flag.
    pub fn set_sortable<E: ListEnvironment + ?Sized>(
        &mut self,
        env: &E,
        sortable: bool,
    ) -> SortableResult<()> {
        self.config.sortable = sortable;
        if sortable {
            self.activate(env)
        } else {
            self.deactivate(env);
            Ok(())
        }
    }

    /// Switch handle mode, re-preparing items if active.
    pub fn set_drag_handles<E: ListEnvironment + ?Sized>(
        &mut self,
        env: &E,
        drag_handles: DragHandles,
    ) -> SortableResult<()> {
        if self.config.drag_handles == drag_handles {
            return Ok(());
        }
        if !self.active {
            self.config.drag_handles = drag_handles;
            return Ok(());
        }

        self.deactivate(env);
        self.config.drag_handles = drag_handles;
        self.activate(env)
    }

    /// Dispatch a gesture event. Returns `true` if the event was used.
    pub fn handle_event<E: ListEnvironment + ?Sized>(
        &mut self,
        env: &E,
        event: GestureEvent,
    ) -> bool {
        if !self.active {
            tracing::trace!(?event, "ignoring gesture event, list inactive");
            return false;
        }

        match event {
            GestureEvent::Start { origin, position } => self.start_gesture(env, origin, position),
            GestureEvent::Move { position } => self.move_gesture(env, position),
            GestureEvent::End => self.commit(env).is_some(),
            GestureEvent::Cancel => self.cancel_gesture(env),
        }
    }

    fn start_gesture<E: ListEnvironment + ?Sized>(
        &mut self,
        env: &E,
        origin: ElementId,
        position: Vec2,
    ) -> bool {
        profile_function!();
        if self.gesture.is_some() {
            tracing::trace!(%origin, "gesture already in progress");
            return false;
        }

        let Some(item) = env.owning_item(origin) else {
            tracing::trace!(%origin, "gesture started outside the list");
            return false;
        };
        if self.config.drag_handles.uses_handles() && env.find_handle(item) != Some(origin) {
            tracing::trace!(%origin, %item, "gesture did not start on the handle");
            return false;
        }

        let snapshot = Snapshot::capture(env);
        let Some(dragged) = snapshot.index_of(item) else {
            return false;
        };

        env.set_drop_effect(self.config.drop_effect);
        tracing::debug!(%item, dragged, items = snapshot.len(), "gesture started");
        self.gesture = Some(ActiveGesture {
            snapshot,
            state: GestureState::new(dragged, position),
        });
        true
    }

    fn move_gesture<E: ListEnvironment + ?Sized>(&mut self, env: &E, position: Vec2) -> bool {
        let Some(gesture) = self.gesture.as_mut() else {
            return false;
        };

        let hit = gesture.snapshot.locate(position);
        if gesture.state.update(position, hit) {
            tracing::trace!(candidate = ?gesture.state.candidate, "drop candidate changed");
            self.refresh_preview(env);
        }
        true
    }

    /// Re-apply the preview for the current gesture. No-op without one.
    pub fn refresh_preview<E: ListEnvironment + ?Sized>(&self, env: &E) {
        let Some(gesture) = self.gesture.as_ref() else {
            return;
        };
        let preview = compute_preview(
            &gesture.snapshot,
            Some(gesture.state.dragged),
            gesture.state.candidate,
            &self.config.preview,
        );
        apply_preview(env, &preview);
    }

    /// Finish the gesture: emit the visual order and reset the preview.
    ///
    /// Returns `None` when no gesture is active.
    pub fn commit<E: ListEnvironment + ?Sized>(&mut self, env: &E) -> Option<SortEvent> {
        profile_function!();
        let gesture = self.gesture.take()?;

        // Painted boxes include the preview offsets, so this is the new order.
        let order: Vec<ElementId> = read_visual_order(env)
            .into_iter()
            .map(|(item, _)| item)
            .collect();
        let event = SortEvent { order };

        tracing::debug!(
            item = ?gesture.dragged_item(),
            from = gesture.state.dragged,
            to = ?gesture.state.candidate,
            "gesture committed"
        );
        self.listeners.emit(&event);
        reset_preview(env, &event.order);
        Some(event)
    }

    /// Abort the gesture without emitting, restoring the pre-drag order.
    pub fn cancel_gesture<E: ListEnvironment + ?Sized>(&mut self, env: &E) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        tracing::debug!(item = ?gesture.dragged_item(), "gesture cancelled");
        reset_preview(env, &gesture.snapshot.items());
        true
    }

    /// Clear all preview state and pin placements to the current visual order.
    pub fn reset_preview<E: ListEnvironment + ?Sized>(&self, env: &E) {
        let order: Vec<ElementId> = read_visual_order(env)
            .into_iter()
            .map(|(item, _)| item)
            .collect();
        reset_preview(env, &order);
    }

    /// Queue items reported by a child-list change.
    pub fn notify_children_added(&mut self, items: impl IntoIterator<Item = ElementId>) {
        if self.active {
            self.mutations.push(items);
        }
    }

    /// Number of queued child-list additions.
    pub fn pending_mutations(&self) -> usize {
        self.mutations.len()
    }

    /// Prepare every queued item that is still in the list.
    pub fn flush_mutations<E: ListEnvironment + ?Sized>(&mut self, env: &E) -> SortableResult<()> {
        if self.mutations.is_empty() {
            return Ok(());
        }

        let positions: HashMap<ElementId, usize> = env
            .items()
            .into_iter()
            .enumerate()
            .map(|(position, item)| (item, position))
            .collect();

        for item in self.mutations.drain() {
            match positions.get(&item) {
                Some(&position) => self.prepare_item(env, item, position)?,
                None => tracing::trace!(%item, "added item no longer in list"),
            }
        }
        Ok(())
    }

    fn prepare_item<E: ListEnvironment + ?Sized>(
        &self,
        env: &E,
        item: ElementId,
        position: usize,
    ) -> SortableResult<()> {
        let target = match self.config.drag_handles {
            DragHandles::WholeItem => item,
            DragHandles::Required => env
                .find_handle(item)
                .ok_or(SortableError::MissingHandle(item))?,
            DragHandles::Create => env
                .find_handle(item)
                .unwrap_or_else(|| env.create_handle(item)),
        };
        env.set_draggable(target, true);
        env.set_placement(item, position);
        Ok(())
    }

    fn release_item<E: ListEnvironment + ?Sized>(&self, env: &E, item: ElementId) {
        env.set_draggable(item, false);
        if let Some(handle) = env.find_handle(item) {
            env.set_draggable(handle, false);
        }
    }
}

impl Default for SortableList {
    fn default() -> Self {
        Self::new(SortableConfig::default())
    }
}
