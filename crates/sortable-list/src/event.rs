//! Outbound sort notifications.

use crate::element::ElementId;

/// Emitted once per completed gesture with the post-drop visual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEvent {
    pub order: Vec<ElementId>,
}

type SortCallback = Box<dyn FnMut(&SortEvent)>;

/// Registered sort listeners, called in registration order.
#[derive(Default)]
pub struct SortListeners {
    callbacks: Vec<SortCallback>,
}

impl SortListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, callback: impl FnMut(&SortEvent) + 'static) {
        self.callbacks.push(Box::new(callback));
    }

    pub fn emit(&mut self, event: &SortEvent) {
        for callback in &mut self.callbacks {
            callback(event);
        }
    }

    pub fn len(&self) -> usize {
        self.callbacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.callbacks.is_empty()
    }
}

impl std::fmt::Debug for SortListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortListeners")
            .field("count", &self.callbacks.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_listener() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = SortListeners::new();

        for tag in 0..2 {
            let seen = seen.clone();
            listeners.add(move |event| seen.borrow_mut().push((tag, event.order.len())));
        }

        listeners.emit(&SortEvent {
            order: vec![ElementId(1), ElementId(0)],
        });
        assert_eq!(*seen.borrow(), vec![(0, 2), (1, 2)]);
    }
}
