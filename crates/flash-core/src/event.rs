use std::cell::RefCell;
use std::rc::Rc;

use slotmap::SlotMap;

use crate::SubId;

/// Fire-and-forget notification channel without a payload.
///
/// Every `send()` calls each current subscriber once. Clones share the same
/// subscriber list, so a stream can be handed to both the sender (e.g. a
/// button) and any number of listeners.
#[derive(Clone, Default)]
pub struct EventStream(Rc<RefCell<SlotMap<SubId, Rc<dyn Fn()>>>>);

impl EventStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn send(&self) {
        let subs: Vec<_> = self.0.borrow().values().cloned().collect();
        for s in subs {
            s();
        }
    }

    pub fn subscribe(&self, f: impl Fn() + 'static) -> SubId {
        self.0.borrow_mut().insert(Rc::new(f))
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.0.borrow_mut().remove(id).is_some()
    }

    pub fn subscriber_count(&self) -> usize {
        self.0.borrow().len()
    }
}

impl std::fmt::Debug for EventStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventStream")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
