use std::any::Any;
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::scope::Scope;
use crate::{Scene, View, dispatch};

thread_local! {
    static COMPOSER: RefCell<Composer> = RefCell::new(Composer::default());
}

/// Keyed slots that survive between frames. A slot whose key is not
/// touched during a frame is unmounted at the end of it.
#[derive(Default)]
struct Composer {
    slots: HashMap<String, Slot>,
    touched: HashSet<String>,
}

struct Slot {
    value: Box<dyn Any>,
    scope: Scope,
}

/// Key-based remember. `init` runs inside the slot's own scope, so effects
/// registered there are cleaned up when the slot unmounts.
pub fn remember_with_key<T: 'static>(key: impl Into<String>, init: impl FnOnce() -> T) -> Rc<T> {
    let key = key.into();

    let existing = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        c.touched.insert(key.clone());
        c.slots
            .get(&key)
            .map(|slot| slot.value.downcast_ref::<Rc<T>>().cloned())
    });

    let stale = match existing {
        Some(Some(rc)) => return rc,
        Some(None) => {
            log::warn!(
                "remember_with_key: key '{}' reused with a different type; replacing.",
                key
            );
            COMPOSER.with(|c| c.borrow_mut().slots.remove(&key))
        }
        None => None,
    };
    if let Some(slot) = stale {
        slot.scope.dispose();
    }

    // COMPOSER is not borrowed here: `init` may remember nested slots.
    let scope = Scope::new();
    let rc: Rc<T> = Rc::new(scope.run(init));
    COMPOSER.with(|c| {
        c.borrow_mut().slots.insert(
            key,
            Slot {
                value: Box::new(rc.clone()),
                scope,
            },
        )
    });
    rc
}

/// Number of live slots.
pub fn mounted_slots() -> usize {
    COMPOSER.with(|c| c.borrow().slots.len())
}

fn begin_frame() {
    COMPOSER.with(|c| c.borrow_mut().touched.clear());
}

/// Unmount every slot not touched since `begin_frame`.
fn end_frame() {
    let gone: Vec<(String, Slot)> = COMPOSER.with(|c| {
        let mut c = c.borrow_mut();
        let c = &mut *c;
        let stale: Vec<String> = c
            .slots
            .keys()
            .filter(|k| !c.touched.contains(*k))
            .cloned()
            .collect();
        stale
            .into_iter()
            .filter_map(|k| c.slots.remove(&k).map(|slot| (k, slot)))
            .collect()
    });
    unmount(gone);
}

fn unmount(slots: Vec<(String, Slot)>) {
    for (key, slot) in slots {
        log::debug!("unmounting slot '{key}'");
        slot.scope.dispose();
    }
}

/// Output of one composition pass.
pub struct Frame {
    pub scene: Scene,
    pub index: u64,
}

impl Frame {
    /// Clicks the button labelled `text` in this frame.
    pub fn click(&self, text: &str) -> bool {
        self.scene.click(text)
    }
}

/// Drives frames on the UI thread.
pub struct Scheduler {
    next_frame: u64,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self { next_frame: 0 }
    }

    /// Runs due tasks, composes the root and unmounts whatever it no longer
    /// contains, then renders.
    pub fn compose<F>(&mut self, mut build_root: F) -> Frame
    where
        F: FnMut(&mut Scheduler) -> View,
    {
        dispatch::run_due();

        begin_frame();
        let root = build_root(self);
        end_frame();

        let index = self.next_frame;
        self.next_frame += 1;
        Frame {
            scene: root.render(),
            index,
        }
    }

    pub fn frames(&self) -> u64 {
        self.next_frame
    }

    /// Unmounts every slot.
    pub fn shutdown(&mut self) {
        let all: Vec<(String, Slot)> =
            COMPOSER.with(|c| c.borrow_mut().slots.drain().collect());
        unmount(all);
    }
}
