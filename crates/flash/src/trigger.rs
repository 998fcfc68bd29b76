use std::cell::Cell;
use std::rc::Rc;

use flash_core::{Dispose, EventStream, Signal};

/// A source of "flash now" pulses.
pub trait FlashTrigger {
    /// Calls `pulse` once per flash request until the returned guard runs.
    fn connect(&self, pulse: Rc<dyn Fn()>) -> Dispose;
}

/// Every `send()` is one pulse.
impl FlashTrigger for EventStream {
    fn connect(&self, pulse: Rc<dyn Fn()>) -> Dispose {
        let id = self.subscribe(move || pulse());
        let stream = self.clone();
        Dispose::new(move || {
            stream.unsubscribe(id);
        })
    }
}

/// Every change of the bound value is one pulse, in either direction.
/// Writing the value it already holds is not a change.
impl FlashTrigger for Signal<bool> {
    fn connect(&self, pulse: Rc<dyn Fn()>) -> Dispose {
        let last = Cell::new(self.get());
        let id = self.subscribe(move |v| {
            if last.replace(*v) != *v {
                pulse();
            }
        });
        let binding = self.clone();
        Dispose::new(move || {
            binding.unsubscribe(id);
        })
    }
}
