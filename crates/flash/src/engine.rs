use std::cell::RefCell;
use std::rc::Rc;

use flash_core::{
    AnimatedValue, AnimationSpec, Dispose, Signal, TaskError, TaskHandle, TaskResult, dispatch,
    signal,
};
use web_time::Duration;

use crate::FlashTrigger;

/// How long the view stays fully opaque after a trigger.
pub const DWELL: Duration = Duration::from_secs(1);
/// Length of the ease-out fade that follows the dwell.
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// Timing of one flash cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlashSpec {
    pub dwell: Duration,
    pub fade: AnimationSpec,
}

impl Default for FlashSpec {
    fn default() -> Self {
        Self {
            dwell: DWELL,
            fade: AnimationSpec::ease_out(FADE_OUT),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    /// Fully opaque, dwell timer running.
    Showing,
    FadingOut,
}

struct FlashState {
    phase: Phase,
    opacity: AnimatedValue<f32>,
    /// The one in-flight dwell or fade task.
    pending: Option<TaskHandle>,
    /// Bumped on every trigger and on teardown.
    generation: u64,
    torn_down: bool,
}

impl FlashState {
    fn check(&self, generation: u64) -> TaskResult {
        if self.torn_down {
            return Err(TaskError::Cancelled);
        }
        if generation != self.generation {
            return Err(TaskError::Superseded {
                task: generation,
                current: self.generation,
            });
        }
        Ok(())
    }
}

struct Inner {
    spec: FlashSpec,
    visible: Signal<bool>,
    state: RefCell<FlashState>,
    subscription: RefCell<Option<Dispose>>,
}

impl Inner {
    // Only notify on change; `state` must not be borrowed here.
    fn set_visible(&self, v: bool) {
        if self.visible.get() != v {
            self.visible.set(v);
        }
    }
}

impl Drop for Inner {
    fn drop(&mut self) {
        if let Some(task) = self.state.get_mut().pending.take() {
            task.cancel();
        }
        if let Some(sub) = self.subscription.get_mut().take() {
            sub.run();
        }
    }
}

/// Shows a view instantly, holds it, then fades it out. A new trigger
/// cancels whatever cycle is in flight and starts over.
///
/// Cloning yields another handle to the same effect. Dropping the last
/// handle (or calling [`teardown`](Self::teardown)) cancels the pending
/// task and disconnects from the trigger.
#[derive(Clone)]
pub struct FlashEffect {
    inner: Rc<Inner>,
}

impl Default for FlashEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashEffect {
    pub fn new() -> Self {
        Self::with_spec(FlashSpec::default())
    }

    pub fn with_spec(spec: FlashSpec) -> Self {
        Self {
            inner: Rc::new(Inner {
                spec,
                visible: signal(false),
                state: RefCell::new(FlashState {
                    phase: Phase::Idle,
                    opacity: AnimatedValue::new(0.0, spec.fade),
                    pending: None,
                    generation: 0,
                    torn_down: false,
                }),
                subscription: RefCell::new(None),
            }),
        }
    }

    /// Creates an effect that flashes on every pulse of `trigger`.
    pub fn attach(trigger: &impl FlashTrigger) -> Self {
        Self::attach_with(trigger, FlashSpec::default())
    }

    pub fn attach_with(trigger: &impl FlashTrigger, spec: FlashSpec) -> Self {
        let effect = Self::with_spec(spec);
        let weak = Rc::downgrade(&effect.inner);
        let sub = trigger.connect(Rc::new(move || {
            if let Some(inner) = weak.upgrade() {
                FlashEffect { inner }.trigger();
            }
        }));
        *effect.inner.subscription.borrow_mut() = Some(sub);
        effect
    }

    /// Starts a new cycle, cancelling the previous one first.
    pub fn trigger(&self) {
        {
            let mut st = self.inner.state.borrow_mut();
            if st.torn_down {
                log::debug!("flash: trigger after teardown ignored");
                return;
            }
            if let Some(task) = st.pending.take() {
                task.cancel();
            }
            st.generation += 1;
            st.phase = Phase::Showing;
            st.opacity.snap_to(1.0);

            let generation = st.generation;
            let weak = Rc::downgrade(&self.inner);
            st.pending = Some(dispatch::post_delayed(
                "flash:dwell",
                self.inner.spec.dwell,
                move || {
                    let inner = weak.upgrade().ok_or(TaskError::Detached("flash:dwell"))?;
                    begin_fade(&inner, generation)
                },
            ));
            log::debug!("flash: showing (generation {generation})");
        }
        self.inner.set_visible(true);
    }

    /// Cancels any pending cycle and disconnects from the trigger. Later
    /// triggers are ignored and `visible` is never written again.
    pub fn teardown(&self) {
        let sub = {
            let mut st = self.inner.state.borrow_mut();
            if st.torn_down {
                return;
            }
            st.torn_down = true;
            st.generation += 1;
            if let Some(task) = st.pending.take() {
                task.cancel();
            }
            st.phase = Phase::Idle;
            self.inner.subscription.borrow_mut().take()
        };
        if let Some(sub) = sub {
            sub.run();
        }
        log::debug!("flash: torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.inner.state.borrow().torn_down
    }

    pub fn is_visible(&self) -> bool {
        self.inner.visible.get()
    }

    /// The visibility flag. Subscribe to it to re-render on change.
    pub fn visible(&self) -> Signal<bool> {
        self.inner.visible.clone()
    }

    /// Opacity to render with at the clock's current time.
    pub fn opacity(&self) -> f32 {
        let mut st = self.inner.state.borrow_mut();
        st.opacity.update();
        *st.opacity.get()
    }

    pub fn phase(&self) -> Phase {
        self.inner.state.borrow().phase
    }

    pub fn is_pending(&self) -> bool {
        self.inner
            .state
            .borrow()
            .pending
            .as_ref()
            .is_some_and(TaskHandle::is_pending)
    }

    pub fn generation(&self) -> u64 {
        self.inner.state.borrow().generation
    }

    pub fn spec(&self) -> FlashSpec {
        self.inner.spec
    }
}

impl std::fmt::Debug for FlashEffect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.inner.state.borrow();
        f.debug_struct("FlashEffect")
            .field("phase", &st.phase)
            .field("visible", &self.inner.visible.get())
            .field("generation", &st.generation)
            .field("torn_down", &st.torn_down)
            .finish()
    }
}

/// Dwell elapsed: start the fade and queue its completion.
fn begin_fade(inner: &Rc<Inner>, generation: u64) -> TaskResult {
    {
        let mut st = inner.state.borrow_mut();
        st.check(generation)?;
        st.phase = Phase::FadingOut;
        st.opacity.set_target(0.0);

        let weak = Rc::downgrade(inner);
        st.pending = Some(dispatch::post_delayed(
            "flash:fade",
            inner.spec.fade.duration,
            move || {
                let inner = weak.upgrade().ok_or(TaskError::Detached("flash:fade"))?;
                finish(&inner, generation)
            },
        ));
    }
    log::debug!("flash: fading out (generation {generation})");
    inner.set_visible(false);
    Ok(())
}

fn finish(inner: &Inner, generation: u64) -> TaskResult {
    let mut st = inner.state.borrow_mut();
    st.check(generation)?;
    st.phase = Phase::Idle;
    st.pending = None;
    st.opacity.update();
    log::debug!("flash: idle (generation {generation})");
    Ok(())
}
