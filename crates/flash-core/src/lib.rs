//! # State, Events, Tasks and Time
//!
//! The core that the flash effect runs on. It is a small, single-threaded
//! reactive runtime; everything lives on the UI thread.
//!
//! - `Signal<T>`: observable value with explicit subscribe/unsubscribe.
//! - `EventStream`: payload-less "something happened" channel.
//! - `Scope` / `Dispose`: cleanups that run when UI unmounts.
//! - `remember_with_key`: state that survives between frames.
//! - `dispatch`: cancellable delayed tasks, drained by the frame loop.
//! - `animation`: clock, easing and `AnimatedValue`.
//!
//! ## Signals
//!
//! ```rust
//! use flash_core::*;
//!
//! let count = signal(0);
//! count.set(1);
//! count.update(|v| *v += 1);
//! assert_eq!(count.get(), 2);
//! ```
//!
//! Subscribers are called after every write, outside of the signal's borrow,
//! so a subscriber may read the signal it listens to.
//!
//! ## Delayed tasks
//!
//! ```rust
//! use flash_core::*;
//! use web_time::{Duration, Instant};
//!
//! let clock = TestClock::new(Instant::now());
//! set_clock(clock.clone());
//!
//! let handle = dispatch::post_delayed("hello", Duration::from_secs(1), || {
//!     log::info!("one second later");
//!     Ok(())
//! });
//! clock.advance(Duration::from_millis(500));
//! assert_eq!(dispatch::run_due(), 0);
//!
//! handle.cancel();
//! clock.advance(Duration::from_secs(1));
//! assert_eq!(dispatch::run_due(), 0);
//! ```
//!
//! ## Frames and unmounting
//!
//! `Scheduler::compose` drains due tasks, builds the root view and then
//! unmounts every remembered slot the root no longer asked for. Slot
//! initialisers run inside the slot's `Scope`, so cleanups registered with
//! `scoped_effect` run on unmount:
//!
//! ```rust
//! use flash_core::*;
//!
//! let mut sched = Scheduler::new();
//! sched.compose(|_| {
//!     remember_with_key("greeting", || {
//!         scoped_effect(|| on_unmount(|| log::info!("gone")));
//!     });
//!     Text("hi")
//! });
//! assert_eq!(mounted_slots(), 1);
//!
//! sched.compose(|_| Text("bye"));
//! assert_eq!(mounted_slots(), 0);
//! ```

pub mod animation;
pub mod dispatch;
pub mod effects;
pub mod error;
pub mod event;
pub mod modifier;
pub mod runtime;
pub mod scope;
pub mod signal;
pub mod tests;
pub mod view;
pub mod widgets;

pub use animation::*;
pub use dispatch::TaskHandle;
pub use effects::*;
pub use error::*;
pub use event::*;
pub use modifier::*;
pub use runtime::*;
pub use scope::*;
pub use signal::*;
pub use view::*;
pub use widgets::*;
