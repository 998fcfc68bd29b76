//! # Flash
//!
//! Draws attention to a view the way scroll indicators do: the view becomes
//! fully opaque at once, stays for a second, then fades out over 0.3 s with
//! an ease-out curve. Triggering again at any point restarts the cycle; the
//! old cycle's fade never runs.
//!
//! Two kinds of trigger are supported:
//!
//! - an [`EventStream`](flash_core::EventStream): every `send()` flashes;
//! - a `Signal<bool>`: every change of the value flashes, whichever way it
//!   flips.
//!
//! ```rust
//! use flash::*;
//! use flash_core::*;
//!
//! let ping = EventStream::new();
//! let mut sched = Scheduler::new();
//!
//! ping.send(); // nobody is listening yet
//!
//! let frame = sched.compose(|_| Column(Modifier::new()).child((
//!     Text("Saved").flashing("saved", &ping),
//!     Button("Save", {
//!         let ping = ping.clone();
//!         move || ping.send()
//!     }),
//! )));
//! assert_eq!(frame.scene.alpha_of("Saved"), Some(0.0));
//!
//! assert!(frame.click("Save"));
//! let frame = sched.compose(|_| Text("Saved").flashing("saved", &ping));
//! assert_eq!(frame.scene.alpha_of("Saved"), Some(1.0));
//! ```
//!
//! Without composition, drive a [`FlashEffect`] directly and observe its
//! `visible()` signal; the frame loop (or anything else) must call
//! `flash_core::dispatch::run_due` for the timers to fire.

pub mod engine;
pub mod flashing;
pub mod trigger;

pub use engine::{DWELL, FADE_OUT, FlashEffect, FlashSpec, Phase};
pub use flashing::{FlashExt, Flashing, FlashingWith};
pub use trigger::FlashTrigger;
