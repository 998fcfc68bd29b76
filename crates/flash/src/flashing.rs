#![allow(non_snake_case)]

use flash_core::{View, on_unmount, remember_with_key, scoped_effect};

use crate::{FlashEffect, FlashSpec, FlashTrigger};

/// Wraps `content` so it flashes whenever `trigger` pulses.
///
/// The effect is remembered under `key`: it is created (and bound to
/// `trigger`) the first time the key is composed, and torn down in the first
/// frame that no longer composes it. Passing a different trigger for an
/// existing key has no effect.
pub fn Flashing(key: impl Into<String>, trigger: &impl FlashTrigger, content: View) -> View {
    FlashingWith(key, trigger, FlashSpec::default(), content)
}

pub fn FlashingWith(
    key: impl Into<String>,
    trigger: &impl FlashTrigger,
    spec: FlashSpec,
    content: View,
) -> View {
    let key = key.into();
    let effect = remember_with_key(format!("flash:{key}"), || {
        let effect = FlashEffect::attach_with(trigger, spec);
        scoped_effect({
            let effect = effect.clone();
            move || on_unmount(move || effect.teardown())
        });
        effect
    });

    let alpha = effect.opacity();
    let modifier = content.modifier.alpha(alpha);
    content.modifier(modifier)
}

/// `view.flashing(key, &trigger)`
pub trait FlashExt: Sized {
    fn flashing(self, key: impl Into<String>, trigger: &impl FlashTrigger) -> View;

    fn flashing_with(
        self,
        key: impl Into<String>,
        trigger: &impl FlashTrigger,
        spec: FlashSpec,
    ) -> View;
}

impl FlashExt for View {
    fn flashing(self, key: impl Into<String>, trigger: &impl FlashTrigger) -> View {
        Flashing(key, trigger, self)
    }

    fn flashing_with(
        self,
        key: impl Into<String>,
        trigger: &impl FlashTrigger,
        spec: FlashSpec,
    ) -> View {
        FlashingWith(key, trigger, spec, self)
    }
}
