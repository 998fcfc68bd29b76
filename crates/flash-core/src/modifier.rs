/// Per-view presentation attributes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Modifier {
    /// Opacity in `0.0..=1.0`; `None` means fully opaque.
    pub alpha: Option<f32>,
}

impl Modifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Multiplies into any alpha already set, so stacked effects compose.
    pub fn alpha(mut self, a: f32) -> Self {
        let a = a.clamp(0.0, 1.0);
        self.alpha = Some(self.alpha.map_or(a, |prev| prev * a));
        self
    }

    pub fn effective_alpha(&self) -> f32 {
        self.alpha.unwrap_or(1.0)
    }
}
