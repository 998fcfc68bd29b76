#![allow(non_snake_case)]
//! Basic building blocks.

use std::rc::Rc;

use crate::{Modifier, View, ViewKind};

pub fn Column(modifier: Modifier) -> View {
    View::new(ViewKind::Column).modifier(modifier)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(ViewKind::Text { text: text.into() })
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(ViewKind::Button {
        text: text.into(),
        on_click: Some(Rc::new(on_click)),
    })
}

pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> View;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> View {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl IntoChildren for (View, View) {
    fn into_children(self) -> Vec<View> {
        vec![self.0, self.1]
    }
}

impl IntoChildren for (View, View, View) {
    fn into_children(self) -> Vec<View> {
        vec![self.0, self.1, self.2]
    }
}
