use crate::Modifier;
use std::rc::Rc;

pub type Callback = Rc<dyn Fn()>;

#[derive(Clone)]
pub enum ViewKind {
    Column,
    Text { text: String },
    Button { text: String, on_click: Option<Callback> },
}

impl std::fmt::Debug for ViewKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewKind::Column => write!(f, "Column"),
            ViewKind::Text { text } => f.debug_struct("Text").field("text", text).finish(),
            ViewKind::Button { text, .. } => f
                .debug_struct("Button")
                .field("text", text)
                .field("on_click", &"<callback>")
                .finish(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct View {
    pub kind: ViewKind,
    pub modifier: Modifier,
    pub children: Vec<View>,
}

impl View {
    pub fn new(kind: ViewKind) -> Self {
        View {
            kind,
            modifier: Modifier::default(),
            children: vec![],
        }
    }
    pub fn modifier(mut self, m: Modifier) -> Self {
        self.modifier = m;
        self
    }
    pub fn with_children(mut self, kids: Vec<View>) -> Self {
        self.children = kids;
        self
    }

    /// Flatten into draw order, multiplying alpha down the tree.
    pub fn render(&self) -> Scene {
        let mut scene = Scene::default();
        self.paint(1.0, &mut scene);
        scene
    }

    fn paint(&self, parent_alpha: f32, scene: &mut Scene) {
        let alpha = parent_alpha * self.modifier.effective_alpha();
        match &self.kind {
            ViewKind::Column => {}
            ViewKind::Text { text } => scene.nodes.push(SceneNode::Text {
                text: text.clone(),
                alpha,
            }),
            ViewKind::Button { text, on_click } => scene.nodes.push(SceneNode::Button {
                text: text.clone(),
                alpha,
                on_click: on_click.clone(),
            }),
        }
        for child in &self.children {
            child.paint(alpha, scene);
        }
    }
}

/// Renderable scene
#[derive(Clone, Debug, Default)]
pub struct Scene {
    pub nodes: Vec<SceneNode>,
}

#[derive(Clone)]
pub enum SceneNode {
    Text {
        text: String,
        alpha: f32,
    },
    Button {
        text: String,
        alpha: f32,
        on_click: Option<Callback>,
    },
}

impl SceneNode {
    pub fn text(&self) -> &str {
        match self {
            SceneNode::Text { text, .. } | SceneNode::Button { text, .. } => text,
        }
    }

    pub fn alpha(&self) -> f32 {
        match self {
            SceneNode::Text { alpha, .. } | SceneNode::Button { alpha, .. } => *alpha,
        }
    }
}

impl std::fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SceneNode::Text { .. } => "Text",
            SceneNode::Button { .. } => "Button",
        };
        f.debug_struct(name)
            .field("text", &self.text())
            .field("alpha", &self.alpha())
            .finish()
    }
}

impl Scene {
    pub fn find(&self, text: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.text() == text)
    }

    /// Alpha of the first node labelled `text`.
    pub fn alpha_of(&self, text: &str) -> Option<f32> {
        self.find(text).map(SceneNode::alpha)
    }

    /// Invokes the click handler of the button labelled `text`.
    /// Returns false if there is no such button or it has no handler.
    pub fn click(&self, text: &str) -> bool {
        let handler = self.nodes.iter().find_map(|n| match n {
            SceneNode::Button {
                text: t,
                on_click: Some(cb),
                ..
            } if t == text => Some(cb.clone()),
            _ => None,
        });
        match handler {
            Some(cb) => {
                cb();
                true
            }
            None => false,
        }
    }
}
