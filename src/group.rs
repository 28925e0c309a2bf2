//! Nested drawables and flattening.

use crate::path::Path;

/// Anything that can be flattened into a single path.
#[derive(Debug, Clone, PartialEq)]
pub enum Drawable {
    Path(Path),
    Group(Group),
}

impl Drawable {
    pub fn flatten(&self) -> Path {
        match self {
            Drawable::Path(path) => path.flatten(),
            Drawable::Group(group) => group.flatten(),
        }
    }
}

impl From<Path> for Drawable {
    fn from(path: Path) -> Self {
        Drawable::Path(path)
    }
}

impl From<Group> for Drawable {
    fn from(group: Group) -> Self {
        Drawable::Group(group)
    }
}

/// An ordered list of drawables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    pub children: Vec<Drawable>,
}

impl Group {
    pub fn new(children: Vec<Drawable>) -> Self {
        Self { children }
    }

    /// Concatenate every descendant path, in document order.
    pub fn flatten(&self) -> Path {
        let mut path = Path::new();
        for child in &self.children {
            path.extend(child.flatten());
        }
        path
    }
}
