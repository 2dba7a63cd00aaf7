use alloc::string::String;
use alloc::vec::Vec;

/// A named position in the tracked content.
///
/// The anchor's vertical offset is not stored: layouts move, so it is recomputed by the adapter
/// on every tracking check.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Anchor {
    pub id: String,
    pub label: String,
    /// Level `N` of the heading element wrapped by the anchor (`<h2>` → `2`), if any.
    pub heading_level: Option<u8>,
}

impl Anchor {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            heading_level: None,
        }
    }

    pub fn with_heading_level(mut self, heading_level: Option<u8>) -> Self {
        self.heading_level = heading_level;
        self
    }

    /// Heading depth used for outlining. Anchors without a heading are infinitely deep.
    fn depth(&self) -> u32 {
        self.heading_level.map_or(u32::MAX, u32::from)
    }
}

/// Anchors in document order.
///
/// Document order is also the bisection domain for tracking, so under normal layouts the
/// anchors' offsets are ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnchorSet {
    anchors: Vec<Anchor>,
}

impl AnchorSet {
    pub fn new(anchors: Vec<Anchor>) -> Self {
        Self { anchors }
    }

    pub fn len(&self) -> usize {
        self.anchors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.anchors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Anchor> {
        self.anchors.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Anchor> {
        self.anchors.iter()
    }

    pub fn as_slice(&self) -> &[Anchor] {
        &self.anchors
    }

    /// Returns the index of the first anchor named `id`.
    ///
    /// Empty ids never match.
    pub fn index_of(&self, id: &str) -> Option<usize> {
        if id.is_empty() {
            return None;
        }
        self.anchors.iter().position(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index_of(id).is_some()
    }

    /// Builds the heading outline of the set.
    ///
    /// Each anchor becomes a child of the nearest preceding anchor with a strictly shallower
    /// heading level; anchors with no heading nest under whatever precedes them.
    pub fn outline(&self) -> Vec<OutlineNode> {
        // Stack of open nodes as (depth, path of child indexes from the root).
        let mut roots: Vec<OutlineNode> = Vec::new();
        let mut open: Vec<(u32, Vec<usize>)> = Vec::new();

        for (index, anchor) in self.anchors.iter().enumerate() {
            let depth = anchor.depth();
            while open.last().is_some_and(|(d, _)| depth <= *d) {
                open.pop();
            }

            let node = OutlineNode {
                index,
                children: Vec::new(),
            };
            let path = match open.last() {
                None => {
                    roots.push(node);
                    alloc::vec![roots.len() - 1]
                }
                Some((_, parent_path)) => {
                    let mut path = parent_path.clone();
                    let parent = node_at_mut(&mut roots, parent_path);
                    parent.children.push(node);
                    path.push(parent.children.len() - 1);
                    path
                }
            };
            open.push((depth, path));
        }

        roots
    }
}

impl FromIterator<Anchor> for AnchorSet {
    fn from_iter<T: IntoIterator<Item = Anchor>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a AnchorSet {
    type Item = &'a Anchor;
    type IntoIter = core::slice::Iter<'a, Anchor>;

    fn into_iter(self) -> Self::IntoIter {
        self.anchors.iter()
    }
}

/// A node of the heading outline; `index` points into the owning [`AnchorSet`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineNode {
    pub index: usize,
    pub children: Vec<OutlineNode>,
}

fn node_at_mut<'a>(roots: &'a mut [OutlineNode], path: &[usize]) -> &'a mut OutlineNode {
    // Paths always start at a root.
    let mut node = &mut roots[path[0]];
    for &i in &path[1..] {
        node = &mut node.children[i];
    }
    node
}
