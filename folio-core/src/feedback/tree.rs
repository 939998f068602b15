//! Arena-backed document tree used outside the browser.

use super::dom::{Document, DocumentPosition, Selection};

/// Handle to a node inside a [`NodeTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum NodeKind {
    Element { id: Option<String> },
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeData {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A tree of elements (with optional `id`) and text nodes.
///
/// The root is an element without an id, standing in for the document
/// body.
#[derive(Debug, Clone)]
pub struct NodeTree {
    nodes: Vec<NodeData>,
}

/// A boundary point: a node plus an offset.
///
/// For text nodes the offset counts characters; for elements it counts
/// children, as in DOM ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub node: NodeId,
    pub offset: usize,
}

impl Position {
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

impl NodeTree {
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeData {
                kind: NodeKind::Element { id: None },
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Append an element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeId, id: Option<&str>) -> NodeId {
        self.push(
            parent,
            NodeKind::Element {
                id: id.map(str::to_string),
            },
        )
    }

    /// Append a text node as the last child of `parent`.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> NodeId {
        self.push(parent, NodeKind::Text(text.to_string()))
    }

    /// A `parent` that is not part of this tree leaves the new node
    /// detached, like a DOM node that was never inserted.
    fn push(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = match self.nodes.get_mut(parent.0) {
            Some(data) => {
                data.children.push(id);
                Some(parent)
            }
            None => None,
        };
        self.nodes.push(NodeData {
            kind,
            parent,
            children: Vec::new(),
        });
        id
    }

    fn node(&self, node: NodeId) -> Option<&NodeData> {
        self.nodes.get(node.0)
    }

    /// Concatenated text of `node` and its descendants.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        for n in self.descendants(node) {
            if let Some(NodeKind::Text(text)) = self.node(n).map(|d| &d.kind) {
                out.push_str(text);
            }
        }
        out
    }

    /// `node` followed by its descendants, in document order. Empty for
    /// nodes outside this tree.
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![node];
        while let Some(n) = stack.pop() {
            let Some(data) = self.node(n) else {
                continue;
            };
            order.push(n);
            stack.extend(data.children.iter().rev().copied());
        }
        order
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = self.node(node).and_then(|d| d.parent);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.node(n).and_then(|d| d.parent);
        }
        false
    }

    /// Number of characters of text preceding `node` in document order.
    fn text_before(&self, node: NodeId) -> usize {
        let mut count = 0;
        for n in self.descendants(self.root()) {
            if n == node {
                break;
            }
            if let Some(NodeKind::Text(text)) = self.node(n).map(|d| &d.kind) {
                count += text.chars().count();
            }
        }
        count
    }

    /// Character offset of a boundary point within the document's text.
    /// Points on nodes outside this tree sit at offset 0.
    fn boundary_offset(&self, pos: Position) -> usize {
        let Some(data) = self.node(pos.node) else {
            return 0;
        };
        match &data.kind {
            NodeKind::Text(text) => {
                self.text_before(pos.node) + pos.offset.min(text.chars().count())
            }
            NodeKind::Element { .. } => match data.children.get(pos.offset) {
                Some(child) => self.text_before(*child),
                None => {
                    self.text_before(pos.node) + self.text_content(pos.node).chars().count()
                }
            },
        }
    }

    /// Select the text between two boundary points.
    pub fn select(&self, anchor: Position, focus: Position) -> TextSelection<'_> {
        TextSelection {
            tree: self,
            anchor: Some(anchor),
            focus: Some(focus),
        }
    }

    /// Boundary points at the start and end of `node`'s contents.
    pub fn contents_range(&self, node: NodeId) -> (Position, Position) {
        let end = match self.node(node) {
            Some(NodeData {
                kind: NodeKind::Text(text),
                ..
            }) => text.chars().count(),
            Some(data) => data.children.len(),
            None => 0,
        };
        (Position::new(node, 0), Position::new(node, end))
    }

    /// Select everything inside `node`.
    pub fn select_contents(&self, node: NodeId) -> TextSelection<'_> {
        let (start, end) = self.contents_range(node);
        self.select(start, end)
    }

    /// A selection with no endpoints, as reported when nothing is selected.
    pub fn empty_selection(&self) -> TextSelection<'_> {
        TextSelection {
            tree: self,
            anchor: None,
            focus: None,
        }
    }
}

impl Default for NodeTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for NodeTree {
    type Node = NodeId;

    fn id(&self, node: NodeId) -> Option<&str> {
        match &self.node(node)?.kind {
            NodeKind::Element { id } => id.as_deref(),
            NodeKind::Text(_) => None,
        }
    }

    fn previous_sibling(&self, node: NodeId) -> Option<NodeId> {
        let parent = self.node(node)?.parent?;
        let siblings = &self.node(parent)?.children;
        let index = siblings.iter().position(|&n| n == node)?;
        index.checked_sub(1).map(|i| siblings[i])
    }

    fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.node(node)?.parent
    }

    fn compare_document_position(&self, node: NodeId, other: NodeId) -> DocumentPosition {
        if node == other {
            return DocumentPosition::empty();
        }
        let order = self.descendants(self.root());
        let (Some(node_index), Some(other_index)) = (
            order.iter().position(|&n| n == node),
            order.iter().position(|&n| n == other),
        ) else {
            return DocumentPosition::DISCONNECTED;
        };
        if self.is_ancestor(node, other) {
            DocumentPosition::CONTAINED_BY | DocumentPosition::FOLLOWING
        } else if self.is_ancestor(other, node) {
            DocumentPosition::CONTAINS | DocumentPosition::PRECEDING
        } else if other_index > node_index {
            DocumentPosition::FOLLOWING
        } else {
            DocumentPosition::PRECEDING
        }
    }
}

/// A selection over a [`NodeTree`].
#[derive(Debug, Clone, Copy)]
pub struct TextSelection<'a> {
    tree: &'a NodeTree,
    anchor: Option<Position>,
    focus: Option<Position>,
}

impl Selection<NodeId> for TextSelection<'_> {
    fn anchor_node(&self) -> Option<NodeId> {
        self.anchor.map(|p| p.node)
    }

    fn focus_node(&self) -> Option<NodeId> {
        self.focus.map(|p| p.node)
    }

    fn text(&self) -> String {
        let (Some(anchor), Some(focus)) = (self.anchor, self.focus) else {
            return String::new();
        };
        let a = self.tree.boundary_offset(anchor);
        let b = self.tree.boundary_offset(focus);
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        self.tree
            .text_content(self.tree.root())
            .chars()
            .skip(start)
            .take(end - start)
            .collect()
    }
}
