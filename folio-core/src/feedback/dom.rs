//! Minimal view of a document tree and a text selection.
//!
//! The feedback link only needs a handful of DOM facilities: `id`
//! attributes, sibling/parent links and document-order comparison. Hosts
//! implement these traits over whatever tree they have; [`NodeTree`]
//! is the in-memory implementation.
//!
//! [`NodeTree`]: super::tree::NodeTree

use std::ops::BitOr;

/// Bit set returned by [`Document::compare_document_position`].
///
/// The bit values match the DOM `Node.DOCUMENT_POSITION_*` constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocumentPosition(u16);

impl DocumentPosition {
    pub const DISCONNECTED: Self = Self(0x01);
    pub const PRECEDING: Self = Self(0x02);
    pub const FOLLOWING: Self = Self(0x04);
    pub const CONTAINS: Self = Self(0x08);
    pub const CONTAINED_BY: Self = Self(0x10);

    /// Same node.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// True if any bit of `other` is set in `self`.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

impl BitOr for DocumentPosition {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Read-only access to a document tree.
pub trait Document {
    /// Cheap node handle.
    type Node: Copy + Eq;

    /// The node's `id` attribute, if it has one.
    fn id(&self, node: Self::Node) -> Option<&str>;

    fn previous_sibling(&self, node: Self::Node) -> Option<Self::Node>;

    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Position of `other` relative to `node`, as in
    /// `node.compareDocumentPosition(other)`.
    fn compare_document_position(&self, node: Self::Node, other: Self::Node)
        -> DocumentPosition;
}

/// A user's text selection over nodes of type `N`.
///
/// Anchor and focus are the two endpoints in the order the user made
/// them; they need not be in document order.
pub trait Selection<N> {
    fn anchor_node(&self) -> Option<N>;

    fn focus_node(&self) -> Option<N>;

    /// Plain-text rendering of the selected range.
    fn text(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_bits_combine() {
        let pos = DocumentPosition::FOLLOWING | DocumentPosition::CONTAINED_BY;
        assert_eq!(pos, DocumentPosition::CONTAINED_BY | DocumentPosition::FOLLOWING);
        assert_ne!(pos, DocumentPosition::FOLLOWING);
        assert!(pos.intersects(DocumentPosition::FOLLOWING));
        assert!(pos.intersects(DocumentPosition::CONTAINED_BY));
        assert!(!pos.intersects(DocumentPosition::PRECEDING));
        assert!(!DocumentPosition::empty().intersects(DocumentPosition::FOLLOWING));
    }
}
