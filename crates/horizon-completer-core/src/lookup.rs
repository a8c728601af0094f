//! Parent lookup over any tree representation.
//!
//! Hit-testing only needs to walk from a target towards the document root and
//! ask a few questions of each node on the way. [`NodeLookup`] captures exactly
//! that, so the walk can run over a [`NodeTree`](crate::NodeTree) or over a
//! synthetic ancestor chain built in a test.

/// Read access to the ancestor chain of a tree.
pub trait NodeLookup {
    /// Node handle type.
    type Key: Copy + Eq + std::fmt::Debug;

    /// Parent of `node`, or `None` when `node` is detached or the root.
    fn parent_of(&self, node: Self::Key) -> Option<Self::Key>;

    /// Whether `node` is the document root, where ancestor walks stop.
    fn is_document_root(&self, node: Self::Key) -> bool;

    /// Whether `node` carries the given class.
    fn has_class(&self, node: Self::Key, class: &str) -> bool;

    /// Whether `node` clips its content without scrolling.
    fn is_clipped(&self, _node: Self::Key) -> bool {
        false
    }

    /// Iterate from `start` (inclusive) towards the root, stopping before the
    /// document root.
    fn ancestor_walk(&self, start: Self::Key) -> AncestorWalk<'_, Self>
    where
        Self: Sized,
    {
        AncestorWalk {
            lookup: self,
            next: Some(start),
        }
    }
}

/// Iterator returned by [`NodeLookup::ancestor_walk`].
pub struct AncestorWalk<'a, L: NodeLookup> {
    lookup: &'a L,
    next: Option<L::Key>,
}

impl<L: NodeLookup> Iterator for AncestorWalk<'_, L> {
    type Item = L::Key;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        if self.lookup.is_document_root(current) {
            self.next = None;
            return None;
        }
        self.next = self.lookup.parent_of(current);
        Some(current)
    }
}
