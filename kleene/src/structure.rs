use std::fmt;
use std::fmt::Debug;

/// One unit of matchable input: a value plus an optional subtree.
///
/// A node owns its first child and its next sibling, so the
/// `first_child`/`next_sibling` links always form a forest. Nodes are
/// constructed once, either as a [leaf](Structure::leaf) wrapping a bare
/// value or as an [internal node](Structure::node) wrapping a value plus an
/// ordered list of children, and are never mutated afterwards. Matching only
/// ever reads them.
///
/// An input sequence is a slice of root nodes; the sequence order comes from
/// the slice, the tree shape from the child links.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Structure<T> {
    value: T,
    first_child: Option<Box<Structure<T>>>,
    next_sibling: Option<Box<Structure<T>>>,
}

impl<T> Structure<T> {
    /// A leaf node: a bare value with no children. This is the degenerate
    /// case used for flat input such as text, where every item wraps one
    /// character.
    pub fn leaf(value: T) -> Self {
        Self {
            value,
            first_child: None,
            next_sibling: None,
        }
    }

    /// An internal node. `children` become the node's child chain, in order.
    pub fn node(value: T, children: impl IntoIterator<Item = Structure<T>>) -> Self {
        let children: Vec<_> = children.into_iter().collect();
        let mut first_child = None;
        for mut child in children.into_iter().rev() {
            child.next_sibling = first_child;
            first_child = Some(Box::new(child));
        }
        Self {
            value,
            first_child,
            next_sibling: None,
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn first_child(&self) -> Option<&Structure<T>> {
        self.first_child.as_deref()
    }

    pub fn next_sibling(&self) -> Option<&Structure<T>> {
        self.next_sibling.as_deref()
    }

    /// Iterate over this node's children, eldest first.
    pub fn children(&self) -> Children<'_, T> {
        Children {
            next: self.first_child.as_deref(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }
}

impl<T: Debug> Debug for Structure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)?;
        if self.first_child.is_some() {
            write!(f, "[")?;
            for (i, child) in self.children().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                child.fmt(f)?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// Iterator over the children of a [`Structure`], walking the sibling chain.
pub struct Children<'a, T> {
    next: Option<&'a Structure<T>>,
}

impl<'a, T> Iterator for Children<'a, T> {
    type Item = &'a Structure<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next?;
        self.next = node.next_sibling.as_deref();
        Some(node)
    }
}
