use std::ptr::NonNull;

pub(crate) type Link<T> = Option<NodeRef<T>>;

// NOTE: Nodes are allocated with Box<T> and leaked into a NonNull, so that taking one back with
// Box::from_raw lets the value be moved out of the heap when the node is freed.
//
// Every node is owned by exactly one link: either the list's head (the sentinel) or the next link
// of the node before it. A NodeRef is only a handle to that node, it is never used to free a node
// that is still linked.

pub(crate) struct NodeRef<T>(pub NonNull<Node<T>>);

impl<T> NodeRef<T> {
    pub fn from_node(node: Node<T>) -> NodeRef<T> {
        NodeRef(NonNull::from(Box::leak(Box::new(node))))
    }

    /// Frees the node, returning its contents.
    pub fn take_node(self) -> Node<T> {
        // SAFETY: The node was allocated with Box in from_node, and is only ever taken once, by
        // whichever link owned it.
        unsafe { *Box::from_raw(self.0.as_ptr()) }
    }

    pub fn value<'a>(self) -> &'a T {
        // SAFETY: The node is alive for as long as the list that links it is borrowed, and the
        // callers bind 'a to that borrow.
        unsafe { &(*self.0.as_ptr()).value }
    }

    pub fn value_mut<'a>(self) -> &'a mut T {
        // SAFETY: As above, with callers holding a unique borrow of the list.
        unsafe { &mut (*self.0.as_ptr()).value }
    }

    pub fn next<'a>(self) -> &'a Link<T> {
        // SAFETY: As with value.
        unsafe { &(*self.0.as_ptr()).next }
    }

    pub fn next_mut<'a>(self) -> &'a mut Link<T> {
        // SAFETY: As with value_mut.
        unsafe { &mut (*self.0.as_ptr()).next }
    }
}

impl<T> Clone for NodeRef<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for NodeRef<T> {}

impl<T> PartialEq for NodeRef<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Eq for NodeRef<T> {}

pub(crate) struct Node<T> {
    pub value: T,
    pub next: Link<T>,
}

/// Allocates a node holding `value` and links it into `link`, so that the node previously owned
/// by `link` becomes its successor.
pub(crate) fn splice<T>(link: &mut Link<T>, value: T) -> NodeRef<T> {
    let node = NodeRef::from_node(Node {
        value,
        next: *link,
    });
    *link = Some(node);
    node
}

/// Unlinks the node owned by `link`, linking its successor in its place, and returns the value it
/// held.
pub(crate) fn unsplice<T>(link: &mut Link<T>) -> Option<T> {
    let node = link.take()?.take_node();
    *link = node.next;
    Some(node.value)
}

/// A position within a [`ForwardList`](super::ForwardList).
pub(crate) enum Position<T> {
    /// The sentinel before the first node. Always valid, even for an empty list.
    BeforeBegin,
    Node(NodeRef<T>),
    End,
}

impl<T> Position<T> {
    pub const fn from_link(link: Link<T>) -> Position<T> {
        match link {
            Some(node) => Position::Node(node),
            None => Position::End,
        }
    }
}

impl<T> Clone for Position<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Position<T> {}

impl<T> PartialEq for Position<T> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Position::BeforeBegin, Position::BeforeBegin) => true,
            (Position::Node(a), Position::Node(b)) => a == b,
            (Position::End, Position::End) => true,
            _ => false,
        }
    }
}
