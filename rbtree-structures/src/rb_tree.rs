use core::borrow::Borrow;
use core::cmp::Ordering;
use core::fmt;
use core::iter::FusedIterator;
use core::mem;

use alloc::vec::Vec;
use log::{debug, trace};

use crate::error::InvariantViolation;
use crate::node_arena::NodeArena;

/// Arena index of the shared null leaf.
///
/// Every real node has two children; a missing child is represented by a
/// link to this sentinel. It is always black and never holds a value. Its
/// parent link is only ever set while a removal is rebalancing, where it
/// marks the position of the double-black node.
const NIL: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Red => f.write_str("Red"),
            Color::Black => f.write_str("Black"),
        }
    }
}

/// Order in which [`RBTree::traverse`] visits nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TraversalOrder {
    /// Left subtree, node, right subtree.
    #[default]
    InOrder,
    /// Node, left subtree, right subtree.
    PreOrder,
    /// Left subtree, right subtree, node.
    PostOrder,
}

#[derive(Debug, Clone)]
struct Node<T> {
    value: Option<T>,
    color: Color,
    parent: Option<usize>,
    left: usize,
    right: usize,
}

impl<T> Node<T> {
    fn null_leaf() -> Node<T> {
        Node {
            value: None,
            color: Color::Black,
            parent: None,
            left: NIL,
            right: NIL,
        }
    }

    fn new_red(value: T, parent: Option<usize>) -> Node<T> {
        Node {
            value: Some(value),
            color: Color::Red,
            parent,
            left: NIL,
            right: NIL,
        }
    }
}

/// Read-only view of one node, handed to [`RBTree::traverse`] visitors.
///
/// Neighbor values are `None` where the neighbor is a null leaf (or, for
/// `parent`, where the node is the root).
#[derive(Debug, PartialEq, Eq)]
pub struct NodeContents<'a, T> {
    pub value: &'a T,
    pub color: Color,
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
    pub parent: Option<&'a T>,
}

impl<'a, T> Clone for NodeContents<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for NodeContents<'a, T> {}

fn write_neighbor<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    label: &str,
    neighbor: Option<&T>,
) -> fmt::Result {
    match neighbor {
        Some(v) => write!(f, "{}: {}", label, v),
        None => write!(f, "{}: nil", label),
    }
}

impl<'a, T: fmt::Display> fmt::Display for NodeContents<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  NODE: {} ({})", self.value, self.color)?;
        write_neighbor(f, "PARENT", self.parent)?;
        f.write_str("\n")?;
        write_neighbor(f, "  LEFT", self.left)?;
        f.write_str("\n")?;
        write_neighbor(f, " RIGHT", self.right)
    }
}

/// An ordered set backed by a red-black tree.
///
/// Nodes live in a [`NodeArena`] and link to each other by index, so the
/// parent back-links never own anything. Values are unique: inserting a value
/// that compares equal to one already present is rejected.
#[derive(Clone)]
pub struct RBTree<T> {
    nodes: NodeArena<Node<T>>,
    root: Option<usize>,
    len: usize,
    order: TraversalOrder,
}

impl<T> RBTree<T> {
    pub fn new() -> RBTree<T> {
        Self::with_traversal_order(TraversalOrder::InOrder)
    }

    /// Create an empty tree whose `Display` output walks the tree in `order`.
    pub fn with_traversal_order(order: TraversalOrder) -> RBTree<T> {
        let mut nodes = NodeArena::new();
        let nil = nodes.insert(Node::null_leaf());
        debug_assert_eq!(nil, NIL, "null leaf must occupy the first arena slot");

        RBTree {
            nodes,
            root: None,
            len: 0,
            order,
        }
    }

    pub fn traversal_order(&self) -> TraversalOrder {
        self.order
    }

    pub fn set_traversal_order(&mut self, order: TraversalOrder) {
        self.order = order;
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of values stored in the tree. Same as [`len`](Self::len).
    pub fn number_of_nodes(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
        let nil = self.nodes.insert(Node::null_leaf());
        debug_assert_eq!(nil, NIL, "null leaf must occupy the first arena slot");

        self.root = None;
        self.len = 0;
    }

    /// Number of real nodes on the longest root-to-leaf path.
    pub fn height(&self) -> usize {
        self.root.map_or(0, |root| self.subtree_height(root))
    }

    fn subtree_height(&self, node: usize) -> usize {
        if node == NIL {
            return 0;
        }

        let left = self.subtree_height(self.nodes[node].left);
        let right = self.subtree_height(self.nodes[node].right);
        1 + left.max(right)
    }

    fn value(&self, node: usize) -> &T {
        self.nodes[node]
            .value
            .as_ref()
            .expect("attempted to read the value of a null leaf")
    }

    fn color(&self, node: usize) -> Color {
        self.nodes[node].color
    }

    fn set_color(&mut self, node: usize, color: Color) {
        debug_assert!(
            node != NIL || color == Color::Black,
            "attempted to paint the null leaf red"
        );
        self.nodes[node].color = color;
    }

    fn set_left_child(&mut self, parent: usize, child: usize) {
        self.nodes[parent].left = child;
        if child != NIL {
            self.nodes[child].parent = Some(parent);
        }
    }

    fn set_right_child(&mut self, parent: usize, child: usize) {
        self.nodes[parent].right = child;
        if child != NIL {
            self.nodes[child].parent = Some(parent);
        }
    }

    /// Point whatever referred to `old` (its parent's child link, or the root
    /// pointer) at `new`, and give `new` the parent `old` had.
    ///
    /// `new` may be the null leaf; its parent link is then the double-black
    /// position used by `repair_remove`.
    fn replace_child(&mut self, parent: Option<usize>, old: usize, new: usize) {
        match parent {
            Some(p) => {
                if self.nodes[p].left == old {
                    self.nodes[p].left = new;
                } else {
                    debug_assert_eq!(self.nodes[p].right, old, "broken link at node {}", p);
                    self.nodes[p].right = new;
                }
            }
            None => {
                self.root = if new == NIL { None } else { Some(new) };
            }
        }

        self.nodes[new].parent = parent;
    }

    fn rotate_left(&mut self, node: usize) {
        let pivot = self.nodes[node].right;
        assert!(
            pivot != NIL,
            "attempted to rotate node {} left without a right child",
            node
        );
        trace!("rotate left at node {} (pivot {})", node, pivot);

        let parent = self.nodes[node].parent;
        let moved = self.nodes[pivot].left;

        self.set_right_child(node, moved);
        self.replace_child(parent, node, pivot);
        self.set_left_child(pivot, node);
    }

    fn rotate_right(&mut self, node: usize) {
        let pivot = self.nodes[node].left;
        assert!(
            pivot != NIL,
            "attempted to rotate node {} right without a left child",
            node
        );
        trace!("rotate right at node {} (pivot {})", node, pivot);

        let parent = self.nodes[node].parent;
        let moved = self.nodes[pivot].right;

        self.set_left_child(node, moved);
        self.replace_child(parent, node, pivot);
        self.set_right_child(pivot, node);
    }

    fn leftmost(&self, mut node: usize) -> usize {
        while self.nodes[node].left != NIL {
            node = self.nodes[node].left;
        }

        node
    }

    fn rightmost(&self, mut node: usize) -> usize {
        while self.nodes[node].right != NIL {
            node = self.nodes[node].right;
        }

        node
    }

    fn next_node(&self, node: usize) -> Option<usize> {
        let right = self.nodes[node].right;
        if right != NIL {
            return Some(self.leftmost(right));
        }

        let mut cur = node;
        while let Some(parent) = self.nodes[cur].parent {
            if self.nodes[parent].left == cur {
                return Some(parent);
            }

            cur = parent;
        }

        None
    }

    fn prev_node(&self, node: usize) -> Option<usize> {
        let left = self.nodes[node].left;
        if left != NIL {
            return Some(self.rightmost(left));
        }

        let mut cur = node;
        while let Some(parent) = self.nodes[cur].parent {
            if self.nodes[parent].right == cur {
                return Some(parent);
            }

            cur = parent;
        }

        None
    }

    /// Binary search driven by `cmp`, which orders the probe relative to a
    /// stored value.
    fn find_by<F>(&self, mut cmp: F) -> Option<usize>
    where
        F: FnMut(&T) -> Ordering,
    {
        let mut cur = self.root?;

        while cur != NIL {
            cur = match cmp(self.value(cur)) {
                Ordering::Equal => return Some(cur),
                Ordering::Less => self.nodes[cur].left,
                Ordering::Greater => self.nodes[cur].right,
            };
        }

        None
    }

    pub(crate) fn get_by<F>(&self, cmp: F) -> Option<&T>
    where
        F: FnMut(&T) -> Ordering,
    {
        self.find_by(cmp).map(|node| self.value(node))
    }

    /// Mutable access to a stored value. Callers must not change the parts of
    /// the value that determine its ordering.
    pub(crate) fn get_by_mut<F>(&mut self, cmp: F) -> Option<&mut T>
    where
        F: FnMut(&T) -> Ordering,
    {
        let node = self.find_by(cmp)?;
        self.nodes[node].value.as_mut()
    }

    pub fn get<Q>(&self, value: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get_by(|v| value.cmp(v.borrow()))
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_by(|v| value.cmp(v.borrow())).is_some()
    }

    pub fn first(&self) -> Option<&T> {
        self.root.map(|root| self.value(self.leftmost(root)))
    }

    pub fn last(&self) -> Option<&T> {
        self.root.map(|root| self.value(self.rightmost(root)))
    }

    /// Insert `value`, returning `false` (and leaving the tree untouched) if
    /// an equal value is already present.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut parent = None;
        let mut cur = self.root.unwrap_or(NIL);
        let mut went_left = false;

        while cur != NIL {
            match value.cmp(self.value(cur)) {
                Ordering::Equal => {
                    debug!("rejected duplicate insert (matches node {})", cur);
                    return false;
                }
                Ordering::Less => {
                    parent = Some(cur);
                    went_left = true;
                    cur = self.nodes[cur].left;
                }
                Ordering::Greater => {
                    parent = Some(cur);
                    went_left = false;
                    cur = self.nodes[cur].right;
                }
            }
        }

        let node = self.nodes.insert(Node::new_red(value, parent));
        match parent {
            None => self.root = Some(node),
            Some(p) if went_left => self.nodes[p].left = node,
            Some(p) => self.nodes[p].right = node,
        }

        self.len += 1;
        self.repair_insert(node);

        debug!("inserted node {} ({} nodes)", node, self.len);
        true
    }

    fn repair_insert(&mut self, mut node: usize) {
        loop {
            let parent = match self.nodes[node].parent {
                Some(p) => p,
                None => {
                    trace!("insert case 1 at node {}", node);
                    self.set_color(node, Color::Black);
                    return;
                }
            };

            if self.color(parent) == Color::Black {
                trace!("insert case 2 at node {}", node);
                return;
            }

            /* Parent is red, so it can't be the root. */
            let grandparent = self.nodes[parent]
                .parent
                .expect("red node has no parent");
            let parent_is_left = self.nodes[grandparent].left == parent;
            let uncle = if parent_is_left {
                self.nodes[grandparent].right
            } else {
                self.nodes[grandparent].left
            };

            if self.color(uncle) == Color::Red {
                trace!("insert case 3 at node {}", node);
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                node = grandparent;
                continue;
            }

            let mut parent = parent;
            if parent_is_left && self.nodes[parent].right == node {
                trace!("insert case 4 at node {}", node);
                self.rotate_left(parent);
                mem::swap(&mut node, &mut parent);
            } else if !parent_is_left && self.nodes[parent].left == node {
                trace!("insert case 4 at node {}", node);
                self.rotate_right(parent);
                mem::swap(&mut node, &mut parent);
            }

            trace!("insert case 5 at node {}", node);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            if parent_is_left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }

            return;
        }
    }

    /// Remove the value equal to `value`, if present.
    pub fn remove<Q>(&mut self, value: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_by(|v| value.cmp(v.borrow()))
    }

    pub(crate) fn remove_by<F>(&mut self, cmp: F) -> Option<T>
    where
        F: FnMut(&T) -> Ordering,
    {
        match self.find_by(cmp) {
            Some(node) => Some(self.remove_node(node)),
            None => {
                debug!("remove: value not found");
                None
            }
        }
    }

    pub fn pop_first(&mut self) -> Option<T> {
        let node = self.leftmost(self.root?);
        Some(self.remove_node(node))
    }

    pub fn pop_last(&mut self) -> Option<T> {
        let node = self.rightmost(self.root?);
        Some(self.remove_node(node))
    }

    fn swap_values(&mut self, a: usize, b: usize) {
        let a_value = self.nodes[a].value.take();
        let b_value = mem::replace(&mut self.nodes[b].value, a_value);
        self.nodes[a].value = b_value;
    }

    fn remove_node(&mut self, mut node: usize) -> T {
        let left = self.nodes[node].left;
        if left != NIL && self.nodes[node].right != NIL {
            /* Move the in-order predecessor's value up, then delete the
             * predecessor's node instead. It has no right child. */
            let predecessor = self.rightmost(left);
            self.swap_values(node, predecessor);
            node = predecessor;
        }

        let child = if self.nodes[node].left != NIL {
            self.nodes[node].left
        } else {
            self.nodes[node].right
        };
        let parent = self.nodes[node].parent;

        if self.color(node) == Color::Red {
            assert!(
                child == NIL,
                "red node {} has a single real child {}",
                node,
                child
            );
            trace!("delete red leaf {}", node);
            self.replace_child(parent, node, NIL);
        } else if self.color(child) == Color::Red {
            trace!("delete black node {} with red child {}", node, child);
            self.replace_child(parent, node, child);
            self.set_color(child, Color::Black);
        } else {
            assert!(
                child == NIL,
                "black node {} has a single black child {}",
                node,
                child
            );
            trace!("delete black leaf {}", node);
            self.replace_child(parent, node, NIL);
            self.repair_remove(NIL);
        }

        self.nodes[NIL].parent = None;
        self.len -= 1;

        let removed = self.nodes.remove(node);
        debug!("removed node {} ({} nodes)", node, self.len);
        removed.value.expect("removed a node without a value")
    }

    /// Resolve the missing black on every path through `node`.
    fn repair_remove(&mut self, mut node: usize) {
        loop {
            let parent = match self.nodes[node].parent {
                Some(p) => p,
                None => {
                    trace!("delete case 1 at node {}", node);
                    return;
                }
            };

            let node_is_left = self.nodes[parent].left == node;
            let mut sibling = self.sibling(parent, node_is_left);

            if self.color(sibling) == Color::Red {
                trace!("delete case 2 at node {}", node);
                self.set_color(sibling, Color::Black);
                self.set_color(parent, Color::Red);
                if node_is_left {
                    self.rotate_left(parent);
                } else {
                    self.rotate_right(parent);
                }

                sibling = self.sibling(parent, node_is_left);
            }

            /* The sibling's side is at least one black node taller than
             * ours, so it can't be a null leaf. */
            assert!(sibling != NIL, "double-black node {} has no sibling", node);

            let (near, far) = self.nephews(sibling, node_is_left);
            let nephews_black =
                self.color(near) == Color::Black && self.color(far) == Color::Black;

            if nephews_black && self.color(parent) == Color::Black {
                trace!("delete case 3 at node {}", node);
                self.set_color(sibling, Color::Red);
                node = parent;
                continue;
            }

            if nephews_black {
                trace!("delete case 4 at node {}", node);
                self.set_color(sibling, Color::Red);
                self.set_color(parent, Color::Black);
                return;
            }

            if self.color(far) == Color::Black {
                trace!("delete case 5 at node {}", node);
                self.set_color(sibling, Color::Red);
                self.set_color(near, Color::Black);
                if node_is_left {
                    self.rotate_right(sibling);
                } else {
                    self.rotate_left(sibling);
                }

                sibling = near;
            }

            trace!("delete case 6 at node {}", node);
            let (_, far) = self.nephews(sibling, node_is_left);
            let parent_color = self.color(parent);

            self.set_color(sibling, parent_color);
            self.set_color(parent, Color::Black);
            self.set_color(far, Color::Black);
            if node_is_left {
                self.rotate_left(parent);
            } else {
                self.rotate_right(parent);
            }

            return;
        }
    }

    fn sibling(&self, parent: usize, node_is_left: bool) -> usize {
        if node_is_left {
            self.nodes[parent].right
        } else {
            self.nodes[parent].left
        }
    }

    /// The sibling's children as (nearer to node, farther from node).
    fn nephews(&self, sibling: usize, node_is_left: bool) -> (usize, usize) {
        let s = &self.nodes[sibling];
        if node_is_left {
            (s.left, s.right)
        } else {
            (s.right, s.left)
        }
    }

    fn neighbor(&self, node: Option<usize>) -> Option<&T> {
        node.and_then(|idx| self.nodes[idx].value.as_ref())
    }

    fn contents(&self, node: usize) -> NodeContents<'_, T> {
        let n = &self.nodes[node];
        NodeContents {
            value: self.value(node),
            color: n.color,
            left: self.neighbor(Some(n.left)),
            right: self.neighbor(Some(n.right)),
            parent: self.neighbor(n.parent),
        }
    }

    /// Visit every value in the tree in the given order.
    pub fn traverse<F>(&self, order: TraversalOrder, mut visit: F)
    where
        F: FnMut(NodeContents<'_, T>),
    {
        if let Some(root) = self.root {
            self.walk(root, order, &mut visit);
        }
    }

    fn walk<F>(&self, node: usize, order: TraversalOrder, visit: &mut F)
    where
        F: FnMut(NodeContents<'_, T>),
    {
        if node == NIL {
            return;
        }

        let left = self.nodes[node].left;
        let right = self.nodes[node].right;

        match order {
            TraversalOrder::InOrder => {
                self.walk(left, order, visit);
                visit(self.contents(node));
                self.walk(right, order, visit);
            }
            TraversalOrder::PreOrder => {
                visit(self.contents(node));
                self.walk(left, order, visit);
                self.walk(right, order, visit);
            }
            TraversalOrder::PostOrder => {
                self.walk(left, order, visit);
                self.walk(right, order, visit);
                visit(self.contents(node));
            }
        }
    }

    pub fn iter(&self) -> Iter<'_, T> {
        match self.root {
            Some(root) => Iter {
                tree: self,
                front: self.leftmost(root),
                back: self.rightmost(root),
                remaining: self.len,
            },
            None => Iter {
                tree: self,
                front: NIL,
                back: NIL,
                remaining: 0,
            },
        }
    }

    /// Check every red-black invariant, returning the first one found broken.
    pub fn validate(&self) -> Result<(), InvariantViolation>
    where
        T: Ord,
    {
        let nil = &self.nodes[NIL];
        if nil.color != Color::Black
            || nil.value.is_some()
            || nil.parent.is_some()
            || nil.left != NIL
            || nil.right != NIL
        {
            return Err(InvariantViolation::SentinelCorrupted);
        }

        let stored_nodes = self.nodes.len() - 1;
        if stored_nodes != self.len {
            return Err(InvariantViolation::CountMismatch {
                counted: stored_nodes,
                stored: self.len,
            });
        }

        let root = match self.root {
            Some(root) => root,
            None => return Ok(()),
        };

        if self.nodes[root].parent.is_some() {
            return Err(InvariantViolation::RootHasParent { root });
        }

        if self.color(root) == Color::Red {
            return Err(InvariantViolation::RedRoot { root });
        }

        let mut leaf_heights = Vec::new();
        let counted = self.validate_subtree(root, None, None, 0, &mut leaf_heights)?;

        if let Some(&expected) = leaf_heights.first() {
            if let Some(&found) = leaf_heights.iter().find(|&&h| h != expected) {
                return Err(InvariantViolation::BlackHeightMismatch { expected, found });
            }
        }

        if counted != self.len {
            return Err(InvariantViolation::CountMismatch {
                counted,
                stored: self.len,
            });
        }

        let parentless = self
            .nodes
            .iter()
            .filter(|(idx, node)| *idx != NIL && node.parent.is_none())
            .count();

        if parentless != 1 {
            return Err(InvariantViolation::RootCount { found: parentless });
        }

        Ok(())
    }

    /// Returns the number of real nodes under `node`, pushing the black count
    /// of every path that ends at a null leaf.
    fn validate_subtree(
        &self,
        node: usize,
        lower: Option<&T>,
        upper: Option<&T>,
        mut blacks: usize,
        leaf_heights: &mut Vec<usize>,
    ) -> Result<usize, InvariantViolation>
    where
        T: Ord,
    {
        if node == NIL {
            leaf_heights.push(blacks);
            return Ok(0);
        }

        let n = &self.nodes[node];
        let value = n
            .value
            .as_ref()
            .ok_or(InvariantViolation::OrderViolation { node })?;

        if lower.map_or(false, |l| l >= value) || upper.map_or(false, |u| u <= value) {
            return Err(InvariantViolation::OrderViolation { node });
        }

        for child in [n.left, n.right] {
            if child == NIL {
                continue;
            }

            match self.nodes.get(child) {
                Some(c) if c.parent == Some(node) => {
                    if n.color == Color::Red && c.color == Color::Red {
                        return Err(InvariantViolation::RedRedViolation {
                            parent: node,
                            child,
                        });
                    }
                }
                _ => {
                    return Err(InvariantViolation::BrokenLink {
                        parent: node,
                        child,
                    })
                }
            }
        }

        if n.color == Color::Black {
            blacks += 1;
        }

        let left = self.validate_subtree(n.left, lower, Some(value), blacks, leaf_heights)?;
        let right = self.validate_subtree(n.right, Some(value), upper, blacks, leaf_heights)?;

        Ok(1 + left + right)
    }

    /// Panic if any red-black invariant is broken.
    ///
    /// A failure here means the rebalancing code itself is wrong; this is
    /// meant for tests and debugging.
    pub fn check_invariants(&self)
    where
        T: Ord,
    {
        if let Err(violation) = self.validate() {
            panic!("red-black tree invariant violated: {}", violation);
        }
    }
}

impl<T> Default for RBTree<T> {
    fn default() -> Self {
        RBTree::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RBTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for RBTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Empty");
        }

        let mut result = Ok(());
        let mut first = true;

        self.traverse(self.order, |contents| {
            if result.is_err() {
                return;
            }

            result = if first {
                write!(f, "{}", contents)
            } else {
                write!(f, "\n\n{}", contents)
            };
            first = false;
        });

        result
    }
}

impl<T: Ord> Extend<T> for RBTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RBTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = RBTree::new();
        tree.extend(iter);
        tree
    }
}

impl<'a, T> IntoIterator for &'a RBTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over the values of an [`RBTree`].
pub struct Iter<'a, T> {
    tree: &'a RBTree<T>,
    front: usize,
    back: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let cur = self.front;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.front = self.tree.next_node(cur).unwrap_or(NIL);
        }

        Some(self.tree.value(cur))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let cur = self.back;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.back = self.tree.prev_node(cur).unwrap_or(NIL);
        }

        Some(self.tree.value(cur))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
