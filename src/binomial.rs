//! Binomial Heap implementation
//!
//! A binomial heap is a collection of binomial trees with:
//! - O(log n) insert and extract_min
//! - O(log n) decrease_key and delete (plus the cost of the key search)
//! - O(log n) merge
//!
//! # Algorithm Overview
//!
//! The heap maintains a list of binomial-tree roots where:
//! - Each tree satisfies the min-heap property
//! - Roots are kept in strictly ascending degree order, at most one per degree
//! - This is analogous to the binary representation of n
//!
//! **Binomial Tree Bₖ**: Recursively defined:
//! - B₀ is a single node
//! - Bₖ is formed by linking two B_{k-1} trees
//! - Bₖ has exactly 2ᵏ nodes and height k
//!
//! **Key Operations**:
//! - **Insert**: wrap the key in a B₀ tree, union it into the forest, heapify
//! - **Extract-min**: scan roots for the minimum, remove it, union its
//!   children back in, heapify
//! - **Union**: splice two degree-sorted root lists into one, keeping the
//!   list sorted; duplicate degrees are allowed to survive this step
//! - **Heapify**: collapse duplicate-degree roots by linking, like carry
//!   propagation in binary addition. This is the sole enforcer of the
//!   one-root-per-degree invariant and runs after every union.
//! - **Decrease-key / delete**: locate the node by key, then bubble the key
//!   up by swapping key payloads with the parent (no structural cuts)
//!
//! Elements are addressed by key, not by handle: `decrease_key` and `delete`
//! search the forest for the key first, pruning subtrees whose root already
//! exceeds the target.

use crate::traits::{HeapError, PriorityQueue};
use std::cell::RefCell;
use std::cmp::Ordering;
use std::fmt::{self, Write as _};
use std::mem;
use std::rc::{Rc, Weak};

/// Type alias for node reference (strong reference)
type NodeRef<K> = Rc<RefCell<Node<K>>>;

/// Type alias for optional node reference
type NodePtr<K> = Option<NodeRef<K>>;

/// Type alias for weak node reference (parent links)
type WeakNodeRef<K> = Weak<RefCell<Node<K>>>;

/// Internal node structure for the binomial heap
///
/// Each node is the root of a binomial subtree of some degree and maintains:
/// - `key`: the ordered payload
/// - `parent`: weak reference to the parent node (None for roots)
/// - `child`: strong reference to the head of the child list (None if leaf)
/// - `sibling`: strong reference to the next sibling in the parent's child
///   list (None for the last child and for roots)
///
/// **Memory Model**: Strong references flow from roots downward (child,
/// sibling), so the head of a list owns the whole chain. Weak references
/// flow upward (parent) to avoid reference cycles.
///
/// Children are chained newest-first: the most recently linked child is the
/// head of the child list, so a degree-d node's children carry degrees
/// d-1, d-2, ..., 0 from head to tail.
struct Node<K> {
    key: K,
    parent: Option<WeakNodeRef<K>>,
    child: NodePtr<K>,
    sibling: NodePtr<K>,
}

impl<K: Ord> Node<K> {
    /// Creates a fresh singleton tree (B₀) holding `key`
    fn new_tree(key: K) -> NodeRef<K> {
        Rc::new(RefCell::new(Node {
            key,
            parent: None,
            child: None,
            sibling: None,
        }))
    }

    /// Number of direct children, counted by walking the child list
    ///
    /// O(degree). The degree is never cached; the child list is the single
    /// source of truth for the tree shape.
    fn degree(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.child.clone();
        while let Some(node) = cursor {
            cursor = node.borrow().sibling.clone();
            count += 1;
        }
        count
    }

    /// Makes `root` the new head of `parent`'s child list
    ///
    /// The caller guarantees both trees have equal degree and that
    /// `parent`'s key is not greater than `root`'s, and is responsible for
    /// setting `root`'s parent back-reference; linking two Bₖ trees this
    /// way produces a B_{k+1}.
    fn merge_as_child(parent: &NodeRef<K>, root: NodeRef<K>) {
        root.borrow_mut().sibling = parent.borrow_mut().child.take();
        parent.borrow_mut().child = Some(root);
    }

    /// Detaches this node's children into a standalone root list
    ///
    /// Children are stored newest-first, so walking the child list and
    /// reversing restores ascending degree order — a valid forest. Each
    /// child's sibling link is cleared (it is now a root with no sibling)
    /// and its parent link is dropped; deeper descendants keep theirs.
    fn detach_as_roots(node: &NodeRef<K>) -> Vec<NodeRef<K>> {
        let mut roots = Vec::new();
        let mut cursor = node.borrow_mut().child.take();
        while let Some(child) = cursor {
            cursor = child.borrow_mut().sibling.take();
            child.borrow_mut().parent = None;
            roots.push(child);
        }
        roots.reverse();
        roots
    }

    /// Searches the subtree below `node`, including `node`'s sibling chain,
    /// for the first element holding `key`
    ///
    /// Exhaustive traversal, O(subtree size); `node`'s own key is the
    /// caller's business. Key-order pruning happens once at the root scan
    /// ([`BinomialHeap::find_node`]), not here.
    fn find(node: &NodeRef<K>, key: &K) -> NodePtr<K> {
        if let Some(child) = node.borrow().child.clone() {
            if child.borrow().key == *key {
                return Some(child);
            }
            if let Some(found) = Self::find(&child, key) {
                return Some(found);
            }
        }
        let mut cursor = node.borrow().sibling.clone();
        while let Some(sibling) = cursor {
            if sibling.borrow().key == *key {
                return Some(sibling);
            }
            if let Some(child) = sibling.borrow().child.clone() {
                if child.borrow().key == *key {
                    return Some(child);
                }
                if let Some(found) = Self::find(&child, key) {
                    return Some(found);
                }
            }
            cursor = sibling.borrow().sibling.clone();
        }
        None
    }

    /// Appends a dump of the subtree below `node` (child first, then the
    /// sibling chain) to `out`. Debugging aid for
    /// [`BinomialHeap::to_debug_string`].
    fn write_subtree(node: &NodeRef<K>, out: &mut String)
    where
        K: fmt::Debug,
    {
        if let Some(child) = node.borrow().child.clone() {
            let _ = write!(out, "{:?} ", child.borrow().key);
            Self::write_subtree(&child, out);
        }
        let mut cursor = node.borrow().sibling.clone();
        while let Some(sibling) = cursor {
            let _ = write!(out, "{:?} ", sibling.borrow().key);
            if let Some(child) = sibling.borrow().child.clone() {
                let _ = write!(out, "{:?} ", child.borrow().key);
                Self::write_subtree(&child, out);
            }
            cursor = sibling.borrow().sibling.clone();
        }
    }
}

/// Binomial Heap
///
/// # Example
///
/// ```rust
/// use binomial_queue::binomial::BinomialHeap;
/// use binomial_queue::PriorityQueue;
///
/// let mut heap = BinomialHeap::new();
/// heap.insert(5);
/// heap.insert(3);
/// heap.decrease_key(&5, 1).unwrap();
/// assert_eq!(heap.extract_min(), Some(1));
/// assert_eq!(heap.extract_min(), Some(3));
/// assert_eq!(heap.extract_min(), None);
/// ```
pub struct BinomialHeap<K: Ord> {
    /// Binomial-tree roots in strictly ascending degree order, at most one
    /// per degree between public operations. Roots have no parent and no
    /// sibling; the list itself is the top-level chain.
    trees: Vec<NodeRef<K>>,
}

// No manual Drop needed - Rc handles cleanup automatically when strong refs go to 0

impl<K: Ord> PriorityQueue<K> for BinomialHeap<K> {
    fn new() -> Self {
        Self { trees: Vec::new() }
    }

    fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Number of keys, computed as Σ 2^degree over the roots
    fn len(&self) -> usize {
        self.trees
            .iter()
            .map(|root| 1usize << root.borrow().degree())
            .sum()
    }

    /// Inserts a new key into the heap
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// Wraps the key in a singleton tree, unions it into the forest and
    /// heapifies. The carry propagation this triggers is exactly
    /// incrementing a binary counter: inserting into a heap of size 2ᵏ-1
    /// links all the way up to a single Bₖ tree.
    fn insert(&mut self, key: K) {
        self.union_forests(vec![Node::new_tree(key)]);
        self.heapify();
    }

    fn peek(&self) -> Option<&K> {
        let index = self.min_root_index()?;

        // SAFETY: We return a reference tied to the &self lifetime. The
        // node is owned by `trees`, we borrow self immutably so the root
        // list cannot change, and RefCell contents do not move while we
        // hold &self.
        let node_ptr = self.trees[index].as_ptr();
        unsafe { Some(&(*node_ptr).key) }
    }

    /// Removes and returns the minimum key
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// **Algorithm**:
    /// 1. Scan the roots for the minimum (ascending degree order; on equal
    ///    keys the earliest root wins)
    /// 2. Unlink that root from the root list
    /// 3. Detach its children into a fresh forest
    /// 4. Union the child forest back in and heapify
    ///
    /// The removed node's allocation is released; its children survive as
    /// roots. When the root of a Bₖ tree is removed its children are
    /// B_{k-1}, ..., B₀, so the forest stays binomial.
    fn extract_min(&mut self) -> Option<K> {
        let index = self.min_root_index()?;
        Some(self.extract_root(index))
    }

    /// Lowers the key of one element holding `key` to `new_key`
    ///
    /// **Time Complexity**: O(n) for the key search in the worst case,
    /// O(log n) for the sift once the node is found.
    ///
    /// The sift swaps key payloads with the parent while the parent's key
    /// is greater; node identities and the tree shape never change, so a
    /// later search for `new_key` finds it wherever the swaps left it.
    /// Increases are rejected: an upward sift cannot repair a downward
    /// violation, so accepting one would silently corrupt heap order.
    fn decrease_key(&mut self, key: &K, new_key: K) -> Result<(), HeapError> {
        let node = self.find_node(key).ok_or(HeapError::KeyNotFound)?;
        if new_key > node.borrow().key {
            return Err(HeapError::KeyNotDecreased);
        }
        node.borrow_mut().key = new_key;
        Self::sift_up(node);
        Ok(())
    }

    /// Removes one element holding `key`
    ///
    /// The key is forced to the root of its tree by unconditional upward
    /// swaps (the classic decrease-to--∞ step, with the sift itself
    /// standing in for the sentinel key), then that root is removed through
    /// the same path `extract_min` uses. Deletion therefore never splices a
    /// node out of the middle of a tree; the extract path is the single
    /// place structure is restored.
    fn delete(&mut self, key: &K) -> Result<(), HeapError> {
        let node = self.find_node(key).ok_or(HeapError::KeyNotFound)?;
        let root = Self::sift_to_root(node);
        let index = self
            .trees
            .iter()
            .position(|tree| Rc::ptr_eq(tree, &root))
            .expect("sifted node should surface as a forest root");
        // release our reference so the extract path holds the last one
        drop(root);
        self.extract_root(index);
        Ok(())
    }

    /// Merges another heap into this heap
    ///
    /// **Time Complexity**: O(log n)
    ///
    /// Unions the other heap's entire root list into this one, then
    /// heapifies. The other heap is consumed; its nodes transfer ownership
    /// into this forest.
    fn merge(&mut self, other: Self) {
        self.union_forests(other.trees);
        self.heapify();
    }

    fn to_debug_string(&self) -> String
    where
        K: fmt::Debug,
    {
        let mut out = String::new();
        let _ = writeln!(out, "--------------------------------");
        let _ = writeln!(out, "Heap size: {}", self.len());
        let _ = writeln!(out, "Tree count: {}", self.trees.len());
        let _ = writeln!(out, "Trees:");
        for root in &self.trees {
            let _ = writeln!(out);
            let _ = writeln!(out, "Degree: {}, elements:", root.borrow().degree());
            let mut line = String::new();
            let _ = write!(line, "{:?} ", root.borrow().key);
            Node::write_subtree(root, &mut line);
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out
    }
}

impl<K: Ord> BinomialHeap<K> {
    /// Index of the minimum root, or `None` if the heap is empty
    ///
    /// Roots are scanned in ascending degree order and ties are broken in
    /// favor of the first root encountered, so duplicate minimums leave in
    /// a stable order.
    fn min_root_index(&self) -> Option<usize> {
        let mut min: Option<usize> = None;
        for (index, root) in self.trees.iter().enumerate() {
            let smaller = match min {
                Some(best) => root.borrow().key < self.trees[best].borrow().key,
                None => true,
            };
            if smaller {
                min = Some(index);
            }
        }
        min
    }

    /// Unlinks the root at `index`, returns its key, and restores the
    /// forest invariants
    ///
    /// Shared by `extract_min` and `delete`: the root's children are
    /// detached into a fresh forest, unioned back in, and the heapify pass
    /// resolves any duplicate degrees.
    fn extract_root(&mut self, index: usize) -> K {
        let root = self.trees.remove(index);
        let children = Node::detach_as_roots(&root);
        self.union_forests(children);
        self.heapify();

        // The root is now unlinked from the list and its children are
        // detached, so this is the last strong reference.
        let node = Rc::try_unwrap(root)
            .ok()
            .expect("extracted root should have no other strong references")
            .into_inner();
        node.key
    }

    /// Splices another degree-sorted root list into this heap's root list
    ///
    /// A linear merge on degree, stable: when degrees tie, the incoming
    /// tree is placed before the resident one and both survive adjacent for
    /// heapify to resolve. This step never links trees; it only restores
    /// the sorted-by-degree ordering.
    fn union_forests(&mut self, other: Vec<NodeRef<K>>) {
        if self.trees.is_empty() {
            self.trees = other;
            return;
        }
        if other.is_empty() {
            return;
        }

        let mut mine = mem::take(&mut self.trees).into_iter().peekable();
        let mut theirs = other.into_iter().peekable();
        let mut merged = Vec::with_capacity(mine.len() + theirs.len());
        loop {
            let take_theirs = match (mine.peek(), theirs.peek()) {
                (Some(a), Some(b)) => b.borrow().degree() <= a.borrow().degree(),
                (None, Some(_)) => true,
                (Some(_), None) => false,
                (None, None) => break,
            };
            if take_theirs {
                merged.push(theirs.next().unwrap());
            } else {
                merged.push(mine.next().unwrap());
            }
        }
        self.trees = merged;
    }

    /// Collapses duplicate-degree roots until at most one tree per degree
    /// remains
    ///
    /// **Time Complexity**: O(number of roots) link steps, O(log n)
    /// amortized.
    ///
    /// Scans the list left to right comparing each root against its
    /// predecessor, with one extra lookahead:
    /// - predecessor degree < current degree: in order, advance
    /// - exactly two roots share the degree: link them, larger key under
    ///   smaller (ties to the earlier root)
    /// - three consecutive roots share the degree (a union of two valid
    ///   heaps can leave two, and a carry from the previous degree makes a
    ///   third): link the *second and third*, leaving the first to meet the
    ///   survivor on the next pass
    ///
    /// This is binary-addition carry propagation: each root is a 1-bit at
    /// its degree, union is digit-wise addition, and linking is the carry.
    /// After a link the survivor sits exactly where the scan cursor points,
    /// so the cursor never moves backwards.
    fn heapify(&mut self) {
        if self.trees.len() <= 1 {
            return;
        }
        let mut cur = 1;
        while cur < self.trees.len() {
            let prev_degree = self.trees[cur - 1].borrow().degree();
            let cur_degree = self.trees[cur].borrow().degree();
            if prev_degree < cur_degree {
                cur += 1;
                continue;
            }
            let next = cur + 1;
            if next < self.trees.len() && self.trees[next].borrow().degree() == prev_degree {
                self.link_same_degree(cur, next);
            } else {
                self.link_same_degree(cur - 1, cur);
            }
        }
    }

    /// Links the equal-degree roots at positions `a < b`: the larger-keyed
    /// root becomes the newest child of the smaller-keyed one and leaves
    /// the root list. Key ties go to the earlier root.
    fn link_same_degree(&mut self, a: usize, b: usize) {
        debug_assert!(a < b, "link positions must be ordered");
        let a_wins = self.trees[a].borrow().key <= self.trees[b].borrow().key;
        let (to, from) = if a_wins { (a, b) } else { (b, a) };
        let absorbed = self.trees.remove(from);
        let winner = &self.trees[if to > from { to - 1 } else { to }];
        absorbed.borrow_mut().parent = Some(Rc::downgrade(winner));
        Node::merge_as_child(winner, absorbed);
    }

    /// Scans the roots for `key`, descending only into trees that can
    /// contain it
    ///
    /// For each root in ascending degree order: an equal key is an
    /// immediate hit; a smaller key means the target, if present, must be
    /// a descendant, so the subtree is searched exhaustively; a larger key
    /// rules the whole tree out under min-heap order. This root-level
    /// pruning is the only ordering optimization — inside a tree the search
    /// is a full traversal.
    fn find_node(&self, key: &K) -> NodePtr<K> {
        for root in &self.trees {
            match root.borrow().key.cmp(key) {
                Ordering::Equal => return Some(Rc::clone(root)),
                Ordering::Less => {
                    if let Some(found) = Node::find(root, key) {
                        return Some(found);
                    }
                }
                Ordering::Greater => {}
            }
        }
        None
    }

    /// Restores heap order above `node` after its key shrank
    ///
    /// Swaps key payloads with the parent while the parent's key is
    /// greater, then returns the node the cursor stopped on. Only keys
    /// move; node identities and the tree shape stay put.
    fn sift_up(node: NodeRef<K>) -> NodeRef<K> {
        let mut current = node;
        loop {
            let parent = match current.borrow().parent.as_ref().and_then(Weak::upgrade) {
                Some(parent) => parent,
                None => break,
            };
            if parent.borrow().key <= current.borrow().key {
                break;
            }
            {
                let mut parent_ref = parent.borrow_mut();
                let mut current_ref = current.borrow_mut();
                mem::swap(&mut parent_ref.key, &mut current_ref.key);
            }
            current = parent;
        }
        current
    }

    /// Forces `node`'s key all the way to the root of its tree,
    /// unconditionally, and returns that root
    ///
    /// Each swap moves a parent key down into a subtree it already bounds,
    /// so heap order below the cursor survives; only the root may end up
    /// violating it, and the caller removes that root immediately.
    fn sift_to_root(node: NodeRef<K>) -> NodeRef<K> {
        let mut current = node;
        loop {
            let parent = match current.borrow().parent.as_ref().and_then(Weak::upgrade) {
                Some(parent) => parent,
                None => break,
            };
            {
                let mut parent_ref = parent.borrow_mut();
                let mut current_ref = current.borrow_mut();
                mem::swap(&mut parent_ref.key, &mut current_ref.key);
            }
            current = parent;
        }
        current
    }
}

impl<K: Ord> Default for BinomialHeap<K> {
    fn default() -> Self {
        Self::new()
    }
}
