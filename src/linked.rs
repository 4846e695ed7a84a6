//! A linked BST. Every node owns its two children through a `Box` so the whole tree is a plain
//! owned structure with no parent pointers. Nothing balances itself: inserting sorted input builds
//! a chain, and [`Tree::rebalance`] is how the tree gets short again.
//!
//! Every walk over the tree uses an explicit stack (or a queue, or a cursor over child links)
//! instead of recursion, so even a chain of millions of nodes can be searched, iterated, cloned
//! and dropped without running out of call stack.
//!
//! # Examples
//!
//! ```
//! use linked_bst::linked::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.find(&5), None);
//!
//! for x in [5, 3, 8, 1, 4] {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.find(&5), Some(&5));
//! assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
//! assert_eq!(tree.height(), Some(2));
//!
//! // Removing an item returns it.
//! assert_eq!(tree.remove(&5), Ok(5));
//! assert_eq!(tree.find(&5), None);
//! assert_eq!(tree.len(), 4);
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;
use std::mem;

use log::debug;

use crate::error::{Result, TreeError};

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    item: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(item: T) -> Box<Self> {
        Box::new(Self {
            item,
            left: None,
            right: None,
        })
    }

    /// Replaces this node's item with the largest item of its left subtree and unlinks the node
    /// that held it, returning the item this node held before. That largest node never has a
    /// right child so its left child simply takes its place.
    ///
    /// Returns `None` (and changes nothing) when there is no left subtree.
    fn lift_max_of_left(&mut self) -> Option<T> {
        let mut slot = &mut self.left;
        while slot.as_ref().map_or(false, |node| node.right.is_some()) {
            let Some(node) = slot else { break };
            slot = &mut node.right;
        }

        let max = slot.take()?;
        let Node { item, left, .. } = *max;
        *slot = left;
        Some(mem::replace(&mut self.item, item))
    }

    /// Mirror of [`lift_max_of_left`][Node::lift_max_of_left]: takes over the smallest item of
    /// the right subtree. The first copy of that item on the leftmost path has no left child,
    /// and any later copies sit in its right subtree, which takes its place.
    fn lift_min_of_right(&mut self) -> Option<T> {
        let mut slot = &mut self.right;
        while slot.as_ref().map_or(false, |node| node.left.is_some()) {
            let Some(node) = slot else { break };
            slot = &mut node.left;
        }

        let min = slot.take()?;
        let Node { item, right, .. } = *min;
        *slot = right;
        Some(mem::replace(&mut self.item, item))
    }

    /// Returns `true` if the largest item of the left subtree is stored more than once. Copies
    /// of that item all lie on the subtree's rightmost path, so it is enough to compare the last
    /// node on that path with its parent.
    fn left_max_is_duplicated(&self) -> bool
    where
        T: Ord,
    {
        let Some(mut node) = self.left.as_deref() else {
            return false;
        };
        while let Some(right) = node.right.as_deref() {
            if right.right.is_none() {
                return right.item == node.item;
            }
            node = right;
        }
        false
    }
}

/// A Binary Search Tree of single items. This can be used for inserting, finding, and removing
/// items, for ordered queries like [`successor`][Tree::successor] and
/// [`range_find`][Tree::range_find], and for measuring and restoring balance.
///
/// Items that compare equal to an item already in the tree are placed in its right subtree, so
/// the tree can hold duplicates.
pub struct Tree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone,
{
    /// Clones the tree keeping its exact shape. Subtrees are rebuilt bottom-up in postorder: by
    /// the time a node is visited, its children's copies are the top of the `built` stack.
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        let mut nodes = PostOrder::new(self.root.as_deref());
        while let Some(node) = nodes.next_node() {
            let right = node.right.as_ref().and_then(|_| built.pop());
            let left = node.left.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                item: node.item.clone(),
                left,
                right,
            }));
        }

        Self {
            root: built.pop(),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.inorder()).finish()
    }
}

/// Draws the tree rotated 90 degrees counterclockwise: one item per line, the right subtree above
/// its parent and the left subtree below, each line prefixed with `"| "` once per level of depth.
///
/// ```
/// use linked_bst::linked::Tree;
///
/// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
///
/// assert_eq!(tree.to_string(), "| 8\n5\n| | 4\n| 3\n| | 1\n");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack: Vec<(&Node<T>, usize)> = Vec::new();
        let mut current = self.root.as_deref().map(|node| (node, 0));
        loop {
            while let Some((node, depth)) = current {
                stack.push((node, depth));
                current = node.right.as_deref().map(|right| (right, depth + 1));
            }
            let Some((node, depth)) = stack.pop() else {
                return Ok(());
            };
            writeln!(f, "{}{}", "| ".repeat(depth), node.item)?;
            current = node.left.as_deref().map(|left| (left, depth + 1));
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns how many items are stored in the tree, duplicates included.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the tree stores no items.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every item from the tree.
    pub fn clear(&mut self) {
        // Detach children before each node is dropped so dropping never recurses down a subtree.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Iterates over the items in preorder (root, then left subtree, then right subtree). This is
    /// also the order of `for item in &tree`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [5, 3, 1, 4, 8]);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            stack: self.root.as_deref().into_iter().collect(),
            remaining: self.len,
        }
    }

    /// Iterates over the items in ascending order (left subtree, then root, then right subtree).
    /// Every call starts a fresh traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.inorder().copied().collect::<Vec<_>>(), [1, 3, 4, 5, 8]);
    /// ```
    pub fn inorder(&self) -> InOrder<'_, T> {
        let mut iter = InOrder {
            stack: Vec::new(),
            remaining: self.len,
        };
        iter.push_leftmost_path(self.root.as_deref());
        iter
    }

    /// Iterates over the items in postorder (left subtree, then right subtree, then root).
    pub fn postorder(&self) -> PostOrder<'_, T> {
        PostOrder::new(self.root.as_deref())
    }

    /// Iterates over the items level by level from the root down, each level left to right.
    pub fn levelorder(&self) -> LevelOrder<'_, T> {
        LevelOrder {
            queue: self.root.as_deref().into_iter().collect(),
        }
    }

    /// Returns the smallest item in the tree.
    pub fn first(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some(&node.item)
    }

    /// Returns the largest item in the tree. With duplicates this is the last one inserted.
    pub fn last(&self) -> Option<&T> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some(&node.item)
    }

    /// Returns the number of edges on the longest path from the root to a leaf, or `None` for an
    /// empty tree. A tree holding a single item has height `Some(0)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// assert_eq!(tree.height(), None);
    ///
    /// tree.insert(1);
    /// assert_eq!(tree.height(), Some(0));
    ///
    /// // Sorted input makes a chain.
    /// tree.extend([2, 3, 4]);
    /// assert_eq!(tree.height(), Some(3));
    /// ```
    pub fn height(&self) -> Option<usize> {
        let mut stack = vec![(self.root.as_deref()?, 0)];
        let mut height = 0;
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
            stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
        }
        Some(height)
    }

    /// A rough balance check comparing the height against the best possible height for this
    /// many items: `height < 2 * lg(len + 1) - 1`.
    ///
    /// An empty tree counts as height `-1`, which the formula reports as not balanced.
    pub fn is_balanced(&self) -> bool {
        let height = self.height().map_or(-1.0, |height| height as f64);
        height < 2.0 * ((self.len + 1) as f64).log2() - 1.0
    }

    /// Inserts the given item. Items less than a node's item go to its left, everything else (an
    /// equal item included) goes to its right. The tree is not rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert(1);
    /// tree.insert(1);
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.find(&1), Some(&1));
    /// ```
    pub fn insert(&mut self, item: T)
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = if item < node.item {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        *slot = Some(Node::new_boxed(item));
        self.len += 1;
    }

    /// Potentially finds the stored item equal to the given one. If no node holds an equal item,
    /// `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.find(&1), Some(&1));
    /// assert_eq!(tree.find(&42), None);
    /// ```
    pub fn find(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match item.cmp(&node.item) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Equal => return Some(&node.item),
                Ordering::Greater => node.right.as_deref(),
            };
        }
        None
    }

    /// Returns `true` if the tree holds an item equal to the given one.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        self.find(item).is_some()
    }

    /// Removes one item equal to the given one and returns it. Unlike [`find`][Tree::find], this
    /// requires the item to be present: a missing item is a [`TreeError::NotFound`].
    ///
    /// A node with two children keeps its place in the tree and takes over the largest item of
    /// its left subtree instead; the node that held that item is unlinked. When that largest item
    /// is stored more than once, the smallest item of the right subtree is taken instead so that
    /// everything left of the node stays strictly less than it.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::error::TreeError;
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.remove(&1), Ok(1));
    /// assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
    /// assert!(tree.is_empty());
    /// ```
    pub fn remove(&mut self, item: &T) -> Result<T>
    where
        T: Ord,
    {
        let removed = Self::unlink(self.slot_of(item)).ok_or(TreeError::NotFound)?;
        self.len -= 1;
        Ok(removed)
    }

    /// Overwrites the stored item equal to `item` with `new_item` and returns the old one, or
    /// `None` if no equal item is stored.
    ///
    /// The node stays where it is. If `new_item` does not belong at that position the tree no
    /// longer satisfies the BST ordering and later searches may miss items; keeping `new_item`
    /// in order is up to the caller. [`is_ordered`][Tree::is_ordered] detects the damage.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = [(5, "five"), (3, "three")].into_iter().collect();
    ///
    /// // Same position in the order, different payload.
    /// assert_eq!(tree.replace(&(3, "three"), (3, "drei")), Some((3, "three")));
    /// assert!(tree.is_ordered());
    ///
    /// // 9 belongs right of 5, not in its left subtree.
    /// tree.replace(&(3, "drei"), (9, "nine"));
    /// assert!(!tree.is_ordered());
    /// ```
    pub fn replace(&mut self, item: &T, new_item: T) -> Option<T>
    where
        T: Ord,
    {
        let node = self.slot_of(item).as_mut()?;
        Some(mem::replace(&mut node.item, new_item))
    }

    /// Checks the BST ordering of every node: everything in a left subtree is strictly less than
    /// the subtree's parent and everything in a right subtree is greater or equal.
    pub fn is_ordered(&self) -> bool
    where
        T: Ord,
    {
        // Each entry carries the bounds inherited from its ancestors: `low <= item < high`.
        let mut stack: Vec<(&Node<T>, Option<&T>, Option<&T>)> = self
            .root
            .as_deref()
            .map(|root| (root, None, None))
            .into_iter()
            .collect();
        while let Some((node, low, high)) = stack.pop() {
            if low.map_or(false, |low| node.item < *low)
                || high.map_or(false, |high| node.item >= *high)
            {
                return false;
            }
            stack.extend(
                node.left
                    .as_deref()
                    .map(|left| (left, low, Some(&node.item))),
            );
            stack.extend(
                node.right
                    .as_deref()
                    .map(|right| (right, Some(&node.item), high)),
            );
        }
        true
    }

    /// Returns the smallest stored item strictly greater than `item`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.successor(&4), Some(&5));
    /// assert_eq!(tree.successor(&6), Some(&8));
    /// assert_eq!(tree.successor(&8), None);
    /// ```
    pub fn successor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        let mut best = None;
        while let Some(node) = current {
            if node.item > *item {
                best = Some(&node.item);
                current = node.left.as_deref();
            } else {
                current = node.right.as_deref();
            }
        }
        best
    }

    /// Returns the largest stored item strictly less than `item`, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.predecessor(&4), Some(&3));
    /// assert_eq!(tree.predecessor(&1), None);
    /// ```
    pub fn predecessor(&self, item: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut current = self.root.as_deref();
        let mut best = None;
        while let Some(node) = current {
            if node.item < *item {
                best = Some(&node.item);
                current = node.right.as_deref();
            } else {
                current = node.left.as_deref();
            }
        }
        best
    }

    /// Lazily iterates, in ascending order, over the items `x` with `low <= x <= high`. Subtrees
    /// entirely outside the bounds are never visited.
    pub fn range<'b>(&self, low: &'b T, high: &'b T) -> Range<'_, 'b, T>
    where
        T: Ord,
    {
        let mut iter = Range {
            stack: Vec::new(),
            low,
            high,
        };
        iter.push_leftmost_path(self.root.as_deref());
        iter
    }

    /// Collects the items `x` with `low <= x <= high` in ascending order.
    ///
    /// Returns `None` when the bounds are inverted, the tree is empty, or the bounds lie
    /// entirely below the smallest or above the largest stored item. Bounds that overlap the
    /// stored items but fall between two of them give `Some` empty `Vec`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// assert_eq!(tree.range_find(&2, &6), Some(vec![&3, &4, &5]));
    /// assert_eq!(tree.range_find(&6, &7), Some(vec![]));
    /// assert_eq!(tree.range_find(&6, &2), None);
    /// assert_eq!(tree.range_find(&9, &12), None);
    /// ```
    pub fn range_find(&self, low: &T, high: &T) -> Option<Vec<&T>>
    where
        T: Ord,
    {
        let (first, last) = (self.first()?, self.last()?);
        if low > high || low > last || high < first {
            return None;
        }
        Some(self.range(low, high).collect())
    }

    /// Rebuilds the tree so that its height is as small as this insertion policy allows.
    ///
    /// All items are taken out in sorted order and inserted back middle first: the middle item
    /// of a run goes in, then the run to its right is rebuilt, then the run to its left. For a
    /// run of even length the upper of the two middle items is picked, leaving the left run one
    /// item longer. The items themselves are unchanged, only the shape is.
    ///
    /// The tie-break means a left subtree is never smaller than its sibling: it holds as many
    /// items as the right subtree or one more.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::linked::Tree;
    ///
    /// let mut tree: Tree<_> = (1..=15).collect();
    /// assert_eq!(tree.height(), Some(14));
    ///
    /// tree.rebalance();
    /// assert_eq!(tree.height(), Some(3));
    /// assert!(tree.inorder().copied().eq(1..=15));
    ///
    /// // Of [1, 2, 3, 4] the upper middle, 3, becomes the root with [1, 2] to its left.
    /// let mut tree: Tree<_> = (1..=4).collect();
    /// tree.rebalance();
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), [3, 2, 1, 4]);
    /// ```
    pub fn rebalance(&mut self)
    where
        T: Ord,
    {
        let height_before = self.height();
        let mut items: Vec<Option<T>> = self.take_sorted().into_iter().map(Some).collect();

        // Runs still to insert, as half-open index ranges into `items`.
        let mut runs = vec![(0, items.len())];
        while let Some((start, end)) = runs.pop() {
            if start == end {
                continue;
            }
            let middle = start + (end - start) / 2;
            if let Some(item) = items[middle].take() {
                self.insert(item);
            }
            runs.push((start, middle));
            runs.push((middle + 1, end));
        }

        if log::log_enabled!(log::Level::Debug) {
            debug!(
                "rebalanced {} items: height {:?} -> {:?}",
                self.len,
                height_before,
                self.height()
            );
        }
    }

    /// Empties the tree and returns its items in ascending order.
    fn take_sorted(&mut self) -> Vec<T> {
        let mut items = Vec::with_capacity(self.len);
        let mut stack: Vec<Box<Node<T>>> = Vec::new();
        let mut current = self.root.take();
        loop {
            while let Some(mut node) = current {
                current = node.left.take();
                stack.push(node);
            }
            let Some(node) = stack.pop() else { break };
            let Node { item, right, .. } = *node;
            items.push(item);
            current = right;
        }
        self.len = 0;
        items
    }

    /// Returns the link holding the first node on the search path whose item equals `item`, or
    /// the empty link where the search ended.
    fn slot_of(&mut self, item: &T) -> &mut Link<T>
    where
        T: Ord,
    {
        let mut slot = &mut self.root;
        loop {
            let go_left = match slot.as_deref() {
                None => break,
                Some(node) => match item.cmp(&node.item) {
                    Ordering::Equal => break,
                    ordering => ordering == Ordering::Less,
                },
            };
            let Some(node) = slot else { break };
            slot = if go_left {
                &mut node.left
            } else {
                &mut node.right
            };
        }
        slot
    }

    /// Unlinks the node held by `slot` and returns its item, relinking what is left of its
    /// subtree into the same slot. Returns `None` for an empty slot.
    ///
    /// A node with two children normally takes over the largest item of its left subtree. If that
    /// item is stored twice, lifting one copy would leave an equal item left of the node, so the
    /// smallest item of the right subtree is lifted instead.
    fn unlink(slot: &mut Link<T>) -> Option<T>
    where
        T: Ord,
    {
        let node = slot.as_mut()?;
        if node.left.is_some() && node.right.is_some() {
            return if node.left_max_is_duplicated() {
                node.lift_min_of_right()
            } else {
                node.lift_max_of_left()
            };
        }

        let node = slot.take()?;
        let Node { item, left, right } = *node;
        // At most one of these is present.
        *slot = left.or(right);
        Some(item)
    }
}

impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Preorder iterator returned by [`Tree::iter`].
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;
        // Right goes on first so the left subtree is finished before it.
        self.stack.extend(node.right.as_deref());
        self.stack.extend(node.left.as_deref());
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Ascending iterator returned by [`Tree::inorder`].
pub struct InOrder<'a, T> {
    stack: Vec<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> InOrder<'a, T> {
    fn push_leftmost_path(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            self.stack.push(current);
            node = current.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.remaining -= 1;
        self.push_leftmost_path(node.right.as_deref());
        Some(&node.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for InOrder<'_, T> {}

/// Postorder iterator returned by [`Tree::postorder`].
pub struct PostOrder<'a, T> {
    /// Nodes waiting to be visited, flagged once their children have been queued above them.
    stack: Vec<(&'a Node<T>, bool)>,
}

impl<'a, T> PostOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        Self {
            stack: root.map(|root| (root, false)).into_iter().collect(),
        }
    }

    fn next_node(&mut self) -> Option<&'a Node<T>> {
        loop {
            let (node, children_queued) = self.stack.pop()?;
            if children_queued {
                return Some(node);
            }
            self.stack.push((node, true));
            self.stack
                .extend(node.right.as_deref().map(|right| (right, false)));
            self.stack
                .extend(node.left.as_deref().map(|left| (left, false)));
        }
    }
}

impl<'a, T> Iterator for PostOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_node().map(|node| &node.item)
    }
}

/// Breadth-first iterator returned by [`Tree::levelorder`].
pub struct LevelOrder<'a, T> {
    queue: VecDeque<&'a Node<T>>,
}

impl<'a, T> Iterator for LevelOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop_front()?;
        self.queue.extend(node.left.as_deref());
        self.queue.extend(node.right.as_deref());
        Some(&node.item)
    }
}

/// Bounded ascending iterator returned by [`Tree::range`].
pub struct Range<'a, 'b, T> {
    stack: Vec<&'a Node<T>>,
    low: &'b T,
    high: &'b T,
}

impl<'a, T> Range<'a, '_, T>
where
    T: Ord,
{
    /// Like the inorder walk but skips any node below `low` along with its left subtree.
    fn push_leftmost_path(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(current) = node {
            if current.item < *self.low {
                node = current.right.as_deref();
            } else {
                self.stack.push(current);
                node = current.left.as_deref();
            }
        }
    }
}

impl<'a, T> Iterator for Range<'a, '_, T>
where
    T: Ord,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if node.item > *self.high {
            self.stack.clear();
            return None;
        }
        self.push_leftmost_path(node.right.as_deref());
        Some(&node.item)
    }
}
