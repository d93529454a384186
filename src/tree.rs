//! An owned, unbalanced BST. Every node exclusively owns its children through a `Box`, so there
//! are no parent pointers and no `unsafe`.
//!
//! # Examples
//!
//! ```
//! use bst_sort::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.search(&1));
//!
//! tree.insert(1);
//! assert!(tree.search(&1));
//!
//! // Duplicates are ignored.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a value reports whether it was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.search(&1));
//! assert!(!tree.delete(&1));
//! ```

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt;

type Link<T> = Option<Box<Node<T>>>;

/// A Binary Search Tree holding unique values. Values smaller than a node live in its left
/// subtree and larger values in its right subtree. The tree never rebalances itself, so its shape
/// depends on insertion order.
pub struct Tree<T> {
    root: Link<T>,
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
    fn clone(&self) -> Self {
        let root = self.try_fold_postorder(
            || None,
            |node, left, right| {
                Some(Some(Box::new(Node {
                    value: node.value.clone(),
                    left,
                    right,
                })))
            },
        );
        Self {
            root: root.flatten(),
        }
    }
}

/// Lists the values in ascending order.
impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Inserts the value into the tree. Returns `false`, leaving the tree untouched, if an equal
    /// value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert!(tree.insert(50));
    /// assert!(tree.insert(30));
    /// assert!(!tree.insert(50));
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0usize;
        loop {
            match link {
                None => {
                    *link = Some(Node::new_boxed(value));
                    tracing::trace!(depth, "inserted new leaf");
                    return true;
                }
                Some(node) => {
                    link = match value.cmp(&node.value) {
                        Ordering::Less => &mut node.left,
                        Ordering::Equal => {
                            tracing::trace!(depth, "ignored duplicate insert");
                            return false;
                        }
                        Ordering::Greater => &mut node.right,
                    };
                    depth += 1;
                }
            }
        }
    }

    /// Returns whether the tree holds a value equal to the given one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70].into_iter().collect();
    ///
    /// assert!(tree.search(&30));
    /// assert!(!tree.search(&42));
    /// ```
    pub fn search(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return true,
                Ordering::Greater => &node.right,
            };
        }
        false
    }

    /// Deletes the value from the tree, returning whether it was present. If the tree does not
    /// contain the value, nothing happens.
    ///
    /// A node with at most one child is replaced by that child. A node with two children takes
    /// the value of its in-order successor (the smallest value of its right subtree) and the
    /// successor's node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::Tree;
    ///
    /// let mut tree: Tree<_> = [50, 30, 70, 60, 80].into_iter().collect();
    ///
    /// assert!(tree.delete(&70));
    /// assert_eq!(tree.preorder(), vec![50, 30, 80, 60]);
    /// assert!(!tree.delete(&70));
    /// ```
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root;
        let mut depth = 0usize;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => {
                    tracing::trace!(depth, "delete missed");
                    return false;
                }
            };
            // Only reborrow `link` when stepping down, so it is free again once we stop.
            link = match ordering {
                Ordering::Equal => break,
                Ordering::Less => match link {
                    Some(node) => &mut node.left,
                    None => return false,
                },
                Ordering::Greater => match link {
                    Some(node) => &mut node.right,
                    None => return false,
                },
            };
            depth += 1;
        }

        let Some(node) = link else {
            return false;
        };
        let promoted_successor = node.left.is_some() && node.right.is_some();
        if promoted_successor {
            if let Some(successor) = Node::take_min(&mut node.right) {
                node.value = successor;
            }
        } else {
            let child = node.left.take().or_else(|| node.right.take());
            *link = child;
        }
        tracing::trace!(depth, promoted_successor, "deleted value");
        true
    }

    /// Returns the smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        self.root.as_deref().map(Node::min)
    }

    /// Returns the largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        self.root.as_deref().map(Node::max)
    }

    /// Values in ascending order (left subtree, node, right subtree).
    pub fn inorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Values in node, left subtree, right subtree order.
    pub fn preorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        let mut stack: Vec<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = stack.pop() {
            out.push(node.value.clone());
            stack.extend(node.right.as_deref());
            stack.extend(node.left.as_deref());
        }
        out
    }

    /// Values in left subtree, right subtree, node order.
    pub fn postorder(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        self.try_fold_postorder(
            || (),
            |node, (), ()| {
                out.push(node.value.clone());
                Some(())
            },
        );
        out
    }

    /// Values breadth first: the root, then every level from left to right.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::Tree;
    ///
    /// let tree: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.level_order(), vec![50, 30, 70, 20, 40, 60, 80]);
    /// ```
    pub fn level_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut out = Vec::new();
        let mut queue: VecDeque<&Node<T>> = self.root.as_deref().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            out.push(node.value.clone());
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        out
    }

    /// Number of edges on the longest path from the root to a leaf. An empty tree has a height
    /// of -1 and a lone root has a height of 0.
    pub fn height(&self) -> isize {
        self.try_fold_postorder(|| -1, |_, left, right| Some(1 + left.max(right)))
            .unwrap_or(-1)
    }

    /// Returns whether, for every node, the heights of its two subtrees differ by at most one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_sort::Tree;
    ///
    /// let bushy: Tree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    /// let stringy: Tree<_> = (1..=5).collect();
    ///
    /// assert!(bushy.is_balanced());
    /// assert!(!stringy.is_balanced());
    /// ```
    pub fn is_balanced(&self) -> bool {
        // Folds heights counting an empty subtree as 0, giving up at the first lopsided node.
        self.try_fold_postorder(
            || 0usize,
            |_, left, right| (left.abs_diff(right) <= 1).then(|| 1 + left.max(right)),
        )
        .is_some()
    }

    /// Number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Returns whether the tree holds no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Removes every value from the tree.
    pub fn clear(&mut self) {
        // Unlinks nodes one at a time so a list-shaped tree doesn't recurse once per node.
        let mut stack: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }

    /// Borrowing iterator over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.root)
    }

    /// Combines results bottom-up with an explicit stack: `combine` sees each node together with
    /// the results of its left and right subtrees, and `empty` stands in for a missing subtree.
    /// Stops with `None` as soon as `combine` does. An empty tree yields `Some(empty())`.
    fn try_fold_postorder<R>(
        &self,
        empty: impl Fn() -> R,
        mut combine: impl FnMut(&Node<T>, R, R) -> Option<R>,
    ) -> Option<R> {
        let Some(root) = self.root.as_deref() else {
            return Some(empty());
        };
        // Nodes flagged `true` already have both subtrees folded onto `folded`.
        let mut pending = vec![(root, false)];
        let mut folded = Vec::new();
        while let Some((node, children_folded)) = pending.pop() {
            if children_folded {
                // The left subtree is finished before the right one starts, so the right
                // result sits on top.
                let right = match node.right {
                    Some(_) => folded.pop().expect("right subtree folded before its parent"),
                    None => empty(),
                };
                let left = match node.left {
                    Some(_) => folded.pop().expect("left subtree folded before its parent"),
                    None => empty(),
                };
                folded.push(combine(node, left, right)?);
            } else {
                pending.push((node, true));
                pending.extend(node.right.as_deref().map(|right| (right, false)));
                pending.extend(node.left.as_deref().map(|left| (left, false)));
            }
        }
        folded.pop()
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
        for value in iter {
            self.insert(value);
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

/// Renders one value per line in preorder, indenting each line two spaces per level of depth.
///
/// ```
/// use bst_sort::Tree;
///
/// let tree: Tree<_> = [50, 30, 70, 20].into_iter().collect();
/// assert_eq!(tree.to_string(), "50\n  30\n    20\n  70\n");
///
/// assert_eq!(Tree::<i32>::new().to_string(), "Empty BST");
/// ```
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root.as_deref() {
            None => write!(f, "Empty BST"),
            Some(root) => {
                let mut stack = vec![(root, 0)];
                while let Some((node, depth)) = stack.pop() {
                    writeln!(f, "{:indent$}{}", "", node.value, indent = depth * 2)?;
                    stack.extend(node.right.as_deref().map(|right| (right, depth + 1)));
                    stack.extend(node.left.as_deref().map(|left| (left, depth + 1)));
                }
                Ok(())
            }
        }
    }
}

/// In-order iterator returned by [`Tree::iter`]. It keeps the path of pending ancestors on an
/// explicit stack.
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    fn new(root: &'a Link<T>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// Smallest value in the subtree rooted at this node.
    fn min(&self) -> &T {
        let mut node = self;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        &node.value
    }

    fn max(&self) -> &T {
        let mut node = self;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        &node.value
    }

    /// Unlinks the node holding the smallest value under `link`, splicing its right child into
    /// its place, and returns that value.
    fn take_min(mut link: &mut Link<T>) -> Option<T> {
        while link.as_ref()?.left.is_some() {
            link = &mut link.as_mut()?.left;
        }
        let node = link.take()?;
        let Node { value, right, .. } = *node;
        *link = right;
        Some(value)
    }
}
