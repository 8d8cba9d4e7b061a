//! Arena-backed tree model.
//!
//! One [`Tree`] owns all of its nodes in a `Vec`; nodes reference each other
//! through copyable [`NodeId`]s. Arena slots are never reused, so a `NodeId`
//! doubles as the node's insertion index within its tree.

use std::fmt;

/// Handle to a node inside one [`Tree`].
///
/// Ids are only meaningful for the tree that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Insertion index of the node within its tree (0 = root).
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single node: display label, structural position and the derived branch
/// prefix filled in by the grower.
#[derive(Debug, Clone)]
pub struct TreeNode {
    pub label: String,
    /// 0-based distance from the root.
    pub depth: usize,
    /// Printable prefix ending in the direct connector plus one space; empty
    /// for roots and before the grower has run.
    pub branch: String,
    pub parent: Option<NodeId>,
    /// Insertion order is significant and preserved by every traversal.
    pub children: Vec<NodeId>,
}

/// One root plus its exclusively-owned subtree.
#[derive(Debug, Clone)]
pub struct Tree {
    nodes: Vec<TreeNode>,
}

/// Ordered sequence of independent trees produced by one conversion.
pub type Forest = Vec<Tree>;

impl Tree {
    /// Creates a tree consisting of a single root node.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            nodes: vec![TreeNode {
                label: label.into(),
                depth: 0,
                branch: String::new(),
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &TreeNode {
        &self.nodes[id.0]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TreeNode {
        &mut self.nodes[id.0]
    }

    /// Appends or reuses a child of `parent`: if a direct child with the same
    /// label exists it is returned unchanged, which lets converging paths be
    /// built by chained `add` calls.
    pub fn add(&mut self, parent: NodeId, label: impl Into<String>) -> NodeId {
        let label = label.into();
        if let Some(existing) = self.find_child(parent, &label) {
            return existing;
        }
        self.push_child(parent, label)
    }

    /// Appends a new child unconditionally. The parsing path uses this so that
    /// duplicate sibling labels from text input stay distinct nodes.
    pub(crate) fn push_child(&mut self, parent: NodeId, label: impl Into<String>) -> NodeId {
        let depth = self.nodes[parent.0].depth + 1;
        let id = NodeId(self.nodes.len());
        self.nodes.push(TreeNode {
            label: label.into(),
            depth,
            branch: String::new(),
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Looks up a direct child of `parent` by label.
    pub fn find_child(&self, parent: NodeId, label: &str) -> Option<NodeId> {
        self.nodes[parent.0]
            .children
            .iter()
            .copied()
            .find(|&c| self.nodes[c.0].label == label)
    }

    /// True when `id` is the last child of its parent by insertion order.
    /// The root has no siblings and counts as last.
    pub fn is_last_child(&self, id: NodeId) -> bool {
        match self.nodes[id.0].parent {
            Some(parent) => self.nodes[parent.0].children.last() == Some(&id),
            None => true,
        }
    }

    /// Number of nodes in the tree (at least 1).
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Maximum depth of any node; a lone root has depth 0.
    pub fn depth(&self) -> usize {
        self.nodes.iter().map(|n| n.depth).max().unwrap_or(0)
    }

    /// Depth-first pre-order traversal, children in insertion order.
    pub fn iter(&self) -> TreeIter<'_> {
        TreeIter {
            tree: self,
            stack: vec![self.root()],
        }
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, node) in self.iter() {
            writeln!(f, "{}{}", node.branch, node.label)?;
        }
        Ok(())
    }
}

pub struct TreeIter<'a> {
    tree: &'a Tree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for TreeIter<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        // Push children in reverse for left-to-right traversal
        for &child in node.children.iter().rev() {
            self.stack.push(child);
        }
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_chained_adds_when_building_then_depths_follow_parents() {
        let mut tree = Tree::new("root");
        let a = tree.add(tree.root(), "a");
        let b = tree.add(a, "b");

        assert_eq!(tree.node(tree.root()).depth, 0);
        assert_eq!(tree.node(a).depth, 1);
        assert_eq!(tree.node(b).depth, 2);
        assert_eq!(tree.node(b).parent, Some(a));
    }

    #[test]
    fn given_duplicate_label_when_adding_then_returns_existing_child() {
        let mut tree = Tree::new("root");
        let first = tree.add(tree.root(), "child");
        let second = tree.add(tree.root(), "child");

        assert_eq!(first, second);
        assert_eq!(tree.node(tree.root()).children.len(), 1);
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn given_pushed_duplicates_when_building_then_siblings_stay_distinct() {
        let mut tree = Tree::new("root");
        let first = tree.push_child(tree.root(), "child");
        let second = tree.push_child(tree.root(), "child");

        assert_ne!(first, second);
        assert_eq!(tree.node(tree.root()).children.len(), 2);
    }

    #[test]
    fn given_siblings_when_querying_then_only_final_one_is_last() {
        let mut tree = Tree::new("root");
        let a = tree.add(tree.root(), "a");
        let b = tree.add(tree.root(), "b");
        let c = tree.add(tree.root(), "c");

        assert!(!tree.is_last_child(a));
        assert!(!tree.is_last_child(b));
        assert!(tree.is_last_child(c));
        assert!(tree.is_last_child(tree.root()));
    }

    #[test]
    fn given_nested_tree_when_iterating_then_visits_depth_first_in_insertion_order() {
        let mut tree = Tree::new("root");
        let a = tree.add(tree.root(), "a");
        tree.add(a, "a1");
        tree.add(a, "a2");
        tree.add(tree.root(), "b");

        let labels: Vec<_> = tree.iter().map(|(_, n)| n.label.as_str()).collect();
        assert_eq!(labels, vec!["root", "a", "a1", "a2", "b"]);
    }

    #[test]
    fn given_fresh_trees_then_insertion_indices_restart_at_zero() {
        let mut first = Tree::new("one");
        first.add(first.root(), "x");

        let second = Tree::new("two");
        assert_eq!(second.root().index(), 0);
        assert_eq!(first.root().index(), 0);
        assert_eq!(first.node(first.root()).children[0].index(), 1);
    }
}
