//! Binary tree filled in level order
//!
//! Not a search tree: values land in the first open child slot found by a
//! breadth-first scan, so the tree stays complete.

use super::{trim_trailing_gaps, Container, Insertable, StructureKind, Traversable};
use crate::step::{Cell, Marks, OpRun, Recorder, Value};
use std::collections::VecDeque;

struct TreeNode {
    value: Value,
    left: Option<Box<TreeNode>>,
    right: Option<Box<TreeNode>>,
}

impl TreeNode {
    fn leaf(value: Value) -> Box<TreeNode> {
        Box::new(TreeNode {
            value,
            left: None,
            right: None,
        })
    }
}

/// Attach a leaf under the first node with a free slot, returning that
/// node's breadth-first position and which side was used
fn attach_level_order(root: &mut TreeNode, value: Value) -> Option<(usize, &'static str)> {
    let mut queue: VecDeque<&mut TreeNode> = VecDeque::from([root]);
    let mut parent = 0;
    while let Some(node) = queue.pop_front() {
        if node.left.is_none() {
            node.left = Some(TreeNode::leaf(value));
            return Some((parent, "left"));
        }
        if node.right.is_none() {
            node.right = Some(TreeNode::leaf(value));
            return Some((parent, "right"));
        }
        if let (Some(left), Some(right)) = (node.left.as_deref_mut(), node.right.as_deref_mut()) {
            queue.push_back(left);
            queue.push_back(right);
        }
        parent += 1;
    }
    None
}

pub struct BinaryTree {
    root: Option<Box<TreeNode>>,
    size: usize,
}

impl BinaryTree {
    pub fn new() -> Self {
        BinaryTree {
            root: None,
            size: 0,
        }
    }

    /// Place `value` in the first free child slot, breadth first
    pub fn insert_level_order(&mut self, value: Value) -> OpRun {
        let placed = match self.root.as_deref_mut() {
            None => {
                self.root = Some(TreeNode::leaf(value));
                None
            }
            Some(root) => attach_level_order(root, value),
        };
        self.size += 1;

        let (parent, message) = match placed {
            None => (0, format!("Inserted {} as root", value)),
            Some((parent, side)) => (parent, format!("Inserted {} as {} child", value, side)),
        };
        OpRun::single(self.to_array(), Marks::one(parent), message)
    }

    /// Visit left subtree, node, right subtree. Positions use complete-tree
    /// numbering (`2i + 1`, `2i + 2`), which is exact only while the tree is
    /// complete.
    pub fn inorder_traversal(&self) -> OpRun {
        if self.root.is_none() {
            return OpRun::single(Vec::new(), Marks::NONE, "Tree is empty");
        }
        let cells = self.to_array();
        let mut rec = Recorder::new();
        let mut stack: Vec<(&TreeNode, usize)> = Vec::new();
        let mut current = self.root.as_deref().map(|node| (node, 0));

        loop {
            while let Some((node, index)) = current {
                stack.push((node, index));
                current = node.left.as_deref().map(|left| (left, 2 * index + 1));
            }
            let Some((node, index)) = stack.pop() else {
                break;
            };
            rec.emit(
                cells.clone(),
                Marks::one(index),
                format!("Visited {}", node.value),
            );
            current = node.right.as_deref().map(|right| (right, 2 * index + 2));
        }
        rec.finish()
    }
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Insertable for BinaryTree {
    fn insert(&mut self, value: Value) -> OpRun {
        self.insert_level_order(value)
    }
}

impl Traversable for BinaryTree {
    fn traverse(&self) -> OpRun {
        self.inorder_traversal()
    }
}

impl Container for BinaryTree {
    fn kind(&self) -> StructureKind {
        StructureKind::BinaryTree
    }

    fn to_array(&self) -> Vec<Cell> {
        let mut cells = Vec::new();
        if self.root.is_none() {
            return cells;
        }
        let mut queue: VecDeque<Option<&TreeNode>> = VecDeque::from([self.root.as_deref()]);
        while let Some(slot) = queue.pop_front() {
            match slot {
                Some(node) => {
                    cells.push(Some(node.value));
                    queue.push_back(node.left.as_deref());
                    queue.push_back(node.right.as_deref());
                }
                None => cells.push(None),
            }
        }
        trim_trailing_gaps(cells)
    }

    fn len(&self) -> usize {
        self.size
    }

    fn insertable(&mut self) -> Option<&mut dyn Insertable> {
        Some(self)
    }

    fn traversable(&self) -> Option<&dyn Traversable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(values: &[Value]) -> BinaryTree {
        let mut tree = BinaryTree::new();
        for &v in values {
            tree.insert_level_order(v).for_each(drop);
        }
        tree
    }

    #[test]
    fn insertion_fills_levels_left_to_right() {
        let mut tree = BinaryTree::new();
        let messages: Vec<_> = [10, 20, 30, 40]
            .iter()
            .map(|&v| tree.insert_level_order(v).next().unwrap())
            .map(|s| (s.message, s.marks))
            .collect();
        assert_eq!(
            messages,
            vec![
                ("Inserted 10 as root".to_string(), Marks::one(0)),
                ("Inserted 20 as left child".to_string(), Marks::one(0)),
                ("Inserted 30 as right child".to_string(), Marks::one(0)),
                ("Inserted 40 as left child".to_string(), Marks::one(1)),
            ]
        );
        assert_eq!(tree.to_array(), vec![Some(10), Some(20), Some(30), Some(40)]);
        assert_eq!(tree.len(), 4);
    }

    #[test]
    fn values_are_not_ordered() {
        let tree = tree_of(&[5, 9, 1]);
        assert_eq!(tree.to_array(), vec![Some(5), Some(9), Some(1)]);
    }

    #[test]
    fn inorder_visits_with_complete_tree_positions() {
        let tree = tree_of(&[1, 2, 3, 4, 5]);
        let steps: Vec<_> = tree.inorder_traversal().collect();
        let visits: Vec<_> = steps
            .iter()
            .map(|s| (s.message.clone(), s.marks.iter().next().unwrap()))
            .collect();
        assert_eq!(
            visits,
            vec![
                ("Visited 4".to_string(), 3),
                ("Visited 2".to_string(), 1),
                ("Visited 5".to_string(), 4),
                ("Visited 1".to_string(), 0),
                ("Visited 3".to_string(), 2),
            ]
        );
    }

    #[test]
    fn empty_tree_traversal_narrates() {
        let tree = BinaryTree::new();
        let steps: Vec<_> = tree.inorder_traversal().collect();
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].message, "Tree is empty");
        assert!(steps[0].marks.is_empty());
        assert!(tree.to_array().is_empty());
    }
}
